//! End-to-end navigation behavior driven through the runtime's key handler.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use oneproperty_cli::ui::{App, ScreenId, TabId, ThemeVariant};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

/// Walk a fresh session past splash and onboarding onto the dashboard.
fn app_on_dashboard() -> App {
    let mut app = App::new(None);
    assert_eq!(app.current_screen(), ScreenId::Splash);

    // The splash dwell timer is the only time-driven transition.
    std::thread::sleep(Duration::from_millis(2850));
    app.tick();
    assert_eq!(app.current_screen(), ScreenId::Onboarding);

    // Five onboarding steps, each advanced with Enter.
    for _ in 0..5 {
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.current_screen(), ScreenId::Dashboard);
    app
}

#[test]
fn splash_advances_to_onboarding_then_dashboard() {
    let app = app_on_dashboard();
    assert_eq!(app.navigator().active_tab(), Some(TabId::Home));
    assert!(!app.navigator().hide_chrome());
}

#[test]
fn chrome_is_hidden_until_onboarding_completes() {
    let app = App::new(None);
    assert!(app.navigator().hide_chrome());
    assert_eq!(app.navigator().active_tab(), None);
}

#[test]
fn tab_keys_land_on_canonical_screens() {
    let mut app = app_on_dashboard();

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.current_screen(), ScreenId::Marketplace);
    assert_eq!(app.navigator().active_tab(), Some(TabId::Marketplace));

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_screen(), ScreenId::Portfolio);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.current_screen(), ScreenId::Profile);

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.current_screen(), ScreenId::Dashboard);
}

#[test]
fn tab_key_cycles_through_tabs() {
    let mut app = app_on_dashboard();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_screen(), ScreenId::Marketplace);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_screen(), ScreenId::Portfolio);
}

#[test]
fn marketplace_selection_sets_sticky_property_id() {
    let mut app = app_on_dashboard();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen(), ScreenId::PropertyDetail);
    assert!(!app.navigator().state().selected_property_id.is_empty());
    // Fragment selection is untouched by a property selection.
    assert!(app.navigator().state().selected_fragment_id.is_empty());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_screen(), ScreenId::Marketplace);
}

#[test]
fn dashboard_fragment_shortcut_sets_sticky_fragment_id() {
    let mut app = app_on_dashboard();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen(), ScreenId::FragmentDetail);
    assert_eq!(app.navigator().state().selected_fragment_id, "f-1");
    assert_eq!(app.navigator().active_tab(), Some(TabId::Portfolio));

    // Unrelated navigation leaves the sticky id in place.
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.navigator().state().selected_fragment_id, "f-1");
}

#[test]
fn side_menu_navigates_and_closes_on_navigation() {
    let mut app = app_on_dashboard();
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen(), ScreenId::SecondaryMarket);
    // The menu swallowed no further keys: tab keys work again immediately.
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.current_screen(), ScreenId::Dashboard);
}

#[test]
fn settings_theme_row_flips_theme_without_moving() {
    let mut app = app_on_dashboard();
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen(), ScreenId::Settings);
    assert_eq!(app.navigator().theme(), ThemeVariant::Light);

    press(&mut app, KeyCode::Enter); // first row toggles appearance
    assert_eq!(app.navigator().theme(), ThemeVariant::Dark);
    assert_eq!(app.current_screen(), ScreenId::Settings);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.navigator().theme(), ThemeVariant::Light);
}

#[test]
fn settings_back_returns_to_profile_parent() {
    let mut app = app_on_dashboard();
    press(&mut app, KeyCode::Char('4'));
    // Profile menu: fourth entry is Settings.
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_screen(), ScreenId::Settings);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.current_screen(), ScreenId::Profile);
}

#[test]
fn detail_screen_revisit_without_id_shows_previous_entity() {
    let mut app = app_on_dashboard();
    // Select the second holding from the dashboard quick list.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.navigator().state().selected_fragment_id, "f-2");

    // Leave, then come back through the portfolio tab without selecting.
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.navigator().state().selected_fragment_id, "f-2");
}

#[test]
fn ctrl_q_requests_quit() {
    let mut app = app_on_dashboard();
    app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}
