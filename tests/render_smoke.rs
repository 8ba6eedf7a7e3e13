//! Every screen must render into a reasonable terminal size without
//! panicking, in both theme variants, with and without chrome.

use crossterm::event::{KeyCode, KeyEvent};
use oneproperty_cli::ui::navigation::NavigationState;
use oneproperty_cli::ui::registry::build_screen;
use oneproperty_cli::ui::{App, Screen, ScreenId, Theme, ThemeVariant};
use ratatui::{Terminal, backend::TestBackend};

#[test]
fn every_screen_renders_standalone() {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
        let theme = Theme::new(variant);
        for id in ScreenId::ALL {
            let state = NavigationState {
                current_screen: id,
                ..NavigationState::default()
            };
            let mut screen = build_screen(id, &state);
            // A few ticks so spinner frames advance at least once.
            for _ in 0..3 {
                screen.tick();
            }
            terminal
                .draw(|f| {
                    let area = f.area();
                    screen.render(f, area, &theme);
                })
                .unwrap_or_else(|e| panic!("{id:?} failed to render: {e}"));
        }
    }
}

#[test]
fn detail_screens_render_with_unknown_ids() {
    let backend = TestBackend::new(90, 30);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let theme = Theme::default();
    let state = NavigationState {
        selected_property_id: "does-not-exist".to_string(),
        selected_fragment_id: "nope".to_string(),
        ..NavigationState::default()
    };
    for id in [ScreenId::PropertyDetail, ScreenId::FragmentDetail] {
        let mut screen = build_screen(id, &state);
        terminal
            .draw(|f| {
                let area = f.area();
                screen.render(f, area, &theme);
            })
            .unwrap_or_else(|e| panic!("{id:?} failed to render: {e}"));
    }
}

#[test]
fn full_app_renders_with_chrome_and_menu() {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let mut app = App::new(Some(ThemeVariant::Dark));

    // Splash (chrome hidden).
    terminal.draw(|f| app.render(f)).expect("splash renders");

    // Jump past the dwell timer by driving onboarding directly.
    std::thread::sleep(std::time::Duration::from_millis(2850));
    app.tick();
    for _ in 0..5 {
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }
    terminal.draw(|f| app.render(f)).expect("dashboard renders");

    // Open the side menu overlay on top of the dashboard.
    app.handle_key(KeyEvent::from(KeyCode::Char('m')));
    terminal.draw(|f| app.render(f)).expect("menu overlay renders");
}
