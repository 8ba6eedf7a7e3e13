//! Single source of truth for "where is the user, and with what context".
//!
//! There is no navigation stack: one mutable current screen plus two sticky
//! entity ids. Back affordances target a fixed parent screen each.

use std::time::{Duration, Instant};

use crate::ui::theme::ThemeVariant;

/// How long the splash screen dwells before auto-advancing to onboarding.
pub const SPLASH_DWELL: Duration = Duration::from_millis(2800);

/// Closed set of screens. Every member is classified into a tab (or none)
/// by [`ScreenId::tab`]; adding a screen forces both matches below to be
/// extended before the crate compiles again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Splash,
    Onboarding,
    Dashboard,
    Marketplace,
    Portfolio,
    PropertyDetail,
    FragmentDetail,
    SecondaryMarket,
    Settings,
    EditProfile,
    AboutUs,
    Terms,
    HelpFaq,
    Notifications,
    AccountDeletion,
    Profile,
    BlockchainEducation,
    Kyc,
    PurchaseTracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Home,
    Marketplace,
    Portfolio,
    Profile,
}

impl ScreenId {
    /// Tab membership. `None` marks the chrome-less screens.
    pub fn tab(self) -> Option<TabId> {
        match self {
            ScreenId::Splash | ScreenId::Onboarding => None,
            ScreenId::Dashboard | ScreenId::Notifications => Some(TabId::Home),
            ScreenId::Marketplace
            | ScreenId::PropertyDetail
            | ScreenId::SecondaryMarket
            | ScreenId::PurchaseTracker => Some(TabId::Marketplace),
            ScreenId::Portfolio | ScreenId::FragmentDetail => Some(TabId::Portfolio),
            ScreenId::Profile
            | ScreenId::Settings
            | ScreenId::EditProfile
            | ScreenId::AboutUs
            | ScreenId::Terms
            | ScreenId::HelpFaq
            | ScreenId::Kyc
            | ScreenId::BlockchainEducation
            | ScreenId::AccountDeletion => Some(TabId::Profile),
        }
    }

    /// Fixed parent for the Esc/back affordance. Root screens have none.
    pub fn back_target(self) -> Option<ScreenId> {
        match self {
            ScreenId::Splash
            | ScreenId::Onboarding
            | ScreenId::Dashboard
            | ScreenId::Marketplace
            | ScreenId::Portfolio
            | ScreenId::Profile => None,
            ScreenId::PropertyDetail | ScreenId::PurchaseTracker => Some(ScreenId::Marketplace),
            ScreenId::FragmentDetail => Some(ScreenId::Portfolio),
            ScreenId::SecondaryMarket | ScreenId::Notifications | ScreenId::EditProfile => {
                Some(ScreenId::Dashboard)
            }
            ScreenId::Settings
            | ScreenId::AboutUs
            | ScreenId::Terms
            | ScreenId::HelpFaq
            | ScreenId::Kyc
            | ScreenId::BlockchainEducation
            | ScreenId::AccountDeletion => Some(ScreenId::Profile),
        }
    }

    pub const ALL: [ScreenId; 19] = [
        ScreenId::Splash,
        ScreenId::Onboarding,
        ScreenId::Dashboard,
        ScreenId::Marketplace,
        ScreenId::Portfolio,
        ScreenId::PropertyDetail,
        ScreenId::FragmentDetail,
        ScreenId::SecondaryMarket,
        ScreenId::Settings,
        ScreenId::EditProfile,
        ScreenId::AboutUs,
        ScreenId::Terms,
        ScreenId::HelpFaq,
        ScreenId::Notifications,
        ScreenId::AccountDeletion,
        ScreenId::Profile,
        ScreenId::BlockchainEducation,
        ScreenId::Kyc,
        ScreenId::PurchaseTracker,
    ];
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::Home,
        TabId::Marketplace,
        TabId::Portfolio,
        TabId::Profile,
    ];

    /// Canonical landing screen per tab. This mapping deliberately lives
    /// outside the Shell, which only ever sees `TabId` values.
    pub fn screen(self) -> ScreenId {
        match self {
            TabId::Home => ScreenId::Dashboard,
            TabId::Marketplace => ScreenId::Marketplace,
            TabId::Portfolio => ScreenId::Portfolio,
            TabId::Profile => ScreenId::Profile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TabId::Home => "Home",
            TabId::Marketplace => "Market",
            TabId::Portfolio => "Portfolio",
            TabId::Profile => "Profile",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            TabId::Home => "⌂",
            TabId::Marketplace => "◈",
            TabId::Portfolio => "▣",
            TabId::Profile => "●",
        }
    }

    pub fn next(self) -> TabId {
        match self {
            TabId::Home => TabId::Marketplace,
            TabId::Marketplace => TabId::Portfolio,
            TabId::Portfolio => TabId::Profile,
            TabId::Profile => TabId::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_screen: ScreenId,
    pub selected_property_id: String,
    pub selected_fragment_id: String,
    pub theme: ThemeVariant,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_screen: ScreenId::Splash,
            selected_property_id: String::new(),
            selected_fragment_id: String::new(),
            theme: ThemeVariant::Light,
        }
    }
}

/// Owns [`NavigationState`] and the splash dwell timer. Constructed once at
/// startup; every transition goes through [`Navigator::navigate`] or
/// [`Navigator::set_theme`].
pub struct Navigator {
    state: NavigationState,
    splash_deadline: Option<Instant>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: NavigationState::default(),
            splash_deadline: Some(Instant::now() + SPLASH_DWELL),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_screen(&self) -> ScreenId {
        self.state.current_screen
    }

    pub fn theme(&self) -> ThemeVariant {
        self.state.theme
    }

    /// Move to `screen`. An id is only recorded when it matches the targeted
    /// detail screen; the other entity id is left untouched, so returning to
    /// a detail screen without a fresh id redisplays the previous entity.
    pub fn navigate(&mut self, screen: ScreenId, id: Option<&str>) {
        if let Some(id) = id {
            match screen {
                ScreenId::PropertyDetail => {
                    self.state.selected_property_id = id.to_string();
                }
                ScreenId::FragmentDetail => {
                    self.state.selected_fragment_id = id.to_string();
                }
                _ => {}
            }
        }
        self.state.current_screen = screen;
        // Any navigation before the splash timer fires disarms it, so a late
        // fire can never yank the user back to onboarding.
        self.splash_deadline = None;
        log::debug!("navigate -> {screen:?} (id: {id:?})");
    }

    /// Unconditional overwrite, independent of screen state.
    pub fn set_theme(&mut self, theme: ThemeVariant) {
        self.state.theme = theme;
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.state.current_screen.tab()
    }

    pub fn hide_chrome(&self) -> bool {
        matches!(
            self.state.current_screen,
            ScreenId::Splash | ScreenId::Onboarding
        )
    }

    /// Fire the splash dwell transition when its deadline has passed.
    /// Returns true when a transition happened. Fires at most once.
    pub fn poll_splash_timer(&mut self) -> bool {
        self.poll_splash_timer_at(Instant::now())
    }

    pub fn poll_splash_timer_at(&mut self, now: Instant) -> bool {
        match self.splash_deadline {
            Some(deadline) if now >= deadline => {
                self.splash_deadline = None;
                self.navigate(ScreenId::Onboarding, None);
                true
            }
            _ => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_splash_light() {
        let nav = Navigator::new();
        assert_eq!(nav.current_screen(), ScreenId::Splash);
        assert_eq!(nav.theme(), ThemeVariant::Light);
        assert!(nav.state().selected_property_id.is_empty());
        assert!(nav.state().selected_fragment_id.is_empty());
    }

    #[test]
    fn every_screen_maps_to_a_tab_per_membership_table() {
        let mut nav = Navigator::new();
        for screen in ScreenId::ALL {
            nav.navigate(screen, None);
            assert_eq!(nav.active_tab(), screen.tab());
        }
        nav.navigate(ScreenId::Marketplace, None);
        assert_eq!(nav.active_tab(), Some(TabId::Marketplace));
        nav.navigate(ScreenId::FragmentDetail, None);
        assert_eq!(nav.active_tab(), Some(TabId::Portfolio));
        nav.navigate(ScreenId::PurchaseTracker, None);
        assert_eq!(nav.active_tab(), Some(TabId::Marketplace));
    }

    #[test]
    fn property_id_update_leaves_fragment_id_alone() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::FragmentDetail, Some("f-3"));
        nav.navigate(ScreenId::PropertyDetail, Some("p-7"));
        assert_eq!(nav.state().selected_property_id, "p-7");
        assert_eq!(nav.state().selected_fragment_id, "f-3");
    }

    #[test]
    fn sticky_ids_survive_unrelated_navigation() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::PropertyDetail, Some("p-7"));
        nav.navigate(ScreenId::FragmentDetail, Some("f-3"));
        nav.navigate(ScreenId::Dashboard, None);
        nav.navigate(ScreenId::FragmentDetail, None);
        assert_eq!(nav.state().selected_fragment_id, "f-3");
        assert_eq!(nav.state().selected_property_id, "p-7");
    }

    #[test]
    fn id_is_ignored_for_non_detail_screens() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Settings, Some("p-9"));
        assert!(nav.state().selected_property_id.is_empty());
        assert!(nav.state().selected_fragment_id.is_empty());
    }

    #[test]
    fn splash_timer_fires_exactly_once() {
        let mut nav = Navigator::new();
        let late = Instant::now() + SPLASH_DWELL + Duration::from_millis(50);
        assert!(nav.poll_splash_timer_at(late));
        assert_eq!(nav.current_screen(), ScreenId::Onboarding);
        // A second elapse of the same timer must not re-fire.
        nav.navigate(ScreenId::Dashboard, None);
        assert!(!nav.poll_splash_timer_at(late + SPLASH_DWELL));
        assert_eq!(nav.current_screen(), ScreenId::Dashboard);
    }

    #[test]
    fn splash_timer_does_not_fire_early() {
        let mut nav = Navigator::new();
        assert!(!nav.poll_splash_timer_at(Instant::now()));
        assert_eq!(nav.current_screen(), ScreenId::Splash);
    }

    #[test]
    fn navigation_before_dwell_cancels_the_timer() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Dashboard, None);
        let late = Instant::now() + SPLASH_DWELL + Duration::from_secs(1);
        assert!(!nav.poll_splash_timer_at(late));
        assert_eq!(nav.current_screen(), ScreenId::Dashboard);
    }

    #[test]
    fn set_theme_touches_only_the_theme_field() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::PropertyDetail, Some("p-2"));
        let before = nav.state().clone();
        nav.set_theme(ThemeVariant::Dark);
        assert_eq!(nav.theme(), ThemeVariant::Dark);
        assert_eq!(nav.current_screen(), before.current_screen);
        assert_eq!(nav.state().selected_property_id, before.selected_property_id);
        assert_eq!(nav.state().selected_fragment_id, before.selected_fragment_id);
    }

    #[test]
    fn chrome_hidden_only_on_splash_and_onboarding() {
        let mut nav = Navigator::new();
        for screen in ScreenId::ALL {
            nav.navigate(screen, None);
            let expected = matches!(screen, ScreenId::Splash | ScreenId::Onboarding);
            assert_eq!(nav.hide_chrome(), expected, "{screen:?}");
            if expected {
                assert_eq!(nav.active_tab(), None);
            }
        }
    }

    #[test]
    fn back_targets_are_fixed_parents() {
        assert_eq!(
            ScreenId::PropertyDetail.back_target(),
            Some(ScreenId::Marketplace)
        );
        assert_eq!(
            ScreenId::FragmentDetail.back_target(),
            Some(ScreenId::Portfolio)
        );
        assert_eq!(ScreenId::EditProfile.back_target(), Some(ScreenId::Dashboard));
        assert_eq!(ScreenId::Settings.back_target(), Some(ScreenId::Profile));
        assert_eq!(ScreenId::Dashboard.back_target(), None);
    }
}
