//! Screen contract: one logical view per type, constructed fresh on every
//! navigation so local interaction state never leaks across visits.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::theme::{Theme, ThemeVariant};

mod about_us;
mod account_deletion;
mod blockchain_education;
mod dashboard;
mod edit_profile;
mod fragment_detail;
mod help_faq;
mod kyc;
mod marketplace;
mod notifications;
mod onboarding;
mod portfolio;
mod profile;
mod property_detail;
mod purchase_tracker;
mod secondary_market;
mod settings;
mod splash;
mod terms;

pub use about_us::AboutUsScreen;
pub use account_deletion::AccountDeletionScreen;
pub use blockchain_education::BlockchainEducationScreen;
pub use dashboard::DashboardScreen;
pub use edit_profile::EditProfileScreen;
pub use fragment_detail::FragmentDetailScreen;
pub use help_faq::HelpFaqScreen;
pub use kyc::KycScreen;
pub use marketplace::MarketplaceScreen;
pub use notifications::NotificationsScreen;
pub use onboarding::OnboardingScreen;
pub use portfolio::PortfolioScreen;
pub use profile::ProfileScreen;
pub use property_detail::PropertyDetailScreen;
pub use purchase_tracker::PurchaseTrackerScreen;
pub use secondary_market::SecondaryMarketScreen;
pub use settings::SettingsScreen;
pub use splash::SplashScreen;
pub use terms::TermsScreen;

pub trait Screen {
    fn title(&self) -> &'static str;

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme);

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult;

    fn footer_actions(&self) -> Vec<FooterAction>;

    /// True while a text field is capturing keystrokes; the runtime then
    /// routes every key here instead of to the chrome.
    fn wants_text_input(&self) -> bool {
        false
    }

    /// Per-frame hook for cosmetic timers (spinners, countdowns).
    fn tick(&mut self) {}
}

/// Outcome of a key press, applied by the runtime. All cross-screen
/// transitions flow through `Navigate`; screens never touch navigation
/// state directly.
pub enum ScreenResult {
    Continue,
    Navigate(ScreenId, Option<String>),
    SetTheme(ThemeVariant),
    Notify(String),
    /// Apply several results in order (e.g. toast then navigate).
    Batch(Vec<ScreenResult>),
    Quit,
}

impl ScreenResult {
    pub fn go(screen: ScreenId) -> Self {
        ScreenResult::Navigate(screen, None)
    }

    pub fn go_with(screen: ScreenId, id: impl Into<String>) -> Self {
        ScreenResult::Navigate(screen, Some(id.into()))
    }

    /// Back affordance: resolve the fixed parent of `screen`. Screens
    /// without a parent treat Esc as a no-op.
    pub fn back_from(screen: ScreenId) -> Self {
        match screen.back_target() {
            Some(parent) => ScreenResult::Navigate(parent, None),
            None => ScreenResult::Continue,
        }
    }

    pub fn notify(message: impl Into<String>) -> Self {
        ScreenResult::Notify(message.into())
    }
}
