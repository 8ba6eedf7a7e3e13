//! Maps every [`ScreenId`] to a freshly constructed screen object.
//!
//! Construction happens on every navigation, which is what guarantees the
//! "local state does not survive leaving a screen" contract. The two detail
//! screens receive their sticky id; everything else is parameterless.

use crate::ui::navigation::{NavigationState, ScreenId};
use crate::ui::screens::{
    AboutUsScreen, AccountDeletionScreen, BlockchainEducationScreen, DashboardScreen,
    EditProfileScreen, FragmentDetailScreen, HelpFaqScreen, KycScreen, MarketplaceScreen,
    NotificationsScreen, OnboardingScreen, PortfolioScreen, ProfileScreen, PropertyDetailScreen,
    PurchaseTrackerScreen, Screen, SecondaryMarketScreen, SettingsScreen, SplashScreen,
    TermsScreen,
};

pub fn build_screen(id: ScreenId, nav: &NavigationState) -> Box<dyn Screen> {
    match id {
        ScreenId::Splash => Box::new(SplashScreen::new()),
        ScreenId::Onboarding => Box::new(OnboardingScreen::new()),
        ScreenId::Dashboard => Box::new(DashboardScreen::new()),
        ScreenId::Marketplace => Box::new(MarketplaceScreen::new()),
        ScreenId::Portfolio => Box::new(PortfolioScreen::new()),
        ScreenId::PropertyDetail => Box::new(PropertyDetailScreen::new(&nav.selected_property_id)),
        ScreenId::FragmentDetail => Box::new(FragmentDetailScreen::new(&nav.selected_fragment_id)),
        ScreenId::SecondaryMarket => Box::new(SecondaryMarketScreen::new()),
        ScreenId::Settings => Box::new(SettingsScreen::new(nav.theme)),
        ScreenId::EditProfile => Box::new(EditProfileScreen::new()),
        ScreenId::AboutUs => Box::new(AboutUsScreen::new()),
        ScreenId::Terms => Box::new(TermsScreen::new()),
        ScreenId::HelpFaq => Box::new(HelpFaqScreen::new()),
        ScreenId::Notifications => Box::new(NotificationsScreen::new()),
        ScreenId::AccountDeletion => Box::new(AccountDeletionScreen::new()),
        ScreenId::Profile => Box::new(ProfileScreen::new()),
        ScreenId::BlockchainEducation => Box::new(BlockchainEducationScreen::new()),
        ScreenId::Kyc => Box::new(KycScreen::new()),
        ScreenId::PurchaseTracker => Box::new(PurchaseTrackerScreen::new()),
    }
}
