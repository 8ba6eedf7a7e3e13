use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::{Theme, ThemeVariant};

const LANGUAGES: [&str; 3] = ["English", "Hindi", "Kannada"];
const REGIONS: [&str; 3] = ["India", "UAE", "Singapore"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Row {
    Theme,
    NotificationsMaster,
    AlertInvestment,
    AlertRental,
    AlertMarket,
    AlertSecurity,
    ChangePassword,
    TwoFactor,
    Language,
    Region,
}

const ROWS: [Row; 10] = [
    Row::Theme,
    Row::NotificationsMaster,
    Row::AlertInvestment,
    Row::AlertRental,
    Row::AlertMarket,
    Row::AlertSecurity,
    Row::ChangePassword,
    Row::TwoFactor,
    Row::Language,
    Row::Region,
];

/// Settings are session-local simulations except the theme, which is the one
/// value handed back to the navigator.
pub struct SettingsScreen {
    theme_variant: ThemeVariant,
    cursor: usize,
    list_state: ListState,
    notifications_on: bool,
    alert_investment: bool,
    alert_rental: bool,
    alert_market: bool,
    alert_security: bool,
    two_factor: bool,
    language: usize,
    region: usize,
}

impl SettingsScreen {
    pub fn new(theme_variant: ThemeVariant) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            theme_variant,
            cursor: 0,
            list_state,
            notifications_on: true,
            alert_investment: true,
            alert_rental: true,
            alert_market: false,
            alert_security: true,
            two_factor: false,
            language: 0,
            region: 0,
        }
    }

    fn activate(&mut self) -> ScreenResult {
        match ROWS[self.cursor] {
            Row::Theme => {
                self.theme_variant = match self.theme_variant {
                    ThemeVariant::Light => ThemeVariant::Dark,
                    ThemeVariant::Dark => ThemeVariant::Light,
                };
                ScreenResult::SetTheme(self.theme_variant)
            }
            Row::NotificationsMaster => {
                self.notifications_on = !self.notifications_on;
                ScreenResult::Continue
            }
            Row::AlertInvestment => {
                self.alert_investment = !self.alert_investment;
                ScreenResult::Continue
            }
            Row::AlertRental => {
                self.alert_rental = !self.alert_rental;
                ScreenResult::Continue
            }
            Row::AlertMarket => {
                self.alert_market = !self.alert_market;
                ScreenResult::Continue
            }
            Row::AlertSecurity => {
                self.alert_security = !self.alert_security;
                ScreenResult::Continue
            }
            Row::ChangePassword => {
                ScreenResult::notify("Password reset link sent to rahul@example.com")
            }
            Row::TwoFactor => {
                self.two_factor = !self.two_factor;
                ScreenResult::Continue
            }
            Row::Language => {
                self.language = (self.language + 1) % LANGUAGES.len();
                ScreenResult::Continue
            }
            Row::Region => {
                self.region = (self.region + 1) % REGIONS.len();
                ScreenResult::Continue
            }
        }
    }

    fn toggle_label(on: bool) -> &'static str {
        if on { "[on ]" } else { "[off]" }
    }

    fn row_line(&self, row: Row, theme: &Theme) -> Line<'static> {
        let toggle_style = |on: bool| {
            if on {
                theme.positive_style()
            } else {
                theme.muted_style()
            }
        };
        match row {
            Row::Theme => Line::from(vec![
                Span::styled("Appearance        ", theme.body_style()),
                Span::styled(
                    match self.theme_variant {
                        ThemeVariant::Light => "☀ Light",
                        ThemeVariant::Dark => "☾ Dark",
                    },
                    theme.brand_style(),
                ),
            ]),
            Row::NotificationsMaster => Line::from(vec![
                Span::styled("Notifications     ", theme.body_style()),
                Span::styled(
                    Self::toggle_label(self.notifications_on),
                    toggle_style(self.notifications_on),
                ),
            ]),
            Row::AlertInvestment => Line::from(vec![
                Span::styled("  Investment Alerts ", theme.body_style()),
                Span::styled(
                    Self::toggle_label(self.alert_investment && self.notifications_on),
                    toggle_style(self.alert_investment && self.notifications_on),
                ),
            ]),
            Row::AlertRental => Line::from(vec![
                Span::styled("  Rental Payouts    ", theme.body_style()),
                Span::styled(
                    Self::toggle_label(self.alert_rental && self.notifications_on),
                    toggle_style(self.alert_rental && self.notifications_on),
                ),
            ]),
            Row::AlertMarket => Line::from(vec![
                Span::styled("  Market Updates    ", theme.body_style()),
                Span::styled(
                    Self::toggle_label(self.alert_market && self.notifications_on),
                    toggle_style(self.alert_market && self.notifications_on),
                ),
            ]),
            Row::AlertSecurity => Line::from(vec![
                Span::styled("  Security Alerts   ", theme.body_style()),
                Span::styled(
                    Self::toggle_label(self.alert_security && self.notifications_on),
                    toggle_style(self.alert_security && self.notifications_on),
                ),
            ]),
            Row::ChangePassword => Line::from(Span::styled("Change Password", theme.body_style())),
            Row::TwoFactor => Line::from(vec![
                Span::styled("Two-Factor Auth   ", theme.body_style()),
                Span::styled(
                    Self::toggle_label(self.two_factor),
                    toggle_style(self.two_factor),
                ),
            ]),
            Row::Language => Line::from(vec![
                Span::styled("Language          ", theme.body_style()),
                Span::styled(LANGUAGES[self.language], theme.brand_style()),
            ]),
            Row::Region => Line::from(vec![
                Span::styled("Region            ", theme.body_style()),
                Span::styled(REGIONS[self.region], theme.brand_style()),
            ]),
        }
    }
}

impl Screen for SettingsScreen {
    fn title(&self) -> &'static str {
        "Settings"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let header_area = Rect {
            height: 2.min(area.height),
            ..area
        };
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Settings", theme.title_style())),
                Line::from(Span::styled(
                    "Appearance · Notifications · Security · Regional",
                    theme.muted_style(),
                )),
            ]),
            header_area,
        );
        let body = Rect {
            y: area.y + 2,
            height: area.height.saturating_sub(2),
            ..area
        };

        let items: Vec<ListItem> = ROWS
            .iter()
            .map(|row| ListItem::new(self.row_line(*row, theme)))
            .collect();
        self.list_state.select(Some(self.cursor));
        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ");
        f.render_stateful_widget(list, body, &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(ROWS.len() - 1);
                ScreenResult::Continue
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Esc => ScreenResult::back_from(ScreenId::Settings),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("↑↓", "Rows"),
            FooterAction::new("Enter", "Toggle / cycle"),
            FooterAction::new("Esc", "Back to profile"),
        ]
    }
}
