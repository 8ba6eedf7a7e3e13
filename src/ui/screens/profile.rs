use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::data::{MockData, provider};
use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

enum Entry {
    Go(&'static str, ScreenId),
    Logout,
}

pub struct ProfileScreen {
    data: &'static MockData,
    entries: Vec<Entry>,
    cursor: usize,
    list_state: ListState,
}

impl ProfileScreen {
    pub fn new() -> Self {
        let entries = vec![
            Entry::Go("Edit Profile", ScreenId::EditProfile),
            Entry::Go("KYC Verification", ScreenId::Kyc),
            Entry::Go("Blockchain Protected System", ScreenId::BlockchainEducation),
            Entry::Go("Settings", ScreenId::Settings),
            Entry::Go("Help & FAQ", ScreenId::HelpFaq),
            Entry::Go("About Us", ScreenId::AboutUs),
            Entry::Go("Terms & Conditions", ScreenId::Terms),
            Entry::Go("Request Account Deletion", ScreenId::AccountDeletion),
            Entry::Logout,
        ];
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            data: provider(),
            entries,
            cursor: 0,
            list_state,
        }
    }
}

impl Screen for ProfileScreen {
    fn title(&self) -> &'static str {
        "Profile"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let user = &self.data.user;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let mut badge_spans = vec![
            Span::styled(format!(" {} ", user.tier), theme.chip_active_style()),
        ];
        if user.kyc_complete {
            badge_spans.push(Span::styled("  ✓ KYC", theme.positive_style()));
        } else {
            badge_spans.push(Span::styled("  KYC Pending", theme.error_style()));
        }
        f.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(format!("( {} )  ", user.initials), theme.brand_style()),
                    Span::styled("Welcome,", theme.muted_style()),
                ]),
                Line::from(Span::styled(user.name.clone(), theme.title_style())),
                Line::from(badge_spans),
            ]),
            chunks[0],
        );

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Go("KYC Verification", _) => {
                    let badge = if user.kyc_complete { "Verified" } else { "Pending" };
                    ListItem::new(Line::from(vec![
                        Span::styled("KYC Verification", theme.body_style()),
                        Span::styled(format!("  [{badge}]"), theme.positive_style()),
                    ]))
                }
                Entry::Go(label, ScreenId::AccountDeletion) => {
                    ListItem::new(Line::from(Span::styled(*label, theme.error_style())))
                }
                Entry::Go(label, _) => {
                    ListItem::new(Line::from(Span::styled(*label, theme.body_style())))
                }
                Entry::Logout => {
                    ListItem::new(Line::from(Span::styled("Logout", theme.error_style())))
                }
            })
            .collect();
        self.list_state.select(Some(self.cursor));
        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
                ScreenResult::Continue
            }
            KeyCode::Enter => match &self.entries[self.cursor] {
                Entry::Go(_, screen) => ScreenResult::go(*screen),
                Entry::Logout => ScreenResult::notify("Signed out (demo session keeps running)"),
            },
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("↑↓", "Menu"),
            FooterAction::new("Enter", "Open"),
        ]
    }
}
