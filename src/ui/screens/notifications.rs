use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::data::models::Notification;
use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

pub struct NotificationsScreen {
    /// Screen-local copy so "mark read" stays a visit-scoped simulation.
    entries: Vec<Notification>,
    cursor: usize,
    list_state: ListState,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            entries: crate::data::provider().notifications.clone(),
            cursor: 0,
            list_state,
        }
    }
}

impl Screen for NotificationsScreen {
    fn title(&self) -> &'static str {
        "Notifications"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let header = Rect {
            height: 1.min(area.height),
            ..area
        };
        let unread = self.entries.iter().filter(|n| !n.read).count();
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Notifications", theme.title_style()),
                Span::styled(format!("   {unread} unread"), theme.muted_style()),
            ])),
            header,
        );
        let body = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|n| {
                let title_style = if n.read {
                    theme.muted_style()
                } else {
                    theme.title_style()
                };
                let marker = if n.read { "  " } else { "● " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, theme.brand_style()),
                        Span::styled(format!("{} ", n.kind.glyph()), theme.positive_style()),
                        Span::styled(n.title.clone(), title_style),
                        Span::styled(format!("  {}", n.time), theme.muted_style()),
                    ]),
                    Line::from(Span::styled(format!("    {}", n.message), theme.muted_style())),
                ])
            })
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
                self.cursor = (self.cursor + 1).min(self.entries.len().saturating_sub(1));
                ScreenResult::Continue
            }
            KeyCode::Enter => {
                if let Some(entry) = self.entries.get_mut(self.cursor) {
                    entry.read = true;
                }
                ScreenResult::Continue
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::Notifications),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("↑↓", "Browse"),
            FooterAction::new("Enter", "Mark read"),
            FooterAction::new("Esc", "Back to dashboard"),
        ]
    }
}
