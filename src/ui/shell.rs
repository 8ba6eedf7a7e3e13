//! Persistent chrome: status bar, bottom tab bar, side menu overlay.
//!
//! The Shell knows the four tabs and the side-menu entries; it never sees
//! the full screen enumeration. Tab taps surface as [`ChromeIntent::TabTap`]
//! and are mapped to screens by the runtime.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::navigation::{ScreenId, TabId};
use crate::ui::theme::Theme;

/// Side-menu shortcuts. Each entry is a direct navigate with no id.
const MENU_ENTRIES: [(&str, ScreenId); 3] = [
    ("Notifications", ScreenId::Notifications),
    ("Secondary Market", ScreenId::SecondaryMarket),
    ("Settings", ScreenId::Settings),
];

pub enum ChromeIntent {
    TabTap(TabId),
    MenuNavigate(ScreenId),
}

pub struct Shell {
    menu_open: bool,
    menu_cursor: usize,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            menu_open: false,
            menu_cursor: 0,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Menu state is Shell-local and resets on every navigation away.
    pub fn reset_menu(&mut self) {
        self.menu_open = false;
        self.menu_cursor = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent, active_tab: Option<TabId>) -> Option<ChromeIntent> {
        if self.menu_open {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.menu_cursor = self.menu_cursor.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.menu_cursor = (self.menu_cursor + 1).min(MENU_ENTRIES.len() - 1);
                }
                KeyCode::Enter => {
                    let (_, screen) = MENU_ENTRIES[self.menu_cursor];
                    self.reset_menu();
                    return Some(ChromeIntent::MenuNavigate(screen));
                }
                KeyCode::Esc | KeyCode::Char('m') => self.reset_menu(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char('1') => Some(ChromeIntent::TabTap(TabId::Home)),
            KeyCode::Char('2') => Some(ChromeIntent::TabTap(TabId::Marketplace)),
            KeyCode::Char('3') => Some(ChromeIntent::TabTap(TabId::Portfolio)),
            KeyCode::Char('4') => Some(ChromeIntent::TabTap(TabId::Profile)),
            KeyCode::Tab => {
                let next = active_tab.map(TabId::next).unwrap_or(TabId::Home);
                Some(ChromeIntent::TabTap(next))
            }
            KeyCode::Char('m') => {
                self.menu_open = true;
                None
            }
            _ => None,
        }
    }

    pub fn render_status_bar(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        clock: &str,
        unread: usize,
    ) {
        let bell = if unread > 0 {
            format!("◉{unread}")
        } else {
            "  ".to_string()
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Min(0),
                Constraint::Length(16),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(" One Property", theme.brand_style()))),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(clock.to_string(), theme.body_style())))
                .centered(),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(bell, theme.error_style()),
                Span::styled(" ▂▄▆█ ", theme.muted_style()),
                Span::styled("80% ", theme.body_style()),
            ]))
            .right_aligned(),
            chunks[2],
        );
    }

    pub fn render_tab_bar(&self, f: &mut Frame, area: Rect, theme: &Theme, active: Option<TabId>) {
        let constraints = vec![Constraint::Ratio(1, TabId::ALL.len() as u32); TabId::ALL.len()];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, tab) in TabId::ALL.into_iter().enumerate() {
            let is_active = active == Some(tab);
            let style = if is_active {
                theme.brand_style()
            } else {
                theme.muted_style()
            };
            let lines = vec![
                Line::from(Span::styled(tab.glyph(), style)).centered(),
                Line::from(Span::styled(tab.label(), style)).centered(),
            ];
            f.render_widget(Paragraph::new(lines), cells[i]);
        }
    }

    pub fn render_menu(&self, f: &mut Frame, full_area: Rect, theme: &Theme) {
        if !self.menu_open {
            return;
        }
        let width = 28u16.min(full_area.width.saturating_sub(2));
        let height = (MENU_ENTRIES.len() as u16 + 2).min(full_area.height);
        let overlay = Rect {
            x: full_area.x + 1,
            y: full_area.y + 1,
            width,
            height,
        };
        f.render_widget(Clear, overlay);

        let mut lines = Vec::new();
        for (i, (label, _)) in MENU_ENTRIES.iter().enumerate() {
            let style = if i == self.menu_cursor {
                theme.selected_style()
            } else {
                theme.body_style()
            };
            lines.push(Line::from(Span::styled(format!("  {label}"), style)));
        }
        let menu = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.brand_style())
                .title("Menu"),
        );
        f.render_widget(menu, overlay);
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn digit_keys_tap_tabs() {
        let mut shell = Shell::new();
        match shell.handle_key(press(KeyCode::Char('2')), Some(TabId::Home)) {
            Some(ChromeIntent::TabTap(TabId::Marketplace)) => {}
            _ => panic!("expected marketplace tab tap"),
        }
    }

    #[test]
    fn tab_key_cycles_from_active_tab() {
        let mut shell = Shell::new();
        match shell.handle_key(press(KeyCode::Tab), Some(TabId::Profile)) {
            Some(ChromeIntent::TabTap(TabId::Home)) => {}
            _ => panic!("expected wrap-around to home"),
        }
    }

    #[test]
    fn menu_selection_emits_navigate_and_closes() {
        let mut shell = Shell::new();
        assert!(shell.handle_key(press(KeyCode::Char('m')), None).is_none());
        assert!(shell.menu_open());
        shell.handle_key(press(KeyCode::Down), None);
        match shell.handle_key(press(KeyCode::Enter), None) {
            Some(ChromeIntent::MenuNavigate(ScreenId::SecondaryMarket)) => {}
            _ => panic!("expected secondary market entry"),
        }
        assert!(!shell.menu_open());
    }

    #[test]
    fn open_menu_swallows_tab_keys() {
        let mut shell = Shell::new();
        shell.handle_key(press(KeyCode::Char('m')), None);
        assert!(shell.handle_key(press(KeyCode::Char('1')), None).is_none());
        assert!(shell.menu_open());
    }
}
