use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::Theme;

/// Minimal single-line text field. The owning screen decides when it is
/// focused and feeds it key events; there is no cursor movement, only
/// append/backspace, which is all the prototype forms need.
pub struct TextInput {
    label: &'static str,
    placeholder: &'static str,
    value: String,
}

impl TextInput {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
        }
    }

    pub fn with_value(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            placeholder: "",
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_style = if focused {
            theme.brand_style()
        } else {
            theme.panel_block_style()
        };
        let content = if self.value.is_empty() && !focused {
            Line::from(Span::styled(self.placeholder, theme.muted_style()))
        } else {
            let mut spans = vec![Span::styled(self.value.clone(), theme.body_style())];
            if focused {
                spans.push(Span::styled("█", theme.brand_style()));
            }
            Line::from(spans)
        };
        let widget = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(self.label),
        );
        f.render_widget(widget, area);
    }
}
