use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// One key hint in the footer line.
pub struct FooterAction {
    pub key: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

impl FooterAction {
    pub fn new(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            description,
            enabled: true,
        }
    }

    pub fn disabled(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            description,
            enabled: false,
        }
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, theme: &Theme, actions: &[FooterAction]) {
    let mut spans = Vec::new();
    for (i, action) in actions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", theme.muted_style()));
        }
        if action.enabled {
            spans.push(Span::styled(action.key, theme.brand_style()));
            spans.push(Span::styled(
                format!(" {}", action.description),
                theme.muted_style(),
            ));
        } else {
            spans.push(Span::styled(
                format!("{} {}", action.key, action.description),
                theme.muted_style(),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
