//! Fire-and-forget notification surface. Screens emit messages after
//! simulated submit actions; delivery is best-effort and toasts expire on
//! their own.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::theme::Theme;

const TOAST_TTL: Duration = Duration::from_millis(2500);
const MAX_VISIBLE: usize = 3;

struct Toast {
    message: String,
    expires_at: Instant,
}

pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("toast: {message}");
        self.entries.push(Toast {
            message,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    pub fn prune(&mut self) {
        let now = Instant::now();
        self.entries.retain(|t| t.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, f: &mut Frame, full_area: Rect, theme: &Theme) {
        let visible = self.entries.iter().rev().take(MAX_VISIBLE);
        for (i, toast) in visible.enumerate() {
            let width = (toast.message.chars().count() as u16 + 4)
                .min(full_area.width.saturating_sub(2));
            let height = 3u16;
            let y_offset = 3 + (i as u16) * height;
            if y_offset + height > full_area.height {
                break;
            }
            let area = Rect {
                x: full_area.x + full_area.width.saturating_sub(width + 1),
                y: full_area.y + full_area.height.saturating_sub(y_offset + 1),
                width,
                height,
            };
            f.render_widget(Clear, area);
            let widget = Paragraph::new(Line::from(Span::styled(
                toast.message.clone(),
                theme.body_style(),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.brand_style()),
            );
            f.render_widget(widget, area);
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
