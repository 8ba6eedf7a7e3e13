use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, PartialEq, Eq)]
enum StepStatus {
    Done,
    Active,
    Pending,
}

const TRACKER_STEPS: [(&str, StepStatus); 6] = [
    ("Request Created", StepStatus::Done),
    ("Verification in Progress", StepStatus::Active),
    ("Site Visit Scheduling", StepStatus::Pending),
    ("Documentation Preparation", StepStatus::Pending),
    ("Power of Attorney Issuance", StepStatus::Pending),
    ("Final Payment & Registration", StepStatus::Pending),
];

const NEXT_STEPS: [&str; 4] = [
    "Site visit scheduling",
    "Agreement signing",
    "Power of Attorney transfer",
    "Final documentation",
];

pub struct PurchaseTrackerScreen {
    frames: u64,
}

impl PurchaseTrackerScreen {
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Screen for PurchaseTrackerScreen {
    fn title(&self) -> &'static str {
        "Purchase Journey"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let done = TRACKER_STEPS
            .iter()
            .filter(|(_, s)| *s == StepStatus::Done)
            .count();
        let ratio = done as f64 / TRACKER_STEPS.len() as f64;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(8),
                Constraint::Length(7),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Span::styled("Purchase Journey", theme.title_style())),
            chunks[0],
        );
        f.render_widget(
            Gauge::default()
                .ratio(ratio)
                .label(Span::styled(
                    format!("{}% complete", (ratio * 100.0).round()),
                    theme.body_style(),
                ))
                .gauge_style(Style::default().fg(theme.accent_gold).bg(theme.bg_surface)),
            chunks[1],
        );

        let pulse = if (self.frames / 16) % 2 == 0 { "◉" } else { "○" };
        let mut lines = Vec::new();
        for (label, status) in TRACKER_STEPS {
            let (glyph, style, note) = match status {
                StepStatus::Done => ("✓", theme.positive_style(), "Completed"),
                StepStatus::Active => (pulse, theme.brand_style(), "In progress"),
                StepStatus::Pending => ("·", theme.muted_style(), "Pending"),
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {glyph} "), style),
                Span::styled(format!("{label:<30}"), style),
                Span::styled(note, theme.muted_style()),
            ]));
            lines.push(Line::from(Span::styled(" │", theme.muted_style())));
        }
        lines.pop();
        f.render_widget(Paragraph::new(lines), chunks[2]);

        let mut info = vec![
            Line::from(Span::styled("What happens next?", theme.brand_style())),
            Line::from(Span::styled(
                "Our One Property team will connect with you for:",
                theme.muted_style(),
            )),
        ];
        for item in NEXT_STEPS {
            info.push(Line::from(Span::styled(format!("  • {item}"), theme.body_style())));
        }
        info.push(Line::from(Span::styled(
            "✉ All documents will be emailed upon completion",
            theme.positive_style(),
        )));
        f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Esc => ScreenResult::back_from(ScreenId::PurchaseTracker),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![FooterAction::new("Esc", "Back to marketplace")]
    }

    fn tick(&mut self) {
        self.frames = self.frames.wrapping_add(1);
    }
}
