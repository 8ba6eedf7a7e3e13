use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::components::FooterAction;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

/// Brand splash. No interactive elements; the navigator's dwell timer moves
/// the session on to onboarding.
pub struct SplashScreen {
    frames: u64,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Screen for SplashScreen {
    fn title(&self) -> &'static str {
        "One Property"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Length(6),
                Constraint::Min(0),
            ])
            .split(area);

        // Pulse the trailing dots at roughly 3 Hz.
        let dots = match (self.frames / 20) % 4 {
            0 => "",
            1 => "·",
            2 => "· ·",
            _ => "· · ·",
        };

        let lines = vec![
            Line::from(Span::styled("╭───╮", theme.brand_style())).centered(),
            Line::from(Span::styled("│ O │", theme.brand_style())).centered(),
            Line::from(Span::styled("╰───╯", theme.brand_style())).centered(),
            Line::from(""),
            Line::from(Span::styled("One Property", theme.title_style())).centered(),
            Line::from(Span::styled(
                "T R U S T E D   F R A C T I O N A L   O W N E R S H I P",
                theme.muted_style(),
            ))
            .centered(),
        ];
        f.render_widget(Paragraph::new(lines), chunks[1]);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(dots, theme.brand_style())).centered()),
            chunks[2],
        );
    }

    fn handle_key(&mut self, _key: KeyEvent) -> ScreenResult {
        ScreenResult::Continue
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        Vec::new()
    }

    fn tick(&mut self) {
        self.frames = self.frames.wrapping_add(1);
    }
}
