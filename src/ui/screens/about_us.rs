use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

const LEADERSHIP: [(&str, &str); 3] = [
    ("Arjun Mehta", "CEO & Co-Founder"),
    ("Priya Sharma", "CTO & Co-Founder"),
    ("Vikram Reddy", "Head of Investments"),
];

pub struct AboutUsScreen {
    scroll: u16,
}

impl AboutUsScreen {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Screen for AboutUsScreen {
    fn title(&self) -> &'static str {
        "About Us"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::styled("About Us", theme.title_style())),
            Line::from(""),
            Line::from(Span::styled("One Property", theme.brand_style())).centered(),
            Line::from(Span::styled(
                "Luxury Fractional Real Estate Platform",
                theme.muted_style(),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled("Who We Are", theme.brand_style())),
            Line::from(Span::styled(
                "One Property is India's premier fractional real estate investment \
                 platform, making luxury property ownership accessible through \
                 blockchain-powered tokenization. Founded in 2024, we've democratized \
                 access to premium real estate across India's top markets.",
                theme.body_style(),
            )),
            Line::from(""),
            Line::from(Span::styled("Our Mission", theme.brand_style())),
            Line::from(Span::styled(
                "To democratize luxury real estate investment by enabling fractional \
                 ownership with full transparency, legal protection through Power of \
                 Attorney, and blockchain-verified trust.",
                theme.body_style(),
            )),
            Line::from(""),
            Line::from(Span::styled("Leadership", theme.brand_style())),
        ];
        for (name, role) in LEADERSHIP {
            lines.push(Line::from(vec![
                Span::styled(format!("  {name}  "), theme.body_style()),
                Span::styled(role, theme.muted_style()),
            ]));
        }
        lines.extend([
            Line::from(""),
            Line::from(Span::styled("Contact", theme.brand_style())),
            Line::from(Span::styled("  ✉ support@oneproperty.in", theme.muted_style())),
            Line::from(Span::styled("  ☎ +91 80 1234 5678", theme.muted_style())),
            Line::from(Span::styled(
                "  ⚲ HSR Layout, Bangalore 560102",
                theme.muted_style(),
            )),
        ]);

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .scroll((self.scroll, 0)),
            area,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1).min(20);
                ScreenResult::Continue
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::AboutUs),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("↑↓", "Scroll"),
            FooterAction::new("Esc", "Back to profile"),
        ]
    }
}
