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

const SECTIONS: [(&str, &str); 10] = [
    (
        "1. Acceptance of Terms",
        "By accessing and using One Property's platform, you agree to be bound by \
         these Terms and Conditions. If you do not agree, please discontinue use of \
         the platform immediately.",
    ),
    (
        "2. Fractional Ownership",
        "One Property enables fractional ownership of real estate properties through \
         tokenized fragments. Each fragment represents a proportional ownership stake \
         in the underlying property, legally backed by a Power of Attorney (POA) \
         issued in the investor's name.",
    ),
    (
        "3. Investment Risks",
        "Real estate investments carry inherent risks including market fluctuations, \
         illiquidity, and potential loss of capital. Past performance does not \
         guarantee future returns. All projected yields are estimates and may vary.",
    ),
    (
        "4. KYC Requirements",
        "All investors must complete Know Your Customer (KYC) verification including \
         valid government-issued ID (Aadhaar/PAN), address proof, and bank account \
         details before making any investments.",
    ),
    (
        "5. Token & Blockchain",
        "Ownership tokens are minted on a private ledger with proof hashes anchored \
         to a public blockchain. Tokens represent legal ownership rights and can be \
         transferred through the secondary market subject to applicable regulations.",
    ),
    (
        "6. Secondary Market",
        "Fragments may be listed for sale or rent on the secondary market. One \
         Property charges a 2% transaction fee on all secondary market trades. \
         Listing prices are set by sellers and are not guaranteed.",
    ),
    (
        "7. Rental Income",
        "Rental income is distributed proportionally to fragment owners on a monthly \
         basis. Distribution dates may vary based on property management timelines \
         and tenant payment schedules.",
    ),
    (
        "8. Data Privacy",
        "Your personal data is collected, processed, and stored in compliance with \
         applicable data protection laws. We implement industry-standard encryption \
         and security measures to protect your information.",
    ),
    (
        "9. Account Termination",
        "Users may request account deletion. Upon deletion, all owned fragments must \
         be sold or transferred. One Property reserves the right to suspend accounts \
         that violate these terms.",
    ),
    (
        "10. Governing Law",
        "These terms shall be governed by the laws of India. Any disputes shall be \
         subject to the exclusive jurisdiction of the courts in Bangalore, Karnataka.",
    ),
];

pub struct TermsScreen {
    scroll: u16,
}

impl TermsScreen {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Screen for TermsScreen {
    fn title(&self) -> &'static str {
        "Terms & Conditions"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::styled("Terms & Conditions", theme.title_style())),
            Line::from(Span::styled("Last updated: February 2026", theme.muted_style())),
            Line::from(""),
        ];
        for (title, body) in SECTIONS {
            lines.push(Line::from(Span::styled(title, theme.brand_style())));
            lines.push(Line::from(Span::styled(body, theme.body_style())));
            lines.push(Line::from(""));
        }
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
                self.scroll = self.scroll.saturating_add(1).min(60);
                ScreenResult::Continue
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::Terms),
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
