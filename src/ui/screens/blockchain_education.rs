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

const STEPS: [(&str, &str); 5] = [
    (
        "Property Tokenized",
        "The real estate property is legally verified and converted into digital \
         ownership tokens on the blockchain. Each token (fragment) represents a \
         proportional stake.",
    ),
    (
        "Ownership Recorded",
        "Your purchase is permanently recorded on an immutable blockchain ledger. \
         This creates a tamper-proof record of ownership that cannot be altered or \
         disputed.",
    ),
    (
        "Token Issued",
        "A unique digital token is minted and assigned to your wallet. This token \
         contains your ownership details, fragment IDs, and verification hash.",
    ),
    (
        "Power of Attorney Generated",
        "A legally-binding Power of Attorney (POA) document is generated and backed \
         by your blockchain record, giving you verifiable legal rights over your \
         property fraction.",
    ),
    (
        "Blockchain Validation",
        "Continuous validation ensures your ownership remains secure. Dynamic token \
         verification cross-references the blockchain ledger in real-time to protect \
         against fraud.",
    ),
];

const CONCEPTS: [(&str, &str); 3] = [
    (
        "Tokenization",
        "Converting property ownership into digital tokens that can be bought, sold, \
         and verified.",
    ),
    (
        "Dynamic Token Verification",
        "Real-time cross-referencing of your token against the blockchain ledger to \
         ensure authenticity.",
    ),
    (
        "Ledger Anchoring",
        "Proof hashes of ownership records permanently stored on a public blockchain.",
    ),
];

pub struct BlockchainEducationScreen {
    scroll: u16,
}

impl BlockchainEducationScreen {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Screen for BlockchainEducationScreen {
    fn title(&self) -> &'static str {
        "Blockchain Protection"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::styled("Blockchain Protection", theme.title_style())),
            Line::from(Span::styled(
                "How blockchain protects your property: ownership is secured through \
                 tokenization — converting real-world property rights into verifiable \
                 digital assets on an immutable ledger.",
                theme.muted_style(),
            )),
            Line::from(""),
        ];
        for (i, (title, body)) in STEPS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("Step {} ", i + 1), theme.chip_active_style()),
                Span::styled(format!(" {title}"), theme.brand_style()),
            ]));
            lines.push(Line::from(Span::styled(format!("  {body}"), theme.body_style())));
            lines.push(Line::from(Span::styled("  │", theme.muted_style())));
        }
        lines.push(Line::from(Span::styled("Key Concepts", theme.brand_style())));
        for (term, definition) in CONCEPTS {
            lines.push(Line::from(vec![
                Span::styled(format!("  ▸ {term}: "), theme.body_style()),
                Span::styled(definition, theme.muted_style()),
            ]));
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
                self.scroll = self.scroll.saturating_add(1).min(30);
                ScreenResult::Continue
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::BlockchainEducation),
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
