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

const PROCESS: [&str; 4] = [
    "Review your owned fragments and pending payouts",
    "Transfer or sell remaining fragments",
    "Sign the account closure agreement",
    "Submit final deletion request",
];

/// The submit action is gated on the agreement checkbox; submitting flips the
/// screen into a confirmation state. Nothing is actually deleted.
pub struct AccountDeletionScreen {
    agreed: bool,
    submitted: bool,
}

impl AccountDeletionScreen {
    pub fn new() -> Self {
        Self {
            agreed: false,
            submitted: false,
        }
    }
}

impl Screen for AccountDeletionScreen {
    fn title(&self) -> &'static str {
        "Account Deletion"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.submitted {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled("✓", theme.positive_style())).centered(),
                Line::from(Span::styled("Request Submitted", theme.title_style())).centered(),
                Line::from(""),
                Line::from(Span::styled(
                    "Your account deletion request has been submitted. Our team will \
                     review and process it within 7-10 business days.",
                    theme.muted_style(),
                ))
                .centered(),
            ];
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
            return;
        }

        let checkbox = if self.agreed { "[x]" } else { "[ ]" };
        let mut lines = vec![
            Line::from(Span::styled("Account Deletion", theme.title_style())),
            Line::from(""),
            Line::from(Span::styled(
                "▲ This action is irreversible",
                theme.error_style(),
            )),
            Line::from(Span::styled(
                "Deleting your account will permanently remove all your data, \
                 fragments, and documents from One Property.",
                theme.muted_style(),
            )),
            Line::from(""),
            Line::from(Span::styled("Deletion Process", theme.brand_style())),
        ];
        for (i, step) in PROCESS.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("  {}. {step}", i + 1),
                theme.body_style(),
            )));
        }
        lines.extend([
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{checkbox} "), theme.brand_style()),
                Span::styled(
                    "I understand that this action is permanent. I have reviewed my \
                     fragments, transferred my assets, and agree to the account \
                     closure terms.",
                    theme.body_style(),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                if self.agreed {
                    "Enter submits the deletion request"
                } else {
                    "Space toggles the agreement first"
                },
                theme.muted_style(),
            )),
        ]);
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        if self.submitted {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => ScreenResult::go(ScreenId::Profile),
                _ => ScreenResult::Continue,
            };
        }
        match key.code {
            KeyCode::Char(' ') => {
                self.agreed = !self.agreed;
                ScreenResult::Continue
            }
            KeyCode::Enter if self.agreed => {
                self.submitted = true;
                ScreenResult::notify("Account deletion request submitted")
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::AccountDeletion),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        if self.submitted {
            vec![FooterAction::new("Enter", "Back to profile")]
        } else {
            vec![
                FooterAction::new("Space", "Agree"),
                if self.agreed {
                    FooterAction::new("Enter", "Submit request")
                } else {
                    FooterAction::disabled("Enter", "Submit request")
                },
                FooterAction::new("Esc", "Back to profile"),
            ]
        }
    }
}
