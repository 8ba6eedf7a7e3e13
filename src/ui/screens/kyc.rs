use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::data::provider;
use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

const STEPS: [&str; 4] = ["Personal", "Documents", "Video KYC", "Status"];
const DOCS: [(&str, &str); 4] = [
    ("Aadhaar Card", "Government ID"),
    ("PAN Card", "Tax ID"),
    ("Address Proof", "Utility Bill / Bank Statement"),
    ("Passport Photo", "Recent photograph"),
];
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Four-step verification flow. Everything resolves locally; the status step
/// keeps an "approval in progress" spinner running for the life of the visit.
pub struct KycScreen {
    step: usize,
    show_bank: bool,
    uploaded: [bool; 4],
    doc_cursor: usize,
    list_state: ListState,
    frames: u64,
}

impl KycScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            step: 0,
            show_bank: true,
            uploaded: [false; 4],
            doc_cursor: 0,
            list_state,
            frames: 0,
        }
    }

    fn uploaded_count(&self) -> usize {
        self.uploaded.iter().filter(|u| **u).count()
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);
        let ratio = (self.step + 1) as f64 / STEPS.len() as f64;
        f.render_widget(
            Gauge::default()
                .ratio(ratio)
                .label(Span::styled(
                    format!(
                        "Step {} of {} · {}% complete",
                        self.step + 1,
                        STEPS.len(),
                        (ratio * 100.0).round()
                    ),
                    theme.body_style(),
                ))
                .gauge_style(Style::default().fg(theme.accent_gold).bg(theme.bg_surface)),
            chunks[0],
        );
        let mut spans = Vec::new();
        for (i, step) in STEPS.iter().enumerate() {
            let style = if i <= self.step {
                theme.brand_style()
            } else {
                theme.muted_style()
            };
            spans.push(Span::styled(format!(" {step} "), style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
    }

    fn render_personal(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let user = &provider().user;
        let mut lines = vec![
            Line::from(Span::styled("Enter your personal details", theme.muted_style())),
            Line::from(""),
        ];
        let rows = [
            ("Full Name", user.name.clone()),
            ("Email", user.email.clone()),
            ("Primary Phone", user.phone.clone()),
            ("Occupation", user.profession.clone()),
            ("Address", "HSR Layout, Bangalore".to_string()),
            ("Place of Birth", "Bangalore, India".to_string()),
            ("Nominee", "Meera Kapoor (Spouse)".to_string()),
        ];
        for (label, value) in rows {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<16}"), theme.muted_style()),
                Span::styled(value, theme.body_style()),
            ]));
        }
        lines.push(Line::from(""));
        if self.show_bank {
            lines.push(Line::from(Span::styled("Bank Details  (b hides)", theme.brand_style())));
            lines.push(Line::from(vec![
                Span::styled("Bank Name       ", theme.muted_style()),
                Span::styled("State Bank of India", theme.body_style()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Account Number  ", theme.muted_style()),
                Span::styled("XXXX XXXX 7710", theme.body_style()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("IFSC Code       ", theme.muted_style()),
                Span::styled("SBIN0001234", theme.body_style()),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                "Bank details skipped — you can complete them later during the \
                 buy/sell process. (b shows)",
                theme.muted_style(),
            )));
        }
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_documents(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(area);
        f.render_widget(
            Paragraph::new(Span::styled("Upload required documents", theme.muted_style())),
            chunks[0],
        );
        let items: Vec<ListItem> = DOCS
            .iter()
            .enumerate()
            .map(|(i, (name, desc))| {
                let (status, style) = if self.uploaded[i] {
                    ("✓ Uploaded", theme.positive_style())
                } else {
                    ("⇪ Pending", theme.muted_style())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{name:<18}"), theme.body_style()),
                    Span::styled(format!("{desc:<32}"), theme.muted_style()),
                    Span::styled(status, style),
                ]))
            })
            .collect();
        self.list_state.select(Some(self.doc_cursor));
        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ");
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("{}/4 documents uploaded", self.uploaded_count()),
                theme.brand_style(),
            )),
            chunks[2],
        );
    }

    fn render_video(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled("Video KYC Verification", theme.title_style())),
            Line::from(Span::styled(
                "A brief video verification is required to confirm your identity. \
                 Please ensure good lighting and a clear background.",
                theme.muted_style(),
            )),
            Line::from(""),
            Line::from(Span::styled("Instructions:", theme.brand_style())),
            Line::from(Span::styled("  1. Keep your face clearly visible", theme.body_style())),
            Line::from(Span::styled(
                "  2. Hold your Aadhaar/PAN card next to your face",
                theme.body_style(),
            )),
            Line::from(Span::styled("  3. Speak your full name clearly", theme.body_style())),
            Line::from(Span::styled("  4. The session takes ~2 minutes", theme.body_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Enter starts the video verification",
                theme.muted_style(),
            )),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let spinner = SPINNER[(self.frames / 8) as usize % SPINNER.len()];
        let lines = vec![
            Line::from(Span::styled("Verification in Progress", theme.title_style())),
            Line::from(Span::styled(
                "Your documents and video verification are being reviewed. Approval \
                 will be granted within 24 hours.",
                theme.muted_style(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ✓ ", theme.positive_style()),
                Span::styled("Personal Details", theme.positive_style()),
            ]),
            Line::from(vec![
                Span::styled("  ✓ ", theme.positive_style()),
                Span::styled("Document Upload", theme.positive_style()),
            ]),
            Line::from(vec![
                Span::styled("  ✓ ", theme.positive_style()),
                Span::styled("Video KYC", theme.positive_style()),
            ]),
            Line::from(vec![
                Span::styled(format!("  {spinner} "), theme.brand_style()),
                Span::styled("Approval — in progress", theme.brand_style()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "✉ You will receive a confirmation email once approved",
                theme.muted_style(),
            )),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}

impl Screen for KycScreen {
    fn title(&self) -> &'static str {
        "KYC Verification"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);
        f.render_widget(
            Paragraph::new(Span::styled("KYC Verification", theme.title_style())),
            chunks[0],
        );
        self.render_progress(f, chunks[1], theme);
        match self.step {
            0 => self.render_personal(f, chunks[2], theme),
            1 => self.render_documents(f, chunks[2], theme),
            2 => self.render_video(f, chunks[2], theme),
            _ => self.render_status(f, chunks[2], theme),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Esc => {
                // Inside the flow Esc steps back one step; from the first
                // step it exits to the profile parent.
                if self.step > 0 {
                    self.step -= 1;
                    ScreenResult::Continue
                } else {
                    ScreenResult::back_from(ScreenId::Kyc)
                }
            }
            KeyCode::Enter => {
                if self.step + 1 < STEPS.len() {
                    self.step += 1;
                    ScreenResult::Continue
                } else {
                    ScreenResult::Batch(vec![
                        ScreenResult::notify("KYC submitted — approval within 24 hours"),
                        ScreenResult::go(ScreenId::Profile),
                    ])
                }
            }
            KeyCode::Char('b') if self.step == 0 => {
                self.show_bank = !self.show_bank;
                ScreenResult::Continue
            }
            KeyCode::Up | KeyCode::Char('k') if self.step == 1 => {
                self.doc_cursor = self.doc_cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') if self.step == 1 => {
                self.doc_cursor = (self.doc_cursor + 1).min(DOCS.len() - 1);
                ScreenResult::Continue
            }
            KeyCode::Char(' ') if self.step == 1 => {
                self.uploaded[self.doc_cursor] = !self.uploaded[self.doc_cursor];
                ScreenResult::Continue
            }
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        let mut actions = vec![match self.step {
            2 => FooterAction::new("Enter", "Start video verification"),
            3 => FooterAction::new("Enter", "Back to profile"),
            _ => FooterAction::new("Enter", "Continue"),
        }];
        if self.step == 0 {
            actions.push(FooterAction::new("b", "Bank details"));
            actions.push(FooterAction::new("Esc", "Complete later"));
        } else {
            actions.push(FooterAction::new("Esc", "Previous step"));
        }
        if self.step == 1 {
            actions.insert(1, FooterAction::new("Space", "Toggle upload"));
        }
        actions
    }

    fn tick(&mut self) {
        self.frames = self.frames.wrapping_add(1);
    }
}
