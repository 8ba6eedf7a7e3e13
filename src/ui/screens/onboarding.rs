use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::data::provider;
use crate::ui::components::{FooterAction, TextInput};
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

const STEPS: [&str; 5] = ["Login", "Verify", "Documents", "Profile", "Welcome"];
const RISK_PROFILES: [&str; 3] = ["Conservative", "Moderate", "Aggressive"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginMethod {
    Email,
    Phone,
}

/// Five-step first-run flow. Completing the last step lands on the
/// dashboard; every input here is a simulation that resolves locally.
pub struct OnboardingScreen {
    step: usize,
    method: LoginMethod,
    login: TextInput,
    otp: String,
    risk: usize,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self {
            step: 0,
            method: LoginMethod::Email,
            login: TextInput::new("Email", "you@example.com"),
            otp: String::new(),
            risk: 1,
        }
    }

    fn advance(&mut self) -> ScreenResult {
        if self.step + 1 < STEPS.len() {
            self.step += 1;
            ScreenResult::Continue
        } else {
            ScreenResult::go(ScreenId::Dashboard)
        }
    }

    fn toggle_method(&mut self) {
        self.method = match self.method {
            LoginMethod::Email => LoginMethod::Phone,
            LoginMethod::Phone => LoginMethod::Email,
        };
        self.login = match self.method {
            LoginMethod::Email => TextInput::new("Email", "you@example.com"),
            LoginMethod::Phone => TextInput::new("Phone", "+91 98765 43210"),
        };
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans = Vec::new();
        for (i, step) in STEPS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("──", theme.muted_style()));
            }
            let style = if i <= self.step {
                theme.brand_style()
            } else {
                theme.muted_style()
            };
            spans.push(Span::styled(format!(" {step} "), style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
    }

    fn render_step(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        match self.step {
            0 => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Length(2),
                        Constraint::Length(1),
                        Constraint::Length(3),
                        Constraint::Min(0),
                    ])
                    .split(area);
                let title = vec![
                    Line::from(Span::styled("Welcome to", theme.body_style())),
                    Line::from(Span::styled("One Property", theme.brand_style())),
                ];
                f.render_widget(Paragraph::new(title), chunks[0]);
                f.render_widget(
                    Paragraph::new(Span::styled(
                        "Begin your luxury investment journey",
                        theme.muted_style(),
                    )),
                    chunks[1],
                );
                let method_line = Line::from(vec![
                    Span::styled(
                        " Email ",
                        if self.method == LoginMethod::Email {
                            theme.chip_active_style()
                        } else {
                            theme.chip_inactive_style()
                        },
                    ),
                    Span::raw(" "),
                    Span::styled(
                        " Phone ",
                        if self.method == LoginMethod::Phone {
                            theme.chip_active_style()
                        } else {
                            theme.chip_inactive_style()
                        },
                    ),
                    Span::styled("  (Tab switches)", theme.muted_style()),
                ]);
                f.render_widget(Paragraph::new(method_line), chunks[2]);
                self.login.render(f, chunks[3], theme, true);
            }
            1 => {
                let mut boxes = String::new();
                for i in 0..6 {
                    if let Some(c) = self.otp.chars().nth(i) {
                        boxes.push_str(&format!("[{c}]"));
                    } else {
                        boxes.push_str("[ ]");
                    }
                }
                let target = match self.method {
                    LoginMethod::Email => "email",
                    LoginMethod::Phone => "phone",
                };
                let lines = vec![
                    Line::from(Span::styled("Verify OTP", theme.title_style())),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("Enter the 6-digit code sent to your {target}"),
                        theme.muted_style(),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(boxes, theme.brand_style())),
                    Line::from(""),
                    Line::from(Span::styled("r Resend code", theme.muted_style())),
                ];
                f.render_widget(Paragraph::new(lines), area);
            }
            2 => {
                let lines = vec![
                    Line::from(Span::styled("Document Verification", theme.title_style())),
                    Line::from(Span::styled(
                        "Upload your identity documents for KYC",
                        theme.muted_style(),
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("  ✓ ", theme.positive_style()),
                        Span::styled("Aadhaar Card", theme.body_style()),
                        Span::styled("  Government ID", theme.muted_style()),
                    ]),
                    Line::from(vec![
                        Span::styled("  ✓ ", theme.positive_style()),
                        Span::styled("PAN Card", theme.body_style()),
                        Span::styled("  Tax ID", theme.muted_style()),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "✓ Documents uploaded successfully",
                        theme.positive_style(),
                    )),
                ];
                f.render_widget(Paragraph::new(lines), area);
            }
            3 => {
                let user = &provider().user;
                let mut lines = vec![
                    Line::from(Span::styled("Complete Profile", theme.title_style())),
                    Line::from(Span::styled("Tell us about yourself", theme.muted_style())),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Full Name     ", theme.muted_style()),
                        Span::styled(user.name.clone(), theme.body_style()),
                    ]),
                    Line::from(vec![
                        Span::styled("Contact       ", theme.muted_style()),
                        Span::styled(user.phone.clone(), theme.body_style()),
                    ]),
                    Line::from(vec![
                        Span::styled("Investor Type ", theme.muted_style()),
                        Span::styled("Individual", theme.body_style()),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Risk Profile (←/→ to choose)",
                        theme.muted_style(),
                    )),
                ];
                let mut chips = Vec::new();
                for (i, profile) in RISK_PROFILES.iter().enumerate() {
                    let style = if i == self.risk {
                        theme.chip_active_style()
                    } else {
                        theme.chip_inactive_style()
                    };
                    chips.push(Span::styled(format!(" {profile} "), style));
                    chips.push(Span::raw(" "));
                }
                lines.push(Line::from(chips));
                f.render_widget(Paragraph::new(lines), area);
            }
            _ => {
                let lines = vec![
                    Line::from(Span::styled("✓", theme.positive_style())).centered(),
                    Line::from(Span::styled("You're All Set!", theme.title_style())).centered(),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Welcome to One Property. Your gateway to luxury",
                        theme.muted_style(),
                    ))
                    .centered(),
                    Line::from(Span::styled(
                        "fractional real estate investment.",
                        theme.muted_style(),
                    ))
                    .centered(),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled(" Invest ", theme.chip_active_style()),
                        Span::styled(" Buy fractions   ", theme.muted_style()),
                        Span::styled(" Track ", theme.chip_active_style()),
                        Span::styled(" Monitor portfolio   ", theme.muted_style()),
                        Span::styled(" Earn ", theme.chip_active_style()),
                        Span::styled(" Rental income", theme.muted_style()),
                    ])
                    .centered(),
                ];
                f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
            }
        }
    }
}

impl Screen for OnboardingScreen {
    fn title(&self) -> &'static str {
        "Onboarding"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);
        self.render_progress(f, outer[0], theme);

        let ratio = (self.step + 1) as f64 / STEPS.len() as f64;
        f.render_widget(
            Gauge::default()
                .ratio(ratio)
                .gauge_style(Style::default().fg(theme.accent_gold).bg(theme.bg_surface))
                .label(""),
            outer[1],
        );

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(outer[2]);
        let body = Block::default().borders(Borders::NONE);
        f.render_widget(body, content[1]);
        self.render_step(f, content[1], theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Enter => return self.advance(),
            KeyCode::Esc => {
                if self.step > 0 {
                    self.step -= 1;
                }
                return ScreenResult::Continue;
            }
            _ => {}
        }
        match self.step {
            0 => match key.code {
                KeyCode::Tab => self.toggle_method(),
                _ => {
                    self.login.handle_key(key);
                }
            },
            1 => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() && self.otp.len() < 6 => {
                    self.otp.push(c);
                }
                KeyCode::Char('r') => self.otp.clear(),
                KeyCode::Backspace => {
                    self.otp.pop();
                }
                _ => {}
            },
            3 => match key.code {
                KeyCode::Left => self.risk = self.risk.saturating_sub(1),
                KeyCode::Right => self.risk = (self.risk + 1).min(RISK_PROFILES.len() - 1),
                _ => {}
            },
            _ => {}
        }
        ScreenResult::Continue
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        let continue_label = if self.step == STEPS.len() - 1 {
            "Enter Dashboard"
        } else {
            "Continue"
        };
        let mut actions = vec![FooterAction::new("Enter", continue_label)];
        if self.step > 0 {
            actions.push(FooterAction::new("Esc", "Previous step"));
        }
        actions
    }

    fn wants_text_input(&self) -> bool {
        matches!(self.step, 0 | 1)
    }
}
