use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Sparkline},
};

use crate::data::models::FragmentHolding;
use crate::data::{MockData, format, provider};
use crate::ui::components::{FooterAction, TextInput};
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

#[derive(PartialEq, Eq)]
enum Modal {
    None,
    Rent,
    Sell,
}

/// Parameterized by the sticky fragment id; falls back to the first holding
/// when the id is empty or unknown.
pub struct FragmentDetailScreen {
    data: &'static MockData,
    holding_id: String,
    show_certificate: bool,
    show_token: bool,
    modal: Modal,
    price: TextInput,
}

impl FragmentDetailScreen {
    pub fn new(holding_id: &str) -> Self {
        let data = provider();
        let resolved = data.holding_by_id(holding_id).id.clone();
        Self {
            data,
            holding_id: resolved,
            show_certificate: false,
            show_token: false,
            modal: Modal::None,
            price: TextInput::new("Price (₹)", "e.g. 15000"),
        }
    }

    fn holding(&self) -> &'static FragmentHolding {
        self.data.holding_by_id(&self.holding_id)
    }

    fn confirm_modal(&mut self) -> ScreenResult {
        let price = if self.price.is_empty() {
            "market price".to_string()
        } else {
            format!("₹{}", self.price.value())
        };
        let message = match self.modal {
            Modal::Rent => format!("Fragment listed for rent at {price}/month"),
            Modal::Sell => format!("Fragment listed for sale at {price}"),
            Modal::None => return ScreenResult::Continue,
        };
        self.modal = Modal::None;
        self.price.clear();
        ScreenResult::notify(message)
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let h = self.holding();
        let lines = vec![
            Line::from(Span::styled(h.property_name.clone(), theme.title_style())),
            Line::from(vec![
                Span::styled(format!("{}% owned", h.percentage_owned), theme.brand_style()),
                Span::styled(
                    format!("  ·  {} fragments", h.fragment_ids.len()),
                    theme.body_style(),
                ),
                Span::styled(
                    format!("  ·  cost basis {}", format::currency(h.cost_basis)),
                    theme.muted_style(),
                ),
                Span::styled(
                    format!("  ·  income {}", format::currency(h.income_received)),
                    theme.positive_style(),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("Purchased {}", format::long_date(&h.purchase_date)),
                    theme.muted_style(),
                ),
                Span::styled(
                    format!("   Next payout {}", format::long_date(&h.next_payout)),
                    theme.brand_style(),
                ),
            ]),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title("Ownership"),
            ),
            area,
        );
    }

    fn render_badges(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let h = self.holding();
        let mut lines = Vec::new();
        if h.poa_issued {
            lines.push(Line::from(Span::styled(
                "✔ Power of Attorney Issued – Owner Verified",
                theme.positive_style(),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "POA issuance in progress",
                Style::default().fg(theme.accent_warning),
            )));
        }
        let token = if self.show_token {
            Line::from(vec![
                Span::styled(format!("{} ", h.token_id), theme.body_style()),
                Span::styled(format!("· {}", h.chain_status), theme.positive_style()),
                Span::styled("   t hides", theme.muted_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled("Blockchain verified · ", theme.positive_style()),
                Span::styled("token hidden — t reveals", theme.muted_style()),
            ])
        };
        lines.push(token);
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_certificate(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let h = self.holding();
        let user = &self.data.user;
        let lines = vec![
            Line::from(Span::styled("CERTIFICATE OF OWNERSHIP", theme.muted_style())).centered(),
            Line::from(Span::styled(h.property_name.clone(), theme.brand_style())).centered(),
            Line::from(Span::styled(
                format!(
                    "This certifies that {} owns {}% ({} fragments)",
                    user.name,
                    h.percentage_owned,
                    h.fragment_ids.len()
                ),
                theme.body_style(),
            ))
            .centered(),
            Line::from(Span::styled(
                format!("of the above property · Issued {}", format::long_date(&h.issuance_date)),
                theme.muted_style(),
            ))
            .centered(),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.brand_style())
                    .title("Digital POA"),
            ),
            area,
        );
    }

    fn render_income(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_block_style())
            .title("Monthly Income");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        let values: Vec<u64> = self.data.income_history.iter().map(|(_, v)| *v).collect();
        f.render_widget(
            Sparkline::default()
                .data(values)
                .style(Style::default().fg(theme.accent_teal)),
            chunks[0],
        );
        let labels: Vec<String> = self
            .data
            .income_history
            .iter()
            .map(|(month, _)| month.clone())
            .collect();
        f.render_widget(
            Paragraph::new(Span::styled(labels.join("  "), theme.muted_style())),
            chunks[1],
        );
    }

    fn render_modal(&self, f: &mut Frame, full_area: Rect, theme: &Theme) {
        if self.modal == Modal::None {
            return;
        }
        let title = match self.modal {
            Modal::Rent => "Rent Fragment",
            Modal::Sell => "Sell Fragment",
            Modal::None => unreachable!(),
        };
        let width = 40u16.min(full_area.width.saturating_sub(4));
        let height = 7u16.min(full_area.height.saturating_sub(2));
        let overlay = Rect {
            x: full_area.x + (full_area.width.saturating_sub(width)) / 2,
            y: full_area.y + (full_area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        f.render_widget(Clear, overlay);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.brand_style())
            .title(title);
        let inner = block.inner(overlay);
        f.render_widget(block, overlay);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(inner);
        let label = match self.modal {
            Modal::Rent => "Monthly Rent (₹)",
            _ => "Asking Price (₹)",
        };
        let input = TextInput::with_value(label, self.price.value());
        input.render(f, chunks[0], theme, true);
        f.render_widget(
            Paragraph::new(Span::styled(
                "Enter confirms · Esc cancels",
                theme.muted_style(),
            )),
            chunks[1],
        );
    }
}

impl Screen for FragmentDetailScreen {
    fn title(&self) -> &'static str {
        "Fragment Details"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let cert_height = if self.show_certificate { 6 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),           // ownership summary
                Constraint::Length(2),           // badges
                Constraint::Length(cert_height), // certificate (toggled)
                Constraint::Min(4),              // income chart
            ])
            .split(area);

        self.render_summary(f, chunks[0], theme);
        self.render_badges(f, chunks[1], theme);
        if self.show_certificate {
            self.render_certificate(f, chunks[2], theme);
        }
        self.render_income(f, chunks[3], theme);
        self.render_modal(f, area, theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        if self.modal != Modal::None {
            return match key.code {
                KeyCode::Esc => {
                    self.modal = Modal::None;
                    self.price.clear();
                    ScreenResult::Continue
                }
                KeyCode::Enter => self.confirm_modal(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.price.handle_key(key);
                    ScreenResult::Continue
                }
                KeyCode::Backspace => {
                    self.price.handle_key(key);
                    ScreenResult::Continue
                }
                _ => ScreenResult::Continue,
            };
        }
        match key.code {
            KeyCode::Char('c') => {
                self.show_certificate = !self.show_certificate;
                ScreenResult::Continue
            }
            KeyCode::Char('t') => {
                self.show_token = !self.show_token;
                ScreenResult::Continue
            }
            KeyCode::Char('r') => {
                self.modal = Modal::Rent;
                ScreenResult::Continue
            }
            KeyCode::Char('s') => {
                self.modal = Modal::Sell;
                ScreenResult::Continue
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::FragmentDetail),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        if self.modal != Modal::None {
            vec![
                FooterAction::new("0-9", "Price"),
                FooterAction::new("Enter", "Confirm listing"),
                FooterAction::new("Esc", "Cancel"),
            ]
        } else {
            vec![
                FooterAction::new("r", "Rent"),
                FooterAction::new("s", "Sell"),
                FooterAction::new("c", "Certificate"),
                FooterAction::new("t", "Token"),
                FooterAction::new("Esc", "Back to portfolio"),
            ]
        }
    }

    fn wants_text_input(&self) -> bool {
        self.modal != Modal::None
    }
}
