use crossterm::event::{KeyCode, KeyEvent};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::data::{MockData, format, provider};
use crate::ui::components::{FooterAction, TextInput};
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubTab {
    Fragments,
    Documents,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Map,
    List,
}

#[derive(PartialEq, Eq)]
enum Modal {
    None,
    Rent,
    Sell,
}

pub struct PortfolioScreen {
    data: &'static MockData,
    tab: SubTab,
    view: ViewMode,
    cursor: usize,
    list_state: ListState,
    show_tokens: bool,
    modal: Modal,
    price: TextInput,
    /// Pin placement for the map view, jittered once at construction so the
    /// pins do not crawl between frames.
    pins: Vec<(u16, u16)>,
}

impl PortfolioScreen {
    pub fn new() -> Self {
        let data = provider();
        let mut rng = StdRng::seed_from_u64(0x01ED);
        let pins = data
            .holdings
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let x = 6 + (i as u16 % 3) * 18 + rng.random_range(0..6);
                let y = 2 + (i as u16 / 3) * 4 + rng.random_range(0..2);
                (x, y)
            })
            .collect();
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            data,
            tab: SubTab::Fragments,
            view: ViewMode::Map,
            cursor: 0,
            list_state,
            show_tokens: false,
            modal: Modal::None,
            price: TextInput::new("Price (₹)", "e.g. 15000"),
            pins,
        }
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

    fn render_tabs(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chips = Line::from(vec![
            Span::styled(
                " My Fragments ",
                if self.tab == SubTab::Fragments {
                    theme.chip_active_style()
                } else {
                    theme.chip_inactive_style()
                },
            ),
            Span::raw(" "),
            Span::styled(
                " Document Vault ",
                if self.tab == SubTab::Documents {
                    theme.chip_active_style()
                } else {
                    theme.chip_inactive_style()
                },
            ),
            Span::styled("   ←/→ switch", theme.muted_style()),
        ]);
        f.render_widget(Paragraph::new(chips), area);
    }

    fn render_map(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_block_style())
            .title("⚲ India · Properties Map");
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (i, holding) in self.data.holdings.iter().enumerate() {
            let Some((px, py)) = self.pins.get(i).copied() else {
                continue;
            };
            if px >= inner.width || py >= inner.height {
                continue;
            }
            let selected = i == self.cursor;
            let style = if selected {
                theme.selected_style()
            } else {
                theme.brand_style()
            };
            let label = if selected {
                format!("◉ {}", holding.property_name)
            } else {
                "◉".to_string()
            };
            let width = (label.chars().count() as u16).min(inner.width - px);
            let pin_area = Rect {
                x: inner.x + px,
                y: inner.y + py,
                width,
                height: 1,
            };
            f.render_widget(Paragraph::new(Span::styled(label, style)), pin_area);
        }
    }

    fn render_holdings(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .data
            .holdings
            .iter()
            .map(|h| {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(h.property_name.clone(), theme.body_style()),
                        Span::styled(
                            format!(
                                "  {}% owned · {} fragments",
                                h.percentage_owned,
                                h.fragment_ids.len()
                            ),
                            theme.muted_style(),
                        ),
                    ]),
                    Line::from(if h.poa_issued {
                        Span::styled(
                            "   ✔ Power of Attorney Issued – Owner Verified",
                            theme.positive_style(),
                        )
                    } else {
                        Span::styled("   POA issuance in progress", theme.muted_style())
                    }),
                ];
                if self.show_tokens {
                    lines.push(Line::from(Span::styled(
                        format!("   {} · {}", h.token_id, h.chain_status),
                        theme.muted_style(),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();
        self.list_state.select(Some(self.cursor));
        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title(format!("{} owned holdings", self.data.holdings.len())),
            );
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_documents(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![
            Line::from(Span::styled(
                "✔ All documents verified & encrypted",
                theme.positive_style(),
            )),
            Line::from(""),
        ];
        for doc in &self.data.kyc_documents {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<32}", doc.name), theme.body_style()),
                Span::styled(
                    format!("{:<16}", doc.doc_type),
                    theme.muted_style(),
                ),
                Span::styled(
                    format!("{:<8}", format::short_date(&doc.upload_date)),
                    theme.muted_style(),
                ),
                Span::styled(format!("✓ {}", doc.status), theme.positive_style()),
            ]));
        }
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title("Document Vault"),
            ),
            area,
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
        TextInput::with_value(label, self.price.value()).render(f, chunks[0], theme, true);
        f.render_widget(
            Paragraph::new(Span::styled(
                "Enter confirms · Esc cancels",
                theme.muted_style(),
            )),
            chunks[1],
        );
    }
}

impl Screen for PortfolioScreen {
    fn title(&self) -> &'static str {
        "Portfolio"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // heading
                Constraint::Length(1), // sub tabs
                Constraint::Min(0),    // body
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Portfolio", theme.title_style())),
                Line::from(Span::styled(
                    "Your investments & documents",
                    theme.muted_style(),
                )),
            ]),
            chunks[0],
        );
        self.render_tabs(f, chunks[1], theme);

        match self.tab {
            SubTab::Fragments => match self.view {
                ViewMode::Map => {
                    let halves = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Length(10), Constraint::Min(0)])
                        .split(chunks[2]);
                    self.render_map(f, halves[0], theme);
                    self.render_holdings(f, halves[1], theme);
                }
                ViewMode::List => self.render_holdings(f, chunks[2], theme),
            },
            SubTab::Documents => self.render_documents(f, chunks[2], theme),
        }
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
            KeyCode::Left | KeyCode::Right => {
                self.tab = match self.tab {
                    SubTab::Fragments => SubTab::Documents,
                    SubTab::Documents => SubTab::Fragments,
                };
                ScreenResult::Continue
            }
            KeyCode::Char('v') if self.tab == SubTab::Fragments => {
                self.view = match self.view {
                    ViewMode::Map => ViewMode::List,
                    ViewMode::List => ViewMode::Map,
                };
                ScreenResult::Continue
            }
            KeyCode::Char('t') if self.tab == SubTab::Fragments => {
                self.show_tokens = !self.show_tokens;
                ScreenResult::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.data.holdings.len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(max);
                ScreenResult::Continue
            }
            KeyCode::Char('r') if self.tab == SubTab::Fragments => {
                self.modal = Modal::Rent;
                ScreenResult::Continue
            }
            KeyCode::Char('s') if self.tab == SubTab::Fragments => {
                self.modal = Modal::Sell;
                ScreenResult::Continue
            }
            KeyCode::Enter if self.tab == SubTab::Fragments => {
                match self.data.holdings.get(self.cursor) {
                    Some(h) => ScreenResult::go_with(ScreenId::FragmentDetail, h.id.clone()),
                    None => ScreenResult::Continue,
                }
            }
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        if self.modal != Modal::None {
            return vec![
                FooterAction::new("0-9", "Price"),
                FooterAction::new("Enter", "Confirm listing"),
                FooterAction::new("Esc", "Cancel"),
            ];
        }
        match self.tab {
            SubTab::Fragments => vec![
                FooterAction::new("↑↓", "Holdings"),
                FooterAction::new("Enter", "Details"),
                FooterAction::new("v", "Map/List"),
                FooterAction::new("r", "Rent"),
                FooterAction::new("s", "Sell"),
                FooterAction::new("t", "Tokens"),
            ],
            SubTab::Documents => vec![FooterAction::new("←→", "My Fragments")],
        }
    }

    fn wants_text_input(&self) -> bool {
        self.modal != Modal::None
    }
}
