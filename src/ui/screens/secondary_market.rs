use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Sparkline},
};

use crate::data::{MockData, format, provider};
use crate::ui::components::{FooterAction, TextInput};
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubTab {
    Buy,
    Sell,
}

pub struct SecondaryMarketScreen {
    data: &'static MockData,
    tab: SubTab,
    cursor: usize,
    list_state: ListState,
    ask_price: TextInput,
    pricing: bool,
}

impl SecondaryMarketScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            data: provider(),
            tab: SubTab::Buy,
            cursor: 0,
            list_state,
            ask_price: TextInput::new("Set price (₹)", "e.g. 500000"),
            pricing: false,
        }
    }

    fn rows(&self) -> usize {
        match self.tab {
            SubTab::Buy => self.data.secondary_listings.len(),
            SubTab::Sell => self.data.holdings.len(),
        }
    }

    fn render_stats(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let stats = &self.data.market_stats;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);
        let tiles = [
            ("Total Volume", stats.total_volume.clone()),
            ("Active Listings", stats.active_listings.to_string()),
            ("Avg. Change", stats.avg_price_change.clone()),
        ];
        for (i, (label, value)) in tiles.into_iter().enumerate() {
            f.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(label, theme.muted_style())),
                    Line::from(Span::styled(value, theme.brand_style())),
                ])
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.panel_block_style()),
                ),
                cells[i],
            );
        }
    }

    fn render_trend(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_block_style())
            .title(Line::from(vec![
                Span::styled("Fragment Price Trend  ", theme.muted_style()),
                Span::styled("↗ +9.4%", theme.positive_style()),
            ]));
        let inner = block.inner(area);
        f.render_widget(block, area);
        let baseline = self
            .data
            .price_history
            .iter()
            .map(|(_, v)| *v)
            .min()
            .unwrap_or(0);
        let values: Vec<u64> = self
            .data
            .price_history
            .iter()
            .map(|(_, v)| v - baseline + 1)
            .collect();
        f.render_widget(
            Sparkline::default()
                .data(values)
                .style(Style::default().fg(theme.accent_gold)),
            inner,
        );
    }

    fn render_buy(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .data
            .secondary_listings
            .iter()
            .map(|listing| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(listing.property_name.clone(), theme.body_style()),
                        Span::styled(
                            format!("  Fragment #{}", listing.fragment_no),
                            theme.muted_style(),
                        ),
                        Span::styled(
                            format!("  {}", format::signed_percent(listing.gain_percent())),
                            theme.positive_style(),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled(
                            format!("   ★ {}  ", listing.seller_rating),
                            theme.brand_style(),
                        ),
                        Span::styled(
                            format!("{}d listed  {}  ", listing.days_listed, listing.condition),
                            theme.muted_style(),
                        ),
                        Span::styled(
                            format!("ask {}", format::currency(listing.price)),
                            theme.body_style(),
                        ),
                    ]),
                ])
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
                    .title("Available Listings"),
            );
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_sell(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .split(area);
        let items: Vec<ListItem> = self
            .data
            .holdings
            .iter()
            .map(|h| {
                let ids: Vec<String> =
                    h.fragment_ids.iter().map(|id| id.to_string()).collect();
                ListItem::new(vec![
                    Line::from(Span::styled(h.property_name.clone(), theme.body_style())),
                    Line::from(Span::styled(
                        format!("   Fragments: {}", ids.join(", ")),
                        theme.muted_style(),
                    )),
                ])
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
                    .title("Select fragment to list"),
            );
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);
        self.ask_price.render(f, chunks[1], theme, self.pricing);
    }
}

impl Screen for SecondaryMarketScreen {
    fn title(&self) -> &'static str {
        "Secondary Market"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let stats = &self.data.market_stats;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(4), // stat tiles
                Constraint::Length(1), // ratio banner
                Constraint::Length(4), // price trend
                Constraint::Length(1), // sub tabs
                Constraint::Min(5),    // listings
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Span::styled("Secondary Market", theme.title_style())),
            chunks[0],
        );
        self.render_stats(f, chunks[1], theme);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("Buyer/Seller Ratio: {}", stats.buyer_seller_ratio),
                    theme.body_style(),
                ),
                Span::styled(
                    format!("   {} trades this month", stats.total_trades_this_month),
                    theme.muted_style(),
                ),
            ])),
            chunks[2],
        );
        self.render_trend(f, chunks[3], theme);

        let chips = Line::from(vec![
            Span::styled(
                " Browse Listings ",
                if self.tab == SubTab::Buy {
                    theme.chip_active_style()
                } else {
                    theme.chip_inactive_style()
                },
            ),
            Span::raw(" "),
            Span::styled(
                " List for Sale ",
                if self.tab == SubTab::Sell {
                    theme.chip_active_style()
                } else {
                    theme.chip_inactive_style()
                },
            ),
            Span::styled("   ←/→ switch", theme.muted_style()),
        ]);
        f.render_widget(Paragraph::new(chips), chunks[4]);

        match self.tab {
            SubTab::Buy => self.render_buy(f, chunks[5], theme),
            SubTab::Sell => self.render_sell(f, chunks[5], theme),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        if self.pricing {
            match key.code {
                KeyCode::Esc => self.pricing = false,
                KeyCode::Enter => {
                    self.pricing = false;
                    let price = if self.ask_price.is_empty() {
                        "market price".to_string()
                    } else {
                        format!("₹{}", self.ask_price.value())
                    };
                    self.ask_price.clear();
                    return ScreenResult::notify(format!("Fragment listed for sale at {price}"));
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.ask_price.handle_key(key);
                }
                KeyCode::Backspace => {
                    self.ask_price.handle_key(key);
                }
                _ => {}
            }
            return ScreenResult::Continue;
        }
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                self.tab = match self.tab {
                    SubTab::Buy => SubTab::Sell,
                    SubTab::Sell => SubTab::Buy,
                };
                self.cursor = 0;
                ScreenResult::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(self.rows().saturating_sub(1));
                ScreenResult::Continue
            }
            KeyCode::Enter => match self.tab {
                SubTab::Buy => match self.data.secondary_listings.get(self.cursor) {
                    Some(listing) => ScreenResult::notify(format!(
                        "Purchase request sent for {} fragment #{} — 2% platform fee applies",
                        listing.property_name, listing.fragment_no
                    )),
                    None => ScreenResult::Continue,
                },
                SubTab::Sell => {
                    self.pricing = true;
                    ScreenResult::Continue
                }
            },
            KeyCode::Esc => ScreenResult::back_from(ScreenId::SecondaryMarket),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        if self.pricing {
            return vec![
                FooterAction::new("0-9", "Price"),
                FooterAction::new("Enter", "List fragment"),
                FooterAction::new("Esc", "Cancel"),
            ];
        }
        match self.tab {
            SubTab::Buy => vec![
                FooterAction::new("↑↓", "Listings"),
                FooterAction::new("Enter", "Buy now"),
                FooterAction::new("←→", "Sell side"),
                FooterAction::new("Esc", "Back"),
            ],
            SubTab::Sell => vec![
                FooterAction::new("↑↓", "Holdings"),
                FooterAction::new("Enter", "Set price"),
                FooterAction::new("←→", "Buy side"),
                FooterAction::new("Esc", "Back"),
            ],
        }
    }

    fn wants_text_input(&self) -> bool {
        self.pricing
    }
}
