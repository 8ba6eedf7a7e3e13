use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph, Wrap},
};

use crate::data::models::Property;
use crate::data::{MockData, format, provider};
use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

const BLUEPRINT_SIDE: u32 = 10;
const MAX_ORDER: u32 = 10;

/// Parameterized by the sticky property id; an empty or unknown id resolves
/// to the provider's first property, never to a blank screen.
pub struct PropertyDetailScreen {
    data: &'static MockData,
    property_id: String,
    order_qty: u32,
}

impl PropertyDetailScreen {
    pub fn new(property_id: &str) -> Self {
        let data = provider();
        let resolved = data.property_by_id(property_id).id.clone();
        Self {
            data,
            property_id: resolved,
            order_qty: 1,
        }
    }

    fn property(&self) -> &'static Property {
        self.data.property_by_id(&self.property_id)
    }

    /// Fragments held by the current user in this property, if any.
    fn owned_fragments(&self) -> Vec<u32> {
        self.data
            .holdings
            .iter()
            .filter(|h| h.property_id == self.property_id)
            .flat_map(|h| h.fragment_ids.iter().copied())
            .collect()
    }

    fn render_blueprint(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let property = self.property();
        let owned = self.owned_fragments();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_block_style())
            .title("Fragment Blueprint   ★ yours  ▦ sold  · available");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();
        for row in 0..BLUEPRINT_SIDE {
            let mut spans = Vec::new();
            for col in 0..BLUEPRINT_SIDE {
                let fragment_no = row * BLUEPRINT_SIDE + col + 1;
                let (glyph, style) = if owned.contains(&fragment_no) {
                    ("★ ", theme.brand_style())
                } else if fragment_no <= property.sold_fragments {
                    ("▦ ", theme.muted_style())
                } else {
                    ("· ", Style::default().fg(theme.border_subtle))
                };
                spans.push(Span::styled(glyph, style));
            }
            lines.push(Line::from(spans));
        }
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn render_order_panel(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let property = self.property();
        let total = property.price_per_fragment * u64::from(self.order_qty);
        let mut meter = String::new();
        for i in 1..=MAX_ORDER {
            meter.push(if i <= self.order_qty { '━' } else { '─' });
        }
        let lines = vec![
            Line::from(vec![
                Span::styled("Fragments to buy: ", theme.muted_style()),
                Span::styled(format!("{}", self.order_qty), theme.brand_style()),
                Span::styled("   ←/→ adjust", theme.muted_style()),
            ]),
            Line::from(Span::styled(meter, theme.brand_style())),
            Line::from(vec![
                Span::styled(format!("Total: {}", format::currency(total)), theme.body_style()),
                Span::styled(
                    format!("   {} available", property.available_fragments()),
                    theme.muted_style(),
                ),
            ]),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.brand_style())
                    .title("Buy Fraction"),
            ),
            area,
        );
    }

    fn render_neighborhood(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let hood = &self.data.neighborhood;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_block_style())
            .title("Neighborhood Insights");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("Walkability {} ", hood.walkability_score),
                    theme.positive_style(),
                ),
                Span::styled("· Very Walkable", theme.muted_style()),
            ])),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hood.amenities.join("  ·  "),
                theme.muted_style(),
            ))),
            chunks[1],
        );

        let bars: Vec<(&str, u64)> = hood
            .growth_trend
            .iter()
            .map(|(year, growth)| (year.as_str(), *growth))
            .collect();
        f.render_widget(
            BarChart::default()
                .data(bars.as_slice())
                .bar_width(4)
                .bar_gap(2)
                .bar_style(Style::default().fg(theme.accent_teal))
                .value_style(Style::default().fg(theme.bg_base).bg(theme.accent_teal)),
            chunks[2],
        );
    }
}

impl Screen for PropertyDetailScreen {
    fn title(&self) -> &'static str {
        "Property Detail"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let property = self.property();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // name + location
                Constraint::Length(2), // key metrics
                Constraint::Length(3), // description
                Constraint::Min(0),    // blueprint + side panels
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(property.name.clone(), theme.title_style())),
                Line::from(Span::styled(
                    format!("⚲ {}", property.location),
                    theme.muted_style(),
                )),
            ]),
            chunks[0],
        );

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{} / share   ", format::currency(property.price_per_fragment)),
                    theme.brand_style(),
                ),
                Span::styled(
                    format!("{}% exp. yield   ", property.expected_yield),
                    theme.positive_style(),
                ),
                Span::styled(
                    format!("{}% occupancy", property.occupancy_rate),
                    theme.body_style(),
                ),
            ])),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new(Span::styled(property.description.clone(), theme.muted_style()))
                .wrap(Wrap { trim: true }),
            chunks[2],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(chunks[3]);
        self.render_blueprint(f, columns[0], theme);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(columns[1]);
        self.render_order_panel(f, right[0], theme);
        self.render_neighborhood(f, right[1], theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Left => {
                self.order_qty = self.order_qty.saturating_sub(1).max(1);
                ScreenResult::Continue
            }
            KeyCode::Right => {
                self.order_qty = (self.order_qty + 1).min(MAX_ORDER);
                ScreenResult::Continue
            }
            KeyCode::Char('b') | KeyCode::Enter => {
                ScreenResult::go(ScreenId::PurchaseTracker)
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::PropertyDetail),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("←→", "Quantity"),
            FooterAction::new("b", "Buy fragments"),
            FooterAction::new("Esc", "Back to marketplace"),
        ]
    }
}
