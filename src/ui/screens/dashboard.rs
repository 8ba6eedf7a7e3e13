use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Sparkline, Wrap},
};

use crate::data::{MockData, WealthPeriod, format, provider};
use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

pub struct DashboardScreen {
    data: &'static MockData,
    period: WealthPeriod,
    fragment_cursor: usize,
    list_state: ListState,
}

impl DashboardScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            data: provider(),
            period: WealthPeriod::Year,
            fragment_cursor: 0,
            list_state,
        }
    }

    fn cycle_period(&mut self) {
        let idx = WealthPeriod::ALL
            .iter()
            .position(|p| *p == self.period)
            .unwrap_or(0);
        self.period = WealthPeriod::ALL[(idx + 1) % WealthPeriod::ALL.len()];
    }

    fn render_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(Span::styled("Welcome back,", theme.muted_style())),
            Line::from(Span::styled(
                self.data.user.name.clone(),
                theme.title_style(),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let summary = &self.data.summary;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);
        let tiles = [
            ("Total Value", format::compact(summary.total_value), theme.brand_style()),
            (
                "Total ROI",
                format::signed_percent(summary.total_roi),
                theme.positive_style(),
            ),
            (
                "Rental Income",
                format::compact(summary.rental_income),
                theme.brand_style(),
            ),
        ];
        for (i, (label, value, style)) in tiles.into_iter().enumerate() {
            let tile = Paragraph::new(vec![
                Line::from(Span::styled(label, theme.muted_style())),
                Line::from(Span::styled(value, style)),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style()),
            );
            f.render_widget(tile, cells[i]);
        }
    }

    fn render_health(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let summary = &self.data.summary;
        let gauge = Gauge::default()
            .ratio(f64::from(summary.health_score) / 100.0)
            .label(Span::styled(
                format!("Health {}  ·  good diversification", summary.health_score),
                theme.body_style(),
            ))
            .gauge_style(Style::default().fg(theme.accent_teal).bg(theme.bg_surface))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title("Portfolio Health Score"),
            );
        f.render_widget(gauge, area);
    }

    fn render_wealth(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let series = self.data.wealth_series(self.period);
        let values: Vec<u64> = series.iter().map(|p| p.value).collect();
        let baseline = values.iter().copied().min().unwrap_or(0);
        // Plot deltas over the series minimum so small movements stay visible.
        let deltas: Vec<u64> = values.iter().map(|v| v - baseline + 1).collect();

        let mut title_spans = vec![Span::styled("Wealth Over Time  ", theme.muted_style())];
        for period in WealthPeriod::ALL {
            let style = if period == self.period {
                theme.chip_active_style()
            } else {
                theme.chip_inactive_style()
            };
            title_spans.push(Span::styled(format!(" {} ", period.label()), style));
            title_spans.push(Span::raw(" "));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_block_style())
            .title(Line::from(title_spans));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        f.render_widget(
            Sparkline::default()
                .data(deltas)
                .style(Style::default().fg(theme.accent_gold)),
            chunks[0],
        );
        let last = series.last();
        let label = last
            .map(|p| format!("{}: {}", p.label, format::currency(p.value)))
            .unwrap_or_default();
        f.render_widget(
            Paragraph::new(Span::styled(label, theme.muted_style())).right_aligned(),
            chunks[1],
        );
    }

    fn render_insight(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let insight = &self.data.insight;
        let widget = Paragraph::new(Line::from(Span::styled(
            insight.text.clone(),
            theme.body_style(),
        )))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.brand_style())
                .title(format!("✦ {}", insight.title)),
        );
        f.render_widget(widget, area);
    }

    fn render_income_and_fragments(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let income_lines: Vec<Line> = self
            .data
            .recent_income
            .iter()
            .take(3)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!("{:<22}", entry.property), theme.body_style()),
                    Span::styled(format!("{:>7} ", format::short_date(&entry.date)), theme.muted_style()),
                    Span::styled(
                        format!("+{}", format::currency(entry.amount)),
                        theme.positive_style(),
                    ),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(income_lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title("Recent Income"),
            ),
            halves[0],
        );

        let items: Vec<ListItem> = self
            .data
            .holdings
            .iter()
            .map(|h| {
                ListItem::new(Line::from(vec![
                    Span::styled(h.property_name.clone(), theme.body_style()),
                    Span::styled(
                        format!(
                            "  {}% · {} fragments",
                            h.percentage_owned,
                            h.fragment_ids.len()
                        ),
                        theme.muted_style(),
                    ),
                ]))
            })
            .collect();
        self.list_state.select(Some(self.fragment_cursor));
        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title("My Fragments"),
            );
        f.render_stateful_widget(list, halves[1], &mut self.list_state);
    }
}

impl Screen for DashboardScreen {
    fn title(&self) -> &'static str {
        "Dashboard"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // greeting
                Constraint::Length(4), // summary tiles
                Constraint::Length(3), // health score
                Constraint::Length(7), // wealth chart
                Constraint::Length(4), // insight
                Constraint::Min(6),    // income + fragments
            ])
            .split(area);

        self.render_header(f, chunks[0], theme);
        self.render_summary(f, chunks[1], theme);
        self.render_health(f, chunks[2], theme);
        self.render_wealth(f, chunks[3], theme);
        self.render_insight(f, chunks[4], theme);
        self.render_income_and_fragments(f, chunks[5], theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Char('p') => {
                self.cycle_period();
                ScreenResult::Continue
            }
            KeyCode::Char('n') => ScreenResult::go(ScreenId::Notifications),
            KeyCode::Up | KeyCode::Char('k') => {
                self.fragment_cursor = self.fragment_cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.data.holdings.len().saturating_sub(1);
                self.fragment_cursor = (self.fragment_cursor + 1).min(max);
                ScreenResult::Continue
            }
            KeyCode::Enter => match self.data.holdings.get(self.fragment_cursor) {
                Some(holding) => ScreenResult::go_with(ScreenId::FragmentDetail, holding.id.clone()),
                None => ScreenResult::Continue,
            },
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("↑↓", "Fragments"),
            FooterAction::new("Enter", "Open fragment"),
            FooterAction::new("p", "Chart period"),
            FooterAction::new("n", "Notifications"),
            FooterAction::new("m", "Menu"),
        ]
    }
}
