use crossterm::event::{KeyCode, KeyEvent};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};

use crate::data::models::{Property, RiskLevel};
use crate::data::{MockData, format, provider};
use crate::ui::components::{FooterAction, TextInput};
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Trending,
    HighestYield,
    Newest,
}

impl SortOrder {
    const ALL: [SortOrder; 3] = [SortOrder::Trending, SortOrder::HighestYield, SortOrder::Newest];

    fn label(self) -> &'static str {
        match self {
            SortOrder::Trending => "Trending",
            SortOrder::HighestYield => "Highest Yield",
            SortOrder::Newest => "Newest",
        }
    }
}

pub struct MarketplaceScreen {
    data: &'static MockData,
    matcher: SkimMatcherV2,
    search: TextInput,
    searching: bool,
    sort: SortOrder,
    cursor: usize,
    list_state: ListState,
}

impl MarketplaceScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            data: provider(),
            matcher: SkimMatcherV2::default(),
            search: TextInput::new("Search", "Search properties..."),
            searching: false,
            sort: SortOrder::Trending,
            cursor: 0,
            list_state,
        }
    }

    /// Current view of the catalogue: fuzzy-filtered by the search query,
    /// then ordered by the active sort chip.
    fn visible(&self) -> Vec<&'static Property> {
        let query = self.search.value();
        let mut rows: Vec<&Property> = self
            .data
            .properties
            .iter()
            .filter(|p| {
                if query.is_empty() {
                    return true;
                }
                let haystack = format!("{} {}", p.name, p.location);
                self.matcher.fuzzy_match(&haystack, query).is_some()
            })
            .collect();
        match self.sort {
            SortOrder::Trending => rows.sort_by_key(|p| !p.trending),
            SortOrder::HighestYield => {
                rows.sort_by(|a, b| b.yield_percent.total_cmp(&a.yield_percent));
            }
            // Seed order is newest-last; reversing shows the latest listing first.
            SortOrder::Newest => rows.reverse(),
        }
        rows
    }

    fn cycle_sort(&mut self) {
        let idx = SortOrder::ALL.iter().position(|s| *s == self.sort).unwrap_or(0);
        self.sort = SortOrder::ALL[(idx + 1) % SortOrder::ALL.len()];
        self.cursor = 0;
    }

    fn risk_style(&self, risk: RiskLevel, theme: &Theme) -> Style {
        match risk {
            RiskLevel::Low => theme.positive_style(),
            RiskLevel::Medium => Style::default().fg(theme.accent_warning),
            RiskLevel::High => theme.error_style(),
        }
    }
}

impl Screen for MarketplaceScreen {
    fn title(&self) -> &'static str {
        "Marketplace"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // heading
                Constraint::Length(3), // search
                Constraint::Length(1), // sort chips
                Constraint::Min(5),    // property list
                Constraint::Length(3), // sold meter for selection
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Marketplace", theme.title_style())),
                Line::from(Span::styled(
                    "Premium investment opportunities",
                    theme.muted_style(),
                )),
            ]),
            chunks[0],
        );

        self.search.render(f, chunks[1], theme, self.searching);

        let mut chips = Vec::new();
        for sort in SortOrder::ALL {
            let style = if sort == self.sort {
                theme.chip_active_style()
            } else {
                theme.chip_inactive_style()
            };
            chips.push(Span::styled(format!(" {} ", sort.label()), style));
            chips.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(chips)), chunks[2]);

        let rows = self.visible();
        let items: Vec<ListItem> = rows
            .iter()
            .map(|p| {
                let hot = if p.trending { "🔥 " } else { "   " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(hot, theme.error_style()),
                        Span::styled(p.name.clone(), theme.body_style()),
                        Span::styled(format!("  {}", p.location), theme.muted_style()),
                    ]),
                    Line::from(vec![
                        Span::raw("   "),
                        Span::styled(
                            format!("{}% yield", p.yield_percent),
                            theme.brand_style(),
                        ),
                        Span::styled(
                            format!("  {} / fragment  ", format::currency(p.price_per_fragment)),
                            theme.muted_style(),
                        ),
                        Span::styled(p.risk.label(), self.risk_style(p.risk, theme)),
                        Span::styled(format!("  {}", p.property_type), theme.muted_style()),
                    ]),
                ])
            })
            .collect();

        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        self.list_state.select(if rows.is_empty() {
            None
        } else {
            Some(self.cursor)
        });
        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title(format!("{} properties", rows.len())),
            );
        f.render_stateful_widget(list, chunks[3], &mut self.list_state);

        if let Some(p) = rows.get(self.cursor) {
            let gauge = Gauge::default()
                .ratio(p.sold_ratio())
                .label(Span::styled(
                    format!(
                        "{}/{} sold · {} available",
                        p.sold_fragments,
                        p.total_fragments,
                        p.available_fragments()
                    ),
                    theme.body_style(),
                ))
                .gauge_style(Style::default().fg(theme.accent_gold).bg(theme.bg_surface))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.panel_block_style())
                        .title("Fragment availability"),
                );
            f.render_widget(gauge, chunks[4]);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        if self.searching {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.searching = false,
                _ => {
                    self.search.handle_key(key);
                    self.cursor = 0;
                }
            }
            return ScreenResult::Continue;
        }
        match key.code {
            KeyCode::Char('/') => {
                self.searching = true;
                self.search.clear();
                ScreenResult::Continue
            }
            KeyCode::Char('s') => {
                self.cycle_sort();
                ScreenResult::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.visible().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(max);
                ScreenResult::Continue
            }
            KeyCode::Enter => match self.visible().get(self.cursor) {
                Some(p) => ScreenResult::go_with(ScreenId::PropertyDetail, p.id.clone()),
                None => ScreenResult::Continue,
            },
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        if self.searching {
            vec![
                FooterAction::new("Type", "Filter"),
                FooterAction::new("Enter/Esc", "Done"),
            ]
        } else {
            vec![
                FooterAction::new("↑↓", "Browse"),
                FooterAction::new("Enter", "View property"),
                FooterAction::new("/", "Search"),
                FooterAction::new("s", "Sort"),
            ]
        }
    }

    fn wants_text_input(&self) -> bool {
        self.searching
    }
}
