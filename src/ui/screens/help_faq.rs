use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::ui::components::FooterAction;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

const FAQS: [(&str, &str); 7] = [
    (
        "What is fractional real estate ownership?",
        "Fractional ownership allows multiple investors to own portions of a \
         property. Each investor holds a tokenized 'fragment' representing their \
         proportional stake, legally backed by a Power of Attorney.",
    ),
    (
        "How do I earn returns?",
        "Returns come from two sources: monthly rental income distributed \
         proportionally, and capital appreciation of your property fragments which \
         can be realized through the secondary market.",
    ),
    (
        "Is my investment legally protected?",
        "Yes. Each fragment purchase includes a Power of Attorney (POA) issued in \
         your name, giving you legal ownership rights. All transactions are \
         blockchain-verified for transparency.",
    ),
    (
        "How do I sell my fragments?",
        "You can list fragments for sale on the secondary market at your desired \
         price. Buyers browse listings and complete transactions with a 2% platform \
         fee.",
    ),
    (
        "What documents do I need for KYC?",
        "You need a valid Aadhaar Card, PAN Card, address proof (utility bill), and \
         bank account details. All documents are verified within 24-48 hours.",
    ),
    (
        "How secure is my data?",
        "We use industry-standard AES-256 encryption, blockchain verification, and \
         two-factor authentication to protect your investment data and personal \
         information.",
    ),
    (
        "Can I rent my fragment instead of selling?",
        "Yes! You can list your fragment for rent, setting monthly rental rates and \
         minimum lease periods. Rental income is deposited directly to your account.",
    ),
];

const CONTACTS: [(&str, &str); 3] = [
    ("Customer Support", "+91 80 1234 5678"),
    ("Investment Support", "+91 80 9876 5432"),
    ("Emergency Assistance", "+91 80 5555 1234"),
];

pub struct HelpFaqScreen {
    cursor: usize,
    open: Option<usize>,
    list_state: ListState,
}

impl HelpFaqScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            cursor: 0,
            open: None,
            list_state,
        }
    }
}

impl Screen for HelpFaqScreen {
    fn title(&self) -> &'static str {
        "Help & FAQ"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Span::styled("Help & FAQ", theme.title_style())),
            chunks[0],
        );

        let mut contact_lines = vec![Line::from(vec![
            Span::styled("✉ ", theme.brand_style()),
            Span::styled("support@oneproperty.in", theme.body_style()),
        ])];
        for (label, number) in CONTACTS {
            contact_lines.push(Line::from(vec![
                Span::styled("☎ ", theme.brand_style()),
                Span::styled(format!("{number}  "), theme.body_style()),
                Span::styled(label, theme.muted_style()),
            ]));
        }
        f.render_widget(
            Paragraph::new(contact_lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.panel_block_style())
                    .title("Contact Us"),
            ),
            chunks[1],
        );

        let items: Vec<ListItem> = FAQS
            .iter()
            .enumerate()
            .map(|(i, (question, answer))| {
                let chevron = if self.open == Some(i) { "▾" } else { "▸" };
                let mut lines = vec![Line::from(vec![
                    Span::styled(format!("{chevron} "), theme.brand_style()),
                    Span::styled(*question, theme.body_style()),
                ])];
                if self.open == Some(i) {
                    lines.push(Line::from(Span::styled(
                        format!("  {answer}"),
                        theme.muted_style(),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();
        self.list_state.select(Some(self.cursor));
        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ");
        f.render_stateful_widget(list, chunks[2], &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(FAQS.len() - 1);
                ScreenResult::Continue
            }
            KeyCode::Enter => {
                self.open = if self.open == Some(self.cursor) {
                    None
                } else {
                    Some(self.cursor)
                };
                ScreenResult::Continue
            }
            KeyCode::Esc => ScreenResult::back_from(ScreenId::HelpFaq),
            _ => ScreenResult::Continue,
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("↑↓", "Questions"),
            FooterAction::new("Enter", "Expand"),
            FooterAction::new("Esc", "Back to profile"),
        ]
    }
}
