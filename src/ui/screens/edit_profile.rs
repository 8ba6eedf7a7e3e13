use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::data::provider;
use crate::ui::components::{FooterAction, TextInput};
use crate::ui::navigation::ScreenId;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::theme::Theme;

/// Four editable fields prefilled from the mock profile. Saving only raises
/// a toast; edits are discarded with the screen instance.
pub struct EditProfileScreen {
    fields: [TextInput; 4],
    focus: usize,
}

impl EditProfileScreen {
    pub fn new() -> Self {
        let user = &provider().user;
        Self {
            fields: [
                TextInput::with_value("Full Name", user.name.clone()),
                TextInput::with_value("Phone Number", user.phone.clone()),
                TextInput::with_value("Email", user.email.clone()),
                TextInput::with_value("Profession", user.profession.clone()),
            ],
            focus: 0,
        }
    }
}

impl Screen for EditProfileScreen {
    fn title(&self) -> &'static str {
        "Edit Profile"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let initials = provider().user.initials.clone();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(2), // avatar
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Span::styled("Edit Profile", theme.title_style())),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("( {initials} )"),
                theme.brand_style(),
            )))
            .centered(),
            chunks[1],
        );

        for (i, field) in self.fields.iter().enumerate() {
            field.render(f, chunks[2 + i], theme, i == self.focus);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenResult {
        match key.code {
            KeyCode::Up => {
                self.focus = self.focus.saturating_sub(1);
                ScreenResult::Continue
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus = (self.focus + 1) % self.fields.len();
                ScreenResult::Continue
            }
            KeyCode::Enter => ScreenResult::Batch(vec![
                ScreenResult::notify("Profile Updated"),
                ScreenResult::go(ScreenId::Dashboard),
            ]),
            KeyCode::Esc => ScreenResult::back_from(ScreenId::EditProfile),
            _ => {
                self.fields[self.focus].handle_key(key);
                ScreenResult::Continue
            }
        }
    }

    fn footer_actions(&self) -> Vec<FooterAction> {
        vec![
            FooterAction::new("↑↓", "Fields"),
            FooterAction::new("Enter", "Save changes"),
            FooterAction::new("Esc", "Cancel"),
        ]
    }

    fn wants_text_input(&self) -> bool {
        true
    }
}
