//! Runtime that threads the navigator, the active screen, the chrome and
//! the toast surface together. One instance lives for the whole session.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::data::provider;
use crate::ui::components::render_footer;
use crate::ui::navigation::{Navigator, ScreenId};
use crate::ui::registry::build_screen;
use crate::ui::screens::{Screen, ScreenResult};
use crate::ui::shell::{ChromeIntent, Shell};
use crate::ui::theme::{Theme, ThemeVariant};
use crate::ui::toast::Toasts;

pub struct App {
    navigator: Navigator,
    shell: Shell,
    toasts: Toasts,
    screen: Box<dyn Screen>,
    should_quit: bool,
}

impl App {
    pub fn new(theme: Option<ThemeVariant>) -> Self {
        let mut navigator = Navigator::new();
        if let Some(theme) = theme {
            navigator.set_theme(theme);
        }
        let screen = build_screen(navigator.current_screen(), navigator.state());
        Self {
            navigator,
            shell: Shell::new(),
            toasts: Toasts::new(),
            screen,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.current_screen()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Chrome gets first refusal, except while a screen is capturing text.
        if !self.navigator.hide_chrome() && !self.screen.wants_text_input() {
            if let Some(intent) = self.shell.handle_key(key, self.navigator.active_tab()) {
                match intent {
                    // TabId -> canonical ScreenId mapping lives here, not in
                    // the Shell, which only knows the four tabs.
                    ChromeIntent::TabTap(tab) => self.go(tab.screen(), None),
                    ChromeIntent::MenuNavigate(screen) => self.go(screen, None),
                }
                return;
            }
            if self.shell.menu_open() {
                return;
            }
        }

        let result = self.screen.handle_key(key);
        self.apply(result);
    }

    fn apply(&mut self, result: ScreenResult) {
        match result {
            ScreenResult::Continue => {}
            ScreenResult::Navigate(screen, id) => self.go(screen, id.as_deref()),
            ScreenResult::SetTheme(variant) => self.navigator.set_theme(variant),
            ScreenResult::Notify(message) => self.toasts.notify(message),
            ScreenResult::Batch(results) => {
                for result in results {
                    self.apply(result);
                }
            }
            ScreenResult::Quit => self.should_quit = true,
        }
    }

    fn go(&mut self, screen: ScreenId, id: Option<&str>) {
        self.navigator.navigate(screen, id);
        self.shell.reset_menu();
        self.screen = build_screen(screen, self.navigator.state());
    }

    pub fn tick(&mut self) {
        if self.navigator.poll_splash_timer() {
            self.shell.reset_menu();
            self.screen = build_screen(self.navigator.current_screen(), self.navigator.state());
        }
        self.screen.tick();
        self.toasts.prune();
    }

    pub fn render(&mut self, f: &mut Frame) {
        let theme = Theme::new(self.navigator.theme());
        let area = f.area();
        f.render_widget(Block::default().style(Style::default().bg(theme.bg_base)), area);

        if self.navigator.hide_chrome() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);
            self.screen.render(f, chunks[0], &theme);
            render_footer(f, chunks[1], &theme, &self.screen.footer_actions());
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // status bar
                    Constraint::Min(0),    // screen content
                    Constraint::Length(1), // footer hints
                    Constraint::Length(2), // tab bar
                ])
                .split(area);

            let clock = Local::now().format("%H:%M").to_string();
            let unread = provider().unread_notifications();
            self.shell
                .render_status_bar(f, chunks[0], &theme, &clock, unread);
            self.screen.render(f, chunks[1], &theme);
            render_footer(f, chunks[2], &theme, &self.screen.footer_actions());
            self.shell
                .render_tab_bar(f, chunks[3], &theme, self.navigator.active_tab());
            self.shell.render_menu(f, area, &theme);
        }

        self.toasts.render(f, area, &theme);
    }
}
