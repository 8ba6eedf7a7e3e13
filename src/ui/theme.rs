use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Light
    }
}

/// Semantic palette resolved from a [`ThemeVariant`]. Screens never hardcode
/// colors; they pick a field from here.
#[derive(Debug, Clone)]
pub struct Theme {
    // Accents
    pub accent_gold: Color,    // brand, primary actions, active tab
    pub accent_teal: Color,    // income, verified, positive deltas
    pub accent_error: Color,   // destructive actions, unread badge
    pub accent_warning: Color, // pending states

    // Text hierarchy
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Structure
    pub border: Color,
    pub border_subtle: Color,
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            accent_gold: Color::Rgb(0xb0, 0x7d, 0x2b),
            accent_teal: Color::Rgb(0x0e, 0x7a, 0x6f),
            accent_error: Color::Rgb(0xc2, 0x2f, 0x3d),
            accent_warning: Color::Rgb(0xb8, 0x6e, 0x00),
            text_primary: Color::Rgb(0x2a, 0x26, 0x1f),
            text_secondary: Color::Rgb(0x55, 0x4e, 0x41),
            text_muted: Color::Rgb(0x8a, 0x82, 0x73),
            border: Color::Rgb(0x9c, 0x93, 0x82),
            border_subtle: Color::Rgb(0xc4, 0xbc, 0xac),
            bg_base: Color::Rgb(0xf6, 0xf2, 0xea),
            bg_surface: Color::Rgb(0xec, 0xe6, 0xda),
            bg_elevated: Color::Rgb(0xe1, 0xda, 0xcb),
        }
    }

    fn dark() -> Self {
        Self {
            accent_gold: Color::Rgb(0xd9, 0xa4, 0x4e),
            accent_teal: Color::Rgb(0x4f, 0xd1, 0xc5),
            accent_error: Color::Rgb(0xf2, 0x6d, 0x78),
            accent_warning: Color::Rgb(0xe8, 0xb3, 0x4b),
            text_primary: Color::Rgb(0xe9, 0xe4, 0xd8),
            text_secondary: Color::Rgb(0xc0, 0xb9, 0xa8),
            text_muted: Color::Rgb(0x8d, 0x86, 0x76),
            border: Color::Rgb(0x6a, 0x64, 0x56),
            border_subtle: Color::Rgb(0x47, 0x42, 0x38),
            bg_base: Color::Rgb(0x12, 0x11, 0x1d),
            bg_surface: Color::Rgb(0x1d, 0x1c, 0x2b),
            bg_elevated: Color::Rgb(0x2a, 0x28, 0x3c),
        }
    }

    // Helper styles following semantic naming
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn brand_style(&self) -> Style {
        Style::default()
            .fg(self.accent_gold)
            .add_modifier(Modifier::BOLD)
    }

    pub fn positive_style(&self) -> Style {
        Style::default().fg(self.accent_teal)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.accent_error)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.accent_gold)
            .bg(self.bg_elevated)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chip_active_style(&self) -> Style {
        Style::default()
            .fg(self.bg_base)
            .bg(self.accent_gold)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chip_inactive_style(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.bg_surface)
    }

    pub fn panel_block_style(&self) -> Style {
        Style::default().fg(self.border_subtle)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}
