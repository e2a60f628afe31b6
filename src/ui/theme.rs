use ratatui::style::{Color, Modifier, Style};

/// Palette for one of the two display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub card: Color,
    pub panel: Color,
    pub side: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        bg: Color::Rgb(0x0f, 0x14, 0x20),
        card: Color::Rgb(0x17, 0x1f, 0x2f),
        panel: Color::Rgb(0x14, 0x1c, 0x2b),
        side: Color::Rgb(0x12, 0x1a, 0x29),
        fg: Color::Rgb(0xed, 0xf2, 0xff),
        muted: Color::Rgb(0x9c, 0xa9, 0xc7),
        accent: Color::Rgb(0x32, 0x91, 0xff),
        border: Color::Rgb(0x23, 0x31, 0x4a),
    };

    pub const LIGHT: Theme = Theme {
        bg: Color::Rgb(0xed, 0xf1, 0xf8),
        card: Color::Rgb(0xf7, 0xf9, 0xfe),
        panel: Color::Rgb(0xff, 0xff, 0xff),
        side: Color::Rgb(0xf0, 0xf4, 0xfb),
        fg: Color::Rgb(0x1d, 0x2b, 0x44),
        muted: Color::Rgb(0x5b, 0x6d, 0x90),
        accent: Color::Rgb(0x2b, 0x83, 0xea),
        border: Color::Rgb(0xc5, 0xd3, 0xea),
    };

    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel)
    }

    pub fn sidebar(&self) -> Style {
        Style::default().fg(self.fg).bg(self.side)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn headline(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_tab(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.card)
            .add_modifier(Modifier::BOLD)
    }
}
