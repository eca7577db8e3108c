use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub focus_border: Color,
    pub blurred_border: Color,
    pub text: Color,
    pub text_highlight: Color,

    // Specific components
    pub title: Style,
    pub label: Style,
    pub info: Style,
    pub cursor_item: Style,
    pub selected_item: Style,
    pub button_enabled: Style,
    pub button_disabled: Style,
    pub footer: Style,
}

impl Theme {
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus_border).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.blurred_border)
        }
    }

    pub fn button(&self, enabled: bool) -> Style {
        if enabled { self.button_enabled } else { self.button_disabled }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            blurred_border: Color::DarkGray,
            text: Color::White,
            text_highlight: Color::Yellow,

            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            info: Style::default().fg(Color::White),
            cursor_item: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            selected_item: Style::default().fg(Color::Green),
            button_enabled: Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            footer: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        }
    }
}
