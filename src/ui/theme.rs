use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(80, 200, 210);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn table_header() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn row_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn amount() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn id() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn category(label: &str) -> Style {
        let color = match label {
            "Food" => Color::Green,
            "Transport" => Color::Blue,
            "Utility" => Color::Yellow,
            "Entertainment" => Color::Magenta,
            _ => Color::Gray,
        };
        Style::default().fg(color)
    }

    pub fn totals_label() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn totals_value() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn empty_hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
