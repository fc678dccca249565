use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    parts.push(Span::styled(
        " Tab: switch | Enter: add/filter | d: delete | Ctrl+C: quit ",
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Amount => "AMOUNT",
        FocusPanel::Description => "DESCRIPTION",
        FocusPanel::Table => "TABLE",
        FocusPanel::Filter => "FILTER",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
