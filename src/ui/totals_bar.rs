use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Daily, monthly, and all-time sums over the currently rendered view,
/// truncated to two decimal places.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let totals = state.store.totals();

    let block = Block::default()
        .title(" Totals ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let line = Line::from(vec![
        Span::styled("Today ", Theme::totals_label()),
        Span::styled(format!("{:.2}", totals.daily), Theme::totals_value()),
        Span::raw("    "),
        Span::styled("Month ", Theme::totals_label()),
        Span::styled(format!("{:.2}", totals.month), Theme::totals_value()),
        Span::raw("    "),
        Span::styled("All ", Theme::totals_label()),
        Span::styled(format!("{:.2}", totals.all), Theme::totals_value()),
    ]);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);
}
