use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Table;
    let visible = state.store.visible();

    let title = match state.store.filter() {
        Some(label) => format!(" Expenses ({}) ", label),
        None => " Expenses ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    if visible.is_empty() {
        let hint = match state.store.filter() {
            Some(_) => "No expenses in this category. Esc in the filter box clears the filter.",
            None => "No expenses yet. Type an amount and description, then press Enter.",
        };
        let paragraph = Paragraph::new(hint).style(Theme::empty_hint()).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        "Date",
        "Time",
        "Category",
        "Amount",
        "Description",
        "Id",
    ])
    .style(Theme::table_header());

    let rows: Vec<Row> = visible
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.date.clone()).style(Theme::timestamp()),
                Cell::from(expense.time.clone()).style(Theme::timestamp()),
                Cell::from(expense.category.clone()).style(Theme::category(&expense.category)),
                Cell::from(Text::from(format!("{:.2}", expense.amount)).right_aligned())
                    .style(Theme::amount()),
                Cell::from(expense.description.clone()).style(Theme::row_text()),
                Cell::from(expense.id.clone()).style(Theme::id()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(13),
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Theme::selected_row())
        .column_spacing(2);

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected.min(visible.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}
