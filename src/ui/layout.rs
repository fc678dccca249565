use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub amount_input: Rect,
    pub description_input: Rect,
    pub filter_box: Rect,
    pub totals_bar: Rect,
    pub table: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical: entry form | filter + totals | table | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Entry form
            Constraint::Length(3), // Filter + totals
            Constraint::Min(5),    // Expense table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let form_row = main_chunks[0];
    let filter_row = main_chunks[1];
    let table = main_chunks[2];
    let status_bar = main_chunks[3];

    // Entry form: amount | description
    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Amount
            Constraint::Min(20),    // Description
        ])
        .split(form_row);

    // Filter row: filter input | totals
    let filter_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Filter input
            Constraint::Min(30),    // Totals
        ])
        .split(filter_row);

    AppLayout {
        amount_input: form_chunks[0],
        description_input: form_chunks[1],
        filter_box: filter_chunks[0],
        totals_bar: filter_chunks[1],
        table,
        status_bar,
    }
}
