mod expense_table;
mod input_box;
mod layout;
mod status_bar;
mod theme;
mod totals_bar;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    input_box::render(
        frame,
        app_layout.amount_input,
        " Amount ",
        &state.amount_input,
        state.focus == FocusPanel::Amount,
    );
    input_box::render(
        frame,
        app_layout.description_input,
        " Description ",
        &state.description_input,
        state.focus == FocusPanel::Description,
    );
    let filter_title = match state.store.filter() {
        Some(label) => format!(" Filter: {} ", label),
        None => " Filter (category) ".to_string(),
    };
    input_box::render(
        frame,
        app_layout.filter_box,
        &filter_title,
        &state.filter_input,
        state.focus == FocusPanel::Filter,
    );
    totals_bar::render(frame, app_layout.totals_bar, state);
    expense_table::render(frame, app_layout.table, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
