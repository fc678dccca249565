use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Notices last until the next interaction.
    state.status_message = None;

    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }
    if key.code == KeyCode::BackTab {
        state.cycle_focus_back();
        return vec![];
    }

    match state.focus {
        FocusPanel::Amount | FocusPanel::Description => handle_form_key(state, key),
        FocusPanel::Table => handle_table_key(state, key),
        FocusPanel::Filter => handle_filter_key(state, key),
    }
}

/// The entry form: amount + description fields with a shared submit.
fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Enter {
        let amount = state.amount_input.text.clone();
        let description = state.description_input.text.clone();
        if amount.trim().is_empty() && description.trim().is_empty() {
            return vec![];
        }
        return vec![Action::AddExpense {
            amount,
            description,
        }];
    }
    if key.code == KeyCode::Esc {
        state.clear_form();
        return vec![];
    }
    let input = match state.focus {
        FocusPanel::Amount => &mut state.amount_input,
        _ => &mut state.description_input,
    };
    edit_input(input, key);
    vec![]
}

fn handle_table_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down => {
            state.select_next();
            vec![]
        }
        KeyCode::Home => {
            state.selected = 0;
            vec![]
        }
        KeyCode::End => {
            let len = state.store.visible().len();
            state.selected = len.saturating_sub(1);
            vec![]
        }
        KeyCode::Delete | KeyCode::Char('d') => match state.selected_expense_id() {
            Some(id) => vec![Action::DeleteExpense { id }],
            None => vec![],
        },
        KeyCode::Char(c) => {
            // Start typing: jump to the matching form field
            if c.is_ascii_digit() || c == '.' {
                state.focus = FocusPanel::Amount;
                state.amount_input.insert_char(c);
            } else {
                state.focus = FocusPanel::Description;
                state.description_input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_filter_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            let label = state.filter_input.text.trim().to_string();
            if label.is_empty() {
                return vec![];
            }
            let matches = state.store.filter_by_category(&label);
            state.selected = 0;
            if matches == 0 {
                state.set_status(format!("No expenses found for category \"{}\"", label));
            }
            vec![]
        }
        KeyCode::Esc => {
            state.store.clear_filter();
            state.filter_input.clear();
            state.selected = 0;
            vec![]
        }
        _ => {
            edit_input(&mut state.filter_input, key);
            vec![]
        }
    }
}

fn edit_input(input: &mut InputState, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if c == 'u' {
                    input.clear();
                }
            } else {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::expense::ExpenseStore;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), ExpenseStore::new(Vec::new()))
    }

    fn key(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let mut state = state();
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn form_submit_emits_add_with_raw_field_values() {
        let mut state = state();
        type_text(&mut state, "25.50");
        key(&mut state, KeyCode::Tab);
        type_text(&mut state, "bus ticket");
        let actions = key(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::AddExpense {
                amount: "25.50".to_string(),
                description: "bus ticket".to_string(),
            }]
        );
    }

    #[test]
    fn form_submit_with_empty_fields_is_a_noop() {
        let mut state = state();
        assert!(key(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn delete_key_emits_action_for_selected_row() {
        let mut state = state();
        state.store.add("10", "dinner out").unwrap();
        state.store.add("4", "bus fare").unwrap();
        state.focus = FocusPanel::Table;
        key(&mut state, KeyCode::Down);
        let expected = state.store.expenses()[1].id.clone();
        let actions = key(&mut state, KeyCode::Char('d'));
        assert_eq!(actions, vec![Action::DeleteExpense { id: expected }]);
    }

    #[test]
    fn delete_key_on_empty_table_is_a_noop() {
        let mut state = state();
        state.focus = FocusPanel::Table;
        assert!(key(&mut state, KeyCode::Char('d')).is_empty());
    }

    #[test]
    fn filter_applies_only_when_non_empty() {
        let mut state = state();
        state.focus = FocusPanel::Filter;
        key(&mut state, KeyCode::Enter);
        assert!(state.store.filter().is_none());

        type_text(&mut state, "food");
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.store.filter(), Some("food"));
    }

    #[test]
    fn empty_filter_result_sets_notice_but_keeps_filter() {
        let mut state = state();
        state.store.add("4", "bus fare").unwrap();
        state.focus = FocusPanel::Filter;
        type_text(&mut state, "food");
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.store.filter(), Some("food"));
        assert!(state.store.visible().is_empty());
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("No expenses found"));
    }

    #[test]
    fn escape_clears_filter_and_its_input() {
        let mut state = state();
        state.store.add("10", "dinner out").unwrap();
        state.focus = FocusPanel::Filter;
        type_text(&mut state, "food");
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.store.visible().len(), 1);

        key(&mut state, KeyCode::Esc);
        assert!(state.store.filter().is_none());
        assert!(state.filter_input.text.is_empty());
        assert_eq!(state.store.visible().len(), 1);
    }

    #[test]
    fn typing_on_the_table_jumps_to_the_form() {
        let mut state = state();
        state.focus = FocusPanel::Table;
        key(&mut state, KeyCode::Char('7'));
        assert_eq!(state.focus, FocusPanel::Amount);
        assert_eq!(state.amount_input.text, "7");

        state.focus = FocusPanel::Table;
        key(&mut state, KeyCode::Char('t'));
        assert_eq!(state.focus, FocusPanel::Description);
        assert_eq!(state.description_input.text, "t");
    }
}
