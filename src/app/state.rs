use crate::config::AppConfig;
use crate::expense::ExpenseStore;

/// Single-line text input with a char-boundary-aware cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Amount,
    Description,
    Table,
    Filter,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: ExpenseStore,
    pub amount_input: InputState,
    pub description_input: InputState,
    pub filter_input: InputState,
    pub focus: FocusPanel,
    /// Selected row index into the currently rendered view.
    pub selected: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, store: ExpenseStore) -> Self {
        Self {
            config,
            store,
            amount_input: InputState::new(),
            description_input: InputState::new(),
            filter_input: InputState::new(),
            focus: FocusPanel::Amount,
            selected: 0,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Amount => FocusPanel::Description,
            FocusPanel::Description => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Filter,
            FocusPanel::Filter => FocusPanel::Amount,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Amount => FocusPanel::Filter,
            FocusPanel::Description => FocusPanel::Amount,
            FocusPanel::Table => FocusPanel::Description,
            FocusPanel::Filter => FocusPanel::Table,
        };
        self.dirty = true;
    }

    pub fn selected_expense_id(&self) -> Option<String> {
        self.store
            .visible()
            .get(self.selected)
            .map(|expense| expense.id.clone())
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.dirty = true;
    }

    pub fn select_next(&mut self) {
        let len = self.store.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
        self.dirty = true;
    }

    /// Keep the selection inside the rendered view after deletes or
    /// filter changes.
    pub fn clamp_selection(&mut self) {
        let len = self.store.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.dirty = true;
    }

    pub fn clear_form(&mut self) {
        self.amount_input.clear();
        self.description_input.clear();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref message) = self.status_message {
            return message.clone();
        }
        let total = self.store.expenses().len();
        match self.store.filter() {
            Some(label) => {
                let shown = self.store.visible().len();
                format!("{}/{} entries (filter: {})", shown, total, label)
            }
            None => format!("{} entries", total),
        }
    }
}
