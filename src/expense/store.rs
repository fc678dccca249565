//! The expense collection and its aggregation logic.
//!
//! `ExpenseStore` owns the ordered sequence of records (insertion order is
//! display order) plus an optional active category filter. All methods are
//! synchronous and free of I/O; persistence lives in `crate::storage`.

use chrono::{Datelike, Local, NaiveDate};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expense::classify::classify;

/// One recorded transaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque unique id: millisecond timestamp in base-36 plus a random suffix.
    pub id: String,
    pub amount: f64,
    pub category: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local clock string, display-only.
    pub time: String,
    pub description: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ExpenseError {
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("description cannot be empty")]
    EmptyDescription,
}

/// Sums over the currently rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub daily: f64,
    pub month: f64,
    pub all: f64,
}

#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    filter: Option<String>,
}

impl ExpenseStore {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self {
            expenses,
            filter: None,
        }
    }

    /// Validate the raw form fields and append a new expense.
    ///
    /// The description is classified into a category and gets its first
    /// letter capitalized; date and time are stamped from the local clock.
    pub fn add(&mut self, raw_amount: &str, raw_description: &str) -> Result<&Expense, ExpenseError> {
        let trimmed = raw_amount.trim();
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| ExpenseError::InvalidAmount(trimmed.to_string()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExpenseError::NonPositiveAmount);
        }
        let description = raw_description.trim();
        if description.is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }

        let now = Local::now();
        let expense = Expense {
            id: generate_id(),
            amount,
            category: classify(description).to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            description: capitalize_first(description),
        };
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Remove the expense with the given id. Silent no-op when absent.
    pub fn delete(&mut self, id: &str) {
        self.expenses.retain(|expense| expense.id != id);
    }

    /// Restrict the rendered view to one category (case-insensitive exact
    /// match). The filter is set even when nothing matches; the returned
    /// count lets the caller surface a "no results" notice.
    pub fn filter_by_category(&mut self, label: &str) -> usize {
        self.filter = Some(label.to_string());
        self.visible().len()
    }

    /// Back to the unfiltered view.
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The currently rendered sequence: filtered subset or full history.
    pub fn visible(&self) -> Vec<&Expense> {
        match &self.filter {
            Some(label) => self
                .expenses
                .iter()
                .filter(|expense| expense.category.eq_ignore_ascii_case(label))
                .collect(),
            None => self.expenses.iter().collect(),
        }
    }

    /// The full, unfiltered sequence. This is what gets persisted.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn totals(&self) -> Totals {
        self.totals_on(Local::now().date_naive())
    }

    /// Totals over the currently rendered view, relative to `today`.
    ///
    /// `daily` sums entries dated exactly `today`; `month` sums entries
    /// whose parsed year matches today's year and parsed month today's
    /// month. Entries with an unparsable date only count toward `all`.
    pub fn totals_on(&self, today: NaiveDate) -> Totals {
        let today_iso = today.format("%Y-%m-%d").to_string();
        let mut totals = Totals::default();
        for expense in self.visible() {
            totals.all += expense.amount;
            if expense.date == today_iso {
                totals.daily += expense.amount;
            }
            if let Ok(date) = NaiveDate::parse_from_str(&expense.date, "%Y-%m-%d") {
                if date.year() == today.year() && date.month() == today.month() {
                    totals.month += expense.amount;
                }
            }
        }
        totals
    }
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while n > 0 {
        out.insert(0, BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}

/// Timestamp-plus-random-suffix id, e.g. `mf1x2x8q-k3p9`. Not
/// cryptographically unique; fine for a single-user local tool.
fn generate_id() -> String {
    let millis = Local::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::rng();
    let suffix: String = (0..4)
        .map(|_| BASE36[rng.random_range(0..36)] as char)
        .collect();
    format!("{}-{}", to_base36(millis), suffix)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample(amount: f64, category: &str, date: &str) -> Expense {
        Expense {
            id: generate_id(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
            time: "12:00:00".to_string(),
            description: "Sample".to_string(),
        }
    }

    #[test]
    fn add_classifies_capitalizes_and_stamps() {
        let mut store = ExpenseStore::new(Vec::new());
        let today = Local::now().format("%Y-%m-%d").to_string();

        let expense = store.add("25.50", "bus ticket").unwrap();
        assert_eq!(expense.amount, 25.5);
        assert_eq!(expense.category, "Transport");
        assert_eq!(expense.description, "Bus ticket");
        assert_eq!(expense.date, today);
        assert!(!expense.id.is_empty());

        assert_eq!(store.totals().all, 25.5);
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut store = ExpenseStore::new(Vec::new());
        for _ in 0..10 {
            store.add("1.00", "coffee").unwrap();
        }
        let ids: HashSet<&str> = store.expenses().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn row_count_tracks_adds_minus_deletes() {
        let mut store = ExpenseStore::new(Vec::new());
        store.add("3", "lunch").unwrap();
        store.add("4", "cab home").unwrap();
        store.add("5", "stuff").unwrap();
        let id = store.expenses()[1].id.clone();
        store.delete(&id);
        assert_eq!(store.visible().len(), 2);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = ExpenseStore::new(Vec::new());
        store.add("3", "lunch").unwrap();
        let id = store.expenses()[0].id.clone();
        store.delete(&id);
        assert!(store.expenses().is_empty());
        store.delete(&id);
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let mut store = ExpenseStore::new(vec![sample(1.0, "Other", "2026-08-29")]);
        store.delete("no-such-id");
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn rejects_invalid_amounts() {
        let mut store = ExpenseStore::new(Vec::new());
        assert_eq!(
            store.add("abc", "lunch"),
            Err(ExpenseError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(store.add("NaN", "lunch"), Err(ExpenseError::NonPositiveAmount));
        assert_eq!(store.add("-5", "lunch"), Err(ExpenseError::NonPositiveAmount));
        assert_eq!(store.add("0", "lunch"), Err(ExpenseError::NonPositiveAmount));
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn rejects_empty_descriptions() {
        let mut store = ExpenseStore::new(Vec::new());
        assert_eq!(store.add("5", "   "), Err(ExpenseError::EmptyDescription));
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_and_set_even_when_empty() {
        let mut store = ExpenseStore::new(Vec::new());
        store.add("10", "dinner out").unwrap();

        assert_eq!(store.filter_by_category("FOOD"), 1);
        assert_eq!(store.visible().len(), 1);

        assert_eq!(store.filter_by_category("transport"), 0);
        assert_eq!(store.filter(), Some("transport"));
        assert!(store.visible().is_empty());
    }

    #[test]
    fn clear_filter_restores_counts_and_totals() {
        let mut store = ExpenseStore::new(Vec::new());
        store.add("10", "dinner out").unwrap();
        store.add("4", "bus fare").unwrap();
        let before = store.totals();

        store.filter_by_category("food");
        assert_eq!(store.visible().len(), 1);
        assert_eq!(store.totals().all, 10.0);

        store.clear_filter();
        assert_eq!(store.visible().len(), 2);
        assert_eq!(store.totals(), before);
    }

    #[test]
    fn persisted_sequence_stays_full_while_filtered() {
        let mut store = ExpenseStore::new(Vec::new());
        store.add("10", "dinner out").unwrap();
        store.add("4", "bus fare").unwrap();
        store.filter_by_category("food");
        assert_eq!(store.expenses().len(), 2);
    }

    #[test]
    fn daily_and_all_totals() {
        let store = ExpenseStore::new(vec![
            sample(10.0, "Other", "2026-08-29"),
            sample(5.0, "Other", "2026-08-28"),
        ]);
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let totals = store.totals_on(today);
        assert_eq!(totals.daily, 10.0);
        assert_eq!(totals.all, 15.0);
    }

    #[test]
    fn month_total_matches_current_month_and_year() {
        // Guards the orientation of the comparison: an entry counts when its
        // year equals the current year AND its month the current month. With
        // the two fields transposed, none of these entries would match and
        // the month total would be zero.
        let store = ExpenseStore::new(vec![
            sample(10.0, "Other", "2026-08-01"),
            sample(7.0, "Other", "2026-07-31"),
            sample(3.0, "Other", "2025-08-10"),
        ]);
        let today = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let totals = store.totals_on(today);
        assert_eq!(totals.month, 10.0);
        assert_eq!(totals.all, 20.0);
    }

    #[test]
    fn unparsable_dates_only_count_toward_all() {
        let store = ExpenseStore::new(vec![sample(9.0, "Other", "not-a-date")]);
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let totals = store.totals_on(today);
        assert_eq!(totals.all, 9.0);
        assert_eq!(totals.daily, 0.0);
        assert_eq!(totals.month, 0.0);
    }

    #[test]
    fn totals_follow_the_rendered_view() {
        let mut store = ExpenseStore::new(vec![
            sample(10.0, "Food", "2026-08-29"),
            sample(4.0, "Transport", "2026-08-29"),
        ]);
        store.filter_by_category("food");
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(store.totals_on(today).all, 10.0);
    }

    #[test]
    fn capitalize_handles_unicode_and_empty() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("échec"), "Échec");
        assert_eq!(capitalize_first("bus"), "Bus");
    }
}
