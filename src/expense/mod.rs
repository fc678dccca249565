//! Expense domain: record model, keyword classification, and the in-memory store.

pub mod classify;
pub mod store;

pub use store::{Expense, ExpenseError, ExpenseStore, Totals};
