/// Intents that carry a storage side effect. Pure view changes (filtering,
/// focus, selection) are applied directly by the handler; these are routed
/// to the main loop, which owns the blob store.
#[derive(Debug, PartialEq)]
pub enum Action {
    AddExpense { amount: String, description: String },
    DeleteExpense { id: String },
    Quit,
}
