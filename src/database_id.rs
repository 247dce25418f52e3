//! Database ID type definitions.

/// Alias for the integer type the remote store uses for primary keys.
pub type DatabaseID = i64;
/// The ID of a [User](crate::User).
pub type UserID = DatabaseID;
/// The ID of a [Transaction](crate::Transaction).
pub type TransactionID = DatabaseID;
/// The ID of a [SavingsGoal](crate::SavingsGoal).
pub type GoalID = DatabaseID;
