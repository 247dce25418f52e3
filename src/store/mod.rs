//! Contains traits and implementations for objects that store the domain models.
//!
//! The remote store is authoritative: implementations must not cache records
//! between calls.

use async_trait::async_trait;

use crate::{
    Error,
    database_id::{GoalID, TransactionID, UserID},
    goal::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate},
    transaction::{NewTransaction, Transaction, TransactionQuery, TransactionUpdate},
    user::{NewUser, User},
};

#[cfg(test)]
pub(crate) mod memory;
mod supabase;

#[cfg(test)]
pub(crate) use memory::MemoryStore;
pub use supabase::{SupabaseStore, TableNames};

/// Handles the creation and retrieval of users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get the user with the given `username`, or `None` if no such user exists.
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, Error>;

    /// Create a new user.
    ///
    /// Usernames are unique, implementations return an error if `user.username`
    /// is already taken.
    async fn create(&self, user: NewUser) -> Result<User, Error>;
}

/// Handles the creation, retrieval, update and deletion of transactions.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Retrieve transactions in the way defined by `query`, newest first.
    async fn list(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;

    /// Create a new transaction in the store.
    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Change the fields set in `update` and return the updated transaction.
    ///
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    async fn update(
        &self,
        id: TransactionID,
        update: TransactionUpdate,
    ) -> Result<Transaction, Error>;

    /// Delete a transaction. Deleting a transaction that does not exist is not an error.
    async fn delete(&self, id: TransactionID) -> Result<(), Error>;
}

/// Handles the creation, retrieval, update and deletion of savings goals.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Retrieve the goals of a user, ordered by target date, soonest first.
    async fn list(&self, user_id: UserID) -> Result<Vec<SavingsGoal>, Error>;

    /// Create a new goal in the store.
    async fn create(&self, goal: NewSavingsGoal) -> Result<SavingsGoal, Error>;

    /// Change the fields set in `update` and return the updated goal.
    ///
    /// Returns [Error::NotFound] if `id` does not refer to a goal.
    async fn update(&self, id: GoalID, update: SavingsGoalUpdate) -> Result<SavingsGoal, Error>;

    /// Delete a goal. Deleting a goal that does not exist is not an error.
    async fn delete(&self, id: GoalID) -> Result<(), Error>;
}
