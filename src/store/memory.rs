//! An in-memory store for exercising the route handlers without a remote database.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{
    Error,
    database_id::{DatabaseID, GoalID, TransactionID, UserID},
    goal::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate},
    store::{GoalStore, TransactionStore, UserStore},
    transaction::{NewTransaction, Transaction, TransactionQuery, TransactionUpdate},
    user::{NewUser, User},
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    transactions: Vec<Transaction>,
    goals: Vec<SavingsGoal>,
    last_id: DatabaseID,
}

impl Tables {
    fn next_id(&mut self) -> DatabaseID {
        self.last_id += 1;
        self.last_id
    }
}

/// Keeps every table in a vector behind a mutex. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    fn lock(&self) -> Result<MutexGuard<'_, Tables>, Error> {
        self.tables.lock().map_err(|_| Error::LockError)
    }

    pub(crate) fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.tables.lock().unwrap().transactions.clone()
    }

    pub(crate) fn goals(&self) -> Vec<SavingsGoal> {
        self.tables.lock().unwrap().goals.clone()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, Error> {
        let mut tables = self.lock()?;

        if tables.users.iter().any(|other| other.username == user.username) {
            return Err(Error::Store {
                status: 409,
                message: "duplicate key value violates unique constraint".to_owned(),
            });
        }

        let user = User {
            id: tables.next_id(),
            username: user.username,
        };
        tables.users.push(user.clone());

        Ok(user)
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn list(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let mut transactions: Vec<Transaction> = self
            .lock()?
            .transactions
            .iter()
            .filter(|transaction| transaction.user_id == query.user_id)
            .cloned()
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = query.limit {
            transactions.truncate(limit as usize);
        }

        Ok(transactions)
    }

    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut tables = self.lock()?;
        let transaction = transaction.with_id(tables.next_id());
        tables.transactions.push(transaction.clone());

        Ok(transaction)
    }

    async fn update(
        &self,
        id: TransactionID,
        update: TransactionUpdate,
    ) -> Result<Transaction, Error> {
        let mut tables = self.lock()?;
        let transaction = tables
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;

        update.apply(transaction);

        Ok(transaction.clone())
    }

    async fn delete(&self, id: TransactionID) -> Result<(), Error> {
        self.lock()?
            .transactions
            .retain(|transaction| transaction.id != id);

        Ok(())
    }
}

#[async_trait]
impl GoalStore for MemoryStore {
    async fn list(&self, user_id: UserID) -> Result<Vec<SavingsGoal>, Error> {
        let mut goals: Vec<SavingsGoal> = self
            .lock()?
            .goals
            .iter()
            .filter(|goal| goal.user_id == user_id)
            .cloned()
            .collect();

        goals.sort_by_key(|goal| goal.target_date);

        Ok(goals)
    }

    async fn create(&self, goal: NewSavingsGoal) -> Result<SavingsGoal, Error> {
        let mut tables = self.lock()?;
        let goal = goal.with_id(tables.next_id());
        tables.goals.push(goal.clone());

        Ok(goal)
    }

    async fn update(&self, id: GoalID, update: SavingsGoalUpdate) -> Result<SavingsGoal, Error> {
        let mut tables = self.lock()?;
        let goal = tables
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(Error::NotFound)?;

        update.apply(goal);

        Ok(goal.clone())
    }

    async fn delete(&self, id: GoalID) -> Result<(), Error> {
        self.lock()?.goals.retain(|goal| goal.id != id);

        Ok(())
    }
}
