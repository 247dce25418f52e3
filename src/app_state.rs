//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::store::{GoalStore, TransactionStore, UserStore};

/// The state of the REST server.
///
/// The stores are trait objects so that the router does not need to know
/// which backend it talks to.
#[derive(Clone)]
pub struct AppState {
    /// The store for [users](crate::User).
    pub user_store: Arc<dyn UserStore>,
    /// The store for [transactions](crate::Transaction).
    pub transaction_store: Arc<dyn TransactionStore>,
    /// The store for [savings goals](crate::SavingsGoal).
    pub goal_store: Arc<dyn GoalStore>,
}

impl AppState {
    /// Create a new [AppState] where a single backend stores every model.
    pub fn new<S>(store: S) -> Self
    where
        S: UserStore + TransactionStore + GoalStore + 'static,
    {
        let store = Arc::new(store);

        Self {
            user_store: store.clone(),
            transaction_store: store.clone(),
            goal_store: store,
        }
    }
}

/// The state needed to create or fetch users.
#[derive(Clone)]
pub struct UserState {
    /// The store for [users](crate::User).
    pub user_store: Arc<dyn UserStore>,
}

impl FromRef<AppState> for UserState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            user_store: state.user_store.clone(),
        }
    }
}

/// The state needed to list, create, edit and delete transactions.
#[derive(Clone)]
pub struct TransactionState {
    /// The store for [transactions](crate::Transaction).
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The state needed to list, create, edit and delete savings goals.
#[derive(Clone)]
pub struct GoalState {
    /// The store for [savings goals](crate::SavingsGoal).
    pub goal_store: Arc<dyn GoalStore>,
}

impl FromRef<AppState> for GoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            goal_store: state.goal_store.clone(),
        }
    }
}

/// The state needed to summarize a user's finances.
#[derive(Clone)]
pub struct DashboardState {
    /// The store for [transactions](crate::Transaction).
    pub transaction_store: Arc<dyn TransactionStore>,
    /// The store for [savings goals](crate::SavingsGoal).
    pub goal_store: Arc<dyn GoalStore>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            goal_store: state.goal_store.clone(),
        }
    }
}
