//! Transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, its create and partial update variants
//! - Route handlers for listing, creating, editing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;

pub use core::{
    Currency, NewTransaction, Transaction, TransactionKind, TransactionQuery, TransactionUpdate,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
