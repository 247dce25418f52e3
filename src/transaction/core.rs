//! Defines the core data models for transactions.
//!
//! The JSON field names match the columns of the remote `transacciones` table
//! and the payloads sent by the bundled frontend.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::database_id::{TransactionID, UserID};

// ============================================================================
// MODELS
// ============================================================================

/// The currency a transaction was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// The Nicaraguan córdoba (NIO).
    #[serde(rename = "Córdobas", alias = "NIO")]
    Cordoba,
    /// The US dollar (USD).
    #[serde(rename = "Dólares", alias = "USD")]
    Dollar,
}

/// Whether money was spent or earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money that was spent.
    #[serde(rename = "Gasto")]
    Expense,
    /// Money that was earned.
    #[serde(rename = "Ingreso")]
    Income,
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionID,
    /// The ID of the user that owns the transaction.
    pub user_id: UserID,
    /// When the transaction happened.
    #[serde(rename = "fecha")]
    pub date: Date,
    /// A text description of what the transaction was for.
    #[serde(rename = "concepto")]
    pub description: String,
    /// The amount of money spent or earned. Always stored as a positive
    /// number, the direction is given by `kind`.
    #[serde(rename = "monto")]
    pub amount: f64,
    /// The currency of `amount`.
    #[serde(rename = "moneda")]
    pub currency: Currency,
    /// Whether this is an expense or income.
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability. The currency
    /// defaults to córdobas and the kind to an expense.
    pub fn build(user_id: UserID, amount: f64, date: Date, description: &str) -> NewTransaction {
        NewTransaction {
            user_id,
            date,
            description: description.to_owned(),
            amount,
            currency: Currency::Cordoba,
            kind: TransactionKind::Expense,
        }
    }
}

/// The data needed to insert a [Transaction], i.e. everything but its ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The ID of the user that owns the transaction.
    pub user_id: UserID,
    /// When the transaction happened.
    #[serde(rename = "fecha")]
    pub date: Date,
    /// A text description of what the transaction was for.
    #[serde(rename = "concepto")]
    pub description: String,
    /// The amount of money spent or earned.
    #[serde(rename = "monto")]
    pub amount: f64,
    /// The currency of `amount`.
    #[serde(rename = "moneda")]
    pub currency: Currency,
    /// Whether this is an expense or income.
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
}

impl NewTransaction {
    /// Set the currency for the transaction.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set whether the transaction is an expense or income.
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach the ID assigned by the store.
    #[cfg(test)]
    pub(crate) fn with_id(self, id: TransactionID) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            currency: self.currency,
            kind: self.kind,
        }
    }
}

/// A partial update to a [Transaction].
///
/// Only the fields that are set are serialized, so the store only changes
/// those columns. A `null` in the request body is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    /// Move the transaction to another user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserID>,
    /// The new date.
    #[serde(rename = "fecha", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    /// The new description.
    #[serde(rename = "concepto", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The new amount.
    #[serde(rename = "monto", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// The new currency.
    #[serde(rename = "moneda", default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// The new kind.
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
}

impl TransactionUpdate {
    /// Whether the update would not change any field.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.currency.is_none()
            && self.kind.is_none()
    }

    /// Overwrite the fields of `transaction` that are set in this update.
    #[cfg(test)]
    pub(crate) fn apply(self, transaction: &mut Transaction) {
        if let Some(user_id) = self.user_id {
            transaction.user_id = user_id;
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(description) = self.description {
            transaction.description = description;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(currency) = self.currency {
            transaction.currency = currency;
        }
        if let Some(kind) = self.kind {
            transaction.kind = kind;
        }
    }
}

/// Defines how transactions should be fetched from
/// [TransactionStore::list](crate::store::TransactionStore::list).
///
/// Transactions are always returned newest first.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionQuery {
    /// Only include the transactions of this user.
    pub user_id: UserID,
    /// Selects up to the first N (`limit`) transactions.
    pub limit: Option<u32>,
}

// ============================================================================
// TESTS
// ============================================================================
