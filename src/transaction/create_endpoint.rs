use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::TransactionState,
    transaction::{NewTransaction, Transaction},
};

/// A route handler for creating a new transaction, responds with the stored transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Json(new_transaction): Json<NewTransaction>,
) -> Result<Json<Transaction>, Error> {
    tracing::debug!("Creating transaction: {new_transaction:?}");

    let transaction = state
        .transaction_store
        .create(new_transaction)
        .await
        .inspect_err(|error| tracing::error!("Could not create transaction: {error}"))?;

    tracing::debug!("Transaction created: {transaction:?}");

    Ok(Json(transaction))
}
