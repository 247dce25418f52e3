use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    app_state::TransactionState,
    database_id::TransactionID,
    transaction::{Transaction, TransactionUpdate},
};

/// A route handler for changing some fields of a transaction.
///
/// Only the fields present in the body are changed. A body without any
/// fields is rejected with [Error::NoFieldsToUpdate].
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionID>,
    Json(update): Json<TransactionUpdate>,
) -> Result<Json<Transaction>, Error> {
    tracing::debug!("Updating transaction {transaction_id} with: {update:?}");

    if update.is_empty() {
        return Err(Error::NoFieldsToUpdate);
    }

    let transaction = state
        .transaction_store
        .update(transaction_id, update)
        .await
        .inspect_err(|error| {
            tracing::error!("Could not update transaction {transaction_id}: {error}")
        })?;

    tracing::debug!("Transaction updated: {transaction:?}");

    Ok(Json(transaction))
}
