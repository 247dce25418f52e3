use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    Error,
    app_state::TransactionState,
    transaction::{Transaction, TransactionQuery},
};

/// A route handler for listing a user's transactions, newest first.
///
/// Expects the query parameters `user_id` and, optionally, `limit`.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<Vec<Transaction>>, Error> {
    state.transaction_store.list(query).await.map(Json)
}
