use axum::{
    Json,
    extract::{Path, State},
};

use crate::{Error, app_state::TransactionState, database_id::TransactionID, message::Message};

/// A route handler for deleting a transaction.
///
/// Responds with the same confirmation whether or not the transaction existed.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionID>,
) -> Result<Json<Message>, Error> {
    state
        .transaction_store
        .delete(transaction_id)
        .await
        .inspect_err(|error| {
            tracing::error!("Could not delete transaction {transaction_id}: {error}")
        })?;

    Ok(Json(Message::new("Transaction deleted")))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        endpoints::{self, format_endpoint},
        message::Message,
        store::{MemoryStore, TransactionStore},
        test_utils::must_create_test_server,
        transaction::Transaction,
    };

    #[tokio::test]
    async fn deletes_transaction() {
        let store = MemoryStore::default();
        let transaction = TransactionStore::create(
            &store,
            Transaction::build(1, 1.23, date!(2025 - 10 - 26), "Test"),
        )
        .await
        .unwrap();
        let server = must_create_test_server(store.clone());

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, transaction.id))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Message>(),
            Message::new("Transaction deleted")
        );
        assert!(store.transactions().is_empty());
    }

    #[tokio::test]
    async fn deleting_missing_transaction_succeeds() {
        let server = must_create_test_server(MemoryStore::default());

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 12))
            .await;

        response.assert_status_ok();
    }
}
