//! HTTP handler for the dashboard summary.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    Error,
    app_state::DashboardState,
    dashboard::aggregation::{DashboardSummary, summarize},
    database_id::UserID,
    transaction::TransactionQuery,
};

/// The query parameters for the dashboard.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// The user to summarize.
    pub user_id: UserID,
}

/// A route handler that summarizes all of a user's transactions and goals as of today.
///
/// Today is taken in the server's local timezone, falling back to UTC if the
/// local offset cannot be determined.
pub async fn get_dashboard_endpoint(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, Error> {
    let (transactions, goals) = tokio::try_join!(
        state.transaction_store.list(TransactionQuery {
            user_id: query.user_id,
            limit: None,
        }),
        state.goal_store.list(query.user_id),
    )?;

    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    Ok(Json(summarize(&transactions, &goals, today)))
}
