//! Profit is a personal finance record keeper.
//!
//! This library provides a JSON REST API for users, income and expense
//! transactions and savings goals. The records themselves live in a remote
//! hosted store that is reached over HTTP, and the API can also serve the
//! built single page frontend.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::Router;
use axum_server::Handle;
use tokio::signal;

mod app_state;
pub mod config;
mod dashboard;
mod database_id;
pub mod endpoints;
mod error;
mod goal;
mod logging;
mod message;
mod routing;
pub mod store;
mod transaction;
mod user;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use dashboard::{
    DashboardQuery, DashboardSummary, ExpenseGroup, GoalProgress, MonthlyTotals, Totals,
};
pub use database_id::{DatabaseID, GoalID, TransactionID, UserID};
pub use error::{Error, ErrorBody};
pub use goal::{GoalQuery, NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware, setup_logging};
pub use message::Message;
pub use routing::build_router;
pub use transaction::{
    Currency, NewTransaction, Transaction, TransactionKind, TransactionQuery, TransactionUpdate,
};
pub use user::{NewUser, User};

/// Serve `router` on `addr` until `handle` is told to shut down.
///
/// # Errors
/// Returns [Error::Server] if the address cannot be bound or the server fails.
pub async fn serve(
    addr: SocketAddr,
    router: Router,
    handle: Handle<SocketAddr>,
) -> Result<(), Error> {
    tracing::info!("HTTP server listening on {}", addr);

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .map_err(|error| Error::Server(format!("could not serve on {addr}: {error}")))
}

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
