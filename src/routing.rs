//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    AppState,
    dashboard::get_dashboard_endpoint,
    endpoints,
    goal::{create_goal_endpoint, delete_goal_endpoint, edit_goal_endpoint, get_goals_endpoint},
    logging::logging_middleware,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transactions_endpoint,
    },
    user::create_user_endpoint,
};

/// Return a router with all the app's routes.
///
/// If `static_dir` is an existing directory, its files are served for any
/// path that is not an API route, with `index.html` for directories.
/// Request and response bodies are only logged for the API routes.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route(endpoints::USERS, post(create_user_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::GOALS,
            get(get_goals_endpoint).post(create_goal_endpoint),
        )
        .route(
            endpoints::GOAL,
            put(edit_goal_endpoint).delete(delete_goal_endpoint),
        )
        .route(endpoints::DASHBOARD, get(get_dashboard_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state);

    let router = match static_dir {
        Some(dir) if dir.is_dir() => router.fallback_service(ServeDir::new(dir)),
        Some(dir) => {
            tracing::warn!("Static directory not found at {}", dir.display());
            router
        }
        None => router,
    };

    add_tracing_layer(router).layer(CorsLayer::permissive())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are turned into responses.
        .on_failure(());

    router.layer(tracing_layer)
}
