#![allow(missing_docs)]

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};

use crate::{AppState, build_router, error::ErrorBody, store::MemoryStore};

/// A server for the API routes backed by `store`, without static files.
pub(crate) fn must_create_test_server(store: MemoryStore) -> TestServer {
    TestServer::new(build_router(AppState::new(store), None))
}

#[track_caller]
pub(crate) fn assert_error_detail(response: &TestResponse, status: StatusCode, detail: &str) {
    response.assert_status(status);
    assert_eq!(
        response.json::<ErrorBody>(),
        ErrorBody {
            detail: detail.to_owned()
        }
    );
}
