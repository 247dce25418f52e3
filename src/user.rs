//! Users and the route for creating or fetching a user by username.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{Error, app_state::UserState, database_id::UserID, store::UserStore};

/// A person whose transactions and goals are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The ID of the user.
    pub id: UserID,
    /// The user's unique name.
    pub username: String,
}

/// The data needed to create a [User].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// The name to register.
    pub username: String,
}

/// Get the user named `username`, creating it if it does not exist yet.
///
/// If the insert fails, which usually means another request created the same
/// username in the meantime, the username is looked up once more before the
/// insert error is returned. This is best effort, not a transactional guarantee.
///
/// # Errors
/// Returns the error from the lookup, or the insert error if the user still
/// does not exist after a failed insert.
pub async fn create_or_get_user(store: &dyn UserStore, username: &str) -> Result<User, Error> {
    if let Some(user) = store.get_by_username(username).await? {
        tracing::debug!("Found existing user {}", user.id);
        return Ok(user);
    }

    let insert_error = match store
        .create(NewUser {
            username: username.to_owned(),
        })
        .await
    {
        Ok(user) => {
            tracing::info!("Created user {} ({})", user.id, user.username);
            return Ok(user);
        }
        Err(error) => error,
    };

    tracing::warn!("Could not create user \"{username}\", checking if it exists: {insert_error}");

    match store.get_by_username(username).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(insert_error),
        Err(lookup_error) => {
            tracing::error!("Could not look up user \"{username}\": {lookup_error}");
            Err(insert_error)
        }
    }
}

/// A route handler that returns the user with the requested username, creating
/// the user first if needed.
pub async fn create_user_endpoint(
    State(state): State<UserState>,
    Json(new_user): Json<NewUser>,
) -> Result<Json<User>, Error> {
    create_or_get_user(state.user_store.as_ref(), &new_user.username)
        .await
        .map(Json)
}
