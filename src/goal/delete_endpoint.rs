use axum::{
    Json,
    extract::{Path, State},
};

use crate::{Error, app_state::GoalState, database_id::GoalID, message::Message};

/// A route handler for deleting a savings goal.
pub async fn delete_goal_endpoint(
    State(state): State<GoalState>,
    Path(goal_id): Path<GoalID>,
) -> Result<Json<Message>, Error> {
    state
        .goal_store
        .delete(goal_id)
        .await
        .inspect_err(|error| tracing::error!("Could not delete goal {goal_id}: {error}"))?;

    Ok(Json(Message::new("Goal deleted")))
}
