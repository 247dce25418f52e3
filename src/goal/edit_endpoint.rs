use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    app_state::GoalState,
    database_id::GoalID,
    goal::{SavingsGoal, SavingsGoalUpdate},
};

/// A route handler for changing some fields of a savings goal.
///
/// A body without any fields is rejected with [Error::NoFieldsToUpdate].
pub async fn edit_goal_endpoint(
    State(state): State<GoalState>,
    Path(goal_id): Path<GoalID>,
    Json(update): Json<SavingsGoalUpdate>,
) -> Result<Json<SavingsGoal>, Error> {
    if update.is_empty() {
        return Err(Error::NoFieldsToUpdate);
    }

    state
        .goal_store
        .update(goal_id, update)
        .await
        .inspect_err(|error| tracing::error!("Could not update goal {goal_id}: {error}"))
        .map(Json)
}
