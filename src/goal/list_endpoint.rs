use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{Error, app_state::GoalState, database_id::UserID, goal::SavingsGoal};

/// The query parameters for listing goals.
#[derive(Debug, Deserialize)]
pub struct GoalQuery {
    /// Only include the goals of this user.
    pub user_id: UserID,
}

/// A route handler for listing a user's savings goals, soonest target date first.
pub async fn get_goals_endpoint(
    State(state): State<GoalState>,
    Query(query): Query<GoalQuery>,
) -> Result<Json<Vec<SavingsGoal>>, Error> {
    state.goal_store.list(query.user_id).await.map(Json)
}
