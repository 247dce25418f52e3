use axum::{Json, extract::State};

use crate::{
    Error,
    app_state::GoalState,
    goal::{NewSavingsGoal, SavingsGoal},
};

/// A route handler for creating a new savings goal, responds with the stored goal.
pub async fn create_goal_endpoint(
    State(state): State<GoalState>,
    Json(new_goal): Json<NewSavingsGoal>,
) -> Result<Json<SavingsGoal>, Error> {
    tracing::debug!("Creating goal: {new_goal:?}");

    state
        .goal_store
        .create(new_goal)
        .await
        .inspect_err(|error| tracing::error!("Could not create goal: {error}"))
        .map(Json)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        endpoints, goal::SavingsGoal, store::MemoryStore, test_utils::must_create_test_server,
    };

    #[tokio::test]
    async fn created_goal_is_retrievable_unchanged() {
        let store = MemoryStore::default();
        let server = must_create_test_server(store.clone());

        let response = server
            .post(endpoints::GOALS)
            .json(&json!({
                "user_id": 3,
                "nombre": "Vacaciones 2025",
                "monto_objetivo": 5000.0,
                "fecha_inicio": "2025-01-01",
                "fecha_objetivo": "2025-12-31",
                "descripcion": "Playa"
            }))
            .await;

        response.assert_status_ok();
        let created = response.json::<SavingsGoal>();
        assert_eq!(
            created,
            SavingsGoal {
                id: created.id,
                user_id: 3,
                name: "Vacaciones 2025".to_owned(),
                target_amount: 5000.0,
                current_amount: 0.0,
                start_date: date!(2025 - 01 - 01),
                target_date: date!(2025 - 12 - 31),
                description: Some("Playa".to_owned()),
            }
        );
        assert_eq!(store.goals(), vec![created]);
    }
}
