//! Savings goals: the model, its create and partial update variants, and the
//! route handlers for listing, creating, editing and deleting goals.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;

pub use core::{NewSavingsGoal, SavingsGoal, SavingsGoalUpdate};
pub use create_endpoint::create_goal_endpoint;
pub use delete_endpoint::delete_goal_endpoint;
pub use edit_endpoint::edit_goal_endpoint;
pub use list_endpoint::{GoalQuery, get_goals_endpoint};

#[cfg(test)]
pub(crate) fn build_test_goal(user_id: crate::database_id::UserID, name: &str) -> NewSavingsGoal {
    use time::macros::date;

    NewSavingsGoal {
        user_id,
        name: name.to_owned(),
        target_amount: 5000.0,
        current_amount: 0.0,
        start_date: date!(2025 - 01 - 01),
        target_date: date!(2025 - 12 - 31),
        description: None,
    }
}
