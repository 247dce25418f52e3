//! Defines the core data models for savings goals.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::database_id::{GoalID, UserID};

/// An amount of money a user wants to have saved by some date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// The ID of the goal.
    pub id: GoalID,
    /// The ID of the user that owns the goal.
    pub user_id: UserID,
    /// A short name for the goal, e.g. "Vacation 2025".
    #[serde(rename = "nombre")]
    pub name: String,
    /// The amount the user wants to save.
    #[serde(rename = "monto_objetivo")]
    pub target_amount: f64,
    /// The amount saved so far.
    #[serde(rename = "monto_actual", default)]
    pub current_amount: f64,
    /// When the user started saving.
    #[serde(rename = "fecha_inicio")]
    pub start_date: Date,
    /// When the user wants to reach `target_amount`.
    #[serde(rename = "fecha_objetivo")]
    pub target_date: Date,
    /// Optional free text.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// The data needed to insert a [SavingsGoal].
///
/// `current_amount` defaults to zero when it is missing from a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSavingsGoal {
    /// The ID of the user that owns the goal.
    pub user_id: UserID,
    /// A short name for the goal.
    #[serde(rename = "nombre")]
    pub name: String,
    /// The amount the user wants to save.
    #[serde(rename = "monto_objetivo")]
    pub target_amount: f64,
    /// The amount saved so far.
    #[serde(rename = "monto_actual", default)]
    pub current_amount: f64,
    /// When the user started saving.
    #[serde(rename = "fecha_inicio")]
    pub start_date: Date,
    /// When the user wants to reach `target_amount`.
    #[serde(rename = "fecha_objetivo")]
    pub target_date: Date,
    /// Optional free text.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

impl NewSavingsGoal {
    /// Attach the ID assigned by the store.
    #[cfg(test)]
    pub(crate) fn with_id(self, id: GoalID) -> SavingsGoal {
        SavingsGoal {
            id,
            user_id: self.user_id,
            name: self.name,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            start_date: self.start_date,
            target_date: self.target_date,
            description: self.description,
        }
    }
}

/// A partial update to a [SavingsGoal]. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalUpdate {
    /// The new name.
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The new target amount.
    #[serde(
        rename = "monto_objetivo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_amount: Option<f64>,
    /// The new amount saved so far.
    #[serde(
        rename = "monto_actual",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_amount: Option<f64>,
    /// The new start date.
    #[serde(
        rename = "fecha_inicio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Date>,
    /// The new target date.
    #[serde(
        rename = "fecha_objetivo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_date: Option<Date>,
    /// The new description.
    #[serde(
        rename = "descripcion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl SavingsGoalUpdate {
    /// Whether the update would not change any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.start_date.is_none()
            && self.target_date.is_none()
            && self.description.is_none()
    }

    /// Overwrite the fields of `goal` that are set in this update.
    #[cfg(test)]
    pub(crate) fn apply(self, goal: &mut SavingsGoal) {
        if let Some(name) = self.name {
            goal.name = name;
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_amount) = self.current_amount {
            goal.current_amount = current_amount;
        }
        if let Some(start_date) = self.start_date {
            goal.start_date = start_date;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        if self.description.is_some() {
            goal.description = self.description;
        }
    }
}
