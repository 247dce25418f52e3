//! Dashboard module
//!
//! Summarizes a user's transactions and savings goals: overall totals, a
//! monthly trend, the largest expenses and progress towards each goal.

mod aggregation;
mod handlers;

pub use aggregation::{DashboardSummary, ExpenseGroup, GoalProgress, MonthlyTotals, Totals};
pub use handlers::{DashboardQuery, get_dashboard_endpoint};
