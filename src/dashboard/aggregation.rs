//! Transaction and goal aggregation for the dashboard.
//!
//! Provides functions to total income and expenses, bucket them by month,
//! group expenses by description and work out how far along each goal is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::{
    database_id::GoalID,
    goal::SavingsGoal,
    transaction::{Transaction, TransactionKind},
};

/// How many months the monthly trend covers, including the current month.
pub const MONTHS_IN_TREND: usize = 6;

/// How many expense groups are listed in [DashboardSummary::top_expenses].
pub const TOP_EXPENSE_COUNT: usize = 5;

/// An overview of a user's finances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Income and expenses over all time.
    pub totals: Totals,
    /// Income and expenses for each of the last [MONTHS_IN_TREND] months, oldest first.
    pub monthly: Vec<MonthlyTotals>,
    /// The descriptions the most money was spent on, largest first.
    pub top_expenses: Vec<ExpenseGroup>,
    /// Progress towards each savings goal, in the order the goals were given.
    pub goals: Vec<GoalProgress>,
}

/// Income, expenses and their difference.
///
/// Amounts in different currencies are summed as-is, there is no conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all expenses.
    pub expenses: f64,
    /// `income - expenses`.
    pub balance: f64,
}

/// Income and expenses within one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Three-letter month abbreviation, e.g. "Jan".
    pub month: String,
    /// The calendar year of the month.
    pub year: i32,
    /// The sum of income in the month.
    pub income: f64,
    /// The sum of expenses in the month.
    pub expenses: f64,
}

/// The total spent on expenses sharing a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseGroup {
    /// The shared description.
    pub description: String,
    /// The sum of the expenses.
    pub total: f64,
}

/// How far along a savings goal is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The ID of the goal.
    pub goal_id: GoalID,
    /// The name of the goal.
    pub name: String,
    /// The current amount as a percentage of the target amount. Not capped at 100.
    pub progress_percent: f64,
    /// Days until the target date, negative once it has passed.
    pub days_remaining: i64,
    /// Whether the current amount has reached the target amount.
    pub completed: bool,
    /// Whether the target date has passed without completing the goal.
    pub overdue: bool,
}

/// Build the dashboard summary as of `today`.
pub fn summarize(
    transactions: &[Transaction],
    goals: &[SavingsGoal],
    today: Date,
) -> DashboardSummary {
    DashboardSummary {
        totals: calculate_totals(transactions),
        monthly: aggregate_by_month(transactions, today),
        top_expenses: top_expenses(transactions, TOP_EXPENSE_COUNT),
        goals: goals
            .iter()
            .map(|goal| goal_progress(goal, today))
            .collect(),
    }
}

fn calculate_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => totals.income += transaction.amount,
            TransactionKind::Expense => totals.expenses += transaction.amount,
        }
    }

    totals.balance = totals.income - totals.expenses;
    totals
}

/// The (year, month) pairs of the [MONTHS_IN_TREND] months ending with the month of `today`, oldest first.
fn trend_months(today: Date) -> Vec<(i32, Month)> {
    let mut months = Vec::with_capacity(MONTHS_IN_TREND);
    let (mut year, mut month) = (today.year(), today.month());

    for _ in 0..MONTHS_IN_TREND {
        months.push((year, month));

        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }

    months.reverse();
    months
}

fn aggregate_by_month(transactions: &[Transaction], today: Date) -> Vec<MonthlyTotals> {
    trend_months(today)
        .into_iter()
        .map(|(year, month)| {
            let mut totals = MonthlyTotals {
                month: format_month_label(month).to_owned(),
                year,
                income: 0.0,
                expenses: 0.0,
            };

            for transaction in transactions
                .iter()
                .filter(|transaction| {
                    transaction.date.year() == year && transaction.date.month() == month
                })
            {
                match transaction.kind {
                    TransactionKind::Income => totals.income += transaction.amount,
                    TransactionKind::Expense => totals.expenses += transaction.amount,
                }
            }

            totals
        })
        .collect()
}

fn top_expenses(transactions: &[Transaction], count: usize) -> Vec<ExpenseGroup> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
    {
        *totals.entry(transaction.description.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut groups: Vec<ExpenseGroup> = totals
        .into_iter()
        .map(|(description, total)| ExpenseGroup {
            description: description.to_owned(),
            total,
        })
        .collect();

    // Ties are broken by description so the order does not depend on the hash map.
    groups.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.description.cmp(&b.description))
    });
    groups.truncate(count);
    groups
}

fn goal_progress(goal: &SavingsGoal, today: Date) -> GoalProgress {
    let progress_percent = if goal.target_amount > 0.0 {
        goal.current_amount / goal.target_amount * 100.0
    } else {
        100.0
    };
    let days_remaining = (goal.target_date - today).whole_days();
    let completed = progress_percent >= 100.0;

    GoalProgress {
        goal_id: goal.id,
        name: goal.name.clone(),
        progress_percent,
        days_remaining,
        completed,
        overdue: days_remaining < 0 && !completed,
    }
}

fn format_month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{
        goal::{SavingsGoal, build_test_goal},
        transaction::{Transaction, TransactionKind},
    };

    use super::{
        ExpenseGroup, Totals, aggregate_by_month, calculate_totals, goal_progress, summarize,
        top_expenses, trend_months,
    };

    fn expense(amount: f64, date: time::Date, description: &str) -> Transaction {
        Transaction::build(1, amount, date, description).with_id(0)
    }

    fn income(amount: f64, date: time::Date, description: &str) -> Transaction {
        Transaction::build(1, amount, date, description)
            .kind(TransactionKind::Income)
            .with_id(0)
    }

    fn goal(target_amount: f64, current_amount: f64, target_date: time::Date) -> SavingsGoal {
        SavingsGoal {
            target_amount,
            current_amount,
            target_date,
            ..build_test_goal(1, "Meta").with_id(1)
        }
    }

    #[test]
    fn totals_split_income_and_expenses() {
        let transactions = [
            income(1000.0, date!(2025 - 01 - 01), "Salario"),
            expense(300.0, date!(2025 - 01 - 02), "Renta"),
            expense(50.0, date!(2025 - 01 - 03), "Cafe"),
        ];

        let got = calculate_totals(&transactions);

        assert_eq!(
            got,
            Totals {
                income: 1000.0,
                expenses: 350.0,
                balance: 650.0
            }
        );
    }

    #[test]
    fn trend_wraps_around_the_year() {
        let got = trend_months(date!(2025 - 02 - 15));

        assert_eq!(
            got,
            vec![
                (2024, Month::September),
                (2024, Month::October),
                (2024, Month::November),
                (2024, Month::December),
                (2025, Month::January),
                (2025, Month::February),
            ]
        );
    }

    #[test]
    fn monthly_totals_ignore_transactions_outside_the_trend() {
        let transactions = [
            income(100.0, date!(2025 - 02 - 01), "Salario"),
            expense(40.0, date!(2025 - 02 - 28), "Luz"),
            expense(10.0, date!(2024 - 12 - 31), "Cafe"),
            expense(999.0, date!(2024 - 02 - 10), "Viejo"),
        ];

        let got = aggregate_by_month(&transactions, date!(2025 - 02 - 15));

        assert_eq!(got.len(), 6);
        assert_eq!(got[0].month, "Sep");
        let february = &got[5];
        assert_eq!((february.month.as_str(), february.year), ("Feb", 2025));
        assert_eq!((february.income, february.expenses), (100.0, 40.0));
        let december = &got[3];
        assert_eq!((december.month.as_str(), december.expenses), ("Dec", 10.0));
        let total_expenses: f64 = got.iter().map(|month| month.expenses).sum();
        assert_eq!(total_expenses, 50.0);
    }

    #[test]
    fn top_expenses_are_grouped_and_capped() {
        let day = date!(2025 - 03 - 01);
        let transactions = [
            expense(10.0, day, "Cafe"),
            expense(15.0, day, "Cafe"),
            expense(100.0, day, "Renta"),
            expense(5.0, day, "Pan"),
            expense(7.0, day, "Bus"),
            expense(8.0, day, "Agua"),
            expense(1.0, day, "Chicle"),
            income(5000.0, day, "Salario"),
        ];

        let got = top_expenses(&transactions, 5);

        assert_eq!(
            got,
            vec![
                ExpenseGroup {
                    description: "Renta".to_owned(),
                    total: 100.0
                },
                ExpenseGroup {
                    description: "Cafe".to_owned(),
                    total: 25.0
                },
                ExpenseGroup {
                    description: "Agua".to_owned(),
                    total: 8.0
                },
                ExpenseGroup {
                    description: "Bus".to_owned(),
                    total: 7.0
                },
                ExpenseGroup {
                    description: "Pan".to_owned(),
                    total: 5.0
                },
            ]
        );
    }

    #[test]
    fn goal_in_progress() {
        let got = goal_progress(
            &goal(1000.0, 250.0, date!(2025 - 01 - 11)),
            date!(2025 - 01 - 01),
        );

        assert_eq!(got.progress_percent, 25.0);
        assert_eq!(got.days_remaining, 10);
        assert!(!got.completed);
        assert!(!got.overdue);
    }

    #[test]
    fn goal_past_target_date_is_overdue() {
        let got = goal_progress(
            &goal(1000.0, 250.0, date!(2024 - 12 - 29)),
            date!(2025 - 01 - 01),
        );

        assert_eq!(got.days_remaining, -3);
        assert!(got.overdue);
    }

    #[test]
    fn completed_goal_is_never_overdue() {
        let got = goal_progress(
            &goal(1000.0, 1200.0, date!(2024 - 12 - 29)),
            date!(2025 - 01 - 01),
        );

        assert_eq!(got.progress_percent, 120.0);
        assert!(got.completed);
        assert!(!got.overdue);
    }

    #[test]
    fn zero_target_counts_as_complete() {
        let got = goal_progress(&goal(0.0, 0.0, date!(2025 - 06 - 01)), date!(2025 - 01 - 01));

        assert_eq!(got.progress_percent, 100.0);
        assert!(got.completed);
    }

    #[test]
    fn empty_summary() {
        let got = summarize(&[], &[], date!(2025 - 05 - 05));

        assert_eq!(got.totals, Totals::default());
        assert_eq!(got.monthly.len(), 6);
        assert!(got.top_expenses.is_empty());
        assert!(got.goals.is_empty());
    }
}
