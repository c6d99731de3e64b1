//! Aggregation engine
//!
//! Pure reductions from raw record collections to the derived numbers
//! every view and the advisor consume. Nothing here reads ambient
//! state, nothing is cached, and every division is guarded: a rate
//! over empty input is 0, never NaN or infinity.
//!
//! Window-based averages operate on the *trailing* N records in
//! insertion order, and entries where the target field is absent are
//! excluded from both the sum and the divisor. Folding absent
//! readings in as zero would silently corrupt health and mood
//! analytics.

use crate::models::{Budget, Goal, Habit, Transaction, TransactionKind};

/// Sum of amounts for one transaction kind; empty input is 0
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Running balance: income minus expense
pub fn balance(transactions: &[Transaction]) -> f64 {
    total_by_kind(transactions, TransactionKind::Income)
        - total_by_kind(transactions, TransactionKind::Expense)
}

/// Percentage of income kept: `(income - expense) / income * 100`,
/// or 0 when there is no income
pub fn savings_rate(transactions: &[Transaction]) -> f64 {
    let income = total_by_kind(transactions, TransactionKind::Income);
    if income <= 0.0 {
        return 0.0;
    }
    let expense = total_by_kind(transactions, TransactionKind::Expense);
    (income - expense) / income * 100.0
}

/// How far one budget is consumed by matching expense transactions
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUtilization {
    pub spent: f64,
    /// Uncapped: callers clamp for display if they want to
    pub percentage: f64,
    pub over_budget: bool,
}

/// Spent is recomputed from expense transactions whose category
/// matches the budget; it is never stored
pub fn budget_utilization(budget: &Budget, transactions: &[Transaction]) -> BudgetUtilization {
    let spent: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && t.category == budget.category)
        .map(|t| t.amount)
        .sum();
    let percentage = if budget.limit > 0.0 {
        spent / budget.limit * 100.0
    } else {
        0.0
    };
    BudgetUtilization {
        spent,
        percentage,
        over_budget: percentage > 100.0,
    }
}

/// How many habits have `date` in their completed set
pub fn completed_on(habits: &[Habit], date: &str) -> usize {
    habits
        .iter()
        .filter(|h| h.completed_dates.iter().any(|d| d == date))
        .count()
}

/// Percentage of habits completed on `date`; 0 when no habits exist
pub fn habit_completion_rate(habits: &[Habit], date: &str) -> f64 {
    if habits.is_empty() {
        return 0.0;
    }
    completed_on(habits, date) as f64 / habits.len() as f64 * 100.0
}

/// Average of `field` over the trailing `window` entries, excluding
/// entries where the field is absent (or NaN) from both the sum and
/// the divisor; 0 when nothing in the window has the field set
pub fn recent_average<T>(series: &[T], window: usize, field: impl Fn(&T) -> Option<f64>) -> f64 {
    let start = series.len().saturating_sub(window);
    let present: Vec<f64> = series[start..]
        .iter()
        .filter_map(&field)
        .filter(|v| !v.is_nan())
        .collect();
    if present.is_empty() {
        return 0.0;
    }
    present.iter().sum::<f64>() / present.len() as f64
}

/// Arithmetic mean of goal progress; 0 when no goals
pub fn goal_progress_average(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    goals.iter().map(|g| g.progress).sum::<f64>() / goals.len() as f64
}

/// Simple difference used for trend arrows
pub fn trend_delta(latest: f64, previous: f64) -> f64 {
    latest - previous
}

/// Sign-to-arrow mapping for a trend delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Up
        } else if delta < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_id, BudgetPeriod, HabitCategory, HabitFrequency, HealthMetric};
    use chrono::NaiveDate;

    fn tx(kind: TransactionKind, amount: f64, category: &str) -> Transaction {
        Transaction {
            id: new_id(),
            kind,
            amount,
            category: category.to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            recurring: None,
        }
    }

    fn habit(completed_dates: Vec<&str>) -> Habit {
        Habit {
            id: new_id(),
            name: "Lecture".to_string(),
            frequency: HabitFrequency::Daily,
            category: HabitCategory::Learning,
            streak: completed_dates.len() as u32,
            completed_dates: completed_dates.into_iter().map(String::from).collect(),
            color: None,
        }
    }

    fn metric(day: u32, sleep_hours: Option<f64>) -> HealthMetric {
        HealthMetric {
            id: new_id(),
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            weight: None,
            sleep_hours,
            sleep_quality: None,
            steps: None,
            water_intake: None,
            exercise_minutes: None,
            exercise_type: None,
            calories: None,
        }
    }

    #[test]
    fn test_total_by_kind_empty_is_zero() {
        assert_eq!(total_by_kind(&[], TransactionKind::Income), 0.0);
    }

    #[test]
    fn test_balance_matches_totals_for_any_partition() {
        let txs = vec![
            tx(TransactionKind::Income, 1000.0, "salaire"),
            tx(TransactionKind::Expense, 300.0, "loyer"),
            tx(TransactionKind::Expense, 150.0, "courses"),
            tx(TransactionKind::Income, 50.0, "vente"),
        ];
        let expected = total_by_kind(&txs, TransactionKind::Income)
            - total_by_kind(&txs, TransactionKind::Expense);
        assert_eq!(balance(&txs), expected);

        // Additivity over a partition
        let (a, b) = txs.split_at(2);
        assert_eq!(balance(a) + balance(b), balance(&txs));
    }

    #[test]
    fn test_savings_rate_no_income_is_zero() {
        assert_eq!(savings_rate(&[]), 0.0);
        let only_expenses = vec![tx(TransactionKind::Expense, 100.0, "loyer")];
        assert_eq!(savings_rate(&only_expenses), 0.0);
        // All-zero amounts must not produce NaN
        let zeros = vec![
            tx(TransactionKind::Income, 0.0, "rien"),
            tx(TransactionKind::Expense, 0.0, "rien"),
        ];
        assert!(!savings_rate(&zeros).is_nan());
    }

    #[test]
    fn test_savings_rate_ten_percent() {
        let txs = vec![
            tx(TransactionKind::Income, 1000.0, "salaire"),
            tx(TransactionKind::Expense, 900.0, "vie"),
        ];
        assert!((savings_rate(&txs) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_utilization_uncapped_and_over() {
        let budget = Budget {
            id: new_id(),
            category: "courses".to_string(),
            limit: 100.0,
            period: BudgetPeriod::Monthly,
        };
        let txs = vec![
            tx(TransactionKind::Expense, 90.0, "courses"),
            tx(TransactionKind::Expense, 60.0, "courses"),
            tx(TransactionKind::Expense, 40.0, "loyer"),
            tx(TransactionKind::Income, 500.0, "courses"),
        ];
        let u = budget_utilization(&budget, &txs);
        assert_eq!(u.spent, 150.0);
        assert_eq!(u.percentage, 150.0);
        assert!(u.over_budget);
    }

    #[test]
    fn test_habit_completion_rate_empty_is_zero() {
        assert_eq!(habit_completion_rate(&[], "2026-08-29"), 0.0);
    }

    #[test]
    fn test_habit_completion_rate_half() {
        let habits = vec![habit(vec!["2026-08-29"]), habit(vec![])];
        assert_eq!(habit_completion_rate(&habits, "2026-08-29"), 50.0);
    }

    #[test]
    fn test_recent_average_excludes_absent_fields() {
        let series = vec![
            metric(1, Some(8.0)),
            metric(2, None),
            metric(3, Some(6.0)),
        ];
        // None must not drag the average toward zero
        let avg = recent_average(&series, 7, |m| m.sleep_hours);
        assert_eq!(avg, 7.0);
    }

    #[test]
    fn test_recent_average_all_absent_is_zero() {
        let series = vec![metric(1, None), metric(2, None)];
        let avg = recent_average(&series, 7, |m| m.sleep_hours);
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }

    #[test]
    fn test_recent_average_uses_trailing_window() {
        let series: Vec<HealthMetric> =
            (1..=10).map(|d| metric(d, Some(d as f64))).collect();
        // Last 3 entries: 8, 9, 10
        assert_eq!(recent_average(&series, 3, |m| m.sleep_hours), 9.0);
        // Window larger than the series averages whatever exists
        let short = vec![metric(1, Some(4.0))];
        assert_eq!(recent_average(&short, 7, |m| m.sleep_hours), 4.0);
    }

    #[test]
    fn test_recent_average_skips_nan() {
        let series = vec![metric(1, Some(f64::NAN)), metric(2, Some(6.0))];
        assert_eq!(recent_average(&series, 7, |m| m.sleep_hours), 6.0);
    }

    #[test]
    fn test_goal_progress_average_empty_is_zero() {
        assert_eq!(goal_progress_average(&[]), 0.0);
    }

    #[test]
    fn test_trend_classification() {
        assert_eq!(Trend::from_delta(trend_delta(71.0, 70.0)), Trend::Up);
        assert_eq!(Trend::from_delta(trend_delta(69.0, 70.0)), Trend::Down);
        assert_eq!(Trend::from_delta(trend_delta(70.0, 70.0)), Trend::Flat);
    }
}
