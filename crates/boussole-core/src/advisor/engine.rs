//! Advisor engine - rule trait, evaluation context, and battery runner

use crate::models::{
    Advice, Budget, FinancialGoal, Goal, Habit, HealthMetric, MoodEntry, Project, Transaction,
};
use crate::store::AppState;

/// Read-only snapshot the rules evaluate against
///
/// `today` is injected by the caller (ISO calendar date) so habit
/// rules are deterministic under test.
pub struct AdvisorContext<'a> {
    pub transactions: &'a [Transaction],
    pub budgets: &'a [Budget],
    pub financial_goals: &'a [FinancialGoal],
    pub goals: &'a [Goal],
    pub habits: &'a [Habit],
    pub projects: &'a [Project],
    pub health_metrics: &'a [HealthMetric],
    pub mood_entries: &'a [MoodEntry],
    pub today: &'a str,
}

impl<'a> AdvisorContext<'a> {
    /// Borrow all relevant collections from a store snapshot
    pub fn from_state(state: &'a AppState, today: &'a str) -> Self {
        Self {
            transactions: &state.transactions,
            budgets: &state.budgets,
            financial_goals: &state.financial_goals,
            goals: &state.goals,
            habits: &state.habits,
            projects: &state.projects,
            health_metrics: &state.health_metrics,
            mood_entries: &state.mood_entries,
            today,
        }
    }
}

/// One threshold rule in the battery
pub trait AdviceRule: Send + Sync {
    /// Stable identifier; also the emitted advice's id
    fn id(&self) -> &'static str;

    /// Pure predicate plus template: fires with an [`Advice`] or stays
    /// silent
    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice>;
}

/// Runs the fixed rule battery and orders the output
pub struct Advisor {
    rules: Vec<Box<dyn AdviceRule>>,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Advisor {
    /// Battery in its canonical evaluation order
    pub fn new() -> Self {
        use super::battery::*;

        let mut advisor = Self { rules: vec![] };

        advisor.register(Box::new(LowSavingsRate));
        advisor.register(Box::new(MissingBudgets));
        advisor.register(Box::new(MissingFinancialGoals));
        advisor.register(Box::new(StuckGoals));
        advisor.register(Box::new(NoGoals));
        advisor.register(Box::new(WeakHabitCompletion));
        advisor.register(Box::new(NoHabits));
        advisor.register(Box::new(ProjectOverload));
        advisor.register(Box::new(NoProjects));
        advisor.register(Box::new(ShortSleep));
        advisor.register(Box::new(NoHealthMetrics));
        advisor.register(Box::new(LowMood));
        advisor.register(Box::new(NoMoodEntries));
        advisor.register(Box::new(StrongSavingsRate));

        advisor
    }

    pub fn register(&mut self, rule: Box<dyn AdviceRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule independently, then stable-sort by priority
    /// (high, medium, low); ties keep battery order
    pub fn evaluate_all(&self, ctx: &AdvisorContext<'_>) -> Vec<Advice> {
        let mut fired = Vec::new();

        for rule in &self.rules {
            if let Some(advice) = rule.evaluate(ctx) {
                tracing::debug!(
                    rule = rule.id(),
                    priority = advice.priority.as_str(),
                    "Advice rule fired"
                );
                fired.push(advice);
            }
        }

        fired.sort_by_key(|a| a.priority.rank());

        tracing::debug!(count = fired.len(), "Advice battery evaluated");
        fired
    }

    /// Ids of the registered rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdviceCategory, Priority};

    #[test]
    fn test_battery_registration_order() {
        let advisor = Advisor::new();
        let ids = advisor.rule_ids();
        assert_eq!(ids.len(), 14);
        assert_eq!(ids.first(), Some(&"1"));
        assert_eq!(ids.last(), Some(&"14"));
    }

    #[test]
    fn test_empty_state_fires_the_absence_rules() {
        let state = AppState::default();
        let ctx = AdvisorContext::from_state(&state, "2026-08-29");
        let advice = Advisor::new().evaluate_all(&ctx);

        // Empty data fires every "nothing recorded yet" rule, plus the
        // savings rule (rate is defined as 0 with no income)
        let ids: Vec<&str> = advice.iter().map(|a| a.id.as_str()).collect();
        assert!(ids.contains(&"1")); // 0% savings rate
        assert!(ids.contains(&"2")); // no budgets
        assert!(ids.contains(&"5")); // no goals
        assert!(ids.contains(&"7")); // no habits
        assert!(ids.contains(&"11")); // no health metrics
        assert!(!ids.contains(&"6")); // habit rule needs habits
        assert!(!ids.contains(&"14")); // no praise at 0%
    }

    #[test]
    fn test_output_sorted_high_medium_low() {
        let state = AppState::default();
        let ctx = AdvisorContext::from_state(&state, "2026-08-29");
        let advice = Advisor::new().evaluate_all(&ctx);

        let ranks: Vec<u8> = advice.iter().map(|a| a.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_ties_keep_battery_order() {
        let state = AppState::default();
        let ctx = AdvisorContext::from_state(&state, "2026-08-29");
        let advice = Advisor::new().evaluate_all(&ctx);

        // Among the medium-priority absence rules, battery order is
        // budgets (2), financial goals (3), habits (7), health (11),
        // mood (13)
        let mediums: Vec<&str> = advice
            .iter()
            .filter(|a| a.priority == Priority::Medium)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(mediums, vec!["2", "3", "7", "11", "13"]);
    }

    #[test]
    fn test_idempotent_over_unchanged_snapshot() {
        let state = AppState::default();
        let ctx = AdvisorContext::from_state(&state, "2026-08-29");
        let advisor = Advisor::new();

        let first = advisor.evaluate_all(&ctx);
        let second = advisor.evaluate_all(&ctx);
        assert_eq!(first, second);
    }

    #[test]
    fn test_categories_present_on_empty_state() {
        let state = AppState::default();
        let ctx = AdvisorContext::from_state(&state, "2026-08-29");
        let advice = Advisor::new().evaluate_all(&ctx);

        assert!(advice.iter().any(|a| a.category == AdviceCategory::Finance));
        assert!(advice.iter().any(|a| a.category == AdviceCategory::Goals));
        assert!(advice.iter().any(|a| a.category == AdviceCategory::Professional));
        assert!(advice.iter().any(|a| a.category == AdviceCategory::Psychology));
    }
}
