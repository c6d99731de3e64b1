//! The fixed advice rule battery
//!
//! Rule ids and registration order are stable; both are observable
//! through the sorted output. Thresholds are deliberately per-domain
//! (the 25% stuck-goal cutoff and the 50% habit cutoff are independent
//! constants, not one unified knob).

use crate::metrics::{completed_on, habit_completion_rate, recent_average, savings_rate};
use crate::models::{Advice, AdviceCategory, GoalStatus, Priority, ProjectStatus};

use super::engine::{AdviceRule, AdvisorContext};

/// Savings-rate floor below which the finance warning fires
pub const SAVINGS_RATE_TARGET: f64 = 20.0;
/// In-progress goals under this progress count as stuck
pub const STUCK_GOAL_PROGRESS: f64 = 25.0;
/// Daily habit completion below this percentage triggers a nudge
pub const HABIT_COMPLETION_TARGET: f64 = 50.0;
/// More simultaneous active projects than this is overload
pub const ACTIVE_PROJECT_LIMIT: usize = 5;
/// Average nightly sleep below this many hours is flagged
pub const SLEEP_HOURS_TARGET: f64 = 7.0;
/// Average mood below this (1..=5 scale) is flagged
pub const LOW_MOOD_THRESHOLD: f64 = 3.0;
/// Trailing entries considered for health and mood averages
pub const RECENT_WINDOW: usize = 7;

pub struct LowSavingsRate;

impl AdviceRule for LowSavingsRate {
    fn id(&self) -> &'static str {
        "1"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        let rate = savings_rate(ctx.transactions);
        if rate >= SAVINGS_RATE_TARGET {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Finance,
                "Augmentez votre taux d'épargne",
                format!(
                    "Votre taux d'épargne actuel est de {:.1}%. Visez au moins 20% pour une santé financière optimale.",
                    rate
                ),
                Priority::High,
            )
            .with_actions(vec![
                "Identifiez 3 dépenses non-essentielles à réduire".to_string(),
                "Mettez en place un virement automatique vers l'épargne".to_string(),
                "Utilisez la règle 50/30/20 pour votre budget".to_string(),
            ]),
        )
    }
}

pub struct MissingBudgets;

impl AdviceRule for MissingBudgets {
    fn id(&self) -> &'static str {
        "2"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if !ctx.budgets.is_empty() {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Finance,
                "Créez des budgets par catégorie",
                "Vous n'avez pas encore de budget défini. Les budgets vous aident à contrôler vos dépenses.",
                Priority::Medium,
            )
            .with_actions(vec![
                "Analysez vos dépenses des 3 derniers mois".to_string(),
                "Définissez un budget pour chaque catégorie".to_string(),
                "Révisez vos budgets chaque mois".to_string(),
            ]),
        )
    }
}

pub struct MissingFinancialGoals;

impl AdviceRule for MissingFinancialGoals {
    fn id(&self) -> &'static str {
        "3"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if !ctx.financial_goals.is_empty() {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Finance,
                "Définissez des objectifs d'épargne",
                "Avoir des objectifs financiers clairs vous motivera à épargner davantage.",
                Priority::Medium,
            )
            .with_actions(vec![
                "Listez vos projets à court, moyen et long terme".to_string(),
                "Estimez le montant nécessaire pour chaque projet".to_string(),
                "Créez un objectif d'épargne pour chaque projet".to_string(),
            ]),
        )
    }
}

pub struct StuckGoals;

impl AdviceRule for StuckGoals {
    fn id(&self) -> &'static str {
        "4"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        let stuck = ctx
            .goals
            .iter()
            .filter(|g| g.status == GoalStatus::InProgress && g.progress < STUCK_GOAL_PROGRESS)
            .count();
        if stuck == 0 {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Goals,
                "Débloquez vos objectifs en pause",
                format!(
                    "{} objectif(s) semblent stagner. Analysez les obstacles et ajustez votre approche.",
                    stuck
                ),
                Priority::High,
            )
            .with_actions(vec![
                "Identifiez le premier petit pas pour chaque objectif".to_string(),
                "Décomposez les objectifs en tâches plus petites".to_string(),
                "Bloquez du temps dédié dans votre agenda".to_string(),
            ]),
        )
    }
}

pub struct NoGoals;

impl AdviceRule for NoGoals {
    fn id(&self) -> &'static str {
        "5"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if !ctx.goals.is_empty() {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Goals,
                "Définissez vos objectifs de vie",
                "Des objectifs clairs donnent une direction à votre vie. Commencez par vos priorités.",
                Priority::High,
            )
            .with_actions(vec![
                "Réfléchissez à ce que vous voulez accomplir cette année".to_string(),
                "Utilisez la méthode SMART pour formuler vos objectifs".to_string(),
                "Priorisez vos 3 objectifs les plus importants".to_string(),
            ]),
        )
    }
}

pub struct WeakHabitCompletion;

impl AdviceRule for WeakHabitCompletion {
    fn id(&self) -> &'static str {
        "6"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if ctx.habits.is_empty() {
            return None;
        }
        // Strict: exactly 50% does not fire
        if habit_completion_rate(ctx.habits, ctx.today) >= HABIT_COMPLETION_TARGET {
            return None;
        }
        let completed = completed_on(ctx.habits, ctx.today);
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Personal,
                "Renforcez vos habitudes",
                format!(
                    "Seulement {}/{} habitudes complétées aujourd'hui. La régularité est la clé.",
                    completed,
                    ctx.habits.len()
                ),
                Priority::Medium,
            )
            .with_actions(vec![
                "Commencez par une seule habitude et maîtrisez-la".to_string(),
                "Associez une nouvelle habitude à une existante".to_string(),
                "Créez des rappels pour vos habitudes".to_string(),
            ]),
        )
    }
}

pub struct NoHabits;

impl AdviceRule for NoHabits {
    fn id(&self) -> &'static str {
        "7"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if !ctx.habits.is_empty() {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Personal,
                "Instaurez des habitudes positives",
                "Les habitudes quotidiennes construisent votre vie. Commencez petit mais régulier.",
                Priority::Medium,
            )
            .with_actions(vec![
                "Choisissez une habitude simple (méditation 5 min, lecture...)".to_string(),
                "Pratiquez-la à la même heure chaque jour".to_string(),
                "Célébrez chaque jour de pratique".to_string(),
            ]),
        )
    }
}

pub struct ProjectOverload;

impl AdviceRule for ProjectOverload {
    fn id(&self) -> &'static str {
        "8"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        let active = ctx
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count();
        if active <= ACTIVE_PROJECT_LIMIT {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Professional,
                "Réduisez votre charge de travail",
                format!(
                    "Vous avez {} projets actifs. Trop de projets simultanés diminue votre efficacité.",
                    active
                ),
                Priority::High,
            )
            .with_actions(vec![
                "Priorisez vos 3 projets les plus importants".to_string(),
                "Déléguez ou reportez les projets moins urgents".to_string(),
                "Terminez un projet avant d'en commencer un nouveau".to_string(),
            ]),
        )
    }
}

pub struct NoProjects;

impl AdviceRule for NoProjects {
    fn id(&self) -> &'static str {
        "9"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if !ctx.projects.is_empty() {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Professional,
                "Structurez vos projets",
                "Organiser votre travail en projets améliore votre productivité et votre suivi.",
                Priority::Low,
            )
            .with_actions(vec![
                "Listez vos projets actuels".to_string(),
                "Définissez des échéances réalistes".to_string(),
                "Découpez chaque projet en tâches".to_string(),
            ]),
        )
    }
}

pub struct ShortSleep;

impl AdviceRule for ShortSleep {
    fn id(&self) -> &'static str {
        "10"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        // Absent readings are excluded from the average, not zeroed
        let avg = recent_average(ctx.health_metrics, RECENT_WINDOW, |m| m.sleep_hours);
        if avg <= 0.0 || avg >= SLEEP_HOURS_TARGET {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Health,
                "Améliorez votre sommeil",
                format!(
                    "Votre moyenne de sommeil est de {:.1}h. Visez 7-9h pour une santé optimale.",
                    avg
                ),
                Priority::High,
            )
            .with_actions(vec![
                "Établissez une routine de coucher régulière".to_string(),
                "Évitez les écrans 1h avant de dormir".to_string(),
                "Créez un environnement de sommeil optimal".to_string(),
            ]),
        )
    }
}

pub struct NoHealthMetrics;

impl AdviceRule for NoHealthMetrics {
    fn id(&self) -> &'static str {
        "11"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if !ctx.health_metrics.is_empty() {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Health,
                "Suivez vos métriques de santé",
                "Le suivi de votre santé vous aide à identifier des patterns et améliorer votre bien-être.",
                Priority::Medium,
            )
            .with_actions(vec![
                "Enregistrez votre sommeil quotidiennement".to_string(),
                "Suivez votre activité physique".to_string(),
                "Notez votre hydratation".to_string(),
            ]),
        )
    }
}

pub struct LowMood;

impl AdviceRule for LowMood {
    fn id(&self) -> &'static str {
        "12"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        let avg = recent_average(ctx.mood_entries, RECENT_WINDOW, |m| Some(m.mood as f64));
        if avg <= 0.0 || avg >= LOW_MOOD_THRESHOLD {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Psychology,
                "Prenez soin de votre santé mentale",
                "Votre humeur moyenne récente semble basse. C'est important d'y prêter attention.",
                Priority::High,
            )
            .with_actions(vec![
                "Identifiez les sources de stress ou de tristesse".to_string(),
                "Pratiquez une activité qui vous fait du bien".to_string(),
                "Parlez à quelqu'un de confiance si nécessaire".to_string(),
            ]),
        )
    }
}

pub struct NoMoodEntries;

impl AdviceRule for NoMoodEntries {
    fn id(&self) -> &'static str {
        "13"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        if !ctx.mood_entries.is_empty() {
            return None;
        }
        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Psychology,
                "Suivez votre humeur",
                "Le suivi de votre humeur vous aide à comprendre vos patterns émotionnels.",
                Priority::Medium,
            )
            .with_actions(vec![
                "Enregistrez votre humeur chaque soir".to_string(),
                "Notez les événements qui influencent votre humeur".to_string(),
                "Identifiez vos déclencheurs positifs et négatifs".to_string(),
            ]),
        )
    }
}

/// Positive reinforcement; evaluated last so it sorts after the other
/// low-priority rules
pub struct StrongSavingsRate;

impl AdviceRule for StrongSavingsRate {
    fn id(&self) -> &'static str {
        "14"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Option<Advice> {
        let rate = savings_rate(ctx.transactions);
        if rate < SAVINGS_RATE_TARGET {
            return None;
        }
        Some(Advice::new(
            self.id(),
            AdviceCategory::Finance,
            "Excellent taux d'épargne !",
            format!(
                "Votre taux d'épargne de {:.1}% est excellent. Continuez ainsi !",
                rate
            ),
            Priority::Low,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        new_id, GoalCategory, Habit, HabitCategory, HabitFrequency, HealthMetric, MoodEntry,
        Transaction, TransactionKind,
    };
    use crate::store::AppState;
    use chrono::NaiveDate;

    const TODAY: &str = "2026-08-29";

    fn ctx_from(state: &AppState) -> AdvisorContext<'_> {
        AdvisorContext::from_state(state, TODAY)
    }

    fn tx(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: new_id(),
            kind,
            amount,
            category: "divers".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            recurring: None,
        }
    }

    fn habit(completed_dates: Vec<&str>) -> Habit {
        Habit {
            id: new_id(),
            name: "Sport".to_string(),
            frequency: HabitFrequency::Daily,
            category: HabitCategory::Health,
            streak: 0,
            completed_dates: completed_dates.into_iter().map(String::from).collect(),
            color: None,
        }
    }

    fn sleep_metric(day: u32, hours: Option<f64>) -> HealthMetric {
        HealthMetric {
            id: new_id(),
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            weight: None,
            sleep_hours: hours,
            sleep_quality: None,
            steps: None,
            water_intake: None,
            exercise_minutes: None,
            exercise_type: None,
            calories: None,
        }
    }

    #[test]
    fn test_low_savings_rate_interpolates_rate() {
        let mut state = AppState::default();
        state.transactions.push(tx(TransactionKind::Income, 1000.0));
        state.transactions.push(tx(TransactionKind::Expense, 900.0));

        let advice = LowSavingsRate.evaluate(&ctx_from(&state)).unwrap();
        assert_eq!(advice.priority, Priority::High);
        assert_eq!(advice.title, "Augmentez votre taux d'épargne");
        assert!(advice.content.contains("10.0%"));
    }

    #[test]
    fn test_strong_savings_rate_positive_reinforcement() {
        let mut state = AppState::default();
        state.transactions.push(tx(TransactionKind::Income, 1000.0));
        state.transactions.push(tx(TransactionKind::Expense, 700.0));

        assert!(LowSavingsRate.evaluate(&ctx_from(&state)).is_none());
        let advice = StrongSavingsRate.evaluate(&ctx_from(&state)).unwrap();
        assert_eq!(advice.priority, Priority::Low);
        assert!(!advice.actionable);
        assert!(advice.content.contains("30.0%"));
    }

    #[test]
    fn test_missing_budgets_fires_only_when_empty() {
        let state = AppState::default();
        let advice = MissingBudgets.evaluate(&ctx_from(&state)).unwrap();
        assert_eq!(advice.title, "Créez des budgets par catégorie");
        assert_eq!(advice.priority, Priority::Medium);

        let mut with_budget = AppState::default();
        with_budget.budgets.push(crate::models::Budget {
            id: new_id(),
            category: "courses".to_string(),
            limit: 300.0,
            period: crate::models::BudgetPeriod::Monthly,
        });
        assert!(MissingBudgets.evaluate(&ctx_from(&with_budget)).is_none());
    }

    #[test]
    fn test_stuck_goals_counts_in_progress_under_threshold() {
        let mut state = AppState::default();
        let mut stuck = crate::models::Goal {
            id: new_id(),
            title: "Lire 20 livres".to_string(),
            description: String::new(),
            category: GoalCategory::Personal,
            priority: Priority::Medium,
            status: crate::models::GoalStatus::InProgress,
            progress: 10.0,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: None,
            milestones: vec![],
            tasks: vec![],
        };
        state.goals.push(stuck.clone());

        let advice = StuckGoals.evaluate(&ctx_from(&state)).unwrap();
        assert!(advice.content.starts_with("1 objectif(s)"));

        // 25% exactly is not stuck
        stuck.progress = 25.0;
        stuck.id = new_id();
        state.goals.clear();
        state.goals.push(stuck);
        assert!(StuckGoals.evaluate(&ctx_from(&state)).is_none());
    }

    #[test]
    fn test_half_completed_habits_do_not_fire() {
        let mut state = AppState::default();
        state.habits.push(habit(vec![TODAY]));
        state.habits.push(habit(vec![]));

        // Threshold is strictly below 50%, and 1/2 is exactly 50%
        assert!(WeakHabitCompletion.evaluate(&ctx_from(&state)).is_none());

        state.habits.push(habit(vec![]));
        let advice = WeakHabitCompletion.evaluate(&ctx_from(&state)).unwrap();
        assert!(advice.content.contains("1/3"));
    }

    #[test]
    fn test_project_overload_needs_more_than_five_active() {
        let mut state = AppState::default();
        for i in 0..5 {
            state.projects.push(crate::models::Project {
                id: format!("p{}", i),
                name: format!("Projet {}", i),
                description: String::new(),
                status: crate::models::ProjectStatus::Active,
                deadline: None,
                progress: 0.0,
                tasks: vec![],
            });
        }
        assert!(ProjectOverload.evaluate(&ctx_from(&state)).is_none());

        state.projects.push(crate::models::Project {
            id: "p5".to_string(),
            name: "Projet 5".to_string(),
            description: String::new(),
            status: crate::models::ProjectStatus::Active,
            deadline: None,
            progress: 0.0,
            tasks: vec![],
        });
        let advice = ProjectOverload.evaluate(&ctx_from(&state)).unwrap();
        assert!(advice.content.contains("6 projets actifs"));
    }

    #[test]
    fn test_short_sleep_uses_exclusion_average() {
        let mut state = AppState::default();
        // Two real readings averaging 6.5h; three unrecorded nights
        // must not pull the average below the threshold artificially
        state.health_metrics.push(sleep_metric(1, Some(6.0)));
        state.health_metrics.push(sleep_metric(2, None));
        state.health_metrics.push(sleep_metric(3, Some(7.0)));
        state.health_metrics.push(sleep_metric(4, None));
        state.health_metrics.push(sleep_metric(5, None));

        let advice = ShortSleep.evaluate(&ctx_from(&state)).unwrap();
        assert!(advice.content.contains("6.5h"));
    }

    #[test]
    fn test_short_sleep_silent_without_readings() {
        let mut state = AppState::default();
        state.health_metrics.push(sleep_metric(1, None));
        assert!(ShortSleep.evaluate(&ctx_from(&state)).is_none());
        // And silent when sleep is fine
        state.health_metrics.push(sleep_metric(2, Some(8.0)));
        assert!(ShortSleep.evaluate(&ctx_from(&state)).is_none());
    }

    #[test]
    fn test_low_mood_threshold() {
        let mut state = AppState::default();
        for (day, mood) in [(1, 2), (2, 3), (3, 2)] {
            state.mood_entries.push(MoodEntry {
                id: new_id(),
                date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
                mood,
                energy: 3,
                anxiety: 3,
                notes: None,
                tags: vec![],
            });
        }
        assert!(LowMood.evaluate(&ctx_from(&state)).is_some());

        state.mood_entries.iter_mut().for_each(|m| m.mood = 4);
        assert!(LowMood.evaluate(&ctx_from(&state)).is_none());
    }
}
