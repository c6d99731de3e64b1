//! Scripted daily plan

use crate::models::{DailyPlan, HabitCategory, ProjectStatus};

use super::engine::AdvisorContext;

/// Compose the day's scripted plan from the snapshot: the first
/// health-category habit anchors the morning, the first active
/// project anchors the afternoon, the evening slots are fixed
pub fn daily_plan(ctx: &AdvisorContext<'_>) -> DailyPlan {
    let health_habit = ctx
        .habits
        .iter()
        .find(|h| h.category == HabitCategory::Health)
        .map(|h| h.name.clone())
        .unwrap_or_else(|| "Exercice physique (30 min)".to_string());

    let main_project = ctx
        .projects
        .iter()
        .find(|p| p.status == ProjectStatus::Active)
        .map(|p| format!("Travailler sur: {}", p.name))
        .unwrap_or_else(|| "Focus sur votre projet principal".to_string());

    DailyPlan {
        morning: vec![
            "Méditation ou exercices de respiration (10 min)".to_string(),
            "Revoir vos objectifs du jour".to_string(),
            health_habit,
        ],
        afternoon: vec![
            main_project,
            "Pause et hydratation".to_string(),
            "Réviser vos tâches prioritaires".to_string(),
        ],
        evening: vec![
            "Bilan de la journée".to_string(),
            "Préparation du lendemain".to_string(),
            "Moment de détente et déconnexion".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_id, Habit, HabitFrequency, Project};
    use crate::store::AppState;

    #[test]
    fn test_plan_defaults_on_empty_state() {
        let state = AppState::default();
        let ctx = AdvisorContext::from_state(&state, "2026-08-29");
        let plan = daily_plan(&ctx);

        assert_eq!(plan.morning.len(), 3);
        assert_eq!(plan.morning[2], "Exercice physique (30 min)");
        assert_eq!(plan.afternoon[0], "Focus sur votre projet principal");
        assert_eq!(plan.evening[0], "Bilan de la journée");
    }

    #[test]
    fn test_plan_picks_health_habit_and_active_project() {
        let mut state = AppState::default();
        state.habits.push(Habit {
            id: new_id(),
            name: "Course à pied".to_string(),
            frequency: HabitFrequency::Daily,
            category: HabitCategory::Health,
            streak: 0,
            completed_dates: vec![],
            color: None,
        });
        state.projects.push(Project {
            id: new_id(),
            name: "Refonte du site".to_string(),
            description: String::new(),
            status: ProjectStatus::Active,
            deadline: None,
            progress: 30.0,
            tasks: vec![],
        });

        let ctx = AdvisorContext::from_state(&state, "2026-08-29");
        let plan = daily_plan(&ctx);
        assert_eq!(plan.morning[2], "Course à pied");
        assert_eq!(plan.afternoon[0], "Travailler sur: Refonte du site");
    }
}
