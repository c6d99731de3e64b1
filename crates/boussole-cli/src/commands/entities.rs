//! Record management commands (add, list, delete, toggles)

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};

use boussole_core::format::{capitalize_first, energy_label, format_currency, mood_label, truncate};
use boussole_core::metrics::budget_utilization;
use boussole_core::models::{
    new_id, Budget, BudgetPeriod, FinancialGoal, Goal, GoalCategory, GoalStatus, Habit,
    HabitCategory, HabitFrequency, HealthMetric, JournalEntry, MoodEntry, Priority, Project,
    ProjectStatus, Transaction, TransactionKind,
};
use boussole_core::store::Store;

use super::today;

fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn cmd_add_transaction(
    store: &mut Store,
    kind: &str,
    amount: f64,
    category: &str,
    description: &str,
    date: Option<&str>,
) -> Result<()> {
    let kind: TransactionKind = kind.parse().map_err(|e: String| anyhow!(e))?;
    if amount <= 0.0 {
        bail!("Amount must be positive");
    }

    let tx = Transaction {
        id: new_id(),
        kind,
        amount,
        category: category.to_string(),
        description: description.to_string(),
        date: parse_date(date)?,
        recurring: None,
    };
    let id = tx.id.clone();
    store.add_transaction(tx);

    println!(
        "✅ Recorded {} of {} in '{}' ({})",
        kind.as_str(),
        format_currency(amount),
        category,
        id
    );
    Ok(())
}

pub fn cmd_add_budget(store: &mut Store, category: &str, limit: f64, period: &str) -> Result<()> {
    let period: BudgetPeriod = period.parse().map_err(|e: String| anyhow!(e))?;
    if limit <= 0.0 {
        bail!("Limit must be positive");
    }

    let budget = Budget {
        id: new_id(),
        category: category.to_string(),
        limit,
        period,
    };
    let id = budget.id.clone();
    store.add_budget(budget);

    println!(
        "✅ Budget '{}' created: {} per {} ({})",
        category,
        format_currency(limit),
        period.as_str(),
        id
    );
    Ok(())
}

pub fn cmd_add_financial_goal(
    store: &mut Store,
    name: &str,
    target: f64,
    deadline: &str,
) -> Result<()> {
    if target <= 0.0 {
        bail!("Target amount must be positive");
    }

    let goal = FinancialGoal {
        id: new_id(),
        name: name.to_string(),
        target_amount: target,
        current_amount: 0.0,
        deadline: parse_date(Some(deadline))?,
        color: None,
    };
    let id = goal.id.clone();
    store.add_financial_goal(goal);

    println!(
        "💰 Savings target '{}' created: {} by {} ({})",
        name,
        format_currency(target),
        deadline,
        id
    );
    Ok(())
}

pub fn cmd_add_goal(store: &mut Store, title: &str, category: &str, priority: &str) -> Result<()> {
    let category: GoalCategory = category.parse().map_err(|e: String| anyhow!(e))?;
    let priority: Priority = priority.parse().map_err(|e: String| anyhow!(e))?;

    let goal = Goal {
        id: new_id(),
        title: title.to_string(),
        description: String::new(),
        category,
        priority,
        status: GoalStatus::NotStarted,
        progress: 0.0,
        start_date: Local::now().date_naive(),
        end_date: None,
        milestones: Vec::new(),
        tasks: Vec::new(),
    };
    let id = goal.id.clone();
    store.add_goal(goal);

    println!("🎯 Goal '{}' created ({})", title, id);
    Ok(())
}

pub fn cmd_add_habit(
    store: &mut Store,
    name: &str,
    category: &str,
    frequency: &str,
) -> Result<()> {
    let category: HabitCategory = category.parse().map_err(|e: String| anyhow!(e))?;
    let frequency: HabitFrequency = frequency.parse().map_err(|e: String| anyhow!(e))?;

    let habit = Habit {
        id: new_id(),
        name: name.to_string(),
        frequency,
        category,
        streak: 0,
        completed_dates: Vec::new(),
        color: None,
    };
    let id = habit.id.clone();
    store.add_habit(habit);

    println!("✅ Habit '{}' created ({})", name, id);
    Ok(())
}

pub fn cmd_add_project(store: &mut Store, name: &str, description: &str) -> Result<()> {
    let project = Project {
        id: new_id(),
        name: name.to_string(),
        description: description.to_string(),
        status: ProjectStatus::Active,
        deadline: None,
        progress: 0.0,
        tasks: Vec::new(),
    };
    let id = project.id.clone();
    store.add_project(project);

    println!("💼 Project '{}' created ({})", name, id);
    Ok(())
}

pub fn cmd_add_health(
    store: &mut Store,
    sleep: Option<f64>,
    exercise: Option<u32>,
    steps: Option<u32>,
    date: Option<&str>,
) -> Result<()> {
    if sleep.is_none() && exercise.is_none() && steps.is_none() {
        bail!("Nothing to record: pass at least one of --sleep, --exercise, --steps");
    }

    let metric = HealthMetric {
        id: new_id(),
        date: parse_date(date)?,
        weight: None,
        sleep_hours: sleep,
        sleep_quality: None,
        steps,
        water_intake: None,
        exercise_minutes: exercise,
        exercise_type: None,
        calories: None,
    };
    let id = metric.id.clone();
    store.add_health_metric(metric);

    println!("🏃 Health check-in recorded ({})", id);
    Ok(())
}

pub fn cmd_add_mood(
    store: &mut Store,
    mood: u8,
    energy: u8,
    anxiety: u8,
    notes: Option<&str>,
) -> Result<()> {
    for (label, value) in [("mood", mood), ("energy", energy), ("anxiety", anxiety)] {
        if !(1..=5).contains(&value) {
            bail!("{} must be between 1 and 5", label);
        }
    }

    let entry = MoodEntry {
        id: new_id(),
        date: Local::now().date_naive(),
        mood,
        energy,
        anxiety,
        notes: notes.map(String::from),
        tags: Vec::new(),
    };
    let id = entry.id.clone();
    store.add_mood_entry(entry);

    println!("🧠 Mood recorded: {} ({})", mood_label(mood), id);
    Ok(())
}

pub fn cmd_add_journal(
    store: &mut Store,
    content: &str,
    title: Option<&str>,
    mood: Option<u8>,
) -> Result<()> {
    if content.trim().is_empty() {
        bail!("Journal entry cannot be empty");
    }
    if let Some(mood) = mood {
        if !(1..=5).contains(&mood) {
            bail!("mood must be between 1 and 5");
        }
    }

    let entry = JournalEntry {
        id: new_id(),
        date: Local::now().date_naive(),
        title: title.map(String::from),
        content: content.to_string(),
        mood,
        gratitude: None,
        tags: Vec::new(),
    };
    let id = entry.id.clone();
    store.add_journal_entry(entry);

    println!("📓 Journal entry saved ({})", id);
    Ok(())
}

/// Most recent `limit` items of a slice, oldest first
fn tail<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) => &items[items.len().saturating_sub(n)..],
        None => items,
    }
}

pub fn cmd_list(store: &Store, collection: &str, limit: Option<usize>) -> Result<()> {
    let state = store.state();
    match collection {
        "transactions" => {
            if state.transactions.is_empty() {
                println!("No transactions yet.");
                return Ok(());
            }
            for tx in tail(&state.transactions, limit) {
                let sign = match tx.kind {
                    TransactionKind::Income => "+",
                    TransactionKind::Expense => "-",
                };
                println!(
                    "  {}  {}  {}{}  {}  {}",
                    tx.id,
                    tx.date,
                    sign,
                    format_currency(tx.amount),
                    tx.category,
                    truncate(&tx.description, 40)
                );
            }
        }
        "budgets" => {
            if state.budgets.is_empty() {
                println!("No budgets yet.");
                return Ok(());
            }
            for b in tail(&state.budgets, limit) {
                let usage = budget_utilization(b, &state.transactions);
                let flag = if usage.over_budget { " ⚠️" } else { "" };
                println!(
                    "  {}  {}  {} / {} per {} ({:.0}%){}",
                    b.id,
                    b.category,
                    format_currency(usage.spent),
                    format_currency(b.limit),
                    b.period.as_str(),
                    usage.percentage,
                    flag
                );
            }
        }
        "goals" => {
            if state.goals.is_empty() {
                println!("No goals yet.");
                return Ok(());
            }
            for g in tail(&state.goals, limit) {
                println!(
                    "  {}  [{}] {} — {:.0}% ({})",
                    g.id,
                    g.priority.as_str(),
                    g.title,
                    g.progress,
                    g.status.as_str()
                );
            }
        }
        "habits" => {
            if state.habits.is_empty() {
                println!("No habits yet.");
                return Ok(());
            }
            let today = today();
            for h in tail(&state.habits, limit) {
                let mark = if h.completed_dates.iter().any(|d| d == &today) {
                    "✅"
                } else {
                    "⬜"
                };
                println!(
                    "  {}  {} {} [{}] (streak: {}, {})",
                    h.id,
                    mark,
                    h.name,
                    capitalize_first(h.category.as_str()),
                    h.streak,
                    h.frequency.as_str()
                );
            }
        }
        "projects" => {
            if state.projects.is_empty() {
                println!("No projects yet.");
                return Ok(());
            }
            for p in tail(&state.projects, limit) {
                println!(
                    "  {}  {} — {:.0}% ({})",
                    p.id,
                    p.name,
                    p.progress,
                    p.status.as_str()
                );
            }
        }
        "health" => {
            if state.health_metrics.is_empty() {
                println!("No health entries yet.");
                return Ok(());
            }
            for m in tail(&state.health_metrics, limit) {
                let sleep = m
                    .sleep_hours
                    .map(|h| format!("{:.1}h sleep", h))
                    .unwrap_or_else(|| "-".to_string());
                println!("  {}  {}  {}", m.id, m.date, sleep);
            }
        }
        "moods" => {
            if state.mood_entries.is_empty() {
                println!("No mood entries yet.");
                return Ok(());
            }
            for m in tail(&state.mood_entries, limit) {
                println!(
                    "  {}  {}  {} (énergie : {})",
                    m.id,
                    m.date,
                    mood_label(m.mood),
                    energy_label(m.energy)
                );
            }
        }
        other => bail!(
            "Unknown collection '{}': expected transactions, budgets, goals, habits, projects, health or moods",
            other
        ),
    }
    Ok(())
}

pub fn cmd_delete(store: &mut Store, collection: &str, id: &str) -> Result<()> {
    match collection {
        "transactions" => store.delete_transaction(id)?,
        "budgets" => store.delete_budget(id)?,
        "goals" => store.delete_goal(id)?,
        "habits" => store.delete_habit(id)?,
        "projects" => store.delete_project(id)?,
        other => bail!("Cannot delete from collection '{}'", other),
    }
    println!("🗑️  Deleted {} from {}", id, collection);
    Ok(())
}

pub fn cmd_habit_toggle(store: &mut Store, id: &str, date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(Some(s))?.format("%Y-%m-%d").to_string(),
        None => today(),
    };
    store.toggle_habit_completion(id, &date)?;

    let habit = store
        .state()
        .habits
        .iter()
        .find(|h| h.id == id)
        .ok_or_else(|| anyhow!("Habit {} vanished after toggle", id))?;
    let done = habit.completed_dates.iter().any(|d| d == &date);
    println!(
        "{} '{}' on {} (streak: {})",
        if done { "✅" } else { "⬜" },
        habit.name,
        date,
        habit.streak
    );
    Ok(())
}

pub fn cmd_goal_milestone(store: &mut Store, goal_id: &str, milestone_id: &str) -> Result<()> {
    store.toggle_goal_milestone(goal_id, milestone_id)?;
    report_goal(store, goal_id)
}

pub fn cmd_goal_task(store: &mut Store, goal_id: &str, task_id: &str) -> Result<()> {
    store.toggle_goal_task(goal_id, task_id)?;
    report_goal(store, goal_id)
}

fn report_goal(store: &Store, goal_id: &str) -> Result<()> {
    let goal = store
        .state()
        .goals
        .iter()
        .find(|g| g.id == goal_id)
        .ok_or_else(|| anyhow!("Goal {} vanished after toggle", goal_id))?;
    println!(
        "🎯 '{}' — {:.0}% ({})",
        goal.title,
        goal.progress,
        goal.status.as_str()
    );
    Ok(())
}
