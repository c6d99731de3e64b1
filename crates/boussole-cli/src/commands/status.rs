//! Status and dashboard command implementations

use std::path::Path;

use anyhow::Result;

use boussole_core::format::format_currency;
use boussole_core::metrics::{
    balance, budget_utilization, completed_on, goal_progress_average, habit_completion_rate,
    recent_average, savings_rate, total_by_kind, trend_delta, Trend,
};
use boussole_core::models::{GoalStatus, HealthMetric, MoodEntry, ProjectStatus, TransactionKind};
use boussole_core::storage::SNAPSHOT_NAMESPACE;

use super::{open_store, resolve_data_dir, today};

pub fn cmd_status(data: Option<&Path>, ephemeral: bool) -> Result<()> {
    println!();
    println!("📊 Boussole Status");
    println!("   ─────────────────────────────────────────────────────────────");

    if ephemeral {
        println!("   Snapshot: (ephemeral, in memory only)");
    } else {
        let dir = resolve_data_dir(data)?;
        let path = dir.join(format!("{}.json", SNAPSHOT_NAMESPACE));
        println!("   Snapshot: {}", path.display());

        if path.exists() {
            if let Ok(metadata) = std::fs::metadata(&path) {
                let size_kb = metadata.len() as f64 / 1024.0;
                if size_kb < 1024.0 {
                    println!("   Size: {:.1} KB", size_kb);
                } else {
                    println!("   Size: {:.1} MB", size_kb / 1024.0);
                }
            }
        } else {
            println!("   Size: (snapshot not initialized)");
        }
    }

    let store = open_store(data, ephemeral)?;
    let state = store.state();

    if state.is_authenticated {
        match &state.user {
            Some(user) => println!("   Session: 🔓 {}", user.email),
            None => println!("   Session: 🔓 active"),
        }
    } else {
        println!("   Session: 🔒 not logged in");
    }
    println!("   Theme: {}", if state.dark_mode { "dark" } else { "light" });

    println!();
    println!("   Transactions: {}", state.transactions.len());
    println!("   Budgets: {}", state.budgets.len());
    println!("   Goals: {}", state.goals.len());
    println!("   Habits: {}", state.habits.len());
    println!("   Projects: {}", state.projects.len());
    println!("   Health entries: {}", state.health_metrics.len());
    println!("   Mood entries: {}", state.mood_entries.len());
    println!();

    Ok(())
}

pub fn cmd_dashboard(data: Option<&Path>, ephemeral: bool) -> Result<()> {
    let store = open_store(data, ephemeral)?;
    let state = store.state();
    let today = today();

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          🧭 Boussole Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  💰 Income:        {}",
        format_currency(total_by_kind(&state.transactions, TransactionKind::Income))
    );
    println!(
        "     Expenses:      {}",
        format_currency(total_by_kind(&state.transactions, TransactionKind::Expense))
    );
    println!("     Balance:       {}", format_currency(balance(&state.transactions)));
    println!("     Savings rate:  {:.1}%", savings_rate(&state.transactions));
    println!();

    if !state.budgets.is_empty() {
        println!("  📋 Budgets:");
        for budget in &state.budgets {
            let usage = budget_utilization(budget, &state.transactions);
            let flag = if usage.over_budget { " ⚠️" } else { "" };
            println!(
                "     {:<16} {} / {} ({:.0}%){}",
                budget.category,
                format_currency(usage.spent),
                format_currency(budget.limit),
                usage.percentage,
                flag
            );
        }
        println!();
    }

    let active_goals = state
        .goals
        .iter()
        .filter(|g| g.status != GoalStatus::Completed)
        .count();
    println!("  🎯 Active goals: {}", active_goals);
    println!(
        "     Average progress: {:.1}%",
        goal_progress_average(&state.goals)
    );
    println!();

    if !state.habits.is_empty() {
        println!(
            "  ✅ Habits today: {}/{} ({:.0}%)",
            completed_on(&state.habits, &today),
            state.habits.len(),
            habit_completion_rate(&state.habits, &today)
        );
        println!();
    }

    let active_projects = state
        .projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count();
    if active_projects > 0 {
        println!("  💼 Active projects: {}", active_projects);
        println!();
    }

    if let Some(line) = weekly_trend_line(
        "😴 Sleep (7d avg)",
        &state.health_metrics,
        |m: &HealthMetric| m.sleep_hours,
        "h",
    ) {
        println!("{}", line);
    }
    if let Some(line) = weekly_trend_line(
        "🧠 Mood (7d avg)",
        &state.mood_entries,
        |m: &MoodEntry| Some(m.mood as f64),
        "/5",
    ) {
        println!("{}", line);
    }
    if !state.health_metrics.is_empty() || !state.mood_entries.is_empty() {
        println!();
    }

    println!("  Run 'boussole advise' to see what needs attention.");
    println!();

    Ok(())
}

/// Trailing-week average with an arrow against the week before, or
/// `None` when the series is empty
fn weekly_trend_line<T>(
    label: &str,
    series: &[T],
    field: impl Fn(&T) -> Option<f64> + Copy,
    unit: &str,
) -> Option<String> {
    let current = recent_average(series, 7, field);
    if current == 0.0 {
        return None;
    }
    let previous_window = &series[..series.len().saturating_sub(7)];
    let previous = recent_average(previous_window, 7, field);
    let arrow = if previous == 0.0 {
        ""
    } else {
        Trend::from_delta(trend_delta(current, previous)).arrow()
    };
    Some(format!("  {}: {:.1}{} {}", label, current, unit, arrow))
}
