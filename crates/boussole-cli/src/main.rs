//! Boussole CLI - Personal life-management compass
//!
//! Usage:
//!   boussole init                       Initialize the snapshot
//!   boussole add transaction ...        Record a transaction
//!   boussole advise                     Run the advice rules
//!   boussole chat "Comment économiser"  Ask the assistant

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let data = cli.data.as_deref();

    match cli.command {
        Commands::Init => commands::cmd_init(data, cli.ephemeral),
        Commands::Status => commands::cmd_status(data, cli.ephemeral),
        Commands::Dashboard => commands::cmd_dashboard(data, cli.ephemeral),
        Commands::Advise { category } => {
            let store = commands::open_store(data, cli.ephemeral)?;
            commands::cmd_advise(&store, category.as_deref())
        }
        Commands::Plan => {
            let store = commands::open_store(data, cli.ephemeral)?;
            commands::cmd_plan(&store)
        }
        Commands::Chat { message, seed } => {
            let store = commands::open_store(data, cli.ephemeral)?;
            commands::cmd_chat(&store, &message, seed)
        }
        Commands::Suggest => commands::cmd_suggest(),
        Commands::Login { email, password } => {
            let mut store = commands::open_store(data, cli.ephemeral)?;
            commands::cmd_login(&mut store, &email, &password)
        }
        Commands::Logout => {
            let mut store = commands::open_store(data, cli.ephemeral)?;
            commands::cmd_logout(&mut store)
        }
        Commands::Add { entity } => {
            let mut store = commands::open_store(data, cli.ephemeral)?;
            match entity {
                AddEntity::Transaction {
                    kind,
                    amount,
                    category,
                    description,
                    date,
                } => commands::cmd_add_transaction(
                    &mut store,
                    &kind,
                    amount,
                    &category,
                    &description,
                    date.as_deref(),
                ),
                AddEntity::Budget {
                    category,
                    limit,
                    period,
                } => commands::cmd_add_budget(&mut store, &category, limit, &period),
                AddEntity::FinancialGoal {
                    name,
                    target,
                    deadline,
                } => commands::cmd_add_financial_goal(&mut store, &name, target, &deadline),
                AddEntity::Goal {
                    title,
                    category,
                    priority,
                } => commands::cmd_add_goal(&mut store, &title, &category, &priority),
                AddEntity::Habit {
                    name,
                    category,
                    frequency,
                } => commands::cmd_add_habit(&mut store, &name, &category, &frequency),
                AddEntity::Project { name, description } => {
                    commands::cmd_add_project(&mut store, &name, &description)
                }
                AddEntity::Health {
                    sleep,
                    exercise,
                    steps,
                    date,
                } => commands::cmd_add_health(&mut store, sleep, exercise, steps, date.as_deref()),
                AddEntity::Mood {
                    mood,
                    energy,
                    anxiety,
                    notes,
                } => commands::cmd_add_mood(&mut store, mood, energy, anxiety, notes.as_deref()),
                AddEntity::Journal {
                    content,
                    title,
                    mood,
                } => commands::cmd_add_journal(&mut store, &content, title.as_deref(), mood),
            }
        }
        Commands::List { collection, limit } => {
            let store = commands::open_store(data, cli.ephemeral)?;
            commands::cmd_list(&store, &collection, limit)
        }
        Commands::Delete { collection, id } => {
            let mut store = commands::open_store(data, cli.ephemeral)?;
            commands::cmd_delete(&mut store, &collection, &id)
        }
        Commands::Habit { action } => {
            let mut store = commands::open_store(data, cli.ephemeral)?;
            match action {
                HabitAction::Toggle { id, date } => {
                    commands::cmd_habit_toggle(&mut store, &id, date.as_deref())
                }
            }
        }
        Commands::Goal { action } => {
            let mut store = commands::open_store(data, cli.ephemeral)?;
            match action {
                GoalAction::Milestone {
                    goal_id,
                    milestone_id,
                } => commands::cmd_goal_milestone(&mut store, &goal_id, &milestone_id),
                GoalAction::Task { goal_id, task_id } => {
                    commands::cmd_goal_task(&mut store, &goal_id, &task_id)
                }
            }
        }
    }
}
