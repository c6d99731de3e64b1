//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Boussole - Personal life-management compass
#[derive(Parser)]
#[command(name = "boussole")]
#[command(about = "Personal dashboard for finances, goals, habits and well-being", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot directory (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Keep all state in memory, never touch the disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the snapshot directory
    Init,

    /// Show snapshot status (path, size, session)
    Status,

    /// Show dashboard summary
    Dashboard,

    /// Run the advice rules over the current data
    Advise {
        /// Only show advice for one category:
        /// finance, goals, personal, professional, health, psychology
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print the scripted daily plan
    Plan,

    /// Ask the assistant a question
    Chat {
        /// The message to send
        message: String,

        /// Seed for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show canned prompt suggestions
    Suggest,

    /// Start a session
    Login {
        /// Account email
        email: String,

        /// Account password
        password: String,
    },

    /// End the session
    Logout,

    /// Add a record
    Add {
        #[command(subcommand)]
        entity: AddEntity,
    },

    /// List records in a collection:
    /// transactions, budgets, goals, habits, projects, health, moods
    List {
        /// Collection to list
        collection: String,

        /// Only show the most recent N records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a record by id from a collection
    Delete {
        /// Collection name
        collection: String,

        /// Record id
        id: String,
    },

    /// Habit actions
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Goal actions
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
}

#[derive(Subcommand)]
pub enum AddEntity {
    /// Record a transaction
    Transaction {
        /// income or expense
        #[arg(short, long)]
        kind: String,

        /// Amount in euros
        #[arg(short, long)]
        amount: f64,

        /// Free-form category
        #[arg(short, long)]
        category: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Create a budget envelope
    Budget {
        /// Free-form category
        #[arg(short, long)]
        category: String,

        /// Spending limit in euros
        #[arg(short, long)]
        limit: f64,

        /// weekly, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },

    /// Create a savings target
    FinancialGoal {
        /// Target name
        #[arg(short, long)]
        name: String,

        /// Target amount in euros
        #[arg(short, long)]
        target: f64,

        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,
    },

    /// Create a goal
    Goal {
        /// Goal title
        #[arg(short, long)]
        title: String,

        /// personal, professional, health, finance, education or other
        #[arg(short, long, default_value = "personal")]
        category: String,

        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        priority: String,
    },

    /// Create a habit
    Habit {
        /// Habit name
        #[arg(short, long)]
        name: String,

        /// health, productivity, mindfulness, social, learning or other
        #[arg(short, long, default_value = "other")]
        category: String,

        /// daily or weekly
        #[arg(short, long, default_value = "daily")]
        frequency: String,
    },

    /// Create a project
    Project {
        /// Project name
        #[arg(short, long)]
        name: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Record a health check-in
    Health {
        /// Hours slept
        #[arg(long)]
        sleep: Option<f64>,

        /// Minutes of exercise
        #[arg(long)]
        exercise: Option<u32>,

        /// Steps walked
        #[arg(long)]
        steps: Option<u32>,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record a mood check-in
    Mood {
        /// Mood on a 1-5 scale
        #[arg(short, long)]
        mood: u8,

        /// Energy on a 1-5 scale
        #[arg(short, long, default_value = "3")]
        energy: u8,

        /// Anxiety on a 1-5 scale
        #[arg(short, long, default_value = "3")]
        anxiety: u8,

        /// Free-form note
        #[arg(long)]
        notes: Option<String>,
    },

    /// Write a journal entry
    Journal {
        /// Entry text
        content: String,

        /// Optional title
        #[arg(short, long)]
        title: Option<String>,

        /// Mood at the time of writing, 1-5
        #[arg(short, long)]
        mood: Option<u8>,
    },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Toggle a habit's completion for a date
    Toggle {
        /// Habit id
        id: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Toggle a goal milestone
    Milestone {
        /// Goal id
        goal_id: String,

        /// Milestone id
        milestone_id: String,
    },

    /// Toggle a goal task
    Task {
        /// Goal id
        goal_id: String,

        /// Task id
        task_id: String,
    },
}
