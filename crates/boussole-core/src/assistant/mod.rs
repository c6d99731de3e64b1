//! Conversational assistant
//!
//! Maps one free-text utterance plus a snapshot of aggregated context
//! to a single assistant [`ChatMessage`](crate::models::ChatMessage),
//! optionally carrying proposed (never auto-applied) actions. The
//! pipeline is strictly ordered and first-match-wins: greeting, help,
//! topic classification, knowledge lookup, contextual injection,
//! action proposal, fallback, and finally a stochastic encouragement
//! suffix. Everything but the tip selection and the encouragement is
//! deterministic; both run through an injectable random source.

pub mod intent;
pub mod knowledge;
pub mod reply;

pub use intent::{detect_intent, Intent, IntentCategory, Topic};
pub use reply::{context_insights, generate_reply, propose_actions};

use crate::models::{Goal, Habit, HealthMetric, MoodEntry, Transaction};
use crate::store::AppState;

/// Monthly income/expense figures from the user's profile, when known
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub monthly_income: Option<f64>,
    pub monthly_expenses: Option<f64>,
}

/// Aggregated context handed to the assistant alongside the message
pub struct AssistantContext<'a> {
    pub transactions: &'a [Transaction],
    pub goals: &'a [Goal],
    pub habits: &'a [Habit],
    pub health_metrics: &'a [HealthMetric],
    pub mood_entries: &'a [MoodEntry],
    pub profile: Option<UserProfile>,
    pub today: &'a str,
}

impl<'a> AssistantContext<'a> {
    pub fn from_state(state: &'a AppState, today: &'a str) -> Self {
        Self {
            transactions: &state.transactions,
            goals: &state.goals,
            habits: &state.habits,
            health_metrics: &state.health_metrics,
            mood_entries: &state.mood_entries,
            profile: None,
            today,
        }
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

/// Canned prompt suggestions surfaced next to the chat input
pub fn quick_suggestions() -> [&'static str; 6] {
    [
        "Comment économiser plus ?",
        "Aide-moi à définir un objectif",
        "Conseils pour mieux dormir",
        "Comment gérer mon stress ?",
        "Analyse mes finances",
        "Quelles habitudes adopter ?",
    ]
}
