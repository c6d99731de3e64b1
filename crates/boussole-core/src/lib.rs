//! Boussole Core Library
//!
//! Shared functionality for the Boussole life-management tool:
//! - Domain models for finances, goals, habits, health and more
//! - Persistent JSON snapshot store with change notifications
//! - Pure aggregation metrics over the domain collections
//! - Rule-based advisor producing prioritized French advice
//! - Keyword-driven conversational assistant
//! - French-locale formatting helpers

pub mod advisor;
pub mod assistant;
pub mod error;
pub mod format;
pub mod metrics;
pub mod models;
pub mod random;
pub mod storage;
pub mod store;

pub use advisor::{daily_plan, AdviceRule, Advisor, AdvisorContext};
pub use assistant::{
    detect_intent, generate_reply, quick_suggestions, AssistantContext, Intent, IntentCategory,
    Topic, UserProfile,
};
pub use error::{Error, Result};
pub use storage::{JsonFileStorage, MemoryStorage, SnapshotStorage};
pub use store::{AppState, ChangeEvent, Collection, Store};
