//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init, login, logout) and shared utilities (open_store)
//! - `status` - Status/dashboard commands
//! - `entities` - Record management commands (add, list, delete, toggles)
//! - `advise` - Advice and daily-plan commands
//! - `chat` - Assistant commands (chat, suggest)

pub mod advise;
pub mod chat;
pub mod core;
pub mod entities;
pub mod status;

// Re-export command functions for main.rs
pub use advise::*;
pub use chat::*;
pub use core::*;
pub use entities::*;
pub use status::*;
