//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_store` - Shared utility to open the snapshot store
//! - `cmd_init` - Initialize the snapshot directory
//! - `cmd_login` / `cmd_logout` - Session management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use boussole_core::storage::{JsonFileStorage, MemoryStorage, SnapshotStorage};
use boussole_core::store::{AppState, Store};

/// Resolve the snapshot directory: explicit flag wins, otherwise the
/// platform data directory
pub fn resolve_data_dir(data: Option<&Path>) -> Result<PathBuf> {
    match data {
        Some(dir) => Ok(dir.to_path_buf()),
        None => JsonFileStorage::default_dir().context("Failed to resolve data directory"),
    }
}

/// Open the store against disk, or fully in memory with --ephemeral
pub fn open_store(data: Option<&Path>, ephemeral: bool) -> Result<Store> {
    if ephemeral {
        tracing::debug!("Opening ephemeral in-memory store");
        return Store::open(Box::new(MemoryStorage::new())).context("Failed to open store");
    }
    let dir = resolve_data_dir(data)?;
    tracing::debug!(dir = %dir.display(), "Opening snapshot store");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Store::open(Box::new(JsonFileStorage::new(&dir)))
        .with_context(|| format!("Failed to open snapshot in {}", dir.display()))
}

/// Today's date in the habit-completion string format
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub fn cmd_init(data: Option<&Path>, ephemeral: bool) -> Result<()> {
    if ephemeral {
        println!("🔧 Running ephemeral, nothing to initialize");
        return Ok(());
    }

    let dir = resolve_data_dir(data)?;
    println!("🔧 Initializing snapshot directory at {}...", dir.display());

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    let storage = JsonFileStorage::new(&dir);
    match storage.load().context("Failed to read existing snapshot")? {
        Some(state) => {
            println!(
                "   Existing snapshot: {} transactions, {} goals, {} habits",
                state.transactions.len(),
                state.goals.len(),
                state.habits.len()
            );
        }
        None => {
            storage
                .save(&AppState::default())
                .context("Failed to write initial snapshot")?;
            println!("   Wrote empty snapshot to {}", storage.path().display());
        }
    }

    println!("✅ Snapshot initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Log in: boussole login you@example.com <password>");
    println!("  2. Record something: boussole add transaction --kind income --amount 2500 --category salaire");
    println!("  3. Get advice: boussole advise");

    Ok(())
}

pub fn cmd_login(store: &mut Store, email: &str, password: &str) -> Result<()> {
    if store.login(email, password) {
        println!("✅ Logged in as {}", email);
    } else {
        println!("❌ Invalid credentials");
    }
    Ok(())
}

pub fn cmd_logout(store: &mut Store) -> Result<()> {
    store.logout();
    println!("👋 Logged out");
    Ok(())
}
