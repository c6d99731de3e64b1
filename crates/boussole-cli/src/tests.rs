//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use boussole_core::models::{GoalStatus, HabitCategory, TransactionKind};
use boussole_core::storage::MemoryStorage;
use boussole_core::store::{Store, VALID_EMAIL, VALID_PASSWORD};

use crate::commands;

fn setup_test_store() -> Store {
    Store::open(Box::new(MemoryStorage::new())).unwrap()
}

// ========== Session Command Tests ==========

#[test]
fn test_cmd_login_valid() {
    let mut store = setup_test_store();
    commands::cmd_login(&mut store, VALID_EMAIL, VALID_PASSWORD).unwrap();
    assert!(store.state().is_authenticated);
}

#[test]
fn test_cmd_login_invalid_does_not_error() {
    let mut store = setup_test_store();
    // Wrong credentials print a message but the command itself succeeds
    let result = commands::cmd_login(&mut store, VALID_EMAIL, "wrong");
    assert!(result.is_ok());
    assert!(!store.state().is_authenticated);
}

#[test]
fn test_cmd_logout() {
    let mut store = setup_test_store();
    commands::cmd_login(&mut store, VALID_EMAIL, VALID_PASSWORD).unwrap();
    commands::cmd_logout(&mut store).unwrap();
    assert!(!store.state().is_authenticated);
    assert!(store.state().user.is_none());
}

// ========== Add Command Tests ==========

#[test]
fn test_cmd_add_transaction() {
    let mut store = setup_test_store();
    commands::cmd_add_transaction(&mut store, "income", 2500.0, "salaire", "Août", None).unwrap();

    let state = store.state();
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.transactions[0].kind, TransactionKind::Income);
    assert_eq!(state.transactions[0].amount, 2500.0);
}

#[test]
fn test_cmd_add_transaction_rejects_bad_kind() {
    let mut store = setup_test_store();
    let result = commands::cmd_add_transaction(&mut store, "transfer", 10.0, "x", "", None);
    assert!(result.is_err());
    assert!(store.state().transactions.is_empty());
}

#[test]
fn test_cmd_add_transaction_rejects_negative_amount() {
    let mut store = setup_test_store();
    let result = commands::cmd_add_transaction(&mut store, "expense", -5.0, "x", "", None);
    assert!(result.is_err());
}

#[test]
fn test_cmd_add_transaction_rejects_bad_date() {
    let mut store = setup_test_store();
    let result =
        commands::cmd_add_transaction(&mut store, "expense", 5.0, "x", "", Some("29/08/2026"));
    assert!(result.is_err());
}

#[test]
fn test_cmd_add_budget() {
    let mut store = setup_test_store();
    commands::cmd_add_budget(&mut store, "courses", 400.0, "monthly").unwrap();
    assert_eq!(store.state().budgets.len(), 1);
}

#[test]
fn test_cmd_add_financial_goal() {
    let mut store = setup_test_store();
    commands::cmd_add_financial_goal(&mut store, "Vacances", 1500.0, "2027-06-01").unwrap();

    let goal = &store.state().financial_goals[0];
    assert_eq!(goal.target_amount, 1500.0);
    assert_eq!(goal.current_amount, 0.0);

    assert!(commands::cmd_add_financial_goal(&mut store, "x", -1.0, "2027-06-01").is_err());
    assert!(commands::cmd_add_financial_goal(&mut store, "x", 10.0, "juin 2027").is_err());
}

#[test]
fn test_cmd_add_journal() {
    let mut store = setup_test_store();
    commands::cmd_add_journal(&mut store, "Bonne journée au travail", None, Some(4)).unwrap();
    assert_eq!(store.state().journal_entries.len(), 1);

    assert!(commands::cmd_add_journal(&mut store, "   ", None, None).is_err());
    assert!(commands::cmd_add_journal(&mut store, "ok", None, Some(9)).is_err());
}

#[test]
fn test_cmd_add_goal_defaults() {
    let mut store = setup_test_store();
    commands::cmd_add_goal(&mut store, "Lire 12 livres", "personal", "medium").unwrap();

    let goal = &store.state().goals[0];
    assert_eq!(goal.status, GoalStatus::NotStarted);
    assert_eq!(goal.progress, 0.0);
}

#[test]
fn test_cmd_add_habit() {
    let mut store = setup_test_store();
    commands::cmd_add_habit(&mut store, "Méditation", "mindfulness", "daily").unwrap();

    let habit = &store.state().habits[0];
    assert_eq!(habit.category, HabitCategory::Mindfulness);
    assert_eq!(habit.streak, 0);
}

#[test]
fn test_cmd_add_health_requires_a_field() {
    let mut store = setup_test_store();
    let result = commands::cmd_add_health(&mut store, None, None, None, None);
    assert!(result.is_err());

    commands::cmd_add_health(&mut store, Some(7.5), None, None, None).unwrap();
    assert_eq!(store.state().health_metrics.len(), 1);
}

#[test]
fn test_cmd_add_mood_validates_scale() {
    let mut store = setup_test_store();
    assert!(commands::cmd_add_mood(&mut store, 0, 3, 3, None).is_err());
    assert!(commands::cmd_add_mood(&mut store, 6, 3, 3, None).is_err());

    commands::cmd_add_mood(&mut store, 4, 3, 2, Some("bonne journée")).unwrap();
    assert_eq!(store.state().mood_entries.len(), 1);
}

// ========== List / Delete Command Tests ==========

#[test]
fn test_cmd_list_known_collections() {
    let store = setup_test_store();
    for collection in [
        "transactions",
        "budgets",
        "goals",
        "habits",
        "projects",
        "health",
        "moods",
    ] {
        assert!(commands::cmd_list(&store, collection, None).is_ok());
    }
}

#[test]
fn test_cmd_list_populated_moods_and_habits() {
    let mut store = setup_test_store();
    commands::cmd_add_mood(&mut store, 4, 2, 3, Some("journée chargée")).unwrap();
    commands::cmd_add_habit(&mut store, "Méditation", "mindfulness", "daily").unwrap();

    assert!(commands::cmd_list(&store, "moods", None).is_ok());
    assert!(commands::cmd_list(&store, "habits", None).is_ok());
}

#[test]
fn test_cmd_list_with_limit() {
    let mut store = setup_test_store();
    for i in 0..5 {
        commands::cmd_add_transaction(&mut store, "expense", 10.0 + i as f64, "divers", "", None)
            .unwrap();
    }
    assert!(commands::cmd_list(&store, "transactions", Some(2)).is_ok());
    assert!(commands::cmd_list(&store, "transactions", Some(100)).is_ok());
}

#[test]
fn test_cmd_list_unknown_collection() {
    let store = setup_test_store();
    assert!(commands::cmd_list(&store, "vehicles", None).is_err());
}

#[test]
fn test_cmd_delete_round_trip() {
    let mut store = setup_test_store();
    commands::cmd_add_habit(&mut store, "Sport", "health", "daily").unwrap();
    let id = store.state().habits[0].id.clone();

    commands::cmd_delete(&mut store, "habits", &id).unwrap();
    assert!(store.state().habits.is_empty());
}

#[test]
fn test_cmd_delete_missing_id() {
    let mut store = setup_test_store();
    assert!(commands::cmd_delete(&mut store, "habits", "missing").is_err());
}

#[test]
fn test_cmd_delete_unsupported_collection() {
    let mut store = setup_test_store();
    assert!(commands::cmd_delete(&mut store, "moods", "any").is_err());
}

// ========== Toggle Command Tests ==========

#[test]
fn test_cmd_habit_toggle_twice() {
    let mut store = setup_test_store();
    commands::cmd_add_habit(&mut store, "Sport", "health", "daily").unwrap();
    let id = store.state().habits[0].id.clone();

    commands::cmd_habit_toggle(&mut store, &id, Some("2026-08-29")).unwrap();
    assert_eq!(store.state().habits[0].streak, 1);

    commands::cmd_habit_toggle(&mut store, &id, Some("2026-08-29")).unwrap();
    assert_eq!(store.state().habits[0].streak, 0);
}

// ========== Read-only Command Tests ==========

#[test]
fn test_cmd_advise_on_empty_store() {
    let store = setup_test_store();
    assert!(commands::cmd_advise(&store, None).is_ok());
}

#[test]
fn test_cmd_advise_category_filter() {
    let store = setup_test_store();
    assert!(commands::cmd_advise(&store, Some("finance")).is_ok());
    assert!(commands::cmd_advise(&store, Some("véhicules")).is_err());
}

#[test]
fn test_cmd_plan() {
    let store = setup_test_store();
    assert!(commands::cmd_plan(&store).is_ok());
}

#[test]
fn test_cmd_chat_seeded() {
    let store = setup_test_store();
    assert!(commands::cmd_chat(&store, "Bonjour", Some(42)).is_ok());
}

#[test]
fn test_cmd_suggest() {
    assert!(commands::cmd_suggest().is_ok());
}

// ========== Snapshot Directory Tests ==========

#[test]
fn test_cmd_init_creates_snapshot() {
    let dir = tempfile::TempDir::new().unwrap();
    commands::cmd_init(Some(dir.path()), false).unwrap();
    assert!(dir.path().join("boussole.json").exists());
}

#[test]
fn test_cmd_status_and_dashboard_on_fresh_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(commands::cmd_status(Some(dir.path()), false).is_ok());
    assert!(commands::cmd_dashboard(Some(dir.path()), false).is_ok());
}

#[test]
fn test_ephemeral_store_leaves_no_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = commands::open_store(Some(dir.path()), true).unwrap();
    commands::cmd_add_budget(&mut store, "courses", 100.0, "monthly").unwrap();
    assert!(!dir.path().join("boussole.json").exists());
}
