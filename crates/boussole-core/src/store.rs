//! Application state store
//!
//! Single source of truth for every entity collection. Consumers read
//! through [`Store::state`], mutate through the per-entity operations,
//! and may subscribe to change events over a std mpsc channel. Every
//! mutation persists the whole snapshot fire-and-forget: a failed
//! write is logged and the in-memory state stays authoritative for the
//! session.

use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    Appointment, Budget, Event, FinancialGoal, Goal, GoalStatus, Habit, HealthMetric,
    JournalEntry, Medication, MoodEntry, Project, Relationship, Skill, Transaction, User,
    WorkSession,
};
use crate::storage::SnapshotStorage;

/// The single accepted credential pair
pub const VALID_EMAIL: &str = "mlaanaiya@gmail.com";
pub const VALID_PASSWORD: &str = "GREFFEABOHLA022025";

/// Which part of the state a change event touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Transactions,
    Budgets,
    FinancialGoals,
    Goals,
    Habits,
    Events,
    Relationships,
    Projects,
    Skills,
    WorkSessions,
    HealthMetrics,
    Medications,
    Appointments,
    MoodEntries,
    JournalEntries,
    /// User, authentication flag, dark mode
    Session,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Budgets => "budgets",
            Self::FinancialGoals => "financial_goals",
            Self::Goals => "goals",
            Self::Habits => "habits",
            Self::Events => "events",
            Self::Relationships => "relationships",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::WorkSessions => "work_sessions",
            Self::HealthMetrics => "health_metrics",
            Self::Medications => "medications",
            Self::Appointments => "appointments",
            Self::MoodEntries => "mood_entries",
            Self::JournalEntries => "journal_entries",
            Self::Session => "session",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sent to subscribers after every successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub collection: Collection,
}

/// Complete application state; also the persisted snapshot shape
/// (a flat object mapping each collection name to its array)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub dark_mode: bool,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub financial_goals: Vec<FinancialGoal>,
    pub goals: Vec<Goal>,
    pub habits: Vec<Habit>,
    pub events: Vec<Event>,
    pub relationships: Vec<Relationship>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub work_sessions: Vec<WorkSession>,
    pub health_metrics: Vec<HealthMetric>,
    pub medications: Vec<Medication>,
    pub appointments: Vec<Appointment>,
    pub mood_entries: Vec<MoodEntry>,
    pub journal_entries: Vec<JournalEntry>,
}

trait HasId {
    fn id(&self) -> &str;
}

macro_rules! impl_has_id {
    ($($t:ty),+ $(,)?) => {
        $(impl HasId for $t {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_has_id!(
    Transaction,
    Budget,
    FinancialGoal,
    Goal,
    Habit,
    Event,
    Relationship,
    Project,
    Skill,
    WorkSession,
    HealthMetric,
    Medication,
    Appointment,
    MoodEntry,
    JournalEntry,
);

fn update_in<T: HasId>(
    items: &mut [T],
    collection: Collection,
    id: &str,
    apply: impl FnOnce(&mut T),
) -> Result<()> {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            apply(item);
            Ok(())
        }
        None => Err(Error::NotFound(format!("{} {}", collection, id))),
    }
}

fn remove_from<T: HasId>(items: &mut Vec<T>, collection: Collection, id: &str) -> Result<()> {
    let before = items.len();
    items.retain(|item| item.id() != id);
    if items.len() == before {
        return Err(Error::NotFound(format!("{} {}", collection, id)));
    }
    Ok(())
}

/// Recompute the derived fields of a goal after any change
///
/// Progress is the milestone completion ratio whenever milestones
/// exist; status reaches `Completed` exactly at 100 and leaves
/// `NotStarted` on the first completed milestone or task.
fn apply_goal_invariants(goal: &mut Goal) {
    if !goal.milestones.is_empty() {
        let done = goal.milestones.iter().filter(|m| m.completed).count();
        goal.progress = done as f64 / goal.milestones.len() as f64 * 100.0;
    }

    let any_done = goal.milestones.iter().any(|m| m.completed)
        || goal.tasks.iter().any(|t| t.completed);

    if goal.progress >= 100.0 {
        goal.status = GoalStatus::Completed;
    } else if goal.status == GoalStatus::Completed {
        // A milestone was un-checked after completion
        goal.status = GoalStatus::InProgress;
    } else if goal.status == GoalStatus::NotStarted && any_done {
        goal.status = GoalStatus::InProgress;
    }
}

/// The state container
pub struct Store {
    state: AppState,
    storage: Box<dyn SnapshotStorage>,
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl Store {
    /// Open the store, hydrating from the snapshot if one exists
    pub fn open(storage: Box<dyn SnapshotStorage>) -> Result<Self> {
        let state = storage.load()?.unwrap_or_default();
        Ok(Self {
            state,
            storage,
            subscribers: Vec::new(),
        })
    }

    /// Current state snapshot (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Receive a [`ChangeEvent`] after every successful mutation
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    fn mutate(&mut self, collection: Collection, apply: impl FnOnce(&mut AppState)) {
        apply(&mut self.state);
        tracing::debug!(collection = collection.as_str(), "State mutated");
        self.persist();
        self.notify(collection);
    }

    // Fallible mutations only persist and notify when the operation
    // actually touched the state; a missing id leaves both alone
    fn try_mutate(
        &mut self,
        collection: Collection,
        apply: impl FnOnce(&mut AppState) -> Result<()>,
    ) -> Result<()> {
        apply(&mut self.state)?;
        tracing::debug!(collection = collection.as_str(), "State mutated");
        self.persist();
        self.notify(collection);
        Ok(())
    }

    // Persistence is fire-and-forget: on failure the in-memory state
    // remains authoritative, with no rollback and no error surfaced
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.state) {
            tracing::warn!(error = %e, "Snapshot write failed; continuing with in-memory state");
        }
    }

    fn notify(&mut self, collection: Collection) {
        self.subscribers
            .retain(|tx| tx.send(ChangeEvent { collection }).is_ok());
    }

    // ---- Session ----------------------------------------------------

    /// Exact-match credential check; success sets the user and the
    /// authentication flag, failure is a plain `false`
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if email != VALID_EMAIL || password != VALID_PASSWORD {
            return false;
        }
        let user = User {
            email: email.to_string(),
            name: "Mohamed Laanaiya".to_string(),
            avatar: None,
        };
        self.mutate(Collection::Session, |s| {
            s.user = Some(user);
            s.is_authenticated = true;
        });
        true
    }

    pub fn logout(&mut self) {
        self.mutate(Collection::Session, |s| {
            s.user = None;
            s.is_authenticated = false;
        });
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.mutate(Collection::Session, |s| s.dark_mode = enabled);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.mutate(Collection::Session, |s| s.dark_mode = !s.dark_mode);
    }

    // ---- Finances ---------------------------------------------------

    pub fn add_transaction(&mut self, tx: Transaction) {
        self.mutate(Collection::Transactions, |s| s.transactions.push(tx));
    }

    pub fn update_transaction(&mut self, id: &str, apply: impl FnOnce(&mut Transaction)) -> Result<()> {
        self.try_mutate(Collection::Transactions, |s| {
            update_in(&mut s.transactions, Collection::Transactions, id, apply)
        })
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Transactions, |s| {
            remove_from(&mut s.transactions, Collection::Transactions, id)
        })
    }

    pub fn add_budget(&mut self, budget: Budget) {
        self.mutate(Collection::Budgets, |s| s.budgets.push(budget));
    }

    pub fn update_budget(&mut self, id: &str, apply: impl FnOnce(&mut Budget)) -> Result<()> {
        self.try_mutate(Collection::Budgets, |s| {
            update_in(&mut s.budgets, Collection::Budgets, id, apply)
        })
    }

    pub fn delete_budget(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Budgets, |s| {
            remove_from(&mut s.budgets, Collection::Budgets, id)
        })
    }

    pub fn add_financial_goal(&mut self, goal: FinancialGoal) {
        self.mutate(Collection::FinancialGoals, |s| s.financial_goals.push(goal));
    }

    pub fn update_financial_goal(&mut self, id: &str, apply: impl FnOnce(&mut FinancialGoal)) -> Result<()> {
        self.try_mutate(Collection::FinancialGoals, |s| {
            update_in(&mut s.financial_goals, Collection::FinancialGoals, id, apply)
        })
    }

    pub fn delete_financial_goal(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::FinancialGoals, |s| {
            remove_from(&mut s.financial_goals, Collection::FinancialGoals, id)
        })
    }

    // ---- Goals ------------------------------------------------------

    pub fn add_goal(&mut self, mut goal: Goal) {
        apply_goal_invariants(&mut goal);
        self.mutate(Collection::Goals, |s| s.goals.push(goal));
    }

    /// Partial update; derived progress/status are recomputed after
    /// the closure runs
    pub fn update_goal(&mut self, id: &str, apply: impl FnOnce(&mut Goal)) -> Result<()> {
        self.try_mutate(Collection::Goals, |s| {
            update_in(&mut s.goals, Collection::Goals, id, |goal| {
                apply(goal);
                apply_goal_invariants(goal);
            })
        })
    }

    pub fn delete_goal(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Goals, |s| {
            remove_from(&mut s.goals, Collection::Goals, id)
        })
    }

    /// Flip one milestone's completion and refresh the goal's derived
    /// progress and status
    pub fn toggle_goal_milestone(&mut self, goal_id: &str, milestone_id: &str) -> Result<()> {
        self.update_goal(goal_id, |goal| {
            if let Some(m) = goal.milestones.iter_mut().find(|m| m.id == milestone_id) {
                m.completed = !m.completed;
            }
        })
    }

    pub fn toggle_goal_task(&mut self, goal_id: &str, task_id: &str) -> Result<()> {
        self.update_goal(goal_id, |goal| {
            if let Some(t) = goal.tasks.iter_mut().find(|t| t.id == task_id) {
                t.completed = !t.completed;
            }
        })
    }

    // ---- Personal life ----------------------------------------------

    pub fn add_habit(&mut self, habit: Habit) {
        self.mutate(Collection::Habits, |s| s.habits.push(habit));
    }

    pub fn update_habit(&mut self, id: &str, apply: impl FnOnce(&mut Habit)) -> Result<()> {
        self.try_mutate(Collection::Habits, |s| {
            update_in(&mut s.habits, Collection::Habits, id, apply)
        })
    }

    pub fn delete_habit(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Habits, |s| {
            remove_from(&mut s.habits, Collection::Habits, id)
        })
    }

    /// Add `date` to the habit's completed set if absent, remove it if
    /// present; the streak tracks the set size
    pub fn toggle_habit_completion(&mut self, id: &str, date: &str) -> Result<()> {
        self.update_habit(id, |habit| {
            if let Some(pos) = habit.completed_dates.iter().position(|d| d == date) {
                habit.completed_dates.remove(pos);
            } else {
                habit.completed_dates.push(date.to_string());
            }
            habit.streak = habit.completed_dates.len() as u32;
        })
    }

    pub fn add_event(&mut self, event: Event) {
        self.mutate(Collection::Events, |s| s.events.push(event));
    }

    pub fn update_event(&mut self, id: &str, apply: impl FnOnce(&mut Event)) -> Result<()> {
        self.try_mutate(Collection::Events, |s| {
            update_in(&mut s.events, Collection::Events, id, apply)
        })
    }

    pub fn delete_event(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Events, |s| {
            remove_from(&mut s.events, Collection::Events, id)
        })
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.mutate(Collection::Relationships, |s| s.relationships.push(relationship));
    }

    pub fn update_relationship(&mut self, id: &str, apply: impl FnOnce(&mut Relationship)) -> Result<()> {
        self.try_mutate(Collection::Relationships, |s| {
            update_in(&mut s.relationships, Collection::Relationships, id, apply)
        })
    }

    pub fn delete_relationship(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Relationships, |s| {
            remove_from(&mut s.relationships, Collection::Relationships, id)
        })
    }

    // ---- Professional -----------------------------------------------

    pub fn add_project(&mut self, project: Project) {
        self.mutate(Collection::Projects, |s| s.projects.push(project));
    }

    pub fn update_project(&mut self, id: &str, apply: impl FnOnce(&mut Project)) -> Result<()> {
        self.try_mutate(Collection::Projects, |s| {
            update_in(&mut s.projects, Collection::Projects, id, apply)
        })
    }

    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Projects, |s| {
            remove_from(&mut s.projects, Collection::Projects, id)
        })
    }

    pub fn add_skill(&mut self, skill: Skill) {
        self.mutate(Collection::Skills, |s| s.skills.push(skill));
    }

    pub fn update_skill(&mut self, id: &str, apply: impl FnOnce(&mut Skill)) -> Result<()> {
        self.try_mutate(Collection::Skills, |s| {
            update_in(&mut s.skills, Collection::Skills, id, apply)
        })
    }

    pub fn delete_skill(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Skills, |s| {
            remove_from(&mut s.skills, Collection::Skills, id)
        })
    }

    pub fn add_work_session(&mut self, session: WorkSession) {
        self.mutate(Collection::WorkSessions, |s| s.work_sessions.push(session));
    }

    pub fn update_work_session(&mut self, id: &str, apply: impl FnOnce(&mut WorkSession)) -> Result<()> {
        self.try_mutate(Collection::WorkSessions, |s| {
            update_in(&mut s.work_sessions, Collection::WorkSessions, id, apply)
        })
    }

    // ---- Health -----------------------------------------------------

    pub fn add_health_metric(&mut self, metric: HealthMetric) {
        self.mutate(Collection::HealthMetrics, |s| s.health_metrics.push(metric));
    }

    pub fn update_health_metric(&mut self, id: &str, apply: impl FnOnce(&mut HealthMetric)) -> Result<()> {
        self.try_mutate(Collection::HealthMetrics, |s| {
            update_in(&mut s.health_metrics, Collection::HealthMetrics, id, apply)
        })
    }

    pub fn add_medication(&mut self, medication: Medication) {
        self.mutate(Collection::Medications, |s| s.medications.push(medication));
    }

    pub fn update_medication(&mut self, id: &str, apply: impl FnOnce(&mut Medication)) -> Result<()> {
        self.try_mutate(Collection::Medications, |s| {
            update_in(&mut s.medications, Collection::Medications, id, apply)
        })
    }

    pub fn delete_medication(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Medications, |s| {
            remove_from(&mut s.medications, Collection::Medications, id)
        })
    }

    pub fn add_appointment(&mut self, appointment: Appointment) {
        self.mutate(Collection::Appointments, |s| s.appointments.push(appointment));
    }

    pub fn update_appointment(&mut self, id: &str, apply: impl FnOnce(&mut Appointment)) -> Result<()> {
        self.try_mutate(Collection::Appointments, |s| {
            update_in(&mut s.appointments, Collection::Appointments, id, apply)
        })
    }

    pub fn delete_appointment(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::Appointments, |s| {
            remove_from(&mut s.appointments, Collection::Appointments, id)
        })
    }

    // ---- Psychology -------------------------------------------------

    pub fn add_mood_entry(&mut self, entry: MoodEntry) {
        self.mutate(Collection::MoodEntries, |s| s.mood_entries.push(entry));
    }

    pub fn add_journal_entry(&mut self, entry: JournalEntry) {
        self.mutate(Collection::JournalEntries, |s| s.journal_entries.push(entry));
    }

    pub fn update_journal_entry(&mut self, id: &str, apply: impl FnOnce(&mut JournalEntry)) -> Result<()> {
        self.try_mutate(Collection::JournalEntries, |s| {
            update_in(&mut s.journal_entries, Collection::JournalEntries, id, apply)
        })
    }

    pub fn delete_journal_entry(&mut self, id: &str) -> Result<()> {
        self.try_mutate(Collection::JournalEntries, |s| {
            remove_from(&mut s.journal_entries, Collection::JournalEntries, id)
        })
    }
}
