//! Advisor - rule-based recommendations
//!
//! The advisor evaluates a fixed battery of threshold rules against
//! the aggregated metrics and emits a prioritized list of [`Advice`]
//! records, each with a scripted action checklist. It is a read-only
//! transform over a state snapshot: rules never short-circuit each
//! other, re-running on unchanged data yields byte-identical output,
//! and the battery's internal ordering is part of the observable
//! contract (ties after the priority sort keep evaluation order).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boussole_core::advisor::{Advisor, AdvisorContext};
//!
//! let advisor = Advisor::new();
//! let ctx = AdvisorContext::from_state(store.state(), "2026-08-29");
//! let advice = advisor.evaluate_all(&ctx);
//! ```

pub mod battery;
pub mod engine;
pub mod plan;

pub use engine::{AdviceRule, Advisor, AdvisorContext};
pub use plan::daily_plan;
