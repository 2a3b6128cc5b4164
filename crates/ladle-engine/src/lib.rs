//! # ladle-engine
//!
//! The computation passes over a loaded recipe book: per-dish cost
//! evaluation, thermal-energy scoring with most-energy flags, and the
//! final summary projection.
//!
//! All passes are pure functions over in-memory tables. Failures inside a
//! single dish's computation are recorded as [`Value::Undefined`] and never
//! abort a run; lookup tables are injected by the caller.
//!
//! [`Value::Undefined`]: ladle_core::Value

pub mod cost;
pub mod energy;
pub mod summary;

pub use cost::{compute_costs, CostMap};
pub use energy::{compute_energy, resolve_duration, resolve_temperature, EnergyReport};
pub use summary::build_summary;
