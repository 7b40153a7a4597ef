//! Policy documents and their evaluation against presented claims.
//!
//! A policy nests atomic field constraints under `all:` / `any:` operators,
//! the document form of the generic requirement tree in [`crate::tree`].
//! Evaluation resolves each constraint's path with [`crate::path::resolve`],
//! applies its check, and reports per-constraint evidence for every leaf
//! visited, satisfied or not.
//!
//! ## Module Structure
//!
//! - `condition`: the Check enum applied to resolved values
//! - `document`: FieldConstraint, Requirement, and Policy
//! - `outcome`: Evidence and MatchOutcome

mod condition;
mod document;
mod outcome;

pub use condition::Check;
pub use document::{FieldConstraint, Policy, Requirement};
pub use outcome::{Evidence, MatchOutcome};
