//! claimgate - requirement-tree evaluation for credential presentations.
//!
//! This library decides whether a set of presented claims (fields extracted
//! from a holder's credentials) satisfies a requester's nested AND/OR
//! admission policy. Two independent building blocks plus a document layer
//! on top:
//!
//! - [`tree`]: generic AND/OR tree evaluation with caller-supplied leaf
//!   semantics and result combination
//! - [`path`]: constrained `$.a.b` dot-notation lookup into nested JSON
//!   values, where a missing field is an outcome rather than an error
//! - [`policy`]: serde-deserializable policy documents (YAML or JSON)
//!   evaluated against a claims object, producing per-constraint evidence
//!
//! # Example
//!
//! ```
//! use claimgate::Policy;
//! use serde_json::json;
//!
//! let policy = Policy::from_yaml_str(r#"
//! id: adult-or-consent
//! requires:
//!   all:
//!     - path: "$.country"
//!       check:
//!         equals:
//!           value: "VN"
//!     - any:
//!         - path: "$.age"
//!           check:
//!             range:
//!               min: 18
//!         - path: "$.guardianConsent"
//!           check:
//!             equals:
//!               value: true
//! "#).unwrap();
//!
//! let claims = json!({"country": "VN", "age": 16, "guardianConsent": true});
//! let outcome = policy.evaluate(&claims);
//! assert!(outcome.satisfied);
//! ```

pub mod cli;
pub mod error;
pub mod path;
pub mod policy;
pub mod tree;

// Re-export commonly used types at crate root
pub use error::{PolicyError, Result};
pub use path::{resolve, Resolution};
pub use policy::{Check, Evidence, FieldConstraint, MatchOutcome, Policy, Requirement};
pub use tree::{boolean_combine, evaluate, try_evaluate, EvalResult, LogicalOp, TreeNode};
