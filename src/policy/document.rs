//! Policy documents: field constraints and their AND/OR nesting.

use super::condition::Check;
use super::outcome::{Evidence, MatchOutcome};
use crate::error::{PolicyError, Result};
use crate::path::{resolve, Resolution};
use crate::tree::{evaluate, EvalResult, LogicalOp, TreeNode};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// An atomic requirement: one check applied to one claim field
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConstraint {
    /// Dot path (`$.a.b`) locating the field within the claims object
    pub path: String,

    /// Human-readable purpose, echoed into evidence
    #[serde(default, alias = "purpose")]
    pub desc: Option<String>,

    /// Check applied to the resolved value
    #[serde(alias = "condition")]
    pub check: Check,
}

impl FieldConstraint {
    /// Build a constraint and pre-compile its check.
    ///
    /// Policies loaded from documents compile during parsing; hand-built
    /// constraints go through here so an invalid pattern surfaces as
    /// [`PolicyError::InvalidPattern`] instead of a constraint that can
    /// never match.
    pub fn new<S: Into<String>>(path: S, check: Check) -> Result<Self> {
        let mut constraint = FieldConstraint {
            path: path.into(),
            desc: None,
            check,
        };
        constraint.check.compile(&constraint.path)?;
        Ok(constraint)
    }

    /// Evaluate against a claims object.
    ///
    /// A resolution miss is an unsatisfied constraint, never an error; a
    /// present null field satisfies `exists` but fails value checks unless
    /// the policy compares against null explicitly.
    pub fn evaluate(&self, claims: &Value) -> Evidence {
        let (satisfied, value) = match resolve(claims, &self.path) {
            Resolution::Found(v) => (self.check.apply(v), Some(v.clone())),
            Resolution::Missing => (false, None),
        };

        Evidence {
            path: self.path.clone(),
            value,
            satisfied,
            desc: self.desc.clone(),
        }
    }
}

/// A requirement as it appears in a policy document: `all:` / `any:` nesting
/// with bare field constraints at the leaves
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Requirement {
    All { all: Vec<Requirement> },
    Any { any: Vec<Requirement> },
    Constraint(FieldConstraint),
}

impl Requirement {
    /// Borrowing view of this requirement as a generic tree
    fn to_tree(&self) -> TreeNode<&FieldConstraint> {
        match self {
            Requirement::All { all } => TreeNode::Logical {
                op: LogicalOp::And,
                children: all.iter().map(Requirement::to_tree).collect(),
            },
            Requirement::Any { any } => TreeNode::Logical {
                op: LogicalOp::Or,
                children: any.iter().map(Requirement::to_tree).collect(),
            },
            Requirement::Constraint(constraint) => TreeNode::Leaf(constraint),
        }
    }

    /// Pre-compile every pattern check in this subtree
    fn compile(&mut self) -> Result<()> {
        match self {
            Requirement::All { all: children } | Requirement::Any { any: children } => {
                for child in children.iter_mut() {
                    child.compile()?;
                }
                Ok(())
            }
            Requirement::Constraint(constraint) => constraint.check.compile(&constraint.path),
        }
    }
}

/// A requester's admission policy
#[derive(Debug, Clone, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, alias = "description")]
    pub desc: Option<String>,

    #[serde(alias = "requirement")]
    pub requires: Requirement,
}

impl Policy {
    /// Parse a policy from YAML and pre-compile its patterns
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let policy: Policy =
            serde_yaml::from_str(content).map_err(|e| PolicyError::parse(e.to_string()))?;
        policy.compiled()
    }

    /// Parse a policy from JSON and pre-compile its patterns
    pub fn from_json_str(content: &str) -> Result<Self> {
        let policy: Policy =
            serde_json::from_str(content).map_err(|e| PolicyError::parse(e.to_string()))?;
        policy.compiled()
    }

    /// Load a policy from a file, dispatching on extension (`.json` parses
    /// as JSON, everything else as YAML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    fn compiled(mut self) -> Result<Self> {
        self.requires.compile()?;
        Ok(self)
    }

    /// Evaluate this policy against a claims object.
    ///
    /// Every constraint is visited regardless of sibling outcomes, so the
    /// returned evidence is complete for satisfied and unsatisfied branches
    /// alike.
    pub fn evaluate(&self, claims: &Value) -> MatchOutcome {
        let tree = self.requires.to_tree();

        let result = evaluate(
            &tree,
            &mut |constraint: &&FieldConstraint| {
                let evidence = constraint.evaluate(claims);
                debug!(
                    path = %evidence.path,
                    satisfied = evidence.satisfied,
                    "constraint evaluated"
                );
                EvalResult::new(evidence.satisfied, vec![evidence])
            },
            &mut |op, children: Vec<EvalResult<Vec<Evidence>>>| {
                let satisfied = match op {
                    LogicalOp::And => children.iter().all(|c| c.satisfied),
                    LogicalOp::Or => children.iter().any(|c| c.satisfied),
                };
                let evidence = children.into_iter().flat_map(|c| c.result).collect();
                EvalResult::new(satisfied, evidence)
            },
        );

        MatchOutcome {
            satisfied: result.satisfied,
            evidence: result.result,
        }
    }
}
