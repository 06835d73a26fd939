//! Serde model of the declarative strategy definition format.
//!
//! # JSON schema
//!
//! ```json
//! { "states": [
//!     { "name": "patrol",
//!       "actions": ["seek"],
//!       "entry_actions": [],
//!       "exit_actions": [],
//!       "transitions": [ [ ["VALUE", "hp", 0, 5], "flee" ] ]
//!     } ] }
//! ```
//!
//! A transition is a two-element array: a condition spec (kind tag followed
//! by its arguments) and a target state name.  Condition arguments may be
//! JSON numbers or numeric strings; coercion happens when the condition is
//! built, so a malformed value fails the load, not the tick.
//!
//! The action lists are optional in the file; omitted lists default to empty.
//!
//! # Sources
//!
//! Definitions load from a file path, any [`Read`] source, or an inline JSON
//! string — all three produce the same in-memory shape.  [`load`]
//! (`StrategyDefinition::load`) accepts either a path or inline text in one
//! argument: if the string names an existing file it is read, otherwise it is
//! parsed as JSON.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DecisionError, DecisionResult};

// ── Definition records ────────────────────────────────────────────────────────

/// A complete strategy definition: an ordered list of states.
///
/// Order matters: the first state is the machine's initial state, and each
/// state's transitions are checked in the order written.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyDefinition {
    pub states: Vec<StateDefinition>,
}

/// One state's declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct StateDefinition {
    /// Unique key; transitions reference states by this name.
    pub name: String,

    /// Action names run every tick the state is resident.
    #[serde(default)]
    pub actions: Vec<String>,

    /// Action names emitted on the tick a transition *into* this state fires.
    #[serde(default)]
    pub entry_actions: Vec<String>,

    /// Action names emitted on the tick a transition *out of* this state fires.
    #[serde(default)]
    pub exit_actions: Vec<String>,

    /// Outgoing edges, checked first-to-last each tick.
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
}

/// A `[condition_spec, target_state_name]` pair.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionDefinition(pub ConditionSpec, pub String);

impl TransitionDefinition {
    #[inline]
    pub fn condition(&self) -> &ConditionSpec {
        &self.0
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.1
    }
}

/// An unparsed condition: `[kind_tag, ...args]`.
///
/// The tag selects a builder in the
/// [`ConditionRegistry`](crate::ConditionRegistry); the remaining values are
/// handed to that builder untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ConditionSpec(pub Vec<Value>);

impl ConditionSpec {
    /// The kind tag (first element, must be a string).
    pub fn kind(&self) -> DecisionResult<&str> {
        match self.0.first() {
            Some(Value::String(tag)) => Ok(tag),
            Some(other) => Err(DecisionError::Config(format!(
                "condition kind tag must be a string, got {other}"
            ))),
            None => Err(DecisionError::Config("empty condition spec".to_string())),
        }
    }

    /// The builder arguments (everything after the tag).
    pub fn args(&self) -> &[Value] {
        self.0.get(1..).unwrap_or_default()
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl StrategyDefinition {
    /// Parse a definition from an inline JSON string.
    pub fn from_json_str(s: &str) -> DecisionResult<Self> {
        serde_json::from_str(s).map_err(|e| DecisionError::Parse(e.to_string()))
    }

    /// Parse a definition from any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or loading from asset
    /// archives.
    pub fn from_reader<R: Read>(reader: R) -> DecisionResult<Self> {
        serde_json::from_reader(reader).map_err(|e| DecisionError::Parse(e.to_string()))
    }

    /// Load a definition from a JSON file.
    pub fn from_path(path: &Path) -> DecisionResult<Self> {
        let file = std::fs::File::open(path).map_err(DecisionError::Io)?;
        Self::from_reader(file)
    }

    /// Accept either a file path or inline JSON in one string.
    ///
    /// If `source` names an existing file it is read; otherwise it is parsed
    /// as inline JSON.
    pub fn load(source: &str) -> DecisionResult<Self> {
        let path = Path::new(source);
        if path.is_file() {
            Self::from_path(path)
        } else {
            Self::from_json_str(source)
        }
    }
}
