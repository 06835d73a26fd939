//! Transition conditions and their registry.

use helm_core::AgentSnapshot;
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::definition::ConditionSpec;
use crate::error::{DecisionError, DecisionResult};

// ── Condition trait ───────────────────────────────────────────────────────────

/// A pure predicate over an agent's per-tick snapshot.
///
/// Conditions guard state-machine transitions and are re-evaluated every tick
/// against the *current* snapshot.  Implementations must be side-effect-free:
/// `test` is called speculatively for every outgoing transition of the
/// current state until one fires.
pub trait Condition {
    fn test(&self, snapshot: &AgentSnapshot<'_>) -> bool;
}

// ── ValueCondition ────────────────────────────────────────────────────────────

/// True iff `min < attribute < max` (strict open interval).
///
/// The attribute is read by name off the snapshot each tick; see
/// [`AgentSnapshot::attribute`] for the resolution rules.  A name that
/// resolves to nothing tests false — absence is a legitimate transient state
/// of the attribute map, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCondition {
    property: String,
    min: f32,
    max: f32,
}

impl ValueCondition {
    pub fn new(property: impl Into<String>, min: f32, max: f32) -> Self {
        Self { property: property.into(), min, max }
    }

    /// Build from spec arguments: `[property, min, max]`.
    ///
    /// `min`/`max` accept JSON numbers or numeric strings; a malformed string
    /// fails construction (and therefore the definition load).
    pub fn from_args(args: &[Value]) -> DecisionResult<Self> {
        if args.len() != 3 {
            return Err(DecisionError::Config(format!(
                "VALUE condition takes 3 arguments (property, min, max), got {}",
                args.len()
            )));
        }
        let property = string_arg(&args[0], "property")?;
        let min = number_arg(&args[1], "min")?;
        let max = number_arg(&args[2], "max")?;
        Ok(Self::new(property, min, max))
    }
}

impl Condition for ValueCondition {
    fn test(&self, snapshot: &AgentSnapshot<'_>) -> bool {
        match snapshot.attribute(&self.property) {
            Some(value) => self.min < value && value < self.max,
            None => false,
        }
    }
}

// ── Argument coercion ─────────────────────────────────────────────────────────

fn string_arg<'a>(value: &'a Value, what: &str) -> DecisionResult<&'a str> {
    value.as_str().ok_or_else(|| {
        DecisionError::Config(format!("condition argument {what:?} must be a string, got {value}"))
    })
}

/// Coerce a JSON number or numeric string to `f32`.
fn number_arg(value: &Value, what: &str) -> DecisionResult<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32).ok_or_else(|| {
            DecisionError::Config(format!("condition argument {what:?}: {n} is not representable"))
        }),
        Value::String(s) => s.parse::<f32>().map_err(|_| {
            DecisionError::Config(format!("condition argument {what:?}: invalid number {s:?}"))
        }),
        other => Err(DecisionError::Config(format!(
            "condition argument {what:?} must be a number, got {other}"
        ))),
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Builds a boxed [`Condition`] from a definition's argument list.
pub type ConditionBuilder = fn(&[Value]) -> DecisionResult<Box<dyn Condition>>;

/// Tag → builder table for condition kinds.
///
/// The table is consulted at definition-load time only; built conditions are
/// owned by their transitions afterwards.  Register extension kinds before
/// any agent loads a definition that references them.
pub struct ConditionRegistry {
    builders: FxHashMap<String, ConditionBuilder>,
}

impl ConditionRegistry {
    /// An empty registry with no kinds — useful for fully custom stacks.
    pub fn empty() -> Self {
        Self { builders: FxHashMap::default() }
    }

    /// A registry with the built-in kinds: `VALUE`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry
            .register("VALUE", |args| Ok(Box::new(ValueCondition::from_args(args)?)))
            .expect("builtin tags are unique");
        registry
    }

    /// Register a condition kind under a unique tag.
    ///
    /// Re-registering an existing tag is rejected rather than silently
    /// replaced, so load-time behavior can't change out from under
    /// already-written definitions.
    pub fn register(&mut self, tag: &str, builder: ConditionBuilder) -> DecisionResult<()> {
        if self.builders.contains_key(tag) {
            return Err(DecisionError::Config(format!(
                "condition kind {tag:?} is already registered"
            )));
        }
        self.builders.insert(tag.to_string(), builder);
        Ok(())
    }

    /// `true` if `tag` has a registered builder.
    pub fn contains(&self, tag: &str) -> bool {
        self.builders.contains_key(tag)
    }

    /// Build the condition described by `spec`.
    pub fn build(&self, spec: &ConditionSpec) -> DecisionResult<Box<dyn Condition>> {
        let kind = spec.kind()?;
        let builder = self
            .builders
            .get(kind)
            .ok_or_else(|| DecisionError::UnknownConditionKind(kind.to_string()))?;
        builder(spec.args())
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
