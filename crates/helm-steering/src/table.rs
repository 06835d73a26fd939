//! Name → action lookup: mutable registry, frozen table.
//!
//! # Design
//!
//! Actions register by name into an [`ActionRegistry`] while the application
//! is setting up; `freeze()` converts it into an [`ActionTable`], which is
//! immutable and shared read-only by every agent for the life of the
//! manager.  The build/share split keeps the table safe to read from a
//! multi-threaded host even though this core never requires one.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::action::{Seek, SteeringAction};
use crate::error::{SteeringError, SteeringResult};

// ── ActionRegistry ────────────────────────────────────────────────────────────

/// The mutable build phase of the action table.
///
/// Hosts and extensions register additional named actions here before the
/// manager is constructed; names are validated unique at registration time.
pub struct ActionRegistry {
    actions: FxHashMap<String, Arc<dyn SteeringAction>>,
}

impl ActionRegistry {
    /// An empty registry with no actions.
    pub fn empty() -> Self {
        Self { actions: FxHashMap::default() }
    }

    /// A registry with the built-in library: `seek`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("seek", Arc::new(Seek)).expect("builtin names are unique");
        registry
    }

    /// Register an action under a unique name.
    pub fn register(
        &mut self,
        name: &str,
        action: Arc<dyn SteeringAction>,
    ) -> SteeringResult<()> {
        if self.actions.contains_key(name) {
            return Err(SteeringError::DuplicateAction(name.to_string()));
        }
        self.actions.insert(name.to_string(), action);
        Ok(())
    }

    /// `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Freeze into the immutable, shareable table.
    pub fn freeze(self) -> ActionTable {
        ActionTable { actions: self.actions }
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

// ── ActionTable ───────────────────────────────────────────────────────────────

/// The frozen name → action table shared read-only across all agents.
pub struct ActionTable {
    actions: FxHashMap<String, Arc<dyn SteeringAction>>,
}

impl ActionTable {
    /// Look up an action, or `None` if the name is absent.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SteeringAction>> {
        self.actions.get(name)
    }

    /// Look up an action, failing with a typed error on a miss.
    pub fn resolve(&self, name: &str) -> SteeringResult<Arc<dyn SteeringAction>> {
        self.actions
            .get(name)
            .cloned()
            .ok_or_else(|| SteeringError::UnknownAction(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
