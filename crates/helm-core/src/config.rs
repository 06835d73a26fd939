//! Engine-wide AI configuration.
//!
//! # Design
//!
//! `AiConfig` is an explicit value constructed once at startup and passed by
//! reference into the manager and agent constructors.  There is no lazily
//! initialized global: anything the core needs from "engine settings" must
//! arrive through this struct.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::limits::MotionLimits;

/// Top-level AI configuration.
///
/// Typically deserialized from a JSON file by the application crate and
/// handed to `ManagerBuilder`.  All fields have defaults, so an empty object
/// (`{}`) is a valid configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Directory searched for strategy definition files referenced by bare
    /// name (e.g. `"guard.json"`).  Absolute paths and inline definitions
    /// bypass it.
    pub definition_dir: PathBuf,

    /// Motion limits applied to agents spawned without explicit limits.
    pub limits: MotionLimits,
}

impl AiConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> CoreResult<Self> {
        serde_json::from_str(s).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Resolve a definition file name against [`definition_dir`](Self::definition_dir).
    ///
    /// Absolute paths are returned unchanged.
    pub fn definition_path(&self, name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.definition_dir.join(p)
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            definition_dir: PathBuf::from("definitions"),
            limits:         MotionLimits::default(),
        }
    }
}
