//! Unit tests for helm-core.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::{AgentId, AgentSnapshot, AiConfig, MotionLimits, StateId, TargetInfo};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snapshot(attrs: &FxHashMap<String, f32>) -> AgentSnapshot<'_> {
    AgentSnapshot {
        position:         Vec3::ZERO,
        orientation:      0.5,
        velocity:         Vec3::new(3.0, 4.0, 0.0),
        angular_velocity: 0.0,
        limits:           MotionLimits::default(),
        target:           None,
        attributes:       attrs,
    }
}

// ── IDs ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod id_tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(StateId::default(), StateId::INVALID);
    }

    #[test]
    fn index_and_display() {
        let id = AgentId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "AgentId(7)");
    }

    #[test]
    fn try_from_usize_roundtrip() {
        let id = StateId::try_from(12usize).unwrap();
        assert_eq!(id, StateId(12));
        assert!(StateId::try_from(usize::MAX).is_err());
    }
}

// ── MotionLimits ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod limits_tests {
    use super::*;

    #[test]
    fn friction_is_speed_over_acceleration() {
        let limits = MotionLimits::new(0.5, 0.1, 0.1);
        assert_eq!(limits.friction(), 0.2);
    }

    #[test]
    fn defaults_match_character_scale() {
        let limits = MotionLimits::default();
        assert_eq!(limits.max_acceleration, 0.5);
        assert_eq!(limits.max_speed, 0.1);
        assert_eq!(limits.turn_speed, 0.1);
    }
}

// ── AiConfig ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_object_uses_defaults() {
        let config = AiConfig::from_json_str("{}").unwrap();
        assert_eq!(config.definition_dir, PathBuf::from("definitions"));
        assert_eq!(config.limits, MotionLimits::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = AiConfig::from_json_str(
            r#"{
                "definition_dir": "ai/defs",
                "limits": { "max_acceleration": 1.0, "max_speed": 0.2, "turn_speed": 0.3 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.definition_dir, PathBuf::from("ai/defs"));
        assert_eq!(config.limits.max_speed, 0.2);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(AiConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn definition_path_joins_relative_names() {
        let config = AiConfig::from_json_str(r#"{ "definition_dir": "defs" }"#).unwrap();
        assert_eq!(config.definition_path("guard.json"), PathBuf::from("defs/guard.json"));
    }

    #[test]
    fn definition_path_keeps_absolute_names() {
        let config = AiConfig::default();
        assert_eq!(
            config.definition_path("/abs/guard.json"),
            PathBuf::from("/abs/guard.json")
        );
    }
}

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn derived_speed_and_orientation() {
        let attrs = FxHashMap::default();
        let snap = snapshot(&attrs);
        assert_eq!(snap.attribute("speed"), Some(5.0)); // |(3, 4, 0)|
        assert_eq!(snap.attribute("orientation"), Some(0.5));
    }

    #[test]
    fn target_range_requires_a_target() {
        let attrs = FxHashMap::default();
        let mut snap = snapshot(&attrs);
        assert_eq!(snap.attribute("target_range"), None);

        snap.target = Some(TargetInfo { position: Vec3::new(0.0, 2.0, 0.0) });
        assert_eq!(snap.attribute("target_range"), Some(2.0));
        assert_eq!(snap.target_position(), Some(Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn application_attributes_resolve_by_name() {
        let mut attrs = FxHashMap::default();
        attrs.insert("hp".to_string(), 3.0);
        let snap = snapshot(&attrs);
        assert_eq!(snap.attribute("hp"), Some(3.0));
        assert_eq!(snap.attribute("mana"), None);
    }

    #[test]
    fn derived_properties_shadow_the_attribute_map() {
        let mut attrs = FxHashMap::default();
        attrs.insert("speed".to_string(), 99.0);
        let snap = snapshot(&attrs);
        assert_eq!(snap.attribute("speed"), Some(5.0));
    }
}
