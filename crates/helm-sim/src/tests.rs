//! Unit tests for helm-sim.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;

use helm_agent::HostActor;
use helm_core::AiConfig;
use helm_decision::StrategyDefinition;
use helm_steering::ActionRegistry;

use crate::{Manager, ManagerBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Host handle backed by `Cell`s; counts the commands it receives.
struct TestHost {
    position:  Cell<Vec3>,
    valid:     Cell<bool>,
    movements: Cell<u32>,
}

impl TestHost {
    fn at(position: Vec3) -> Rc<Self> {
        Rc::new(Self {
            position:  Cell::new(position),
            valid:     Cell::new(true),
            movements: Cell::new(0),
        })
    }
}

impl HostActor for TestHost {
    fn position(&self) -> Vec3 {
        self.position.get()
    }
    fn orientation(&self) -> f32 {
        0.0
    }
    fn is_valid(&self) -> bool {
        self.valid.get()
    }
    fn apply_movement(&self, _velocity: Vec3) {
        self.movements.set(self.movements.get() + 1);
    }
    fn apply_rotation(&self, _angular: f32) {}
}

const SEEK_ONLY_JSON: &str = r#"{ "states": [ { "name": "hunt", "actions": ["seek"] } ] }"#;

fn manager() -> Manager<TestHost> {
    ManagerBuilder::new(AiConfig::default()).build()
}

fn seek_definition() -> StrategyDefinition {
    StrategyDefinition::from_json_str(SEEK_ONLY_JSON).unwrap()
}

// ── Builder & lifecycle ───────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn builder_defaults_carry_the_builtins() {
        let manager = manager();
        assert!(manager.actions().get("seek").is_some());
        assert!(manager.conditions().contains("VALUE"));
        assert!(manager.strategies().contains("STATE_MACHINE"));
        assert!(manager.strategies().contains("IDLE"));
        assert!(manager.is_empty());
    }

    #[test]
    fn spawned_agents_get_the_configured_limits() {
        let mut manager = manager();
        let id = manager.spawn(TestHost::at(Vec3::ZERO), &seek_definition()).unwrap();
        let expected = AiConfig::default().limits;
        assert_eq!(manager.agent(id).unwrap().limits(), expected);
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut manager = manager();
        let a = manager.spawn(TestHost::at(Vec3::ZERO), &seek_definition()).unwrap();
        let b = manager.spawn(TestHost::at(Vec3::ZERO), &seek_definition()).unwrap();
        assert!(manager.remove(a).is_some());
        let c = manager.spawn(TestHost::at(Vec3::ZERO), &seek_definition()).unwrap();
        assert!(a < b && b < c);
        assert!(manager.agent(a).is_none());
        assert_eq!(manager.agent_count(), 2);
    }

    #[test]
    fn spawn_rejects_a_bad_definition() {
        let mut manager = manager();
        let definition = StrategyDefinition::from_json_str(
            r#"{ "states": [ { "name": "a",
                              "transitions": [ [["PSYCHIC"], "a"] ] } ] }"#,
        )
        .unwrap();
        let result = manager.spawn(TestHost::at(Vec3::ZERO), &definition);
        assert!(matches!(result, Err(SimError::Agent(_))));
        assert!(manager.is_empty());
    }

    #[test]
    fn spawn_from_inline_source() {
        let mut manager = manager();
        let id = manager.spawn_from_source(TestHost::at(Vec3::ZERO), SEEK_ONLY_JSON).unwrap();
        assert!(manager.agent(id).is_some());
    }

    #[test]
    fn spawn_from_source_resolves_against_definition_dir() {
        let dir = std::env::temp_dir().join("helm-sim-defs");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("hunt.json");
        std::fs::write(&file, SEEK_ONLY_JSON).unwrap();

        let config = AiConfig { definition_dir: dir, ..AiConfig::default() };
        let mut manager: Manager<TestHost> = ManagerBuilder::new(config).build();
        let id = manager.spawn_from_source(TestHost::at(Vec3::ZERO), "hunt.json").unwrap();
        assert!(manager.agent(id).is_some());
    }
}

// ── The tick sweep ────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep_tests {
    use super::*;

    #[test]
    fn update_drives_every_agent_once() {
        let mut manager = manager();
        let hosts: Vec<_> = (0..3).map(|_| TestHost::at(Vec3::ZERO)).collect();
        for host in &hosts {
            manager.spawn(Rc::clone(host), &seek_definition()).unwrap();
        }

        assert_eq!(manager.update(1.0), 3);
        for host in &hosts {
            assert_eq!(host.movements.get(), 1);
        }
    }

    #[test]
    fn seeking_agent_accelerates_toward_its_target() {
        let mut manager = manager();
        let prey = TestHost::at(Vec3::new(10.0, 0.0, 0.0));
        let id = manager.spawn(TestHost::at(Vec3::ZERO), &seek_definition()).unwrap();
        manager.agent_mut(id).unwrap().set_target(&prey);

        manager.update(1.0);
        let velocity = manager.agent(id).unwrap().velocity();
        assert!(velocity.x > 0.0);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn invalid_host_is_skipped_then_evicted() {
        let mut manager = manager();
        let before = TestHost::at(Vec3::ZERO);
        let dying = TestHost::at(Vec3::ZERO);
        let after = TestHost::at(Vec3::ZERO);
        let a = manager.spawn(Rc::clone(&before), &seek_definition()).unwrap();
        let b = manager.spawn(Rc::clone(&dying), &seek_definition()).unwrap();
        let c = manager.spawn(Rc::clone(&after), &seek_definition()).unwrap();

        dying.valid.set(false);
        assert_eq!(manager.update(1.0), 2);

        assert_eq!(dying.movements.get(), 0);
        assert_eq!(before.movements.get(), 1);
        assert_eq!(after.movements.get(), 1);
        assert!(manager.agent(b).is_none());
        assert_eq!(manager.agent_ids().collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn failing_agent_is_evicted_without_disturbing_the_rest() {
        let mut manager = manager();
        let ok_host = TestHost::at(Vec3::ZERO);
        let a = manager
            .spawn_from_source(
                TestHost::at(Vec3::ZERO),
                r#"{ "states": [ { "name": "broken", "actions": ["warp"] } ] }"#,
            )
            .unwrap();
        let b = manager.spawn(Rc::clone(&ok_host), &seek_definition()).unwrap();

        assert_eq!(manager.update(1.0), 1);
        assert!(manager.agent(a).is_none());
        assert!(manager.agent(b).is_some());
        assert_eq!(ok_host.movements.get(), 1);

        // The survivor keeps updating on later ticks.
        assert_eq!(manager.update(1.0), 1);
        assert_eq!(ok_host.movements.get(), 2);
    }

    #[test]
    fn state_machine_transitions_end_to_end() {
        let definition = StrategyDefinition::from_json_str(
            r#"{ "states": [
                   { "name": "idle",
                     "transitions": [ [["VALUE", "hp", 0, 5], "hunt"] ] },
                   { "name": "hunt", "actions": ["seek"] }
                 ] }"#,
        )
        .unwrap();

        let mut manager = manager();
        let prey = TestHost::at(Vec3::new(10.0, 0.0, 0.0));
        let id = manager.spawn(TestHost::at(Vec3::ZERO), &definition).unwrap();
        {
            let agent = manager.agent_mut(id).unwrap();
            agent.set_target(&prey);
            agent.set_attribute("hp", 3.0);
        }

        // Tick 1: the transition fires; exit + entry actions are both empty,
        // so nothing steers yet.
        manager.update(1.0);
        assert_eq!(manager.agent(id).unwrap().velocity(), Vec3::ZERO);

        // Tick 2: now in "hunt", seek pulls the agent toward its prey.
        manager.update(1.0);
        assert!(manager.agent(id).unwrap().velocity().x > 0.0);
    }

    #[test]
    fn custom_action_registry_reaches_the_sweep() {
        use std::sync::Arc;

        use helm_core::AgentSnapshot;
        use helm_steering::{SteeringAction, SteeringOutput};

        struct Rise;
        impl SteeringAction for Rise {
            fn steer(&self, _snapshot: &AgentSnapshot<'_>) -> SteeringOutput {
                SteeringOutput::new(Vec3::Z, 0.0)
            }
        }

        let mut actions = ActionRegistry::with_builtins();
        actions.register("rise", Arc::new(Rise)).unwrap();

        let mut manager: Manager<TestHost> =
            ManagerBuilder::new(AiConfig::default()).actions(actions).build();
        let id = manager
            .spawn_from_source(
                TestHost::at(Vec3::ZERO),
                r#"{ "states": [ { "name": "float", "actions": ["rise"] } ] }"#,
            )
            .unwrap();

        manager.update(1.0);
        assert!(manager.agent(id).unwrap().velocity().z > 0.0);
    }
}
