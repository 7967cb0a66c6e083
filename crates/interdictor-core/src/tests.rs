#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::components::MovementKeys;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{lerp, Rotation, SimClock};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    /// Verify commands round-trip through the tagged serde representation.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::KeyDown { key: "w".into() },
            PlayerCommand::KeyUp { key: "W".into() },
            PlayerCommand::PointerMove { dx: 3.0, dy: -2.0 },
            PlayerCommand::PointerDown,
            PlayerCommand::PointerLockChanged { locked: true },
            PlayerCommand::Restart,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"PointerMove","dx":1.0,"dy":2.0}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::PointerMove { dx: 1.0, dy: 2.0 });
    }

    #[test]
    fn test_sim_event_serde_is_tagged() {
        let json = serde_json::to_string(&SimEvent::GameOver { score: 300 }).unwrap();
        assert!(json.contains(r#""type":"GameOver""#), "got {json}");
    }

    /// The initial snapshot carries the documented starting values.
    #[test]
    fn test_default_snapshot_initial_values() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.health, 100);
        assert_eq!(snap.energy, 100.0);
        assert!(!snap.is_game_over);
        assert_eq!(snap.phase, GamePhase::Idle);
        assert!(snap.enemies.is_empty());
        assert!(snap.projectiles.is_empty());
        assert!(snap.explosions.is_empty());
        assert_eq!(snap.radio_chatter, vec![RADIO_OPENING_LINE.to_string()]);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_movement_key_names() {
        assert_eq!(MovementKey::from_key_name("w"), Some(MovementKey::Forward));
        assert_eq!(MovementKey::from_key_name("S"), Some(MovementKey::Back));
        assert_eq!(MovementKey::from_key_name("a"), Some(MovementKey::StrafeLeft));
        assert_eq!(MovementKey::from_key_name("D"), Some(MovementKey::StrafeRight));
        assert_eq!(MovementKey::from_key_name("q"), None);
        assert_eq!(MovementKey::from_key_name("Shift"), None);
        assert_eq!(MovementKey::from_key_name(""), None);
    }

    #[test]
    fn test_movement_keys_set_is_idempotent() {
        let mut held = MovementKeys::empty();
        held.insert(MovementKey::Forward.into());
        held.insert(MovementKey::Forward.into());
        assert_eq!(held, MovementKeys::FORWARD);
        held.remove(MovementKey::Forward.into());
        held.remove(MovementKey::Forward.into());
        assert!(held.is_empty());
    }

    /// Unrotated craft looks down -Z with +X to its right.
    #[test]
    fn test_rotation_identity_axes() {
        let rot = Rotation::default();
        assert!(approx(rot.forward(), Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx(rot.right(), Vec3::new(1.0, 0.0, 0.0)));
    }

    /// Positive yaw turns the nose to the left (toward -X).
    #[test]
    fn test_rotation_yaw_left() {
        let rot = Rotation::new(0.0, FRAC_PI_2, 0.0);
        assert!(approx(rot.forward(), Vec3::new(-1.0, 0.0, 0.0)));
    }

    /// Positive pitch raises the nose.
    #[test]
    fn test_rotation_pitch_up() {
        let rot = Rotation::new(0.3, 0.0, 0.0);
        let fwd = rot.forward();
        assert!(fwd.y > 0.0);
        assert!((fwd.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_inverse_round_trip() {
        let rot = Rotation::new(0.4, -1.2, 0.0);
        let v = Vec3::new(12.0, -3.0, 40.0);
        assert!(approx(rot.apply_inverse(rot.apply(v)), v));
    }

    #[test]
    fn test_facing_points_along_direction() {
        let facing = Rotation::facing(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(facing.pitch, 0.0);
        assert_eq!(facing.yaw, 0.0);
        assert_eq!(facing.roll, 0.0);

        let facing = Rotation::facing(Vec3::new(1.0, 0.0, 0.0));
        assert!((facing.yaw - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_normalizes_to_zero() {
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.1), 1.0);
        assert_eq!(lerp(5.0, 5.0, 0.7), 5.0);
    }

    #[test]
    fn test_sim_clock_advance() {
        let mut clock = SimClock::default();
        for _ in 0..60 {
            clock.advance(NOMINAL_TICK_MS);
        }
        assert_eq!(clock.tick, 60);
        assert_eq!(clock.now_ms, 60 * NOMINAL_TICK_MS);
        assert_eq!(clock.age_of(clock.now_ms + 5), 0);
        assert_eq!(clock.age_of(0), clock.now_ms);
    }
}
