//! FRED: Ocean Cleanup - a differential-thrust bottle-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicle physics, spawning, collection)
//! - `states`: Top-level game state machine (menu, gameplay)
//! - `view`: Read-only per-tick frame snapshot for the presentation layer
//! - `settings`: Data-driven world/spawn tuning

pub mod settings;
pub mod sim;
pub mod states;
pub mod view;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1280.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Vehicle defaults - FRED starts at the world center
    pub const VEHICLE_START: Vec2 = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
    /// Half-extents of the hull's bounding region
    pub const VEHICLE_HALF_EXTENTS: Vec2 = Vec2::new(50.0, 25.0);
    pub const VEHICLE_MASS: f32 = 10.0;
    /// Force per thruster at full intent
    pub const MAX_THRUST: f32 = 2000.0;
    /// Torque from a single thruster at full intent
    pub const MAX_TORQUE: f32 = 5400.0;
    /// Quadratic drag coefficient opposing linear motion
    pub const LINEAR_DRAG: f32 = 0.05;
    /// Per-second multiplicative decay of angular velocity
    pub const ANGULAR_DRAG: f32 = 3.0;

    /// Bottle defaults
    pub const BOTTLE_HALF_EXTENTS: Vec2 = Vec2::new(15.0, 25.0);
    /// Bottles placed when a session starts
    pub const INITIAL_BOTTLES: usize = 5;
    /// Seconds between periodic single-bottle spawns
    pub const SPAWN_INTERVAL: f32 = 5.0;
    /// Inset from the world edges for spawn positions
    pub const SPAWN_MARGIN: f32 = 50.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit forward vector for a heading in degrees.
///
/// Sign convention: heading 0 faces +X and increasing heading rotates the
/// forward vector by the negative mathematical angle (toward -Y). Under the
/// world's flipped-Y screen convention that is the naval "right" turn, so
/// left-only thrust (positive torque) turns right.
#[inline]
pub fn heading_direction(heading: f32) -> Vec2 {
    Vec2::from_angle(-heading.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
    }

    #[test]
    fn test_heading_direction_convention() {
        let d0 = heading_direction(0.0);
        assert!((d0.x - 1.0).abs() < 1e-6);
        assert!(d0.y.abs() < 1e-6);

        // Heading 90 points "up" in flipped-Y screen space (negative Y)
        let d90 = heading_direction(90.0);
        assert!(d90.x.abs() < 1e-6);
        assert!((d90.y + 1.0).abs() < 1e-6);
    }
}
