//! Session state and core simulation types
//!
//! A `Session` owns everything one gameplay round mutates: the vehicle, the
//! bottle set, score/remaining bookkeeping, the spawn accumulator, and the
//! seeded RNG stream. It is created when the gameplay state starts up and
//! dropped when it tears down.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::collect_overlaps;
use super::rect::Rect;
use super::spawn::spawn_bottles;
use super::vehicle::{ConfigError, Vehicle, VehicleConfig};
use crate::consts::*;

/// Internal phase of a gameplay session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the begin input, vehicle idle
    StartScreen,
    /// Active play: physics, spawning, collection, scoring
    Playing,
    /// Every bottle collected, round complete
    EndScreen,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::StartScreen => "START_SCREEN",
            SessionPhase::Playing => "PLAYING",
            SessionPhase::EndScreen => "END_SCREEN",
        }
    }
}

/// A collectible bottle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bottle {
    pub position: Vec2,
    /// Axis-aligned bounding region for overlap tests
    pub rect: Rect,
    pub collected: bool,
}

impl Bottle {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            rect: Rect::from_center_half_extents(position, BOTTLE_HALF_EXTENTS),
            collected: false,
        }
    }

    /// Mark the bottle collected. Returns true only on the first call; the
    /// flag never reverts.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Per-session configuration, fixed at construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    pub bounds: Rect,
    pub start_position: Vec2,
    pub initial_bottles: usize,
    /// Seconds between periodic single-bottle spawns
    pub spawn_interval: f32,
    /// Inset from the world edges for spawn positions
    pub spawn_margin: f32,
    pub vehicle: VehicleConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
            start_position: VEHICLE_START,
            initial_bottles: INITIAL_BOTTLES,
            spawn_interval: SPAWN_INTERVAL,
            spawn_margin: SPAWN_MARGIN,
            vehicle: VehicleConfig::default(),
        }
    }
}

/// One gameplay round: vehicle, bottles, score, and spawn pacing
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: SessionPhase,
    pub vehicle: Vehicle,
    pub bottles: Vec<Bottle>,
    /// Thruster-seconds accrued this round, never decreasing
    pub score: f32,
    /// Uncollected bottles, floor 0
    pub remaining: usize,
    /// Every bottle this session has ever spawned
    pub total_spawned: usize,
    pub bounds: Rect,
    /// Elapsed time toward the next periodic spawn
    pub spawn_timer: f32,
    /// Thruster activity from the latest tick, feeds scoring
    pub left_active: bool,
    pub right_active: bool,
    spawn_interval: f32,
    spawn_margin: f32,
    rng: Pcg32,
}

impl Session {
    /// Build a session, failing fast on invalid physics or world config
    pub fn new(seed: u64, config: SessionConfig) -> Result<Self, ConfigError> {
        let vehicle = Vehicle::new(config.start_position, config.vehicle)?;

        let he = config.vehicle.half_extents;
        if config.bounds.width() < he.x * 2.0 || config.bounds.height() < he.y * 2.0 {
            return Err(ConfigError::WorldTooSmall {
                bounds: config.bounds,
                half_extents: he,
            });
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let bottles = spawn_bottles(
            config.initial_bottles,
            config.bounds,
            config.spawn_margin,
            &mut rng,
        );
        let remaining = bottles.len();

        Ok(Self {
            phase: SessionPhase::StartScreen,
            vehicle,
            bottles,
            score: 0.0,
            remaining,
            total_spawned: remaining,
            bounds: config.bounds,
            spawn_timer: 0.0,
            left_active: false,
            right_active: false,
            spawn_interval: config.spawn_interval,
            spawn_margin: config.spawn_margin,
            rng,
        })
    }

    /// Bottles collected so far this round
    pub fn collected_count(&self) -> usize {
        self.total_spawned - self.remaining
    }

    /// Advance the periodic spawn accumulator.
    ///
    /// When the accumulator reaches the interval, exactly one bottle is
    /// spawned and the accumulator resets to zero.
    pub fn tick_spawner(&mut self, dt: f32) {
        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval {
            self.spawn_timer = 0.0;
            let mut fresh = spawn_bottles(1, self.bounds, self.spawn_margin, &mut self.rng);
            self.bottles.append(&mut fresh);
            self.remaining += 1;
            self.total_spawned += 1;
            log::debug!(
                "spawned bottle {} ({} remaining)",
                self.total_spawned,
                self.remaining
            );
        }
    }

    /// Consume every bottle overlapping the hull, once each.
    ///
    /// Returns the number of bottles collected by this call.
    pub fn check_collisions(&mut self) -> usize {
        let consumed = collect_overlaps(self.vehicle.bounding_rect(), &mut self.bottles);
        self.remaining -= consumed;
        consumed
    }

    /// Accrue `dt` seconds of score per active thruster.
    ///
    /// Non-positive `dt` leaves the score untouched; score never decreases.
    pub fn update_score(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        if self.left_active {
            self.score += dt;
        }
        if self.right_active {
            self.score += dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            bounds: Rect::new(0.0, 0.0, 800.0, 600.0),
            start_position: Vec2::new(400.0, 300.0),
            initial_bottles: 5,
            spawn_interval: 5.0,
            spawn_margin: 50.0,
            vehicle: VehicleConfig::default(),
        }
    }

    #[test]
    fn test_session_starts_on_start_screen() {
        let s = Session::new(42, test_config()).unwrap();
        assert_eq!(s.phase, SessionPhase::StartScreen);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.remaining, 5);
        assert_eq!(s.total_spawned, 5);
        assert_eq!(s.bottles.len(), 5);
    }

    #[test]
    fn test_session_rejects_bad_config() {
        let mut cfg = test_config();
        cfg.vehicle.mass = -1.0;
        assert!(Session::new(42, cfg).is_err());

        let mut tiny = test_config();
        tiny.bounds = Rect::new(0.0, 0.0, 40.0, 600.0);
        assert!(matches!(
            Session::new(42, tiny),
            Err(ConfigError::WorldTooSmall { .. })
        ));
    }

    #[test]
    fn test_conservation_invariant() {
        let mut s = Session::new(42, test_config()).unwrap();

        // Walk the vehicle onto each bottle in turn
        for i in 0..s.bottles.len() {
            s.vehicle.position = s.bottles[i].position;
            s.check_collisions();
            assert_eq!(s.collected_count() + s.remaining, s.total_spawned);
        }
        assert_eq!(s.remaining, 0);
    }

    #[test]
    fn test_score_scenario() {
        // left for 0.3s, idle 0.2s, both 0.5s => 1.3
        let mut s = Session::new(42, test_config()).unwrap();

        s.left_active = true;
        s.right_active = false;
        s.update_score(0.3);

        s.left_active = false;
        s.update_score(0.2);

        s.left_active = true;
        s.right_active = true;
        s.update_score(0.5);

        assert!((s.score - 1.3).abs() < 1e-5);
    }

    #[test]
    fn test_score_monotonic_and_defensive() {
        let mut s = Session::new(42, test_config()).unwrap();
        s.left_active = true;
        s.right_active = true;

        let mut last = 0.0;
        for dt in [0.1, 0.0, 0.25, -1.0, 0.5] {
            s.update_score(dt);
            assert!(s.score >= last);
            last = s.score;
        }
        assert!((s.score - 1.7).abs() < 1e-5);
    }

    #[test]
    fn test_spawner_pacing() {
        let mut s = Session::new(42, test_config()).unwrap();
        assert_eq!(s.total_spawned, 5);

        // Just under the interval: nothing
        s.tick_spawner(4.9);
        assert_eq!(s.total_spawned, 5);

        // Crossing it: exactly one bottle, accumulator reset
        s.tick_spawner(0.2);
        assert_eq!(s.total_spawned, 6);
        assert_eq!(s.remaining, 6);
        assert_eq!(s.spawn_timer, 0.0);

        // A huge dt still spawns one per firing
        s.tick_spawner(50.0);
        assert_eq!(s.total_spawned, 7);
    }

    #[test]
    fn test_respawn_uses_session_stream() {
        // Same seed, same call sequence: identical respawn positions
        let mut a = Session::new(9, test_config()).unwrap();
        let mut b = Session::new(9, test_config()).unwrap();

        a.tick_spawner(5.0);
        b.tick_spawner(5.0);

        assert_eq!(
            a.bottles.last().unwrap().position,
            b.bottles.last().unwrap().position
        );
    }
}
