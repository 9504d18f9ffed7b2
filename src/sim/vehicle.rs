//! Differential-thrust vehicle physics
//!
//! FRED is driven by two independent thrusters. Their sum produces forward
//! force along the heading, their difference produces torque: left-only
//! thrust yields positive torque and a "right" turn (see
//! [`crate::heading_direction`] for the sign convention). Integration is
//! semi-implicit Euler with quadratic linear drag and multiplicative
//! angular drag; the order of operations is part of the contract.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::{heading_direction, wrap_degrees};

/// Immutable physics constants for one session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Hull mass (must be positive and finite)
    pub mass: f32,
    /// Force per thruster at full intent
    pub max_thrust: f32,
    /// Torque from a single thruster at full intent
    pub max_torque: f32,
    /// Quadratic drag coefficient opposing linear motion
    pub linear_drag: f32,
    /// Per-second multiplicative decay of angular velocity
    pub angular_drag: f32,
    /// Half-extents of the hull's axis-aligned bounding region
    pub half_extents: Vec2,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            mass: VEHICLE_MASS,
            max_thrust: MAX_THRUST,
            max_torque: MAX_TORQUE,
            linear_drag: LINEAR_DRAG,
            angular_drag: ANGULAR_DRAG,
            half_extents: VEHICLE_HALF_EXTENTS,
        }
    }
}

impl VehicleConfig {
    /// Reject configurations that would poison the integrator with NaN or
    /// division by zero. Called at session construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if !self.max_thrust.is_finite() || self.max_thrust < 0.0 {
            return Err(ConfigError::NegativeConstant("max_thrust"));
        }
        if !self.max_torque.is_finite() || self.max_torque < 0.0 {
            return Err(ConfigError::NegativeConstant("max_torque"));
        }
        if !self.linear_drag.is_finite() || self.linear_drag < 0.0 {
            return Err(ConfigError::NegativeConstant("linear_drag"));
        }
        if !self.angular_drag.is_finite() || self.angular_drag < 0.0 {
            return Err(ConfigError::NegativeConstant("angular_drag"));
        }
        if !self.half_extents.is_finite()
            || self.half_extents.x <= 0.0
            || self.half_extents.y <= 0.0
        {
            return Err(ConfigError::DegenerateHull(self.half_extents));
        }
        Ok(())
    }
}

/// Invalid physics configuration, surfaced at session construction
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveMass(f32),
    NegativeConstant(&'static str),
    DegenerateHull(Vec2),
    /// Play area too small to contain the hull
    WorldTooSmall { bounds: Rect, half_extents: Vec2 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveMass(m) => {
                write!(f, "vehicle mass must be positive and finite, got {m}")
            }
            ConfigError::NegativeConstant(name) => {
                write!(f, "physics constant `{name}` must be finite and non-negative")
            }
            ConfigError::DegenerateHull(he) => {
                write!(f, "hull half-extents must be positive, got {he}")
            }
            ConfigError::WorldTooSmall {
                bounds,
                half_extents,
            } => write!(
                f,
                "world {}x{} cannot contain hull half-extents {half_extents}",
                bounds.width(),
                bounds.height()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Hull center in world units
    pub position: Vec2,
    /// World units per second
    pub velocity: Vec2,
    /// Recomputed every tick from thrust and drag
    pub acceleration: Vec2,
    /// Degrees, wrapped to [0, 360)
    pub heading: f32,
    /// Degrees per second
    pub angular_velocity: f32,
    /// Left thruster intent, expected in [0, 1] (caller's responsibility)
    pub left_thrust: f32,
    /// Right thruster intent, expected in [0, 1] (caller's responsibility)
    pub right_thrust: f32,
    config: VehicleConfig,
}

impl Vehicle {
    /// Create a vehicle at `position`, failing fast on a bad config
    pub fn new(position: Vec2, config: VehicleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            heading: 0.0,
            angular_velocity: 0.0,
            left_thrust: 0.0,
            right_thrust: 0.0,
            config,
        })
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    /// Set continuous thrust intents for the next tick.
    ///
    /// Precondition: both values in [0, 1]. Out-of-range intents are not
    /// validated here.
    pub fn set_thrust(&mut self, left: f32, right: f32) {
        self.left_thrust = left;
        self.right_thrust = right;
    }

    /// Set thrust intents from the raw boolean input pair
    pub fn set_thrust_input(&mut self, left: bool, right: bool) {
        self.set_thrust(if left { 1.0 } else { 0.0 }, if right { 1.0 } else { 0.0 });
    }

    /// Unit forward vector for the current heading
    pub fn direction(&self) -> Vec2 {
        heading_direction(self.heading)
    }

    /// Axis-aligned bounding region of the hull
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center_half_extents(self.position, self.config.half_extents)
    }

    /// Advance the vehicle by `dt` seconds using the current thrust intents.
    ///
    /// `dt <= 0` leaves every field untouched. Drag is applied to the
    /// existing velocities before the additive force terms; that ordering is
    /// load-bearing for numerical results and must not be rearranged.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let total_thrust = (self.left_thrust + self.right_thrust) * self.config.max_thrust;
        let torque = (self.left_thrust - self.right_thrust) * self.config.max_torque;

        // Forward direction from the heading as it was at tick start
        let direction = self.direction();

        // Angular integration: drag, torque, heading
        self.angular_velocity *= 1.0 - self.config.angular_drag * dt;
        self.angular_velocity += torque * dt / self.config.mass;
        self.heading = wrap_degrees(self.heading + self.angular_velocity * dt);

        // Linear integration (semi-implicit Euler)
        let thrust_force = direction * total_thrust;
        let drag_force = -self.velocity * self.velocity.length() * self.config.linear_drag;
        self.acceleration = (thrust_force + drag_force) / self.config.mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        debug_assert!(self.velocity.is_finite());
        debug_assert!((0.0..360.0).contains(&self.heading));
    }

    /// Clamp the hull into `bounds`, zeroing velocity per contacted axis.
    ///
    /// Each axis resolves independently, so corner contact zeroes both
    /// components through the same rule. Contact is inclusive: a hull edge
    /// resting exactly on the boundary kills that axis's velocity. A
    /// displacement of any magnitude lands exactly on the boundary rather
    /// than overshooting.
    pub fn clamp_to_bounds(&mut self, bounds: Rect) {
        let he = self.config.half_extents;

        if self.position.x <= bounds.min.x + he.x {
            self.position.x = bounds.min.x + he.x;
            self.velocity.x = 0.0;
        } else if self.position.x >= bounds.max.x - he.x {
            self.position.x = bounds.max.x - he.x;
            self.velocity.x = 0.0;
        }

        if self.position.y <= bounds.min.y + he.y {
            self.position.y = bounds.min.y + he.y;
            self.velocity.y = 0.0;
        } else if self.position.y >= bounds.max.y - he.y {
            self.position.y = bounds.max.y - he.y;
            self.velocity.y = 0.0;
        }
    }
}
