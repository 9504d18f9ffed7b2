//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit `dt` only, supplied by the caller
//! - Seeded RNG only, one stream per session
//! - No input polling, rendering, or platform dependencies

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use collision::collect_overlaps;
pub use rect::Rect;
pub use spawn::spawn_bottles;
pub use state::{Bottle, Session, SessionConfig, SessionPhase};
pub use tick::{TickInput, tick};
pub use vehicle::{ConfigError, Vehicle, VehicleConfig};
