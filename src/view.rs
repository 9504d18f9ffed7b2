//! Read-only frame snapshot for the presentation layer
//!
//! Each tick the active state fills a `Frame` with everything a renderer
//! needs: HUD values, the vehicle pose for sprite placement/rotation, and
//! per-bottle position + collected flag (collected ones are skipped when
//! drawing). Nothing in here feeds back into the simulation.

use glam::Vec2;

/// Vehicle pose for sprite placement and rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleView {
    pub position: Vec2,
    /// Degrees in [0, 360); visual orientation tracks the simulated heading
    pub heading: f32,
}

/// One bottle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BottleView {
    pub position: Vec2,
    pub collected: bool,
}

/// Everything the presentation layer reads for one tick
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Active top-level state name
    pub state_name: &'static str,
    /// Gameplay session phase name, if a session is live
    pub phase_name: Option<&'static str>,
    pub score: f32,
    pub remaining: usize,
    pub vehicle: Option<VehicleView>,
    pub bottles: Vec<BottleView>,
    /// Menu/end-screen caption text
    pub caption: Option<String>,
}

impl Frame {
    /// Reset for reuse; keeps the bottle allocation
    pub fn clear(&mut self) {
        self.state_name = "";
        self.phase_name = None;
        self.score = 0.0;
        self.remaining = 0;
        self.vehicle = None;
        self.bottles.clear();
        self.caption = None;
    }
}
