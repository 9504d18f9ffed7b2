//! Per-tick session advance
//!
//! One tick runs strictly in order: input intents, physics integration,
//! boundary resolution, periodic spawning, collision/scoring, and finally
//! the completion check. Everything is synchronous and deterministic.

use super::state::{Session, SessionPhase};

/// Raw input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left thruster held
    pub left_thrust: bool,
    /// Right thruster held
    pub right_thrust: bool,
    /// Begin the round (start screen only)
    pub begin: bool,
}

/// Advance the session by `dt` seconds
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    match session.phase {
        SessionPhase::StartScreen => {
            if input.begin {
                session.phase = SessionPhase::Playing;
                log::info!("session begun, {} bottles afloat", session.remaining);
            }
        }

        SessionPhase::Playing => {
            session.left_active = input.left_thrust;
            session.right_active = input.right_thrust;
            session
                .vehicle
                .set_thrust_input(input.left_thrust, input.right_thrust);

            session.vehicle.update(dt);
            let bounds = session.bounds;
            session.vehicle.clamp_to_bounds(bounds);

            if dt > 0.0 {
                session.tick_spawner(dt);
            }

            let consumed = session.check_collisions();
            session.update_score(dt);

            // Completion is checked once per tick, after all overlaps
            if consumed > 0 && session.remaining == 0 {
                session.phase = SessionPhase::EndScreen;
                log::info!(
                    "all {} bottles collected, final score {:.2}",
                    session.total_spawned,
                    session.score
                );
            }
        }

        SessionPhase::EndScreen => {}
    }
}
