//! Gameplay state
//!
//! Owns one `Session` per visit. Entry resets the score, respawns the
//! initial bottle batch, and restarts the spawn timer; a cancel input
//! returns to the menu at any point, carrying the round result in the
//! handoff payload.

use super::{Handoff, InputEvent, State, StateId, Transition};
use crate::sim::{ConfigError, Session, SessionConfig, TickInput, tick};
use crate::view::{BottleView, Frame, VehicleView};

pub struct GameplayState {
    config: SessionConfig,
    base_seed: u64,
    /// Completed startups; salts the per-round seed
    runs: u64,
    session: Option<Session>,
    begin_pending: bool,
    cancel: bool,
    quit: bool,
}

impl GameplayState {
    /// Validates the session config up front so later startups cannot fail
    pub fn new(config: SessionConfig, base_seed: u64) -> Result<Self, ConfigError> {
        // Surface bad physics constants here, not mid-transition
        Session::new(base_seed, config)?;

        Ok(Self {
            config,
            base_seed,
            runs: 0,
            session: None,
            begin_pending: false,
            cancel: false,
            quit: false,
        })
    }

    /// Read-only view of the live session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl State for GameplayState {
    fn startup(&mut self, _handoff: Handoff, _previous: Option<StateId>) {
        let seed = self.base_seed.wrapping_add(self.runs);
        self.runs += 1;
        self.begin_pending = false;
        self.cancel = false;
        self.quit = false;

        let session =
            Session::new(seed, self.config).expect("session config validated at construction");
        log::info!(
            "gameplay round {} starting, seed {seed}, {} bottles",
            self.runs,
            session.remaining
        );
        self.session = Some(session);
    }

    fn cleanup(&mut self) -> Handoff {
        match self.session.take() {
            Some(session) => Handoff {
                last_score: Some(session.score),
                last_collected: Some(session.collected_count()),
            },
            None => Handoff::default(),
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Begin => self.begin_pending = true,
            InputEvent::Cancel => self.cancel = true,
            InputEvent::Quit => self.quit = true,
            InputEvent::Confirm => {}
        }
    }

    fn update(&mut self, input: &TickInput, dt: f32) -> Transition {
        if self.quit {
            return Transition::Quit;
        }
        if self.cancel {
            return Transition::To(StateId::Menu);
        }

        if let Some(session) = self.session.as_mut() {
            // The begin event and the begin input flag are equivalent
            let mut input = input.clone();
            input.begin |= std::mem::take(&mut self.begin_pending);
            tick(session, &input, dt);
        }

        Transition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        frame.state_name = StateId::Gameplay.as_str();

        if let Some(session) = self.session.as_ref() {
            frame.phase_name = Some(session.phase.as_str());
            frame.score = session.score;
            frame.remaining = session.remaining;
            frame.vehicle = Some(VehicleView {
                position: session.vehicle.position,
                heading: session.vehicle.heading,
            });
            frame.bottles.extend(session.bottles.iter().map(|b| BottleView {
                position: b.position,
                collected: b.collected,
            }));
        }
    }
}
