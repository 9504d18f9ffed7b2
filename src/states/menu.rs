//! Main menu state
//!
//! Idles until a confirm input, then hands control to gameplay. Displays
//! the previous round's result when one was carried over in the handoff.

use super::{Handoff, InputEvent, State, StateId, Transition};
use crate::sim::TickInput;
use crate::view::Frame;

pub struct MenuState {
    confirmed: bool,
    quit: bool,
    last_result: Option<(f32, usize)>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            confirmed: false,
            quit: false,
            last_result: None,
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl State for MenuState {
    fn startup(&mut self, handoff: Handoff, _previous: Option<StateId>) {
        self.confirmed = false;
        self.quit = false;
        if let (Some(score), Some(collected)) = (handoff.last_score, handoff.last_collected) {
            self.last_result = Some((score, collected));
            log::debug!("menu showing last result: {score:.2} / {collected} bottles");
        }
    }

    fn cleanup(&mut self) -> Handoff {
        // The menu originates nothing; carry the last result forward
        Handoff {
            last_score: self.last_result.map(|(s, _)| s),
            last_collected: self.last_result.map(|(_, c)| c),
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Confirm => self.confirmed = true,
            InputEvent::Quit => self.quit = true,
            _ => {}
        }
    }

    fn update(&mut self, _input: &TickInput, _dt: f32) -> Transition {
        if self.quit {
            Transition::Quit
        } else if self.confirmed {
            Transition::To(StateId::Gameplay)
        } else {
            Transition::Stay
        }
    }

    fn draw(&self, frame: &mut Frame) {
        frame.state_name = StateId::Menu.as_str();
        frame.caption = Some(match self.last_result {
            Some((score, collected)) => {
                format!("FRED: Ocean Cleanup - last run {score:.2} pts, {collected} bottles")
            }
            None => "FRED: Ocean Cleanup - confirm to start".to_string(),
        });
    }
}
