//! Top-level game state machine
//!
//! Exactly one state is active at a time and owns its session data.
//! Transitions are explicit values returned from `update`: the driver
//! tears the old state down with `cleanup`, carries the handoff payload
//! across, and starts the new state up. A transition target missing from
//! the registered table is fatal, never a silent fallback.

pub mod gameplay;
pub mod menu;

use std::collections::HashMap;

use crate::sim::TickInput;
use crate::view::Frame;

pub use gameplay::GameplayState;
pub use menu::MenuState;

/// Registered top-level states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Menu,
    Gameplay,
}

impl StateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateId::Menu => "MENU",
            StateId::Gameplay => "GAMEPLAY",
        }
    }
}

/// Discrete input tokens from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Menu: enter gameplay
    Confirm,
    /// Gameplay: abandon the round and return to the menu
    Cancel,
    /// Gameplay: leave the start screen
    Begin,
    /// Halt the application from any state
    Quit,
}

/// Result of one state update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    To(StateId),
    Quit,
}

/// Data explicitly handed from an outgoing state to its successor
#[derive(Debug, Clone, Default)]
pub struct Handoff {
    /// Final score of the last completed or abandoned round
    pub last_score: Option<f32>,
    /// Bottles collected in that round
    pub last_collected: Option<usize>,
}

/// A top-level game state
pub trait State {
    /// Called when the state becomes active
    fn startup(&mut self, handoff: Handoff, previous: Option<StateId>);

    /// Called when the state becomes inactive; returns the handoff payload
    fn cleanup(&mut self) -> Handoff;

    /// Feed a discrete input token
    fn handle_event(&mut self, event: InputEvent);

    /// Advance by `dt` seconds; the returned transition is authoritative
    fn update(&mut self, input: &TickInput, dt: f32) -> Transition;

    /// Fill the presentation snapshot for this tick
    fn draw(&self, frame: &mut Frame);
}

/// Unrecoverable state machine fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {
    /// A transition named a state absent from the registered table
    UnknownState(StateId),
}

impl std::fmt::Display for MachineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineError::UnknownState(id) => {
                write!(f, "transition to unregistered state {}", id.as_str())
            }
        }
    }
}

impl std::error::Error for MachineError {}

/// Drives the registered states and owns the current-state pointer
pub struct Machine {
    states: HashMap<StateId, Box<dyn State>>,
    current: StateId,
    quit: bool,
}

impl Machine {
    /// Build the machine and start up the initial state
    pub fn new(
        initial: StateId,
        mut states: HashMap<StateId, Box<dyn State>>,
    ) -> Result<Self, MachineError> {
        let state = states
            .get_mut(&initial)
            .ok_or(MachineError::UnknownState(initial))?;
        state.startup(Handoff::default(), None);
        log::info!("state machine starting in {}", initial.as_str());

        Ok(Self {
            states,
            current: initial,
            quit: false,
        })
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    /// True once a state has requested application shutdown
    pub fn quitting(&self) -> bool {
        self.quit
    }

    /// Forward a discrete input token to the active state
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(state) = self.states.get_mut(&self.current) {
            state.handle_event(event);
        }
    }

    /// Advance the active state, applying any transition it returns.
    ///
    /// An unregistered transition target is fatal and surfaces as an error;
    /// callers are expected to terminate on it.
    pub fn update(&mut self, input: &TickInput, dt: f32) -> Result<(), MachineError> {
        if self.quit {
            return Ok(());
        }

        let state = self
            .states
            .get_mut(&self.current)
            .ok_or(MachineError::UnknownState(self.current))?;

        match state.update(input, dt) {
            Transition::Stay => Ok(()),
            Transition::Quit => {
                log::info!("quit requested from {}", self.current.as_str());
                self.quit = true;
                Ok(())
            }
            Transition::To(next) => self.flip_state(next),
        }
    }

    /// Fill the presentation snapshot from the active state
    pub fn draw(&self, frame: &mut Frame) {
        frame.clear();
        if let Some(state) = self.states.get(&self.current) {
            state.draw(frame);
        }
    }

    fn flip_state(&mut self, next: StateId) -> Result<(), MachineError> {
        if !self.states.contains_key(&next) {
            return Err(MachineError::UnknownState(next));
        }

        let previous = self.current;
        let handoff = self
            .states
            .get_mut(&previous)
            .expect("current state is always registered")
            .cleanup();

        log::info!("{} -> {}", previous.as_str(), next.as_str());
        self.current = next;
        self.states
            .get_mut(&next)
            .expect("checked above")
            .startup(handoff, Some(previous));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SessionConfig;

    fn test_machine() -> Machine {
        let mut states: HashMap<StateId, Box<dyn State>> = HashMap::new();
        states.insert(StateId::Menu, Box::new(MenuState::new()));
        states.insert(
            StateId::Gameplay,
            Box::new(GameplayState::new(SessionConfig::default(), 42).unwrap()),
        );
        Machine::new(StateId::Menu, states).unwrap()
    }

    #[test]
    fn test_confirm_enters_gameplay() {
        let mut m = test_machine();
        assert_eq!(m.current(), StateId::Menu);

        m.handle_event(InputEvent::Confirm);
        m.update(&TickInput::default(), crate::consts::SIM_DT).unwrap();
        assert_eq!(m.current(), StateId::Gameplay);
    }

    #[test]
    fn test_cancel_returns_to_menu() {
        let mut m = test_machine();
        m.handle_event(InputEvent::Confirm);
        m.update(&TickInput::default(), crate::consts::SIM_DT).unwrap();
        assert_eq!(m.current(), StateId::Gameplay);

        m.handle_event(InputEvent::Cancel);
        m.update(&TickInput::default(), crate::consts::SIM_DT).unwrap();
        assert_eq!(m.current(), StateId::Menu);
    }

    #[test]
    fn test_quit_halts_from_any_state() {
        let mut m = test_machine();
        assert!(!m.quitting());

        m.handle_event(InputEvent::Quit);
        m.update(&TickInput::default(), crate::consts::SIM_DT).unwrap();
        assert!(m.quitting());
    }

    #[test]
    fn test_unregistered_transition_is_fatal() {
        // Table without a gameplay state: confirming from the menu must fail
        let mut states: HashMap<StateId, Box<dyn State>> = HashMap::new();
        states.insert(StateId::Menu, Box::new(MenuState::new()));
        let mut m = Machine::new(StateId::Menu, states).unwrap();

        m.handle_event(InputEvent::Confirm);
        assert_eq!(
            m.update(&TickInput::default(), crate::consts::SIM_DT),
            Err(MachineError::UnknownState(StateId::Gameplay))
        );
    }

    #[test]
    fn test_missing_initial_state() {
        let states: HashMap<StateId, Box<dyn State>> = HashMap::new();
        assert!(matches!(
            Machine::new(StateId::Menu, states),
            Err(MachineError::UnknownState(StateId::Menu))
        ));
    }

    #[test]
    fn test_draw_reports_state_name() {
        let m = test_machine();
        let mut frame = Frame::default();
        m.draw(&mut frame);
        assert_eq!(frame.state_name, "MENU");
    }
}
