//! FRED: Ocean Cleanup entry point
//!
//! The core takes explicit per-tick input, so without an input backend the
//! binary runs a scripted demo round at a fixed timestep and logs the HUD
//! once a second.

use std::collections::HashMap;

use anyhow::Result;

use fred_cleanup::consts::SIM_DT;
use fred_cleanup::settings::Settings;
use fred_cleanup::sim::TickInput;
use fred_cleanup::states::{GameplayState, InputEvent, Machine, MenuState, State, StateId};
use fred_cleanup::view::Frame;

/// Demo wall-clock cutoff
const DEMO_DURATION: f32 = 45.0;

/// One-shot demo events, fired when the clock crosses their timestamps
fn demo_events(from: f32, to: f32) -> Vec<InputEvent> {
    const SCRIPT: [(f32, InputEvent); 3] = [
        (0.5, InputEvent::Confirm),
        (1.0, InputEvent::Begin),
        (40.0, InputEvent::Quit),
    ];

    SCRIPT
        .iter()
        .filter(|(t, _)| *t > from && *t <= to)
        .map(|(_, event)| *event)
        .collect()
}

/// Scripted thrust pattern: cruise, turn right, cruise, turn left, cruise
fn demo_input(t: f32) -> TickInput {
    let (left, right) = match t {
        t if t < 1.0 => (false, false),
        t if t < 6.0 => (true, true),
        t if t < 8.0 => (true, false),
        t if t < 12.0 => (true, true),
        t if t < 14.0 => (false, true),
        t if t < 30.0 => (true, true),
        _ => (false, false),
    };
    TickInput {
        left_thrust: left,
        right_thrust: right,
        begin: false,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let config = settings.session_config();

    let mut states: HashMap<StateId, Box<dyn State>> = HashMap::new();
    states.insert(StateId::Menu, Box::new(MenuState::new()));
    states.insert(
        StateId::Gameplay,
        Box::new(GameplayState::new(config, settings.demo_seed)?),
    );
    let mut machine = Machine::new(StateId::Menu, states)?;

    let mut frame = Frame::default();
    let mut elapsed = 0.0f32;
    let mut next_hud = 0.0f32;

    while !machine.quitting() && elapsed < DEMO_DURATION {
        for event in demo_events(elapsed, elapsed + SIM_DT) {
            machine.handle_event(event);
        }
        machine.update(&demo_input(elapsed), SIM_DT)?;
        elapsed += SIM_DT;

        if elapsed >= next_hud {
            machine.draw(&mut frame);
            log::info!(
                "[{:5.1}s] {} {} score {:.2}, {} bottles remaining",
                elapsed,
                frame.state_name,
                frame.phase_name.unwrap_or("-"),
                frame.score,
                frame.remaining
            );
            next_hud += 1.0;
        }
    }

    machine.draw(&mut frame);
    log::info!(
        "demo finished: score {:.2}, {} bottles remaining",
        frame.score,
        frame.remaining
    );
    Ok(())
}
