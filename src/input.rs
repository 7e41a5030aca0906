//! Primary-action capture and contextual dispatch
//!
//! One input serves as both "start" and "react": Space starts a round from
//! the between-rounds states and reacts mid-round, while a click over the
//! play surface only ever reacts. The interpretation is a pure function of
//! (state, source) so it stays decoupled from timer scheduling.

use bevy::prelude::*;

use crate::game::{GameState, ReactionGame};

/// Where the primary action came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Spacebar press
    Key,
    /// Left mouse click anywhere in the window
    Pointer,
}

/// What the primary action means in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMeaning {
    StartRound,
    React,
    Ignore,
}

/// Contextual meaning of the primary action
pub fn interpret(state: GameState, source: InputSource) -> InputMeaning {
    if state.awaiting_start() {
        match source {
            InputSource::Key => InputMeaning::StartRound,
            // Clicking between rounds does nothing; only Space restarts
            InputSource::Pointer => InputMeaning::Ignore,
        }
    } else {
        InputMeaning::React
    }
}

/// Apply the primary action (Space / left click) to the game
pub fn handle_primary_action(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut game: ResMut<ReactionGame>,
) {
    let sources = [
        (keyboard.just_pressed(KeyCode::Space), InputSource::Key),
        (mouse.just_pressed(MouseButton::Left), InputSource::Pointer),
    ];
    let now_ms = time.elapsed_secs_f64() * 1000.0;

    for (pressed, source) in sources {
        if !pressed {
            continue;
        }
        match interpret(game.state(), source) {
            InputMeaning::StartRound => game.start(),
            InputMeaning::React => game.interact(now_ms),
            InputMeaning::Ignore => {}
        }
    }
}
