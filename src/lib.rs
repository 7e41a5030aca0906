//! Startlights - a five-lamp reaction-time game built with Bevy
//!
//! The game controller owns all state and drives the timed light sequence;
//! the other modules are presentation and input leaves around it.

pub mod constants;
pub mod game;
pub mod input;
pub mod lights;
pub mod settings;
pub mod ui;

// Re-export commonly used types for convenience
pub use constants::*;
pub use game::{GameState, ReactionGame, sample_start_gap, tick_round};
pub use input::{InputMeaning, InputSource, handle_primary_action, interpret};
pub use lights::{LightColor, StartLight, spawn_light_row, update_light_sprites};
pub use settings::{CurrentSettings, InitSettings, save_settings_system};
pub use ui::{
    PromptText, StatusText, ViewportScale, cycle_viewport, spawn_status_text, update_status_text,
};
