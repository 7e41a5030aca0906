//! Status text and viewport cycling

use bevy::prelude::*;

use crate::constants::*;
use crate::game::{GameState, ReactionGame};
use crate::settings::CurrentSettings;

/// Headline text component (state message / reaction time)
#[derive(Component)]
pub struct StatusText;

/// Prompt line component ("Press Space to ...")
#[derive(Component)]
pub struct PromptText;

/// Spawn the headline and prompt text entities (called from setup)
pub fn spawn_status_text(commands: &mut Commands) {
    commands.spawn((
        Text2d::new("START LIGHTS REACTION TEST"),
        TextFont {
            font_size: HEADLINE_FONT_SIZE,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(0.0, HEADLINE_Y, 1.0),
        StatusText,
    ));

    commands.spawn((
        Text2d::new("Press Space to Start"),
        TextFont {
            font_size: PROMPT_FONT_SIZE,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(TEXT_SECONDARY),
        Transform::from_xyz(0.0, PROMPT_Y, 1.0),
        PromptText,
    ));
}

/// Update the headline and prompt from the current game state
pub fn update_status_text(
    game: Res<ReactionGame>,
    time: Res<Time>,
    mut headline_query: Query<
        (&mut Text2d, &mut TextColor),
        (With<StatusText>, Without<PromptText>),
    >,
    mut prompt_query: Query<&mut Text2d, (With<PromptText>, Without<StatusText>)>,
) {
    let Ok((mut headline, mut color)) = headline_query.single_mut() else {
        return;
    };
    let Ok(mut prompt) = prompt_query.single_mut() else {
        return;
    };

    match game.state() {
        GameState::Idle => {
            headline.0 = "START LIGHTS REACTION TEST".to_string();
            *color = TextColor(TEXT_PRIMARY);
            prompt.0 = "Press Space to Start".to_string();
        }
        GameState::Starting => {
            headline.0 = "Get Ready...".to_string();
            // Pulse the amber headline while the lamps come on
            let phase = time.elapsed_secs().fract();
            let intensity = 0.55 + 0.45 * (phase * std::f32::consts::PI).sin();
            let ready = TEXT_READY.to_srgba();
            *color = TextColor(Color::srgb(
                ready.red * intensity,
                ready.green * intensity,
                ready.blue * intensity,
            ));
            prompt.0 = String::new();
        }
        GameState::Running => {
            headline.0 = "GO!".to_string();
            *color = TextColor(GO_COLOR);
            prompt.0 = String::new();
        }
        GameState::JumpStart => {
            headline.0 = "JUMP START".to_string();
            *color = TextColor(JUMP_START_COLOR);
            prompt.0 = "Press Space to Try Again".to_string();
        }
        GameState::Finished => {
            let ms = game.reaction_time_ms().unwrap_or_default();
            headline.0 = format!("{ms:.0} ms");
            *color = TextColor(TEXT_PRIMARY);
            prompt.0 = "Press Space to Try Again".to_string();
        }
    }
}

/// Current viewport preset index
#[derive(Resource, Default)]
pub struct ViewportScale {
    pub preset_index: usize,
}

impl ViewportScale {
    /// Get current preset (width, height, label)
    pub fn current(&self) -> (f32, f32, &'static str) {
        VIEWPORT_PRESETS[self.preset_index]
    }

    /// Cycle to next preset
    pub fn cycle_next(&mut self) {
        self.preset_index = (self.preset_index + 1) % VIEWPORT_PRESETS.len();
    }
}

/// Cycle through viewport presets (V key) and persist the choice
pub fn cycle_viewport(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut viewport_scale: ResMut<ViewportScale>,
    mut settings: ResMut<CurrentSettings>,
    mut window_query: Query<&mut Window>,
) {
    if !keyboard.just_pressed(KeyCode::KeyV) {
        return;
    }

    viewport_scale.cycle_next();
    let (width, height, label) = viewport_scale.current();

    // Change window size - scale_factor_override 1.0 keeps HiDPI consistent;
    // the camera uses FixedVertical so the scene stays fully visible
    if let Ok(mut window) = window_query.single_mut() {
        window.resolution = bevy::window::WindowResolution::new(width as u32, height as u32)
            .with_scale_factor_override(1.0);
    }

    settings.settings.viewport_index = viewport_scale.preset_index;
    settings.mark_dirty();
    info!("Viewport: {}", label);
}
