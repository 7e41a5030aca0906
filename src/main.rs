//! Startlights - a five-lamp reaction-time game built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::{camera::ScalingMode, prelude::*};
use startlights::{
    CurrentSettings, ReactionGame, ViewportScale, constants::*, game, input, lights,
    save_settings_system, ui,
};

fn main() {
    // Load persistent settings (uses defaults if file doesn't exist)
    let current_settings = CurrentSettings::default();

    // Save settings on first run to ensure file exists
    if let Err(e) = current_settings.settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    // Use loaded viewport preset (clamped to valid range)
    let viewport_index = current_settings
        .settings
        .viewport_index
        .min(VIEWPORT_PRESETS.len() - 1);
    let (viewport_width, viewport_height, _) = VIEWPORT_PRESETS[viewport_index];

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // Set scale_factor_override to 1.0 for consistent behavior on HiDPI displays
                resolution: bevy::window::WindowResolution::new(
                    viewport_width as u32,
                    viewport_height as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Start Lights".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(current_settings)
        .insert_resource(ViewportScale {
            preset_index: viewport_index,
        })
        .init_resource::<ReactionGame>()
        .add_systems(Startup, setup)
        // Input must be interpreted before the round clock ticks
        .add_systems(
            Update,
            (input::handle_primary_action, game::tick_round).chain(),
        )
        .add_systems(
            Update,
            (
                lights::update_light_sprites,
                ui::update_status_text,
                ui::cycle_viewport,
                save_settings_system,
            ),
        )
        .run();
}

/// Setup the scene: camera, lamp row, status text
fn setup(mut commands: Commands) {
    // Orthographic camera - FixedVertical keeps the full scene visible
    // regardless of window size
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: WORLD_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));

    lights::spawn_light_row(&mut commands);
    ui::spawn_status_text(&mut commands);
}
