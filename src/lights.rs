//! Light indicators - the five-lamp start array
//!
//! Pure presentation: lamp sprites re-render whatever the controller says,
//! and the color mapping is a stateless function of [`LightColor`].

use bevy::prelude::*;

use crate::constants::*;
use crate::game::ReactionGame;

/// On/off status of a single lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightColor {
    #[default]
    Off,
    Red,
}

impl LightColor {
    /// Rendered fill for a lamp in this state
    pub fn color(self) -> Color {
        match self {
            LightColor::Off => LIGHT_OFF_COLOR,
            LightColor::Red => LIGHT_ON_COLOR,
        }
    }
}

/// Marker for a lamp sprite; the index is the display position (0 = leftmost)
#[derive(Component)]
pub struct StartLight(pub usize);

/// Spawn the housing bar and the five lamps (called from setup)
pub fn spawn_light_row(commands: &mut Commands) {
    let row_width = LIGHT_SPACING * (LIGHT_COUNT as f32 - 1.0) + LIGHT_SIZE.x;

    // Housing bar behind the lamps
    commands.spawn((
        Sprite::from_color(
            HOUSING_COLOR,
            Vec2::new(
                row_width + HOUSING_PADDING * 2.0,
                LIGHT_SIZE.y + HOUSING_PADDING * 2.0,
            ),
        ),
        Transform::from_xyz(0.0, LIGHT_ROW_Y, 0.0),
    ));

    let left_x = -(LIGHT_SPACING * (LIGHT_COUNT as f32 - 1.0)) / 2.0;
    for i in 0..LIGHT_COUNT {
        commands.spawn((
            Sprite::from_color(LIGHT_OFF_COLOR, LIGHT_SIZE),
            Transform::from_xyz(left_x + i as f32 * LIGHT_SPACING, LIGHT_ROW_Y, 1.0),
            StartLight(i),
        ));
    }
}

/// Re-render lamp fills whenever the controller state changes
pub fn update_light_sprites(
    game: Res<ReactionGame>,
    mut lamp_query: Query<(&StartLight, &mut Sprite)>,
) {
    if !game.is_changed() {
        return;
    }
    for (lamp, mut sprite) in &mut lamp_query {
        sprite.color = game.lights()[lamp.0].color();
    }
}
