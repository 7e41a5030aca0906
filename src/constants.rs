//! Tunable constants for startlights
//!
//! All gameplay and layout values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.07, 0.08, 0.1);

pub const TEXT_PRIMARY: Color = Color::srgb(0.92, 0.92, 0.95);
pub const TEXT_SECONDARY: Color = Color::srgb(0.58, 0.6, 0.66);
pub const TEXT_READY: Color = Color::srgb(0.9, 0.75, 0.4); // Amber, pulsed during Starting
pub const GO_COLOR: Color = Color::srgb(0.3, 0.9, 0.4);
pub const JUMP_START_COLOR: Color = Color::srgb(0.95, 0.25, 0.25);

pub const LIGHT_OFF_COLOR: Color = Color::srgb(0.16, 0.17, 0.19);
pub const LIGHT_ON_COLOR: Color = Color::srgb(0.93, 0.15, 0.15);
pub const HOUSING_COLOR: Color = Color::srgb(0.04, 0.04, 0.05);

// =============================================================================
// LIGHT ROW LAYOUT
// =============================================================================

pub const LIGHT_COUNT: usize = 5;
pub const LIGHT_SIZE: Vec2 = Vec2::new(88.0, 88.0);
pub const LIGHT_SPACING: f32 = 124.0; // Center-to-center distance between lamps
pub const HOUSING_PADDING: f32 = 22.0;
pub const LIGHT_ROW_Y: f32 = -70.0;

// =============================================================================
// ROUND TIMING
// =============================================================================

/// Seconds between consecutive lamps lighting up (lamp i fires at (i+1) * interval)
pub const LIGHT_INTERVAL: f32 = 1.15;

/// Bounds of the uniformly random gap between the last lamp and lights-out.
/// The unpredictability of this gap is the entire gameplay challenge.
pub const START_GAP_MIN: f32 = 1.0;
pub const START_GAP_MAX: f32 = 3.0;

// =============================================================================
// TEXT LAYOUT
// =============================================================================

pub const HEADLINE_Y: f32 = 150.0;
pub const PROMPT_Y: f32 = 95.0;
pub const HEADLINE_FONT_SIZE: f32 = 48.0;
pub const PROMPT_FONT_SIZE: f32 = 22.0;

// =============================================================================
// VIEWPORT
// =============================================================================

/// World-space height shown by the camera regardless of window size
pub const WORLD_HEIGHT: f32 = 540.0;

/// Window size presets: (width, height, label)
pub const VIEWPORT_PRESETS: &[(f32, f32, &str)] = &[
    (960.0, 540.0, "540p"),
    (1280.0, 720.0, "720p"),
    (1600.0, 900.0, "900p"),
    (1920.0, 1080.0, "1080p"),
];
