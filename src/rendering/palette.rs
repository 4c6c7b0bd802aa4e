use bevy::prelude::*;

pub const SYSTEM_BLUE: Color = Color::srgb(0.0, 0.478, 1.0);
pub const SYSTEM_RED: Color = Color::srgb(1.0, 0.231, 0.188);
pub const SYSTEM_YELLOW: Color = Color::srgb(1.0, 0.8, 0.0);
pub const SYSTEM_GREEN: Color = Color::srgb(0.204, 0.78, 0.349);
// Fallback for balls without a configured color.
pub const SYSTEM_GRAY: Color = Color::srgb(0.557, 0.557, 0.576);

/// Colors the demo loaders use, in ball order.
pub const DEMO_COLORS: [Color; 4] = [SYSTEM_BLUE, SYSTEM_RED, SYSTEM_YELLOW, SYSTEM_GREEN];

pub const BACKGROUND: Color = Color::srgb(0.97, 0.97, 0.98);
