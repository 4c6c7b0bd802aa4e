use std::str::FromStr;

use bevy::prelude::*;
use serde::Deserialize;

use crate::rendering::palette::SYSTEM_GRAY;

/// Axis and sign the balls bounce towards.
///
/// Config files spell it in lowercase: `"up"`, `"down"`, `"left"`, `"right"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!(
                "unknown direction '{other}' (expected up, down, left or right)"
            )),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Loader configuration, fixed for the lifetime of a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    number_of_balls: usize,
    radius: f32,
    colors: Vec<Color>,
    direction: Direction,
    duration: f32,
}

impl Properties {
    /// - `number_of_balls`: count of balls in the loader
    /// - `radius`: size of each ball
    /// - `colors`: color of each ball, in order; balls past the end are gray
    /// - `direction`: bounce direction
    /// - `duration`: seconds for a single bounce leg
    ///
    /// Panics when `number_of_balls` is zero, `radius` is not positive or
    /// `duration` is negative or not finite.
    pub fn new(
        number_of_balls: usize,
        radius: f32,
        colors: Vec<Color>,
        direction: Direction,
        duration: f32,
    ) -> Self {
        assert!(number_of_balls > 0, "loader needs at least one ball");
        assert!(
            radius > 0.0 && radius.is_finite(),
            "ball radius must be positive, got {radius}"
        );
        assert!(
            duration >= 0.0 && duration.is_finite(),
            "bounce duration must be finite and not negative, got {duration}"
        );
        Self {
            number_of_balls,
            radius,
            colors,
            direction,
            duration,
        }
    }

    #[inline]
    pub fn number_of_balls(&self) -> usize {
        self.number_of_balls
    }
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Direct index lookup; no wrapping.
    pub fn color_for_index(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(SYSTEM_GRAY)
    }
}

/// Fixed look of every loader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub minimum_inter_balls_spacing: f32,
    pub jump_distance: f32,
    /// Seconds between the start of neighbouring balls.
    pub animation_delay: f32,
}

impl Style {
    pub const DEFAULT: Style = Style {
        minimum_inter_balls_spacing: 8.0,
        jump_distance: 20.0,
        animation_delay: 0.12,
    };
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}
