//! Bounce animation descriptors.
//!
//! The loader never steps animations itself; it describes each ball's bounce
//! once and the sampler turns "seconds since layout" into an offset.

use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;

use super::properties::{Direction, Properties, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Translation animation of a single ball, in frame-local (y-down) units.
/// Repeats until the loader is stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceAnimation {
    pub axis: Axis,
    /// Offset reached at the end of the forward leg.
    pub final_value: f32,
    /// Seconds per leg.
    pub duration: f32,
    /// Seconds after the shared start reference before this ball moves.
    pub begin_delay: f32,
    pub autoreverses: bool,
    pub easing: EaseFunction,
}

/// Axis and signed travel for a direction.
pub fn axis_and_travel(direction: Direction, style: &Style) -> (Axis, f32) {
    match direction {
        Direction::Up => (Axis::Y, -style.jump_distance),
        Direction::Down => (Axis::Y, style.jump_distance),
        Direction::Left => (Axis::X, -style.jump_distance),
        Direction::Right => (Axis::X, style.jump_distance),
    }
}

impl BounceAnimation {
    pub fn for_ball(index: usize, properties: &Properties, style: &Style) -> Self {
        let (axis, final_value) = axis_and_travel(properties.direction(), style);
        Self {
            axis,
            final_value,
            duration: properties.duration(),
            begin_delay: index as f32 * style.animation_delay,
            autoreverses: true,
            easing: EaseFunction::QuadraticOut,
        }
    }

    /// Scalar offset along [`Self::axis`] `elapsed` seconds after the shared
    /// start reference.
    pub fn offset_at(&self, elapsed: f32) -> f32 {
        let local = elapsed - self.begin_delay;
        // also catches a NaN duration
        if local < 0.0 || !(self.duration > 0.0) || !local.is_finite() {
            return 0.0;
        }
        let legs = if self.autoreverses { 2.0 } else { 1.0 };
        let cycle = self.duration * legs;
        let t = local.rem_euclid(cycle);
        let progress = if t < self.duration {
            t / self.duration
        } else {
            // reverse leg replays the forward curve backwards
            1.0 - (t - self.duration) / self.duration
        };
        self.final_value * self.easing.sample_clamped(progress)
    }

    /// Offset as a frame-local (y-down) vector.
    pub fn translation_offset(&self, elapsed: f32) -> Vec2 {
        let v = self.offset_at(elapsed);
        match self.axis {
            Axis::X => Vec2::new(v, 0.0),
            Axis::Y => Vec2::new(0.0, v),
        }
    }
}

/// Builds the descriptors for every ball of a loader, index ordered.
pub fn bounce_animations(properties: &Properties, style: &Style) -> Vec<BounceAnimation> {
    (0..properties.number_of_balls())
        .map(|i| BounceAnimation::for_ball(i, properties, style))
        .collect()
}

/// Frame-local vector (y-down) to Bevy world orientation (y-up).
#[inline]
pub fn local_to_world(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Frame-local point to a translation relative to the frame center.
#[inline]
pub fn local_point_to_world(frame_size: Vec2, p: Vec2) -> Vec2 {
    Vec2::new(p.x - frame_size.x * 0.5, frame_size.y * 0.5 - p.y)
}
