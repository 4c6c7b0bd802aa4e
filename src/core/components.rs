use bevy::prelude::*;

use crate::loader::animation::BounceAnimation;
use crate::loader::geometry::{required_width, BallDescriptor};
use crate::loader::properties::{Properties, Style};

/// A loader widget: a row of balls bouncing in sequence.
///
/// There is no `Default`; a loader is always built from explicit
/// [`Properties`].
#[derive(Component, Debug, Clone)]
#[require(LoaderFrame, LoaderLayoutState, Transform, Visibility)]
pub struct BouncyBallsLoader {
    properties: Properties,
    style: Style,
}

impl BouncyBallsLoader {
    pub fn new(properties: Properties) -> Self {
        Self {
            properties,
            style: Style::DEFAULT,
        }
    }

    #[inline]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Smallest frame that fits every ball with the minimum spacing and no
    /// slack. The loader does not size itself; hosts use this for the frame.
    pub fn optimal_size(&self) -> Vec2 {
        Vec2::new(
            required_width(&self.properties, &self.style),
            2.0 * self.properties.radius(),
        )
    }
}

/// Bounds assigned to a loader by whoever lays it out. Zero until then.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct LoaderFrame(pub Vec2);

impl LoaderFrame {
    #[inline]
    pub fn is_known(&self) -> bool {
        self.0.x > 0.0 && self.0.y > 0.0
    }
}

/// `NotLaidOut -> LaidOut` happens once; there is no way back.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub enum LoaderLayoutState {
    #[default]
    NotLaidOut,
    LaidOut {
        /// `Time::elapsed_secs_f64` when the balls were attached; shared
        /// start reference for every ball's stagger.
        started_at: f64,
    },
}

impl LoaderLayoutState {
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        matches!(self, Self::LaidOut { .. })
    }
}

/// Ball child entity of a loader.
#[derive(Component, Debug, Clone, Copy)]
pub struct LoaderBall {
    pub descriptor: BallDescriptor,
}

/// Rest position (relative to the loader) and animation of a ball.
#[derive(Component, Debug, Clone, Copy)]
pub struct BallBounce {
    pub rest: Vec2,
    pub animation: BounceAnimation,
}
