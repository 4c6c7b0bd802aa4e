//! Ball placement inside a loader frame.
//!
//! Coordinates are local to the frame: origin at its top-left corner, x grows
//! to the right and y grows downwards. Balls always sit on one row at
//! mid-height; the bounce direction only picks the animation axis.

use std::fmt;

use bevy::prelude::*;

use super::properties::{Properties, Style};

/// One ball of a loader, derived from the frame and the properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallDescriptor {
    pub index: usize,
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// The frame is too narrow for the configured balls without overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfeasibleLayout {
    pub number_of_balls: usize,
    pub radius: f32,
    pub required_width: f32,
    pub available_width: f32,
}

impl fmt::Display for InfeasibleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Try setting smaller ball radius or a larger bounding width for loader. \
             Current specifications will make the balls overlap \
             ({} balls of radius {} need width {}, got {})",
            self.number_of_balls, self.radius, self.required_width, self.available_width
        )
    }
}

impl std::error::Error for InfeasibleLayout {}

/// `2 * radius * count + spacing * (count - 1)`
pub fn required_width(properties: &Properties, style: &Style) -> f32 {
    let n = properties.number_of_balls() as f32;
    2.0 * properties.radius() * n + (n - 1.0) * style.minimum_inter_balls_spacing
}

#[inline]
pub fn is_feasible(bounds: Rect, properties: &Properties, style: &Style) -> bool {
    bounds.width() >= required_width(properties, style)
}

/// Computes one descriptor per ball, index ordered.
pub fn try_build_balls(
    bounds: Rect,
    properties: &Properties,
    style: &Style,
) -> Result<Vec<BallDescriptor>, InfeasibleLayout> {
    if !is_feasible(bounds, properties, style) {
        return Err(InfeasibleLayout {
            number_of_balls: properties.number_of_balls(),
            radius: properties.radius(),
            required_width: required_width(properties, style),
            available_width: bounds.width(),
        });
    }
    let slot_width = bounds.width() / properties.number_of_balls() as f32;
    let center_y = bounds.height() / 2.0;
    Ok((0..properties.number_of_balls())
        .map(|index| BallDescriptor {
            index,
            center: Vec2::new(center_x(bounds, index, slot_width), center_y),
            radius: properties.radius(),
            color: properties.color_for_index(index),
        })
        .collect())
}

/// Like [`try_build_balls`] but treats an infeasible layout as a programming
/// error and panics.
pub fn build_balls(bounds: Rect, properties: &Properties, style: &Style) -> Vec<BallDescriptor> {
    match try_build_balls(bounds, properties, style) {
        Ok(balls) => balls,
        Err(e) => panic!("{e}"),
    }
}

#[inline]
fn center_x(bounds: Rect, index: usize, slot_width: f32) -> f32 {
    bounds.min.x + (2 * index + 1) as f32 * slot_width / 2.0
}
