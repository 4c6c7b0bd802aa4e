//! Demo screen: one loader per configured direction, stacked in equal-height
//! bands, each centered in its band and sized to its optimal size.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::components::{BouncyBallsLoader, LoaderFrame};
use crate::core::config::DemoConfig;
use crate::core::system::system_order::LoaderSet;

/// Band index of a demo loader, counted from the top.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSlot {
    pub index: usize,
    pub count: usize,
}

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_camera, spawn_demo_loaders))
            .add_systems(Update, layout_demo_slots.before(LoaderSet::Layout));
    }
}

/// World-space center of band `index` of `count` in a window of `window_size`,
/// with the camera at the origin.
pub fn slot_center(window_size: Vec2, index: usize, count: usize) -> Vec2 {
    let band = window_size.y / count.max(1) as f32;
    let from_top = index as f32 * band + band / 2.0;
    Vec2::new(0.0, window_size.y / 2.0 - from_top)
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn spawn_demo_loaders(mut commands: Commands, cfg: Res<DemoConfig>) {
    let count = cfg.directions.len();
    for (index, direction) in cfg.directions.iter().enumerate() {
        let properties = match cfg.loader.properties(*direction) {
            Ok(p) => p,
            Err(e) => {
                error!("demo loader {index} ({direction:?}) skipped: {e}");
                continue;
            }
        };
        commands.spawn((
            Name::new(format!("Loader {direction:?}")),
            BouncyBallsLoader::new(properties),
            DemoSlot { index, count },
        ));
    }
    info!("demo: spawned {count} loaders");
}

/// Host-side layout: assigns each loader its frame and position once the
/// window size is known. Later passes only move the frame; balls are laid out
/// once.
pub fn layout_demo_slots(
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_loaders: Query<(&BouncyBallsLoader, &DemoSlot, &mut LoaderFrame, &mut Transform)>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    for (loader, slot, mut frame, mut tf) in &mut q_loaders {
        let optimal = loader.optimal_size();
        if frame.0 != optimal {
            frame.0 = optimal;
        }
        let center = slot_center(size, slot.index, slot.count);
        if tf.translation.truncate() != center {
            tf.translation.x = center.x;
            tf.translation.y = center.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_split_height_evenly() {
        let size = Vec2::new(400.0, 800.0);
        let ys: Vec<f32> = (0..4).map(|i| slot_center(size, i, 4).y).collect();
        assert_eq!(ys, vec![300.0, 100.0, -100.0, -300.0]);
        assert!((0..4).all(|i| slot_center(size, i, 4).x == 0.0));
    }

    #[test]
    fn single_slot_is_centered() {
        assert_eq!(slot_center(Vec2::new(300.0, 600.0), 0, 1), Vec2::ZERO);
    }
}
