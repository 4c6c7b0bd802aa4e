//! The loader widget: properties, geometry, bounce descriptors and the
//! systems that lay out, animate and stop loaders.

pub mod animation;
pub mod geometry;
pub mod properties;
pub mod systems;

use bevy::prelude::*;

use crate::core::system::system_order::LoaderSet;
use crate::rendering::ball_visuals::BallVisualsPlugin;
use systems::{animate_balls, handle_stop_loading, layout_loaders, StopLoading};

/// Layout, animation, stop handling and ball visuals. Needs `Assets<Mesh>`
/// and `Assets<ColorMaterial>`, which `DefaultPlugins` provides.
pub struct BouncyBallsLoaderPlugin;

impl Plugin for BouncyBallsLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(BallVisualsPlugin)
            .add_event::<StopLoading>()
            .configure_sets(
                Update,
                (LoaderSet::Stop, LoaderSet::Layout, LoaderSet::Animate).chain(),
            )
            .add_systems(Update, handle_stop_loading.in_set(LoaderSet::Stop))
            .add_systems(Update, layout_loaders.in_set(LoaderSet::Layout))
            .add_systems(Update, animate_balls.in_set(LoaderSet::Animate));
    }
}
