use bevy::prelude::*;

use crate::debug::DebugPlugin;
use crate::demo::DemoPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::tap_dismiss::TapDismissPlugin;
use crate::loader::BouncyBallsLoaderPlugin;
use crate::rendering::palette::BACKGROUND;

/// Everything the demo binary runs on top of `DefaultPlugins`.
/// Expects a [`crate::core::config::DemoConfig`] resource.
pub struct LoaderDemoPlugin;

impl Plugin for LoaderDemoPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND)).add_plugins((
            BouncyBallsLoaderPlugin,
            DemoPlugin,
            TapDismissPlugin,
            DebugPlugin,
            AutoClosePlugin,
        ));
    }
}
