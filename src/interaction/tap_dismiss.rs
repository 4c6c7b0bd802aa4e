use bevy::prelude::*;

use crate::core::components::BouncyBallsLoader;
use crate::loader::systems::LoaderCommandsExt;

/// A tap anywhere stops every loader.
pub struct TapDismissPlugin;

impl Plugin for TapDismissPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, dismiss_loaders_on_tap);
    }
}

pub fn dismiss_loaders_on_tap(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    q_loaders: Query<Entity, With<BouncyBallsLoader>>,
) {
    let released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();
    if !released {
        return;
    }
    let mut count = 0usize;
    for loader in &q_loaders {
        commands.stop_loading(loader);
        count += 1;
    }
    if count > 0 {
        info!(target: "input", "tap: stopping {count} loaders");
    }
}
