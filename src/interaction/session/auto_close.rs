use bevy::prelude::*;

use crate::core::components::BouncyBallsLoader;
use crate::core::config::DemoConfig;

/// Countdown until the demo exits on its own (`window.autoClose` seconds).
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct AutoClose(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close)
            .add_systems(Update, tick_auto_close.run_if(resource_exists::<AutoClose>));
    }
}

fn arm_auto_close(mut commands: Commands, cfg: Res<DemoConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoClose(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick_auto_close(
    time: Res<Time>,
    mut timer: ResMut<AutoClose>,
    q_loaders: Query<(), With<BouncyBallsLoader>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    let running = q_loaders.iter().len();
    info!(running_loaders = running, "AutoClose: timer finished, requesting app exit");
    ev_exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn app_with_auto_close(secs: f32) -> App {
        let mut cfg = DemoConfig::default();
        cfg.window.auto_close = secs;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(cfg)
            .add_plugins(AutoClosePlugin);
        app
    }

    #[test]
    fn exits_after_configured_time() {
        let mut app = app_with_auto_close(0.25);
        app.update();
        assert!(app.world().contains_resource::<AutoClose>());
        // AppExit is only buffered for two frames, so look after every update
        let exited_at = (1..=10).find_map(|frame| {
            app.update();
            app.should_exit().map(|exit| (frame, exit))
        });
        let Some((frame, exit)) = exited_at else {
            panic!("auto close never requested an exit");
        };
        assert_eq!(exit, AppExit::Success);
        assert!(frame >= 2, "exited after only {frame} extra frames");
    }

    #[test]
    fn zero_disables_auto_close() {
        let mut app = app_with_auto_close(0.0);
        for _ in 0..5 {
            app.update();
        }
        assert!(!app.world().contains_resource::<AutoClose>());
        assert_eq!(app.should_exit(), None);
    }
}
