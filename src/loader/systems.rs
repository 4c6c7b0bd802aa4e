use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::animation::{local_point_to_world, local_to_world, BounceAnimation};
use super::geometry::build_balls;
use crate::core::components::{
    BallBounce, BouncyBallsLoader, LoaderBall, LoaderFrame, LoaderLayoutState,
};

/// Balls render just above their loader.
pub const BALL_Z: f32 = 1.0;

/// Request to remove a loader together with its balls.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopLoading(pub Entity);

pub trait LoaderCommandsExt {
    /// Detaches `loader` and every ball animation under it. Repeated calls,
    /// or calls for entities that are not loaders, do nothing.
    fn stop_loading(&mut self, loader: Entity);
}

impl LoaderCommandsExt for Commands<'_, '_> {
    fn stop_loading(&mut self, loader: Entity) {
        self.send_event(StopLoading(loader));
    }
}

/// First layout of every loader whose frame became known.
///
/// Panics when a loader's frame cannot fit its balls; that is a
/// misconfiguration, not a runtime condition.
pub fn layout_loaders(
    mut commands: Commands,
    time: Res<Time>,
    mut q_loaders: Query<(
        Entity,
        &BouncyBallsLoader,
        &LoaderFrame,
        &mut LoaderLayoutState,
    )>,
) {
    for (entity, loader, frame, mut state) in &mut q_loaders {
        if state.is_laid_out() || !frame.is_known() {
            continue;
        }
        let bounds = Rect::from_corners(Vec2::ZERO, frame.0);
        let balls = build_balls(bounds, loader.properties(), loader.style());
        let started_at = time.elapsed_secs_f64();
        let frame_size = frame.0;
        commands.entity(entity).with_children(|parent| {
            for ball in &balls {
                let rest = local_point_to_world(frame_size, ball.center);
                parent.spawn((
                    LoaderBall { descriptor: *ball },
                    BallBounce {
                        rest,
                        animation: BounceAnimation::for_ball(
                            ball.index,
                            loader.properties(),
                            loader.style(),
                        ),
                    },
                    Transform::from_translation(rest.extend(BALL_Z)),
                    Visibility::Inherited,
                ));
            }
        });
        *state = LoaderLayoutState::LaidOut { started_at };
        debug!(
            target: "loader",
            "laid out {entity} with {} balls in {}x{} ({:?})",
            balls.len(),
            frame_size.x,
            frame_size.y,
            loader.properties().direction()
        );
    }
}

/// Writes each ball's current bounce offset into its transform.
pub fn animate_balls(
    time: Res<Time>,
    q_loaders: Query<&LoaderLayoutState>,
    mut q_balls: Query<(&ChildOf, &BallBounce, &mut Transform)>,
) {
    let now = time.elapsed_secs_f64();
    for (child_of, bounce, mut tf) in &mut q_balls {
        let Ok(&LoaderLayoutState::LaidOut { started_at }) = q_loaders.get(child_of.parent())
        else {
            continue;
        };
        let elapsed = elapsed_since(now, started_at);
        let offset = local_to_world(bounce.animation.translation_offset(elapsed));
        let z = tf.translation.z;
        tf.translation = (bounce.rest + offset).extend(z);
    }
}

/// Seconds between two `Time::elapsed_secs_f64` readings, narrowed only after
/// subtracting so long sessions keep sub-millisecond resolution.
pub fn elapsed_since(now: f64, started_at: f64) -> f32 {
    (now - started_at) as f32
}

pub fn handle_stop_loading(
    mut commands: Commands,
    mut events: EventReader<StopLoading>,
    q_loaders: Query<(), With<BouncyBallsLoader>>,
) {
    let mut seen: HashSet<Entity> = HashSet::default();
    for StopLoading(entity) in events.read() {
        if !seen.insert(*entity) || !q_loaders.contains(*entity) {
            continue;
        }
        commands.entity(*entity).despawn();
        info!(target: "loader", "stopped loader {entity}");
    }
}
