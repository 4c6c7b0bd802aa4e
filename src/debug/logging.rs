#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::components::{LoaderBall, LoaderLayoutState};

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct DebugStats {
    pub loader_count: usize,
    pub laid_out_count: usize,
    pub ball_count: usize,
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    q_loaders: Query<&LoaderLayoutState>,
    q_balls: Query<(), With<LoaderBall>>,
) {
    state.frame_counter += 1;
    stats.loader_count = q_loaders.iter().len();
    stats.laid_out_count = q_loaders.iter().filter(|s| s.is_laid_out()).count();
    stats.ball_count = q_balls.iter().len();
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "LOADER frame={} t={:.3}s loaders={} laid_out={} balls={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.loader_count,
            stats.laid_out_count,
            stats.ball_count
        );
    }
}
