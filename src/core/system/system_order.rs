//! Central system ordering labels to make the loader update sequence explicit.
//! Stages (high-level, all in `Update`):
//! 1. Stop (despawn loaders that were asked to stop)
//! 2. Layout (first layout of loaders whose frame is known)
//! 3. Animate (attach visuals to fresh balls, sample bounce offsets)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum LoaderSet {
    Stop,
    Layout,
    Animate,
}
