//! A row of colored balls that bounce in sequence to show that something is
//! loading, as a Bevy plugin.
//!
//! Spawn a [`BouncyBallsLoader`], give it a [`LoaderFrame`] (usually its
//! [`BouncyBallsLoader::optimal_size`]) and the plugin lays the balls out once
//! and keeps them bouncing until [`LoaderCommandsExt::stop_loading`].

pub mod app;
pub mod core;
pub mod debug;
pub mod demo;
pub mod interaction;
pub mod loader;
pub mod rendering;

// Curated re-exports
pub use crate::core::components::{BouncyBallsLoader, LoaderFrame, LoaderLayoutState};
pub use crate::core::config::DemoConfig;
pub use loader::properties::{Direction, Properties, Style};
pub use loader::systems::{LoaderCommandsExt, StopLoading};
pub use loader::BouncyBallsLoaderPlugin;
