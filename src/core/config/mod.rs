pub mod config;

pub use config::{DemoConfig, LoaderColor, LoaderConfig, WindowConfig};
