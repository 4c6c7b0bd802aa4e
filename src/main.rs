use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use bouncy_balls_loader::app::LoaderDemoPlugin;
use bouncy_balls_loader::DemoConfig;

/// Four bouncing-ball loaders, one per direction. Tap or click to dismiss.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config files, later ones override earlier ones.
    #[arg(long = "config", value_name = "PATH", default_values = ["assets/config/loader.ron", "assets/config/loader.local.ron"])]
    configs: Vec<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    let (mut cfg, used, errors) = DemoConfig::load_layered(&cli.configs);
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    // Bail before the window opens if no loader could be built.
    if let Some(direction) = cfg.directions.first() {
        cfg.loader
            .properties(*direction)
            .map_err(|e| anyhow::anyhow!("invalid loader config: {e}"))?;
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));
    // Logging is only installed once DefaultPlugins are in.
    info!("config layers used: {:?}", used);
    for e in errors {
        // Missing local override is normal.
        if e.contains("loader.local.ron") && e.contains("read error") {
            debug!("{e}");
        } else {
            warn!("config: {e}");
        }
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }
    app.insert_resource(cfg).add_plugins(LoaderDemoPlugin).run();
    Ok(())
}
