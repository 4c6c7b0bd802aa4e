use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr};

use crate::loader::properties::{Direction, Properties};
use crate::rendering::palette::{
    DEMO_COLORS, SYSTEM_BLUE, SYSTEM_GRAY, SYSTEM_GREEN, SYSTEM_RED, SYSTEM_YELLOW,
};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
            title: "Bouncy Balls Loader".into(),
            auto_close: 0.0,
        }
    }
}

/// Ball color as written in config files: a name (`"blue"`, `"red"`,
/// `"yellow"`, `"green"`, `"gray"`) or a hex string (`"#ff8800"`).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(try_from = "String")]
pub struct LoaderColor(pub Color);

impl LoaderColor {
    #[inline]
    pub fn to_color(self) -> Color {
        self.0
    }
}

impl FromStr for LoaderColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s.trim().to_ascii_lowercase().as_str() {
            "blue" => SYSTEM_BLUE,
            "red" => SYSTEM_RED,
            "yellow" => SYSTEM_YELLOW,
            "green" => SYSTEM_GREEN,
            "gray" | "grey" => SYSTEM_GRAY,
            other if other.starts_with('#') => Srgba::hex(other)
                .map(Color::from)
                .map_err(|e| format!("bad hex color '{other}': {e}"))?,
            other => return Err(format!("unknown color '{other}'")),
        };
        Ok(Self(color))
    }
}

impl TryFrom<String> for LoaderColor {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
    pub number_of_balls: usize,
    pub radius: f32,
    pub colors: Vec<LoaderColor>,
    /// Seconds per bounce leg.
    pub duration: f32,
}
impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            number_of_balls: 4,
            radius: 8.0,
            colors: DEMO_COLORS.iter().copied().map(LoaderColor).collect(),
            duration: 0.5,
        }
    }
}
impl LoaderConfig {
    /// Loader properties for one direction; rejects counts, radii and
    /// durations that cannot build a loader.
    pub fn properties(&self, direction: Direction) -> Result<Properties, String> {
        if self.number_of_balls == 0 {
            return Err("loader.number_of_balls must be > 0".into());
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(format!("loader.radius {} must be > 0", self.radius));
        }
        if !(self.duration >= 0.0 && self.duration.is_finite()) {
            return Err(format!(
                "loader.duration {} must be finite and >= 0",
                self.duration
            ));
        }
        Ok(Properties::new(
            self.number_of_balls,
            self.radius,
            self.colors.iter().map(|c| c.to_color()).collect(),
            direction,
            self.duration,
        ))
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub loader: LoaderConfig,
    /// One loader per entry, top to bottom.
    pub directions: Vec<Direction>,
}
impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            loader: Default::default(),
            directions: Direction::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Reads every path in order and deep-merges later files over earlier ones.
    /// Returns the config, the paths actually used, and per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.into_rust::<DemoConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (DemoConfig::default(), used, errors)
                }
            }
        } else {
            (DemoConfig::default(), used, errors)
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        let l = &self.loader;
        if l.number_of_balls == 0 {
            w.push("loader.number_of_balls is 0; nothing to show".into());
        }
        if l.radius <= 0.0 {
            w.push(format!("loader.radius {} must be > 0", l.radius));
        }
        if !(l.duration > 0.0) {
            w.push(format!(
                "loader.duration {} not positive; balls will not move",
                l.duration
            ));
        }
        if l.colors.len() < l.number_of_balls {
            w.push(format!(
                "loader.colors has {} entries for {} balls; the rest are gray",
                l.colors.len(),
                l.number_of_balls
            ));
        }
        if l.colors.len() > l.number_of_balls {
            w.push(format!(
                "loader.colors has {} entries but only {} balls; extra colors unused",
                l.colors.len(),
                l.number_of_balls
            ));
        }
        if l.colors.iter().any(|c| c.0.alpha() < 0.05) {
            w.push("loader.colors contains a (nearly) transparent color".into());
        }
        if self.directions.is_empty() {
            w.push("directions is empty; no loaders will be shown".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_loaders() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.directions, Direction::ALL.to_vec());
        assert_eq!(cfg.loader.number_of_balls, 4);
        assert_eq!(cfg.loader.radius, 8.0);
        assert_eq!(cfg.loader.duration, 0.5);
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: DemoConfig = ron::from_str(
            r##"(loader: (radius: 6.0, colors: ["red", "#00ff00"]), directions: ["left"])"##,
        )
        .expect("parse");
        assert_eq!(cfg.loader.radius, 6.0);
        assert_eq!(cfg.loader.number_of_balls, 4);
        assert_eq!(cfg.directions, vec![Direction::Left]);
        assert_eq!(cfg.loader.colors[0].to_color(), SYSTEM_RED);
        assert_eq!(cfg.loader.colors[1].to_color(), Color::srgb(0.0, 1.0, 0.0));
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn unknown_color_is_an_error() {
        assert!("mauve".parse::<LoaderColor>().is_err());
        assert!("#zzzzzz".parse::<LoaderColor>().is_err());
        assert_eq!("Grey".parse::<LoaderColor>(), Ok(LoaderColor(SYSTEM_GRAY)));
        let parsed: Result<DemoConfig, _> = ron::from_str(r#"(directions: ["diagonal"])"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn properties_reject_zero_balls() {
        let cfg = LoaderConfig {
            number_of_balls: 0,
            ..Default::default()
        };
        assert!(cfg.properties(Direction::Up).is_err());
        let ok = LoaderConfig::default().properties(Direction::Down).expect("props");
        assert_eq!(ok.duration(), 0.5);
        assert_eq!(ok.colors()[0], SYSTEM_BLUE);
        assert_eq!(ok.direction(), Direction::Down);
    }

    #[test]
    fn properties_reject_unusable_durations() {
        for duration in [f32::NAN, f32::INFINITY, -0.5] {
            let cfg = LoaderConfig {
                duration,
                ..Default::default()
            };
            let err = cfg.properties(Direction::Up).expect_err("bad duration");
            assert!(err.contains("loader.duration"), "{err}");
        }
        let still = LoaderConfig {
            duration: 0.0,
            ..Default::default()
        };
        assert!(still.properties(Direction::Up).is_ok());

        let mut cfg = DemoConfig::default();
        cfg.loader.duration = f32::NAN;
        let warnings = cfg.validate().join("\n");
        assert!(warnings.contains("balls will not move"), "{warnings}");
    }
}
