//! Scene configuration loaded from TOML.
//!
//! Every field has a default, so a config file only needs to list what it
//! changes. [`AppConfig::default`] is the three-lighter scene.
//!
//! ```
//! use lighter_core::AppConfig;
//!
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     open_angle_deg = 45.0
//!
//!     [window]
//!     width = 800
//!     height = 600
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.window.width, 800);
//! assert_eq!(config.lighters.len(), 3);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Top-level configuration for the application.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub flame: FlameConfig,
    /// Angle the cap swings through when opened, in degrees
    pub open_angle_deg: f64,
    pub lighters: Vec<LighterConfig>,
}

/// Window size and title.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

/// Initial perspective camera.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub target: [f64; 3],
    /// Vertical field of view in degrees
    pub fov_y_deg: f64,
    pub near: f64,
    pub far: f64,
}

/// Flame shader animation.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FlameConfig {
    /// Amount added to the `iTime` uniform every frame
    pub time_step: f32,
}

/// One lighter in the scene.
#[derive(Clone, Debug, Deserialize)]
pub struct LighterConfig {
    pub name: String,
    pub body_color: u32,
    pub head_color: u32,
    pub position: [f64; 3],
    /// Point the cap hinge passes through
    pub hinge_pivot: [f64; 3],
    #[serde(default = "default_hinge_direction")]
    pub hinge_direction: [f64; 3],
    pub sound: PathBuf,
}

fn default_hinge_direction() -> [f64; 3] {
    [0.0, 0.0, 1.0]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            flame: FlameConfig::default(),
            open_angle_deg: 60.0,
            lighters: vec![
                LighterConfig::new("lighter1", 0x391085, 0x9254de, [-70.0, 0.0, 0.0], [-93.0, 53.0, 0.0])
                    .with_sound("assets/music/test1.mp3"),
                LighterConfig::new("lighter2", 0x003eb3, 0x4096ff, [0.0, 0.0, 0.0], [-22.0, 53.0, 0.0])
                    .with_sound("assets/music/test2.mp3"),
                LighterConfig::new("lighter3", 0x141414, 0x1f1f1f, [70.0, 0.0, 0.0], [47.0, 53.0, 0.0])
                    .with_sound("assets/music/test3.mp3"),
            ],
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Dynamic Lighters".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [-10.0, 151.0, 282.0],
            target: [0.0, 0.0, 0.0],
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Default for FlameConfig {
    fn default() -> Self {
        Self { time_step: 0.004 }
    }
}

impl LighterConfig {
    /// Create a lighter entry with the default hinge direction and no sound file.
    pub fn new(
        name: &str,
        body_color: u32,
        head_color: u32,
        position: [f64; 3],
        hinge_pivot: [f64; 3],
    ) -> Self {
        Self {
            name: name.to_string(),
            body_color,
            head_color,
            position,
            hinge_pivot,
            hinge_direction: default_hinge_direction(),
            sound: PathBuf::new(),
        }
    }

    /// Set the audio file played while the lighter is open.
    pub fn with_sound(mut self, sound: impl Into<PathBuf>) -> Self {
        self.sound = sound.into();
        self
    }
}

impl AppConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            "Loaded config from {} ({} lighters)",
            path.display(),
            config.lighters.len()
        );
        Ok(config)
    }

    /// Opening angle in radians.
    pub fn open_angle(&self) -> f64 {
        self.open_angle_deg.to_radians()
    }

    /// Check the values the scene cannot be built without.
    ///
    /// Hinge directions are validated separately when the rotation axes are
    /// constructed.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.lighters.is_empty() {
            return Err(Error::Config("at least one lighter is required".to_string()));
        }
        if !self.open_angle_deg.is_finite() {
            return Err(Error::Config("open_angle_deg must be finite".to_string()));
        }
        for (i, lighter) in self.lighters.iter().enumerate() {
            if lighter.name.is_empty() {
                return Err(Error::Config(format!("lighter {} has an empty name", i)));
            }
            if self.lighters[..i].iter().any(|other| other.name == lighter.name) {
                return Err(Error::Config(format!(
                    "duplicate lighter name '{}'",
                    lighter.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let config = AppConfig::default();
        assert_eq!(config.lighters.len(), 3);
        assert_eq!(config.lighters[0].hinge_pivot, [-93.0, 53.0, 0.0]);
        assert_eq!(config.lighters[1].hinge_pivot, [-22.0, 53.0, 0.0]);
        assert_eq!(config.lighters[2].hinge_pivot, [47.0, 53.0, 0.0]);
        for lighter in &config.lighters {
            assert_eq!(lighter.hinge_direction, [0.0, 0.0, 1.0]);
        }
        assert!((config.open_angle() - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.camera.position, [-10.0, 151.0, 282.0]);
        assert_eq!(config.flame.time_step, 0.004);
    }

    #[test]
    fn test_parse_lighters() {
        let config = AppConfig::from_toml_str(
            r#"
            [[lighters]]
            name = "solo"
            body_color = 0x391085
            head_color = 0x9254de
            position = [0.0, 0.0, 0.0]
            hinge_pivot = [-23.0, 53.0, 0.0]
            sound = "solo.mp3"
            "#,
        )
        .unwrap();

        assert_eq!(config.lighters.len(), 1);
        let solo = &config.lighters[0];
        assert_eq!(solo.name, "solo");
        assert_eq!(solo.body_color, 0x391085);
        assert_eq!(solo.hinge_direction, [0.0, 0.0, 1.0]);
        assert_eq!(solo.sound, PathBuf::from("solo.mp3"));
    }

    #[test]
    fn test_malformed_toml() {
        let result = AppConfig::from_toml_str("window = [");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_rejects_zero_window() {
        let result = AppConfig::from_toml_str("[window]\nwidth = 0");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_empty_lighters() {
        let result = AppConfig::from_toml_str("lighters = []");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut config = AppConfig::default();
        config.lighters[1].name = "lighter1".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/lighters.toml"));
        let shipped = AppConfig::load(path).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(shipped.lighters.len(), defaults.lighters.len());
        for (a, b) in shipped.lighters.iter().zip(&defaults.lighters) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.hinge_pivot, b.hinge_pivot);
            assert_eq!(a.body_color, b.body_color);
            assert_eq!(a.sound, b.sound);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
