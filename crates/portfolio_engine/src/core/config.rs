//! # Site Configuration
//!
//! Everything a deployment may tune without recompiling: logging, viewport,
//! transition timing, navigation behaviour and the scene catalog itself.
//!
//! ## Configuration Categories
//!
//! - **Engine Settings**: log level, frame rate, initial viewport
//! - **Transition Settings**: camera animation length, queue drain delay, easing
//! - **Navigation Settings**: keyboard navigation, radar size
//! - **Scenes**: the ordered [`SceneCatalog`]

use serde::{Serialize, Deserialize};

use crate::animation::Easing;
use crate::scene::SceneCatalog;

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Engine Settings
///
/// Host-level behaviour that is not specific to scene orchestration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Frame rate the headless driver simulates
    pub target_fps: u32,
    /// Initial viewport width in pixels
    pub viewport_width: u32,
    /// Initial viewport height in pixels
    pub viewport_height: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            target_fps: 60,
            viewport_width: 1920,
            viewport_height: 1080,
        }
    }
}

/// # Transition Settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Default camera animation length
    pub duration_ms: f64,
    /// Wait between one transition ending and the next queued one starting
    pub queue_drain_delay_ms: f64,
    /// Curve applied to camera progress
    pub easing: Easing,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            queue_drain_delay_ms: 100.0,
            easing: Easing::EaseInOutQuad,
        }
    }
}

/// # Navigation Settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Arrow and digit keys navigate between scenes
    pub keyboard_enabled: bool,
    /// Radar canvas edge length in pixels
    pub radar_size: u32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            keyboard_enabled: true,
            radar_size: 150,
        }
    }
}

/// # Complete Site Configuration
///
/// Top-level configuration loaded by the application.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Engine settings
    pub engine: EngineSettings,
    /// Transition timing
    pub transitions: TransitionSettings,
    /// Navigation behaviour
    pub navigation: NavigationSettings,
    /// Scene catalog in navigation order
    pub scenes: SceneCatalog,
}

impl SiteConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = self.scenes.problems();

        if self.scenes.is_empty() {
            problems.push("at least one scene must be configured".to_string());
        }
        if !(self.transitions.duration_ms.is_finite() && self.transitions.duration_ms > 0.0) {
            problems.push(format!("transition duration must be positive, got {}", self.transitions.duration_ms));
        }
        if !(self.transitions.queue_drain_delay_ms.is_finite() && self.transitions.queue_drain_delay_ms >= 0.0) {
            problems.push(format!(
                "queue drain delay must be zero or positive, got {}",
                self.transitions.queue_drain_delay_ms
            ));
        }
        if self.engine.viewport_width == 0 || self.engine.viewport_height == 0 {
            problems.push("viewport size must be non-zero".to_string());
        }
        if self.engine.target_fps == 0 {
            problems.push("target fps must be non-zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems.join("; ")))
        }
    }
}

impl Config for SiteConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::scene::SceneConfig;

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scenes.len(), 4);
        assert_eq!(config.transitions.duration_ms, 2000.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_src = r#"
            [transitions]
            duration_ms = 1200.0

            [[scenes]]
            id = "hero"
            display_name = "Home"
            camera_position = [0.0, 0.0, 5.0]
            camera_target = [0.0, 0.0, 0.0]
            show_primary_ui = true
            preload_ids = ["about"]

            [[scenes]]
            id = "about"
            display_name = "About Me"
            camera_position = [2.0, 0.0, 8.0]
            camera_target = [0.0, 0.0, 0.0]
            show_nav_ui = true
        "#;

        let config = SiteConfig::from_str_with(toml_src, ConfigFormat::Toml).expect("valid toml");
        assert_eq!(config.transitions.duration_ms, 1200.0);
        assert_eq!(config.transitions.queue_drain_delay_ms, 100.0);
        assert_eq!(config.scenes.len(), 2);

        let about = config.scenes.get(&"about".into()).expect("about present");
        assert_eq!(about.camera_position, Vec3::new(2.0, 0.0, 8.0));
        assert!(about.show_nav_ui);
        assert!(about.preload_ids.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ron_round_trip_preserves_catalog() {
        let config = SiteConfig::default();
        let text = config.to_string_with(ConfigFormat::Ron).expect("serializes");
        let parsed = SiteConfig::from_str_with(&text, ConfigFormat::Ron).expect("parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_collects_problems() {
        let mut config = SiteConfig::default();
        config.transitions.duration_ms = 0.0;
        config.scenes = SceneCatalog::new([
            SceneConfig::new("solo", "Solo", Vec3::zeros()).with_preload(["ghost"]),
        ]);

        let err = config.validate().expect_err("should be invalid");
        let message = err.to_string();
        assert!(message.contains("ghost"));
        assert!(message.contains("duration"));
    }
}
