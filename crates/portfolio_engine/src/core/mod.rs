//! # Core Engine Module
//!
//! Shared abstractions every other subsystem depends on.
//!
//! ## Organization
//!
//! - **Config**: Site-wide configuration (engine, transitions, navigation, scenes)

pub mod config;

// Re-export commonly used config types
pub use config::{
    SiteConfig,
    EngineSettings,
    TransitionSettings,
    NavigationSettings,
    Config,
    ConfigError,
    ConfigFormat,
};
