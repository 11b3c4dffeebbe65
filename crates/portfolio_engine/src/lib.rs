//! # Portfolio Engine
//!
//! Scene lifecycle and camera transition orchestration for an interactive 3D
//! portfolio.
//!
//! ## Features
//!
//! - **Scene Registry**: one live instance per configured section
//! - **Camera Transitions**: eased interpolation of a shared camera
//! - **Transition Queue**: strictly FIFO, never overlapping
//! - **Lifecycle Events**: scene changed / transition started / transition ended
//! - **Navigation Model**: nav bar, keyboard shortcuts and radar minimap
//! - **Configuration**: TOML or RON site files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portfolio_engine::prelude::*;
//!
//! struct Landing;
//!
//! impl RenderableScene for Landing {
//!     fn update(&mut self) {
//!         // Per-frame animation
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SiteConfig::default();
//!     let mut manager = SceneManager::new(
//!         config.scenes.clone(),
//!         Box::new(SystemClock::new()),
//!         Box::new(OverlayUi::new()),
//!     )
//!     .with_settings(&config.transitions);
//!
//!     manager.register_scene("hero", Box::new(Landing))?;
//!     manager.register_scene("about", Box::new(Landing))?;
//!     let _ = manager.transition_to("about");
//!
//!     loop {
//!         manager.tick();
//!         manager.update_current_scene();
//!         if !manager.is_transitioning() {
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod render;
pub mod animation;
pub mod events;
pub mod scene;
pub mod ui;
pub mod navigation;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{CameraTransition, Easing, StepResult},
        core::{Config, ConfigError, ConfigFormat, SiteConfig, TransitionSettings},
        events::{SceneEvent, SceneEventKind, SubscriptionId},
        foundation::{
            math::Vec3,
            time::{Clock, ManualClock, SystemClock},
        },
        navigation::{KeyMap, NavAction, Navigation},
        render::Camera,
        scene::{
            RenderableScene, SceneCatalog, SceneConfig, SceneError, SceneId, SceneManager,
            SceneSummary, TransitionOptions, TransitionOutcome, TransitionPhase,
        },
        ui::{OverlayUi, UiController, UiRegions},
    };
}
