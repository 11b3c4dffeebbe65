//! Scene registry and transition orchestration
//!
//! A portfolio is a small fixed set of sections ("scenes"), each with its own
//! camera placement and UI flags. The [`SceneManager`] owns one live instance
//! per section and makes sure exactly one is current, moving the shared
//! camera between them one transition at a time.

pub mod renderable;
pub mod scene_config;
pub mod scene_manager;
pub mod transition;

pub use renderable::RenderableScene;
pub use scene_config::{SceneCatalog, SceneConfig, SceneId};
pub use scene_manager::{SceneManager, SceneSummary};
pub use transition::{SceneError, TransitionOptions, TransitionOutcome, TransitionPhase};

#[cfg(test)]
mod tests;
