//! Transition requests, outcomes and rejection reasons

use super::SceneId;
use thiserror::Error;

/// Per-request overrides
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionOptions {
    /// Camera animation length; falls back to the manager default when unset
    pub duration_ms: Option<f64>,
}

impl TransitionOptions {
    /// Override the animation length
    pub fn with_duration(duration_ms: f64) -> Self {
        Self { duration_ms: Some(duration_ms) }
    }
}

/// Why a request or registration was turned down
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// No scene instance is registered under the id
    #[error("scene \"{0}\" is not registered")]
    UnknownScene(SceneId),

    /// The id is already the current scene
    #[error("already in scene \"{0}\"")]
    AlreadyCurrent(SceneId),

    /// Registration for an id that has no config
    #[error("no config found for scene \"{0}\"")]
    Unconfigured(SceneId),

    /// Navigation needs at least one registered scene
    #[error("no scenes registered")]
    NoScenes,

    /// Operation is only allowed while no transition is running
    #[error("a transition is in progress")]
    Busy,
}

/// What `transition_to` did with a request
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum TransitionOutcome {
    /// Accepted and running now
    Started,
    /// Another transition is running; appended to the queue
    Queued {
        /// Position in the queue, 0 = next to run
        position: usize,
    },
    /// Dropped without touching any state
    Rejected(SceneError),
}

impl TransitionOutcome {
    /// Accepted now or later
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Observable phase of the orchestrator
///
/// Deactivation, activation, UI update and notification run synchronously
/// inside a single call, so only these phases can be seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No transition in flight
    Idle,
    /// Camera is moving towards the new scene
    CameraAnimating,
}

/// Request waiting for the running transition to finish
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QueuedTransition {
    pub target: SceneId,
    pub options: TransitionOptions,
}
