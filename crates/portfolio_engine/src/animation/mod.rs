//! Time-based animation
//!
//! Animations here never schedule themselves. The host's frame loop drives
//! them with monotonic timestamps, so no particular frame rate is assumed.

pub mod easing;
pub mod camera_transition;

pub use easing::{Easing, ease_in_out_quad};
pub use camera_transition::{CameraTransition, StepResult};
