//! Camera transition animator
//!
//! Moves the shared camera from where it is when the transition starts to a
//! scene's configured endpoint, re-aiming at a fixed look-at point on every
//! step. There is no cancellation: the scene manager never starts a second
//! transition while one is running.

use super::easing::Easing;
use crate::foundation::math::{utils, Vec3};
use crate::render::Camera;

/// Outcome of advancing a transition by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepResult {
    /// Camera moved, endpoint not reached yet
    Running {
        /// Raw progress in `[0, 1)`
        progress: f32,
    },
    /// Endpoint reached on this step; reported exactly once
    Completed,
    /// Already completed earlier; the camera was not touched
    Finished,
}

/// In-flight interpolation between two camera positions
#[derive(Debug, Clone)]
pub struct CameraTransition {
    start: Vec3,
    end: Vec3,
    look_at: Vec3,
    duration_ms: f64,
    started_at_ms: f64,
    easing: Easing,
    completed: bool,
}

impl CameraTransition {
    /// Begin a transition from the camera's current position
    ///
    /// The start point is captured here once; later writes to the camera do
    /// not move it. Zero, negative and non-finite durations complete on the
    /// first step.
    pub fn start(camera: &Camera, to: Vec3, look_at: Vec3, duration_ms: f64, now_ms: f64) -> Self {
        Self {
            start: camera.position,
            end: to,
            look_at,
            duration_ms,
            started_at_ms: now_ms,
            easing: Easing::EaseInOutQuad,
            completed: false,
        }
    }

    /// Use a different easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Raw progress at a point in time, clamped to `[0, 1]`
    pub fn progress_at(&self, now_ms: f64) -> f32 {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return 1.0;
        }
        let elapsed = now_ms - self.started_at_ms;
        utils::clamp((elapsed / self.duration_ms) as f32, 0.0, 1.0)
    }

    /// Camera position for a raw progress value
    pub fn sample(&self, progress: f32) -> Vec3 {
        utils::lerp_vec3(&self.start, &self.end, self.easing.apply(progress))
    }

    /// Advance to `now_ms`, writing the camera
    pub fn step(&mut self, camera: &mut Camera, now_ms: f64) -> StepResult {
        if self.completed {
            return StepResult::Finished;
        }

        let progress = self.progress_at(now_ms);
        camera.set_position(self.sample(progress));
        camera.look_at(self.look_at);

        if progress >= 1.0 {
            self.completed = true;
            StepResult::Completed
        } else {
            StepResult::Running { progress }
        }
    }

    /// Whether the endpoint has been reached
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Destination position
    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Requested duration in milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}
