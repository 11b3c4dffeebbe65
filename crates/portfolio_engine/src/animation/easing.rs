//! Easing curves applied to normalized animation progress

use serde::{Deserialize, Serialize};

/// Named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Quadratic acceleration then deceleration
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Map progress in `[0, 1]` to eased progress; input is clamped first
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutQuad => ease_in_out_quad(t),
        }
    }
}

/// `2t²` for the first half, `1 - (-2t + 2)² / 2` for the second
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}
