//! Radar minimap geometry
//!
//! Scenes sit on a circle, evenly spaced and starting at the top, in the
//! order the manager lists them. Coordinates are canvas pixels with the
//! origin at the top-left and y pointing down.

use crate::foundation::math::{constants, utils, Vec2};
use crate::scene::{SceneId, SceneSummary};

/// Sweep line advance per frame, in radians
pub const SWEEP_SPEED: f32 = 0.02;

/// Gap between the radar ring and the canvas edge
pub const EDGE_MARGIN: f32 = 10.0;

/// Scene markers sit at this fraction of the ring radius
pub const MARKER_RADIUS_RATIO: f32 = 0.7;

/// Labels sit slightly further out than their markers
pub const LABEL_RADIUS_RATIO: f32 = 0.85;

/// One scene as drawn on the radar
#[derive(Debug, Clone, PartialEq)]
pub struct RadarMarker {
    /// Scene id
    pub id: SceneId,
    /// Scene label
    pub label: String,
    /// Marker centre
    pub position: Vec2,
    /// Label anchor
    pub label_position: Vec2,
    /// Marker for the current scene
    pub active: bool,
}

/// Canvas dimensions and the shapes derived from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
}

impl RadarGeometry {
    /// Square canvas
    pub fn square(size: u32) -> Self {
        Self {
            width: size as f32,
            height: size as f32,
        }
    }

    /// Canvas centre
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Outer ring radius
    pub fn radius(&self) -> f32 {
        (self.width.min(self.height) * 0.5 - EDGE_MARGIN).max(0.0)
    }

    /// Angle of scene `index` out of `count`; index 0 points straight up
    pub fn scene_angle(index: usize, count: usize) -> f32 {
        if count == 0 {
            return -constants::HALF_PI;
        }
        index as f32 * constants::TAU / count as f32 - constants::HALF_PI
    }

    fn on_ring(&self, angle: f32, distance: f32) -> Vec2 {
        self.center() + Vec2::new(angle.cos(), angle.sin()) * distance
    }

    /// Marker and label placement for every scene
    pub fn markers(&self, scenes: &[SceneSummary], current: Option<&SceneId>) -> Vec<RadarMarker> {
        let radius = self.radius();
        scenes
            .iter()
            .enumerate()
            .map(|(index, scene)| {
                let angle = Self::scene_angle(index, scenes.len());
                RadarMarker {
                    id: scene.id.clone(),
                    label: scene.display_name.clone(),
                    position: self.on_ring(angle, radius * MARKER_RADIUS_RATIO),
                    label_position: self.on_ring(angle, radius * LABEL_RADIUS_RATIO),
                    active: current == Some(&scene.id),
                }
            })
            .collect()
    }

    /// Scene whose direction is angularly closest to a canvas point
    pub fn scene_at(&self, x: f32, y: f32, scenes: &[SceneSummary]) -> Option<SceneId> {
        let offset = Vec2::new(x, y) - self.center();
        let angle = offset.y.atan2(offset.x);

        scenes
            .iter()
            .enumerate()
            .map(|(index, scene)| {
                let diff = utils::angle_distance(angle, Self::scene_angle(index, scenes.len()));
                (diff, &scene.id)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, id)| id.clone())
    }
}

/// Rotating sweep line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RadarSweep {
    rotation: f32,
}

impl RadarSweep {
    /// Advance by one frame
    pub fn advance(&mut self) {
        self.rotation = utils::wrap_angle(self.rotation + SWEEP_SPEED);
    }

    /// Current angle in `[0, TAU)`
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Tip of the sweep line on the outer ring
    pub fn tip(&self, geometry: &RadarGeometry) -> Vec2 {
        geometry.on_ring(self.rotation, geometry.radius())
    }
}
