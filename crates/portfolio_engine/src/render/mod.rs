//! Rendering-side state shared across scenes
//!
//! Drawing itself lives in the host; this module only models the camera the
//! orchestrator moves between sections.

pub mod camera;

pub use camera::Camera;
