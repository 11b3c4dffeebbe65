//! Capability interface for scenes taking part in orchestration
//!
//! Scene construction (meshes, canvas textures, overlays) belongs to the
//! implementor. The scene manager only drives the lifecycle hooks below; every
//! hook except [`RenderableScene::update`] has a no-op default so scenes only
//! implement the capabilities they actually have.

/// A navigable section with its own 3D content and overlays
pub trait RenderableScene {
    /// Make the scene's content visible; a second call while active is a no-op
    fn activate(&mut self) {}

    /// Hide the scene's content; a second call while inactive is a no-op
    fn deactivate(&mut self) {}

    /// Advance per-frame animation while this scene is current
    fn update(&mut self);

    /// Custom render pass for scenes owning post-processing
    fn render(&mut self) {}

    /// Viewport size changed
    fn on_resize(&mut self, _width: u32, _height: u32) {}

    /// Warm up resources ahead of the scene becoming current
    fn preload(&mut self) {}
}
