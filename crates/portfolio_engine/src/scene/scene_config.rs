//! Static scene configuration
//!
//! A [`SceneConfig`] describes where the shared camera goes when a section
//! becomes current and which shared UI regions it wants visible. Configs are
//! fixed for the lifetime of a scene manager.

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a navigable scene
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Create an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SceneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SceneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Camera endpoint and UI flags for one scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Unique key
    pub id: SceneId,
    /// Label shown by navigation
    pub display_name: String,
    /// Where the camera ends up
    pub camera_position: Vec3,
    /// Where the camera looks during and after the transition
    pub camera_target: Vec3,
    /// Show the landing overlay
    #[serde(default)]
    pub show_primary_ui: bool,
    /// Show the navigation bar and radar
    #[serde(default)]
    pub show_nav_ui: bool,
    /// Scenes to warm up once this one is reached
    #[serde(default)]
    pub preload_ids: Vec<SceneId>,
}

impl SceneConfig {
    /// Create a config with both UI regions hidden and nothing to preload
    pub fn new(id: impl Into<SceneId>, display_name: impl Into<String>, camera_position: Vec3) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            camera_position,
            camera_target: Vec3::zeros(),
            show_primary_ui: false,
            show_nav_ui: false,
            preload_ids: Vec::new(),
        }
    }

    /// Set the look-at target
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.camera_target = target;
        self
    }

    /// Set UI region visibility
    pub fn with_ui(mut self, show_primary_ui: bool, show_nav_ui: bool) -> Self {
        self.show_primary_ui = show_primary_ui;
        self.show_nav_ui = show_nav_ui;
        self
    }

    /// Set preload hints
    pub fn with_preload<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SceneId>,
    {
        self.preload_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered set of scene configs
///
/// Declaration order is the cyclic order used by next/previous navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneCatalog {
    scenes: Vec<SceneConfig>,
}

impl SceneCatalog {
    /// Build a catalog; later duplicates of an id are dropped with a warning
    pub fn new(configs: impl IntoIterator<Item = SceneConfig>) -> Self {
        let mut scenes: Vec<SceneConfig> = Vec::new();
        for config in configs {
            if scenes.iter().any(|c| c.id == config.id) {
                log::warn!("SceneCatalog: duplicate config for scene \"{}\" ignored", config.id);
                continue;
            }
            scenes.push(config);
        }
        Self { scenes }
    }

    /// The four portfolio sections
    pub fn portfolio() -> Self {
        Self::new([
            SceneConfig::new("hero", "Home", Vec3::new(0.0, 0.0, 5.0))
                .with_ui(true, false)
                .with_preload(["about"]),
            SceneConfig::new("about", "About Me", Vec3::new(2.0, 0.0, 8.0))
                .with_ui(false, true)
                .with_preload(["techstack"]),
            SceneConfig::new("techstack", "Tech Stack", Vec3::new(0.0, 0.0, 15.0))
                .with_ui(false, true)
                .with_preload(["projects"]),
            SceneConfig::new("projects", "Projects", Vec3::new(0.0, 2.0, 12.0))
                .with_ui(false, true)
                .with_preload(["hero"]),
        ])
    }

    /// Look up a config
    pub fn get(&self, id: &SceneId) -> Option<&SceneConfig> {
        self.scenes.iter().find(|c| &c.id == id)
    }

    /// Whether a config exists for the id
    pub fn contains(&self, id: &SceneId) -> bool {
        self.get(id).is_some()
    }

    /// Configs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &SceneConfig> {
        self.scenes.iter()
    }

    /// Number of configs
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Describe every inconsistency: duplicate ids and dangling preload hints
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for (index, config) in self.scenes.iter().enumerate() {
            if self.scenes[..index].iter().any(|c| c.id == config.id) {
                problems.push(format!("duplicate scene id \"{}\"", config.id));
            }
            for preload in &config.preload_ids {
                if !self.contains(preload) {
                    problems.push(format!("scene \"{}\" preloads unknown scene \"{}\"", config.id, preload));
                }
            }
        }
        problems
    }
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_catalog_order_and_flags() {
        let catalog = SceneCatalog::portfolio();
        let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "about", "techstack", "projects"]);

        let hero = catalog.get(&"hero".into()).expect("hero configured");
        assert!(hero.show_primary_ui);
        assert!(!hero.show_nav_ui);
        assert_eq!(hero.preload_ids, vec![SceneId::from("about")]);
        assert!(catalog.problems().is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let catalog = SceneCatalog::new([
            SceneConfig::new("a", "First", Vec3::zeros()),
            SceneConfig::new("a", "Second", Vec3::x()),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&"a".into()).map(|c| c.display_name.as_str()), Some("First"));
    }

    #[test]
    fn test_dangling_preload_is_reported() {
        let catalog = SceneCatalog::new([
            SceneConfig::new("a", "A", Vec3::zeros()).with_preload(["missing"]),
        ]);
        assert_eq!(catalog.problems().len(), 1);
    }
}
