//! Keyboard bindings for scene navigation

use crate::scene::SceneId;
use std::collections::HashMap;

/// What a bound key asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Scene before the current one
    Previous,
    /// Scene after the current one
    Next,
    /// A specific scene
    GoTo(SceneId),
}

/// Key name to action table
///
/// Key names follow the DOM `KeyboardEvent.key` values ("ArrowUp", "1", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    bindings: HashMap<String, NavAction>,
}

impl KeyMap {
    /// Empty table
    pub fn empty() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Arrows step through scenes, digits jump to the four portfolio sections
    pub fn portfolio() -> Self {
        let mut map = Self::empty();
        map.bind("ArrowUp", NavAction::Previous);
        map.bind("ArrowLeft", NavAction::Previous);
        map.bind("ArrowDown", NavAction::Next);
        map.bind("ArrowRight", NavAction::Next);
        for (digit, id) in [("1", "hero"), ("2", "about"), ("3", "techstack"), ("4", "projects")] {
            map.bind(digit, NavAction::GoTo(id.into()));
        }
        map
    }

    /// Bind a key, replacing any previous binding
    pub fn bind(&mut self, key: impl Into<String>, action: NavAction) {
        self.bindings.insert(key.into(), action);
    }

    /// Remove a binding
    pub fn unbind(&mut self, key: &str) -> Option<NavAction> {
        self.bindings.remove(key)
    }

    /// Action bound to a key
    pub fn action_for(&self, key: &str) -> Option<&NavAction> {
        self.bindings.get(key)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_bindings() {
        let map = KeyMap::portfolio();
        assert_eq!(map.action_for("ArrowUp"), Some(&NavAction::Previous));
        assert_eq!(map.action_for("ArrowLeft"), Some(&NavAction::Previous));
        assert_eq!(map.action_for("ArrowDown"), Some(&NavAction::Next));
        assert_eq!(map.action_for("ArrowRight"), Some(&NavAction::Next));
        assert_eq!(map.action_for("3"), Some(&NavAction::GoTo("techstack".into())));
        assert_eq!(map.action_for("5"), None);
        assert_eq!(map.action_for("Enter"), None);
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut map = KeyMap::portfolio();
        map.bind("ArrowUp", NavAction::Next);
        assert_eq!(map.action_for("ArrowUp"), Some(&NavAction::Next));

        assert_eq!(map.unbind("1"), Some(NavAction::GoTo("hero".into())));
        assert_eq!(map.action_for("1"), None);
    }
}
