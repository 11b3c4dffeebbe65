//! Navigation bar and radar minimap model
//!
//! Navigation never changes scenes on its own: every button press, key or
//! radar click becomes a [`SceneManager::transition_to`] (or next/previous)
//! request. It learns about changes through the manager's subscriptions, so
//! the active indicator always follows the manager.

pub mod keymap;
pub mod radar;

pub use keymap::{KeyMap, NavAction};
pub use radar::{RadarGeometry, RadarMarker, RadarSweep};

use crate::core::NavigationSettings;
use crate::events::SubscriptionId;
use crate::scene::{SceneId, SceneManager, TransitionOutcome};
use crate::ui::{UiController, UiRegions};
use std::cell::RefCell;
use std::rc::Rc;

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    /// 1-based position shown on the button
    pub index: usize,
    /// Scene id
    pub id: SceneId,
    /// Scene label
    pub label: String,
    /// Whether this is the current scene
    pub active: bool,
}

/// State written by manager subscriptions
#[derive(Debug, Default)]
struct NavState {
    buttons: Vec<NavButton>,
    transitioning: bool,
}

impl NavState {
    fn set_active(&mut self, id: &SceneId) {
        for button in &mut self.buttons {
            button.active = &button.id == id;
        }
    }
}

/// Navigation bar, keyboard shortcuts and radar minimap
pub struct Navigation {
    state: Rc<RefCell<NavState>>,
    subscriptions: Vec<SubscriptionId>,
    keymap: KeyMap,
    radar: RadarGeometry,
    sweep: RadarSweep,
    enabled: bool,
    keyboard_enabled: bool,
}

impl Navigation {
    /// Hidden navigation with the portfolio key map
    pub fn new(settings: &NavigationSettings) -> Self {
        Self {
            state: Rc::new(RefCell::new(NavState::default())),
            subscriptions: Vec::new(),
            keymap: KeyMap::portfolio(),
            radar: RadarGeometry::square(settings.radar_size),
            sweep: RadarSweep::default(),
            enabled: false,
            keyboard_enabled: settings.keyboard_enabled,
        }
    }

    /// Replace the key map
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Build one button per registered scene and follow the manager's events
    ///
    /// Attaching again rebuilds the buttons and replaces the old subscriptions.
    pub fn attach(&mut self, manager: &mut SceneManager) {
        self.detach(manager);

        {
            let mut state = self.state.borrow_mut();
            state.buttons = manager
                .all_scenes()
                .into_iter()
                .enumerate()
                .map(|(i, scene)| NavButton {
                    index: i + 1,
                    id: scene.id,
                    label: scene.display_name,
                    active: false,
                })
                .collect();
            if let Some(current) = manager.current_scene_id() {
                state.set_active(current);
            }
            state.transitioning = manager.is_transitioning();
        }

        let state = Rc::clone(&self.state);
        self.subscriptions.push(manager.on_scene_change(move |new, _old| {
            state.borrow_mut().set_active(new);
        }));
        let state = Rc::clone(&self.state);
        self.subscriptions.push(manager.on_transition_start(move |_from, _to| {
            state.borrow_mut().transitioning = true;
        }));
        let state = Rc::clone(&self.state);
        self.subscriptions.push(manager.on_transition_end(move |_from, _to| {
            state.borrow_mut().transitioning = false;
        }));

        log::info!("Navigation attached with {} scenes", self.state.borrow().buttons.len());
    }

    /// Drop the manager subscriptions
    pub fn detach(&mut self, manager: &mut SceneManager) {
        for id in self.subscriptions.drain(..) {
            manager.unsubscribe(id);
        }
    }

    /// Navigation bar entries
    pub fn buttons(&self) -> Vec<NavButton> {
        self.state.borrow().buttons.clone()
    }

    /// Scene the active indicator points at
    pub fn active_scene(&self) -> Option<SceneId> {
        self.state
            .borrow()
            .buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.id.clone())
    }

    /// Whether the "transitioning" marker is on
    pub fn is_transitioning(&self) -> bool {
        self.state.borrow().transitioning
    }

    /// Whether navigation is shown and accepts input
    pub fn is_active(&self) -> bool {
        self.enabled
    }

    /// Turn keyboard shortcuts on or off
    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        self.keyboard_enabled = enabled;
    }

    /// Show the bar and the radar and start accepting input
    pub fn show(&mut self, ui: &mut dyn UiController, now_ms: f64) {
        ui.set_region_visible(UiRegions::NAV | UiRegions::RADAR, true, now_ms);
        self.enabled = true;
    }

    /// Hide the bar and the radar and stop accepting input
    pub fn hide(&mut self, ui: &mut dyn UiController, now_ms: f64) {
        ui.set_region_visible(UiRegions::NAV | UiRegions::RADAR, false, now_ms);
        self.enabled = false;
    }

    /// Show or hide according to the current scene's nav flag
    pub fn sync_visibility(&mut self, manager: &SceneManager, ui: &mut dyn UiController, now_ms: f64) {
        let wanted = manager
            .current_scene_id()
            .and_then(|id| manager.scene_config(id))
            .is_some_and(|config| config.show_nav_ui);

        if wanted && !self.enabled {
            self.show(ui, now_ms);
        } else if !wanted && self.enabled {
            self.hide(ui, now_ms);
        }
    }

    /// Handle a key press; `None` when the key is ignored
    pub fn handle_key(&self, key: &str, manager: &mut SceneManager) -> Option<TransitionOutcome> {
        if !self.keyboard_enabled || !self.enabled {
            return None;
        }
        let outcome = match self.keymap.action_for(key)? {
            NavAction::Previous => manager.previous_scene(),
            NavAction::Next => manager.next_scene(),
            NavAction::GoTo(id) => manager.transition_to(id.clone()),
        };
        Some(outcome)
    }

    /// Press the button with the given 1-based index
    pub fn click_button(&self, index: usize, manager: &mut SceneManager) -> Option<TransitionOutcome> {
        let id = self
            .state
            .borrow()
            .buttons
            .iter()
            .find(|b| b.index == index)
            .map(|b| b.id.clone())?;
        Some(manager.transition_to(id))
    }

    /// Click on the radar canvas at pixel `(x, y)`
    pub fn handle_radar_click(&self, x: f32, y: f32, manager: &mut SceneManager) -> Option<TransitionOutcome> {
        let id = self.radar.scene_at(x, y, &manager.all_scenes())?;
        Some(manager.transition_to(id))
    }

    /// Radar markers for the current frame
    pub fn radar_markers(&self, manager: &SceneManager) -> Vec<RadarMarker> {
        self.radar.markers(&manager.all_scenes(), manager.current_scene_id())
    }

    /// Radar canvas geometry
    pub fn radar(&self) -> &RadarGeometry {
        &self.radar
    }

    /// Sweep line state
    pub fn sweep(&self) -> RadarSweep {
        self.sweep
    }

    /// Advance the radar sweep by one frame
    pub fn tick(&mut self) {
        self.sweep.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::time::{Clock, ManualClock};
    use crate::scene::{RenderableScene, SceneCatalog, SceneError};
    use crate::ui::OverlayUi;

    struct Blank;

    impl RenderableScene for Blank {
        fn update(&mut self) {}
    }

    fn setup() -> (SceneManager, Navigation, ManualClock, Rc<RefCell<OverlayUi>>) {
        let clock = ManualClock::new();
        let ui = Rc::new(RefCell::new(OverlayUi::new()));
        let mut manager = SceneManager::new(
            SceneCatalog::portfolio(),
            Box::new(clock.clone()),
            Box::new(Rc::clone(&ui)),
        );
        for id in ["hero", "about", "techstack", "projects"] {
            manager.register_scene(id, Box::new(Blank)).expect("configured");
        }
        let mut nav = Navigation::new(&NavigationSettings::default());
        nav.attach(&mut manager);
        (manager, nav, clock, ui)
    }

    fn finish(manager: &mut SceneManager, clock: &ManualClock) {
        for _ in 0..400 {
            clock.advance(16.0);
            manager.tick();
        }
    }

    #[test]
    fn test_buttons_follow_registered_scenes() {
        let (_manager, nav, _clock, _ui) = setup();
        let buttons = nav.buttons();

        assert_eq!(buttons.len(), 4);
        assert_eq!(buttons[0].index, 1);
        assert_eq!(buttons[2].label, "Tech Stack");
        assert_eq!(nav.active_scene(), Some("hero".into()));
    }

    #[test]
    fn test_indicator_and_transitioning_marker() {
        let (mut manager, nav, clock, _ui) = setup();

        let _ = nav.click_button(2, &mut manager);
        assert!(nav.is_transitioning());
        // Indicator waits for "scene changed"
        assert_eq!(nav.active_scene(), Some("hero".into()));

        finish(&mut manager, &clock);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.active_scene(), Some("about".into()));
    }

    #[test]
    fn test_keys_ignored_while_hidden() {
        let (mut manager, mut nav, _clock, ui) = setup();
        assert_eq!(nav.handle_key("ArrowDown", &mut manager), None);

        nav.show(&mut *ui.borrow_mut(), 0.0);
        assert_eq!(nav.handle_key("ArrowDown", &mut manager), Some(TransitionOutcome::Started));
        assert_eq!(manager.current_scene_id(), Some(&SceneId::from("about")));

        nav.set_keyboard_enabled(false);
        assert_eq!(nav.handle_key("ArrowDown", &mut manager), None);
    }

    #[test]
    fn test_digit_and_unbound_keys() {
        let (mut manager, mut nav, _clock, ui) = setup();
        nav.show(&mut *ui.borrow_mut(), 0.0);

        assert_eq!(nav.handle_key("Escape", &mut manager), None);
        assert_eq!(nav.handle_key("4", &mut manager), Some(TransitionOutcome::Started));
        assert_eq!(
            nav.handle_key("2", &mut manager),
            Some(TransitionOutcome::Queued { position: 0 })
        );
        assert_eq!(
            nav.handle_key("4", &mut manager),
            Some(TransitionOutcome::Rejected(SceneError::AlreadyCurrent("projects".into())))
        );
    }

    #[test]
    fn test_previous_key_wraps() {
        let (mut manager, mut nav, _clock, ui) = setup();
        nav.show(&mut *ui.borrow_mut(), 0.0);
        let _ = nav.handle_key("ArrowLeft", &mut manager);
        assert_eq!(manager.current_scene_id(), Some(&SceneId::from("projects")));
    }

    #[test]
    fn test_radar_click_requests_transition() {
        let (mut manager, nav, _clock, _ui) = setup();
        let outcome = nav.handle_radar_click(145.0, 75.0, &mut manager);
        assert_eq!(outcome, Some(TransitionOutcome::Started));
        assert_eq!(manager.current_scene_id(), Some(&SceneId::from("about")));

        let markers = nav.radar_markers(&manager);
        assert!(markers[1].active);
    }

    #[test]
    fn test_sync_visibility_tracks_nav_flag() {
        let (mut manager, mut nav, clock, ui) = setup();

        nav.sync_visibility(&manager, &mut *ui.borrow_mut(), 0.0);
        assert!(!nav.is_active(), "hero hides navigation");

        let _ = manager.transition_to("techstack");
        finish(&mut manager, &clock);
        nav.sync_visibility(&manager, &mut *ui.borrow_mut(), clock.now_ms());
        assert!(nav.is_active());
        assert!(ui.borrow().is_requested_visible(UiRegions::RADAR));

        let _ = manager.transition_to("hero");
        finish(&mut manager, &clock);
        nav.sync_visibility(&manager, &mut *ui.borrow_mut(), clock.now_ms());
        assert!(!nav.is_active());
        assert!(!ui.borrow().is_requested_visible(UiRegions::RADAR));
    }

    #[test]
    fn test_detach_stops_following() {
        let (mut manager, mut nav, clock, _ui) = setup();
        nav.detach(&mut manager);

        let _ = manager.transition_to("about");
        finish(&mut manager, &clock);
        assert_eq!(nav.active_scene(), Some("hero".into()));
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_tick_advances_sweep() {
        let (_manager, mut nav, _clock, _ui) = setup();
        nav.tick();
        nav.tick();
        assert!((nav.sweep().rotation() - 0.04).abs() < 1e-6);
    }
}
