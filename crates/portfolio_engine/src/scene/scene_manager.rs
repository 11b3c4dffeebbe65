//! Scene Manager - single authority over which section is visible
//!
//! The Scene Manager:
//! 1. Holds the scene catalog and one live [`RenderableScene`] per id
//! 2. Tracks current / previous scene identity
//! 3. Serializes transition requests through a FIFO queue
//! 4. Drives deactivate / activate hooks and the shared camera animation
//! 5. Applies shared UI visibility and preload hints
//! 6. Notifies lifecycle subscribers
//!
//! Time only moves forward through [`SceneManager::tick`], called once per
//! frame by the host. A transition accepted in one call finishes in a later
//! tick once the camera arrives, and queued requests always start on a tick
//! after the previous transition ended.

use super::renderable::RenderableScene;
use super::scene_config::{SceneCatalog, SceneConfig, SceneId};
use super::transition::{
    QueuedTransition, SceneError, TransitionOptions, TransitionOutcome, TransitionPhase,
};
use crate::animation::{CameraTransition, Easing, StepResult};
use crate::core::TransitionSettings;
use crate::events::{Delivery, SceneEvent, SceneEventBus, SceneEventKind, SubscriptionId};
use crate::foundation::time::Clock;
use crate::render::Camera;
use crate::ui::{UiController, UiRegions};
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};

/// Id and label of a registered scene, as navigation shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSummary {
    /// Scene id
    pub id: SceneId,
    /// Label from the scene's config
    pub display_name: String,
}

struct RegisteredScene {
    id: SceneId,
    scene: Box<dyn RenderableScene>,
}

struct ActiveTransition {
    from: SceneId,
    to: SceneId,
    camera: Option<CameraTransition>,
}

#[derive(Debug, Clone, Copy)]
enum SceneHook {
    Activate,
    Deactivate,
    Update,
    Render,
    Preload,
    Resize(u32, u32),
}

/// Scene registry and transition orchestrator
pub struct SceneManager {
    catalog: SceneCatalog,

    /// Registration order
    scenes: Vec<RegisteredScene>,

    camera: Camera,
    clock: Box<dyn Clock>,
    ui: Box<dyn UiController>,
    events: SceneEventBus,

    current_scene_id: Option<SceneId>,
    previous_scene_id: Option<SceneId>,
    active: Option<ActiveTransition>,
    transition_queue: VecDeque<QueuedTransition>,

    /// Earliest time the queue head may start
    drain_at_ms: Option<f64>,

    transition_duration_ms: f64,
    queue_drain_delay_ms: f64,
    easing: Easing,
}

impl SceneManager {
    /// Create a scene manager with default transition settings and camera
    pub fn new(catalog: SceneCatalog, clock: Box<dyn Clock>, ui: Box<dyn UiController>) -> Self {
        let defaults = TransitionSettings::default();
        Self {
            catalog,
            scenes: Vec::new(),
            camera: Camera::default(),
            clock,
            ui,
            events: SceneEventBus::new(),
            current_scene_id: None,
            previous_scene_id: None,
            active: None,
            transition_queue: VecDeque::new(),
            drain_at_ms: None,
            transition_duration_ms: defaults.duration_ms,
            queue_drain_delay_ms: defaults.queue_drain_delay_ms,
            easing: defaults.easing,
        }
    }

    /// Apply transition settings
    pub fn with_settings(mut self, settings: &TransitionSettings) -> Self {
        self.transition_duration_ms = settings.duration_ms;
        self.queue_drain_delay_ms = settings.queue_drain_delay_ms.max(0.0);
        self.easing = settings.easing;
        self
    }

    /// Replace the shared camera
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Register the live instance for a configured scene
    ///
    /// The first scene registered becomes current without being activated;
    /// it is assumed to be visible already. Registering an id again replaces
    /// its instance.
    pub fn register_scene(
        &mut self,
        id: impl Into<SceneId>,
        scene: Box<dyn RenderableScene>,
    ) -> Result<(), SceneError> {
        let id = id.into();
        if !self.catalog.contains(&id) {
            log::warn!("SceneManager: No config found for scene \"{}\"", id);
            return Err(SceneError::Unconfigured(id));
        }

        if let Some(existing) = self.scenes.iter_mut().find(|r| r.id == id) {
            log::debug!("SceneManager: replacing instance for scene \"{}\"", id);
            existing.scene = scene;
            return Ok(());
        }

        let first = self.scenes.is_empty();
        self.scenes.push(RegisteredScene { id: id.clone(), scene });
        log::info!("Scene registered: {}", id);

        if first {
            self.current_scene_id = Some(id);
        }
        Ok(())
    }

    /// Make a registered scene current without any lifecycle calls
    ///
    /// Explicit alternative to relying on registration order. Only allowed
    /// while idle.
    pub fn set_initial_scene(&mut self, id: impl Into<SceneId>) -> Result<(), SceneError> {
        let id = id.into();
        if self.is_transitioning() || !self.transition_queue.is_empty() {
            return Err(SceneError::Busy);
        }
        if !self.is_registered(&id) {
            log::warn!("SceneManager: cannot start in unregistered scene \"{}\"", id);
            return Err(SceneError::UnknownScene(id));
        }
        self.current_scene_id = Some(id);
        Ok(())
    }

    /// Whether an instance is registered for the id
    pub fn is_registered(&self, id: &SceneId) -> bool {
        self.scenes.iter().any(|r| &r.id == id)
    }

    /// Config for a scene id
    pub fn scene_config(&self, id: &SceneId) -> Option<&SceneConfig> {
        self.catalog.get(id)
    }

    /// The full catalog
    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    /// Registered scenes in registration order
    pub fn all_scenes(&self) -> Vec<SceneSummary> {
        self.scenes
            .iter()
            .map(|r| SceneSummary {
                id: r.id.clone(),
                display_name: self
                    .catalog
                    .get(&r.id)
                    .map_or_else(|| r.id.to_string(), |c| c.display_name.clone()),
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // State queries
    // ------------------------------------------------------------------

    /// Id of the current scene
    pub fn current_scene_id(&self) -> Option<&SceneId> {
        self.current_scene_id.as_ref()
    }

    /// Id that was current before the latest transition
    pub fn previous_scene_id(&self) -> Option<&SceneId> {
        self.previous_scene_id.as_ref()
    }

    /// Instance of the current scene
    pub fn current_scene(&self) -> Option<&dyn RenderableScene> {
        let id = self.current_scene_id.as_ref()?;
        self.scenes.iter().find(|r| &r.id == id).map(|r| r.scene.as_ref())
    }

    /// True from acceptance until the "scene changed" subscribers have run
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Observable orchestrator phase
    pub fn phase(&self) -> TransitionPhase {
        if self.is_transitioning() {
            TransitionPhase::CameraAnimating
        } else {
            TransitionPhase::Idle
        }
    }

    /// Targets waiting in the queue, head first
    pub fn pending_transitions(&self) -> Vec<SceneId> {
        self.transition_queue.iter().map(|q| q.target.clone()).collect()
    }

    /// Shared camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Default camera animation length for new transitions
    pub fn transition_duration_ms(&self) -> f64 {
        self.transition_duration_ms
    }

    /// Change the default animation length; running transitions keep theirs
    pub fn set_transition_duration(&mut self, duration_ms: f64) {
        self.transition_duration_ms = duration_ms;
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Request a transition to `id`
    ///
    /// Rejected without any state change when `id` is unregistered or already
    /// current. While another transition runs (or earlier requests are still
    /// waiting), the request joins the tail of the queue.
    pub fn transition_to(&mut self, id: impl Into<SceneId>) -> TransitionOutcome {
        self.transition_to_with(id, TransitionOptions::default())
    }

    /// [`SceneManager::transition_to`] with per-request options
    pub fn transition_to_with(
        &mut self,
        id: impl Into<SceneId>,
        options: TransitionOptions,
    ) -> TransitionOutcome {
        let target = id.into();

        if let Err(err) = self.validate_target(&target) {
            match &err {
                SceneError::AlreadyCurrent(_) => log::info!("SceneManager: {}", err),
                _ => log::warn!("SceneManager: {}", err),
            }
            return TransitionOutcome::Rejected(err);
        }

        if self.is_transitioning() || !self.transition_queue.is_empty() {
            log::debug!("SceneManager: Adding \"{}\" to transition queue", target);
            self.transition_queue.push_back(QueuedTransition { target, options });
            return TransitionOutcome::Queued {
                position: self.transition_queue.len() - 1,
            };
        }

        match self.begin_transition(target, options) {
            Ok(()) => TransitionOutcome::Started,
            Err(err) => {
                log::error!("SceneManager: transition not started: {}", err);
                TransitionOutcome::Rejected(err)
            }
        }
    }

    /// Go to the scene after the current one, wrapping around
    pub fn next_scene(&mut self) -> TransitionOutcome {
        self.step_scene(1)
    }

    /// Go to the scene before the current one, wrapping around
    pub fn previous_scene(&mut self) -> TransitionOutcome {
        self.step_scene(-1)
    }

    /// Advance camera animation, UI fades and the queue to the clock's now
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        self.ui_call(|ui| ui.tick(now));

        let arrived = match self.active.as_mut().and_then(|a| a.camera.as_mut()) {
            Some(camera) => camera.step(&mut self.camera, now) == StepResult::Completed,
            None => false,
        };
        if arrived {
            self.finish_transition(now);
            return;
        }

        if self.is_transitioning() {
            return;
        }
        if let Some(at) = self.drain_at_ms {
            if now >= at {
                self.drain_at_ms = None;
                self.drain_queue();
            }
        }
    }

    // ------------------------------------------------------------------
    // Per-frame hooks for the host render loop
    // ------------------------------------------------------------------

    /// Call `update()` on the current scene
    pub fn update_current_scene(&mut self) {
        if let Some(id) = self.current_scene_id.clone() {
            self.call_scene(&id, SceneHook::Update);
        }
    }

    /// Call `render()` on the current scene
    pub fn render_current_scene(&mut self) {
        if let Some(id) = self.current_scene_id.clone() {
            self.call_scene(&id, SceneHook::Render);
        }
    }

    /// Viewport resized: update the camera aspect and tell every scene
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        let ids: Vec<SceneId> = self.scenes.iter().map(|r| r.id.clone()).collect();
        for id in &ids {
            self.call_scene(id, SceneHook::Resize(width, height));
        }
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Subscribe to "scene changed", called with `(new, old)`
    pub fn on_scene_change<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SceneId, &SceneId) + 'static,
    {
        self.events.subscribe(SceneEventKind::SceneChanged, Box::new(callback))
    }

    /// Subscribe to "transition started", called with `(from, to)`
    pub fn on_transition_start<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SceneId, &SceneId) + 'static,
    {
        self.events.subscribe(SceneEventKind::TransitionStarted, Box::new(callback))
    }

    /// Subscribe to "transition ended", called with `(from, to)`
    pub fn on_transition_end<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SceneId, &SceneId) + 'static,
    {
        self.events.subscribe(SceneEventKind::TransitionEnded, Box::new(callback))
    }

    /// Drop one subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Clear the registry, every subscription, the pending queue and any
    /// transition in flight
    ///
    /// Scenes are dropped without `deactivate()`; tearing them down is the
    /// owner's job. The camera stays wherever the cancelled animation left it.
    pub fn dispose(&mut self) {
        self.scenes.clear();
        self.events.clear();
        self.transition_queue.clear();
        self.drain_at_ms = None;
        self.active = None;
        self.current_scene_id = None;
        self.previous_scene_id = None;
        log::info!("SceneManager disposed");
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn validate_target(&self, target: &SceneId) -> Result<(), SceneError> {
        if !self.is_registered(target) {
            return Err(SceneError::UnknownScene(target.clone()));
        }
        if !self.catalog.contains(target) {
            return Err(SceneError::Unconfigured(target.clone()));
        }
        match &self.current_scene_id {
            Some(current) if current == target => Err(SceneError::AlreadyCurrent(target.clone())),
            Some(_) => Ok(()),
            None => Err(SceneError::NoScenes),
        }
    }

    /// Registered ids in catalog order
    fn navigation_order(&self) -> Vec<SceneId> {
        self.catalog
            .iter()
            .map(|c| &c.id)
            .filter(|id| self.is_registered(id))
            .cloned()
            .collect()
    }

    fn step_scene(&mut self, offset: isize) -> TransitionOutcome {
        let order = self.navigation_order();
        let Some(current) = self.current_scene_id.as_ref() else {
            log::warn!("SceneManager: {}", SceneError::NoScenes);
            return TransitionOutcome::Rejected(SceneError::NoScenes);
        };

        if order.is_empty() {
            log::warn!("SceneManager: {}", SceneError::NoScenes);
            return TransitionOutcome::Rejected(SceneError::NoScenes);
        }

        let len = order.len() as isize;
        let index = order.iter().position(|id| id == current).unwrap_or(0) as isize;
        let target = order[(index + offset).rem_euclid(len) as usize].clone();
        self.transition_to(target)
    }

    fn begin_transition(&mut self, target: SceneId, options: TransitionOptions) -> Result<(), SceneError> {
        let from = self.current_scene_id.clone().ok_or(SceneError::NoScenes)?;
        let config = self
            .catalog
            .get(&target)
            .ok_or_else(|| SceneError::Unconfigured(target.clone()))?;
        let (destination, look_at) = (config.camera_position, config.camera_target);

        // Accepted
        self.active = Some(ActiveTransition {
            from: from.clone(),
            to: target.clone(),
            camera: None,
        });
        self.previous_scene_id = Some(from.clone());
        log::info!("Scene transition: {} -> {}", from, target);
        self.emit(SceneEvent::TransitionStarted { from: from.clone(), to: target.clone() });

        // Deactivating, then activating; current flips before the camera moves
        self.call_scene(&from, SceneHook::Deactivate);
        self.current_scene_id = Some(target.clone());
        self.call_scene(&target, SceneHook::Activate);

        // Camera animating
        let now = self.clock.now_ms();
        let duration = options.duration_ms.unwrap_or(self.transition_duration_ms);
        let mut camera = CameraTransition::start(&self.camera, destination, look_at, duration, now)
            .with_easing(self.easing);
        let first_step = camera.step(&mut self.camera, now);
        if let Some(active) = self.active.as_mut() {
            active.camera = Some(camera);
        }

        if first_step == StepResult::Completed {
            self.finish_transition(now);
        }
        Ok(())
    }

    fn finish_transition(&mut self, now: f64) {
        let Some((from, to)) = self.active.as_ref().map(|a| (a.from.clone(), a.to.clone())) else {
            return;
        };

        // Updating UI and issuing preload hints
        if let Some(config) = self.catalog.get(&to) {
            let show_primary = config.show_primary_ui;
            let show_nav = config.show_nav_ui;
            let preload_ids = config.preload_ids.clone();

            self.ui_call(|ui| {
                ui.set_region_visible(UiRegions::PRIMARY, show_primary, now);
                ui.set_region_visible(UiRegions::NAV, show_nav, now);
            });
            for id in &preload_ids {
                if self.is_registered(id) {
                    log::debug!("Preloading scene: {}", id);
                    self.call_scene(id, SceneHook::Preload);
                }
            }
        }

        // Notifying
        self.emit(SceneEvent::SceneChanged { new: to.clone(), old: from.clone() });
        self.active = None;
        self.emit(SceneEvent::TransitionEnded { from, to });

        if !self.transition_queue.is_empty() {
            self.drain_at_ms = Some(now + self.queue_drain_delay_ms);
        }
    }

    /// Start the first queued request that is still valid
    fn drain_queue(&mut self) {
        while let Some(next) = self.transition_queue.pop_front() {
            let started = self
                .validate_target(&next.target)
                .and_then(|()| self.begin_transition(next.target, next.options));
            match started {
                Ok(()) => return,
                Err(err) => log::warn!("SceneManager: dropping queued transition: {}", err),
            }
        }
    }

    fn emit(&mut self, event: SceneEvent) -> Delivery {
        let delivery = self.events.emit(&event);
        if delivery.failed > 0 {
            log::warn!("{} subscriber(s) failed during {:?}", delivery.failed, event.kind());
        }
        delivery
    }

    /// Run a lifecycle hook, containing any panic it raises
    fn call_scene(&mut self, id: &SceneId, hook: SceneHook) {
        let Some(entry) = self.scenes.iter_mut().find(|r| &r.id == id) else {
            return;
        };
        let scene = &mut entry.scene;
        let result = panic::catch_unwind(AssertUnwindSafe(|| match hook {
            SceneHook::Activate => scene.activate(),
            SceneHook::Deactivate => scene.deactivate(),
            SceneHook::Update => scene.update(),
            SceneHook::Render => scene.render(),
            SceneHook::Preload => scene.preload(),
            SceneHook::Resize(width, height) => scene.on_resize(width, height),
        }));
        if result.is_err() {
            log::error!("Scene \"{}\" panicked during {:?}", id, hook);
        }
    }

    fn ui_call(&mut self, f: impl FnOnce(&mut dyn UiController)) {
        let ui = &mut self.ui;
        if panic::catch_unwind(AssertUnwindSafe(|| f(&mut **ui))).is_err() {
            log::error!("UI controller panicked; continuing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::foundation::time::ManualClock;
    use crate::ui::OverlayUi;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    type CallLog = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        log: CallLog,
    }

    impl RenderableScene for Probe {
        fn activate(&mut self) {
            self.log.borrow_mut().push(format!("{}.activate", self.name));
        }

        fn deactivate(&mut self) {
            self.log.borrow_mut().push(format!("{}.deactivate", self.name));
        }

        fn update(&mut self) {
            self.log.borrow_mut().push(format!("{}.update", self.name));
        }

        fn render(&mut self) {
            self.log.borrow_mut().push(format!("{}.render", self.name));
        }

        fn on_resize(&mut self, width: u32, height: u32) {
            self.log.borrow_mut().push(format!("{}.resize({}x{})", self.name, width, height));
        }

        fn preload(&mut self) {
            self.log.borrow_mut().push(format!("{}.preload", self.name));
        }
    }

    fn manager_with(ids: &[&'static str]) -> (SceneManager, ManualClock, CallLog) {
        let clock = ManualClock::new();
        let mut manager = SceneManager::new(
            SceneCatalog::portfolio(),
            Box::new(clock.clone()),
            Box::new(OverlayUi::new()),
        );
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        for id in ids {
            let probe = Probe { name: *id, log: Rc::clone(&log) };
            manager.register_scene(*id, Box::new(probe)).expect("configured id");
        }
        (manager, clock, log)
    }

    #[test]
    fn test_first_registration_becomes_current_without_activation() {
        let (manager, _clock, log) = manager_with(&["hero", "about"]);
        assert_eq!(manager.current_scene_id(), Some(&SceneId::from("hero")));
        assert!(log.borrow().is_empty());
        assert!(manager.current_scene().is_some());
    }

    #[test]
    fn test_register_unconfigured_scene_is_rejected() {
        let (mut manager, _clock, log) = manager_with(&[]);
        let result = manager.register_scene("blog", Box::new(Probe { name: "blog", log }));

        assert_eq!(result, Err(SceneError::Unconfigured("blog".into())));
        assert_eq!(manager.current_scene_id(), None);
        assert!(manager.all_scenes().is_empty());
    }

    #[test]
    fn test_reregistering_replaces_instance_in_place() {
        let (mut manager, _clock, log) = manager_with(&["hero", "about"]);
        let replacement = Probe { name: "about2", log: Rc::clone(&log) };
        manager.register_scene("about", Box::new(replacement)).expect("configured");

        assert_eq!(manager.all_scenes().len(), 2);
        let _ = manager.transition_to("about");
        assert!(log.borrow().contains(&"about2.activate".to_string()));
    }

    #[test]
    fn test_current_changes_before_camera_arrives() {
        let (mut manager, clock, _log) = manager_with(&["hero", "about"]);

        assert_eq!(manager.transition_to("about"), TransitionOutcome::Started);
        assert_eq!(manager.current_scene_id(), Some(&SceneId::from("about")));
        assert_eq!(manager.previous_scene_id(), Some(&SceneId::from("hero")));
        assert_eq!(manager.phase(), TransitionPhase::CameraAnimating);

        clock.advance(1000.0);
        manager.tick();
        assert!(manager.is_transitioning());

        clock.advance(1000.0);
        manager.tick();
        assert!(!manager.is_transitioning());
        assert_relative_eq!(manager.camera().position, Vec3::new(2.0, 0.0, 8.0));
    }

    #[test]
    fn test_duration_override_and_zero_duration() {
        let (mut manager, clock, _log) = manager_with(&["hero", "about", "techstack"]);

        let _ = manager.transition_to_with("about", TransitionOptions::with_duration(0.0));
        assert!(!manager.is_transitioning(), "zero duration finishes on the first step");

        let _ = manager.transition_to_with("techstack", TransitionOptions::with_duration(500.0));
        clock.advance(500.0);
        manager.tick();
        assert!(!manager.is_transitioning());
        assert_relative_eq!(manager.camera().position, Vec3::new(0.0, 0.0, 15.0));
    }

    #[test]
    fn test_ui_flags_and_preload_applied_on_arrival() {
        let clock = ManualClock::new();
        let ui = Rc::new(RefCell::new(OverlayUi::new()));
        let mut manager = SceneManager::new(
            SceneCatalog::portfolio(),
            Box::new(clock.clone()),
            Box::new(Rc::clone(&ui)),
        );
        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        for id in ["hero", "about", "techstack"] {
            manager
                .register_scene(id, Box::new(Probe { name: id, log: Rc::clone(&log) }))
                .expect("configured");
        }

        let _ = manager.transition_to_with("about", TransitionOptions::with_duration(100.0));
        assert!(!ui.borrow().is_requested_visible(UiRegions::NAV));

        clock.advance(100.0);
        manager.tick();
        assert!(ui.borrow().is_requested_visible(UiRegions::NAV));
        assert!(!ui.borrow().is_requested_visible(UiRegions::PRIMARY));
        assert_eq!(log.borrow().last().map(String::as_str), Some("techstack.preload"));
    }

    #[test]
    fn test_panicking_scene_does_not_wedge_the_guard() {
        struct Exploding;
        impl RenderableScene for Exploding {
            fn activate(&mut self) {
                panic!("activation failed");
            }
            fn update(&mut self) {}
        }

        let (mut manager, clock, _log) = manager_with(&["hero"]);
        manager.register_scene("about", Box::new(Exploding)).expect("configured");

        let _ = manager.transition_to_with("about", TransitionOptions::with_duration(10.0));
        clock.advance(10.0);
        manager.tick();

        assert!(!manager.is_transitioning());
        assert_eq!(manager.current_scene_id(), Some(&SceneId::from("about")));
    }

    #[test]
    fn test_update_only_reaches_current_scene() {
        let (mut manager, _clock, log) = manager_with(&["hero", "about"]);
        manager.update_current_scene();
        assert_eq!(*log.borrow(), vec!["hero.update"]);
    }

    #[test]
    fn test_set_initial_scene() {
        let (mut manager, _clock, log) = manager_with(&["hero", "about"]);
        manager.set_initial_scene("about").expect("registered and idle");
        assert_eq!(manager.current_scene_id(), Some(&SceneId::from("about")));
        assert!(log.borrow().is_empty());

        let _ = manager.transition_to("hero");
        assert_eq!(manager.set_initial_scene("about"), Err(SceneError::Busy));
    }

    #[test]
    fn test_set_initial_scene_requires_registration() {
        let (mut manager, _clock, _log) = manager_with(&["hero"]);
        assert_eq!(
            manager.set_initial_scene("projects"),
            Err(SceneError::UnknownScene("projects".into()))
        );
    }

    #[test]
    fn test_next_scene_without_registrations() {
        let (mut manager, _clock, _log) = manager_with(&[]);
        assert_eq!(manager.next_scene(), TransitionOutcome::Rejected(SceneError::NoScenes));
        assert_eq!(manager.previous_scene(), TransitionOutcome::Rejected(SceneError::NoScenes));
    }

    #[test]
    fn test_resize_updates_camera_aspect() {
        let (mut manager, _clock, _log) = manager_with(&["hero"]);
        manager.resize(1000, 500);
        assert_relative_eq!(manager.camera().aspect, 2.0);
    }

    #[test]
    fn test_resize_reaches_every_registered_scene() {
        let (mut manager, _clock, log) = manager_with(&["hero", "about", "projects"]);
        let _ = manager.transition_to("about");
        log.borrow_mut().clear();

        manager.resize(800, 600);
        assert_eq!(
            *log.borrow(),
            vec!["hero.resize(800x600)", "about.resize(800x600)", "projects.resize(800x600)"]
        );
    }

    #[test]
    fn test_render_only_reaches_current_scene() {
        let (mut manager, clock, log) = manager_with(&["hero", "about"]);
        manager.render_current_scene();
        assert_eq!(*log.borrow(), vec!["hero.render"]);

        // Mid-transition the target is already current
        let _ = manager.transition_to("about");
        clock.advance(500.0);
        manager.tick();
        assert!(manager.is_transitioning());
        log.borrow_mut().clear();

        manager.render_current_scene();
        manager.update_current_scene();
        assert_eq!(*log.borrow(), vec!["about.render", "about.update"]);
    }

    #[test]
    fn test_begin_without_current_scene_reports_no_scenes() {
        let (mut manager, _clock, log) = manager_with(&[]);
        let result = manager.begin_transition("about".into(), TransitionOptions::default());

        assert_eq!(result, Err(SceneError::NoScenes));
        assert!(!manager.is_transitioning());
        assert_eq!(manager.previous_scene_id(), None);
        assert!(log.borrow().is_empty());
    }
}
