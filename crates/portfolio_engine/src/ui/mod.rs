//! Shared UI regions
//!
//! The landing overlay, the navigation bar and the radar minimap are shared
//! between scenes. Only the scene manager and the navigation model toggle
//! them; scenes may read visibility but never write it.

mod overlay;

pub use overlay::{OverlayUi, RegionState, FADE_IN_DELAY_MS, FADE_OUT_DELAY_MS};

use std::cell::RefCell;
use std::rc::Rc;

bitflags::bitflags! {
    /// Set of shared UI regions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UiRegions: u8 {
        /// Landing overlay shown on the hero scene
        const PRIMARY = 0b0001;
        /// Navigation bar
        const NAV = 0b0010;
        /// Radar minimap
        const RADAR = 0b0100;
    }
}

/// Collaborator that applies region visibility
pub trait UiController {
    /// Show or hide every region in `regions`
    fn set_region_visible(&mut self, regions: UiRegions, visible: bool, now_ms: f64);

    /// Advance delayed UI work such as fades
    fn tick(&mut self, _now_ms: f64) {}
}

impl<T: UiController + ?Sized> UiController for Box<T> {
    fn set_region_visible(&mut self, regions: UiRegions, visible: bool, now_ms: f64) {
        (**self).set_region_visible(regions, visible, now_ms);
    }

    fn tick(&mut self, now_ms: f64) {
        (**self).tick(now_ms);
    }
}

/// Lets the host keep a handle on a controller it also hands to the manager
impl<T: UiController + ?Sized> UiController for Rc<RefCell<T>> {
    fn set_region_visible(&mut self, regions: UiRegions, visible: bool, now_ms: f64) {
        self.borrow_mut().set_region_visible(regions, visible, now_ms);
    }

    fn tick(&mut self, now_ms: f64) {
        self.borrow_mut().tick(now_ms);
    }
}
