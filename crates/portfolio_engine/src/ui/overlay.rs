//! Display/opacity model of the shared overlays
//!
//! Showing a region makes it displayed immediately and fades its opacity in
//! after a short delay; hiding fades opacity out first and removes it from
//! layout once the fade has had time to play.

use super::{UiController, UiRegions};
use std::collections::HashMap;

/// Delay between displaying a region and raising its opacity
pub const FADE_IN_DELAY_MS: f64 = 10.0;

/// Delay between dropping opacity and removing the region from layout
pub const FADE_OUT_DELAY_MS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingFade {
    Reveal { at_ms: f64 },
    Remove { at_ms: f64 },
}

impl PendingFade {
    fn due(self, now_ms: f64) -> bool {
        match self {
            Self::Reveal { at_ms } | Self::Remove { at_ms } => now_ms >= at_ms,
        }
    }
}

/// Observable state of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionState {
    /// Takes part in layout
    pub displayed: bool,
    /// 0 = transparent, 1 = opaque
    pub opacity: f32,
    /// Visibility most recently requested
    pub requested_visible: bool,
    pending: Option<PendingFade>,
}

impl RegionState {
    const HIDDEN: Self = Self {
        displayed: false,
        opacity: 0.0,
        requested_visible: false,
        pending: None,
    };

    /// Whether a fade is still scheduled
    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }
}

/// In-process overlay controller with delayed fades
#[derive(Debug, Default)]
pub struct OverlayUi {
    regions: HashMap<UiRegions, RegionState>,
}

impl OverlayUi {
    /// All regions start hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a single region flag
    pub fn region(&self, region: UiRegions) -> RegionState {
        self.regions.get(&region).copied().unwrap_or(RegionState::HIDDEN)
    }

    /// Whether the last request for a region was "show"
    pub fn is_requested_visible(&self, region: UiRegions) -> bool {
        self.region(region).requested_visible
    }

    /// Whether the region is displayed and fully faded in
    pub fn is_fully_visible(&self, region: UiRegions) -> bool {
        let state = self.region(region);
        state.displayed && state.opacity >= 1.0
    }
}

impl UiController for OverlayUi {
    fn set_region_visible(&mut self, regions: UiRegions, visible: bool, now_ms: f64) {
        for region in regions.iter() {
            let state = self.regions.entry(region).or_insert(RegionState::HIDDEN);
            state.requested_visible = visible;
            // A newer request replaces whatever fade was still scheduled
            if visible {
                state.displayed = true;
                state.pending = Some(PendingFade::Reveal { at_ms: now_ms + FADE_IN_DELAY_MS });
            } else {
                state.opacity = 0.0;
                state.pending = Some(PendingFade::Remove { at_ms: now_ms + FADE_OUT_DELAY_MS });
            }
            log::debug!("UI region {:?} -> {}", region, if visible { "shown" } else { "hidden" });
        }
    }

    fn tick(&mut self, now_ms: f64) {
        for state in self.regions.values_mut() {
            match state.pending {
                Some(fade @ PendingFade::Reveal { .. }) if fade.due(now_ms) => {
                    state.opacity = 1.0;
                    state.pending = None;
                }
                Some(fade @ PendingFade::Remove { .. }) if fade.due(now_ms) => {
                    state.displayed = false;
                    state.pending = None;
                }
                _ => {}
            }
        }
    }
}
