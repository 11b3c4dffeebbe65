//! The four portfolio sections
//!
//! Each section keeps only the state its per-frame animation needs; the
//! actual meshes and overlays live in the browser front end.

use portfolio_engine::scene::RenderableScene;

/// Idempotent visibility plus frame bookkeeping shared by every section
#[derive(Debug)]
struct SectionState {
    name: &'static str,
    active: bool,
    preloaded: bool,
    frames: u64,
}

impl SectionState {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            active: false,
            preloaded: false,
            frames: 0,
        }
    }

    fn activate(&mut self) {
        if !self.active {
            self.active = true;
            log::debug!("{} section shown", self.name);
        }
    }

    fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            log::debug!("{} section hidden after {} frames", self.name, self.frames);
        }
    }

    fn preload(&mut self) {
        if !self.preloaded {
            self.preloaded = true;
            log::debug!("{} section assets warmed up", self.name);
        }
    }
}

/// Landing scene with slowly orbiting shapes
#[derive(Debug)]
pub struct HeroSection {
    state: SectionState,
    orbit: f32,
    aspect: f32,
}

impl HeroSection {
    pub fn new() -> Self {
        // The landing page is on screen before the manager exists
        let mut state = SectionState::new("Hero");
        state.active = true;
        Self {
            state,
            orbit: 0.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl RenderableScene for HeroSection {
    fn activate(&mut self) {
        self.state.activate();
    }

    fn deactivate(&mut self) {
        self.state.deactivate();
    }

    fn update(&mut self) {
        self.state.frames += 1;
        self.orbit = (self.orbit + 0.005) % std::f32::consts::TAU;
    }

    fn render(&mut self) {
        log::trace!("Hero orbit {:.3} rad at aspect {:.2}", self.orbit, self.aspect);
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    fn preload(&mut self) {
        self.state.preload();
    }
}

const BIO: &str = "Developer building interactive 3D experiences for the web.";

/// Bio revealed one character at a time
#[derive(Debug)]
pub struct AboutSection {
    state: SectionState,
    revealed: usize,
}

impl AboutSection {
    pub fn new() -> Self {
        Self {
            state: SectionState::new("About"),
            revealed: 0,
        }
    }

    /// Text typed so far
    pub fn visible_text(&self) -> &str {
        let end = BIO
            .char_indices()
            .nth(self.revealed)
            .map_or(BIO.len(), |(i, _)| i);
        &BIO[..end]
    }
}

impl RenderableScene for AboutSection {
    fn activate(&mut self) {
        if !self.state.active {
            self.revealed = 0;
        }
        self.state.activate();
    }

    fn deactivate(&mut self) {
        if self.state.active {
            log::debug!("About left with \"{}\" typed", self.visible_text());
        }
        self.state.deactivate();
    }

    fn update(&mut self) {
        self.state.frames += 1;
        // Two frames per character
        if self.state.frames % 2 == 0 && self.revealed < BIO.chars().count() {
            self.revealed += 1;
        }
    }

    fn preload(&mut self) {
        self.state.preload();
    }
}

const TECHNOLOGIES: [&str; 6] = ["Rust", "TypeScript", "Three.js", "WebGL", "Node.js", "PostgreSQL"];

/// Ring of technology badges rotating around the camera target
#[derive(Debug)]
pub struct TechStackSection {
    state: SectionState,
    ring_rotation: f32,
}

impl TechStackSection {
    pub fn new() -> Self {
        Self {
            state: SectionState::new("Tech stack"),
            ring_rotation: 0.0,
        }
    }

    /// Badge facing the camera
    pub fn front_badge(&self) -> &'static str {
        let step = std::f32::consts::TAU / TECHNOLOGIES.len() as f32;
        let index = (self.ring_rotation / step).round() as usize % TECHNOLOGIES.len();
        TECHNOLOGIES[index]
    }
}

impl RenderableScene for TechStackSection {
    fn activate(&mut self) {
        self.state.activate();
    }

    fn deactivate(&mut self) {
        if self.state.active {
            log::debug!("Tech stack left facing {}", self.front_badge());
        }
        self.state.deactivate();
    }

    fn update(&mut self) {
        self.state.frames += 1;
        self.ring_rotation = (self.ring_rotation + 0.01) % std::f32::consts::TAU;
    }

    fn preload(&mut self) {
        self.state.preload();
    }
}

const PROJECT_CARDS: usize = 4;
const FRAMES_PER_CARD: u64 = 180;

/// Project cards highlighted in turn
#[derive(Debug)]
pub struct ProjectsSection {
    state: SectionState,
    highlighted: usize,
}

impl ProjectsSection {
    pub fn new() -> Self {
        Self {
            state: SectionState::new("Projects"),
            highlighted: 0,
        }
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }
}

impl RenderableScene for ProjectsSection {
    fn activate(&mut self) {
        self.state.activate();
    }

    fn deactivate(&mut self) {
        if self.state.active {
            log::debug!("Projects left on card {}", self.highlighted() + 1);
        }
        self.state.deactivate();
    }

    fn update(&mut self) {
        self.state.frames += 1;
        if self.state.frames % FRAMES_PER_CARD == 0 {
            self.highlighted = (self.highlighted + 1) % PROJECT_CARDS;
        }
    }

    fn preload(&mut self) {
        self.state.preload();
    }
}
