//! Portfolio demo application
//!
//! Runs the scene orchestrator headless: the four portfolio sections are
//! registered, and a scripted visitor clicks through the landing page, uses
//! the keyboard and the radar, and resizes the window while transitions are
//! still running.

mod sections;

use portfolio_engine::core::{Config, ConfigError, SiteConfig};
use portfolio_engine::foundation::logging;
use portfolio_engine::foundation::time::{Clock, SystemClock, Timer};
use portfolio_engine::navigation::Navigation;
use portfolio_engine::render::Camera;
use portfolio_engine::scene::{SceneError, SceneManager, TransitionOutcome};
use portfolio_engine::ui::OverlayUi;
use sections::{AboutSection, HeroSection, ProjectsSection, TechStackSection};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "portfolio_app/config/portfolio.toml";

/// Frames to keep running after the last scripted input
const SETTLE_FRAMES: u64 = 300;

#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("scene setup failed: {0}")]
    Scene(#[from] SceneError),
}

/// Visitor input replayed by the demo
#[derive(Debug, Clone, Copy)]
enum Input {
    /// "Explore" button on the landing overlay
    Explore,
    Key(&'static str),
    NavButton(usize),
    RadarClick(f32, f32),
    Resize(u32, u32),
}

const SCRIPT: &[(u64, Input)] = &[
    (30, Input::Explore),
    (60, Input::Key("ArrowDown")), // queued behind the running transition
    (300, Input::Key("3")),        // already current, rejected
    (330, Input::NavButton(4)),
    (340, Input::Resize(1280, 720)),
    (480, Input::RadarClick(75.0, 5.0)),
    (490, Input::Key("ArrowDown")), // hero hides navigation, ignored
    (640, Input::Explore),
];

fn load_config() -> Result<(SiteConfig, Option<PathBuf>), AppError> {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let (config, source) = if path.exists() {
        (SiteConfig::load_from_file(&path)?, Some(path))
    } else {
        (SiteConfig::default(), None)
    };
    config.validate()?;
    Ok((config, source))
}

fn log_outcome(input: Input, outcome: Option<TransitionOutcome>) {
    match outcome {
        Some(TransitionOutcome::Started) => log::info!("{:?}: transition started", input),
        Some(TransitionOutcome::Queued { position }) => {
            log::info!("{:?}: queued at position {}", input, position);
        }
        Some(TransitionOutcome::Rejected(err)) => log::info!("{:?}: rejected ({})", input, err),
        None => log::info!("{:?}: ignored", input),
    }
}

fn run() -> Result<(), AppError> {
    let (config, source) = load_config()?;
    logging::init_with_level(&config.engine.log_level);

    match &source {
        Some(path) => log::info!("Loaded site configuration from {}", path.display()),
        None => log::warn!("No configuration at {}, using built-in defaults", DEFAULT_CONFIG_PATH),
    }

    let clock = SystemClock::new();
    let ui = Rc::new(RefCell::new(OverlayUi::new()));

    let aspect = config.engine.viewport_width as f32 / config.engine.viewport_height as f32;
    let camera = Camera::perspective(
        config.scenes.iter().next().map_or_else(|| Camera::default().position, |c| c.camera_position),
        75.0,
        aspect,
        0.1,
        1000.0,
    );

    let mut manager = SceneManager::new(config.scenes.clone(), Box::new(clock.clone()), Box::new(Rc::clone(&ui)))
        .with_settings(&config.transitions)
        .with_camera(camera);

    manager.register_scene("hero", Box::new(HeroSection::new()))?;
    manager.register_scene("about", Box::new(AboutSection::new()))?;
    manager.register_scene("techstack", Box::new(TechStackSection::new()))?;
    manager.register_scene("projects", Box::new(ProjectsSection::new()))?;

    manager.on_scene_change(|new, old| log::info!("Now showing {} (was {})", new, old));

    let mut navigation = Navigation::new(&config.navigation);
    navigation.attach(&mut manager);

    let frame_time = Duration::from_secs_f64(1.0 / f64::from(config.engine.target_fps));
    let last_scripted = SCRIPT.iter().map(|(frame, _)| *frame).max().unwrap_or(0);
    let mut timer = Timer::new(clock.now_ms());

    log::info!("Starting portfolio demo at {} fps", config.engine.target_fps);

    for frame in 0..=last_scripted + SETTLE_FRAMES {
        for (_, input) in SCRIPT.iter().filter(|(at, _)| *at == frame) {
            let outcome = match *input {
                Input::Explore => Some(manager.transition_to("about")),
                Input::Key(key) => navigation.handle_key(key, &mut manager),
                Input::NavButton(index) => navigation.click_button(index, &mut manager),
                Input::RadarClick(x, y) => navigation.handle_radar_click(x, y, &mut manager),
                Input::Resize(width, height) => {
                    manager.resize(width, height);
                    log::info!("Viewport resized to {}x{}", width, height);
                    continue;
                }
            };
            log_outcome(*input, outcome);
        }

        manager.tick();
        navigation.sync_visibility(&manager, &mut *ui.borrow_mut(), clock.now_ms());
        navigation.tick();
        manager.update_current_scene();
        manager.render_current_scene();

        timer.update(clock.now_ms());
        std::thread::sleep(frame_time);
    }

    let position = manager.camera().position;
    log::info!(
        "Demo finished in {} with the camera at ({:.1}, {:.1}, {:.1}) after {} frames ({:.1} fps average)",
        manager.current_scene_id().map_or("no scene", |id| id.as_str()),
        position.x,
        position.y,
        position.z,
        timer.frame_count(),
        timer.average_fps()
    );

    navigation.detach(&mut manager);
    manager.dispose();
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        // Configuration errors surface before run() installs the logger
        logging::init();
        log::error!("Portfolio demo failed: {}", e);
        std::process::exit(1);
    }
}
