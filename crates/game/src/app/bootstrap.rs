use engine::{LoopConfig, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene_single_screen: Box<dyn Scene>,
    pub(crate) scene_scrolling: Box<dyn Scene>,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Banana Run Startup ===");

    let (scene_single_screen, scene_scrolling) = gameplay::build_scene_pair();
    let config = LoopConfig {
        window_title: "Banana Run".to_string(),
        ..LoopConfig::default()
    };

    AppWiring {
        config,
        scene_single_screen,
        scene_scrolling,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
