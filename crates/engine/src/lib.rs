//! Fixed-timestep 2D engine: a scene machine driven by a frame loop, an
//! input collector that snapshots per simulation tick, and a draw-list
//! renderer rasterizing into a fixed 800x600 framebuffer.

pub mod app;

pub use app::{
    run_app, AppError, Camera, DrawCommand, DrawList, InputAction, InputSnapshot, LoopConfig,
    LoopMetricsSnapshot, Rect, Renderer, Scene, SceneCommand, SceneKey, Vec2, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH,
};
