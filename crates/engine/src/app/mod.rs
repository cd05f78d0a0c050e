mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{DrawCommand, DrawList, Renderer, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use scene::{Camera, InputSnapshot, Rect, Scene, SceneCommand, SceneKey, Vec2};
