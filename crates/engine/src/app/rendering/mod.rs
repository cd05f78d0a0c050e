mod draw_list;
mod font;
mod renderer;

pub use draw_list::{DrawCommand, DrawList};
pub use renderer::Renderer;

/// Logical framebuffer size. The window surface may be resized, but every
/// draw command is expressed against this fixed resolution.
pub const VIEWPORT_WIDTH: u32 = 800;
pub const VIEWPORT_HEIGHT: u32 = 600;
