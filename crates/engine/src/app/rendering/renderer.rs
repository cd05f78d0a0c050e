use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::{Camera, Rect};

use super::draw_list::{DrawCommand, DrawList};
use super::font::{draw_text_clipped, text_width_px};
use super::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Rasterizes draw lists into a fixed-resolution framebuffer and presents it.
/// The surface texture tracks the window size; the buffer never changes, so
/// scenes are resolution-independent.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels =
            Self::build_pixels(Arc::clone(&window), size.width.max(1), size.height.max(1))?;
        Ok(Self { window, pixels })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, surface)
    }

    pub fn render(&mut self, list: &DrawList, camera: Camera) -> Result<(), Error> {
        rasterize(
            self.pixels.frame_mut(),
            VIEWPORT_WIDTH,
            VIEWPORT_HEIGHT,
            list,
            camera,
        );
        self.pixels.render()
    }
}

fn rasterize(frame: &mut [u8], width: u32, height: u32, list: &DrawList, camera: Camera) {
    for command in list.commands() {
        match command {
            DrawCommand::Clear { color } => {
                for chunk in frame.chunks_exact_mut(4) {
                    chunk.copy_from_slice(color);
                }
            }
            DrawCommand::WorldRect { rect, color } => {
                draw_rect_clipped(frame, width, height, world_to_screen(*rect, camera), *color);
            }
            DrawCommand::ScreenRect { rect, color } => {
                draw_rect_clipped(frame, width, height, *rect, *color);
            }
            DrawCommand::ScreenText {
                text,
                center_x,
                top_y,
                scale,
                color,
            } => {
                let left = center_x - text_width_px(text, *scale) / 2;
                draw_text_clipped(frame, width, height, left, *top_y, text, *scale, *color);
            }
        }
    }
}

fn world_to_screen(rect: Rect, camera: Camera) -> Rect {
    Rect {
        x: rect.x - camera.x,
        ..rect
    }
}

fn draw_rect_clipped(frame: &mut [u8], width: u32, height: u32, rect: Rect, color: [u8; 4]) {
    let left = rect.x.round() as i32;
    let top = rect.y.round() as i32;
    let right = (rect.x + rect.width).round() as i32;
    let bottom = (rect.y + rect.height).round() as i32;

    let start_x = left.max(0);
    let start_y = top.max(0);
    let end_x = right.min(width as i32);
    let end_y = bottom.min(height as i32);
    if end_x <= start_x || end_y <= start_y {
        return;
    }

    for y in start_y..end_y {
        for x in start_x..end_x {
            write_pixel_rgba_clipped(frame, width as usize, x, y, color);
        }
    }
}

fn write_pixel_rgba_clipped(frame: &mut [u8], width: usize, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 {
        return;
    }
    let x = x as usize;
    let y = y as usize;
    let Some(pixel_offset) = y.checked_mul(width).and_then(|row| row.checked_add(x)) else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }
    frame[byte_offset..end].copy_from_slice(&color);
}
