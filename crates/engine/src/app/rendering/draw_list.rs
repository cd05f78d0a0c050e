use crate::app::Rect;

/// One retained drawing operation. Scenes emit these in back-to-front order;
/// the rasterizer replays them verbatim, so list order is paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole frame.
    Clear { color: [u8; 4] },
    /// Filled rect in world coordinates; the camera offset is applied at
    /// raster time.
    WorldRect { rect: Rect, color: [u8; 4] },
    /// Filled rect in screen coordinates, ignoring the camera.
    ScreenRect { rect: Rect, color: [u8; 4] },
    /// Text centered horizontally on `center_x`, top edge at `top_y`,
    /// in screen coordinates.
    ScreenText {
        text: String,
        center_x: i32,
        top_y: i32,
        scale: i32,
        color: [u8; 4],
    },
}

#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear_screen(&mut self, color: [u8; 4]) {
        self.commands.push(DrawCommand::Clear { color });
    }

    pub fn world_rect(&mut self, rect: Rect, color: [u8; 4]) {
        self.commands.push(DrawCommand::WorldRect { rect, color });
    }

    pub fn screen_rect(&mut self, rect: Rect, color: [u8; 4]) {
        self.commands.push(DrawCommand::ScreenRect { rect, color });
    }

    pub fn text_centered(
        &mut self,
        text: impl Into<String>,
        center_x: i32,
        top_y: i32,
        scale: i32,
        color: [u8; 4],
    ) {
        self.commands.push(DrawCommand::ScreenText {
            text: text.into(),
            center_x,
            top_y,
            scale,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops all commands but keeps the allocation for the next frame.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}
