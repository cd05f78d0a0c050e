use super::input::{ActionStates, InputAction};
use super::rendering::DrawList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    SingleScreen,
    Scrolling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    SwitchTo(SceneKey),
    HardResetTo(SceneKey),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    switch_scene_pressed: bool,
    reset_pressed: bool,
    jump_pressed: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        quit_requested: bool,
        switch_scene_pressed: bool,
        reset_pressed: bool,
        jump_pressed: bool,
        actions: ActionStates,
    ) -> Self {
        Self {
            quit_requested,
            switch_scene_pressed,
            reset_pressed,
            jump_pressed,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn switch_scene_pressed(&self) -> bool {
        self.switch_scene_pressed
    }

    pub fn reset_pressed(&self) -> bool {
        self.reset_pressed
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_switch_scene_pressed(mut self, switch_scene_pressed: bool) -> Self {
        self.switch_scene_pressed = switch_scene_pressed;
        self
    }

    pub fn with_reset_pressed(mut self, reset_pressed: bool) -> Self {
        self.reset_pressed = reset_pressed;
        self
    }

    pub fn with_jump_pressed(mut self, jump_pressed: bool) -> Self {
        self.jump_pressed = jump_pressed;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned box with a top-left origin, matching screen coordinates
/// (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: rects that merely touch edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Horizontal scroll offset applied to world-space draw commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
}

pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, input: &InputSnapshot) -> SceneCommand;
    fn camera(&self) -> Camera;
    fn draw(&self, out: &mut DrawList);
    fn unload(&mut self);
    fn debug_title(&self) -> Option<String> {
        None
    }
}

struct SceneRuntime {
    scene: Box<dyn Scene>,
    is_loaded: bool,
}

pub(crate) struct SceneMachine {
    single_screen: SceneRuntime,
    scrolling: SceneRuntime,
    active_scene: SceneKey,
}

impl SceneMachine {
    pub(crate) fn new(
        single_screen: Box<dyn Scene>,
        scrolling: Box<dyn Scene>,
        active_scene: SceneKey,
    ) -> Self {
        Self {
            single_screen: SceneRuntime {
                scene: single_screen,
                is_loaded: false,
            },
            scrolling: SceneRuntime {
                scene: scrolling,
                is_loaded: false,
            },
            active_scene,
        }
    }

    pub(crate) fn active_scene(&self) -> SceneKey {
        self.active_scene
    }

    pub(crate) fn load_active(&mut self) {
        if self.active_runtime_ref().is_loaded {
            return;
        }
        let runtime = self.active_runtime_mut();
        runtime.scene.load();
        runtime.is_loaded = true;
    }

    pub(crate) fn update_active(&mut self, input: &InputSnapshot) -> SceneCommand {
        self.active_runtime_mut().scene.update(input)
    }

    pub(crate) fn camera_active(&self) -> Camera {
        self.active_runtime_ref().scene.camera()
    }

    pub(crate) fn draw_active(&self, out: &mut DrawList) {
        self.active_runtime_ref().scene.draw(out);
    }

    pub(crate) fn debug_title_active(&self) -> Option<String> {
        self.active_runtime_ref().scene.debug_title()
    }

    pub(crate) fn switch_to(&mut self, next_scene: SceneKey) -> bool {
        if self.active_scene == next_scene {
            return false;
        }

        self.load_scene_if_needed(next_scene);
        self.active_scene = next_scene;
        true
    }

    pub(crate) fn hard_reset_to(&mut self, next_scene: SceneKey) -> bool {
        let runtime = self.runtime_mut(next_scene);
        if runtime.is_loaded {
            runtime.scene.unload();
        }
        runtime.scene.load();
        runtime.is_loaded = true;
        let changed = self.active_scene != next_scene;
        self.active_scene = next_scene;
        changed
    }

    pub(crate) fn shutdown_all(&mut self) {
        for runtime in [&mut self.single_screen, &mut self.scrolling] {
            if runtime.is_loaded {
                runtime.scene.unload();
                runtime.is_loaded = false;
            }
        }
    }

    fn load_scene_if_needed(&mut self, key: SceneKey) {
        if self.runtime_ref(key).is_loaded {
            return;
        }
        let runtime = self.runtime_mut(key);
        runtime.scene.load();
        runtime.is_loaded = true;
    }

    fn active_runtime_mut(&mut self) -> &mut SceneRuntime {
        self.runtime_mut(self.active_scene)
    }

    fn active_runtime_ref(&self) -> &SceneRuntime {
        self.runtime_ref(self.active_scene)
    }

    fn runtime_mut(&mut self, key: SceneKey) -> &mut SceneRuntime {
        match key {
            SceneKey::SingleScreen => &mut self.single_screen,
            SceneKey::Scrolling => &mut self.scrolling,
        }
    }

    fn runtime_ref(&self, key: SceneKey) -> &SceneRuntime {
        match key {
            SceneKey::SingleScreen => &self.single_screen,
            SceneKey::Scrolling => &self.scrolling,
        }
    }
}
