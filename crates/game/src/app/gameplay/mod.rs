#[cfg(test)]
use engine::DrawCommand;
use engine::{
    Camera, DrawList, InputAction, InputSnapshot, Rect, Scene, SceneCommand, SceneKey, Vec2,
    VIEWPORT_WIDTH,
};
use tracing::info;

const GRAVITY_PER_TICK: f32 = 0.5;
const GROUND_Y: f32 = 500.0;
const GROUND_THICKNESS: f32 = 100.0;
const PLAYER_START_X: f32 = 50.0;
const PLAYER_START_SIZE: f32 = 40.0;
const PLAYER_MOVE_SPEED: f32 = 5.0;
const PLAYER_JUMP_IMPULSE: f32 = -12.0;
const PLAYER_MIN_SIZE: f32 = 20.0;
const PLAYER_GROWTH_FACTOR: f32 = 1.5;
const ITEM_SIZE: f32 = 20.0;
const GOAL_WIDTH: f32 = 10.0;
const GOAL_HEIGHT: f32 = 100.0;
const SINGLE_SCREEN_WORLD_WIDTH: f32 = 800.0;
const SCROLLING_WORLD_WIDTH: f32 = 1600.0;
const VIEWPORT_WIDTH_F: f32 = VIEWPORT_WIDTH as f32;

const SKY_COLOR: [u8; 4] = [135, 206, 235, 255];
const GROUND_COLOR: [u8; 4] = [34, 139, 34, 255];
const PLATFORM_COLOR: [u8; 4] = [105, 105, 105, 255];
const GOAL_COLOR: [u8; 4] = [255, 215, 0, 255];
const GOOD_ITEM_COLOR: [u8; 4] = [255, 255, 0, 255];
const BAD_ITEM_COLOR: [u8; 4] = [160, 82, 45, 255];
const PLAYER_COLOR: [u8; 4] = [139, 69, 19, 255];
const GOAL_TEXT_COLOR: [u8; 4] = [255, 0, 0, 255];
const GOAL_TEXT_SCALE: i32 = 12;
const GOAL_TEXT_TOP_Y: i32 = 270;

include!("types.rs");
include!("systems.rs");
include!("levels.rs");
include!("scene_impl.rs");

pub(crate) fn build_scene_pair() -> (Box<dyn Scene>, Box<dyn Scene>) {
    let single_screen = PlatformerScene::new("Meadow", SceneKey::SingleScreen, SceneKey::Scrolling);
    let scrolling = PlatformerScene::new("Canyon", SceneKey::Scrolling, SceneKey::SingleScreen);
    (Box::new(single_screen), Box::new(scrolling))
}
