#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Good,
    Bad,
}

#[derive(Debug, Clone)]
struct Item {
    rect: Rect,
    kind: ItemKind,
    eaten: bool,
}

impl Item {
    fn new(kind: ItemKind, x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ITEM_SIZE, ITEM_SIZE),
            kind,
            eaten: false,
        }
    }
}

#[derive(Debug, Clone)]
struct Player {
    rect: Rect,
    velocity: Vec2,
    grounded: bool,
}

impl Player {
    fn spawn() -> Self {
        Self {
            rect: Rect::new(
                PLAYER_START_X,
                GROUND_Y - PLAYER_START_SIZE,
                PLAYER_START_SIZE,
                PLAYER_START_SIZE,
            ),
            velocity: Vec2::default(),
            grounded: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WorldConfig {
    gravity_per_tick: f32,
    ground_y: f32,
    world_width: f32,
}

/// Full simulation state for one level. Rebuilt from scratch on load, so a
/// hard reset is just a fresh build.
#[derive(Debug, Clone)]
struct PlatformerState {
    config: WorldConfig,
    player: Player,
    platforms: Vec<Rect>,
    items: Vec<Item>,
    goal: Rect,
    camera: Camera,
    game_clear: bool,
}
