#[derive(Debug, Clone, Copy, Default)]
struct TickInput {
    move_left: bool,
    move_right: bool,
    jump_pressed: bool,
}

impl TickInput {
    fn from_snapshot(input: &InputSnapshot) -> Self {
        Self {
            move_left: input.is_down(InputAction::MoveLeft),
            move_right: input.is_down(InputAction::MoveRight),
            jump_pressed: input.jump_pressed(),
        }
    }
}

/// Advances the simulation by one fixed tick. Resolution order matters:
/// platforms are checked before the ground so a landing zeroes the fall
/// speed exactly once, and item pickups run against the post-move rect.
fn step(state: &mut PlatformerState, input: TickInput) {
    if state.game_clear {
        return;
    }

    apply_jump(&mut state.player, input);

    state.player.velocity.x = horizontal_velocity(input);
    state.player.rect.x += state.player.velocity.x;

    state.player.velocity.y += state.config.gravity_per_tick;
    state.player.rect.y += state.player.velocity.y;
    state.player.grounded = false;

    resolve_platform_landings(&mut state.player, &state.platforms);
    resolve_ground(&mut state.player, state.config.ground_y);
    clamp_to_world(&mut state.player, state.config.world_width);

    collect_items(&mut state.player, &mut state.items);

    if state.player.rect.overlaps(&state.goal) {
        state.game_clear = true;
    }

    state.camera = follow_camera(state.player.rect.x, state.config.world_width);
}

fn apply_jump(player: &mut Player, input: TickInput) {
    if input.jump_pressed && player.grounded {
        player.velocity.y = PLAYER_JUMP_IMPULSE;
        player.grounded = false;
    }
}

/// Left wins when both directions are held.
fn horizontal_velocity(input: TickInput) -> f32 {
    if input.move_left {
        -PLAYER_MOVE_SPEED
    } else if input.move_right {
        PLAYER_MOVE_SPEED
    } else {
        0.0
    }
}

/// One-way platforms: only a falling player whose bottom edge ends up
/// strictly inside a platform's vertical span lands on it. When several
/// platforms qualify in the same tick, the last one in the list wins.
fn resolve_platform_landings(player: &mut Player, platforms: &[Rect]) {
    if player.velocity.y <= 0.0 {
        return;
    }

    let bottom = player.rect.bottom();
    let mut landing_y = None;
    for platform in platforms {
        let inside_span = bottom > platform.y && bottom < platform.bottom();
        let overlaps_x = player.rect.x < platform.right() && player.rect.right() > platform.x;
        if inside_span && overlaps_x {
            landing_y = Some(platform.y - player.rect.height);
        }
    }

    if let Some(y) = landing_y {
        player.rect.y = y;
        player.velocity.y = 0.0;
        player.grounded = true;
    }
}

fn resolve_ground(player: &mut Player, ground_y: f32) {
    if player.rect.bottom() > ground_y {
        player.rect.y = ground_y - player.rect.height;
        player.velocity.y = 0.0;
        player.grounded = true;
    }
}

fn clamp_to_world(player: &mut Player, world_width: f32) {
    let max_x = (world_width - player.rect.width).max(0.0);
    player.rect.x = player.rect.x.clamp(0.0, max_x);
}

/// Each item is consumed at most once. Good items grow the player by the
/// growth factor, bad items shrink by the same factor down to the minimum
/// size. The rect is re-anchored so the player's feet stay planted.
fn collect_items(player: &mut Player, items: &mut [Item]) {
    for item in items.iter_mut() {
        if item.eaten || !player.rect.overlaps(&item.rect) {
            continue;
        }
        item.eaten = true;

        let old_size = player.rect.height;
        let new_size = match item.kind {
            ItemKind::Good => old_size * PLAYER_GROWTH_FACTOR,
            ItemKind::Bad => (old_size / PLAYER_GROWTH_FACTOR).max(PLAYER_MIN_SIZE),
        };
        player.rect.width = new_size;
        player.rect.height = new_size;
        player.rect.y += old_size - new_size;
    }
}

fn follow_camera(player_x: f32, world_width: f32) -> Camera {
    let max_scroll = (world_width - VIEWPORT_WIDTH_F).max(0.0);
    Camera {
        x: (player_x - VIEWPORT_WIDTH_F * 0.5).clamp(0.0, max_scroll),
    }
}
