use super::*;

fn idle() -> TickInput {
    TickInput::default()
}

fn left() -> TickInput {
    TickInput {
        move_left: true,
        ..TickInput::default()
    }
}

fn right() -> TickInput {
    TickInput {
        move_right: true,
        ..TickInput::default()
    }
}

fn jump() -> TickInput {
    TickInput {
        jump_pressed: true,
        ..TickInput::default()
    }
}

fn place_airborne(state: &mut PlatformerState, x: f32, y: f32, fall_speed: f32) {
    state.player.rect.x = x;
    state.player.rect.y = y;
    state.player.velocity = Vec2 { x: 0.0, y: fall_speed };
    state.player.grounded = false;
}

#[test]
fn gravity_accelerates_airborne_player() {
    let mut state = build_level(SceneKey::SingleScreen);
    place_airborne(&mut state, 50.0, 100.0, 0.0);

    step(&mut state, idle());
    assert!((state.player.velocity.y - 0.5).abs() < 0.0001);
    assert!((state.player.rect.y - 100.5).abs() < 0.0001);

    step(&mut state, idle());
    assert!((state.player.velocity.y - 1.0).abs() < 0.0001);
    assert!((state.player.rect.y - 101.5).abs() < 0.0001);
}

#[test]
fn resting_player_stays_snapped_to_ground() {
    let mut state = build_level(SceneKey::SingleScreen);

    step(&mut state, idle());

    assert!(state.player.grounded);
    assert!((state.player.rect.y - 460.0).abs() < 0.0001);
    assert!(state.player.velocity.y.abs() < 0.0001);
}

#[test]
fn jump_applies_impulse_only_when_grounded() {
    let mut state = build_level(SceneKey::SingleScreen);
    assert!(state.player.grounded);

    step(&mut state, jump());

    assert!(!state.player.grounded);
    assert!((state.player.velocity.y - (PLAYER_JUMP_IMPULSE + GRAVITY_PER_TICK)).abs() < 0.0001);
    assert!(state.player.rect.y < 460.0);
}

#[test]
fn airborne_jump_press_is_ignored() {
    let mut state = build_level(SceneKey::SingleScreen);
    place_airborne(&mut state, 50.0, 100.0, 0.0);

    step(&mut state, jump());

    assert!((state.player.velocity.y - 0.5).abs() < 0.0001);
}

#[test]
fn left_input_wins_when_both_directions_held() {
    let mut state = build_level(SceneKey::SingleScreen);
    let both = TickInput {
        move_left: true,
        move_right: true,
        jump_pressed: false,
    };

    step(&mut state, both);

    assert!((state.player.rect.x - (PLAYER_START_X - PLAYER_MOVE_SPEED)).abs() < 0.0001);
}

#[test]
fn player_is_clamped_to_world_edges() {
    let mut state = build_level(SceneKey::SingleScreen);
    for _ in 0..20 {
        step(&mut state, left());
    }
    assert!(state.player.rect.x.abs() < 0.0001);

    state.player.rect.x = 755.0;
    step(&mut state, right());
    step(&mut state, right());
    assert!((state.player.rect.x - 760.0).abs() < 0.0001);
}

#[test]
fn falling_player_lands_on_platform() {
    let mut state = build_level(SceneKey::Scrolling);
    place_airborne(&mut state, 255.0, 378.0, 5.0);

    step(&mut state, idle());

    assert!(state.player.grounded);
    assert!((state.player.rect.y - 380.0).abs() < 0.0001);
    assert!(state.player.velocity.y.abs() < 0.0001);
}

#[test]
fn rising_player_passes_through_platform() {
    let mut state = build_level(SceneKey::Scrolling);
    place_airborne(&mut state, 255.0, 405.0, -8.0);

    step(&mut state, idle());

    assert!(!state.player.grounded);
    assert!((state.player.rect.y - 397.5).abs() < 0.0001);
}

#[test]
fn last_overlapping_platform_wins() {
    let mut state = build_level(SceneKey::SingleScreen);
    state.platforms = vec![
        Rect::new(0.0, 100.0, 200.0, 20.0),
        Rect::new(0.0, 104.0, 200.0, 20.0),
    ];
    place_airborne(&mut state, 50.0, 64.5, 5.0);

    step(&mut state, idle());

    assert!(state.player.grounded);
    assert!((state.player.rect.y - 64.0).abs() < 0.0001);
}

#[test]
fn player_missing_platforms_lands_on_ground() {
    let mut state = build_level(SceneKey::Scrolling);
    place_airborne(&mut state, 50.0, 455.0, 5.0);

    step(&mut state, idle());

    assert!(state.player.grounded);
    assert!((state.player.rect.y - 460.0).abs() < 0.0001);
}

#[test]
fn good_item_grows_player_and_keeps_feet_planted() {
    let mut state = build_level(SceneKey::SingleScreen);
    place_airborne(&mut state, 190.0, 390.0, 0.0);
    let old_bottom = 390.5 + PLAYER_START_SIZE;

    step(&mut state, idle());

    assert!(state.items[0].eaten);
    assert!((state.player.rect.height - 60.0).abs() < 0.0001);
    assert!((state.player.rect.width - 60.0).abs() < 0.0001);
    assert!((state.player.rect.bottom() - old_bottom).abs() < 0.0001);
}

#[test]
fn bad_item_shrinks_player() {
    let mut state = build_level(SceneKey::SingleScreen);
    place_airborne(&mut state, 295.0, 444.5, 0.0);

    step(&mut state, idle());

    assert!(state.items[2].eaten);
    assert!((state.player.rect.height - 40.0 / PLAYER_GROWTH_FACTOR).abs() < 0.001);
    assert!((state.player.rect.bottom() - 485.0).abs() < 0.001);
}

#[test]
fn shrink_never_goes_below_minimum_size() {
    let mut state = build_level(SceneKey::SingleScreen);
    state.player.rect = Rect::new(295.0, 464.5, PLAYER_MIN_SIZE, PLAYER_MIN_SIZE);
    state.player.velocity = Vec2::default();
    state.player.grounded = false;

    step(&mut state, idle());

    assert!(state.items[2].eaten);
    assert!((state.player.rect.height - PLAYER_MIN_SIZE).abs() < 0.0001);
    assert!((state.player.rect.width - PLAYER_MIN_SIZE).abs() < 0.0001);
}

#[test]
fn eaten_items_stay_eaten_and_apply_once() {
    let mut state = build_level(SceneKey::SingleScreen);
    place_airborne(&mut state, 190.0, 390.0, 0.0);
    step(&mut state, idle());
    let size_after_pickup = state.player.rect.height;

    // Still overlapping the same item on the next tick.
    state.player.velocity = Vec2::default();
    step(&mut state, idle());

    assert!((state.player.rect.height - size_after_pickup).abs() < 0.0001);
}

#[test]
fn reaching_goal_sets_clear_and_freezes_simulation() {
    let mut state = build_level(SceneKey::SingleScreen);
    place_airborne(&mut state, 700.0, 419.5, 0.0);

    step(&mut state, idle());
    assert!(state.game_clear);

    let frozen_x = state.player.rect.x;
    let frozen_y = state.player.rect.y;
    step(&mut state, right());
    step(&mut state, jump());

    assert!(state.game_clear);
    assert!((state.player.rect.x - frozen_x).abs() < 0.0001);
    assert!((state.player.rect.y - frozen_y).abs() < 0.0001);
}

#[test]
fn camera_follows_player_with_clamping() {
    let mut state = build_level(SceneKey::Scrolling);

    place_airborne(&mut state, 900.0, 100.0, 0.0);
    step(&mut state, idle());
    assert!((state.camera.x - 500.0).abs() < 0.0001);

    place_airborne(&mut state, 100.0, 100.0, 0.0);
    step(&mut state, idle());
    assert!(state.camera.x.abs() < 0.0001);

    place_airborne(&mut state, 1500.0, 100.0, 0.0);
    step(&mut state, idle());
    assert!((state.camera.x - 800.0).abs() < 0.0001);
}

#[test]
fn single_screen_camera_never_scrolls() {
    let mut state = build_level(SceneKey::SingleScreen);
    place_airborne(&mut state, 700.0, 100.0, 0.0);

    step(&mut state, idle());

    assert!(state.camera.x.abs() < 0.0001);
}

#[test]
fn tick_input_maps_from_snapshot() {
    let snapshot = InputSnapshot::empty()
        .with_action_down(InputAction::MoveLeft, true)
        .with_jump_pressed(true);

    let input = TickInput::from_snapshot(&snapshot);

    assert!(input.move_left);
    assert!(!input.move_right);
    assert!(input.jump_pressed);
}

#[test]
fn draw_list_paints_background_first_and_player_on_top() {
    let scene = PlatformerScene::new("Meadow", SceneKey::SingleScreen, SceneKey::Scrolling);
    let mut list = DrawList::default();

    scene.draw(&mut list);

    let commands = list.commands();
    assert!(matches!(commands[0], DrawCommand::Clear { .. }));
    // Ground, goal, 4 items, player.
    let rect_count = commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::WorldRect { .. }))
        .count();
    assert_eq!(rect_count, 7);
    assert!(matches!(
        commands.last(),
        Some(DrawCommand::WorldRect { color, .. }) if *color == PLAYER_COLOR
    ));
}

#[test]
fn eaten_items_are_not_drawn() {
    let mut scene = PlatformerScene::new("Meadow", SceneKey::SingleScreen, SceneKey::Scrolling);
    scene.state.items[0].eaten = true;
    let mut list = DrawList::default();

    scene.draw(&mut list);

    let rect_count = list
        .commands()
        .iter()
        .filter(|command| matches!(command, DrawCommand::WorldRect { .. }))
        .count();
    assert_eq!(rect_count, 6);
}

#[test]
fn goal_banner_is_drawn_after_clear() {
    let mut scene = PlatformerScene::new("Meadow", SceneKey::SingleScreen, SceneKey::Scrolling);
    scene.state.game_clear = true;
    let mut list = DrawList::default();

    scene.draw(&mut list);

    assert!(matches!(
        list.commands().last(),
        Some(DrawCommand::ScreenText { text, .. }) if text.as_str() == "GOAL!"
    ));
}

#[test]
fn switch_and_reset_inputs_emit_scene_commands() {
    let mut scene = PlatformerScene::new("Meadow", SceneKey::SingleScreen, SceneKey::Scrolling);

    let switch = scene.update(&InputSnapshot::empty().with_switch_scene_pressed(true));
    assert_eq!(switch, SceneCommand::SwitchTo(SceneKey::Scrolling));

    let reset = scene.update(&InputSnapshot::empty().with_reset_pressed(true));
    assert_eq!(reset, SceneCommand::HardResetTo(SceneKey::SingleScreen));
}

#[test]
fn load_rebuilds_level_state() {
    let mut scene = PlatformerScene::new("Canyon", SceneKey::Scrolling, SceneKey::SingleScreen);
    scene.state.game_clear = true;
    scene.state.items[0].eaten = true;
    scene.state.player.rect.x = 1200.0;

    scene.load();

    assert!(!scene.state.game_clear);
    assert!(!scene.state.items[0].eaten);
    assert!((scene.state.player.rect.x - PLAYER_START_X).abs() < 0.0001);
}
