fn build_level(key: SceneKey) -> PlatformerState {
    match key {
        SceneKey::SingleScreen => PlatformerState {
            config: WorldConfig {
                gravity_per_tick: GRAVITY_PER_TICK,
                ground_y: GROUND_Y,
                world_width: SINGLE_SCREEN_WORLD_WIDTH,
            },
            player: Player::spawn(),
            platforms: Vec::new(),
            items: vec![
                Item::new(ItemKind::Good, 200.0, 400.0),
                Item::new(ItemKind::Good, 450.0, 350.0),
                Item::new(ItemKind::Bad, 300.0, 480.0),
                Item::new(ItemKind::Bad, 600.0, 480.0),
            ],
            goal: Rect::new(720.0, 400.0, GOAL_WIDTH, GOAL_HEIGHT),
            camera: Camera::default(),
            game_clear: false,
        },
        SceneKey::Scrolling => PlatformerState {
            config: WorldConfig {
                gravity_per_tick: GRAVITY_PER_TICK,
                ground_y: GROUND_Y,
                world_width: SCROLLING_WORLD_WIDTH,
            },
            player: Player::spawn(),
            platforms: vec![
                Rect::new(250.0, 420.0, 120.0, 20.0),
                Rect::new(500.0, 350.0, 120.0, 20.0),
                Rect::new(800.0, 300.0, 140.0, 20.0),
                Rect::new(1150.0, 380.0, 120.0, 20.0),
            ],
            items: vec![
                Item::new(ItemKind::Good, 300.0, 380.0),
                Item::new(ItemKind::Good, 560.0, 310.0),
                Item::new(ItemKind::Good, 860.0, 260.0),
                Item::new(ItemKind::Bad, 700.0, 480.0),
                Item::new(ItemKind::Bad, 1000.0, 480.0),
            ],
            goal: Rect::new(1520.0, 400.0, GOAL_WIDTH, GOAL_HEIGHT),
            camera: Camera::default(),
            game_clear: false,
        },
    }
}
