struct PlatformerScene {
    scene_name: &'static str,
    key: SceneKey,
    switch_target: SceneKey,
    state: PlatformerState,
}

impl PlatformerScene {
    fn new(scene_name: &'static str, key: SceneKey, switch_target: SceneKey) -> Self {
        Self {
            scene_name,
            key,
            switch_target,
            state: build_level(key),
        }
    }
}

impl Scene for PlatformerScene {
    fn load(&mut self) {
        self.state = build_level(self.key);
        info!(
            scene = self.scene_name,
            item_count = self.state.items.len(),
            platform_count = self.state.platforms.len(),
            world_width = self.state.config.world_width,
            "scene_loaded"
        );
    }

    fn update(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.switch_scene_pressed() {
            return SceneCommand::SwitchTo(self.switch_target);
        }
        if input.reset_pressed() {
            return SceneCommand::HardResetTo(self.key);
        }

        let was_clear = self.state.game_clear;
        step(&mut self.state, TickInput::from_snapshot(input));
        if !was_clear && self.state.game_clear {
            info!(scene = self.scene_name, "goal_reached");
        }

        SceneCommand::None
    }

    fn camera(&self) -> Camera {
        self.state.camera
    }

    fn draw(&self, out: &mut DrawList) {
        out.clear_screen(SKY_COLOR);
        out.world_rect(
            Rect::new(0.0, GROUND_Y, self.state.config.world_width, GROUND_THICKNESS),
            GROUND_COLOR,
        );
        for platform in &self.state.platforms {
            out.world_rect(*platform, PLATFORM_COLOR);
        }
        out.world_rect(self.state.goal, GOAL_COLOR);
        for item in &self.state.items {
            if item.eaten {
                continue;
            }
            let color = match item.kind {
                ItemKind::Good => GOOD_ITEM_COLOR,
                ItemKind::Bad => BAD_ITEM_COLOR,
            };
            out.world_rect(item.rect, color);
        }
        out.world_rect(self.state.player.rect, PLAYER_COLOR);

        if self.state.game_clear {
            out.text_centered(
                "GOAL!",
                (VIEWPORT_WIDTH_F * 0.5) as i32,
                GOAL_TEXT_TOP_Y,
                GOAL_TEXT_SCALE,
                GOAL_TEXT_COLOR,
            );
        }
    }

    fn unload(&mut self) {
        info!(scene = self.scene_name, "scene_unload");
        self.state = build_level(self.key);
    }

    fn debug_title(&self) -> Option<String> {
        Some(format!(
            "Banana Run | Scene {} | Player ({:.1}, {:.1}) | Camera {:.1}",
            self.scene_name,
            self.state.player.rect.x,
            self.state.player.rect.y,
            self.state.camera.x
        ))
    }
}
