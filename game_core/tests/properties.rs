use game_core::*;
use glam::Vec2;
use proptest::prelude::*;

fn held_keys() -> impl Strategy<Value = PaddleInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(up, down)| PaddleInput { up, down })
}

fn ai_config() -> impl Strategy<Value = Config> {
    (proptest::option::of(1.0f32..20.0), -30.0f32..30.0).prop_map(|(ai_max_step, ai_error)| {
        Config {
            ai_max_step,
            ai_error,
            ..Config::new()
        }
    })
}

proptest! {
    #[test]
    fn paddles_stay_inside_field(
        seed in any::<u64>(),
        config in ai_config(),
        inputs in proptest::collection::vec(held_keys(), 1..400),
    ) {
        let mut sim = Simulation::new(config, GameRng::new(seed)).unwrap();
        let max_y = sim.field().height - sim.config().paddle_height;

        for input in inputs {
            if sim.is_game_over() {
                sim.new_match(3);
            }
            sim.tick(input);
            for paddle in [sim.player().unwrap(), sim.opponent().unwrap()] {
                prop_assert!(paddle.pos.y >= 0.0 && paddle.pos.y <= max_y,
                    "paddle y {} outside [0, {}]", paddle.pos.y, max_y);
            }
        }
    }

    #[test]
    fn ball_speed_never_exceeds_cap(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(held_keys(), 1..400),
    ) {
        let mut sim = Simulation::new(Config::new(), GameRng::new(seed)).unwrap();
        let max = sim.config().ball_max_speed;

        for input in inputs {
            if sim.is_game_over() {
                sim.new_match(5);
            }
            sim.tick(input);
            let ball = sim.ball().unwrap();
            prop_assert!(ball.vel.x.abs() <= max);
            prop_assert!(ball.vel.y.abs() <= max);
        }
    }

    #[test]
    fn one_point_per_tick_at_most(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(held_keys(), 1..400),
    ) {
        let mut sim = Simulation::new(Config::new(), GameRng::new(seed)).unwrap();

        for input in inputs {
            if sim.is_game_over() {
                sim.new_match(4);
            }
            let before = *sim.match_state();
            sim.tick(input);
            let after = *sim.match_state();
            let gained = (after.player_score - before.player_score)
                + (after.opponent_score - before.opponent_score);
            prop_assert!(gained <= 1, "{} points in one tick", gained);
            prop_assert!(!(sim.events().player_scored && sim.events().opponent_scored));
        }
    }

    #[test]
    fn overlapping_player_paddle_sends_ball_right(
        dx in 0.0f32..9.0,
        dy in -6.0f32..99.0,
        vx in -11.0f32..11.0,
        vy in -11.0f32..11.0,
    ) {
        let config = Config::new();
        let player = Paddle::at_start(&config, Side::Left);
        let opponent = Paddle::at_start(&config, Side::Right);
        let pos = Vec2::new(player.pos.x - 6.0 + dx, player.pos.y + dy);
        let mut ball = Ball::new(pos, Vec2::splat(config.ball_size), Vec2::new(vx, vy), config.ball_max_speed);
        prop_assume!(ball.bounding_box().overlaps(&player.bounding_box()));

        let hit = ball.check_collision(&player, &opponent);

        prop_assert_eq!(hit, Some(Side::Left));
        prop_assert!(ball.vel.x > 0.0);
        prop_assert!(ball.vel.x.abs() <= config.ball_max_speed);
        prop_assert!(ball.vel.y.abs() <= config.ball_max_speed);
    }

    #[test]
    fn reset_always_returns_to_spawn(
        seed in any::<u64>(),
        x in -50.0f32..1010.0,
        y in 0.0f32..533.0,
        vx in -11.0f32..11.0,
        vy in -11.0f32..11.0,
    ) {
        let mut rng = GameRng::new(seed);
        let spawn = Vec2::new(480.0, 270.0);
        let mut ball = Ball::new(spawn, Vec2::splat(7.0), Vec2::ZERO, 11.0);
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, vy);

        ball.reset(&mut rng);

        prop_assert_eq!(ball.pos, spawn);
        prop_assert_eq!(ball.vel.x, -vx);
        prop_assert!(Params::BALL_SERVE_VY.contains(&ball.vel.y));
    }

    #[test]
    fn auto_track_never_overshoots(
        start_y in 0.0f32..440.0,
        target in 50.0f32..490.0,
        max_step in 0.5f32..20.0,
    ) {
        let config = Config::new();
        let mut paddle = Paddle::at_start(&config, Side::Right);
        paddle.pos.y = start_y;
        let before = paddle.center_y();

        paddle.auto_track(target, config.field_height, Some(max_step), 0.0);

        let after = paddle.center_y();
        prop_assert!((after - before).abs() <= max_step + 1e-3);
        prop_assert!((after - target).abs() <= (before - target).abs() + 1e-3);
        if (before - target).abs() < max_step {
            prop_assert!((after - target).abs() < 1e-3, "center {} missed target {}", after, target);
        }
    }
}
