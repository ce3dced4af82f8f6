use crate::{AutoTrack, Ball, Field, Paddle};
use hecs::World;

/// Steer every autonomous paddle toward the current ball center
pub fn drive_auto_paddles(world: &mut World, field: &Field) {
    let ball_center_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.center_y(),
        None => return,
    };

    for (_entity, (paddle, policy)) in world.query_mut::<(&mut Paddle, &AutoTrack)>() {
        paddle.auto_track(ball_center_y, field.height, policy.max_step, policy.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, PlayerControlled, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Field) {
        let config = Config::new();
        let field = Field::new(config.field_width, config.field_height);
        (World::new(), config, field)
    }

    #[test]
    fn test_auto_paddle_follows_ball() {
        let (mut world, config, field) = setup_world();
        let opponent = create_paddle(&mut world, &config, Side::Right);
        world.insert_one(opponent, AutoTrack::default()).unwrap();
        create_ball(&mut world, &config, Vec2::new(480.0, 100.0), Vec2::new(5.0, 0.0));

        drive_auto_paddles(&mut world, &field);

        let paddle = world.get::<&Paddle>(opponent).unwrap();
        assert_eq!(paddle.pos.y, 213.0, "Paddle should step up by its speed");
    }

    #[test]
    fn test_policy_max_step_overrides_speed() {
        let (mut world, config, field) = setup_world();
        let opponent = create_paddle(&mut world, &config, Side::Right);
        let policy = AutoTrack {
            max_step: Some(2.0),
            error: 0.0,
        };
        world.insert_one(opponent, policy).unwrap();
        create_ball(&mut world, &config, Vec2::new(480.0, 500.0), Vec2::new(5.0, 0.0));

        drive_auto_paddles(&mut world, &field);

        let paddle = world.get::<&Paddle>(opponent).unwrap();
        assert_eq!(paddle.pos.y, 222.0);
    }

    #[test]
    fn test_player_paddle_is_not_driven() {
        let (mut world, config, field) = setup_world();
        let player = create_paddle(&mut world, &config, Side::Left);
        world.insert_one(player, PlayerControlled).unwrap();
        create_ball(&mut world, &config, Vec2::new(480.0, 100.0), Vec2::new(5.0, 0.0));

        drive_auto_paddles(&mut world, &field);

        let paddle = world.get::<&Paddle>(player).unwrap();
        assert_eq!(paddle.pos.y, 220.0);
    }

    #[test]
    fn test_no_ball_leaves_paddles_still() {
        let (mut world, config, field) = setup_world();
        let opponent = create_paddle(&mut world, &config, Side::Right);
        world.insert_one(opponent, AutoTrack::default()).unwrap();

        drive_auto_paddles(&mut world, &field);

        let paddle = world.get::<&Paddle>(opponent).unwrap();
        assert_eq!(paddle.pos.y, 220.0);
    }
}
