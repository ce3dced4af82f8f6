use crate::{Ball, Events, Field};
use hecs::World;

/// Move ball based on velocity, bouncing off the top and bottom walls
pub fn move_ball(world: &mut World, field: &Field, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(field) {
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config};
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(config.field_width, config.field_height);
        let mut events = Events::new();
        let ball = create_ball(&mut world, &config, Vec2::new(100.0, 100.0), Vec2::new(5.0, -3.0));

        move_ball(&mut world, &field, &mut events);

        let b = world.get::<&Ball>(ball).unwrap();
        assert_eq!(b.pos, Vec2::new(105.0, 97.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_wall_hit_sets_event() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(config.field_width, config.field_height);
        let mut events = Events::new();
        create_ball(&mut world, &config, Vec2::new(100.0, 1.0), Vec2::new(5.0, -3.0));

        move_ball(&mut world, &field, &mut events);

        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }
}
