use crate::{Ball, Events, Paddle, Side};
use hecs::World;

/// Resolve ball-vs-paddle hits, left (player) paddle first
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Copy paddle geometry out so the ball can be borrowed mutably
    let paddle_on = |side: Side| {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    };
    let (left, right) = match (paddle_on(Side::Left), paddle_on(Side::Right)) {
        (Some(left), Some(right)) => (left, right),
        _ => return, // Paddles not spawned yet
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = ball.check_collision(&left, &right) {
            tracing::trace!(?side, vel = ?ball.vel, "ball hit paddle");
            events.ball_hit_paddle = true;
        }
    }
}
