use hecs::World;

use crate::{Field, Paddle, PaddleInput, PlayerControlled};

/// Apply held movement keys to the player-controlled paddle.
///
/// Up is applied before down, each clamped on its own, so holding both
/// keys nets out to zero away from the edges.
pub fn apply_player_input(world: &mut World, input: PaddleInput, field: &Field, step: f32) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PlayerControlled)>() {
        if input.up {
            paddle.move_by(-step, field.height);
        }
        if input.down {
            paddle.move_by(step, field.height);
        }
    }
}
