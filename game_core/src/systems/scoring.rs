use crate::{Ball, Events, Field, GameRng, MatchState, Side};
use hecs::World;

/// Check if ball fully left the field (scoring) and serve again.
///
/// At most one point is awarded per call.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    match_state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounding_box();
        let scorer = if bounds.right() < 0.0 {
            // Player missed on the left
            Side::Right
        } else if bounds.left() > field.width {
            // Opponent missed on the right
            Side::Left
        } else {
            continue;
        };

        match_state.award(scorer);
        match scorer {
            Side::Left => events.player_scored = true,
            Side::Right => events.opponent_scored = true,
        }
        tracing::debug!(
            ?scorer,
            player = match_state.player_score,
            opponent = match_state.opponent_score,
            "point scored"
        );

        ball.reset(rng);
    }
}
