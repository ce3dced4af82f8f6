pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod menu;
pub mod params;
pub mod resources;
pub mod services;
pub mod session;
pub mod simulation;
pub mod systems;
pub mod view;

pub use components::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use menu::*;
pub use params::*;
pub use resources::*;
pub use services::*;
pub use session::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one tick of the volley simulation.
///
/// Stages run in a fixed order: the autonomous paddle must see the ball
/// after bounces and after any serve reset.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    match_state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
    input: PaddleInput,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply held keys to the player paddle
    apply_player_input(world, input, field, config.player_step);

    // 2. Move ball (top/bottom walls bounce here)
    move_ball(world, field, events);

    // 3. Ball vs paddles
    check_collisions(world, events);

    // 4. Check scoring (ball exited the field)
    check_scoring(world, field, match_state, events, rng);

    // 5. Autonomous paddle reacts to the post-scoring ball
    drive_auto_paddles(world, field);

    // 6. Win condition
    if !match_state.game_over && match_state.evaluate() {
        tracing::info!(
            winner = ?match_state.winner(),
            player = match_state.player_score,
            opponent = match_state.opponent_score,
            "match over"
        );
    }
}

/// Helper to create a paddle entity, vertically centered on its side
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    world.spawn((Paddle::at_start(config, side),))
}

/// Helper to create the ball entity; `pos` doubles as its serve spot
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    let size = glam::Vec2::splat(config.ball_size);
    world.spawn((Ball::new(pos, size, vel, config.ball_max_speed),))
}
