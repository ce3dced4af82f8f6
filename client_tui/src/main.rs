//! Terminal front end: ratatui canvas, crossterm keys, bell for sound.
//!
//! Logs go to stderr and are off unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=game_core=debug pong 2> pong.log`.

mod clock;
mod input;
mod renderer;
mod sound;

use anyhow::Context;
use game_core::{Config, GameRng, Params, SessionEnd, Simulation, SoundBank};
use tracing_subscriber::filter::EnvFilter;

use crate::clock::FixedRateClock;
use crate::input::TerminalInput;
use crate::renderer::TuiRenderer;
use crate::sound::Bell;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let sim = Simulation::new(Config::new(), GameRng::from_entropy())
        .context("invalid game configuration")?
        .with_sounds(
            SoundBank::silent()
                .with_paddle_hit(Bell)
                .with_score(Bell),
        );

    let terminal = ratatui::init();
    let result = play(sim, terminal);
    ratatui::restore();

    let end = result?;
    tracing::info!(?end, "session finished");
    Ok(())
}

fn play(mut sim: Simulation, terminal: ratatui::DefaultTerminal) -> anyhow::Result<SessionEnd> {
    let mut renderer = TuiRenderer::new(terminal, *sim.field());
    let mut input = TerminalInput::new().context("failed to set up keyboard input")?;
    let mut clock = FixedRateClock::new(Params::FPS);

    let end = game_core::run(&mut sim, &mut renderer, &mut input, &mut clock)?;
    let state = sim.match_state();
    tracing::info!(
        player = state.player_score,
        opponent = state.opponent_score,
        "final score"
    );
    Ok(end)
}
