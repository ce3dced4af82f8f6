//! Outer game loop: events, ticking, drawing and the replay menu

use std::time::Duration;

use crate::{
    menu, view, ControlEvent, FrameClock, FrontendError, InputSource, MenuOutcome, Renderer,
    Simulation,
};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Quit during play (window close / escape)
    Quit,
    /// Exit picked from the replay menu
    Exit,
}

/// Run frames until the user quits.
///
/// Each frame: handle control events, tick unless paused or over, draw,
/// enter the replay menu on game over, present, then wait for the clock.
pub fn run<R, I, C>(
    sim: &mut Simulation,
    renderer: &mut R,
    input: &mut I,
    clock: &mut C,
) -> Result<SessionEnd, FrontendError>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
    C: FrameClock + ?Sized,
{
    let mut paused = false;

    loop {
        for event in input.poll_events(Duration::ZERO)? {
            match event {
                ControlEvent::Quit => {
                    tracing::info!("quit requested");
                    return Ok(SessionEnd::Quit);
                }
                ControlEvent::TogglePause => {
                    paused = !paused;
                    tracing::debug!(paused, "pause toggled");
                }
                // Match lengths only mean something in the replay menu
                ControlEvent::Choose(_) => {}
            }
        }

        if !paused && !sim.is_game_over() {
            sim.tick(input.held_keys());
        }

        view::draw_frame(sim, renderer);

        if sim.is_game_over() {
            if let MenuOutcome::Exit = menu::run_replay_menu(sim, renderer, input)? {
                return Ok(SessionEnd::Exit);
            }
        }

        renderer.present()?;
        clock.tick();
    }
}
