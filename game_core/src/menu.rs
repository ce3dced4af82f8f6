//! Blocking replay menu shown once a match is decided

use std::time::Duration;

use crate::{
    view, ControlEvent, FrontendError, InputSource, Params, Renderer, Side, Simulation,
};

/// Match lengths offered after game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    BestOf3,
    BestOf5,
    BestOf7,
}

impl ReplayChoice {
    /// Points needed to win a best-of-N match
    pub fn win_target(self) -> u32 {
        match self {
            ReplayChoice::BestOf3 => 2,
            ReplayChoice::BestOf5 => 3,
            ReplayChoice::BestOf7 => 4,
        }
    }

    /// Map the digit keys shown on the menu
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '3' => Some(ReplayChoice::BestOf3),
            '5' => Some(ReplayChoice::BestOf5),
            '7' => Some(ReplayChoice::BestOf7),
            _ => None,
        }
    }
}

/// How the replay menu was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// A new match toward this many points has been started
    Replay(u32),
    Exit,
}

pub fn menu_title(sim: &Simulation) -> &'static str {
    match sim.match_state().winner() {
        Some(Side::Left) => "Player Wins!",
        Some(Side::Right) => "AI Wins!",
        None => "Match Over",
    }
}

/// Show the game-over screen and wait until the user picks a match length
/// or asks to exit. A pick starts the new match before returning.
pub fn run_replay_menu<R, I>(
    sim: &mut Simulation,
    renderer: &mut R,
    input: &mut I,
) -> Result<MenuOutcome, FrontendError>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    view::draw_center_text(
        sim,
        renderer,
        &[
            menu_title(sim),
            "Press 3 for Best of 3, 5 for Best of 5, 7 for Best of 7",
            "Press ESC to Exit",
        ],
    );
    renderer.present()?;

    let poll = Duration::from_millis(Params::MENU_POLL_MS);
    loop {
        for event in input.poll_events(poll)? {
            match event {
                ControlEvent::Quit => {
                    tracing::info!("exit requested from replay menu");
                    return Ok(MenuOutcome::Exit);
                }
                ControlEvent::Choose(choice) => {
                    let target = choice.win_target();
                    sim.new_match(target);
                    return Ok(MenuOutcome::Replay(target));
                }
                ControlEvent::TogglePause => {}
            }
        }
    }
}
