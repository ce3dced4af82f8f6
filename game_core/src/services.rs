//! Collaborators the core calls into.
//!
//! Windowing, key polling, audio playback and frame pacing live outside the
//! core; front ends implement these traits and hand them to the session loop.

use std::time::Duration;

use glam::Vec2;

use crate::{Aabb, FrontendError, PaddleInput, ReplayChoice};

/// Text roles the view asks for; the renderer picks the actual font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Score,
    Title,
    Body,
}

/// Draw sink for one frame. Coordinates are field units, Y down.
pub trait Renderer {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Aabb);
    fn fill_ellipse(&mut self, rect: Aabb);
    fn line(&mut self, from: Vec2, to: Vec2);
    /// Draw `text` centered on `at`
    fn text(&mut self, text: &str, at: Vec2, style: TextStyle);
    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> Result<(), FrontendError>;
}

/// Discrete control events recognised by the session loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Quit,
    TogglePause,
    Choose(ReplayChoice),
}

pub trait InputSource {
    /// Collect pending control events, waiting up to `timeout` for the first one
    fn poll_events(&mut self, timeout: Duration) -> Result<Vec<ControlEvent>, FrontendError>;

    /// Movement keys currently held
    fn held_keys(&self) -> PaddleInput;
}

/// Paces the session loop (one call per rendered frame)
pub trait FrameClock {
    fn tick(&mut self);
}

/// A fire-and-forget sound effect
pub trait Sound {
    fn play(&mut self);
}

impl<F: FnMut()> Sound for F {
    fn play(&mut self) {
        self()
    }
}

/// Sound cues raised by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    WallHit,
    PaddleHit,
    Score,
}

/// Optional sound per cue; a missing sound is a silent no-op
#[derive(Default)]
pub struct SoundBank {
    pub wall_hit: Option<Box<dyn Sound>>,
    pub paddle_hit: Option<Box<dyn Sound>>,
    pub score: Option<Box<dyn Sound>>,
}

impl SoundBank {
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn with_wall_hit(mut self, sound: impl Sound + 'static) -> Self {
        self.wall_hit = Some(Box::new(sound));
        self
    }

    pub fn with_paddle_hit(mut self, sound: impl Sound + 'static) -> Self {
        self.paddle_hit = Some(Box::new(sound));
        self
    }

    pub fn with_score(mut self, sound: impl Sound + 'static) -> Self {
        self.score = Some(Box::new(sound));
        self
    }

    pub fn play(&mut self, cue: Cue) {
        let slot = match cue {
            Cue::WallHit => &mut self.wall_hit,
            Cue::PaddleHit => &mut self.paddle_hit,
            Cue::Score => &mut self.score,
        };
        if let Some(sound) = slot {
            sound.play();
        }
    }
}

impl std::fmt::Debug for SoundBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBank")
            .field("wall_hit", &self.wall_hit.is_some())
            .field("paddle_hit", &self.paddle_hit.is_some())
            .field("score", &self.score.is_some())
            .finish()
    }
}
