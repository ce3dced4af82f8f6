use rand::Rng;

use crate::Side;

/// Match scoring and win tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    pub player_score: u32,   // left, human
    pub opponent_score: u32, // right, autonomous
    pub win_target: u32,     // points needed to win
    pub game_over: bool,
}

impl MatchState {
    pub fn new(win_target: u32) -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            win_target: win_target.max(1),
            game_over: false,
        }
    }

    /// Credit a point to the side that scored
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.player_score += 1,
            Side::Right => self.opponent_score += 1,
        }
    }

    /// Recompute `game_over` from the scores
    pub fn evaluate(&mut self) -> bool {
        self.game_over = self.winner().is_some();
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= self.win_target {
            Some(Side::Left)
        } else if self.opponent_score >= self.win_target {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Zero the scores and start counting toward a new target
    pub fn restart(&mut self, win_target: u32) {
        *self = Self::new(win_target);
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(crate::Params::WIN_TARGET)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Uniformly pick one of a fixed, non-empty set of options
    pub fn pick<T: Copy, const N: usize>(&mut self, options: &[T; N]) -> T {
        options[self.0.gen_range(0..N)]
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub player_scored: bool,
    pub opponent_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.player_scored = false;
        self.opponent_scored = false;
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

/// Held state of the player's movement keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub const NONE: Self = Self {
        up: false,
        down: false,
    };
    pub const UP: Self = Self {
        up: true,
        down: false,
    };
    pub const DOWN: Self = Self {
        up: false,
        down: true,
    };
}
