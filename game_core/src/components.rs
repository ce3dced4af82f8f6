use glam::Vec2;

use crate::{Aabb, Config, Field, GameRng, Params};

/// Which end of the field an entity defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // human player
    Right, // autonomous opponent
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - a vertically moving bat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // top-left corner
    pub size: Vec2, // width, height
    pub speed: f32, // default per-tick step when tracking
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    /// Paddle for `side`, vertically centered in the field
    pub fn at_start(config: &Config, side: Side) -> Self {
        Self::new(
            side,
            Vec2::new(config.paddle_x(side), config.paddle_start_y()),
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_speed,
        )
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Shift vertically by `delta`, saturating at the field edges
    pub fn move_by(&mut self, delta: f32, field_height: f32) {
        self.pos.y += delta;
        self.pos.y = self.pos.y.clamp(0.0, (field_height - self.size.y).max(0.0));
    }

    /// Step the paddle center toward `ball_center_y + error`.
    ///
    /// The step is capped by `max_step` (defaults to the paddle's own speed)
    /// and never carries the center past the target.
    pub fn auto_track(
        &mut self,
        ball_center_y: f32,
        field_height: f32,
        max_step: Option<f32>,
        error: f32,
    ) {
        let max_step = max_step.unwrap_or(self.speed);
        let target = ball_center_y + error;
        let center = self.center_y();

        let dy = if target < center {
            -max_step.min(center - target)
        } else if target > center {
            max_step.min(target - center)
        } else {
            0.0
        };
        self.move_by(dy, field_height);
    }
}

/// Ball component - the volley ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,   // top-left corner
    pub size: Vec2,  // square in practice
    pub vel: Vec2,   // units per tick
    pub spawn: Vec2, // where every serve starts
    pub max_speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2, max_speed: f32) -> Self {
        Self {
            pos,
            size,
            vel,
            spawn: pos,
            max_speed,
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Integrate one tick and bounce off the top/bottom walls.
    ///
    /// Returns `true` when a wall was hit. Side walls are left to scoring.
    pub fn advance(&mut self, field: &Field) -> bool {
        self.pos += self.vel;

        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
            true
        } else if self.pos.y + self.size.y >= field.height {
            self.pos.y = field.height - self.size.y;
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Resolve overlap with `a`, then `b`. At most one paddle is handled per call.
    ///
    /// Returns the side of the paddle that was hit.
    pub fn check_collision(&mut self, a: &Paddle, b: &Paddle) -> Option<Side> {
        let bounds = self.bounding_box();
        let paddle = if bounds.overlaps(&a.bounding_box()) {
            a
        } else if bounds.overlaps(&b.bounding_box()) {
            b
        } else {
            return None;
        };

        self.deflect_from(paddle);
        Some(paddle.side)
    }

    fn deflect_from(&mut self, paddle: &Paddle) {
        let paddle_box = paddle.bounding_box();

        // -1 at the top tip, 1 at the bottom tip (a bit beyond for corner hits)
        let offset = (self.center_y() - paddle.center_y()) / (paddle.size.y / 2.0);
        let speed_x = self.vel.x.abs() + Params::BALL_SPEED_INCREASE;

        // Push out of the paddle so the next tick cannot re-trigger
        match paddle.side {
            Side::Left => {
                self.pos.x = paddle_box.right();
                self.vel.x = speed_x;
            }
            Side::Right => {
                self.pos.x = paddle_box.left() - self.size.x;
                self.vel.x = -speed_x;
            }
        }
        self.vel.y += offset * Params::BALL_SPIN_FACTOR;
        self.apply_speed_cap();
    }

    fn apply_speed_cap(&mut self) {
        self.vel.x = self.vel.x.clamp(-self.max_speed, self.max_speed);
        self.vel.y = self.vel.y.clamp(-self.max_speed, self.max_speed);
    }

    /// Serve again from the spawn point, toward the other side
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.pos = self.spawn;
        self.vel.x = -self.vel.x;
        self.vel.y = rng.pick(&Params::BALL_SERVE_VY);
    }
}

/// Marker for the paddle driven by the human player's keys
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerControlled;

/// Autonomous tracking policy attached to a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AutoTrack {
    pub max_step: Option<f32>,
    pub error: f32,
}
