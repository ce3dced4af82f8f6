use crate::{ConfigError, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub player_step: f32,
    pub ball_size: f32,
    pub ball_max_speed: f32,
    pub win_target: u32,
    /// Per-tick cap for the autonomous paddle (`None` = its own speed)
    pub ai_max_step: Option<f32>,
    /// Aim offset for the autonomous paddle, 0 = perfect tracking
    pub ai_error: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            player_step: Params::PLAYER_STEP,
            ball_size: Params::BALL_SIZE,
            ball_max_speed: Params::BALL_MAX_SPEED,
            win_target: Params::WIN_TARGET,
            ai_max_step: None,
            ai_error: 0.0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge that vertically centers a paddle in the field
    pub fn paddle_start_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(ConfigError::EmptyEntity {
                what: "paddle",
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.ball_size <= 0.0 {
            return Err(ConfigError::EmptyEntity {
                what: "ball",
                width: self.ball_size,
                height: self.ball_size,
            });
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.paddle_x(Side::Left) + self.paddle_width >= self.paddle_x(Side::Right) {
            return Err(ConfigError::FieldTooNarrow {
                field: self.field_width,
                margin: self.paddle_margin,
                paddle: self.paddle_width,
            });
        }
        if self.ball_max_speed <= 0.0 {
            return Err(ConfigError::MaxSpeed(self.ball_max_speed));
        }
        if self.win_target == 0 {
            return Err(ConfigError::WinTarget);
        }
        Ok(())
    }
}
