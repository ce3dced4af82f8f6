/// Game tuning parameters for the volley game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 540.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side wall
    pub const PADDLE_SPEED: f32 = 7.0; // default autonomous step per tick
    pub const PLAYER_STEP: f32 = 10.0; // per held key, per tick

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SERVE_VX: [f32; 2] = [-5.0, 5.0];
    pub const BALL_SERVE_VY: [f32; 2] = [-3.0, 3.0];
    pub const BALL_MAX_SPEED: f32 = 11.0; // per axis
    pub const BALL_SPEED_INCREASE: f32 = 0.5; // added to |vx| on every paddle hit
    pub const BALL_SPIN_FACTOR: f32 = 3.0; // vy change at the paddle tip

    // Score
    pub const WIN_TARGET: u32 = 5; // First to 5 wins

    // Session
    pub const FPS: u32 = 60;
    pub const MENU_POLL_MS: u64 = 10;
}
