/// Fixed tuning values for the table tennis simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;
    pub const TABLE_MARGIN: f32 = 30.0;

    // Paddles
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_WIDTH_NORMAL: f32 = 12.0;
    pub const PADDLE_WIDTH_WIDE: f32 = 24.0;
    pub const PADDLE_WIDTH_SLIM: f32 = 8.0;

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED: f32 = 7.0;
    pub const BOUNCE_SPEED_UP: f32 = 1.05; // Multiply |vx| on every paddle hit
    pub const SPIN_STRENGTH: f32 = 4.0; // vy gain per unit of impact offset

    // Serve (initial ball) and round-reset velocity ranges
    pub const SERVE_VY_SPREAD: f32 = 3.0; // vy uniform in [-3, 3)
    pub const RESET_VX_MIN: f32 = 6.0;
    pub const RESET_VX_MAX: f32 = 8.0;
    pub const RESET_VY_SPREAD: f32 = 5.0; // vy uniform in [-5, 5)

    // Opponent controller
    pub const TRACK_FACTOR: f32 = 0.48; // Fraction of ball base speed
    pub const TRACK_MAX_STEP: f32 = 8.0; // Absolute per-tick cap
    pub const TRACK_DEADZONE: f32 = 10.0; // No movement within this distance of the ball

    // Post-goal pause, in ticks (900 ms at the nominal 60 Hz frame rate)
    pub const PAUSE_TICKS: u32 = 54;
}
