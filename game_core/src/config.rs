use crate::params::Params;
use glam::Vec2;

use crate::components::{PaddleStyle, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub table_margin: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub bounce_speed_up: f32,
    pub spin_strength: f32,
    pub serve_vy_spread: f32,
    pub reset_vx_min: f32,
    pub reset_vx_max: f32,
    pub reset_vy_spread: f32,
    pub track_factor: f32,
    pub track_max_step: f32,
    pub track_deadzone: f32,
    pub pause_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            table_margin: Params::TABLE_MARGIN,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            bounce_speed_up: Params::BOUNCE_SPEED_UP,
            spin_strength: Params::SPIN_STRENGTH,
            serve_vy_spread: Params::SERVE_VY_SPREAD,
            reset_vx_min: Params::RESET_VX_MIN,
            reset_vx_max: Params::RESET_VX_MAX,
            reset_vy_spread: Params::RESET_VY_SPREAD,
            track_factor: Params::TRACK_FACTOR,
            track_max_step: Params::TRACK_MAX_STEP,
            track_deadzone: Params::TRACK_DEADZONE,
            pause_ticks: Params::PAUSE_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the playing surface (where the ball serves from)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    /// Get X position (left edge) for a paddle of the given width.
    /// Both paddles sit at a fixed margin from their near edge.
    pub fn paddle_x(&self, side: Side, width: f32) -> f32 {
        match side {
            Side::Human => self.table_margin,
            Side::Opponent => self.surface_width - self.table_margin - width,
        }
    }

    /// Clamp a paddle's top-edge Y to its travel bounds
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        y.clamp(
            self.table_margin,
            self.surface_height - self.table_margin - height,
        )
    }

    /// Width for a paddle style, from the fixed style table
    pub fn paddle_width(&self, style: PaddleStyle) -> f32 {
        match style {
            PaddleStyle::Normal => Params::PADDLE_WIDTH_NORMAL,
            PaddleStyle::Wide => Params::PADDLE_WIDTH_WIDE,
            PaddleStyle::Slim => Params::PADDLE_WIDTH_SLIM,
        }
    }
}
