use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Pointer-controlled paddle on the left
    Human,
    /// Scripted paddle on the right
    Opponent,
}

/// Paddle width selection, applied to both paddles at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleStyle {
    Normal,
    Wide,
    Slim,
}

impl PaddleStyle {
    /// Parse the key emitted by the style selector
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "normal" => Some(Self::Normal),
            "wide" => Some(Self::Wide),
            "slim" => Some(Self::Slim),
            _ => None,
        }
    }
}

/// Paddle component. X is derived from the side and width (Config::paddle_x),
/// Y is the mutable top-edge coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Create a paddle vertically centered on the surface
    pub fn new(side: Side, config: &Config) -> Self {
        let width = config.paddle_width(PaddleStyle::Normal);
        Self {
            side,
            y: config.surface_height / 2.0 - config.paddle_height / 2.0,
            width,
            height: config.paddle_height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball component. `speed` is the scalar base speed read by the opponent
/// controller; it stays fixed while `vel.x` grows with each paddle hit.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    /// Create the ball at the surface center with a serve velocity:
    /// full base speed horizontally (random sign), mild random vertical.
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        use rand::Rng;
        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vy = rng.0.gen_range(-config.serve_vy_spread..config.serve_vy_spread);
        Self {
            pos: config.center(),
            vel: Vec2::new(sign * config.ball_speed, vy),
            radius: config.ball_radius,
            speed: config.ball_speed,
        }
    }

    /// Round reset: re-center and assign a fresh randomized velocity.
    /// Horizontal sign is random with magnitude in [reset_vx_min, reset_vx_max),
    /// vertical uniform in [-reset_vy_spread, reset_vy_spread).
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = config.center();
        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vx = rng.0.gen_range(config.reset_vx_min..config.reset_vx_max);
        let vy = rng.0.gen_range(-config.reset_vy_spread..config.reset_vy_spread);
        self.vel = Vec2::new(sign * vx, vy);
    }
}
