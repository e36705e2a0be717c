//! Frame scene building.
//!
//! Each frame is first described as a plain display list, then played back
//! onto the canvas. Building is a pure function of game state and theme,
//! so the render output for a given state is checkable without a browser.

use game_core::Side;
use glam::Vec2;

use crate::game::LocalGame;
use crate::theme::{self, Theme};

const BORDER_WIDTH: f32 = 4.0;
const MARGIN_LINE_WIDTH: f32 = 2.0;
const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 18.0;

/// A single 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        w: f32,
        h: f32,
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'static str,
        line_width: f32,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        color: &'static str,
        line_width: f32,
        dash: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'static str,
    },
    FillCircle {
        center: Vec2,
        r: f32,
        color: &'static str,
    },
}

/// Build the display list for the current frame: table, net, margin
/// lines, both paddles, and the ball.
pub fn build(game: &LocalGame, theme: Theme) -> Vec<DrawOp> {
    let config = &game.config;
    let (w, h) = (config.surface_width, config.surface_height);
    let margin = config.table_margin;

    let mut ops = Vec::with_capacity(8);

    ops.push(DrawOp::Clear { w, h });

    // Table border
    ops.push(DrawOp::StrokeRect {
        x: 2.0,
        y: 2.0,
        w: w - 4.0,
        h: h - 4.0,
        color: theme.border_color(),
        line_width: BORDER_WIDTH,
    });

    // Net
    ops.push(DrawOp::DashedLine {
        from: Vec2::new(w / 2.0, margin),
        to: Vec2::new(w / 2.0, h - margin),
        color: theme.net_color(),
        line_width: NET_WIDTH,
        dash: NET_DASH,
    });

    // Table margin lines
    ops.push(DrawOp::StrokeRect {
        x: margin,
        y: margin,
        w: w - 2.0 * margin,
        h: h - 2.0 * margin,
        color: theme.margin_color(),
        line_width: MARGIN_LINE_WIDTH,
    });

    for (side, color) in [
        (Side::Human, theme::HUMAN_PADDLE_COLOR),
        (Side::Opponent, theme::OPPONENT_PADDLE_COLOR),
    ] {
        if let Some(paddle) = game.paddle(side) {
            ops.push(DrawOp::FillRect {
                x: config.paddle_x(side, paddle.width),
                y: paddle.y,
                w: paddle.width,
                h: paddle.height,
                color,
            });
        }
    }

    if let Some(ball) = game.ball() {
        ops.push(DrawOp::FillCircle {
            center: ball.pos,
            r: ball.radius,
            color: theme::BALL_COLOR,
        });
    }

    ops
}
