use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Scripted opponent: move the paddle toward the ball's Y, capped by a
/// fraction of the ball's base speed and an absolute per-tick step, with a
/// dead-zone when already close. The lag and caps are difficulty tuning.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_data = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| (ball.pos.y, ball.speed))
    };

    let (ball_y, ball_speed) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let center = paddle.center_y();
        let dist = (center - ball_y).abs();
        if dist < config.track_deadzone {
            continue;
        }

        let step = (ball_speed * config.track_factor)
            .min(dist)
            .min(config.track_max_step);
        if center < ball_y {
            paddle.y += step;
        } else {
            paddle.y -= step;
        }

        paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
    }
}
