use crate::{Config, Paddle, PointerTrack, Side};
use hecs::World;

/// Apply the latest pointer sample to the human paddle: center the paddle
/// on the pointer's Y, then clamp to the travel bounds. Runs every tick,
/// pause or not, since the pointer listener is always live.
pub fn apply_pointer(world: &mut World, pointer: &PointerTrack, config: &Config) {
    let pointer_y = match pointer.y {
        Some(y) => y,
        None => return, // No pointer movement seen yet
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Human {
            let y = pointer_y - paddle.height / 2.0;
            paddle.y = config.clamp_paddle_y(y, paddle.height);
        }
    }
}
