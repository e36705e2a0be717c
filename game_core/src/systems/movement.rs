use crate::Ball;
use hecs::World;

/// Integrate ball position over one tick (unit time step, no sub-stepping)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
