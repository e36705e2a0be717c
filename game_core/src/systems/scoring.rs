use crate::{Ball, Config, Events, GameRng, PauseTimer, Score};
use hecs::World;

/// Detect goals: the ball's center crossing past either vertical edge.
/// A goal increments one score, resets the ball to center with a fresh
/// randomized velocity, and starts the post-goal pause countdown.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    pause: &mut PauseTimer,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            // Past the human's edge: opponent scores
            score.increment_opponent();
            events.opponent_scored = true;
            ball.reset(config, rng);
            pause.start(config.pause_ticks);
        } else if ball.pos.x > config.surface_width {
            // Past the opponent's edge: human scores
            score.increment_human();
            events.human_scored = true;
            ball.reset(config, rng);
            pause.start(config.pause_ticks);
        }
    }
}
