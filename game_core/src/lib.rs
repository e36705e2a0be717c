pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the table tennis simulation by one tick.
///
/// The pointer sample lands first (the pointer listener stays live during
/// the post-goal pause); unless paused, the opponent controller and the
/// physics/scoring pipeline then run. The caller renders before stepping,
/// so the pause never freezes the picture.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    pause: &mut PauseTimer,
    pointer: &PointerTrack,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Sample the latest pointer position onto the human paddle
    apply_pointer(world, pointer, config);

    // 2. Sit out the post-goal pause
    if pause.tick() {
        return;
    }

    // 3. Opponent paddle tracks the ball
    track_ball(world, config);

    // 4. Integrate ball motion
    move_ball(world);

    // 5. Resolve wall and paddle collisions
    check_collisions(world, config, events);

    // 6. Detect goals (ball exited the surface)
    check_scoring(world, config, score, events, pause, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity with a fresh serve
pub fn create_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    world.spawn((Ball::serve(config, rng),))
}

/// Apply a paddle style selection: both paddles take the style's width.
/// Horizontal positions follow automatically, since X is derived from the
/// side and width at a fixed margin from the near edge.
pub fn set_paddle_style(world: &mut World, config: &Config, style: PaddleStyle) {
    let width = config.paddle_width(style);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.width = width;
    }
}
