use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Resolve ball collisions with the top/bottom margins and both paddles.
/// Wall bounces are perfectly elastic; paddle hits reflect and speed up
/// the horizontal velocity and add spin from the impact offset.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Snapshot paddle geometry before taking the mutable ball borrow
    let paddles: Vec<(Side, f32, f32, f32, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| {
            (
                p.side,
                config.paddle_x(p.side, p.width),
                p.y,
                p.width,
                p.height,
            )
        })
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom wall bounces: clamp back inside and invert vy
        if ball.pos.y - ball.radius < config.table_margin {
            ball.pos.y = config.table_margin + ball.radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y + ball.radius > config.surface_height - config.table_margin {
            ball.pos.y = config.surface_height - config.table_margin - ball.radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for &(side, px, py, pw, ph) in &paddles {
            // Horizontal test uses the ball's leading edge (with radius);
            // vertical test uses the bare center. A ball can therefore
            // visually clip a paddle corner, which is accepted behavior.
            let hit = match side {
                Side::Human => {
                    let lead = ball.pos.x - ball.radius;
                    lead < px + pw && lead > px && ball.pos.y > py && ball.pos.y < py + ph
                }
                Side::Opponent => {
                    let lead = ball.pos.x + ball.radius;
                    lead > px && lead < px + pw && ball.pos.y > py && ball.pos.y < py + ph
                }
            };

            if hit {
                // Flush to the paddle's front face
                ball.pos.x = match side {
                    Side::Human => px + pw + ball.radius,
                    Side::Opponent => px - ball.radius,
                };

                // Reflect and amplify horizontal velocity
                ball.vel.x *= -config.bounce_speed_up;

                // Spin: vertical kick proportional to how far off paddle
                // center the ball struck, normalized to [-1, 1]
                let rel_impact = (ball.pos.y - (py + ph / 2.0)) / (ph / 2.0);
                ball.vel.y += rel_impact * config.spin_strength;

                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Ball, Config, Events, GameRng};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let events = Events::new();
        let rng = GameRng::new(12345);
        (world, config, events, rng)
    }

    fn spawn_ball(
        world: &mut hecs::World,
        config: &Config,
        rng: &mut GameRng,
        pos: Vec2,
        vel: Vec2,
    ) -> hecs::Entity {
        let mut ball = Ball::serve(config, rng);
        ball.pos = pos;
        ball.vel = vel;
        world.spawn((ball,))
    }

    #[test]
    fn test_ball_bounces_off_top_margin() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let pos = Vec2::new(400.0, config.table_margin + config.ball_radius - 3.0);
        spawn_ball(&mut world, &config, &mut rng, pos, Vec2::new(7.0, -4.0));

        check_collisions(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.y, 4.0, "vy sign should flip");
            assert_eq!(ball.vel.x, 7.0, "vx should be unchanged");
            assert_eq!(
                ball.pos.y,
                config.table_margin + config.ball_radius,
                "Ball should be clamped back to the top boundary"
            );
        }
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_margin() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let bottom = config.surface_height - config.table_margin;
        let pos = Vec2::new(400.0, bottom - config.ball_radius + 3.0);
        spawn_ball(&mut world, &config, &mut rng, pos, Vec2::new(7.0, 4.0));

        check_collisions(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.y, -4.0, "vy sign should flip");
            assert_eq!(ball.pos.y, bottom - config.ball_radius);
        }
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_human_paddle_reflects_and_speeds_up() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let entity = create_paddle(&mut world, Side::Human, &config);
        let (px, pw, center_y) = {
            let paddle = world.get::<&Paddle>(entity).unwrap();
            (
                config.paddle_x(Side::Human, paddle.width),
                paddle.width,
                paddle.center_y(),
            )
        };

        // Leading edge just inside the paddle's front face, dead center
        let pos = Vec2::new(px + pw + config.ball_radius - 2.0, center_y);
        spawn_ball(&mut world, &config, &mut rng, pos, Vec2::new(-7.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, 7.0 * 1.05, "vx reflects and gains 5%");
            assert_eq!(ball.vel.y, 0.0, "Center hit adds no spin");
            assert_eq!(
                ball.pos.x,
                px + pw + config.ball_radius,
                "Ball sits flush to the front face"
            );
        }
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_off_center_hit_adds_spin() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let entity = create_paddle(&mut world, Side::Human, &config);
        let (px, pw, py, ph) = {
            let paddle = world.get::<&Paddle>(entity).unwrap();
            (
                config.paddle_x(Side::Human, paddle.width),
                paddle.width,
                paddle.y,
                paddle.height,
            )
        };

        // Strike three quarters of the way down the paddle
        let hit_y = py + 0.75 * ph;
        let pos = Vec2::new(px + pw + config.ball_radius - 2.0, hit_y);
        spawn_ball(&mut world, &config, &mut rng, pos, Vec2::new(-7.0, 1.0));

        check_collisions(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            // rel_impact = 0.5, so vy gains 0.5 * spin_strength
            assert_eq!(ball.vel.y, 1.0 + 0.5 * config.spin_strength);
            assert!(ball.vel.x > 0.0);
        }
    }

    #[test]
    fn test_opponent_paddle_mirrors_response() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let entity = create_paddle(&mut world, Side::Opponent, &config);
        let (ax, center_y) = {
            let paddle = world.get::<&Paddle>(entity).unwrap();
            (
                config.paddle_x(Side::Opponent, paddle.width),
                paddle.center_y(),
            )
        };

        // Leading right edge just past the opponent's front face
        let pos = Vec2::new(ax - config.ball_radius + 2.0, center_y);
        spawn_ball(&mut world, &config, &mut rng, pos, Vec2::new(7.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -7.0 * 1.05, "vx reflects toward the human side");
            assert_eq!(
                ball.pos.x,
                ax - config.ball_radius,
                "Ball sits flush to the opponent's front face"
            );
        }
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_above_paddle_passes_through() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let entity = create_paddle(&mut world, Side::Human, &config);
        let (px, pw, py) = {
            let paddle = world.get::<&Paddle>(entity).unwrap();
            (
                config.paddle_x(Side::Human, paddle.width),
                paddle.width,
                paddle.y,
            )
        };

        // Horizontally overlapping, but the center is above the paddle top.
        // The vertical test ignores the radius, so this is a miss even
        // though the ball's rim overlaps the corner.
        let pos = Vec2::new(px + pw + config.ball_radius - 2.0, py - 5.0);
        let vel = Vec2::new(-7.0, 0.0);
        spawn_ball(&mut world, &config, &mut rng, pos, vel);

        check_collisions(&mut world, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, vel, "No bounce on a corner graze");
        }
        assert!(!events.ball_hit_paddle);
    }
}
