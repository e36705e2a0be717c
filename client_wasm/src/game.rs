//! Local game wrapper: owns the simulation world and its resources.

use game_core::{
    create_ball, create_paddle, set_paddle_style, step, Ball, Config, Events, GameRng, Paddle,
    PaddleStyle, PauseTimer, PointerTrack, Score, Side,
};
use hecs::World;

pub struct LocalGame {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub pause: PauseTimer,
    pub pointer: PointerTrack,
    pub rng: GameRng,
}

impl LocalGame {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Human, &config);
        create_paddle(&mut world, Side::Opponent, &config);
        create_ball(&mut world, &config, &mut rng);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            pause: PauseTimer::new(),
            pointer: PointerTrack::new(),
            rng,
        }
    }

    /// Advance the simulation one tick
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.pause,
            &self.pointer,
            &mut self.rng,
        );
    }

    /// Record the latest surface-local pointer Y (last write wins)
    pub fn set_pointer_y(&mut self, y: f32) {
        self.pointer.set(y);
    }

    /// Apply a style selector value; unknown keys are ignored
    pub fn select_style(&mut self, key: &str) {
        if let Some(style) = PaddleStyle::from_key(key) {
            set_paddle_style(&mut self.world, &self.config, style);
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}
