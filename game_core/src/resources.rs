/// Game score tracking. Counters only ever go up within a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_human(&mut self) {
        self.human += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub human_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn score_changed(&self) -> bool {
        self.human_scored || self.opponent_scored
    }
}

/// Post-goal pause countdown. While running, the opponent controller and
/// physics are suspended; rendering and pointer sampling continue.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseTimer {
    pub ticks_left: u32,
}

impl PauseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, ticks: u32) {
        self.ticks_left = ticks;
    }

    /// Advance the countdown by one tick. Returns true if this tick is
    /// still inside the pause interval.
    pub fn tick(&mut self) -> bool {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_paused(&self) -> bool {
        self.ticks_left > 0
    }
}

/// Latest pointer position over the surface, in surface-local Y.
/// Last write wins; the value is sampled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTrack {
    pub y: Option<f32>,
}

impl PointerTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, y: f32) {
        self.y = Some(y);
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increments() {
        let mut score = Score::new();
        score.increment_human();
        score.increment_human();
        score.increment_opponent();
        assert_eq!(score.human, 2);
        assert_eq!(score.opponent, 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.human_scored = true;
        events.ball_hit_wall = true;
        assert!(events.score_changed());

        events.clear();

        assert!(!events.human_scored);
        assert!(!events.opponent_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.score_changed());
    }

    #[test]
    fn test_pause_timer_counts_down() {
        let mut pause = PauseTimer::new();
        assert!(!pause.tick(), "Fresh timer should not pause");

        pause.start(3);
        assert!(pause.is_paused());
        assert!(pause.tick());
        assert!(pause.tick());
        assert!(pause.tick());
        assert!(!pause.tick(), "Timer should expire after three ticks");
        assert!(!pause.is_paused());
    }

    #[test]
    fn test_pointer_last_write_wins() {
        let mut pointer = PointerTrack::new();
        assert_eq!(pointer.y, None);
        pointer.set(120.0);
        pointer.set(340.0);
        assert_eq!(pointer.y, Some(340.0));
    }
}
