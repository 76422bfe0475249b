//! Session state: the frame loop's single source of truth
//!
//! Everything the original kept in closure-captured globals (score, pause
//! flag, ski counter, the rhino wake-up threshold) lives here instead,
//! next to the three entities and the session RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::field::ObstacleField;
use super::rhino::Rhino;
use super::skier::Skier;
use super::sprites::SpriteMetrics;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Frame loop advancing
    Playing,
    /// Frame scheduling gated; no state advances
    Paused,
    /// A terminal condition tripped; see [`GameState::cause`]
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    SkierCrashed,
    RhinoHasEaten,
}

/// Complete per-session game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every stochastic decision draws from here
    pub rng: Pcg32,
    /// Viewport size in CSS pixels
    pub viewport: Vec2,
    pub phase: GamePhase,
    pub cause: Option<GameOverCause>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Consecutive-ish descent ticks; feeds the rhino wake-up check.
    /// Resets when the skier stops, but only while the rhino still sleeps.
    pub ski_ticks: u32,
    /// Descent ticks after which the rhino gives chase, drawn uniformly
    /// from [RHINO_WAKEUP_MIN, RHINO_WAKEUP_MAX] per session
    pub rhino_wakeup: u32,
    pub skier: Skier,
    pub rhino: Rhino,
    pub field: ObstacleField,
}

impl GameState {
    /// Create a new session. Call [`GameState::start`] once assets are
    /// loaded to seed the slope.
    pub fn new(seed: u64, viewport: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rhino_wakeup = rng.random_range(RHINO_WAKEUP_MIN..=RHINO_WAKEUP_MAX);

        Self {
            seed,
            rng,
            viewport,
            phase: GamePhase::Playing,
            cause: None,
            score: 0,
            time_ticks: 0,
            ski_ticks: 0,
            rhino_wakeup,
            skier: Skier::new(),
            rhino: Rhino::new(viewport),
            field: ObstacleField::new(viewport),
        }
    }

    /// Seed the initial obstacle field. Needs sprite dimensions, so it
    /// runs after the preload completes (load-before-play).
    pub fn start(&mut self, metrics: &dyn SpriteMetrics) {
        self.field.place_initial(&mut self.rng, metrics);
        log::info!(
            "session started: seed {}, {} obstacles, rhino wakes after {} ticks",
            self.seed,
            self.field.len(),
            self.rhino_wakeup
        );
    }

    /// Restore the session to its starting state in place: entities back
    /// to their initial fields, counters zeroed, a fresh rhino threshold,
    /// and a freshly seeded slope. The RNG stream continues - a restarted
    /// run is a new run, not a replay.
    pub fn reset(&mut self, metrics: &dyn SpriteMetrics) {
        self.phase = GamePhase::Playing;
        self.cause = None;
        self.score = 0;
        self.time_ticks = 0;
        self.ski_ticks = 0;
        self.rhino_wakeup = self.rng.random_range(RHINO_WAKEUP_MIN..=RHINO_WAKEUP_MAX);
        self.skier.reset();
        self.rhino.reset();
        self.field.reset();
        self.field.place_initial(&mut self.rng, metrics);
        log::info!("session reset");
    }

    /// The ski counter has passed the wake-up threshold: the rhino is in
    /// play (and stays in play - the counter can no longer reset)
    pub fn rhino_awake(&self) -> bool {
        self.ski_ticks > self.rhino_wakeup
    }

    /// Pause is disallowed mid-jump, post-crash, and while the rhino eats
    pub fn can_pause(&self) -> bool {
        !self.skier.is_crashed() && !self.skier.is_jumping() && !self.rhino.is_eating()
    }

    pub(crate) fn game_over(&mut self, cause: GameOverCause) {
        if self.phase != GamePhase::GameOver {
            log::info!("game over: {:?}, final score {}", cause, self.score);
            self.phase = GamePhase::GameOver;
            self.cause = Some(cause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprites::FixedMetrics;

    const METRICS: FixedMetrics = FixedMetrics(Vec2::new(40.0, 60.0));

    #[test]
    fn test_new_session_draws_threshold_in_range() {
        for seed in 0..50 {
            let state = GameState::new(seed, Vec2::new(800.0, 500.0));
            assert!((RHINO_WAKEUP_MIN..=RHINO_WAKEUP_MAX).contains(&state.rhino_wakeup));
        }
    }

    #[test]
    fn test_start_seeds_the_slope() {
        let mut state = GameState::new(1, Vec2::new(800.0, 500.0));
        assert!(state.field.is_empty());
        state.start(&METRICS);
        assert!(!state.field.is_empty());
    }

    #[test]
    fn test_reset_restores_documented_initial_values() {
        let mut state = GameState::new(1, Vec2::new(800.0, 500.0));
        state.start(&METRICS);

        state.score = 991;
        state.ski_ticks = 600;
        state.time_ticks = 4096;
        state.skier.crash();
        state.game_over(GameOverCause::SkierCrashed);

        state.reset(&METRICS);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.cause, None);
        assert_eq!(state.score, 0);
        assert_eq!(state.ski_ticks, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(!state.skier.is_crashed());
        assert!(!state.rhino.is_active());
        assert!((5..=7).contains(&state.field.len()));
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = GameState::new(777, Vec2::new(800.0, 500.0));
        let b = GameState::new(777, Vec2::new(800.0, 500.0));
        assert_eq!(a.rhino_wakeup, b.rhino_wakeup);
    }
}
