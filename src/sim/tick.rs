//! Fixed timestep simulation tick
//!
//! Core game loop that advances one frame deterministically: input, skier
//! movement, spawning, collision, scoring, rhino pursuit, terminal checks.
//! All animation timing is tick counters inside the entities; nothing here
//! runs on wall-clock timers.

use super::entity::Entity;
use super::field::CollisionOutcome;
use super::skier::Direction;
use super::sprites::SpriteMetrics;
use super::state::{GameOverCause, GamePhase, GameState};
use crate::consts::*;

/// Input events for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steer/strafe left
    pub left: bool,
    /// Steer/strafe right
    pub right: bool,
    /// Point straight downhill
    pub down: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, metrics: &dyn SpriteMetrics) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing if state.can_pause() => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
            }
            _ => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Directional input. Locked out while airborne; a strafe keypress at
    // the end of the steering arc also runs the edge-band spawn gate,
    // since strafing uncovers terrain the per-tick spawn check never sees.
    if !state.skier.is_jumping() {
        if input.left {
            let was = state.skier.direction;
            state.skier.steer_left();
            if was == Direction::Left {
                state
                    .field
                    .place_new(Direction::Left, state.skier.pos, &mut state.rng);
            }
        }
        if input.right {
            let was = state.skier.direction;
            state.skier.steer_right();
            if was == Direction::Right {
                state
                    .field
                    .place_new(Direction::Right, state.skier.pos, &mut state.rng);
            }
        }
        if input.down {
            state.skier.point_down();
        }
    }

    // While the rhino eats, the world holds still: no movement, spawning,
    // collision, or scoring. Only the rhino's animation advances below.
    if !state.rhino.is_eating() {
        state.skier.advance();

        state.field.check_to_place(&state.skier, &mut state.rng);

        match state.field.check_skier_collision(&mut state.skier, metrics) {
            Some(CollisionOutcome::Launched) => log::debug!("launched off a ramp"),
            Some(CollisionOutcome::Crashed) => log::info!("skier hit an obstacle"),
            None => {}
        }

        if state.skier.is_jumping() {
            state.score += BONUS_SCORE_INCREMENT;
        } else if state.skier.is_moving() {
            state.score += SCORE_INCREMENT;
        }
    }

    // Ski counter: sustained descent wakes the rhino. Stopping only helps
    // while it still sleeps.
    if state.skier.is_moving() {
        state.ski_ticks += 1;
    } else if !state.rhino.is_active() {
        state.ski_ticks = 0;
    }

    if state.rhino_awake() {
        state.rhino.advance();
    }

    // Terminal conditions
    if state.skier.is_crashed() {
        state.game_over(GameOverCause::SkierCrashed);
    } else if state.rhino.has_eaten() {
        state.game_over(GameOverCause::RhinoHasEaten);
    }
}
