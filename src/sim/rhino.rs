//! The pursuing rhino and its mode machine
//!
//! Modes progress strictly forward: SLEEP -> RUN -> EAT -> HAS_EATEN.
//! Only the RUN phase has internal churn (two sprites oscillating on a
//! fast interval). The orchestrator decides WHEN the rhino advances (the
//! ski-counter threshold); the rhino itself decides WHAT advancing means.

use glam::Vec2;

use super::entity::Entity;
use super::sprites::{RHINO_EAT, SpriteId};
use crate::consts::*;
use crate::diagonal_step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhinoMode {
    Sleep,
    Run,
    Eat,
    HasEaten,
}

/// The antagonist. Position is in screen space: it enters from just past
/// the right viewport edge, pinned at mid-height, and only closes
/// horizontal distance.
#[derive(Debug, Clone)]
pub struct Rhino {
    pub pos: Vec2,
    pub mode: RhinoMode,
    pub speed: f32,
    viewport: Vec2,
    run_frame: SpriteId,
    run_ticks: u32,
    eat_ticks: u32,
}

impl Rhino {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            pos: Vec2::new(viewport.x + RHINO_START_OFFSET, viewport.y / 2.0),
            mode: RhinoMode::Sleep,
            speed: RHINO_SPEED,
            viewport,
            run_frame: SpriteId::RhinoRunLeft,
            run_ticks: 0,
            eat_ticks: 0,
        }
    }

    /// Awake in any form
    pub fn is_active(&self) -> bool {
        self.mode != RhinoMode::Sleep
    }

    /// Eating or already done eating; both freeze the rest of the game
    pub fn is_eating(&self) -> bool {
        matches!(self.mode, RhinoMode::Eat | RhinoMode::HasEaten)
    }

    /// The terminal game-over condition
    pub fn has_eaten(&self) -> bool {
        self.mode == RhinoMode::HasEaten
    }

    /// Caught up with the skier (horizontal midpoint of the viewport)
    fn at_midpoint(&self) -> bool {
        self.pos.x <= self.viewport.x / 2.0
    }

    fn begin_eat(&mut self) {
        log::info!("rhino caught the skier");
        self.mode = RhinoMode::Eat;
        self.eat_ticks = 0;
    }

    /// Index into the eat sequence for the current tick
    fn eat_frame(&self) -> usize {
        (self.eat_ticks / EAT_FRAME_TICKS) as usize
    }
}

impl Entity for Rhino {
    fn sprite(&self) -> SpriteId {
        match self.mode {
            RhinoMode::Sleep | RhinoMode::Run => self.run_frame,
            RhinoMode::Eat => RHINO_EAT[self.eat_frame().min(RHINO_EAT.len() - 1)],
            RhinoMode::HasEaten => SpriteId::RhinoDefault,
        }
    }

    /// One tick of pursuit. Callers gate this on the ski-counter
    /// threshold; until then the rhino sleeps untouched off screen.
    fn advance(&mut self) {
        match self.mode {
            RhinoMode::Sleep | RhinoMode::Run => {
                if self.at_midpoint() {
                    self.begin_eat();
                    return;
                }
                self.pos.x -= diagonal_step(self.speed);
                if self.mode != RhinoMode::Run {
                    log::info!("rhino woke up");
                    self.mode = RhinoMode::Run;
                }
                self.run_ticks += 1;
                if self.run_ticks % RUN_TOGGLE_TICKS == 0 {
                    self.run_frame = match self.run_frame {
                        SpriteId::RhinoRunLeft => SpriteId::RhinoRunLeft2,
                        _ => SpriteId::RhinoRunLeft,
                    };
                }
            }
            RhinoMode::Eat => {
                self.eat_ticks += 1;
                if self.eat_frame() >= RHINO_EAT.len() {
                    self.mode = RhinoMode::HasEaten;
                }
            }
            RhinoMode::HasEaten => {}
        }
    }

    fn reset(&mut self) {
        self.pos = Vec2::new(self.viewport.x + RHINO_START_OFFSET, self.viewport.y / 2.0);
        self.mode = RhinoMode::Sleep;
        self.run_frame = SpriteId::RhinoRunLeft;
        self.run_ticks = 0;
        self.eat_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rhino() -> Rhino {
        Rhino::new(Vec2::new(800.0, 500.0))
    }

    #[test]
    fn test_starts_asleep_offscreen() {
        let rhino = rhino();
        assert_eq!(rhino.mode, RhinoMode::Sleep);
        assert_eq!(rhino.pos, Vec2::new(820.0, 250.0));
        assert!(!rhino.is_active());
    }

    #[test]
    fn test_first_advance_starts_running() {
        let mut rhino = rhino();
        rhino.advance();
        assert_eq!(rhino.mode, RhinoMode::Run);
        assert_eq!(rhino.pos.x, 820.0 - diagonal_step(RHINO_SPEED));
    }

    #[test]
    fn test_run_frames_oscillate() {
        let mut rhino = rhino();
        let mut seen_second = false;
        for _ in 0..RUN_TOGGLE_TICKS * 4 {
            rhino.advance();
            if rhino.sprite() == SpriteId::RhinoRunLeft2 {
                seen_second = true;
            }
        }
        assert!(seen_second);
    }

    #[test]
    fn test_reaches_midpoint_then_eats_then_has_eaten() {
        let mut rhino = rhino();

        // Distance to midpoint / per-tick step, plus slack for rounding
        let step = diagonal_step(RHINO_SPEED);
        let bound = ((820.0 - 400.0) / step) as u32 + 2;
        let mut steps = 0;
        while rhino.mode != RhinoMode::Eat {
            rhino.advance();
            steps += 1;
            assert!(steps <= bound, "rhino never reached the midpoint");
        }
        assert!(rhino.pos.x <= 400.0);

        // Exactly seven timed frames later the skier is gone
        for _ in 0..EAT_FRAME_TICKS * RHINO_EAT.len() as u32 - 1 {
            rhino.advance();
            assert_eq!(rhino.mode, RhinoMode::Eat);
        }
        rhino.advance();
        assert_eq!(rhino.mode, RhinoMode::HasEaten);
        assert!(rhino.has_eaten());
    }

    #[test]
    fn test_eat_walks_the_full_sequence() {
        let mut rhino = rhino();
        rhino.pos.x = 400.0;
        rhino.advance();
        assert_eq!(rhino.mode, RhinoMode::Eat);

        let mut seen = vec![rhino.sprite()];
        while rhino.mode == RhinoMode::Eat {
            rhino.advance();
            let sprite = rhino.sprite();
            if seen.last() != Some(&sprite) {
                seen.push(sprite);
            }
        }
        assert_eq!(seen, RHINO_EAT.to_vec());
    }

    #[test]
    fn test_has_eaten_is_terminal_until_reset() {
        let mut rhino = rhino();
        rhino.mode = RhinoMode::HasEaten;
        rhino.advance();
        assert_eq!(rhino.mode, RhinoMode::HasEaten);

        rhino.reset();
        assert_eq!(rhino.mode, RhinoMode::Sleep);
        assert_eq!(rhino.pos, Vec2::new(820.0, 250.0));
        assert_eq!(rhino.sprite(), SpriteId::RhinoRunLeft);
    }
}
