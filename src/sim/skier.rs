//! The skier and its directional state machine

use glam::Vec2;

use super::entity::Entity;
use super::geom::Rect;
use super::sprites::{SKIER_JUMP, SpriteId, SpriteMetrics};
use crate::consts::*;
use crate::diagonal_step;

/// Skier facing. Steering left walks toward `Left`, steering right toward
/// `Right`; `Crashed` and `Jump` sit outside the steering arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Crashed,
    Left,
    LeftDown,
    Down,
    RightDown,
    Right,
    Jump,
}

/// The player. Position is in world units; the camera is glued to it, so
/// the skier itself always renders at the viewport center.
#[derive(Debug, Clone)]
pub struct Skier {
    pub pos: Vec2,
    pub direction: Direction,
    pub speed: f32,
    /// Ticks elapsed in the current jump; meaningful only while airborne
    jump_ticks: u32,
}

impl Skier {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            direction: Direction::Right,
            speed: SKIER_SPEED,
            jump_ticks: 0,
        }
    }

    /// Steer one notch toward LEFT. Already-LEFT strafes in place, CRASHED
    /// recovers to LEFT. Ignored mid-jump: steering is input-driven and
    /// input is locked out while airborne.
    pub fn steer_left(&mut self) {
        match self.direction {
            Direction::Jump => {}
            Direction::Left => self.pos.x -= self.speed,
            Direction::Crashed => self.direction = Direction::Left,
            Direction::LeftDown => self.direction = Direction::Left,
            Direction::Down => self.direction = Direction::LeftDown,
            Direction::RightDown => self.direction = Direction::Down,
            Direction::Right => self.direction = Direction::RightDown,
        }
    }

    /// Steer one notch toward RIGHT, the mirror of `steer_left` - except
    /// that CRASHED steps to LEFT here too, one notch up from the bottom
    /// of the arc.
    pub fn steer_right(&mut self) {
        match self.direction {
            Direction::Jump => {}
            Direction::Right => self.pos.x += self.speed,
            Direction::Crashed => self.direction = Direction::Left,
            Direction::Left => self.direction = Direction::LeftDown,
            Direction::LeftDown => self.direction = Direction::Down,
            Direction::Down => self.direction = Direction::RightDown,
            Direction::RightDown => self.direction = Direction::Right,
        }
    }

    /// Point straight downhill. Ignored mid-jump.
    pub fn point_down(&mut self) {
        if self.direction != Direction::Jump {
            self.direction = Direction::Down;
        }
    }

    /// Begin the jump sequence. The jump resolves back to DOWN on its own
    /// after the four-sprite animation completes; see [`Entity::advance`].
    pub fn start_jump(&mut self) {
        self.direction = Direction::Jump;
        self.jump_ticks = 0;
    }

    /// Terminal until reset
    pub fn crash(&mut self) {
        self.direction = Direction::Crashed;
    }

    pub fn is_jumping(&self) -> bool {
        self.direction == Direction::Jump
    }

    pub fn is_crashed(&self) -> bool {
        self.direction == Direction::Crashed
    }

    /// Pointed downhill (LEFT_DOWN, DOWN, or RIGHT_DOWN) - the states that
    /// translate every tick, accrue score, and feed the ski counter
    pub fn is_moving(&self) -> bool {
        matches!(
            self.direction,
            Direction::LeftDown | Direction::Down | Direction::RightDown
        )
    }

    /// Index into the jump sprite sequence for the current tick
    fn jump_frame(&self) -> usize {
        ((self.jump_ticks / JUMP_FRAME_TICKS) as usize).min(SKIER_JUMP.len() - 1)
    }

    /// Bounding rectangle for hit testing: the viewport center shifted by
    /// the skier's own offset, narrowed to a thin band above the sprite's
    /// lower edge. Obstacle bands live in the same skier-relative frame.
    pub fn collision_rect(&self, metrics: &dyn SpriteMetrics, viewport: Vec2) -> Rect {
        let size = metrics.dimensions(self.sprite());
        Rect {
            left: self.pos.x + viewport.x / 2.0,
            right: self.pos.x + size.x + viewport.x / 2.0,
            top: self.pos.y + size.y - COLLISION_BAND + viewport.y / 2.0,
            bottom: self.pos.y + size.y + viewport.y / 2.0,
        }
    }
}

impl Default for Skier {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Skier {
    fn sprite(&self) -> SpriteId {
        match self.direction {
            Direction::Crashed => SpriteId::SkierCrash,
            Direction::Left => SpriteId::SkierLeft,
            Direction::LeftDown => SpriteId::SkierLeftDown,
            Direction::Down => SpriteId::SkierDown,
            Direction::RightDown => SpriteId::SkierRightDown,
            Direction::Right => SpriteId::SkierRight,
            Direction::Jump => SKIER_JUMP[self.jump_frame()],
        }
    }

    fn advance(&mut self) {
        match self.direction {
            Direction::LeftDown => {
                self.pos.x -= diagonal_step(self.speed);
                self.pos.y += diagonal_step(self.speed);
            }
            Direction::RightDown => {
                self.pos.x += diagonal_step(self.speed);
                self.pos.y += diagonal_step(self.speed);
            }
            Direction::Down | Direction::Jump => {
                self.pos.y += self.speed;
            }
            // LEFT/RIGHT move on input only; CRASHED doesn't move at all
            Direction::Crashed | Direction::Left | Direction::Right => {}
        }

        if self.direction == Direction::Jump {
            self.jump_ticks += 1;
            if self.jump_ticks >= JUMP_FRAME_TICKS * SKIER_JUMP.len() as u32 {
                self.direction = Direction::Down;
            }
        }
    }

    fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.direction = Direction::Right;
        self.speed = SKIER_SPEED;
        self.jump_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprites::FixedMetrics;

    #[test]
    fn test_steer_right_walks_the_arc() {
        let mut skier = Skier::new();
        skier.direction = Direction::Left;

        skier.steer_right();
        assert_eq!(skier.direction, Direction::LeftDown);
        skier.steer_right();
        assert_eq!(skier.direction, Direction::Down);
        skier.steer_right();
        assert_eq!(skier.direction, Direction::RightDown);
        skier.steer_right();
        assert_eq!(skier.direction, Direction::Right);
    }

    #[test]
    fn test_steer_right_at_right_strafes() {
        let mut skier = Skier::new();
        skier.direction = Direction::Right;
        let x = skier.pos.x;

        skier.steer_right();
        assert_eq!(skier.direction, Direction::Right);
        assert_eq!(skier.pos.x, x + SKIER_SPEED);
    }

    #[test]
    fn test_steer_left_at_left_strafes() {
        let mut skier = Skier::new();
        skier.direction = Direction::Left;

        skier.steer_left();
        assert_eq!(skier.direction, Direction::Left);
        assert_eq!(skier.pos.x, -SKIER_SPEED);
    }

    #[test]
    fn test_crashed_recovers_to_left_from_either_key() {
        let mut skier = Skier::new();
        skier.crash();
        skier.steer_left();
        assert_eq!(skier.direction, Direction::Left);

        skier.crash();
        skier.steer_right();
        assert_eq!(skier.direction, Direction::Left);
    }

    #[test]
    fn test_diagonal_move_rounds_per_axis() {
        let mut skier = Skier::new();
        skier.direction = Direction::RightDown;

        skier.advance();
        // round(8 / sqrt(2)) = 6 on both axes
        assert_eq!(skier.pos, Vec2::new(6.0, 6.0));

        skier.direction = Direction::LeftDown;
        skier.advance();
        assert_eq!(skier.pos, Vec2::new(0.0, 12.0));
    }

    #[test]
    fn test_down_and_jump_move_at_full_speed() {
        let mut skier = Skier::new();
        skier.direction = Direction::Down;
        skier.advance();
        assert_eq!(skier.pos, Vec2::new(0.0, 8.0));

        skier.start_jump();
        skier.advance();
        assert_eq!(skier.pos, Vec2::new(0.0, 16.0));
    }

    #[test]
    fn test_jump_resolves_to_down_after_animation() {
        let mut skier = Skier::new();
        skier.start_jump();

        let total = JUMP_FRAME_TICKS * SKIER_JUMP.len() as u32;
        for _ in 0..total - 1 {
            skier.advance();
            assert!(skier.is_jumping());
        }
        skier.advance();
        assert_eq!(skier.direction, Direction::Down);
    }

    #[test]
    fn test_jump_walks_all_four_sprites() {
        let mut skier = Skier::new();
        skier.start_jump();

        let mut seen = Vec::new();
        while skier.is_jumping() {
            let sprite = skier.sprite();
            if seen.last() != Some(&sprite) {
                seen.push(sprite);
            }
            skier.advance();
        }
        assert_eq!(seen, SKIER_JUMP.to_vec());
    }

    #[test]
    fn test_steering_locked_out_mid_jump() {
        let mut skier = Skier::new();
        skier.start_jump();
        let pos = skier.pos;

        skier.steer_left();
        skier.steer_right();
        skier.point_down();
        assert!(skier.is_jumping());
        assert_eq!(skier.pos, pos);
    }

    #[test]
    fn test_collision_rect_is_a_base_band() {
        let metrics = FixedMetrics(Vec2::new(30.0, 44.0));
        let skier = Skier::new();
        let rect = skier.collision_rect(&metrics, Vec2::new(800.0, 500.0));

        assert_eq!(rect.left, 400.0);
        assert_eq!(rect.right, 430.0);
        assert_eq!(rect.top, 250.0 + 44.0 - COLLISION_BAND);
        assert_eq!(rect.bottom, 250.0 + 44.0);
    }

    #[test]
    fn test_reset_restores_initial_fields() {
        let mut skier = Skier::new();
        skier.direction = Direction::Down;
        for _ in 0..10 {
            skier.advance();
        }
        skier.crash();

        skier.reset();
        assert_eq!(skier.pos, Vec2::ZERO);
        assert_eq!(skier.direction, Direction::Right);
        assert_eq!(skier.speed, SKIER_SPEED);
    }
}
