//! Slope obstacles: trees, rocks, and jump ramps

use glam::Vec2;
use rand::Rng;

use super::entity::Entity;
use super::geom::Rect;
use super::sprites::{SpriteId, SpriteMetrics};
use crate::consts::COLLISION_BAND;

/// Visual subtype, chosen uniformly at creation and fixed for the
/// obstacle's lifetime. The subtype decides collision semantics too:
/// ramps launch the skier, everything else crashes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Tree,
    TreeCluster,
    Rock1,
    Rock2,
    JumpRamp,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 5] = [
        ObstacleKind::Tree,
        ObstacleKind::TreeCluster,
        ObstacleKind::Rock1,
        ObstacleKind::Rock2,
        ObstacleKind::JumpRamp,
    ];

    /// Uniform draw over all subtypes
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn sprite(&self) -> SpriteId {
        match self {
            ObstacleKind::Tree => SpriteId::Tree,
            ObstacleKind::TreeCluster => SpriteId::TreeCluster,
            ObstacleKind::Rock1 => SpriteId::Rock1,
            ObstacleKind::Rock2 => SpriteId::Rock2,
            ObstacleKind::JumpRamp => SpriteId::JumpRamp,
        }
    }
}

/// A stationary slope feature at a world position
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            kind: ObstacleKind::random(rng),
        }
    }

    /// Hitting this launches the skier instead of crashing them
    pub fn is_ramp(&self) -> bool {
        self.kind == ObstacleKind::JumpRamp
    }

    /// On-screen sprite size
    pub fn size(&self, metrics: &dyn SpriteMetrics) -> Vec2 {
        metrics.dimensions(self.kind.sprite())
    }

    /// World y of the sprite's lower edge; the z-order sort key (objects
    /// further down the slope draw on top)
    pub fn lower_edge(&self, metrics: &dyn SpriteMetrics) -> f32 {
        self.pos.y + self.size(metrics).y
    }

    /// Hit-test rectangle: a thin band at the sprite's base, not the full
    /// sprite. A skier brushing a treetop shouldn't crash.
    pub fn collision_band(&self, metrics: &dyn SpriteMetrics) -> Rect {
        let size = self.size(metrics);
        Rect {
            left: self.pos.x,
            right: self.pos.x + size.x,
            top: self.pos.y + size.y - COLLISION_BAND,
            bottom: self.pos.y + size.y,
        }
    }
}

impl Entity for Obstacle {
    fn sprite(&self) -> SpriteId {
        self.kind.sprite()
    }

    // Obstacles are stationary
    fn advance(&mut self) {}

    fn reset(&mut self) {
        self.pos = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprites::FixedMetrics;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_kind_covers_all_subtypes() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let kind = ObstacleKind::random(&mut rng);
            seen[ObstacleKind::ALL.iter().position(|k| *k == kind).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_only_ramps_are_ramps() {
        for kind in ObstacleKind::ALL {
            let obstacle = Obstacle {
                pos: Vec2::ZERO,
                kind,
            };
            assert_eq!(obstacle.is_ramp(), kind == ObstacleKind::JumpRamp);
        }
    }

    #[test]
    fn test_collision_band_hugs_the_base() {
        let metrics = FixedMetrics(Vec2::new(40.0, 60.0));
        let obstacle = Obstacle {
            pos: Vec2::new(100.0, 200.0),
            kind: ObstacleKind::Tree,
        };

        let band = obstacle.collision_band(&metrics);
        assert_eq!(band.left, 100.0);
        assert_eq!(band.right, 140.0);
        assert_eq!(band.top, 260.0 - COLLISION_BAND);
        assert_eq!(band.bottom, 260.0);
        assert_eq!(obstacle.lower_edge(&metrics), 260.0);
    }
}
