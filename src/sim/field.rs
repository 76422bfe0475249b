//! The obstacle field: procedural placement, culling, and the
//! skier-vs-obstacle collision query
//!
//! Placement is rejection sampling inside direction-keyed bands hugging
//! the viewport edges. The minimum-separation rule is enforced at
//! placement time only; the field never re-spaces obstacles afterward.

use glam::Vec2;
use rand::Rng;

use super::draw::{DrawList, SpriteDraw};
use super::entity::Entity;
use super::obstacle::Obstacle;
use super::skier::{Direction, Skier};
use super::sprites::SpriteMetrics;
use crate::consts::*;

/// What a collision query did to the skier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Hit a ramp: jump sequence started
    Launched,
    /// Hit anything else: crashed
    Crashed,
}

/// Owns the live obstacle set for one game session
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    viewport: Vec2,
}

impl ObstacleField {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            obstacles: Vec::new(),
            viewport,
        }
    }

    /// Drop every live obstacle
    pub fn reset(&mut self) {
        self.obstacles.clear();
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Seed the slope below the skier's starting position. The count
    /// scales linearly with viewport area relative to the reference
    /// viewport, rounded up. Afterward the set is sorted by each sprite's
    /// lower edge so that objects further down the slope draw on top;
    /// the order has no gameplay meaning.
    pub fn place_initial(&mut self, rng: &mut impl Rng, metrics: &dyn SpriteMetrics) {
        let base = rng.random_range(INITIAL_OBSTACLES_MIN..=INITIAL_OBSTACLES_MAX) as f32;
        let count = (base * (self.viewport.x / REFERENCE_WIDTH) * (self.viewport.y / REFERENCE_HEIGHT))
            .ceil() as u32;

        // Lower half of the viewport plus a margin on every edge
        let min_x = -50.0;
        let max_x = self.viewport.x + 50.0;
        let min_y = self.viewport.y / 2.0 + 100.0;
        let max_y = self.viewport.y + 50.0;

        for _ in 0..count {
            self.place_random(min_x, max_x, min_y, max_y, rng);
        }

        self.obstacles
            .sort_by(|a, b| a.lower_edge(metrics).total_cmp(&b.lower_edge(metrics)));
    }

    /// Per-tick spawn check: only a downhill-moving skier uncovers new
    /// terrain, so only then do we consider placing
    pub fn check_to_place(&mut self, skier: &Skier, rng: &mut impl Rng) {
        if skier.is_moving() {
            self.place_new(skier.direction, skier.pos, rng);
        }
    }

    /// Stochastic spawn keyed by travel direction. Passes a 1-in-8 gate
    /// first (spawning every qualifying tick would wall off the slope),
    /// then drops one or two obstacles into 50-unit bands hugging the
    /// viewport edges the skier is moving toward, in skier-relative world
    /// coordinates.
    pub fn place_new(&mut self, direction: Direction, skier_pos: Vec2, rng: &mut impl Rng) {
        if rng.random_range(1..=SPAWN_GATE) != SPAWN_GATE {
            return;
        }

        let left_edge = skier_pos.x;
        let right_edge = skier_pos.x + self.viewport.x;
        let top_edge = skier_pos.y;
        let bottom_edge = skier_pos.y + self.viewport.y;

        match direction {
            Direction::Left => {
                self.place_random(left_edge - SPAWN_BAND, left_edge, top_edge, bottom_edge, rng);
            }
            Direction::LeftDown => {
                self.place_random(left_edge - SPAWN_BAND, left_edge, top_edge, bottom_edge, rng);
                self.place_random(left_edge, right_edge, bottom_edge, bottom_edge + SPAWN_BAND, rng);
            }
            Direction::Down => {
                self.place_random(left_edge, right_edge, bottom_edge, bottom_edge + SPAWN_BAND, rng);
            }
            Direction::RightDown => {
                self.place_random(right_edge, right_edge + SPAWN_BAND, top_edge, bottom_edge, rng);
                self.place_random(left_edge, right_edge, bottom_edge, bottom_edge + SPAWN_BAND, rng);
            }
            Direction::Right => {
                self.place_random(right_edge, right_edge + SPAWN_BAND, top_edge, bottom_edge, rng);
            }
            Direction::Crashed | Direction::Jump => {}
        }
    }

    fn place_random(
        &mut self,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
        rng: &mut impl Rng,
    ) {
        let pos = self.calculate_open_position(min_x, max_x, min_y, max_y, rng);
        self.obstacles.push(Obstacle::new(pos, rng));
    }

    /// Rejection sampling: draw uniform candidates inside the box until
    /// one clears the axis-aligned exclusion square around every existing
    /// obstacle. Capped at `MAX_PLACEMENT_ATTEMPTS`; a box packed so tight
    /// that the cap trips gets the last candidate as-is, trading spacing
    /// for liveness.
    pub fn calculate_open_position(
        &self,
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
        rng: &mut impl Rng,
    ) -> Vec2 {
        let mut candidate = Vec2::new(min_x, min_y);
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            candidate = Vec2::new(
                rng.random_range(min_x..=max_x),
                rng.random_range(min_y..=max_y),
            );
            let blocked = self.obstacles.iter().any(|obstacle| {
                (candidate.x - obstacle.pos.x).abs() < OBSTACLE_EXCLUSION
                    && (candidate.y - obstacle.pos.y).abs() < OBSTACLE_EXCLUSION
            });
            if !blocked {
                return candidate;
            }
        }
        log::debug!("placement attempts exhausted, accepting crowded candidate");
        candidate
    }

    /// Emit draw calls for every on-screen obstacle and cull the rest.
    /// Screen position is the obstacle's world position in the
    /// skier-centered camera, pulled back by half the sprite's own size.
    /// Drawing and culling are one fused pass over the live set.
    pub fn draw(&mut self, list: &mut DrawList, skier_pos: Vec2, metrics: &dyn SpriteMetrics) {
        let viewport = self.viewport;
        self.obstacles.retain(|obstacle| {
            let size = obstacle.size(metrics);
            let screen = obstacle.pos - skier_pos - size / 2.0;

            let visible = screen.x >= -CULL_BEFORE
                && screen.x <= viewport.x + CULL_AFTER
                && screen.y >= -CULL_BEFORE
                && screen.y <= viewport.y + CULL_AFTER;
            if visible {
                list.push(SpriteDraw {
                    sprite: obstacle.sprite(),
                    pos: screen,
                    size,
                });
            }
            visible
        });
    }

    /// Find the first obstacle whose collision band intersects the skier's
    /// rectangle and apply its effect: ramps launch, everything else
    /// crashes. Airborne skiers pass over everything.
    pub fn check_skier_collision(
        &self,
        skier: &mut Skier,
        metrics: &dyn SpriteMetrics,
    ) -> Option<CollisionOutcome> {
        let skier_rect = skier.collision_rect(metrics, self.viewport);
        let hit = self
            .obstacles
            .iter()
            .find(|obstacle| obstacle.collision_band(metrics).intersects(&skier_rect))?;

        if skier.is_jumping() {
            return None;
        }

        if hit.is_ramp() {
            skier.start_jump();
            Some(CollisionOutcome::Launched)
        } else {
            skier.crash();
            Some(CollisionOutcome::Crashed)
        }
    }
}
