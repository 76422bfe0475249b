//! Frame assembly: the sim's outbound rendering surface
//!
//! The sim never touches a canvas. Each frame it assembles a [`DrawList`]
//! of sprite draws with fully resolved screen coordinates; the renderer
//! just blits them in order. Obstacle culling happens inside this pass
//! (drawing and culling are one fused sweep over the live set).

use glam::Vec2;

use super::entity::Entity;
use super::sprites::{SpriteId, SpriteMetrics};
use super::state::GameState;

/// One resolved draw call: blit `sprite` with its top-left corner at
/// `pos`, scaled to `size`, all in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub sprite: SpriteId,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Ordered draw calls for one frame; later entries draw on top
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    sprites: Vec<SpriteDraw>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, draw: SpriteDraw) {
        self.sprites.push(draw);
    }

    pub fn sprites(&self) -> &[SpriteDraw] {
        &self.sprites
    }
}

/// Build the draw list for the current state: skier centered in the
/// viewport, obstacles in skier-relative coordinates (culling the ones
/// that scrolled out), rhino pinned at mid-height once it's in play.
///
/// The skier vanishes while the rhino eats - that's the point of the
/// eating animation.
pub fn assemble_frame(state: &mut GameState, metrics: &dyn SpriteMetrics) -> DrawList {
    let mut list = DrawList::new();

    if !state.rhino.is_eating() {
        let sprite = state.skier.sprite();
        let size = metrics.dimensions(sprite);
        list.push(SpriteDraw {
            sprite,
            pos: (state.viewport - size) / 2.0,
            size,
        });
    }

    state.field.draw(&mut list, state.skier.pos, metrics);

    if state.rhino_awake() {
        let sprite = state.rhino.sprite();
        let size = metrics.dimensions(sprite);
        list.push(SpriteDraw {
            sprite,
            pos: Vec2::new(state.rhino.pos.x, (state.viewport.y - size.y) / 2.0),
            size,
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprites::FixedMetrics;

    const METRICS: FixedMetrics = FixedMetrics(Vec2::new(40.0, 60.0));

    #[test]
    fn test_skier_draws_centered() {
        let mut state = GameState::new(1, Vec2::new(800.0, 500.0));
        let list = assemble_frame(&mut state, &METRICS);

        let skier = &list.sprites()[0];
        assert_eq!(skier.sprite, SpriteId::SkierRight);
        assert_eq!(skier.pos, Vec2::new(380.0, 220.0));
    }

    #[test]
    fn test_rhino_hidden_until_awake() {
        let mut state = GameState::new(1, Vec2::new(800.0, 500.0));

        let list = assemble_frame(&mut state, &METRICS);
        assert!(
            !list
                .sprites()
                .iter()
                .any(|d| d.sprite == SpriteId::RhinoRunLeft)
        );

        state.ski_ticks = state.rhino_wakeup + 1;
        let list = assemble_frame(&mut state, &METRICS);
        let rhino = list.sprites().last().unwrap();
        assert_eq!(rhino.sprite, SpriteId::RhinoRunLeft);
        // Pinned at mid-height regardless of stored y
        assert_eq!(rhino.pos.y, 220.0);
    }

    #[test]
    fn test_skier_vanishes_while_eaten() {
        let mut state = GameState::new(1, Vec2::new(800.0, 500.0));
        state.ski_ticks = state.rhino_wakeup + 1;
        state.rhino.pos.x = 400.0;
        state.rhino.advance();
        assert!(state.rhino.is_eating());

        let list = assemble_frame(&mut state, &METRICS);
        assert!(
            !list
                .sprites()
                .iter()
                .any(|d| matches!(d.sprite, SpriteId::SkierRight | SpriteId::SkierDown))
        );
    }

    #[test]
    fn test_initial_field_fully_visible() {
        let mut state = GameState::new(1, Vec2::new(800.0, 500.0));
        state.start(&METRICS);

        let count = state.field.len();
        let list = assemble_frame(&mut state, &METRICS);
        // The initial band sits inside the cull margins, so nothing drops:
        // one draw for the skier plus one per obstacle
        assert_eq!(list.sprites().len(), 1 + count);
        assert_eq!(state.field.len(), count);
    }
}
