//! The shared game-object contract

use super::sprites::SpriteId;

/// Capability interface every game object implements: report the sprite
/// that currently represents it, advance one tick of autonomous state
/// (movement and animation counters), and return to the initial state.
///
/// There is no position accessor here on purpose - the skier moves in
/// world space, the rhino in screen space, and obstacles not at all, so
/// each type exposes position on its own terms.
pub trait Entity {
    /// Sprite representing the object this tick
    fn sprite(&self) -> SpriteId;

    /// Advance one simulation tick of self-driven state
    fn advance(&mut self);

    /// Restore every field to its initial value, in place
    fn reset(&mut self);
}
