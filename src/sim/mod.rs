//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The only thing the sim knows about the outside world is the
//! [`SpriteMetrics`] seam: "what are the on-screen dimensions of sprite S".
//! Everything it tells the outside world goes out as a [`DrawList`] of
//! resolved screen coordinates.

pub mod draw;
pub mod entity;
pub mod field;
pub mod geom;
pub mod obstacle;
pub mod rhino;
pub mod skier;
pub mod sprites;
pub mod state;
pub mod tick;

pub use draw::{DrawList, SpriteDraw, assemble_frame};
pub use entity::Entity;
pub use field::{CollisionOutcome, ObstacleField};
pub use geom::Rect;
pub use obstacle::{Obstacle, ObstacleKind};
pub use rhino::{Rhino, RhinoMode};
pub use skier::{Direction, Skier};
pub use sprites::{FixedMetrics, SpriteId, SpriteMetrics};
pub use state::{GameOverCause, GamePhase, GameState};
pub use tick::{TickInput, tick};
