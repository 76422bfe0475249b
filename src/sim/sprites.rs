//! Logical sprite identifiers and animation sequences
//!
//! The sim refers to every visual asset by `SpriteId`; resolving an id to
//! pixels (and to pixel dimensions) is the renderer's job. Assets must be
//! fully loaded before the first tick - the sim assumes `SpriteMetrics`
//! always answers.

use glam::Vec2;

/// Every sprite the game can put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    SkierCrash,
    SkierLeft,
    SkierLeftDown,
    SkierDown,
    SkierRightDown,
    SkierRight,
    SkierJump1,
    SkierJump2,
    SkierJump3,
    SkierJump4,
    Tree,
    TreeCluster,
    Rock1,
    Rock2,
    JumpRamp,
    RhinoRunLeft,
    RhinoRunLeft2,
    RhinoLift,
    RhinoLiftMouthOpen,
    RhinoLiftEat1,
    RhinoLiftEat2,
    RhinoLiftEat3,
    RhinoLiftEat4,
    RhinoDefault,
}

impl SpriteId {
    /// All sprites, in preload order
    pub const ALL: [SpriteId; 24] = [
        SpriteId::SkierCrash,
        SpriteId::SkierLeft,
        SpriteId::SkierLeftDown,
        SpriteId::SkierDown,
        SpriteId::SkierRightDown,
        SpriteId::SkierRight,
        SpriteId::SkierJump1,
        SpriteId::SkierJump2,
        SpriteId::SkierJump3,
        SpriteId::SkierJump4,
        SpriteId::Tree,
        SpriteId::TreeCluster,
        SpriteId::Rock1,
        SpriteId::Rock2,
        SpriteId::JumpRamp,
        SpriteId::RhinoRunLeft,
        SpriteId::RhinoRunLeft2,
        SpriteId::RhinoLift,
        SpriteId::RhinoLiftMouthOpen,
        SpriteId::RhinoLiftEat1,
        SpriteId::RhinoLiftEat2,
        SpriteId::RhinoLiftEat3,
        SpriteId::RhinoLiftEat4,
        SpriteId::RhinoDefault,
    ];

    /// Relative URL of the image backing this sprite
    pub fn asset_path(&self) -> &'static str {
        match self {
            SpriteId::SkierCrash => "img/skier_crash.png",
            SpriteId::SkierLeft => "img/skier_left.png",
            SpriteId::SkierLeftDown => "img/skier_left_down.png",
            SpriteId::SkierDown => "img/skier_down.png",
            SpriteId::SkierRightDown => "img/skier_right_down.png",
            SpriteId::SkierRight => "img/skier_right.png",
            SpriteId::SkierJump1 => "img/skier_jump_1.png",
            SpriteId::SkierJump2 => "img/skier_jump_2.png",
            SpriteId::SkierJump3 => "img/skier_jump_3.png",
            SpriteId::SkierJump4 => "img/skier_jump_5.png",
            SpriteId::Tree => "img/tree_1.png",
            SpriteId::TreeCluster => "img/tree_cluster.png",
            SpriteId::Rock1 => "img/rock_1.png",
            SpriteId::Rock2 => "img/rock_2.png",
            SpriteId::JumpRamp => "img/jump_ramp.png",
            SpriteId::RhinoRunLeft => "img/rhino_run_left.png",
            SpriteId::RhinoRunLeft2 => "img/rhino_run_left_2.png",
            SpriteId::RhinoLift => "img/rhino_lift.png",
            SpriteId::RhinoLiftMouthOpen => "img/rhino_lift_mouth_open.png",
            SpriteId::RhinoLiftEat1 => "img/rhino_lift_eat_1.png",
            SpriteId::RhinoLiftEat2 => "img/rhino_lift_eat_2.png",
            SpriteId::RhinoLiftEat3 => "img/rhino_lift_eat_3.png",
            SpriteId::RhinoLiftEat4 => "img/rhino_lift_eat_4.png",
            SpriteId::RhinoDefault => "img/rhino_default.png",
        }
    }
}

/// Skier jump sprites in animation order
pub const SKIER_JUMP: [SpriteId; 4] = [
    SpriteId::SkierJump1,
    SpriteId::SkierJump2,
    SpriteId::SkierJump3,
    SpriteId::SkierJump4,
];

/// Rhino eating sprites in animation order, ending on the sated default
pub const RHINO_EAT: [SpriteId; 7] = [
    SpriteId::RhinoLift,
    SpriteId::RhinoLiftMouthOpen,
    SpriteId::RhinoLiftEat1,
    SpriteId::RhinoLiftEat2,
    SpriteId::RhinoLiftEat3,
    SpriteId::RhinoLiftEat4,
    SpriteId::RhinoDefault,
];

/// The asset-dimension collaborator
///
/// Collision rectangles and draw offsets both depend on sprite size, which
/// only the asset loader knows. Implementations must be ready for every
/// `SpriteId` before the game loop starts (load-before-play).
pub trait SpriteMetrics {
    /// On-screen width and height of the sprite, in CSS pixels
    fn dimensions(&self, sprite: SpriteId) -> Vec2;
}

/// Uniform sprite dimensions, for tests and the headless smoke run
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics(pub Vec2);

impl SpriteMetrics for FixedMetrics {
    fn dimensions(&self, _sprite: SpriteId) -> Vec2 {
        self.0
    }
}
