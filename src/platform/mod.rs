//! Platform layer
//!
//! Browser collaborators the sim stays ignorant of. Currently just asset
//! preloading; input and storage glue live with the entry point and the
//! high score module respectively.

pub mod assets;
