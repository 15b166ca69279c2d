//! Boomwalk - path verifier for chained planar vessels

pub mod core;
pub mod geom;
pub mod io;
pub mod model;
pub mod verify;
