//! `drive_shared`
//!
//! Shared libraries for the drive simulation.
//!
//! Design goals:
//! - One vehicle, advanced by an explicit update call; no global state.
//! - Clear separation of concerns (controls, vehicle, math, config, render).
//! - Traits at the rendering seam so the loop can run headless.
//! - No `unsafe`.

pub mod config;
pub mod controls;
pub mod math;
pub mod render;
pub mod vehicle;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::controls::*;
    pub use crate::math::*;
    pub use crate::render::*;
    pub use crate::vehicle::*;
}
