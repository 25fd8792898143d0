//! `drive_client`
//!
//! Client-side systems:
//! - Key input mapping onto held vehicle controls
//! - The `Game` context that owns the vehicle
//! - Frame clock and the cooperative driving loop
//! - A terminal HUD renderer

pub mod game;
pub mod input;
pub mod runner;
pub mod terminal;

pub use game::Game;
