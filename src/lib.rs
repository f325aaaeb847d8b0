//! Heads-up display for the browser game client: icon holders for the current
//! selection, a game view proxy that forwards clicks to the game controller,
//! and the pause menu.

pub mod components;
pub mod config;
pub mod demo;
pub mod hud;
pub mod logging;
