//! Labo / Zaranthis application library
//!
//! Configuration, window-level input and the frame systems driven by the binary.

pub mod config;
pub mod input;
pub mod systems;
