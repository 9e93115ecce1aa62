//! auto-reel library crate — the bobber-bar auto-resolve plugin.
//!
//! The binary crate (`main.rs`) runs a headless simulated fishing session.
//! This library crate exposes the modules so that a host game and the
//! `tests/` integration tests can import types, systems, and resources
//! without needing a window or GPU.

pub mod shared;
pub mod config;
pub mod counter;
pub mod data;
pub mod fishing;
pub mod i18n;
