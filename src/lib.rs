//! # jobboard-theme
//!
//! Light/dark theme toggle and right-to-left auto-detection for the job
//! board pages, compiled to WebAssembly.
//!
//! The theme preference lives in `localStorage` and is mirrored onto a
//! `data-bs-theme` attribute on `<html>`, which the stylesheet keys on. The
//! direction detector sets `dir` from the share of Arabic-script text when
//! the markup does not.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` and `Direction` values |
//! | [`config`] | Mount-time configuration and presets |
//! | [`host`] | Storage/document/control traits and their implementations |
//! | [`controller`] | Theme preference controller |
//! | [`direction`] | RTL detection heuristic |
//! | `mount` | WASM exports (`hydrate` feature only) |

pub mod config;
pub mod controller;
pub mod direction;
pub mod host;
#[cfg(feature = "hydrate")]
pub mod mount;
pub mod theme;

pub use config::{ConfigError, DirectionPolicy, ThemeConfig};
pub use controller::ThemeController;
pub use direction::DirectionDetector;
pub use theme::{Direction, Theme};
