//! Platform abstraction layer
//!
//! Browser glue lives in `web` (wasm32 only): a canvas-backed `Surface`, a
//! DOM-backed `Hud`, and clock/element helpers for the entry point. Native
//! builds run headless and need nothing from here.

#[cfg(target_arch = "wasm32")]
pub mod web;
