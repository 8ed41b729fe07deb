//! Platform abstraction layer
//!
//! Turns raw window events (keys, pointer) into per-tick simulation input.
//! Windowing itself is left to the host.

pub mod input;

pub use input::{InputState, Key, KeyAction, PointerButton, ScreenMapping};
