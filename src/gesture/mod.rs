//! Gesture Classification and Coordinate Remapping
//!
//! The per-frame driver: asks each detected hand which fingers are up,
//! recognizes the move gesture, remaps the pointing finger's position from
//! the camera's interaction box into screen space, and dispatches the
//! resulting pointer event.

pub mod controller;
pub mod screen_map;
pub mod trace;

pub use controller::GestureController;
pub use screen_map::{InteractionBox, ScreenMap, BOX_RATIO};
pub use trace::{GestureTrace, LogTrace};
