//! # Airmouse
//!
//! A virtual mouse driven by hand gestures. Takes per-frame hand-landmark
//! coordinates from an external hand-pose estimator and turns them into
//! cursor-control events delivered through a decoupled event dispatcher.
//!
//! ## Quick Start
//!
//! ```no_run
//! use airmouse::detector::DetectedFrame;
//! use airmouse::event::LoggingListener;
//! use airmouse::gesture::{GestureController, ScreenMap};
//!
//! // Camera 1280x720, screen 1920x1080.
//! let map = ScreenMap::new(1280, 720, 1920, 1080);
//! let mut controller = GestureController::new(map);
//! controller
//!     .dispatcher_mut()
//!     .add_listener(Box::new(LoggingListener::default()));
//!
//! // ... per frame, feed detector output into the controller ...
//! let frame = DetectedFrame { width: 1280, height: 720, hands: Vec::new() };
//! controller.process(Some(&frame));
//! ```
//!
//! ## Architecture
//!
//! The system is organized into the following modules:
//!
//! - [`hand`]: Landmark data model (Landmark, Finger, Hand) and the
//!   "finger extended" predicate
//! - [`event`]: Tagged-variant events, the Listener trait, and the
//!   synchronous Dispatcher
//! - [`gesture`]: Per-frame gesture classification and camera-to-screen
//!   coordinate remapping
//! - [`detector`]: Boundary types and frame sources for the external
//!   hand-pose estimator
//! - [`driver`]: Pointer-driver trait and the listener that bridges move
//!   events to it
//! - [`app`]: CLI and configuration management
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Detector   │───▶│  Hand model │───▶│   Gesture   │───▶│  Dispatcher │
//! │  (external) │    │ (landmarks) │    │ controller  │    │ (listeners) │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                                                                 │
//!                                                                 ▼
//!                                                          ┌─────────────┐
//!                                                          │ OS pointer  │
//!                                                          │   driver    │
//!                                                          └─────────────┘
//! ```
//!
//! One frame is fully processed before the next is read; dispatch is
//! synchronous on the calling thread.

pub mod app;
pub mod detector;
pub mod driver;
pub mod event;
pub mod gesture;
pub mod hand;

// Re-export commonly used types
pub use detector::{DetectedFrame, DetectedHand, FrameSource};
pub use event::{Dispatcher, Event, EventKind, EventName, Listener, ListenerId};
pub use gesture::{GestureController, ScreenMap};
pub use hand::{Finger, FingerTip, FingersUp, Hand, Landmark};

/// Result type alias for the airmouse crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the airmouse crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid fingertip index: {0}")]
    InvalidFingerTip(u8),

    #[error("invalid landmark index: {0}")]
    InvalidLandmark(u8),

    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    #[error("detector error: {0}")]
    Detector(String),

    #[error("pointer driver error: {0}")]
    Pointer(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
