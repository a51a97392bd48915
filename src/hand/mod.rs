//! Hand Landmark Model
//!
//! Wraps the flat 21-keypoint output of a hand-pose estimator into a
//! structured wrist + five-finger representation with pixel coordinates
//! and a per-finger extension predicate.

pub mod finger;
pub mod landmark;
pub mod model;

pub use finger::Finger;
pub use landmark::{FingerTip, Landmark, LANDMARK_COUNT, SKELETON, WRIST};
pub use model::{FingersUp, Hand};
