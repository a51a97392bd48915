//! Classification instrumentation
//!
//! An optional hook invoked around the per-hand classification step. The
//! hook observes only: it receives immutable views and must not alter
//! gesture classification. External debug overlays hang off this seam
//! together with [`crate::hand::SKELETON`].

use crate::hand::{FingersUp, Hand};
use tracing::debug;

/// Observer invoked before and after each hand is classified
pub trait GestureTrace {
    fn before_classify(&mut self, _hand: &Hand) {}

    fn after_classify(&mut self, _hand: &Hand, _fingers: &FingersUp) {}
}

/// Trace that logs classification results at debug level
#[derive(Debug, Default)]
pub struct LogTrace;

impl GestureTrace for LogTrace {
    fn after_classify(&mut self, hand: &Hand, fingers: &FingersUp) {
        debug!(
            left = hand.is_left(),
            thumb = fingers.thumb,
            index = fingers.index,
            middle = fingers.middle,
            ring = fingers.ring,
            pinky = fingers.pinky,
            "classified hand"
        );
    }
}
