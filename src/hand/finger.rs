//! Finger chain and the extension predicate

use super::landmark::{FingerTip, Landmark};

/// The ordered chain of landmarks from a digit's base to its tip, wrist
/// excluded, plus the heuristic extended/retracted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finger {
    tip: FingerTip,
    landmarks: Vec<Landmark>,
}

impl Finger {
    pub(crate) fn new(tip: FingerTip) -> Self {
        Self {
            tip,
            landmarks: Vec::with_capacity(4),
        }
    }

    pub(crate) fn push(&mut self, landmark: Landmark) {
        self.landmarks.push(landmark);
    }

    /// This finger's canonical tip index
    pub fn tip(&self) -> FingerTip {
        self.tip
    }

    /// Landmarks in anatomical order, base joint first
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// The joint nearest the palm (first landmark of the chain)
    pub fn base(&self) -> Option<&Landmark> {
        self.landmarks.first()
    }

    /// The tip landmark (last of the chain)
    pub fn tip_landmark(&self) -> Option<&Landmark> {
        self.landmarks.last()
    }

    /// Heuristic: is this finger held out straight rather than curled?
    ///
    /// The thumb extends laterally, so its tip is compared against the
    /// immediately preceding joint on the x axis, with the inequality
    /// mirrored by handedness. Every other finger extends upward: its tip
    /// must sit above the joint two positions back (the joint directly
    /// before the tip is too close to it to be a stable reference).
    ///
    /// A finger with too few landmarks is reported as not extended.
    pub fn is_extended(&self, left: bool) -> bool {
        let n = self.landmarks.len();
        if n == 0 {
            return false;
        }

        if self.tip == FingerTip::Thumb {
            if n < 2 {
                return false;
            }
            let tip = &self.landmarks[n - 1];
            let prev = &self.landmarks[n - 2];
            if left {
                tip.x < prev.x
            } else {
                tip.x > prev.x
            }
        } else {
            if n < 3 {
                return false;
            }
            let tip = &self.landmarks[n - 1];
            let two_back = &self.landmarks[n - 3];
            tip.y < two_back.y
        }
    }
}
