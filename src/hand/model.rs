//! Hand construction and per-hand queries

use super::finger::Finger;
use super::landmark::{FingerTip, Landmark, LANDMARK_COUNT};
use crate::{Error, Result};

/// Extension state of all five fingers, in anatomical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingersUp {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingersUp {
    /// Thumb-first boolean array
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    /// Number of extended fingers
    pub fn count(&self) -> usize {
        self.as_array().iter().filter(|up| **up).count()
    }
}

/// One detected hand: a wrist landmark plus exactly five fingers,
/// partitioned from the estimator's flat 21-keypoint sequence.
///
/// Invariants established at construction: five fingers with tip indices
/// exactly {4, 8, 12, 16, 20}, wrist is landmark 0, 21 landmarks total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    left: bool,
    wrist: Landmark,
    fingers: [Finger; 5],
}

impl Hand {
    /// Build a hand from 21 ordered normalized keypoints and the source
    /// image dimensions.
    ///
    /// Keypoint 0 becomes the wrist; the remaining keypoints are assigned
    /// to the first finger whose tip boundary they fall at or below,
    /// scanning tip boundaries in ascending order. Pixel positions are
    /// `round(norm * dimension)`.
    pub fn from_keypoints(
        left: bool,
        keypoints: &[[f64; 2]; LANDMARK_COUNT],
        width: u32,
        height: u32,
    ) -> Self {
        let wrist = Landmark::from_normalized(0, keypoints[0][0], keypoints[0][1], width, height);
        let mut fingers = FingerTip::ALL.map(Finger::new);

        for (number, keypoint) in keypoints.iter().enumerate().skip(1) {
            let landmark =
                Landmark::from_normalized(number as u8, keypoint[0], keypoint[1], width, height);
            for finger in fingers.iter_mut() {
                if number as u8 <= finger.tip().index() {
                    finger.push(landmark);
                    break;
                }
            }
        }

        Self {
            left,
            wrist,
            fingers,
        }
    }

    /// Handedness as reported by the detector
    pub fn is_left(&self) -> bool {
        self.left
    }

    pub fn wrist(&self) -> &Landmark {
        &self.wrist
    }

    /// The five fingers in anatomical order (thumb first)
    pub fn fingers(&self) -> &[Finger] {
        &self.fingers
    }

    /// Infallible finger accessor
    pub fn finger(&self, tip: FingerTip) -> &Finger {
        // self.fingers shares FingerTip::ALL's ordering
        let position = match tip {
            FingerTip::Thumb => 0,
            FingerTip::Index => 1,
            FingerTip::Middle => 2,
            FingerTip::Ring => 3,
            FingerTip::Pinky => 4,
        };
        &self.fingers[position]
    }

    /// Look up a finger by raw tip index.
    ///
    /// A tip index outside the canonical set is a programming error in the
    /// caller, surfaced as [`Error::InvalidFingerTip`].
    pub fn finger_by_tip(&self, tip: u8) -> Result<&Finger> {
        FingerTip::from_index(tip)
            .map(|t| self.finger(t))
            .ok_or(Error::InvalidFingerTip(tip))
    }

    /// Extension state of every finger, thumb first
    pub fn fingers_up(&self) -> FingersUp {
        let up = self.fingers.each_ref().map(|f| f.is_extended(self.left));
        FingersUp {
            thumb: up[0],
            index: up[1],
            middle: up[2],
            ring: up[3],
            pinky: up[4],
        }
    }

    /// All landmarks in the flattened global order: wrist first, then each
    /// finger base to tip.
    pub fn landmarks(&self) -> Vec<&Landmark> {
        let mut all = Vec::with_capacity(LANDMARK_COUNT);
        all.push(&self.wrist);
        for finger in &self.fingers {
            all.extend(finger.landmarks());
        }
        all
    }

    /// Look up a landmark by global index (0 = wrist, 1-20 = finger joints)
    pub fn landmark(&self, index: u8) -> Option<&Landmark> {
        if index == 0 {
            return Some(&self.wrist);
        }
        self.fingers
            .iter()
            .find(|f| index <= f.tip().index())
            .and_then(|f| f.landmarks().iter().find(|lm| lm.index == index))
    }

    /// Euclidean distance between two global landmark indices, in pixels
    pub fn find_distance(&self, a: u8, b: u8) -> Result<f64> {
        let first = self.landmark(a).ok_or(Error::InvalidLandmark(a))?;
        let second = self.landmark(b).ok_or(Error::InvalidLandmark(b))?;
        Ok(first.distance_to(second))
    }
}
