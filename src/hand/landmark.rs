//! Landmarks and fingertip indices
//!
//! Index numbering follows the 21-point hand landmark convention used by
//! common hand-pose estimators: 0 is the wrist, each finger occupies four
//! consecutive indices ending at its tip (4, 8, 12, 16, 20).

use serde::{Deserialize, Serialize};

/// Global index of the wrist landmark
pub const WRIST: u8 = 0;

/// Total number of landmarks per hand
pub const LANDMARK_COUNT: usize = 21;

/// Hand skeleton connections (global landmark index pairs), for external
/// overlay rendering. Drawing is a visualization side channel only and
/// never feeds back into gesture classification.
pub const SKELETON: [(u8, u8); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
    (5, 9),
];

/// Canonical fingertip landmark indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FingerTip {
    Thumb = 4,
    Index = 8,
    Middle = 12,
    Ring = 16,
    Pinky = 20,
}

impl FingerTip {
    /// All five fingertips in anatomical order (thumb first)
    pub const ALL: [FingerTip; 5] = [
        FingerTip::Thumb,
        FingerTip::Index,
        FingerTip::Middle,
        FingerTip::Ring,
        FingerTip::Pinky,
    ];

    /// Global landmark index of this tip
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a fingertip by its raw landmark index.
    /// Returns `None` for anything outside the canonical set {4,8,12,16,20}.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            4 => Some(FingerTip::Thumb),
            8 => Some(FingerTip::Index),
            12 => Some(FingerTip::Middle),
            16 => Some(FingerTip::Ring),
            20 => Some(FingerTip::Pinky),
            _ => None,
        }
    }
}

/// A single tracked hand keypoint in pixel coordinates.
///
/// Immutable once created for a frame; the global index (0-20) is kept so
/// distances can be computed across the flattened landmark sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    /// Global landmark index (0 = wrist, 1-20 = finger joints)
    pub index: u8,
    /// Pixel x coordinate
    pub x: i32,
    /// Pixel y coordinate
    pub y: i32,
}

impl Landmark {
    /// Project a normalized keypoint (x, y in [0, 1]) onto an image of the
    /// given pixel dimensions.
    pub fn from_normalized(index: u8, nx: f64, ny: f64, width: u32, height: u32) -> Self {
        Self {
            index,
            x: (nx * width as f64).round() as i32,
            y: (ny * height as f64).round() as i32,
        }
    }

    /// Euclidean distance to another landmark, in pixels
    pub fn distance_to(&self, other: &Landmark) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }
}
