//! Detector Boundary
//!
//! The crate never estimates hand pose itself; an external estimator
//! produces, per video frame, zero or more hands as 21 ordered normalized
//! keypoints plus handedness and the frame's pixel dimensions. This module
//! defines that boundary contract and the [`FrameSource`] abstraction the
//! run loop reads from.

pub mod jsonl;

use crate::hand::LANDMARK_COUNT;
use serde::{Deserialize, Serialize};

pub use jsonl::JsonlFrameSource;

/// One hand as reported by the external detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedHand {
    /// Handedness, as classified by the detector
    pub left: bool,
    /// 21 ordered keypoints, x and y normalized to [0, 1]
    pub keypoints: [[f64; 2]; LANDMARK_COUNT],
}

/// One video frame's worth of detector output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedFrame {
    /// Frame pixel width
    pub width: u32,
    /// Frame pixel height
    pub height: u32,
    /// Zero or more detected hands
    #[serde(default)]
    pub hands: Vec<DetectedHand>,
}

/// A blocking source of detector frames.
///
/// `Ok(None)` signals the end of the stream; a cycle with no frame is
/// treated by the controller exactly like a frame with zero hands.
pub trait FrameSource {
    fn next_frame(&mut self) -> crate::Result<Option<DetectedFrame>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_serialization_round_trip() {
        let frame = DetectedFrame {
            width: 1280,
            height: 720,
            hands: vec![DetectedHand {
                left: true,
                keypoints: [[0.25, 0.75]; LANDMARK_COUNT],
            }],
        };

        let json = serde_json::to_string(&frame).unwrap();
        let restored: DetectedFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.width, 1280);
        assert_eq!(restored.hands.len(), 1);
        assert!(restored.hands[0].left);
        assert_eq!(restored.hands[0].keypoints[20], [0.25, 0.75]);
    }

    #[test]
    fn test_hands_field_defaults_to_empty() {
        let frame: DetectedFrame = serde_json::from_str(r#"{"width":640,"height":480}"#).unwrap();
        assert!(frame.hands.is_empty());
    }

    #[test]
    fn test_wrong_keypoint_count_rejected() {
        let json = r#"{"width":640,"height":480,"hands":[{"left":false,"keypoints":[[0.1,0.2]]}]}"#;
        assert!(serde_json::from_str::<DetectedFrame>(json).is_err());
    }
}
