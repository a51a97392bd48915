//! Camera-to-screen coordinate remapping
//!
//! A rectangle centered in the camera frame (the interaction box) maps
//! linearly onto the full screen. The box is sized so that, after scaling
//! by `screen_height / camera_height / BOX_RATIO`, its aspect ratio maps
//! 1:1 onto the screen; camera and screen dimensions are assumed fixed for
//! the session, so the box is computed once at construction.

use serde::{Deserialize, Serialize};

/// Fraction of the scaled camera height the interaction box occupies
pub const BOX_RATIO: f64 = 0.75;

/// The rectangular camera-frame region that maps onto the full screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl InteractionBox {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// Precomputed mapping from camera pixel space to screen pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMap {
    screen_width: u32,
    screen_height: u32,
    bbox: InteractionBox,
}

impl ScreenMap {
    pub fn new(camera_width: u32, camera_height: u32, screen_width: u32, screen_height: u32) -> Self {
        let scale = screen_height as f64 / camera_height as f64 / BOX_RATIO;
        let box_width = screen_width as f64 / scale;
        let box_height = screen_height as f64 / scale;

        let x1 = (camera_width as f64 - box_width) / 2.0;
        let y1 = (camera_height as f64 - box_height) / 2.0;
        let bbox = InteractionBox {
            x1,
            y1,
            x2: camera_width as f64 - x1,
            y2: camera_height as f64 - y1,
        };

        Self {
            screen_width,
            screen_height,
            bbox,
        }
    }

    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    pub fn interaction_box(&self) -> &InteractionBox {
        &self.bbox
    }

    /// Map a camera pixel position to an absolute screen position.
    ///
    /// The raw position is interpolated from the interaction box onto the
    /// full screen (saturating at the box edges), clamped to stay strictly
    /// inside the screen (1 to dimension-1, since exact 0 or the exact
    /// maximum trips some OS pointer APIs), then mirrored on x so camera
    /// left/right matches the user's physical left/right.
    pub fn map(&self, x: i32, y: i32) -> (i32, i32) {
        let sx = interp(x as f64, self.bbox.x1, self.bbox.x2, 0.0, self.screen_width as f64);
        let sy = interp(y as f64, self.bbox.y1, self.bbox.y2, 0.0, self.screen_height as f64);

        let sx = clamp_inside(sx, self.screen_width);
        let sy = clamp_inside(sy, self.screen_height);

        (self.screen_width as i32 - sx, sy)
    }
}

/// Linear interpolation of `v` from [a1, a2] to [b1, b2], saturating at
/// the endpoints for inputs outside the source interval.
fn interp(v: f64, a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    if v <= a1 {
        b1
    } else if v >= a2 {
        b2
    } else {
        b1 + (v - a1) * (b2 - b1) / (a2 - a1)
    }
}

/// Round to a pixel and clamp to the open interval (0, dimension)
fn clamp_inside(v: f64, dimension: u32) -> i32 {
    (v.round() as i32).clamp(1, dimension as i32 - 1)
}
