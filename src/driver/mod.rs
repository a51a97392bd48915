//! Pointer Driver Boundary
//!
//! The core never moves the OS pointer itself: dispatch delivers move
//! events to a [`PointerListener`], which forwards the target coordinates
//! to a [`PointerDriver`] implementation. The `os-pointer` feature
//! provides an enigo-backed driver; without it, the binary falls back to
//! logging.

#[cfg(feature = "os-pointer")]
pub mod enigo;

#[cfg(feature = "os-pointer")]
pub use self::enigo::EnigoDriver;

use crate::event::{Event, EventKind, EventName, Listener};
use crate::Result;
use tracing::{debug, warn};

/// Moves the system pointer to an absolute screen position.
///
/// May return a recoverable error for coordinates outside the
/// platform-accepted range; the core clamps before dispatch, so this is
/// the exceptional path.
pub trait PointerDriver {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()>;
}

/// Driver that logs instead of moving the pointer, for dry runs
#[derive(Debug, Default)]
pub struct NullDriver;

impl PointerDriver for NullDriver {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        debug!(x, y, "pointer move (dry run)");
        Ok(())
    }
}

/// Listener bridging `mouse.move` events to a pointer driver.
///
/// A driver error is treated as recoverable: the target is clamped to the
/// open screen interval again and retried once; a second failure is
/// surfaced as a warning and the event is dropped.
pub struct PointerListener<D: PointerDriver> {
    driver: D,
    screen_width: u32,
    screen_height: u32,
}

impl<D: PointerDriver> PointerListener<D> {
    pub fn new(driver: D, screen_width: u32, screen_height: u32) -> Self {
        Self {
            driver,
            screen_width,
            screen_height,
        }
    }
}

impl<D: PointerDriver> Listener for PointerListener<D> {
    fn dispatches(&self) -> &[EventName] {
        &[EventName::MouseMove]
    }

    fn handle(&mut self, event: &mut Event) {
        let EventKind::Move { x, y } = *event.kind() else {
            return;
        };

        let Err(first) = self.driver.move_to(x, y) else {
            return;
        };

        let cx = x.clamp(1, self.screen_width as i32 - 1);
        let cy = y.clamp(1, self.screen_height as i32 - 1);
        debug!(error = %first, x, y, cx, cy, "pointer move rejected, retrying clamped");

        if let Err(second) = self.driver.move_to(cx, cy) {
            warn!(error = %second, x = cx, y = cy, "pointer move failed after clamped retry");
        }
    }
}
