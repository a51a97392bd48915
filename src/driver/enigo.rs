//! Enigo-backed pointer driver (`os-pointer` feature)

use super::PointerDriver;
use crate::{Error, Result};
use enigo::{Coordinate, Enigo, Mouse, Settings};

/// Moves the real system pointer through the `enigo` input-synthesis crate
pub struct EnigoDriver {
    enigo: Enigo,
}

impl EnigoDriver {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| Error::Pointer(format!("failed to initialize enigo: {e:?}")))?;
        Ok(Self { enigo })
    }
}

impl PointerDriver for EnigoDriver {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| Error::Pointer(format!("{e:?}")))
    }
}
