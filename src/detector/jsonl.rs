//! JSON-lines frame source
//!
//! The external detector writes one JSON object per line, matching
//! [`DetectedFrame`]. The same format doubles as a replay format: the
//! `inspect` command consumes recorded frame files through this reader.

use super::{DetectedFrame, FrameSource};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads detector frames from any buffered reader, one JSON object per
/// line. Blank lines are skipped; end of input yields `Ok(None)`.
pub struct JsonlFrameSource<R: BufRead> {
    reader: R,
    line: String,
    frames_read: u64,
}

impl JsonlFrameSource<BufReader<File>> {
    /// Open a recorded frame file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlFrameSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            frames_read: 0,
        }
    }

    /// Frames successfully decoded so far
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
}

impl<R: BufRead> FrameSource for JsonlFrameSource<R> {
    fn next_frame(&mut self) -> Result<Option<DetectedFrame>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }

            let frame: DetectedFrame = serde_json::from_str(line)?;
            if frame.width == 0 || frame.height == 0 {
                return Err(Error::MalformedFrame(format!(
                    "frame {} has zero dimension {}x{}",
                    self.frames_read, frame.width, frame.height
                )));
            }

            self.frames_read += 1;
            return Ok(Some(frame));
        }
    }
}
