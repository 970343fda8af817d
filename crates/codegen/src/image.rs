//! Binary Image Loading.
//!
//! This module decodes a flat binary instruction image into words. It performs:
//! 1. **File reading:** Loads the raw image from disk in binary mode.
//! 2. **Word decoding:** Segments the byte stream into 32-bit little-endian words,
//!    index = word position = target ROM address.
//! 3. **Tail accounting:** Drops a trailing partial word and records how many
//!    bytes it held, for the warning surface.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::common::error::RomError;

/// A decoded instruction image.
///
/// An ordered sequence of unsigned 32-bit words, index-addressed from 0.
/// Immutable once constructed; the emitter consumes it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    words: Vec<u32>,
    stray_bytes: usize,
}

impl ProgramImage {
    /// Decodes an image from raw bytes.
    ///
    /// The stream is consumed in 4-byte chunks, least-significant byte first.
    /// A final chunk shorter than 4 bytes contributes no word; its length is
    /// retained and reported by [`ProgramImage::stray_bytes`]. No upper bound
    /// is placed on the number of words.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let chunks = bytes.chunks_exact(WORD_BYTES);
        let stray_bytes = chunks.remainder().len();
        let words = chunks
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Self { words, stray_bytes }
    }

    /// Reads and decodes an image file.
    ///
    /// The file is read in binary mode in a single pass.
    ///
    /// # Errors
    ///
    /// Returns [`RomError::ImageRead`] when the file cannot be opened or read.
    pub fn from_file(path: &Path) -> Result<Self, RomError> {
        let bytes = fs::read(path).map_err(|source| RomError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        let image = Self::from_bytes(&bytes);
        debug!(
            path = %path.display(),
            words = image.len(),
            stray_bytes = image.stray_bytes(),
            "loaded image"
        );
        Ok(image)
    }

    /// Returns the decoded words in image order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the number of decoded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the image decoded to no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns how many trailing bytes were dropped for not completing a word.
    pub fn stray_bytes(&self) -> usize {
        self.stray_bytes
    }
}
