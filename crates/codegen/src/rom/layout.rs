//! ROM Address Layout.
//!
//! This module maps the decoded image onto the fixed-capacity ROM address
//! space. It decides what data goes at which address; how that data is
//! rendered as text is left to [`crate::vhdl`].

use crate::common::constants::{NOP_WORD, ROM_CAPACITY};
use crate::image::ProgramImage;

/// Address assignment for one generated ROM.
///
/// Holds one entry per program word, in address order starting at 0, capped
/// at [`ROM_CAPACITY`]. Every address past the entries up to the capacity
/// reads as the filler word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomLayout {
    entries: Vec<u32>,
    dropped_words: usize,
}

impl RomLayout {
    /// Lays out an image over the ROM address space.
    ///
    /// Word `i` of the image lands at address `i`. Words with no valid index
    /// in the fixed-size array are dropped and counted.
    pub fn from_image(image: &ProgramImage) -> Self {
        let words = image.words();
        let kept = words.len().min(ROM_CAPACITY);
        Self {
            entries: words[..kept].to_vec(),
            dropped_words: words.len() - kept,
        }
    }

    /// Returns the per-address program words; the index is the address.
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Returns how many image words had no address in the ROM.
    pub fn dropped_words(&self) -> usize {
        self.dropped_words
    }

    /// Returns the word a synchronous read of `address` would produce.
    ///
    /// Addresses covered by the image return its word, the remainder up to
    /// the capacity return [`NOP_WORD`], and anything past the capacity is
    /// `None`.
    pub fn word_at(&self, address: usize) -> Option<u32> {
        if address >= ROM_CAPACITY {
            return None;
        }
        Some(self.entries.get(address).copied().unwrap_or(NOP_WORD))
    }
}
