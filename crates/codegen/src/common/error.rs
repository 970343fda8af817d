//! Error and Warning definitions.
//!
//! This module defines the failure surface of the generator. It provides:
//! 1. **Errors:** Fatal conditions that abort generation with no output.
//! 2. **Warnings:** Silently-absorbed image defects that callers can inspect,
//!    and that strict mode promotes to errors.

use std::path::PathBuf;

use thiserror::Error;

use super::constants::ROM_CAPACITY;

/// Fatal generation errors.
///
/// Any of these aborts the invocation; there is no partial output or retry.
#[derive(Debug, Error)]
pub enum RomError {
    /// The binary image could not be opened or read.
    #[error("could not read image '{}': {source}", path.display())]
    ImageRead {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The image length is not a multiple of the word size (strict mode only).
    #[error("image ends with {bytes} stray byte(s) that do not form a whole word")]
    TruncatedImage {
        /// Number of trailing bytes that do not complete a word.
        bytes: usize,
    },

    /// The image holds more words than the ROM has addresses (strict mode only).
    #[error("image holds {words} words but the ROM stores at most {ROM_CAPACITY}")]
    CapacityExceeded {
        /// Total number of words decoded from the image.
        words: usize,
    },

    /// The generator configuration could not be parsed from JSON.
    #[error("could not parse generator config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Image defects absorbed silently during compatible generation.
///
/// The rendered output is still produced; callers that care inspect the
/// warning list or enable strict mode, which maps each variant onto the
/// matching [`RomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RomWarning {
    /// Trailing bytes short of a full word were dropped from the image.
    #[error("dropped {bytes} trailing byte(s) that do not form a whole word")]
    TruncatedImage {
        /// Number of dropped trailing bytes.
        bytes: usize,
    },

    /// Words past the last ROM address were dropped from the output.
    #[error("image holds {words} words; {dropped} past the last ROM address were dropped")]
    CapacityExceeded {
        /// Total number of words decoded from the image.
        words: usize,
        /// Number of words with no address in the ROM.
        dropped: usize,
    },
}

impl From<RomWarning> for RomError {
    /// Promotes a warning to the matching fatal error (strict mode).
    fn from(warning: RomWarning) -> Self {
        match warning {
            RomWarning::TruncatedImage { bytes } => RomError::TruncatedImage { bytes },
            RomWarning::CapacityExceeded { words, .. } => RomError::CapacityExceeded { words },
        }
    }
}
