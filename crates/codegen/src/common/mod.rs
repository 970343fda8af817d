//! Common constants and types used throughout the ROM generator.
//!
//! This module provides the fixed facts and shared vocabulary of the generator. It includes:
//! 1. **Constants:** Word geometry, ROM capacity, and the NOP filler word.
//! 2. **Error Handling:** The generator error enum and the warning type for
//!    silently-absorbed image defects.

/// Fixed generation constants (word size, capacity, filler).
pub mod constants;

/// Error and warning definitions.
pub mod error;

pub use constants::{NOP_WORD, ROM_CAPACITY};
pub use error::{RomError, RomWarning};
