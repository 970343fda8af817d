//! Fixed Generation Constants.
//!
//! This module defines the non-configurable facts of the generated ROM. It includes:
//! 1. **Word Geometry:** Byte and bit width of one instruction word.
//! 2. **Capacity:** The fixed number of addressable ROM entries.
//! 3. **Filler:** The instruction word used for every address the image does not cover.

/// Size of one instruction word in bytes.
pub const WORD_BYTES: usize = 4;

/// Width of one instruction word and of each ROM entry in bits.
pub const WORD_BITS: u32 = 32;

/// Number of address bits selecting a ROM entry.
///
/// The generated array is declared over `2**ROM_ADDR_BITS`; the two low-order
/// bits of a byte address never reach the array index (word alignment).
pub const ROM_ADDR_BITS: u32 = 10;

/// Number of addressable entries in the generated ROM (1024).
///
/// Words past this limit have no index in the fixed-size array and are
/// dropped by the layout stage.
pub const ROM_CAPACITY: usize = 1 << ROM_ADDR_BITS;

/// Filler word for every address not covered by the image.
///
/// RISC-V `addi x0, x0, 0`, the canonical NOP. Fixed; never derived from
/// the image.
pub const NOP_WORD: u32 = 0x0000_0013;
