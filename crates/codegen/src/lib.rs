//! RISC-V ROM generator library.
//!
//! This crate converts a flat RISC-V instruction image into synthesizable VHDL. It provides:
//! 1. **Image loading:** Decoding flat little-endian binaries into 32-bit instruction words.
//! 2. **ROM layout:** Mapping each word to a ROM address and padding the rest with NOPs.
//! 3. **VHDL emission:** Rendering a dual-read-port synchronous ROM entity and the
//!    synthesis-time configuration package.
//! 4. **Configuration:** Generation options (entity name, strict validation) with JSON support.

/// Common constants and error types shared by the generator stages.
pub mod common;
/// Generator configuration (defaults, JSON deserialization).
pub mod config;
/// Binary image loading and word decoding.
pub mod image;
/// ROM address layout and the generation pipeline.
pub mod rom;
/// VHDL text rendering for the generated units.
pub mod vhdl;

/// Generation options; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Decoded instruction image; construct with `ProgramImage::from_file` or `from_bytes`.
pub use crate::image::ProgramImage;
/// One-shot pipeline from image to rendered VHDL plus warnings.
pub use crate::rom::{RomOutput, generate};
/// Error and warning types for every generator stage.
pub use crate::common::error::{RomError, RomWarning};
