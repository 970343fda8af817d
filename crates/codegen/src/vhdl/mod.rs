//! VHDL Text Rendering.
//!
//! This module holds the textual templates for the generated units. The exact
//! structure of the output, keywords, declaration order, and port names, is a
//! compatibility contract with the synthesis toolchain; changing it breaks
//! downstream builds. Renderers take already-laid-out data and produce the
//! full module text in a single formatting pass.

/// Renderer for the synthesis-time configuration package.
pub mod pkg;
/// Renderer for the preloaded dual-port ROM entity.
pub mod rom;

/// `library`/`use` preamble shared by every generated unit.
const PREAMBLE: &str = "library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;

library fpga;
";
