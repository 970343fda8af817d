//! Configuration package renderer.
//!
//! Emits the boilerplate VHDL package holding the synthesis-time
//! configuration bit. The constant is named after the package, uppercased,
//! with a `_C` suffix. The bit value is supplied by the caller; this module
//! never consults the process environment.

use super::PREAMBLE;

/// Renders the configuration package with the given one-bit value.
///
/// The package name is used verbatim, like the ROM entity name.
pub fn render(package_name: &str, bit: bool) -> String {
    let value = if bit { "1" } else { "0" };
    let constant = format!("{}_C", package_name.to_uppercase());

    format!(
        r#"{PREAMBLE}
package {package_name} is
    constant {constant} : std_ulogic_vector(0 downto 0) := "{value}";
end package;

package body {package_name} is
end package body;
"#
    )
}
