//! Preloaded ROM entity renderer.
//!
//! Emits a synchronous, dual-read-port ROM entity preloaded with the laid-out
//! image. Both ports share one clock and the same array; each latches its data
//! output on the rising edge from the word selected by bits 31 downto 2 of its
//! byte address input.

use crate::common::constants::{NOP_WORD, ROM_ADDR_BITS};
use crate::rom::RomLayout;

use super::PREAMBLE;

/// Indentation of the initializer entries (12 spaces).
const INIT_INDENT: &str = "            ";

/// Renders the complete ROM module for a layout.
///
/// Initializer entries appear one per line in ascending address order,
/// address as 4-digit zero-padded decimal, value as 8 uppercase hex digits,
/// followed by a single `others` clause mapping every remaining address to
/// the NOP filler.
pub fn render(layout: &RomLayout, entity_name: &str) -> String {
    let cases: String = layout
        .entries()
        .iter()
        .enumerate()
        .map(|(address, word)| format!("{INIT_INDENT}{address:04} => x\"{word:08X}\",\n"))
        .collect();

    format!(
        r#"{PREAMBLE}
entity {entity_name} is
    port (
        clk_i : in std_ulogic;
        port_a_addr_i : in std_ulogic_vector(31 downto 0);
        port_a_data_o : out std_ulogic_vector(31 downto 0);
        port_b_addr_i : in std_ulogic_vector(31 downto 0);
        port_b_data_o : out std_ulogic_vector(31 downto 0)
    );
end entity;

architecture rtl of {entity_name} is

    type rom_t is array (0 to 2**{ROM_ADDR_BITS}) of std_ulogic_vector(31 downto 0);

    constant ROM : rom_t := (
{cases}
{INIT_INDENT}others => x"{NOP_WORD:08X}"
    );

begin

    seq : process (clk_i) is
    begin
        if rising_edge(clk_i) then
            port_a_data_o <= ROM(to_integer(unsigned(port_a_addr_i(31 downto 2))));
            port_b_data_o <= ROM(to_integer(unsigned(port_b_addr_i(31 downto 2))));
        end if;
    end process;

end architecture;
"#
    )
}
