//! # ROM Rendering Tests
//!
//! This module contains unit tests for the emitted VHDL text: the full-module
//! contract with the synthesis toolchain, initializer coverage and ordering,
//! and the warning/strict behavior of the generation pipeline.

use pretty_assertions::assert_eq;
use rvrom_core::common::error::{RomError, RomWarning};
use rvrom_core::config::Config;
use rvrom_core::image::ProgramImage;
use rvrom_core::rom::{self, RomLayout};
use rvrom_core::vhdl;

/// Renders an image's ROM module with the given entity name.
fn render(bytes: &[u8], entity: &str) -> String {
    let image = ProgramImage::from_bytes(bytes);
    vhdl::rom::render(&RomLayout::from_image(&image), entity)
}

/// Extracts the numbered initializer entries as (address, value) pairs.
///
/// The `others` clause is not numbered and is excluded.
fn case_lines(vhdl: &str) -> Vec<(usize, String)> {
    vhdl.lines()
        .filter_map(|line| {
            let (addr, value) = line.trim_start().split_once(" => ")?;
            let addr: usize = addr.parse().ok()?;
            Some((addr, value.trim_end_matches(',').to_string()))
        })
        .collect()
}

#[test]
fn test_full_module_text() {
    let vhdl = render(&[0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00], "rom0");
    let expected = r#"library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;

library fpga;

entity rom0 is
    port (
        clk_i : in std_ulogic;
        port_a_addr_i : in std_ulogic_vector(31 downto 0);
        port_a_data_o : out std_ulogic_vector(31 downto 0);
        port_b_addr_i : in std_ulogic_vector(31 downto 0);
        port_b_data_o : out std_ulogic_vector(31 downto 0)
    );
end entity;

architecture rtl of rom0 is

    type rom_t is array (0 to 2**10) of std_ulogic_vector(31 downto 0);

    constant ROM : rom_t := (
            0000 => x"00000001",
            0001 => x"00000002",

            others => x"00000013"
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
"#;
    assert_eq!(vhdl, expected);
}

#[test]
fn test_entity_name_is_used_verbatim() {
    let vhdl = render(&[], "app_rom");
    assert!(vhdl.contains("entity app_rom is"));
    assert!(vhdl.contains("architecture rtl of app_rom is"));
}

#[test]
fn test_initializer_is_dense_ascending_and_unique() {
    let bytes: Vec<u8> = (0..40u32).flat_map(|w| w.to_le_bytes()).collect();
    let vhdl = render(&bytes, "rom0");
    let addresses: Vec<usize> = case_lines(&vhdl).iter().map(|(a, _)| *a).collect();
    assert_eq!(addresses, (0..40).collect::<Vec<_>>());
}

#[test]
fn test_values_are_uppercase_fixed_width_hex() {
    let vhdl = render(&[0xEF, 0xBE, 0xAD, 0xDE, 0x0A, 0x00, 0x00, 0x00], "rom0");
    let cases = case_lines(&vhdl);
    assert_eq!(cases[0].1, "x\"DEADBEEF\"");
    assert_eq!(cases[1].1, "x\"0000000A\"");
}

#[test]
fn test_exactly_one_others_clause_with_nop() {
    let vhdl = render(&[0x01, 0x00, 0x00, 0x00], "rom0");
    let others: Vec<&str> = vhdl
        .lines()
        .filter(|line| line.trim_start().starts_with("others => "))
        .collect();
    assert_eq!(others, vec!["            others => x\"00000013\""]);
}

#[test]
fn test_empty_image_renders_only_the_default_clause() {
    // Scenario: zero-length input still yields a complete, filler-only ROM.
    let vhdl = render(&[], "rom0");
    assert!(case_lines(&vhdl).is_empty());
    assert!(vhdl.contains("others => x\"00000013\""));
}

#[test]
fn test_truncated_word_does_not_reach_the_output() {
    let vhdl = render(&[0xFF, 0xFF, 0xFF, 0xFF, 0x00], "rom0");
    let cases = case_lines(&vhdl);
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0], (0, "x\"FFFFFFFF\"".to_string()));
}

#[test]
fn test_words_past_capacity_never_appear() {
    let bytes: Vec<u8> = (0..1100u32).flat_map(|w| w.to_le_bytes()).collect();
    let vhdl = render(&bytes, "rom0");
    let cases = case_lines(&vhdl);
    assert_eq!(cases.len(), 1024);
    assert_eq!(cases.last().map(|(a, _)| *a), Some(1023));
    // Value 1024 belongs to the first dropped word.
    assert!(!vhdl.contains("x\"00000400\""));
}

#[test]
fn test_generate_clean_image_has_no_warnings() {
    let image = ProgramImage::from_bytes(&[0x13, 0x00, 0x00, 0x00]);
    let output = rom::generate(&image, &Config::default()).unwrap();
    assert!(output.warnings.is_empty());
    assert!(output.vhdl.contains("entity bootrom is"));
}

#[test]
fn test_generate_reports_truncated_tail() {
    let image = ProgramImage::from_bytes(&[0x13, 0x00, 0x00, 0x00, 0xAA]);
    let output = rom::generate(&image, &Config::default()).unwrap();
    assert_eq!(output.warnings, vec![RomWarning::TruncatedImage { bytes: 1 }]);
}

#[test]
fn test_generate_reports_capacity_overflow() {
    let bytes: Vec<u8> = (0..1030u32).flat_map(|w| w.to_le_bytes()).collect();
    let image = ProgramImage::from_bytes(&bytes);
    let output = rom::generate(&image, &Config::default()).unwrap();
    assert_eq!(
        output.warnings,
        vec![RomWarning::CapacityExceeded {
            words: 1030,
            dropped: 6
        }]
    );
}

#[test]
fn test_strict_mode_rejects_truncated_tail() {
    let image = ProgramImage::from_bytes(&[0x13, 0x00, 0x00, 0x00, 0xAA]);
    let config = Config {
        strict: true,
        ..Config::default()
    };
    match rom::generate(&image, &config) {
        Err(RomError::TruncatedImage { bytes: 1 }) => {}
        other => panic!("expected TruncatedImage error, got {:?}", other),
    }
}

#[test]
fn test_strict_mode_rejects_capacity_overflow() {
    let bytes: Vec<u8> = (0..1030u32).flat_map(|w| w.to_le_bytes()).collect();
    let image = ProgramImage::from_bytes(&bytes);
    let config = Config {
        strict: true,
        ..Config::default()
    };
    match rom::generate(&image, &config) {
        Err(RomError::CapacityExceeded { words: 1030 }) => {}
        other => panic!("expected CapacityExceeded error, got {:?}", other),
    }
}

#[test]
fn test_strict_mode_accepts_a_clean_image() {
    let image = ProgramImage::from_bytes(&[0x13, 0x00, 0x00, 0x00]);
    let config = Config {
        strict: true,
        ..Config::default()
    };
    assert!(rom::generate(&image, &config).is_ok());
}
