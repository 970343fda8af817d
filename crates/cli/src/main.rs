//! VHDL ROM generator CLI.
//!
//! This binary provides a single entry point for both generators. It performs:
//! 1. **ROM generation:** Convert a flat binary image into a preloaded dual-port ROM entity.
//! 2. **Config package:** Stamp the synthesis-time configuration bit into its package.
//! 3. **Shorthand:** `rvrom <IMAGE> <ENTITY>` with no subcommand behaves like `rvrom rom`.
//!
//! The generated text goes to stdout; diagnostics and logging go to stderr.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

use rvrom_core::config::Config;
use rvrom_core::image::ProgramImage;
use rvrom_core::{rom, vhdl};

/// Environment variable consulted when `rvrom config` is run without `--value`.
const CONFIG_BIT_ENV: &str = "RVROM_CONFIG";

#[derive(Parser, Debug)]
#[command(
    name = "rvrom",
    version,
    about = "VHDL ROM generator for RISC-V FPGA cores",
    long_about = "Generate a preloaded dual-port ROM entity from a flat binary image, or the\nsynthesis-time configuration package.\n\nThe VHDL text is written to stdout; redirect it into the synthesis file set.\n\nExamples:\n  rvrom software/bootloader.bin bootrom > rtl/gen/bootrom.vhd\n  rvrom rom app.bin app_rom --strict\n  rvrom config fpga_config --value 1"
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Flat binary image (shorthand for `rvrom rom <IMAGE> <ENTITY>`).
    image: Option<PathBuf>,

    /// Entity name for the generated ROM module.
    entity: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a preloaded dual-port ROM entity from a flat binary image.
    Rom {
        /// Flat little-endian instruction image.
        image: PathBuf,

        /// Entity name; overrides the configured default.
        entity: Option<String>,

        /// Generator configuration as a JSON file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Reject images with stray trailing bytes or more words than the ROM holds.
        #[arg(long)]
        strict: bool,
    },

    /// Generate the synthesis-time configuration package.
    Config {
        /// VHDL package name; the constant is the uppercased name plus `_C`.
        #[arg(default_value = "fpga_config")]
        package: String,

        /// Configuration bit (`0` or `1`); falls back to $RVROM_CONFIG.
        #[arg(long)]
        value: Option<String>,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Rom {
            image,
            entity,
            config,
            strict,
        }) => cmd_rom(&image, entity, config.as_deref(), strict),
        Some(Commands::Config { package, value }) => cmd_config(&package, value),
        None => match (cli.image, cli.entity) {
            (Some(image), Some(entity)) => cmd_rom(&image, Some(entity), None, false),
            _ => {
                eprintln!("rvrom: pass an image and an entity name, or a subcommand");
                eprintln!();
                eprintln!("  rvrom <image.bin> <entity>       ROM module on stdout");
                eprintln!("  rvrom rom <image.bin> [entity]   Same, with --config/--strict");
                eprintln!("  rvrom config [package]           Configuration package on stdout");
                eprintln!();
                eprintln!("  rvrom --help  for full options");
                process::exit(1);
            }
        },
    }
}

/// Generates the ROM module and writes it to stdout.
///
/// Reads the optional JSON config first, then applies the command-line
/// overrides. Absorbed image defects are echoed to stderr; under `--strict`
/// the first one is fatal.
fn cmd_rom(image_path: &Path, entity: Option<String>, config_path: Option<&Path>, strict: bool) {
    let mut config = config_path.map_or_else(Config::default, load_config);
    if let Some(entity) = entity {
        config.entity_name = entity;
    }
    config.strict |= strict;

    let image = ProgramImage::from_file(image_path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });

    let output = rom::generate(&image, &config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });

    for warning in &output.warnings {
        eprintln!("[rvrom] WARNING: {}", warning);
    }

    print!("{}", output.vhdl);
}

/// Generates the configuration package and writes it to stdout.
///
/// The bit comes from `--value` or, failing that, from $RVROM_CONFIG. The
/// core renderer only ever sees the explicit value.
fn cmd_config(package: &str, value: Option<String>) {
    let raw = value
        .or_else(|| env::var(CONFIG_BIT_ENV).ok())
        .unwrap_or_else(|| {
            eprintln!(
                "[!] FATAL: no configuration bit; pass --value 0|1 or set ${}",
                CONFIG_BIT_ENV
            );
            process::exit(1);
        });

    let bit = match raw.as_str() {
        "0" => false,
        "1" => true,
        other => {
            eprintln!("[!] FATAL: configuration bit must be 0 or 1, got '{}'", other);
            process::exit(1);
        }
    };

    print!("{}", vhdl::pkg::render(package, bit));
}

/// Reads and parses a JSON generator configuration, fatal on failure.
fn load_config(path: &Path) -> Config {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read config '{}': {}", path.display(), e);
        process::exit(1);
    });
    Config::from_json(&json).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    })
}

/// Routes `tracing` output to stderr, filtered by `RUST_LOG`.
///
/// Stdout stays reserved for the generated VHDL.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
