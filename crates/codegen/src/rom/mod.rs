//! ROM Generation Pipeline.
//!
//! This module turns a decoded image into the final VHDL text. It performs:
//! 1. **Layout:** Assigning each word its ROM address and truncating at capacity.
//! 2. **Validation:** Collecting warnings for dropped image data, fatal under strict mode.
//! 3. **Rendering:** Delegating to [`crate::vhdl`] for the textual module.

use tracing::info;

use crate::common::error::{RomError, RomWarning};
use crate::config::Config;
use crate::image::ProgramImage;
use crate::vhdl;

pub mod layout;

pub use layout::RomLayout;

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct RomOutput {
    /// The rendered VHDL module.
    pub vhdl: String,
    /// Image defects absorbed while producing the text, in detection order.
    pub warnings: Vec<RomWarning>,
}

/// Generates the ROM module for an image.
///
/// Runs layout and rendering in one pass. In the default mode every image is
/// accepted and defects are reported through [`RomOutput::warnings`]; under
/// [`Config::strict`] the first defect aborts generation instead.
///
/// # Errors
///
/// Returns the promoted [`RomError`] for the first warning when
/// `config.strict` is set.
pub fn generate(image: &ProgramImage, config: &Config) -> Result<RomOutput, RomError> {
    let layout = RomLayout::from_image(image);

    let mut warnings = Vec::new();
    if image.stray_bytes() > 0 {
        warnings.push(RomWarning::TruncatedImage {
            bytes: image.stray_bytes(),
        });
    }
    if layout.dropped_words() > 0 {
        warnings.push(RomWarning::CapacityExceeded {
            words: image.len(),
            dropped: layout.dropped_words(),
        });
    }

    if config.strict {
        if let Some(warning) = warnings.first() {
            return Err((*warning).into());
        }
    }

    info!(
        entity = %config.entity_name,
        words = layout.entries().len(),
        warnings = warnings.len(),
        "rendering ROM module"
    );

    let vhdl = vhdl::rom::render(&layout, &config.entity_name);
    Ok(RomOutput { vhdl, warnings })
}
