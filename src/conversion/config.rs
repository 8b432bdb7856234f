//! Configuration options for JSON to CSV conversion

use crate::conversion::mode::ModeSelection;

/// Conversion configuration options
#[derive(Debug, Clone, Default)]
pub struct ConversionConfig {
    /// Output shape: auto-detect (default) or force flatten/transpose
    pub mode: ModeSelection,
}

impl ConversionConfig {
    pub fn with_mode(mode: ModeSelection) -> Self {
        Self { mode }
    }
}
