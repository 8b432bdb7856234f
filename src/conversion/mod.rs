//! JSON to CSV conversion module
//!
//! Holds mode classification, configuration, and the engine that drives the
//! pipeline from parsed JSON to rendered CSV.

pub mod config;
pub mod engine;
pub mod mode;

pub use config::ConversionConfig;
pub use engine::{
    convert_json_from_source, convert_json_string, convert_json_to_csv, ConversionEngine,
    ConversionMetadata, CsvData,
};
pub use mode::{Mode, ModeSelection};

pub use crate::error::ConversionResult;
