//! Output models, error types, options and format definitions.

pub mod error;
pub mod formats;
pub mod jmdict;
pub mod kanjidic;
pub mod options;
