//! Source text loading.

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use super::types::error::{DictError, Result};

/// Reads a dictionary file into a string.
///
/// A UTF-8 or UTF-16 byte-order mark selects the encoding and is dropped;
/// without one the file is taken as UTF-8. Malformed byte sequences are an
/// error rather than being replaced.
pub fn read_source_text(path: &Path) -> Result<String> {
    let read_error = |source: io::Error| DictError::Read {
        path: path.to_path_buf(),
        source,
    };

    let bytes = fs::read(path).map_err(read_error)?;
    let (encoding, bom_length) = Encoding::for_bom(&bytes).unwrap_or((UTF_8, 0));
    debug!("Decoding {} bytes as {}", bytes.len(), encoding.name());

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_length..])
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            read_error(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("input is not valid {}", encoding.name()),
            ))
        })
}

/// Drops a leading U+FEFF left over from an in-memory source.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
