//! The dictionary container and its parse entry points.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;

use log::{debug, info};

use super::types::error::{DictError, Result};
use super::types::formats::{DictFormat, JmdictFormat, KanjidicFormat};
use super::utils::{read_source_text, strip_bom};
use super::xml::sanitize::escape_unknown_entities;
use super::xml::{QuickXmlTreeBuilder, TreeBuilder};

/// A fully decoded dictionary document.
///
/// Records keep document order. The container is immutable once parsed; use
/// [`into_records`](Self::into_records) to take ownership of the sequence.
#[derive(Debug, Clone)]
pub struct Dictionary<F: DictFormat> {
    header: F::Header,
    records: Vec<F::Record>,
    _format: PhantomData<F>,
}

/// A decoded JMdict document.
pub type JMdict = Dictionary<JmdictFormat>;

/// A decoded KANJIDIC2 document.
pub type KanjiDic = Dictionary<KanjidicFormat>;

impl<F: DictFormat> Dictionary<F> {
    /// Parses XML text with the default options.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        Self::from_xml_str_with(xml, &F::Options::default())
    }

    /// Parses XML text.
    ///
    /// # Errors
    /// - [`DictError::Syntax`] if the text is not well-formed XML
    /// - [`DictError::Structural`] if a mandatory element or value is missing
    pub fn from_xml_str_with(xml: &str, options: &F::Options) -> Result<Self> {
        Self::parse_with_builder(xml, options, &QuickXmlTreeBuilder)
    }

    /// Parses XML text using a caller-supplied XML engine.
    pub fn parse_with_builder(
        xml: &str,
        options: &F::Options,
        builder: &dyn TreeBuilder,
    ) -> Result<Self> {
        let xml = strip_bom(xml);
        let source = if F::ESCAPE_ENTITIES {
            escape_unknown_entities(xml)
        } else {
            xml.into()
        };

        let processor = F::value_processor(options);
        debug!(
            "Parsing {} document ({} bytes), value rewriting {}",
            F::DEBUG_NAME,
            source.len(),
            if processor.is_some() { "enabled" } else { "disabled" }
        );

        let root = builder
            .build(&source, processor.as_deref())
            .map_err(|e| DictError::Syntax {
                format: F::DEBUG_NAME,
                message: e.to_string(),
            })?;

        let (header, records) = F::transform_document(&root)?;
        info!("{} parsed: {} records", F::DEBUG_NAME, records.len());

        Ok(Self {
            header,
            records,
            _format: PhantomData,
        })
    }

    /// Reads and parses a file with the default options.
    pub fn from_xml_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_xml_file_with(path, &F::Options::default())
    }

    /// Reads and parses a file.
    ///
    /// # Errors
    /// [`DictError::Read`] if the file cannot be read or decoded, otherwise as
    /// [`from_xml_str_with`](Self::from_xml_str_with).
    pub fn from_xml_file_with(path: impl AsRef<Path>, options: &F::Options) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening {} file: {}", F::DEBUG_NAME, path.display());
        let text = read_source_text(path)?;
        Self::from_xml_str_with(&text, options)
    }

    /// Document-level metadata.
    ///
    /// Only KANJIDIC2 has any: its `<header>` block, if present. For JMdict
    /// this is `()`.
    pub fn header(&self) -> &F::Header {
        &self.header
    }

    pub fn records(&self) -> &[F::Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<F::Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F::Record> {
        self.records.iter()
    }

    /// Serializes the records as one compact JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Writes [`to_json`](Self::to_json) output to `path`, replacing any existing file.
    pub fn write_to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.records)?;
        writer.flush()?;
        info!("Wrote {} records to {}", self.records.len(), path.display());
        Ok(())
    }
}

impl<'a, F: DictFormat> IntoIterator for &'a Dictionary<F> {
    type Item = &'a F::Record;
    type IntoIter = std::slice::Iter<'a, F::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: DictFormat> IntoIterator for Dictionary<F> {
    type Item = F::Record;
    type IntoIter = std::vec::IntoIter<F::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
