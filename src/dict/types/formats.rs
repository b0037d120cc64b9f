//! Per-format behavior for the two dictionary grammars.

use std::fmt::Debug;

use serde::Serialize;

use super::error::{DictError, Result};
use super::jmdict::DictionaryEntry;
use super::kanjidic::{KanjiCharacter, KanjiDicHeader};
use super::options::ParseOptions;
use crate::dict::entities::EntityResolver;
use crate::dict::format::{jmdict, kanjidic};
use crate::dict::xml::{Element, ValueProcessor};

/// A trait that defines the behavior of one dictionary format (JMdict or KANJIDIC2).
pub trait DictFormat {
    /// A short name used in error messages and logging.
    const DEBUG_NAME: &'static str;

    /// Name of the document element.
    const ROOT_ELEMENT: &'static str;

    /// Whether custom entity references must be escaped before parsing.
    ///
    /// Only JMdict carries them.
    const ESCAPE_ENTITIES: bool;

    /// One decoded record.
    type Record: Serialize + Debug + Clone + Send + Sync;

    /// Document-level metadata kept next to the records.
    type Header: Debug + Clone + Default + Send + Sync;

    /// Parse-time configuration.
    type Options: Debug + Default;

    /// The rewriter applied to element text while the tree is built, if any.
    fn value_processor(options: &Self::Options) -> Option<Box<dyn ValueProcessor + '_>>;

    /// Transforms the children of an already verified root element.
    fn transform(root: &Element) -> Result<(Self::Header, Vec<Self::Record>)>;

    /// Verifies the root element name, then transforms the document.
    fn transform_document(root: &Element) -> Result<(Self::Header, Vec<Self::Record>)> {
        if root.name != Self::ROOT_ELEMENT {
            return Err(DictError::structural(format!(
                "Expected <{}> as the {} root element, found <{}>",
                Self::ROOT_ELEMENT,
                Self::DEBUG_NAME,
                root.name
            )));
        }
        Self::transform(root)
    }
}

/// Zero-cost marker struct for JMdict files.
#[derive(Debug, Clone, Copy)]
pub struct JmdictFormat;

impl DictFormat for JmdictFormat {
    const DEBUG_NAME: &'static str = "JMdict";
    const ROOT_ELEMENT: &'static str = "JMdict";
    const ESCAPE_ENTITIES: bool = true;
    type Record = DictionaryEntry;
    type Header = ();
    type Options = ParseOptions;

    fn value_processor(options: &ParseOptions) -> Option<Box<dyn ValueProcessor + '_>> {
        options
            .resolves_entities()
            .then(|| Box::new(EntityResolver::new(options.entities())) as Box<dyn ValueProcessor + '_>)
    }

    fn transform(root: &Element) -> Result<((), Vec<DictionaryEntry>)> {
        Ok(((), jmdict::transform(root)?))
    }
}

/// Zero-cost marker struct for KANJIDIC2 files.
#[derive(Debug, Clone, Copy)]
pub struct KanjidicFormat;

impl DictFormat for KanjidicFormat {
    const DEBUG_NAME: &'static str = "KANJIDIC2";
    const ROOT_ELEMENT: &'static str = "kanjidic2";
    const ESCAPE_ENTITIES: bool = false;
    type Record = KanjiCharacter;
    type Header = Option<KanjiDicHeader>;
    type Options = ();

    fn value_processor(_: &()) -> Option<Box<dyn ValueProcessor + '_>> {
        None
    }

    fn transform(root: &Element) -> Result<(Option<KanjiDicHeader>, Vec<KanjiCharacter>)> {
        kanjidic::transform(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_root_is_structural() {
        let root = Element::new("kanjidic2");
        let err = JmdictFormat::transform_document(&root).unwrap_err();
        assert!(matches!(err, DictError::Structural(_)));
        assert!(err.to_string().contains("<JMdict>"), "{}", err);
    }

    #[test]
    fn resolver_only_when_enabled() {
        assert!(JmdictFormat::value_processor(&ParseOptions::new()).is_none());
        let options = ParseOptions::new().resolve_entities(true);
        let processor = JmdictFormat::value_processor(&options).unwrap();
        assert_eq!(processor.process("&n;".to_string()), "noun (common) (futsuumeishi)");
        assert!(KanjidicFormat::value_processor(&()).is_none());
    }
}
