//! # jmdict-reader
//!
//! A reader for the JMdict (Japanese-multilingual word dictionary) and
//! KANJIDIC2 (kanji character dictionary) XML files.
//!
//! Documents are parsed whole into typed records that serialize to JSON with
//! camelCase keys and absent optional fields omitted.
//!
//! ```
//! use jmdict_reader::{JMdict, ParseOptions};
//!
//! let xml = r#"<JMdict><entry>
//!   <ent_seq>1000000</ent_seq>
//!   <r_ele><reb>ヽ</reb></r_ele>
//!   <sense><pos>&unc;</pos><gloss>repetition mark in katakana</gloss></sense>
//! </entry></JMdict>"#;
//!
//! let options = ParseOptions::new().resolve_entities(true);
//! let dict = JMdict::from_xml_str_with(xml, &options).unwrap();
//! assert_eq!(dict.records()[0].id, "1000000");
//! assert_eq!(
//!     dict.records()[0].senses[0].parts_of_speech,
//!     Some(vec!["unclassified".to_string()])
//! );
//! ```
pub mod dict;

// Re-export the main types for convenience
pub use dict::{
    entities::{EntityMap, EntityResolver, DEFAULT_ENTITIES},
    types::{
        formats::{DictFormat, JmdictFormat, KanjidicFormat},
        jmdict::{
            Completeness, CrossReference, DictionaryEntry, Gloss, GrammaticalGender, KanjiForm,
            LanguageSource, ReadingForm, SemanticType, Sense,
        },
        kanjidic::{
            Codepoint, DictionaryReference, KanjiCharacter, KanjiDicHeader, Meaning, Miscellany,
            PhoneticReading, QueryCode, Radical, Variant,
        },
        options::ParseOptions,
    },
    DictError, Dictionary, JMdict, KanjiDic, Result,
};
