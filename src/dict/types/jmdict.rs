//! Output records for the JMdict word dictionary.
//!
//! One [`DictionaryEntry`] is produced per `<entry>` element. Every record is
//! built in full by the transformer and never mutated afterwards. Optional
//! fields that were not present in the source are `None` and are omitted from
//! the JSON output.

use serde::{Serialize, Serializer};
use std::fmt;

/// A headword unit: its written forms, readings, and senses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// The `ent_seq` sequence number, kept as text.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kanji_forms: Option<Vec<KanjiForm>>,
    pub reading_forms: Vec<ReadingForm>,
    pub senses: Vec<Sense>,
}

/// A written (logographic) representation of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiForm {
    pub text: String,
    /// Frequency tags such as `news1`, `ichi1` or `nf12`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<String>>,
}

/// A phonetic (kana) representation of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingForm {
    pub text: String,
    /// Set when the reading cannot be regarded as a true reading of the kanji,
    /// for example in foreign names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_true_reading_of_kanji: Option<bool>,
    /// Kanji forms this reading applies to. `None` means all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_codes: Option<Vec<String>>,
}

/// One distinct meaning of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    /// Explicit on this sense, or carried over from the previous sense of the same entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts_of_speech: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kanji_restrictions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_restrictions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_references: Option<Vec<CrossReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_of_application: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miscellaneous_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_languages: Option<Vec<LanguageSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect_tags: Option<Vec<String>>,
    pub glosses: Vec<Gloss>,
}

/// A pointer from a sense to a related entry, reading, or sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_reading: Option<String>,
    /// 1-based index into the senses of the target entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sense_index: Option<u32>,
}

/// Whether a language source fully or partially describes the loanword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    #[default]
    Full,
    Partial,
}

/// The source of a loanword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSource {
    pub source_word: String,
    /// ISO 639-2 code, `"eng"` when unspecified.
    pub language_code: String,
    pub completeness: Completeness,
    /// "Wasei": the word was constructed from source-language words rather
    /// than borrowed from an actual phrase.
    pub is_constructed_compound: bool,
}

/// A single-language translated equivalent of a sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gloss {
    pub language_code: String,
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammatical_gender: Option<GrammaticalGender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<SemanticType>,
}

/// Gender of a gloss in the target language.
///
/// Values outside the three documented genders are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammaticalGender {
    Masculine,
    Feminine,
    Neuter,
    Other(String),
}

impl GrammaticalGender {
    pub fn from_code(code: &str) -> Self {
        match code {
            "masculine" => Self::Masculine,
            "feminine" => Self::Feminine,
            "neuter" => Self::Neuter,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
            Self::Other(code) => code,
        }
    }
}

/// The kind of a gloss, decoded from the `g_type` attribute.
///
/// Unknown codes are passed through verbatim so newer source files still load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    Explanation,
    Literal,
    Figurative,
    Trademark,
    Other(String),
}

impl SemanticType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "expl" => Self::Explanation,
            "lit" => Self::Literal,
            "fig" => Self::Figurative,
            "tm" => Self::Trademark,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Explanation => "explanation",
            Self::Literal => "literal",
            Self::Figurative => "figurative",
            Self::Trademark => "trademark",
            Self::Other(code) => code,
        }
    }
}

macro_rules! serialize_as_str {
    ($($ty:ty),+) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

serialize_as_str!(GrammaticalGender, SemanticType);
