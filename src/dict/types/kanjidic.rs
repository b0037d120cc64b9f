//! Output records for the KANJIDIC2 character dictionary.
//!
//! Type tags (`cp_type`, `rad_type`, `dr_type`, ...) are kept as the source
//! strings; the set of dictionaries and query-code schemes keeps growing
//! between releases.

use serde::Serialize;

/// Version information from the `<header>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiDicHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_creation: Option<String>,
}

/// A single kanji and everything KANJIDIC2 records about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiCharacter {
    pub literal: String,
    pub codepoints: Vec<Codepoint>,
    pub radicals: Vec<Radical>,
    pub miscellany: Miscellany,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_references: Option<Vec<DictionaryReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_codes: Option<Vec<QueryCode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_readings: Option<Vec<PhoneticReading>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<Meaning>>,
    /// Readings used only in names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nanori_readings: Option<Vec<String>>,
}

/// The code of the character in one coding standard (`ucs`, `jis208`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Codepoint {
    pub value: String,
    pub standard: String,
}

/// A radical number under one classification (`classical` or `nelson_c`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Radical {
    pub value: String,
    pub radical_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Miscellany {
    /// Jouyou grade (1-6, 8) or jinmeiyou grade (9-10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    pub stroke_count: u32,
    /// Rank among the 2,500 most frequently used kanji in newspapers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    /// Pre-2010 JLPT level (1-4).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radical_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
}

/// A cross-reference to a variant form of the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub value: String,
    pub variant_type: String,
}

/// An index number in a published kanji dictionary or course book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryReference {
    pub number: String,
    pub dictionary: String,
    /// Morohashi volume, only for `dr_type="moro"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Morohashi page, only for `dr_type="moro"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// A lookup code such as SKIP or four-corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCode {
    pub code: String,
    pub code_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_misclassification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticReading {
    pub value: String,
    /// `ja_on`, `ja_kun`, `pinyin`, `korean_r`, `korean_h`, `vietnam`.
    pub reading_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_type: Option<String>,
    /// Jouyou approval marker (`r_status="jy"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub text: String,
    /// ISO 639-1 code, `"en"` when unspecified.
    pub language_code: String,
}
