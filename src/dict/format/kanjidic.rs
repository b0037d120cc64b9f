//! KANJIDIC2 transformation.
//!
//! Only `literal`, the codepoint and radical groups, and `misc/stroke_count`
//! are mandatory. Everything else is optional and comes out as `None` when
//! missing or, for numbers, unparsable. Where an element may repeat but the
//! model holds a single value (`literal`, `grade`, `stroke_count`, ...), the
//! first occurrence wins.

use std::str::FromStr;
use log::{debug, trace};

use super::schema::{
    CharacterChild, GroupChild, HeaderChild, KanjidicChild, MiscChild, ReadingMeaningChild,
};
use super::{language_of, non_empty};
use crate::dict::types::error::{DictError, Result};
use crate::dict::types::kanjidic::*;
use crate::dict::xml::Element;

/// Language assumed for meanings without an `m_lang` attribute.
pub const DEFAULT_MEANING_LANGUAGE: &str = "en";

/// Transforms the `<kanjidic2>` root into its header and characters.
pub fn transform(root: &Element) -> Result<(Option<KanjiDicHeader>, Vec<KanjiCharacter>)> {
    let mut header = None;
    let mut characters = Vec::new();

    for child in &root.children {
        match KanjidicChild::classify(child) {
            KanjidicChild::Header(element) => {
                if header.is_none() {
                    header = Some(transform_header(element));
                }
            }
            KanjidicChild::Character(element) => characters.push(transform_character(element)?),
            KanjidicChild::Unknown(name) => trace!("Skipping <{}> below the kanjidic2 root", name),
        }
    }

    Ok((header, characters))
}

fn transform_header(element: &Element) -> KanjiDicHeader {
    let mut header = KanjiDicHeader::default();
    for child in &element.children {
        match HeaderChild::classify(child) {
            HeaderChild::FileVersion(value) => header.file_version = value.map(str::to_string),
            HeaderChild::DatabaseVersion(value) => header.database_version = value.map(str::to_string),
            HeaderChild::DateOfCreation(value) => header.date_of_creation = value.map(str::to_string),
            HeaderChild::Unknown(name) => trace!("Skipping <{}> in header", name),
        }
    }
    header
}

/// Transforms one `<character>`.
pub fn transform_character(element: &Element) -> Result<KanjiCharacter> {
    let mut literal = None;
    let mut codepoint_group = None;
    let mut radical_group = None;
    let mut misc = None;
    let mut dictionary_references = Vec::new();
    let mut query_codes = Vec::new();
    let mut phonetic_readings = Vec::new();
    let mut meanings = Vec::new();
    let mut nanori_readings = Vec::new();

    for child in &element.children {
        match CharacterChild::classify(child) {
            CharacterChild::Literal(value) => {
                if literal.is_none() {
                    literal = Some(value);
                }
            }
            CharacterChild::Codepoints(group) => {
                codepoint_group = codepoint_group.or(Some(group));
            }
            CharacterChild::Radicals(group) => {
                radical_group = radical_group.or(Some(group));
            }
            CharacterChild::Misc(group) => {
                misc = misc.or(Some(group));
            }
            CharacterChild::DictionaryNumbers(group) => {
                dictionary_references.extend(group.children_named("dic_ref").map(decode_dictionary_reference));
            }
            CharacterChild::QueryCodes(group) => {
                query_codes.extend(group.children_named("q_code").map(decode_query_code));
            }
            CharacterChild::ReadingMeaning(group) => {
                collect_readings_and_meanings(group, &mut phonetic_readings, &mut meanings, &mut nanori_readings);
            }
            CharacterChild::Unknown(name) => trace!("Skipping <{}> in character", name),
        }
    }

    let literal = literal
        .flatten()
        .ok_or_else(|| DictError::structural("Character is missing its literal"))?
        .to_string();

    let codepoint_group = codepoint_group.ok_or_else(|| {
        DictError::structural(format!("Character {} is missing its codepoint group", literal))
    })?;
    let radical_group = radical_group.ok_or_else(|| {
        DictError::structural(format!("Character {} is missing its radical group", literal))
    })?;
    let misc = misc.ok_or_else(|| {
        DictError::structural(format!("Character {} is missing its misc group", literal))
    })?;

    let codepoints = codepoint_group
        .children_named("cp_value")
        .map(|value| Codepoint {
            value: value.text().unwrap_or_default().to_string(),
            standard: value.attribute("cp_type").unwrap_or_default().to_string(),
        })
        .collect();

    let radicals = radical_group
        .children_named("rad_value")
        .map(|value| Radical {
            value: value.text().unwrap_or_default().to_string(),
            radical_type: value.attribute("rad_type").unwrap_or_default().to_string(),
        })
        .collect();

    Ok(KanjiCharacter {
        miscellany: transform_misc(misc, &literal)?,
        literal,
        codepoints,
        radicals,
        dictionary_references: non_empty(dictionary_references),
        query_codes: non_empty(query_codes),
        phonetic_readings: non_empty(phonetic_readings),
        meanings: non_empty(meanings),
        nanori_readings: non_empty(nanori_readings),
    })
}

fn transform_misc(element: &Element, literal: &str) -> Result<Miscellany> {
    let mut grade = None;
    let mut stroke_count = None;
    let mut frequency = None;
    let mut jlpt = None;
    let mut radical_name = None;
    let mut variants = Vec::new();

    for child in &element.children {
        match MiscChild::classify(child) {
            MiscChild::Grade(value) => {
                grade = grade.or(value);
            }
            MiscChild::StrokeCount(value) => {
                stroke_count = stroke_count.or(value);
            }
            MiscChild::Frequency(value) => {
                frequency = frequency.or(value);
            }
            MiscChild::Jlpt(value) => {
                jlpt = jlpt.or(value);
            }
            MiscChild::RadicalName(value) => {
                radical_name = radical_name.or(value);
            }
            MiscChild::Variant(variant) => variants.push(Variant {
                value: variant.text().unwrap_or_default().to_string(),
                variant_type: variant.attribute("var_type").unwrap_or_default().to_string(),
            }),
            MiscChild::Unknown(name) => trace!("Skipping <{}> in misc", name),
        }
    }

    let stroke_count = stroke_count.ok_or_else(|| {
        DictError::structural(format!("Character {} is missing its stroke count", literal))
    })?;

    Ok(Miscellany {
        grade: grade.and_then(|value| parse_optional_number(value, "grade", literal)),
        stroke_count: parse_number(stroke_count, "stroke_count", literal)?,
        frequency: frequency.and_then(|value| parse_optional_number(value, "freq", literal)),
        jlpt: jlpt.and_then(|value| parse_optional_number(value, "jlpt", literal)),
        radical_name: radical_name.map(str::to_string),
        variants: non_empty(variants),
    })
}

fn decode_dictionary_reference(element: &Element) -> DictionaryReference {
    DictionaryReference {
        number: element.text().unwrap_or_default().to_string(),
        dictionary: element.attribute("dr_type").unwrap_or_default().to_string(),
        volume: element.attribute("m_vol").map(str::to_string),
        page: element.attribute("m_page").map(str::to_string),
    }
}

fn decode_query_code(element: &Element) -> QueryCode {
    QueryCode {
        code: element.text().unwrap_or_default().to_string(),
        code_type: element.attribute("qc_type").unwrap_or_default().to_string(),
        skip_misclassification: element.attribute("skip_misclass").map(str::to_string),
    }
}

/// Flattens every `<rmgroup>` of a `<reading_meaning>` block, in document order.
fn collect_readings_and_meanings(
    element: &Element,
    readings: &mut Vec<PhoneticReading>,
    meanings: &mut Vec<Meaning>,
    nanori: &mut Vec<String>,
) {
    for child in &element.children {
        match ReadingMeaningChild::classify(child) {
            ReadingMeaningChild::Group(group) => {
                for member in &group.children {
                    match GroupChild::classify(member) {
                        GroupChild::Reading(reading) => readings.push(PhoneticReading {
                            value: reading.text().unwrap_or_default().to_string(),
                            reading_type: reading.attribute("r_type").unwrap_or_default().to_string(),
                            on_type: reading.attribute("on_type").map(str::to_string),
                            status: reading.attribute("r_status").map(str::to_string),
                        }),
                        GroupChild::Meaning(meaning) => meanings.push(Meaning {
                            text: meaning.text().unwrap_or_default().to_string(),
                            language_code: meaning
                                .attribute("m_lang")
                                .map(str::to_string)
                                .unwrap_or_else(|| language_of(meaning, DEFAULT_MEANING_LANGUAGE)),
                        }),
                        GroupChild::Unknown(name) => trace!("Skipping <{}> in rmgroup", name),
                    }
                }
            }
            ReadingMeaningChild::Nanori(value) => nanori.extend(value.map(str::to_string)),
            ReadingMeaningChild::Unknown(name) => trace!("Skipping <{}> in reading_meaning", name),
        }
    }
}

fn parse_number<T: FromStr>(value: &str, field: &str, literal: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        DictError::structural(format!(
            "Character {} has an invalid {} value: {:?}",
            literal, field, value
        ))
    })
}

/// Unparsable values of optional fields are dropped.
fn parse_optional_number<T: FromStr>(value: &str, field: &str, literal: &str) -> Option<T> {
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        debug!("Character {} has an invalid {} value {:?}, leaving it out", literal, field, value);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, text: &str) -> Element {
        Element {
            text: Some(text.to_string()),
            ..Element::new(name)
        }
    }

    fn tagged(name: &str, text: &str, attrs: &[(&str, &str)]) -> Element {
        Element {
            attributes: attrs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            ..leaf(name, text)
        }
    }

    fn node(name: &str, children: Vec<Element>) -> Element {
        Element {
            children,
            ..Element::new(name)
        }
    }

    fn minimal_character(extra: Vec<Element>) -> Element {
        let mut children = vec![
            leaf("literal", "亜"),
            node("codepoint", vec![tagged("cp_value", "4e9c", &[("cp_type", "ucs")])]),
            node("radical", vec![tagged("rad_value", "7", &[("rad_type", "classical")])]),
            node("misc", vec![leaf("stroke_count", "7")]),
        ];
        children.extend(extra);
        node("character", children)
    }

    #[test]
    fn minimal_character_leaves_optional_groups_absent() {
        let character = transform_character(&minimal_character(vec![])).unwrap();
        assert_eq!(character.literal, "亜");
        assert_eq!(character.codepoints[0].standard, "ucs");
        assert_eq!(character.radicals[0].value, "7");
        assert_eq!(character.miscellany.stroke_count, 7);
        assert_eq!(character.miscellany.grade, None);
        assert_eq!(character.miscellany.variants, None);
        assert_eq!(character.dictionary_references, None);
        assert_eq!(character.query_codes, None);
        assert_eq!(character.phonetic_readings, None);
        assert_eq!(character.meanings, None);
        assert_eq!(character.nanori_readings, None);
    }

    #[test]
    fn mandatory_groups_are_checked() {
        let no_literal = node("character", vec![]);
        assert!(matches!(transform_character(&no_literal), Err(DictError::Structural(_))));

        let no_strokes = node(
            "character",
            vec![
                leaf("literal", "亜"),
                node("codepoint", vec![]),
                node("radical", vec![]),
                node("misc", vec![leaf("grade", "8")]),
            ],
        );
        let err = transform_character(&no_strokes).unwrap_err();
        assert!(err.to_string().contains("stroke count"), "{}", err);

        let mut no_codepoints = minimal_character(vec![]);
        no_codepoints.children.remove(1);
        let err = transform_character(&no_codepoints).unwrap_err();
        assert!(matches!(err, DictError::Structural(_)));
        assert!(err.to_string().contains("codepoint group"), "{}", err);

        let mut no_radicals = minimal_character(vec![]);
        no_radicals.children.remove(2);
        let err = transform_character(&no_radicals).unwrap_err();
        assert!(matches!(err, DictError::Structural(_)));
        assert!(err.to_string().contains("radical group"), "{}", err);
    }

    #[test]
    fn invalid_numbers_are_structural() {
        let character = minimal_character(vec![]);
        let mut broken = character.clone();
        broken.children[3] = node("misc", vec![leaf("stroke_count", "seven")]);
        assert!(matches!(transform_character(&broken), Err(DictError::Structural(_))));
    }

    #[test]
    fn invalid_optional_numbers_are_absent() {
        let mut character = minimal_character(vec![]);
        character.children[3] = node(
            "misc",
            vec![
                leaf("grade", "?"),
                leaf("stroke_count", "7"),
                leaf("freq", "n/a"),
                leaf("jlpt", "N2"),
                leaf("rad_name", "に"),
            ],
        );

        let character = transform_character(&character).unwrap();
        assert_eq!(character.miscellany.stroke_count, 7);
        assert_eq!(character.miscellany.grade, None);
        assert_eq!(character.miscellany.frequency, None);
        assert_eq!(character.miscellany.jlpt, None);
        assert_eq!(character.miscellany.radical_name.as_deref(), Some("に"));
    }

    #[test]
    fn meanings_default_to_english() {
        let character = transform_character(&minimal_character(vec![node(
            "reading_meaning",
            vec![
                node(
                    "rmgroup",
                    vec![
                        tagged("reading", "ア", &[("r_type", "ja_on")]),
                        leaf("meaning", "Asia"),
                        tagged("meaning", "Asie", &[("m_lang", "fr")]),
                    ],
                ),
                leaf("nanori", "つぎ"),
            ],
        )]))
        .unwrap();

        let meanings = character.meanings.unwrap();
        assert_eq!(meanings[0].language_code, "en");
        assert_eq!(meanings[1].language_code, "fr");
        assert_eq!(character.phonetic_readings.unwrap()[0].reading_type, "ja_on");
        assert_eq!(character.nanori_readings, Some(vec!["つぎ".to_string()]));
    }

    #[test]
    fn header_is_optional() {
        let root = node("kanjidic2", vec![minimal_character(vec![])]);
        let (header, characters) = transform(&root).unwrap();
        assert_eq!(header, None);
        assert_eq!(characters.len(), 1);
    }
}
