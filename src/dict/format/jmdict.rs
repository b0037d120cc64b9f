//! # JMdict transformation
//!
//! Turns the `<JMdict>` element tree into [`DictionaryEntry`] records, in
//! document order. Any missing mandatory value aborts the whole document.
//!
//! ## Parts-of-speech inheritance
//! A `<sense>` without `<pos>` children takes the parts of speech of the
//! sense before it. The carried value is threaded through a fold over the
//! senses of one entry and starts out empty for every entry.

use log::trace;

use super::schema::{EntryChild, JmdictChild, KanjiFormChild, ReadingFormChild, SenseChild};
use super::xref::decode_cross_reference;
use super::{language_of, non_empty};
use crate::dict::types::error::{DictError, Result};
use crate::dict::types::jmdict::*;
use crate::dict::xml::Element;

/// Language assumed for glosses and language sources without a language tag.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Transforms every `<entry>` below the root.
pub fn transform(root: &Element) -> Result<Vec<DictionaryEntry>> {
    root.children
        .iter()
        .filter_map(|child| match JmdictChild::classify(child) {
            JmdictChild::Entry(entry) => Some(entry),
            JmdictChild::Unknown(name) => {
                trace!("Skipping <{}> below the JMdict root", name);
                None
            }
        })
        .map(transform_entry)
        .collect()
}

/// Transforms one `<entry>`.
pub fn transform_entry(entry: &Element) -> Result<DictionaryEntry> {
    let mut id = None;
    let mut kanji_elements = Vec::new();
    let mut reading_elements = Vec::new();
    let mut sense_elements = Vec::new();

    for child in &entry.children {
        match EntryChild::classify(child) {
            EntryChild::Sequence(text) => {
                if id.is_none() {
                    id = Some(text);
                }
            }
            EntryChild::KanjiForm(element) => kanji_elements.push(element),
            EntryChild::ReadingForm(element) => reading_elements.push(element),
            EntryChild::Sense(element) => sense_elements.push(element),
            EntryChild::Unknown(name) => trace!("Skipping <{}> in entry", name),
        }
    }

    let id = id
        .flatten()
        .ok_or_else(|| DictError::structural("Entry is missing ID"))?
        .to_string();

    let kanji_forms = kanji_elements
        .into_iter()
        .map(|element| transform_kanji_form(element, &id))
        .collect::<Result<Vec<_>>>()?;

    let reading_forms = reading_elements
        .into_iter()
        .map(|element| transform_reading_form(element, &id))
        .collect::<Result<Vec<_>>>()?;
    if reading_forms.is_empty() {
        return Err(DictError::structural(format!("Entry {} has no reading elements", id)));
    }

    if sense_elements.is_empty() {
        return Err(DictError::structural(format!("Entry {} has no sense elements", id)));
    }
    let (senses, _) = sense_elements.into_iter().fold(
        (Vec::new(), None),
        |(mut senses, inherited), element| {
            let sense = transform_sense(element, inherited);
            let carried = sense.parts_of_speech.clone();
            senses.push(sense);
            (senses, carried)
        },
    );

    Ok(DictionaryEntry {
        id,
        kanji_forms: non_empty(kanji_forms),
        reading_forms,
        senses,
    })
}

fn transform_kanji_form(element: &Element, entry_id: &str) -> Result<KanjiForm> {
    let mut text = None;
    let mut priority_codes = Vec::new();
    let mut annotations = Vec::new();

    for child in &element.children {
        match KanjiFormChild::classify(child) {
            KanjiFormChild::Text(value) => {
                if text.is_none() {
                    text = Some(value);
                }
            }
            KanjiFormChild::Annotation(value) => annotations.extend(value.map(str::to_string)),
            KanjiFormChild::Priority(value) => priority_codes.extend(value.map(str::to_string)),
            KanjiFormChild::Unknown(name) => trace!("Skipping <{}> in k_ele", name),
        }
    }

    let text = text.flatten().ok_or_else(|| {
        DictError::structural(format!("Kanji element is missing kanji (entry {})", entry_id))
    })?;

    Ok(KanjiForm {
        text: text.to_string(),
        priority_codes: non_empty(priority_codes),
        annotations: non_empty(annotations),
    })
}

fn transform_reading_form(element: &Element, entry_id: &str) -> Result<ReadingForm> {
    let mut text = None;
    let mut no_kanji = false;
    let mut restricted_to = Vec::new();
    let mut annotations = Vec::new();
    let mut priority_codes = Vec::new();

    for child in &element.children {
        match ReadingFormChild::classify(child) {
            ReadingFormChild::Text(value) => {
                if text.is_none() {
                    text = Some(value);
                }
            }
            ReadingFormChild::NoKanji => no_kanji = true,
            ReadingFormChild::Restriction(value) => restricted_to.extend(value.map(str::to_string)),
            ReadingFormChild::Annotation(value) => annotations.extend(value.map(str::to_string)),
            ReadingFormChild::Priority(value) => priority_codes.extend(value.map(str::to_string)),
            ReadingFormChild::Unknown(name) => trace!("Skipping <{}> in r_ele", name),
        }
    }

    let text = text.flatten().ok_or_else(|| {
        DictError::structural(format!("Reading element is missing reading (entry {})", entry_id))
    })?;

    Ok(ReadingForm {
        text: text.to_string(),
        is_not_true_reading_of_kanji: no_kanji.then_some(true),
        restricted_to: non_empty(restricted_to),
        annotations: non_empty(annotations),
        priority_codes: non_empty(priority_codes),
    })
}

/// Transforms one `<sense>`. `inherited` is the parts-of-speech list in effect
/// after the previous sense of the same entry.
pub fn transform_sense(element: &Element, inherited: Option<Vec<String>>) -> Sense {
    let mut kanji_restrictions = Vec::new();
    let mut reading_restrictions = Vec::new();
    let mut parts_of_speech = Vec::new();
    let mut cross_references = Vec::new();
    let mut antonyms = Vec::new();
    let mut fields = Vec::new();
    let mut miscellaneous = Vec::new();
    let mut notes = Vec::new();
    let mut sources = Vec::new();
    let mut dialects = Vec::new();
    let mut glosses = Vec::new();

    for child in &element.children {
        match SenseChild::classify(child) {
            SenseChild::KanjiRestriction(value) => kanji_restrictions.extend(value.map(str::to_string)),
            SenseChild::ReadingRestriction(value) => reading_restrictions.extend(value.map(str::to_string)),
            SenseChild::PartOfSpeech(value) => parts_of_speech.extend(value.map(str::to_string)),
            SenseChild::CrossReference(value) => cross_references.extend(value.map(decode_cross_reference)),
            SenseChild::Antonym(value) => antonyms.extend(value.map(str::to_string)),
            SenseChild::Field(value) => fields.extend(value.map(str::to_string)),
            SenseChild::Miscellaneous(value) => miscellaneous.extend(value.map(str::to_string)),
            SenseChild::Note(value) => notes.extend(value.map(str::to_string)),
            SenseChild::LanguageSource(source) => sources.push(decode_language_source(source)),
            SenseChild::Dialect(value) => dialects.extend(value.map(str::to_string)),
            SenseChild::Gloss(gloss) => glosses.push(decode_gloss(gloss)),
            SenseChild::Unknown(name) => trace!("Skipping <{}> in sense", name),
        }
    }

    Sense {
        parts_of_speech: non_empty(parts_of_speech).or(inherited),
        kanji_restrictions: non_empty(kanji_restrictions),
        reading_restrictions: non_empty(reading_restrictions),
        cross_references: non_empty(cross_references),
        antonyms: non_empty(antonyms),
        fields_of_application: non_empty(fields),
        miscellaneous_tags: non_empty(miscellaneous),
        notes: non_empty(notes),
        source_languages: non_empty(sources),
        dialect_tags: non_empty(dialects),
        glosses,
    }
}

/// Decodes an `<lsource>` element.
///
/// Without attributes this yields an English, full, non-wasei source.
pub fn decode_language_source(element: &Element) -> LanguageSource {
    let completeness = match element.attribute("ls_type") {
        Some("part") => Completeness::Partial,
        _ => Completeness::Full,
    };

    LanguageSource {
        source_word: element.text().unwrap_or_default().to_string(),
        language_code: language_of(element, DEFAULT_LANGUAGE),
        completeness,
        is_constructed_compound: element.has_attribute("ls_wasei"),
    }
}

/// Decodes a `<gloss>` element.
pub fn decode_gloss(element: &Element) -> Gloss {
    Gloss {
        language_code: language_of(element, DEFAULT_LANGUAGE),
        translated_text: element.text().unwrap_or_default().to_string(),
        grammatical_gender: element
            .attribute("g_gend")
            .filter(|code| !code.is_empty())
            .map(GrammaticalGender::from_code),
        semantic_type: element
            .attribute("g_type")
            .filter(|code| !code.is_empty())
            .map(SemanticType::from_code),
    }
}
