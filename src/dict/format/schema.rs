//! Tagged view over the generic element tree.
//!
//! Each parent element of the two grammars gets an enum with one variant per
//! child element kind it may contain. Transformers classify children once and
//! then match exhaustively, instead of probing the tree by name. Children
//! outside the grammar land in `Unknown` and are skipped by the callers.
//!
//! Text-only children carry their text (`None` when the element is empty);
//! children that carry attributes or further children carry the element.

use crate::dict::xml::Element;

/// Children of the JMdict root.
#[derive(Debug, Clone, Copy)]
pub enum JmdictChild<'a> {
    Entry(&'a Element),
    Unknown(&'a str),
}

impl<'a> JmdictChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "entry" => Self::Entry(element),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<entry>`.
#[derive(Debug, Clone, Copy)]
pub enum EntryChild<'a> {
    /// `ent_seq`
    Sequence(Option<&'a str>),
    /// `k_ele`
    KanjiForm(&'a Element),
    /// `r_ele`
    ReadingForm(&'a Element),
    /// `sense`
    Sense(&'a Element),
    Unknown(&'a str),
}

impl<'a> EntryChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "ent_seq" => Self::Sequence(element.text()),
            "k_ele" => Self::KanjiForm(element),
            "r_ele" => Self::ReadingForm(element),
            "sense" => Self::Sense(element),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<k_ele>`.
#[derive(Debug, Clone, Copy)]
pub enum KanjiFormChild<'a> {
    /// `keb`
    Text(Option<&'a str>),
    /// `ke_inf`
    Annotation(Option<&'a str>),
    /// `ke_pri`
    Priority(Option<&'a str>),
    Unknown(&'a str),
}

impl<'a> KanjiFormChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "keb" => Self::Text(element.text()),
            "ke_inf" => Self::Annotation(element.text()),
            "ke_pri" => Self::Priority(element.text()),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<r_ele>`.
#[derive(Debug, Clone, Copy)]
pub enum ReadingFormChild<'a> {
    /// `reb`
    Text(Option<&'a str>),
    /// `re_nokanji`, meaningful by presence alone
    NoKanji,
    /// `re_restr`
    Restriction(Option<&'a str>),
    /// `re_inf`
    Annotation(Option<&'a str>),
    /// `re_pri`
    Priority(Option<&'a str>),
    Unknown(&'a str),
}

impl<'a> ReadingFormChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "reb" => Self::Text(element.text()),
            "re_nokanji" => Self::NoKanji,
            "re_restr" => Self::Restriction(element.text()),
            "re_inf" => Self::Annotation(element.text()),
            "re_pri" => Self::Priority(element.text()),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<sense>`.
#[derive(Debug, Clone, Copy)]
pub enum SenseChild<'a> {
    /// `stagk`
    KanjiRestriction(Option<&'a str>),
    /// `stagr`
    ReadingRestriction(Option<&'a str>),
    /// `pos`
    PartOfSpeech(Option<&'a str>),
    /// `xref`
    CrossReference(Option<&'a str>),
    /// `ant`
    Antonym(Option<&'a str>),
    /// `field`
    Field(Option<&'a str>),
    /// `misc`
    Miscellaneous(Option<&'a str>),
    /// `s_inf`
    Note(Option<&'a str>),
    /// `lsource`
    LanguageSource(&'a Element),
    /// `dial`
    Dialect(Option<&'a str>),
    /// `gloss`
    Gloss(&'a Element),
    Unknown(&'a str),
}

impl<'a> SenseChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        let text = element.text();
        match element.name.as_str() {
            "stagk" => Self::KanjiRestriction(text),
            "stagr" => Self::ReadingRestriction(text),
            "pos" => Self::PartOfSpeech(text),
            "xref" => Self::CrossReference(text),
            "ant" => Self::Antonym(text),
            "field" => Self::Field(text),
            "misc" => Self::Miscellaneous(text),
            "s_inf" => Self::Note(text),
            "lsource" => Self::LanguageSource(element),
            "dial" => Self::Dialect(text),
            "gloss" => Self::Gloss(element),
            other => Self::Unknown(other),
        }
    }
}

/// Children of the `kanjidic2` root.
#[derive(Debug, Clone, Copy)]
pub enum KanjidicChild<'a> {
    Header(&'a Element),
    Character(&'a Element),
    Unknown(&'a str),
}

impl<'a> KanjidicChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "header" => Self::Header(element),
            "character" => Self::Character(element),
            other => Self::Unknown(other),
        }
    }
}

/// Children of the KANJIDIC2 `<header>`.
#[derive(Debug, Clone, Copy)]
pub enum HeaderChild<'a> {
    FileVersion(Option<&'a str>),
    DatabaseVersion(Option<&'a str>),
    DateOfCreation(Option<&'a str>),
    Unknown(&'a str),
}

impl<'a> HeaderChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "file_version" => Self::FileVersion(element.text()),
            "database_version" => Self::DatabaseVersion(element.text()),
            "date_of_creation" => Self::DateOfCreation(element.text()),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<character>`.
#[derive(Debug, Clone, Copy)]
pub enum CharacterChild<'a> {
    Literal(Option<&'a str>),
    /// `codepoint` group of `cp_value`
    Codepoints(&'a Element),
    /// `radical` group of `rad_value`
    Radicals(&'a Element),
    Misc(&'a Element),
    /// `dic_number` group of `dic_ref`
    DictionaryNumbers(&'a Element),
    /// `query_code` group of `q_code`
    QueryCodes(&'a Element),
    ReadingMeaning(&'a Element),
    Unknown(&'a str),
}

impl<'a> CharacterChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "literal" => Self::Literal(element.text()),
            "codepoint" => Self::Codepoints(element),
            "radical" => Self::Radicals(element),
            "misc" => Self::Misc(element),
            "dic_number" => Self::DictionaryNumbers(element),
            "query_code" => Self::QueryCodes(element),
            "reading_meaning" => Self::ReadingMeaning(element),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<misc>` inside a character.
#[derive(Debug, Clone, Copy)]
pub enum MiscChild<'a> {
    Grade(Option<&'a str>),
    StrokeCount(Option<&'a str>),
    Variant(&'a Element),
    Frequency(Option<&'a str>),
    RadicalName(Option<&'a str>),
    Jlpt(Option<&'a str>),
    Unknown(&'a str),
}

impl<'a> MiscChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "grade" => Self::Grade(element.text()),
            "stroke_count" => Self::StrokeCount(element.text()),
            "variant" => Self::Variant(element),
            "freq" => Self::Frequency(element.text()),
            "rad_name" => Self::RadicalName(element.text()),
            "jlpt" => Self::Jlpt(element.text()),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<reading_meaning>`.
#[derive(Debug, Clone, Copy)]
pub enum ReadingMeaningChild<'a> {
    Group(&'a Element),
    Nanori(Option<&'a str>),
    Unknown(&'a str),
}

impl<'a> ReadingMeaningChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "rmgroup" => Self::Group(element),
            "nanori" => Self::Nanori(element.text()),
            other => Self::Unknown(other),
        }
    }
}

/// Children of `<rmgroup>`.
#[derive(Debug, Clone, Copy)]
pub enum GroupChild<'a> {
    Reading(&'a Element),
    Meaning(&'a Element),
    Unknown(&'a str),
}

impl<'a> GroupChild<'a> {
    pub fn classify(element: &'a Element) -> Self {
        match element.name.as_str() {
            "reading" => Self::Reading(element),
            "meaning" => Self::Meaning(element),
            other => Self::Unknown(other),
        }
    }
}
