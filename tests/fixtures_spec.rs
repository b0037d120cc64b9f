use jmdict_reader::{
    Completeness, DictError, EntityMap, JMdict, KanjiDic, ParseOptions, SemanticType,
};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn as_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("records serialize")
}

fn entry_xml(body: &str) -> String {
    format!("<JMdict><entry>{}</entry></JMdict>", body)
}

const MINIMAL: &str = r#"<?xml version="1.0"?>
<JMdict>
  <entry>
    <ent_seq>1000000</ent_seq>
    <k_ele><keb>犬</keb></k_ele>
    <r_ele><reb>いぬ</reb></r_ele>
    <sense><gloss>dog</gloss></sense>
  </entry>
</JMdict>"#;

#[test]
fn minimal_entry_has_only_mandatory_fields() {
    let dict = JMdict::from_xml_str(MINIMAL).expect("minimal entry parses");
    assert_eq!(dict.len(), 1);
    assert_eq!(
        as_json(&dict.records()[0]),
        json!({
            "id": "1000000",
            "kanjiForms": [{ "text": "犬" }],
            "readingForms": [{ "text": "いぬ" }],
            "senses": [{ "glosses": [{ "languageCode": "eng", "translatedText": "dog" }] }]
        })
    );
}

#[test]
fn jmdict_fixture_keeps_document_order() {
    let dict = JMdict::from_xml_file(fixture_path("jmdict_sample.xml")).expect("fixture parses");
    let ids: Vec<&str> = dict.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, ["1206730", "1000225", "2830080"]);
}

#[test]
fn jmdict_fixture_full_entry() {
    let dict = JMdict::from_xml_file(fixture_path("jmdict_sample.xml")).unwrap();
    assert_eq!(
        as_json(&dict.records()[1]),
        json!({
            "id": "1000225",
            "kanjiForms": [
                { "text": "明白", "annotations": ["&uk;"] },
                { "text": "明々白々" }
            ],
            "readingForms": [
                { "text": "あからさま", "restrictedTo": ["明白"] },
                { "text": "アカラサマ", "isNotTrueReadingOfKanji": true }
            ],
            "senses": [
                {
                    "kanjiRestrictions": ["明白"],
                    "crossReferences": [
                        { "targetWord": "明らか", "targetReading": "あきらか", "targetSenseIndex": 1 }
                    ],
                    "miscellaneousTags": ["&uk;"],
                    "glosses": [
                        { "languageCode": "eng", "translatedText": "plain, frank", "semanticType": "explanation" }
                    ]
                },
                {
                    "partsOfSpeech": ["&exp;", "&int;"],
                    "antonyms": ["隠然"],
                    "notes": ["often in a negative sense"],
                    "sourceLanguages": [
                        { "sourceWord": "clair", "languageCode": "fre", "completeness": "partial", "isConstructedCompound": false }
                    ],
                    "glosses": [
                        { "languageCode": "eng", "translatedText": "obvious", "semanticType": "xyz" }
                    ]
                },
                {
                    "partsOfSpeech": ["&exp;", "&int;"],
                    "crossReferences": [{ "targetWord": "明らか", "targetSenseIndex": 2 }],
                    "sourceLanguages": [
                        { "sourceWord": "open style", "languageCode": "eng", "completeness": "full", "isConstructedCompound": true }
                    ],
                    "dialectTags": ["&ksb;"],
                    "glosses": [{ "languageCode": "eng", "translatedText": "overt" }]
                }
            ]
        })
    );
}

#[test]
fn parts_of_speech_inheritance_is_scoped_per_entry() {
    let dict = JMdict::from_xml_file(fixture_path("jmdict_sample.xml")).unwrap();
    let entries = dict.records();

    // First sense of the second entry has no <pos>; the first entry's list must not leak in.
    assert_eq!(entries[0].senses[0].parts_of_speech, Some(vec!["&n;".to_string()]));
    assert_eq!(entries[1].senses[0].parts_of_speech, None);
    assert_eq!(entries[1].senses[2].parts_of_speech, entries[1].senses[1].parts_of_speech);

    assert_eq!(entries[2].senses[0].parts_of_speech, None);
    assert_eq!(
        entries[2].senses[1].parts_of_speech,
        Some(vec!["&v5r;".to_string(), "&vi;".to_string()])
    );
}

#[test]
fn inheritance_only_flows_forward() {
    let xml = entry_xml(
        "<ent_seq>1</ent_seq><r_ele><reb>a</reb></r_ele>\
         <sense><gloss>1</gloss></sense>\
         <sense><pos>&n;</pos><gloss>2</gloss></sense>\
         <sense><gloss>3</gloss></sense>\
         <sense><gloss>4</gloss></sense>\
         <sense><pos>&vi;</pos><gloss>5</gloss></sense>\
         <sense><gloss>6</gloss></sense>",
    );
    let dict = JMdict::from_xml_str(&xml).unwrap();
    let pos: Vec<Option<Vec<String>>> = dict.records()[0]
        .senses
        .iter()
        .map(|sense| sense.parts_of_speech.clone())
        .collect();
    let n = Some(vec!["&n;".to_string()]);
    let vi = Some(vec!["&vi;".to_string()]);
    assert_eq!(pos, [None, n.clone(), n.clone(), n, vi.clone(), vi]);
}

#[test]
fn resolves_entities_when_requested() {
    let options = ParseOptions::new().resolve_entities(true);
    let dict = JMdict::from_xml_file_with(fixture_path("jmdict_sample.xml"), &options).unwrap();
    let entries = dict.records();

    assert_eq!(
        entries[0].senses[0].parts_of_speech,
        Some(vec!["noun (common) (futsuumeishi)".to_string()])
    );
    assert_eq!(
        entries[1].kanji_forms.as_ref().unwrap()[0].annotations,
        Some(vec!["word usually written using kana alone".to_string()])
    );
    assert_eq!(entries[1].senses[2].dialect_tags, Some(vec!["Kansai-ben".to_string()]));
    assert_eq!(
        entries[2].senses[0].fields_of_application,
        Some(vec!["computing".to_string()])
    );
    // Free text is not a table key and stays as written.
    assert_eq!(entries[0].senses[0].glosses[0].translated_text, "school");
}

#[test]
fn custom_entity_map_replaces_builtin_table() {
    let map: EntityMap = [("n", "noun")].into_iter().collect();
    let options = ParseOptions::new().resolve_entities(true).entity_map(map);
    let dict = JMdict::from_xml_file_with(fixture_path("jmdict_sample.xml"), &options).unwrap();

    assert_eq!(dict.records()[0].senses[0].parts_of_speech, Some(vec!["noun".to_string()]));
    assert_eq!(
        dict.records()[2].senses[1].miscellaneous_tags,
        Some(vec!["&hon;".to_string()])
    );
}

#[test]
fn gloss_semantic_types() {
    let dict = JMdict::from_xml_file(fixture_path("jmdict_sample.xml")).unwrap();
    let senses = &dict.records()[1].senses;
    assert_eq!(senses[0].glosses[0].semantic_type, Some(SemanticType::Explanation));
    assert_eq!(
        senses[1].glosses[0].semantic_type,
        Some(SemanticType::Other("xyz".to_string()))
    );
    assert_eq!(senses[1].source_languages.as_ref().unwrap()[0].completeness, Completeness::Partial);

    let german = &dict.records()[0].senses[0].glosses[1];
    assert_eq!(
        as_json(german),
        json!({ "languageCode": "ger", "translatedText": "Schule", "grammaticalGender": "feminine" })
    );
}

#[test]
fn structural_errors_abort_the_parse() {
    let cases = [
        ("<r_ele><reb>a</reb></r_ele><sense><gloss>a</gloss></sense>", "missing ID"),
        (
            "<ent_seq></ent_seq><r_ele><reb>a</reb></r_ele><sense><gloss>a</gloss></sense>",
            "missing ID",
        ),
        (
            "<ent_seq>7</ent_seq><k_ele><ke_pri>news1</ke_pri></k_ele><r_ele><reb>a</reb></r_ele><sense><gloss>a</gloss></sense>",
            "missing kanji (entry 7)",
        ),
        (
            "<ent_seq>7</ent_seq><r_ele><re_pri>news1</re_pri></r_ele><sense><gloss>a</gloss></sense>",
            "missing reading (entry 7)",
        ),
        ("<ent_seq>7</ent_seq><sense><gloss>a</gloss></sense>", "no reading elements"),
        ("<ent_seq>7</ent_seq><r_ele><reb>a</reb></r_ele>", "no sense elements"),
    ];

    for (body, expected) in cases {
        // A valid entry first: nothing may be returned for it either.
        let xml = format!(
            "<JMdict><entry><ent_seq>1</ent_seq><r_ele><reb>x</reb></r_ele><sense><gloss>x</gloss></sense></entry><entry>{}</entry></JMdict>",
            body
        );
        match JMdict::from_xml_str(&xml) {
            Err(DictError::Structural(message)) => {
                assert!(message.contains(expected), "{:?} does not mention {:?}", message, expected)
            }
            other => panic!("expected a structural error for {}, got {:?}", body, other),
        }
    }
}

#[test]
fn wrong_root_is_rejected() {
    let err = JMdict::from_xml_file(fixture_path("kanjidic_sample.xml")).unwrap_err();
    assert!(matches!(err, DictError::Structural(_)), "{:?}", err);
}

#[test]
fn malformed_xml_is_a_syntax_error() {
    let err = JMdict::from_xml_str("<JMdict><entry><ent_seq>1</ent_seq></JMdict>").unwrap_err();
    assert!(matches!(err, DictError::Syntax { format: "JMdict", .. }), "{:?}", err);
}

#[test]
fn standard_escapes_survive_sanitizing() {
    let xml = entry_xml(
        "<ent_seq>5</ent_seq><r_ele><reb>a</reb></r_ele>\
         <sense><gloss>R&amp;D &lt;dept&gt; &#x41;&#66;</gloss><gloss>AT&T</gloss></sense>",
    );
    let dict = JMdict::from_xml_str(&xml).unwrap();
    let glosses = &dict.records()[0].senses[0].glosses;
    assert_eq!(glosses[0].translated_text, "R&D <dept> AB");
    assert_eq!(glosses[1].translated_text, "AT&T");
}

#[test]
fn missing_file_is_a_read_error() {
    let err = JMdict::from_xml_file(fixture_path("does_not_exist.xml")).unwrap_err();
    assert!(matches!(err, DictError::Read { .. }), "{:?}", err);
}

#[test]
fn kanjidic_fixture() {
    let dict = KanjiDic::from_xml_file(fixture_path("kanjidic_sample.xml")).expect("fixture parses");
    assert_eq!(dict.len(), 2);

    let header = dict.header().as_ref().expect("header present");
    assert_eq!(header.file_version.as_deref(), Some("4"));
    assert_eq!(header.database_version.as_deref(), Some("2026-292"));

    assert_eq!(
        as_json(&dict.records()[0]),
        json!({
            "literal": "亜",
            "codepoints": [
                { "value": "4e9c", "standard": "ucs" },
                { "value": "1-16-01", "standard": "jis208" }
            ],
            "radicals": [
                { "value": "7", "radicalType": "classical" },
                { "value": "1", "radicalType": "nelson_c" }
            ],
            "miscellany": {
                "grade": 8,
                "strokeCount": 7,
                "frequency": 1509,
                "jlpt": 1,
                "variants": [{ "value": "1-48-19", "variantType": "jis208" }]
            },
            "dictionaryReferences": [
                { "number": "43", "dictionary": "nelson_c" },
                { "number": "272", "dictionary": "moro", "volume": "1", "page": "0525" }
            ],
            "queryCodes": [
                { "code": "4-7-1", "codeType": "skip" },
                { "code": "1-1-6", "codeType": "skip", "skipMisclassification": "posn" }
            ],
            "phoneticReadings": [
                { "value": "ya4", "readingType": "pinyin" },
                { "value": "ア", "readingType": "ja_on" },
                { "value": "つ.ぐ", "readingType": "ja_kun" }
            ],
            "meanings": [
                { "text": "Asia", "languageCode": "en" },
                { "text": "rank next", "languageCode": "en" },
                { "text": "Asie", "languageCode": "fr" },
                { "text": "pref. para indicar", "languageCode": "es" }
            ],
            "nanoriReadings": ["や", "つぎ"]
        })
    );

    assert_eq!(
        as_json(&dict.records()[1]),
        json!({
            "literal": "𠂉",
            "codepoints": [{ "value": "20089", "standard": "ucs" }],
            "radicals": [{ "value": "4", "radicalType": "classical" }],
            "miscellany": { "strokeCount": 2, "radicalName": "の" }
        })
    );
}

#[test]
fn kanjidic_missing_stroke_count_is_structural() {
    let xml = "<kanjidic2><character><literal>亜</literal><codepoint/><radical/><misc><grade>8</grade></misc></character></kanjidic2>";
    assert!(matches!(KanjiDic::from_xml_str(xml), Err(DictError::Structural(_))));
}

#[test]
fn kanjidic_unparsable_optional_numbers_are_absent() {
    let xml = "<kanjidic2><character><literal>亜</literal>\
               <codepoint><cp_value cp_type=\"ucs\">4e9c</cp_value></codepoint>\
               <radical><rad_value rad_type=\"classical\">7</rad_value></radical>\
               <misc><stroke_count>7</stroke_count><freq>n/a</freq></misc>\
               </character></kanjidic2>";
    let dict = KanjiDic::from_xml_str(xml).expect("optional numbers never abort the parse");
    assert_eq!(dict.len(), 1);
    assert_eq!(
        as_json(&dict.records()[0].miscellany),
        json!({ "strokeCount": 7 })
    );
}

#[test]
fn writes_records_as_one_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("jmdict.json");

    let dict = JMdict::from_xml_str(MINIMAL).unwrap();
    dict.write_to_json_file(&output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, dict.to_json().unwrap());
    let parsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    assert!(!written.contains("null"));
}

#[test]
fn concurrent_parses_share_nothing() {
    let source = fs::read_to_string(fixture_path("jmdict_sample.xml")).unwrap();
    let options = ParseOptions::new().resolve_entities(true);
    let expected = JMdict::from_xml_str_with(&source, &options).unwrap().into_records();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| JMdict::from_xml_str_with(&source, &options).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().into_records(), expected);
        }
    });
}
