//! Neutralizes custom entity references before the text reaches the XML reader.
//!
//! JMdict declares a few hundred entities (`&n;`, `&v5k;`, `&ksb;`, ...) in its
//! internal DTD subset. The reader does not expand DTD declarations and rejects
//! any reference it does not know, so every `&` that does not open one of the
//! five predefined escapes or a numeric character reference is rewritten to
//! `&amp;`. The reference then survives parsing as literal text (`&n;`).

use std::borrow::Cow;
use std::sync::OnceLock;
use log::debug;
use regex::{Captures, Regex};

/// Matches the escapes that must be kept first, then any other ampersand.
static AMPERSAND_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ampersand_regex() -> &'static Regex {
    AMPERSAND_PATTERN.get_or_init(|| {
        Regex::new(r"&(?:amp|lt|gt|apos|quot);|&#|&").expect("Invalid ampersand regex pattern")
    })
}

/// Escapes every ampersand that does not begin a predefined or numeric reference.
///
/// Purely textual: the document structure is never inspected, so this runs on
/// the raw source before it is parsed. Returns the input unchanged (borrowed)
/// when nothing needed escaping.
pub fn escape_unknown_entities(text: &str) -> Cow<'_, str> {
    let mut replaced = 0usize;
    let result = ampersand_regex().replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        if matched == "&" {
            replaced += 1;
            "&amp;".to_string()
        } else {
            matched.to_string()
        }
    });

    if replaced == 0 {
        return Cow::Borrowed(text);
    }
    debug!("Escaped {} custom entity references", replaced);
    result
}
