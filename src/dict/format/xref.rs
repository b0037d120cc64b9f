//! Decoding of compact `xref` target strings.
//!
//! A cross-reference is written as up to three parts joined by a middle dot:
//!
//! ```text
//! 丸              word
//! 丸・1           word + sense index
//! 丸・まる        word + reading
//! 丸・まる・1     word + reading + sense index
//! ```

use crate::dict::types::jmdict::CrossReference;

/// Separator between the parts of a cross-reference.
pub const XREF_DELIMITER: char = '・';

/// Decodes a cross-reference string. Total over all inputs.
///
/// A lone second part that parses as a positive integer is a sense index,
/// anything else there is a reading. JMdict has no all-digit readings, so the
/// two cases never collide in practice. Empty parts count as absent, and a
/// third part that is not a positive integer is dropped.
pub fn decode_cross_reference(raw: &str) -> CrossReference {
    let mut parts = raw.splitn(3, XREF_DELIMITER);
    let target_word = parts.next().unwrap_or_default().to_string();
    let second = parts.next().filter(|part| !part.is_empty());
    let third = parts.next().filter(|part| !part.is_empty());

    let (target_reading, target_sense_index) = match (second, third) {
        (None, None) => (None, None),
        (Some(part), None) => match parse_sense_index(part) {
            Some(index) => (None, Some(index)),
            None => (Some(part.to_string()), None),
        },
        (reading, Some(index)) => (reading.map(str::to_string), parse_sense_index(index)),
    };

    CrossReference {
        target_word,
        target_reading,
        target_sense_index,
    }
}

fn parse_sense_index(part: &str) -> Option<u32> {
    part.trim().parse::<u32>().ok().filter(|index| *index > 0)
}
