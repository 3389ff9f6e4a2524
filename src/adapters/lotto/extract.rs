//! JSON recovery from the lottery feed's quasi-XML envelope.
//!
//! The feed answers with a SOAP-ish wrapper,
//! `<string xmlns="http://tempuri.org/">{...json...}</string>`, which is
//! neither well-formed JSON nor XML worth a real parser. This routine
//! scans for the wrapper tags and slices out the payload between them.
//!
//! When the exact opening tag is absent (the feed has been seen emitting
//! variant attribute orderings), the scan falls back to treating the text
//! after the *first* `</string>` occurrence as the payload start. That
//! leniency is deliberate and matches the observed feed, but it is not a
//! correct parser for arbitrary XML: a document whose first `</string>`
//! belongs to some other element yields whatever sits before the next
//! `</string>`, with only the empty-span check as a guard.

use thiserror::Error;

/// The exact opening tag the feed emits in the well-formed case.
const OPENING_TAG: &str = "<string xmlns=\"http://tempuri.org/\">";

/// The closing tag, also used as the fallback start marker.
const CLOSING_TAG: &str = "</string>";

/// Why no payload could be recovered from a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Neither the opening tag nor a fallback `</string>` start marker
    /// was found.
    #[error("no opening <string> tag found")]
    StartTagMissing,

    /// No closing `</string>` follows the computed start position.
    #[error("no closing </string> tag found")]
    EndTagMissing,

    /// The tags were found but enclose nothing.
    #[error("payload span is empty")]
    EmptySpan,
}

/// Recovers the JSON payload embedded in `document`.
///
/// Pure and deterministic; the caller decides what to do with the slice.
/// Fails rather than returning a corrupt span: both tags must be present
/// and the start must lie strictly before the end.
pub fn extract_json(document: &str) -> Result<&str, ExtractError> {
    let start = match document.find(OPENING_TAG) {
        Some(idx) => idx + OPENING_TAG.len(),
        // Lenient fallback: start right after the first closing tag.
        None => match document.find(CLOSING_TAG) {
            Some(idx) => idx + CLOSING_TAG.len(),
            None => return Err(ExtractError::StartTagMissing),
        },
    };

    let end = match document[start..].find(CLOSING_TAG) {
        Some(rel) => start + rel,
        None => return Err(ExtractError::EndTagMissing),
    };

    if start >= end {
        return Err(ExtractError::EmptySpan);
    }

    Ok(&document[start..end])
}
