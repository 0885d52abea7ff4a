//! Function detection, sorting, and document reassembly
//!
//! The pipeline runs three bounded passes over a snapshot of the document
//! text: collect function spans ([`catalog`]), stable-sort them by name,
//! and splice the document back together ([`rebuild`]). Nothing is mutated
//! along the way; callers apply the returned text in one replace.
//!
//! # Module Structure
//!
//! - `scanner` - brace-depth boundary scanning for a single span
//! - `catalog` - span collection and the case-insensitive sort
//! - `rebuild` - reassembly of the document text

mod catalog;
mod rebuild;
mod scanner;

pub use catalog::{FunctionInfo, build_catalog, sort_catalog};
pub use rebuild::rebuild_source;
pub use scanner::find_span_end;

use thiserror::Error;

use crate::language::Language;
use crate::profiles::LanguageProfile;

/// Why a sort invocation produced no new text.
///
/// Every variant is terminal for the invocation and leaves the document
/// untouched; there is no partial-write state to recover from.
#[derive(Debug, Error)]
pub enum SortError {
    /// The language identifier is not in the registry. Detected before any
    /// text is scanned.
    #[error("language '{0}' is not supported for function sorting")]
    UnsupportedLanguage(String),

    /// The detection pass matched nothing.
    #[error("no functions found to sort")]
    NoFunctionsFound,

    /// An internal inconsistency surfaced during reassembly.
    #[error("error sorting functions: {0}")]
    Processing(String),
}

/// Sort the functions of `text` alphabetically by name.
///
/// Returns the rebuilt document text. The input is split on `\n` and
/// rejoined the same way, so `\r` characters and the presence or absence
/// of a trailing newline survive untouched.
///
/// # Examples
///
/// ```
/// use fnsort::language::Language;
/// use fnsort::sorter::sort_source;
///
/// let text = "function b(){}\nfunction a(){}";
/// let sorted = sort_source(text, Language::JavaScript).unwrap();
/// assert_eq!(sorted, "function a(){}\n\nfunction b(){}");
/// ```
pub fn sort_source(text: &str, language: Language) -> Result<String, SortError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let profile = LanguageProfile::for_language(language);

    let mut functions = build_catalog(&lines, profile);
    if functions.is_empty() {
        return Err(SortError::NoFunctionsFound);
    }

    sort_catalog(&mut functions);
    rebuild_source(&lines, &functions)
}

/// Sort by a raw language identifier string.
///
/// Rejects identifiers outside the closed supported set with
/// [`SortError::UnsupportedLanguage`] before any scan begins.
pub fn sort_source_by_id(text: &str, language_id: &str) -> Result<String, SortError> {
    let language = Language::from_id(language_id)
        .ok_or_else(|| SortError::UnsupportedLanguage(language_id.to_string()))?;
    sort_source(text, language)
}
