//! fnsort - Sorts the functions in a source file alphabetically, leaving
//! everything else alone

pub mod file_utils;
pub mod language;
pub mod output;
pub mod profiles;
pub mod sorter;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use language::Language;
pub use output::{FileOutcome, FileReport, print_json, print_reports};
pub use profiles::{FunctionStart, LanguageProfile};
pub use sorter::{FunctionInfo, SortError, sort_source, sort_source_by_id};
