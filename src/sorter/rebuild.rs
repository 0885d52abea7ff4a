//! Document reassembly: splice the sorted functions back into the text
//!
//! The sorted spans are emitted as one contiguous block at the position of
//! the earliest original span; every line outside a span is copied
//! verbatim in its original relative order.

use std::collections::{HashMap, HashSet};

use super::SortError;
use super::catalog::FunctionInfo;

/// Rebuild the document with the catalog's functions in sorted order.
///
/// The block of sorted functions (entries separated by exactly one blank
/// line, no trailing blank) replaces the earliest span; the lines of every
/// other span are elided, since their text already appears inside the
/// block. An empty line sitting directly between two spans is elided as
/// well; the block re-creates the separator, which keeps the operation
/// idempotent. An empty catalog returns the input unchanged.
pub fn rebuild_source(lines: &[&str], sorted: &[FunctionInfo]) -> Result<String, SortError> {
    let Some(insertion) = sorted.iter().map(|f| f.start_line).min() else {
        return Ok(lines.join("\n"));
    };

    let mut spans: HashMap<usize, usize> = HashMap::with_capacity(sorted.len());
    let mut span_ends: HashSet<usize> = HashSet::with_capacity(sorted.len());
    for func in sorted {
        if func.start_line > func.end_line || func.end_line >= lines.len() {
            return Err(SortError::Processing(format!(
                "function '{}' spans lines {}..={} in a {}-line document",
                func.name,
                func.start_line,
                func.end_line,
                lines.len()
            )));
        }
        spans.insert(func.start_line, func.end_line);
        span_ends.insert(func.end_line);
    }

    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if i == insertion {
            for (k, func) in sorted.iter().enumerate() {
                if k > 0 {
                    result.push(String::new());
                }
                result.push(func.full_text.clone());
            }
        }

        if let Some(&end) = spans.get(&i) {
            i = end + 1;
            continue;
        }

        // A lone separator between consecutive spans; the block already
        // carries one.
        if lines[i].is_empty()
            && i > 0
            && span_ends.contains(&(i - 1))
            && spans.contains_key(&(i + 1))
        {
            i += 1;
            continue;
        }

        result.push(lines[i].to_string());
        i += 1;
    }

    Ok(result.join("\n"))
}
