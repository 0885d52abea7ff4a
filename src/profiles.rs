//! Language profile registry: start-of-function matchers and name extraction
//!
//! One profile per supported language, each pairing a start-line regex with
//! the rule for pulling the function name out of a successful match. The
//! profiles are immutable statics constructed once; lookup is a plain match
//! on the [`Language`] enum.
//!
//! The matchers are line-oriented heuristics tuned to each language's
//! declaration syntax (modifier keywords, optional generics or return type,
//! arrow and `async` forms for JavaScript/TypeScript). They do not attempt
//! to be a parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;

/// Placeholder name recorded when a matcher fires but no capture group
/// produced a usable identifier.
pub const UNKNOWN_NAME: &str = "unknown";

static PHP_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:public|private|protected|static|\s)+\s+)?function\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(")
        .expect("PHP_FUNCTION regex is invalid")
});

static JAVA_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:public|private|protected|static|final|abstract|\s)+\s+)*[a-zA-Z_][a-zA-Z0-9_<>,\s]*\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(")
        .expect("JAVA_METHOD regex is invalid")
});

static CSHARP_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:public|private|protected|internal|static|virtual|override|abstract|\s)+\s+)*[a-zA-Z_][a-zA-Z0-9_<>,\s]*\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(")
        .expect("CSHARP_METHOD regex is invalid")
});

// Two capture groups: group 1 for `function name(...)` declarations, group 2
// for assignment forms (`name = function ...`, `name = (...) => ...`,
// including a typed arrow for TypeScript).
static ECMASCRIPT_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?:export|async|\s)+\s+)?(?:function\s+([a-zA-Z_][a-zA-Z0-9_]*)|([a-zA-Z_][a-zA-Z0-9_]*)\s*(?::\s*[^=]+)?\s*=\s*(?:async\s+)?(?:function|\([^)]*\)\s*=>|\([^)]*\)\s*:\s*[^=]+\s*=>))")
        .expect("ECMASCRIPT_FUNCTION regex is invalid")
});

/// Which capture group(s) hold the function name.
#[derive(Debug, Clone, Copy)]
enum NameRule {
    /// The name is always in capture group 1.
    FirstGroup,
    /// The name is in group 1 (declaration form) or group 2 (assignment
    /// form), whichever matched.
    DeclarationOrAssignment,
}

/// A successful start-line match: the extracted name plus the leading
/// whitespace of the line, kept for fidelity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionStart {
    pub name: String,
    pub indent: String,
}

/// Per-language matcher and name-extraction rule.
pub struct LanguageProfile {
    pattern: &'static LazyLock<Regex>,
    name_rule: NameRule,
}

static PHP_PROFILE: LanguageProfile = LanguageProfile {
    pattern: &PHP_FUNCTION,
    name_rule: NameRule::FirstGroup,
};

static JAVA_PROFILE: LanguageProfile = LanguageProfile {
    pattern: &JAVA_METHOD,
    name_rule: NameRule::FirstGroup,
};

static CSHARP_PROFILE: LanguageProfile = LanguageProfile {
    pattern: &CSHARP_METHOD,
    name_rule: NameRule::FirstGroup,
};

static ECMASCRIPT_PROFILE: LanguageProfile = LanguageProfile {
    pattern: &ECMASCRIPT_FUNCTION,
    name_rule: NameRule::DeclarationOrAssignment,
};

impl LanguageProfile {
    /// Look up the profile for a language.
    ///
    /// JavaScript and TypeScript share one profile; every other language has
    /// its own. Total over the closed [`Language`] set, so unsupported
    /// identifiers are rejected earlier, at `Language` resolution.
    pub fn for_language(language: Language) -> &'static LanguageProfile {
        match language {
            Language::Php => &PHP_PROFILE,
            Language::Java => &JAVA_PROFILE,
            Language::CSharp => &CSHARP_PROFILE,
            Language::JavaScript | Language::TypeScript => &ECMASCRIPT_PROFILE,
        }
    }

    /// Test whether a line starts a function definition.
    ///
    /// On a match, returns the extracted name (or [`UNKNOWN_NAME`] if no
    /// capture group produced a value) and the line's leading whitespace.
    pub fn match_start(&self, line: &str) -> Option<FunctionStart> {
        let caps = self.pattern.captures(line)?;

        let name = match self.name_rule {
            NameRule::FirstGroup => caps.get(1).map(|m| m.as_str()),
            NameRule::DeclarationOrAssignment => {
                caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
            }
        };

        let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();

        Some(FunctionStart {
            name: name.unwrap_or(UNKNOWN_NAME).to_string(),
            indent,
        })
    }
}
