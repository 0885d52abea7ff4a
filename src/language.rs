//! Language identification for function sorting
//!
//! This module provides the closed set of languages the sorter knows how to
//! scan, plus identifier- and extension-based detection so both explicit
//! `--language` flags and plain file paths resolve to the same enum.

use std::path::Path;

/// Languages supported for function sorting.
///
/// This is a closed set: any identifier or extension outside it is rejected
/// before a single line is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Php,
    Java,
    CSharp,
    JavaScript,
    TypeScript,
}

/// All supported languages, in registry order.
pub const ALL_LANGUAGES: [Language; 5] = [
    Language::Php,
    Language::Java,
    Language::CSharp,
    Language::JavaScript,
    Language::TypeScript,
];

impl Language {
    /// Resolve a language identifier string.
    ///
    /// Identifiers match the conventional lowercase ids ("php", "java",
    /// "csharp", "javascript", "typescript"). Returns `None` for anything
    /// else.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnsort::language::Language;
    ///
    /// assert_eq!(Language::from_id("php"), Some(Language::Php));
    /// assert_eq!(Language::from_id("TypeScript"), Some(Language::TypeScript));
    /// assert_eq!(Language::from_id("ruby"), None);
    /// ```
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "php" => Some(Language::Php),
            "java" => Some(Language::Java),
            "csharp" | "cs" | "c#" => Some(Language::CSharp),
            "javascript" | "js" => Some(Language::JavaScript),
            "typescript" | "ts" => Some(Language::TypeScript),
            _ => None,
        }
    }

    /// Detect language from a file extension.
    ///
    /// Returns `None` if the extension does not map into the supported set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnsort::language::Language;
    ///
    /// assert_eq!(Language::from_extension("php"), Some(Language::Php));
    /// assert_eq!(Language::from_extension("tsx"), Some(Language::TypeScript));
    /// assert_eq!(Language::from_extension("rs"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "php" => Some(Language::Php),
            "java" => Some(Language::Java),
            "cs" => Some(Language::CSharp),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            _ => None,
        }
    }

    /// Detect language from a file path.
    ///
    /// Extracts the extension and calls `from_extension()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use fnsort::language::Language;
    ///
    /// assert_eq!(Language::from_path(Path::new("App.java")), Some(Language::Java));
    /// assert_eq!(Language::from_path(Path::new("index.ts")), Some(Language::TypeScript));
    /// assert_eq!(Language::from_path(Path::new("README.md")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Returns the canonical identifier for this language.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Php => "php",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Returns the human-readable name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Php => "PHP",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_basic() {
        assert_eq!(Language::from_id("php"), Some(Language::Php));
        assert_eq!(Language::from_id("java"), Some(Language::Java));
        assert_eq!(Language::from_id("csharp"), Some(Language::CSharp));
        assert_eq!(Language::from_id("javascript"), Some(Language::JavaScript));
        assert_eq!(Language::from_id("typescript"), Some(Language::TypeScript));
    }

    #[test]
    fn test_from_id_case_insensitive() {
        assert_eq!(Language::from_id("PHP"), Some(Language::Php));
        assert_eq!(Language::from_id("Java"), Some(Language::Java));
        assert_eq!(Language::from_id("TypeScript"), Some(Language::TypeScript));
    }

    #[test]
    fn test_from_id_short_forms() {
        assert_eq!(Language::from_id("js"), Some(Language::JavaScript));
        assert_eq!(Language::from_id("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_id("cs"), Some(Language::CSharp));
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Language::from_id("ruby"), None);
        assert_eq!(Language::from_id("python"), None);
        assert_eq!(Language::from_id(""), None);
    }

    #[test]
    fn test_from_extension_variants() {
        assert_eq!(Language::from_extension("jsx"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("mjs"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("tsx"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("cts"), Some(Language::TypeScript));
    }

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(Language::from_extension("PHP"), Some(Language::Php));
        assert_eq!(Language::from_extension("Java"), Some(Language::Java));
    }

    #[test]
    fn test_from_extension_unsupported() {
        assert_eq!(Language::from_extension("rs"), None);
        assert_eq!(Language::from_extension("py"), None);
        assert_eq!(Language::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Language::from_path(Path::new("index.php")),
            Some(Language::Php)
        );
        assert_eq!(
            Language::from_path(Path::new("src/App.tsx")),
            Some(Language::TypeScript)
        );
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
        assert_eq!(Language::from_path(Path::new("notes.md")), None);
    }

    #[test]
    fn test_id_round_trips() {
        for lang in ALL_LANGUAGES {
            assert_eq!(Language::from_id(lang.id()), Some(lang));
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(Language::CSharp.name(), "C#");
        assert_eq!(Language::Php.name(), "PHP");
        assert_eq!(Language::JavaScript.name(), "JavaScript");
    }
}
