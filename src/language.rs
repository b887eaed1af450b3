//! Supported target languages and the aliases accepted for each of them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Canonical target language of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Rust,
    C,
    Cpp,
    Go,
    Java,
}

impl Language {
    /// Every supported language, in the order they are listed to the user.
    pub const ALL: [Language; 6] = [
        Language::Python,
        Language::Rust,
        Language::C,
        Language::Cpp,
        Language::Go,
        Language::Java,
    ];

    /// Normalizes a user supplied alias into a canonical language.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Errors
    /// * `Error::InvalidLanguageError` naming the rejected input and the valid set
    pub fn normalize(raw: &str) -> Result<Self> {
        let alias = raw.trim().to_lowercase();
        let language = match alias.as_str() {
            "py" | "python" => Language::Python,
            "rs" | "rust" => Language::Rust,
            "c" => Language::C,
            "cpp" | "cc" => Language::Cpp,
            "go" | "golang" => Language::Go,
            "java" => Language::Java,
            _ => {
                return Err(Error::InvalidLanguageError {
                    input: raw.to_string(),
                    valid: Self::valid_names(),
                })
            }
        };
        Ok(language)
    }

    /// Canonical name, also used as the template directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Java => "java",
        }
    }

    /// Whether the language toolchain needs a module/group identifier.
    pub fn requires_domain(&self) -> bool {
        matches!(self, Language::Go | Language::Java)
    }

    /// Comma separated list of canonical names.
    pub fn valid_names() -> String {
        Self::ALL.iter().map(Language::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::normalize(s)
    }
}
