//! Project kind selection.

use std::fmt;

/// Whether the generated project is a library or an executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectKind {
    Library,
    #[default]
    Executable,
}

/// Inputs that select a library, compared case-insensitively.
const LIBRARY_ALIASES: [&str; 5] = ["lib", "library", "-l", "--lib", "-lib"];

impl ProjectKind {
    /// Maps a raw kind argument to a project kind.
    ///
    /// Never fails: anything outside the library aliases, including the
    /// empty string, is an executable.
    pub fn normalize(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        if LIBRARY_ALIASES.contains(&value.as_str()) {
            ProjectKind::Library
        } else {
            ProjectKind::Executable
        }
    }

    /// Short form used in template variables and cargo flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Library => "lib",
            ProjectKind::Executable => "bin",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::Library => f.write_str("library"),
            ProjectKind::Executable => f.write_str("executable"),
        }
    }
}
