//! projgen scaffolds new projects for a handful of languages.
//! It creates the project directory, renders the language's templates into it
//! and delegates to the language's own toolchain where one is required.

/// Command-line interface module
pub mod cli;

/// Asset and output file names
pub mod constants;

/// Error types and handling
pub mod error;

/// Filesystem access used during generation
pub mod filesystem;

/// Per-language project creation and the shared finishing steps
pub mod generator;

/// Library or executable selection
pub mod kind;

/// Supported languages and their aliases
pub mod language;

/// Logger initialization
pub mod logger;

/// Project descriptor
pub mod project;

/// Placeholder substitution in template text
pub mod renderer;

/// External toolchain invocation
pub mod toolchain;
