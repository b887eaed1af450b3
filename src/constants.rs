//! Common constants used throughout projgen.

/// Makefile template for library projects
pub const MAKEFILE_LIB: &str = "Makefile.lib";

/// Makefile template for executable projects
pub const MAKEFILE_BIN: &str = "Makefile.bin";

/// Name of the rendered build file in the project directory
pub const MAKEFILE: &str = "Makefile";

pub const GITIGNORE: &str = ".gitignore";

pub const CLANG_FORMAT: &str = ".clang-format";

/// One-line asset holding the module/group namespace
pub const DOMAIN_FILE: &str = "domain";

pub const SRC_DIR: &str = "src";

/// Environment variable overriding the template root
pub const TEMPLATES_ENV: &str = "GEN_TEMPLATES";

/// Name of the template root directory
pub const TEMPLATES_DIR: &str = "templates";
