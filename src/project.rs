//! The project descriptor every generation step reads from.

use log::debug;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{DOMAIN_FILE, TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::filesystem::Filesystem;
use crate::kind::ProjectKind;
use crate::language::Language;
use crate::renderer::Variables;

/// Immutable description of the project being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    language: Language,
    name: String,
    kind: ProjectKind,
    domain: Option<String>,
    template_dir: PathBuf,
    project_dir: PathBuf,
}

impl Project {
    /// Builds the descriptor for project `name`, to be created under `cwd`.
    ///
    /// Templates are looked up in `<templates_root>/<language>`. Languages that
    /// need a namespace read it here, so a broken template installation is
    /// reported before anything is written.
    ///
    /// # Errors
    /// * `Error::InvalidNameError` if `name` is not usable as a directory name
    /// * `Error::MissingConfigurationError` if the domain asset cannot be read
    pub fn new<S: Into<String>>(
        fs: &dyn Filesystem,
        language: Language,
        name: S,
        kind: ProjectKind,
        templates_root: &Path,
        cwd: &Path,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        let template_dir = templates_root.join(language.as_str());
        let project_dir = cwd.join(&name);
        let domain = if language.requires_domain() {
            Some(read_domain(fs, &template_dir)?)
        } else {
            None
        };

        Ok(Self { language, name, kind, domain, template_dir, project_dir })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Module/group namespace, present only for languages that need one.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Directory the project directory is created in.
    pub fn parent_dir(&self) -> &Path {
        self.project_dir.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Variables available to every template of this project.
    pub fn variables(&self) -> Variables {
        let mut variables = Variables::new();
        variables.insert("name".to_string(), self.name.clone());
        variables.insert("language".to_string(), self.language.as_str().to_string());
        variables.insert("kind".to_string(), self.kind.as_str().to_string());
        if let Some(domain) = &self.domain {
            variables.insert("domain".to_string(), domain.clone());
        }
        variables
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        "name is empty"
    } else if name == "." || name == ".." {
        "name refers to an existing directory"
    } else if name.contains('/') || name.contains('\\') {
        "name contains a path separator"
    } else {
        return Ok(());
    };

    Err(Error::InvalidNameError { name: name.to_string(), reason: reason.to_string() })
}

/// Reads the first line of the language's domain asset.
fn read_domain(fs: &dyn Filesystem, template_dir: &Path) -> Result<String> {
    let path = template_dir.join(DOMAIN_FILE);
    let missing = |source: io::Error| Error::MissingConfigurationError {
        asset: path.display().to_string(),
        source,
    };

    let content = fs.read_to_string(&path).map_err(missing)?;
    let domain = content.lines().next().unwrap_or_default().trim();
    if domain.is_empty() {
        return Err(missing(io::Error::new(io::ErrorKind::InvalidData, "domain is empty")));
    }

    debug!("Using domain '{}' from {}", domain, path.display());
    Ok(domain.to_string())
}

/// Locates the template root when none was given explicitly.
///
/// Prefers a `templates` directory next to the executable, falling back to
/// the one shipped with the package sources.
pub fn default_templates_root() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR)));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("demo").is_ok());
        assert!(validate_name("my-project_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
    }
}
