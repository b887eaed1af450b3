//! Project generation.
//! Dispatches to the language-specific creation routine, then writes the
//! Makefile and .gitignore shared by every language.

use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{CLANG_FORMAT, GITIGNORE, MAKEFILE, MAKEFILE_BIN, MAKEFILE_LIB, SRC_DIR};
use crate::error::{Error, Result, Step};
use crate::filesystem::Filesystem;
use crate::kind::ProjectKind;
use crate::language::Language;
use crate::project::Project;
use crate::renderer::Template;
use crate::toolchain::{CommandRunner, ToolCommand, ToolOutput};

/// Generates projects through a filesystem and a command runner.
pub struct Generator<'a> {
    fs: &'a dyn Filesystem,
    runner: &'a dyn CommandRunner,
}

impl<'a> Generator<'a> {
    pub fn new(fs: &'a dyn Filesystem, runner: &'a dyn CommandRunner) -> Self {
        Self { fs, runner }
    }

    /// Generates `project` and returns the files it wrote, relative to the
    /// project directory, in creation order.
    ///
    /// Files created by external toolchains are not listed.
    ///
    /// # Errors
    /// * `Error::GenerationError` wrapping the cause of the first failing step.
    ///   Nothing written before the failure is rolled back.
    pub fn generate(&self, project: &Project) -> Result<Vec<PathBuf>> {
        info!(
            "Creating {} {} project '{}' in {}",
            project.kind(),
            project.language(),
            project.name(),
            project.project_dir().display()
        );

        let mut created = Vec::new();

        let step = Step::CreateProject(project.language());
        self.ensure_absent(project).map_err(|e| in_step(step, e))?;
        self.create_project(project, &mut created).map_err(|e| in_step(step, e))?;

        self.create_makefile(project, &mut created).map_err(|e| in_step(Step::Makefile, e))?;
        self.create_gitignore(project, &mut created)
            .map_err(|e| in_step(Step::Gitignore, e))?;

        Ok(created)
    }

    fn create_project(&self, project: &Project, created: &mut Vec<PathBuf>) -> Result<()> {
        match project.language() {
            Language::Python => self.create_python_project(project),
            Language::Rust => self.create_rust_project(project, created),
            Language::C => self.create_native_project(project, "main.c", created),
            Language::Cpp => self.create_native_project(project, "main.cpp", created),
            Language::Go => self.create_go_project(project, created),
            Language::Java => self.create_java_project(project, created),
        }
    }

    fn create_python_project(&self, project: &Project) -> Result<()> {
        self.create_dir(project, None)?;
        self.run(ToolCommand::new("virtualenv", project.project_dir()).arg("."))
    }

    fn create_rust_project(&self, project: &Project, created: &mut Vec<PathBuf>) -> Result<()> {
        let flag = match project.kind() {
            ProjectKind::Library => "--lib",
            ProjectKind::Executable => "--bin",
        };
        // cargo creates the project directory itself.
        self.run(
            ToolCommand::new("cargo", project.parent_dir())
                .arg("new")
                .arg(project.name())
                .arg(flag),
        )?;

        let src = Path::new(SRC_DIR);
        if project.kind() == ProjectKind::Executable {
            self.template(project, &src.join("main.rs"), &src.join("main.rs"), created)?;
        }

        let lib = src.join("lib.rs");
        let lib_path = project.project_dir().join(&lib);
        if !self.fs.exists(&lib_path) {
            self.fs.write(&lib_path, "")?;
            created.push(lib);
        }
        Ok(())
    }

    /// C and C++: no toolchain, everything comes from the templates.
    fn create_native_project(
        &self,
        project: &Project,
        entry_point: &str,
        created: &mut Vec<PathBuf>,
    ) -> Result<()> {
        self.create_dir(project, None)?;
        self.copy_file(project, Path::new(CLANG_FORMAT), Path::new(CLANG_FORMAT), created)?;

        let src = Path::new(SRC_DIR);
        self.create_dir(project, Some(src))?;
        if project.kind() == ProjectKind::Executable {
            let entry_point = src.join(entry_point);
            self.template(project, &entry_point, &entry_point, created)?;
        }
        Ok(())
    }

    fn create_go_project(&self, project: &Project, created: &mut Vec<PathBuf>) -> Result<()> {
        let domain = required_domain(project)?;
        self.create_dir(project, None)?;
        self.run(
            ToolCommand::new("go", project.project_dir())
                .arg("mod")
                .arg("init")
                .arg(format!("{}/{}", domain, project.name())),
        )?;

        if project.kind() == ProjectKind::Executable {
            self.template(project, Path::new("main.go"), Path::new("main.go"), created)?;
        }
        Ok(())
    }

    fn create_java_project(&self, project: &Project, created: &mut Vec<PathBuf>) -> Result<()> {
        let domain = required_domain(project)?;
        // The archetype generator creates the project directory itself.
        self.run(
            ToolCommand::new("mvn", project.parent_dir())
                .arg("archetype:generate")
                .arg(format!("-DgroupId={}.{}", domain, project.name()))
                .arg(format!("-DartifactId={}", project.name()))
                .arg("-DarchetypeArtifactId=maven-archetype-quickstart")
                .arg("-DinteractiveMode=false"),
        )?;

        if project.kind() == ProjectKind::Executable {
            let manifest = Path::new("manifest.txt");
            self.template(project, manifest, manifest, created)?;
        }
        Ok(())
    }

    fn create_makefile(&self, project: &Project, created: &mut Vec<PathBuf>) -> Result<()> {
        let makefile = match project.kind() {
            ProjectKind::Library => MAKEFILE_LIB,
            ProjectKind::Executable => MAKEFILE_BIN,
        };
        self.template(project, Path::new(makefile), Path::new(MAKEFILE), created)
    }

    fn create_gitignore(&self, project: &Project, created: &mut Vec<PathBuf>) -> Result<()> {
        self.copy_file(project, Path::new(GITIGNORE), Path::new(GITIGNORE), created)
    }

    fn ensure_absent(&self, project: &Project) -> Result<()> {
        if self.fs.exists(project.project_dir()) {
            return Err(directory_exists(project));
        }
        Ok(())
    }

    /// Creates the project directory, or `relative` inside it.
    fn create_dir(&self, project: &Project, relative: Option<&Path>) -> Result<()> {
        let path = match relative {
            Some(relative) => project.project_dir().join(relative),
            None => project.project_dir().to_path_buf(),
        };

        self.fs.create_dir(&path).map_err(|e| match (e.kind(), relative) {
            (io::ErrorKind::AlreadyExists, None) => directory_exists(project),
            _ => Error::IoError(e),
        })
    }

    /// Renders template `from` into the project file `to`.
    fn template(
        &self,
        project: &Project,
        from: &Path,
        to: &Path,
        created: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let source = self.read_asset(project, from)?;
        let output = Template::compile(source)?.render(&project.variables())?;
        self.fs.write(&project.project_dir().join(to), &output)?;

        debug!("Rendered {} into {}", from.display(), to.display());
        created.push(to.to_path_buf());
        Ok(())
    }

    /// Copies asset `from` verbatim into the project file `to`.
    fn copy_file(
        &self,
        project: &Project,
        from: &Path,
        to: &Path,
        created: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let source = project.template_dir().join(from);
        if !self.fs.exists(&source) {
            return Err(Error::MissingConfigurationError {
                asset: source.display().to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        self.fs.copy(&source, &project.project_dir().join(to))?;

        debug!("Copied {} into {}", from.display(), to.display());
        created.push(to.to_path_buf());
        Ok(())
    }

    fn read_asset(&self, project: &Project, asset: &Path) -> Result<String> {
        let path = project.template_dir().join(asset);
        self.fs.read_to_string(&path).map_err(|source| Error::MissingConfigurationError {
            asset: path.display().to_string(),
            source,
        })
    }

    /// Runs a toolchain command, treating a non-zero exit as failure.
    fn run(&self, command: ToolCommand) -> Result<()> {
        let output = self.runner.run(&command).map_err(|e| Error::ToolchainError {
            command: command.to_string(),
            reason: format!("could not be started: {e}"),
            output: String::new(),
        })?;

        if !output.success() {
            let reason = match output.code {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(Error::ToolchainError {
                command: command.to_string(),
                reason,
                output: captured(&output),
            });
        }

        debug!("'{}' finished:{}", command, captured(&output));
        Ok(())
    }
}

fn in_step(step: Step, source: Error) -> Error {
    Error::GenerationError { step, source: Box::new(source) }
}

fn directory_exists(project: &Project) -> Error {
    Error::DirectoryExistsError { project_dir: project.project_dir().display().to_string() }
}

fn required_domain(project: &Project) -> Result<&str> {
    project.domain().ok_or_else(|| Error::MissingConfigurationError {
        asset: format!("{} domain", project.language()),
        source: io::Error::from(io::ErrorKind::NotFound),
    })
}

/// Captured stdout and stderr, prefixed with a newline when non-empty.
fn captured(output: &ToolOutput) -> String {
    let mut text = String::new();
    for stream in [&output.stdout, &output.stderr] {
        let stream = stream.trim_end();
        if !stream.is_empty() {
            text.push('\n');
            text.push_str(stream);
        }
    }
    text
}
