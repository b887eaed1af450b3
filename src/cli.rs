//! Command-line interface implementation for projgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::TEMPLATES_ENV;
use crate::kind::ProjectKind;

/// Command-line arguments structure for projgen.
#[derive(Parser, Debug)]
#[command(
    name = "gen",
    author,
    version,
    about = "gen: scaffold a new project for a given language",
    long_about = None
)]
pub struct Args {
    /// Target language (python, rust, c, cpp, go, java or one of their aliases)
    #[arg(value_name = "LANGUAGE")]
    pub language: String,

    /// Project name, also used as the directory name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Legacy project kind argument ("lib"/"library" for a library, anything else for an executable)
    #[arg(value_name = "KIND")]
    pub kind: Option<String>,

    /// Create a library instead of an executable
    #[arg(short, long)]
    pub lib: bool,

    /// Directory holding the per-language templates
    #[arg(short, long, value_name = "DIR", env = TEMPLATES_ENV)]
    pub templates: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Project kind selected on the command line. `--lib` wins over `KIND`.
    pub fn project_kind(&self) -> ProjectKind {
        if self.lib {
            return ProjectKind::Library;
        }
        self.kind.as_deref().map(ProjectKind::normalize).unwrap_or_default()
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the usage text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
