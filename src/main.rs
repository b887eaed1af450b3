//! projgen's application entry point.
//! Parses arguments, builds the project descriptor and runs generation.

use projgen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    filesystem::LocalFilesystem,
    generator::Generator,
    language::Language,
    logger::init_logger,
    project::{default_templates_root, Project},
    toolchain::SystemRunner,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Normalizes the language and project kind
/// 2. Builds the project descriptor relative to the working directory
/// 3. Generates the project and prints every file written
fn run(args: Args) -> Result<()> {
    let language = Language::normalize(&args.language)?;
    let kind = args.project_kind();
    let templates_root = args.templates.clone().unwrap_or_else(default_templates_root);
    let cwd = std::env::current_dir()?;

    let fs = LocalFilesystem::new();
    let runner = SystemRunner::new();

    let project = Project::new(&fs, language, args.name, kind, &templates_root, &cwd)?;
    let created = Generator::new(&fs, &runner).generate(&project)?;

    for path in created {
        println!("{}", path.display());
    }
    Ok(())
}
