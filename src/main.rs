//! fastapi-helper's main application entry point.
//! Parses the command line, resolves the workspace and templates, and
//! dispatches to the scaffolding commands.

use std::path::PathBuf;

use fastapi_helper::{
    cli::{get_args, Args, Command},
    commands::{
        create_module, create_project, create_project::CreateProjectOptions, edit,
        generate_schema, generate_schema::GenerateSchemaOptions, init_database, Context,
    },
    config::get_config,
    constants::BUNDLED_TEMPLATES,
    copier::DirectoryCopier,
    error::{default_error_handler, Result},
    logger::init_logger,
    process::SystemRunner,
    prompt::{DefaultPrompter, DialoguerPrompter, Prompter},
    workspace::resolve_workspace,
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
/// 1. Runs the primitive subcommands directly on their file arguments
/// 2. Otherwise resolves the workspace and loads its configuration
/// 3. Picks the templates directory: `--templates`, then the configured one,
///    then the bundled templates
/// 4. Runs the scaffolding command with terminal or default-only prompts
fn run(args: Args) -> Result<()> {
    match &args.command {
        Command::Render { file, set, output } => {
            return edit::render(file, set, output.as_deref());
        }
        Command::InsertAfter { file, tag, text, output } => {
            return edit::insert_after(file, tag, text, output.as_deref());
        }
        Command::Append { file, text, output } => {
            return edit::append_text(file, text, output.as_deref());
        }
        _ => {}
    }

    let workspace = resolve_workspace(args.workspace.as_deref())?;
    let config = get_config(&workspace)?;
    let templates = args
        .templates
        .clone()
        .or_else(|| config.templates_dir.as_ref().map(|dir| workspace.join(dir)))
        .unwrap_or_else(|| PathBuf::from(BUNDLED_TEMPLATES));
    log::debug!("Using templates from '{}'.", templates.display());

    let prompt: Box<dyn Prompter> = if args.non_interactive {
        Box::new(DefaultPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };
    let runner = SystemRunner::new();
    let copier = DirectoryCopier::new();

    let ctx = Context {
        workspace,
        templates,
        config,
        prompt: &*prompt,
        runner: &runner,
        copier: &copier,
    };

    match args.command {
        Command::CreateProject { tool, mirror, no_mirror, no_install } => {
            let use_mirror = match (mirror, no_mirror) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let options = CreateProjectOptions { tool, use_mirror, skip_install: no_install };
            create_project::run(&ctx, &options)
        }
        Command::CreateModule { name } => create_module::run(&ctx, name.as_deref()),
        Command::InitDatabase => init_database::run(&ctx),
        Command::GenerateSchema { dir, id_type, prefix } => {
            let options = GenerateSchemaOptions { dir, id_type, prefix };
            generate_schema::run(&ctx, &options)
        }
        Command::Render { .. } | Command::InsertAfter { .. } | Command::Append { .. } => Ok(()),
    }
}
