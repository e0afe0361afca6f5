//! Command-line interface implementation for fastapi-helper.
//! Provides argument parsing and help text formatting using clap.

use crate::commands::edit::parse_key_value;
use crate::commands::generate_schema::IdType;
use crate::workspace::PackageTool;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for fastapi-helper.
#[derive(Parser, Debug)]
#[command(author, version, about = "fastapi-helper: FastAPI project scaffolding tool", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root to operate on. Defaults to the current directory
    #[arg(short, long, value_name = "DIR", global = true)]
    pub workspace: Option<PathBuf>,

    /// Directory containing the project, module and schema.py templates
    #[arg(short, long, value_name = "DIR", global = true)]
    pub templates: Option<PathBuf>,

    /// Answer every question with its default value instead of prompting
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a FastAPI project in the workspace
    CreateProject {
        /// Package tool managing the project
        #[arg(long, value_enum)]
        tool: Option<PackageTool>,

        /// Use the configured PyPI mirror without asking
        #[arg(long)]
        mirror: bool,

        /// Use the default PyPI index without asking
        #[arg(long, conflicts_with = "mirror")]
        no_mirror: bool,

        /// Do not install dependencies
        #[arg(long)]
        no_install: bool,
    },

    /// Add a router module under src/
    CreateModule {
        /// Module name, e.g. user
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },

    /// Set up Alembic and the database settings
    InitDatabase,

    /// Write a SQLModel schema into a module directory
    GenerateSchema {
        /// Target directory relative to the workspace. Defaults to src
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Primary key type
        #[arg(long, value_enum)]
        id_type: Option<IdType>,

        /// Schema name prefix, e.g. User
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Replace placeholders in a file
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Placeholder and its replacement, applied in the given order
        #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value, required = true)]
        set: Vec<(String, String)>,

        /// Write the result here instead of overwriting FILE
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Insert text after the first line containing a tag
    InsertAfter {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long)]
        tag: String,

        #[arg(long)]
        text: String,

        /// Write the result here instead of overwriting FILE
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Append text to the end of a file
    Append {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long)]
        text: String,

        /// Write the result here instead of overwriting FILE
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
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
