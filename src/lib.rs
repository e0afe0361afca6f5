//! fastapi-helper scaffolds FastAPI/SQLModel/Alembic projects.
//! Templates are copied into the workspace and customized with three
//! text primitives: key-map rendering, insertion after an anchor line and
//! appending.

/// Appends literal text to the end of a file
pub mod appender;

/// Command-line interface module for the fastapi-helper application
pub mod cli;

/// Scaffolding commands composing prompts, template copies and the primitives
pub mod commands;

/// Common constants: placeholders, anchors and project file paths
pub mod constants;

/// Configuration handling for the workspace
/// Supports JSON and YAML formats (fastapi-helper.json, .yml, .yaml)
pub mod config;

/// Template copying into the workspace
pub mod copier;

/// Error types and handling for the fastapi-helper application
pub mod error;

/// Shared read and write helpers of the primitives
pub mod file;

/// File and directory ignore patterns
/// Processes .helperignore files to exclude specific template paths
pub mod ignore;

/// Inserts text after the first line containing a tag
pub mod inserter;

pub mod logger;

/// Package-manager subprocesses
pub mod process;

/// User input and interaction handling
pub mod prompt;

/// Replaces placeholders from an ordered key map
pub mod renderer;

/// Workspace discovery and package-tool detection
pub mod workspace;

pub use appender::append;
pub use error::{Error, Result};
pub use inserter::insert_after_tag;
pub use renderer::{render_file, Substitutions};
