//! Workspace discovery and package-tool detection.

use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Package managers the generated project can be managed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageTool {
    Poetry,
    Uv,
}

impl PackageTool {
    pub const ALL: [PackageTool; 2] = [PackageTool::Poetry, PackageTool::Uv];

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            PackageTool::Poetry => "poetry",
            PackageTool::Uv => "uv",
        }
    }

    /// Arguments that create a bare `pyproject.toml`.
    pub fn init_args(&self) -> &'static [&'static str] {
        match self {
            PackageTool::Poetry => &["init", "--no-interaction"],
            PackageTool::Uv => &["init", "--bare"],
        }
    }

    /// Lock file whose presence marks a project managed by this tool.
    pub fn lock_file(&self) -> &'static str {
        match self {
            PackageTool::Poetry => "poetry.lock",
            PackageTool::Uv => "uv.lock",
        }
    }

    /// `pyproject.toml` block making `url` the primary package index.
    pub fn mirror_block(&self, url: &str) -> String {
        match self {
            PackageTool::Poetry => format!(
                "\n[[tool.poetry.source]]\nname = \"mirrors\"\nurl = \"{url}\"\npriority = \"primary\"\n"
            ),
            PackageTool::Uv => format!("\n[[tool.uv.index]]\nurl = \"{url}\"\ndefault = true\n"),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.program() == name)
    }
}

impl fmt::Display for PackageTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Returns the workspace root: `path` if given, else the current directory.
///
/// # Errors
/// * `Error::NoWorkspace` if the resolved path is not an existing directory
pub fn resolve_workspace(path: Option<&Path>) -> Result<PathBuf> {
    let root = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(Error::NoWorkspace { path: root });
    }
    Ok(root)
}

/// Detects the package tool from the lock file in `workspace`.
/// `uv.lock` wins when both are present.
pub fn detect_tool(workspace: &Path) -> Result<PackageTool> {
    [PackageTool::Uv, PackageTool::Poetry]
        .into_iter()
        .find(|tool| workspace.join(tool.lock_file()).exists())
        .ok_or_else(|| Error::NoLockFile { workspace: workspace.to_path_buf() })
}

/// Name of the workspace directory, used as the project name.
pub fn workspace_name(workspace: &Path) -> String {
    workspace
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}
