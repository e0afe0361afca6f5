//! Scaffolding commands.
//! Each command gathers input, copies a template and customizes the result
//! with the substitution primitives, stopping at the first failed step.

pub mod create_module;
pub mod create_project;
pub mod edit;
pub mod generate_schema;
pub mod init_database;

use crate::config::Config;
use crate::copier::TemplateCopier;
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::prompt::Prompter;
use std::path::{Path, PathBuf};

/// Collaborators and settings shared by every command.
pub struct Context<'a> {
    /// Root of the user's project
    pub workspace: PathBuf,
    /// Directory holding the `project`, `module` and `schema.py` templates
    pub templates: PathBuf,
    pub config: Config,
    pub prompt: &'a dyn Prompter,
    pub runner: &'a dyn ProcessRunner,
    pub copier: &'a dyn TemplateCopier,
}

impl Context<'_> {
    /// Path of `relative` inside the workspace.
    pub fn path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.workspace.join(relative)
    }

    /// Path of the template called `name`.
    pub fn template(&self, name: &str) -> PathBuf {
        self.templates.join(name)
    }
}

/// Numbered progress over the steps of one command.
///
/// A failing step is wrapped with its name, and the remaining steps are
/// not run.
#[derive(Debug)]
pub struct Steps {
    total: usize,
    current: usize,
}

impl Steps {
    pub fn new(total: usize) -> Self {
        Self { total, current: 0 }
    }

    pub fn run<T, F>(&mut self, name: &str, step: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        self.current += 1;
        println!("[{}/{}] {}...", self.current, self.total, name);
        step().map_err(|e| e.in_step(name))
    }

    pub fn skip(&mut self, name: &str) {
        self.current += 1;
        println!("[{}/{}] {} (skipped)", self.current, self.total, name);
    }
}
