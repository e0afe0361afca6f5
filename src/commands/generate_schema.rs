//! `generate-schema`: writes a SQLModel schema family into a module directory.

use super::{Context, Steps};
use crate::constants::{
    ALEMBIC_ENV_FILE, AUTOGENERATE_ANCHOR, ID_CONFIG_KEY, ID_TYPE_KEY, SCHEMA_PREFIX_KEY,
    SCHEMA_TEMPLATE, SOURCE_DIR,
};
use crate::error::{Error, Result};
use crate::inserter::insert_after_tag;
use crate::prompt::option_index;
use crate::renderer::{render_file, Substitutions};
use clap::ValueEnum;
use cruet::Inflector;
use log::{debug, warn};
use regex::Regex;
use std::path::{Component, Path, PathBuf};

const SCHEMA_PREFIX_PATTERN: &str = r"^[A-Z][a-zA-Z0-9]*$";
const SCHEMA_FILE: &str = "schema.py";

/// Primary key type of the generated table model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdType {
    #[value(name = "int")]
    Int,
    #[value(name = "UUID")]
    Uuid,
}

impl IdType {
    pub const ALL: [IdType; 2] = [IdType::Int, IdType::Uuid];

    /// Python annotation of the id field.
    pub fn annotation(&self) -> &'static str {
        match self {
            IdType::Int => "int",
            IdType::Uuid => "UUID",
        }
    }

    /// Arguments of the id `Field(...)`.
    pub fn field_config(&self) -> &'static str {
        match self {
            IdType::Int => "primary_key=True",
            IdType::Uuid => "default_factory=uuid4, primary_key=True",
        }
    }

    pub fn from_annotation(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id_type| id_type.annotation() == value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerateSchemaOptions {
    /// Target directory, relative to the workspace; `src` when absent
    pub dir: Option<PathBuf>,
    pub id_type: Option<IdType>,
    pub prefix: Option<String>,
}

/// Accepts PascalCase identifiers.
pub fn validate_schema_prefix(value: &str) -> std::result::Result<(), String> {
    let pattern = Regex::new(SCHEMA_PREFIX_PATTERN).map_err(|e| e.to_string())?;
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err("schema prefix must start with an uppercase letter and contain only letters and digits".to_string())
    }
}

/// Suggested prefix for schemas placed in `dir`: its name in PascalCase.
pub fn default_schema_prefix(dir: &Path) -> Option<String> {
    let name = dir.file_name()?.to_str()?.to_pascal_case();
    validate_schema_prefix(&name).ok().map(|_| name)
}

/// Dotted Python module path of `schema_file` relative to `workspace`.
pub fn python_module_path(workspace: &Path, schema_file: &Path) -> Option<String> {
    let relative = schema_file.strip_prefix(workspace).ok()?.with_extension("");
    let parts = relative
        .components()
        .map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("."))
}

pub fn substitutions(id_type: IdType, prefix: &str) -> Substitutions {
    Substitutions::from([
        (ID_TYPE_KEY.to_string(), id_type.annotation().to_string()),
        (SCHEMA_PREFIX_KEY.to_string(), prefix.to_string()),
        (ID_CONFIG_KEY.to_string(), id_type.field_config().to_string()),
    ])
}

fn choose_id_type(ctx: &Context, preset: Option<IdType>) -> Result<IdType> {
    if let Some(id_type) = preset {
        return Ok(id_type);
    }
    let options = IdType::ALL.map(|id_type| id_type.annotation());
    let answer = ctx.prompt.choice("ID type", &options, option_index(&options, None))?;
    Ok(IdType::from_annotation(&answer).unwrap_or(IdType::Int))
}

fn choose_prefix(ctx: &Context, dir: &Path, preset: Option<&str>) -> Result<String> {
    match preset {
        Some(prefix) => {
            validate_schema_prefix(prefix).map_err(Error::ValidationError)?;
            Ok(prefix.to_string())
        }
        None => {
            let default = default_schema_prefix(dir);
            ctx.prompt.text(
                "Schema name (e.g. User, Product, Order)",
                default.as_deref(),
                Some(&validate_schema_prefix),
            )
        }
    }
}

/// Imports the table model below the autogenerate marker of `alembic/env.py`
/// so migrations pick it up. Does nothing when the project has no such marker.
pub fn register_schema(ctx: &Context, schema_file: &Path, prefix: &str) -> Result<()> {
    let env_path = ctx.path(ALEMBIC_ENV_FILE);
    let has_marker = env_path.exists()
        && std::fs::read_to_string(&env_path)?.contains(AUTOGENERATE_ANCHOR);
    if !has_marker {
        debug!("{} has no autogenerate marker, skipping registration", env_path.display());
        return Ok(());
    }

    let Some(module) = python_module_path(&ctx.workspace, schema_file) else {
        warn!("{} is outside the workspace, not registering it", schema_file.display());
        return Ok(());
    };
    let import = format!("from {module} import {prefix}  # noqa");
    insert_after_tag(&env_path, AUTOGENERATE_ANCHOR, &import, None)
}

pub fn run(ctx: &Context, options: &GenerateSchemaOptions) -> Result<()> {
    let mut steps = Steps::new(3);

    let dir = ctx.path(options.dir.as_deref().unwrap_or(Path::new(SOURCE_DIR)));
    let schema_file = dir.join(SCHEMA_FILE);

    let (id_type, prefix) = steps.run("Reading schema options", || {
        if schema_file.exists() {
            return Err(Error::SchemaExists { path: schema_file.clone() });
        }
        let id_type = choose_id_type(ctx, options.id_type)?;
        let prefix = choose_prefix(ctx, &dir, options.prefix.as_deref())?;
        Ok((id_type, prefix))
    })?;

    steps.run("Writing schema", || {
        render_file(
            ctx.template(SCHEMA_TEMPLATE),
            &substitutions(id_type, &prefix),
            Some(&schema_file),
        )
    })?;

    steps.run("Registering schema with alembic", || register_schema(ctx, &schema_file, &prefix))?;

    println!("Schema '{}' written to {}.", prefix, schema_file.display());
    Ok(())
}
