//! `create-module`: adds a router package under `src/`.

use super::{Context, Steps};
use crate::constants::{MAIN_FILE, MODULE_TEMPLATE, ROUTERS_ANCHOR, ROUTER_NAME_KEY, SOURCE_DIR};
use crate::error::{Error, Result};
use crate::inserter::insert_after_tag;
use crate::renderer::{render_file, Substitutions};
use regex::Regex;
use std::path::PathBuf;

const MODULE_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

/// Accepts names starting with a lowercase letter followed by lowercase
/// letters, digits and underscores.
pub fn validate_module_name(value: &str) -> std::result::Result<(), String> {
    let pattern = Regex::new(MODULE_NAME_PATTERN).map_err(|e| e.to_string())?;
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err("module name must start with a lowercase letter and contain only lowercase letters, digits and underscores".to_string())
    }
}

/// Lines registering the module router with the application.
pub fn router_registration(name: &str) -> String {
    format!("from src.{name}.router import router as {name}_router\napp.include_router({name}_router)")
}

/// Returns the module name and its directory, prompting when `preset` is `None`.
///
/// # Errors
/// * `Error::ValidationError` if a preset name is invalid
/// * `Error::ModuleExists` if the module directory already exists
pub fn get_module_name(ctx: &Context, preset: Option<&str>) -> Result<(String, PathBuf)> {
    let name = match preset {
        Some(name) => {
            validate_module_name(name).map_err(Error::ValidationError)?;
            name.to_string()
        }
        None => ctx.prompt.text("Module name (e.g. user, product, order)", None, Some(&validate_module_name))?,
    };

    let module_dir = ctx.path(SOURCE_DIR).join(&name);
    if module_dir.exists() {
        return Err(Error::ModuleExists { name, path: module_dir });
    }
    Ok((name, module_dir))
}

pub fn run(ctx: &Context, preset: Option<&str>) -> Result<()> {
    let mut steps = Steps::new(4);

    let (name, module_dir) = steps.run("Reading module name", || get_module_name(ctx, preset))?;

    steps.run("Copying module template", || {
        ctx.copier.extract(&ctx.template(MODULE_TEMPLATE), &module_dir, true)
    })?;

    steps.run("Rendering router", || {
        let substitutions = Substitutions::from([(ROUTER_NAME_KEY.to_string(), name.clone())]);
        render_file(module_dir.join("router.py"), &substitutions, None)
    })?;

    steps.run("Registering router", || {
        insert_after_tag(ctx.path(MAIN_FILE), ROUTERS_ANCHOR, &router_registration(&name), None)
    })?;

    println!("Module '{}' created in {}.", name, module_dir.display());
    Ok(())
}
