//! `create-project`: turns an empty workspace into a FastAPI project.

use super::{Context, Steps};
use crate::appender::append;
use crate::constants::{
    DESCRIPTION_KEY, PROJECT_NAME_KEY, PROJECT_TEMPLATE, PYPROJECT_FILE, SECRET_KEY, SETTINGS_FILE,
};
use crate::error::Result;
use crate::prompt::option_index;
use crate::renderer::{render_file, Substitutions};
use crate::workspace::{workspace_name, PackageTool};
use log::info;
use rand::Rng;

const MIRROR_OPTIONS: [&str; 2] = ["No", "Yes"];

#[derive(Debug, Clone, Default)]
pub struct CreateProjectOptions {
    /// Skip the tool question
    pub tool: Option<PackageTool>,
    /// Skip the mirror question
    pub use_mirror: Option<bool>,
    pub skip_install: bool,
}

/// Returns 64 hex characters drawn from 32 random bytes.
pub fn generate_secret_key() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Asks which package tool manages the project, unless `preset` is given.
pub fn choose_tool(ctx: &Context, preset: Option<PackageTool>) -> Result<PackageTool> {
    if let Some(tool) = preset {
        return Ok(tool);
    }
    let options = PackageTool::ALL.map(|tool| tool.program());
    let default = option_index(&options, ctx.config.tool.map(|tool| tool.program()));
    let answer = ctx.prompt.choice("Package tool for the project", &options, default)?;
    Ok(PackageTool::from_name(&answer).unwrap_or(PackageTool::Poetry))
}

/// Fills in the project name, description and secret key of the settings module.
pub fn customize_settings(ctx: &Context) -> Result<()> {
    let substitutions = Substitutions::from([
        (PROJECT_NAME_KEY.to_string(), workspace_name(&ctx.workspace)),
        (DESCRIPTION_KEY.to_string(), ctx.config.description.trim().to_string()),
        (SECRET_KEY.to_string(), generate_secret_key()),
    ]);
    render_file(ctx.path(SETTINGS_FILE), &substitutions, None)
}

/// Appends the mirror index block to `pyproject.toml` when the user wants it.
pub fn configure_mirror(ctx: &Context, tool: PackageTool, preset: Option<bool>) -> Result<()> {
    let use_mirror = match preset {
        Some(use_mirror) => use_mirror,
        None => {
            let default = usize::from(ctx.config.use_mirror);
            let answer = ctx.prompt.choice(
                &format!("Use the mirror {} as the package index?", ctx.config.mirror_url),
                &MIRROR_OPTIONS,
                default,
            )?;
            answer == MIRROR_OPTIONS[1]
        }
    };

    if !use_mirror {
        info!("Using the default package index");
        return Ok(());
    }
    append(ctx.path(PYPROJECT_FILE), &tool.mirror_block(&ctx.config.mirror_url), None)
}

/// Adds the configured dependency list with the package tool.
pub fn install_dependencies(ctx: &Context, tool: PackageTool) -> Result<()> {
    let mut args = vec!["add"];
    args.extend(ctx.config.dependencies.iter().map(String::as_str));
    ctx.runner.run(tool.program(), &args, &ctx.workspace)
}

pub fn run(ctx: &Context, options: &CreateProjectOptions) -> Result<()> {
    let mut steps = Steps::new(5);

    let tool = steps.run("Initializing project", || {
        let tool = choose_tool(ctx, options.tool)?;
        ctx.runner.run(tool.program(), tool.init_args(), &ctx.workspace)?;
        Ok(tool)
    })?;

    steps.run("Copying project template", || {
        ctx.copier.extract(&ctx.template(PROJECT_TEMPLATE), &ctx.workspace, false)
    })?;

    steps.run("Customizing project settings", || customize_settings(ctx))?;

    steps.run("Configuring package index", || configure_mirror(ctx, tool, options.use_mirror))?;

    if options.skip_install {
        steps.skip("Installing dependencies");
    } else {
        steps.run("Installing dependencies", || install_dependencies(ctx, tool))?;
    }

    println!("FastAPI project initialized in {}.", ctx.workspace.display());
    Ok(())
}
