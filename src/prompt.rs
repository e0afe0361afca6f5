//! User input and interaction handling.
//! Commands ask for input through the [`Prompter`] trait so they can run
//! against a terminal, with defaults only, or against a scripted fake.

use crate::error::{Error, Result};
use dialoguer::{Input, Select};
use log::debug;
use std::io;

/// Validation callback for text input. Returns the message shown to the user.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Trait for asking the user questions.
pub trait Prompter {
    /// Asks for a line of text.
    ///
    /// # Errors
    /// * `Error::Cancelled` if the user dismisses the prompt
    fn text(&self, prompt: &str, default: Option<&str>, validate: Option<Validator>)
        -> Result<String>;

    /// Asks the user to pick one of `options`; `default` is an index into it.
    ///
    /// # Errors
    /// * `Error::Cancelled` if the user dismisses the prompt
    fn choice(&self, prompt: &str, options: &[&str], default: usize) -> Result<String>;
}

/// Interactive terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_dialoguer_error(prompt: &str, err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            Error::Cancelled(prompt.to_string())
        }
        other => Error::PromptError(other.to_string()),
    }
}

impl Prompter for DialoguerPrompter {
    fn text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validate {
            input = input.validate_with(move |value: &String| validate(value.trim()));
        }

        let value = input.interact_text().map_err(|e| map_dialoguer_error(prompt, e))?;
        Ok(value.trim().to_string())
    }

    fn choice(&self, prompt: &str, options: &[&str], default: usize) -> Result<String> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(default)
            .interact_opt()
            .map_err(|e| map_dialoguer_error(prompt, e))?;

        match selection {
            Some(index) => Ok(options[index].to_string()),
            None => Err(Error::Cancelled(prompt.to_string())),
        }
    }
}

/// Answers every prompt with its default, for unattended runs.
#[derive(Debug, Default)]
pub struct DefaultPrompter;

impl DefaultPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultPrompter {
    fn text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: Option<Validator>,
    ) -> Result<String> {
        let value = default.ok_or_else(|| {
            Error::ValidationError(format!("'{prompt}' has no default value"))
        })?;
        if let Some(validate) = validate {
            validate(value).map_err(Error::ValidationError)?;
        }
        debug!("{prompt}: using default '{value}'");
        Ok(value.to_string())
    }

    fn choice(&self, prompt: &str, options: &[&str], default: usize) -> Result<String> {
        let value = options.get(default).ok_or_else(|| {
            Error::ValidationError(format!("'{prompt}' has no option at index {default}"))
        })?;
        debug!("{prompt}: using default '{value}'");
        Ok(value.to_string())
    }
}

/// Rejects empty or whitespace-only input.
pub fn required(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(())
    }
}

/// Index of `value` in `options`, or 0.
pub fn option_index(options: &[&str], value: Option<&str>) -> usize {
    value.and_then(|value| options.iter().position(|option| *option == value)).unwrap_or(0)
}
