use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect, Select};

use crate::error::Result;

const CONFIRM_MESSAGE: &str = "You confirm the action?";
const REMOTE_MESSAGE: &str = "Select remote";
const REMOVAL_MESSAGE: &str = "Select for removal";
const REMOVAL_HINT: &str = "Space to select. Return to submit";

/// Interactive questions asked during a sweep.
pub trait Prompter {
    fn confirm(&self, default: bool) -> Result<bool>;

    /// Picks one of `options`; the first option is highlighted initially.
    fn choose_one(&self, options: &[String]) -> Result<String>;

    fn choose_many(&self, options: &[String]) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompter {
    assume_yes: bool,
}

impl ConsolePrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for ConsolePrompter {
    fn confirm(&self, default: bool) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(CONFIRM_MESSAGE)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }

    fn choose_one(&self, options: &[String]) -> Result<String> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(REMOTE_MESSAGE)
            .items(options)
            .default(0)
            .interact()?;
        Ok(options[selection].clone())
    }

    fn choose_many(&self, options: &[String]) -> Result<Vec<String>> {
        if options.is_empty() {
            return Ok(Vec::new());
        }
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{REMOVAL_MESSAGE} ({REMOVAL_HINT})"))
            .items(options)
            .interact()?;
        Ok(selection
            .into_iter()
            .map(|index| options[index].clone())
            .collect())
    }
}
