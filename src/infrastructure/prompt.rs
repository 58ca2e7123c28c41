//! Interactive repository pickers

use crate::error::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};

/// Source of interactive choices over a list of options
pub trait Prompter {
    /// Let the user check any number of options.
    /// Returns the chosen indices; cancelling yields an empty list.
    fn multi_select(&self, prompt: &str, options: &[String]) -> Result<Vec<usize>>;

    /// Let the user pick exactly one option.
    /// Returns `None` if the prompt was cancelled.
    fn select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>>;
}

/// Prompter drawing on the terminal's stderr, leaving stdout untouched
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn multi_select(&self, prompt: &str, options: &[String]) -> Result<Vec<usize>> {
        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .interact_opt()?;
        Ok(chosen.unwrap_or_default())
    }

    fn select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        let chosen = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()?;
        Ok(chosen)
    }
}
