use std::sync::OnceLock;

use dialoguer::theme::SimpleTheme;
use dialoguer::{Confirm, Input, Select};

use crate::utils::Result;

static THEME: OnceLock<SimpleTheme> = OnceLock::new();

/// Source of answers for configuration questions.
pub trait Prompter {
    fn confirm(&mut self, prompt: &str, default: Option<bool>) -> Result<bool>;
    fn select(&mut self, prompt: &str, items: &[&str], default: Option<&str>) -> Result<String>;
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompter for Terminal {
    fn confirm(&mut self, prompt: &str, default: Option<bool>) -> Result<bool> {
        let theme = THEME.get_or_init(|| SimpleTheme);
        let mut p = Confirm::with_theme(theme).with_prompt(prompt);
        if let Some(default) = default {
            p = p.default(default);
        }
        Ok(p.interact()?)
    }

    fn select(&mut self, prompt: &str, items: &[&str], default: Option<&str>) -> Result<String> {
        let theme = THEME.get_or_init(|| SimpleTheme);
        let mut p = Select::with_theme(theme).with_prompt(prompt).items(items);
        if let Some(position) = default.and_then(|d| items.iter().position(|item| *item == d)) {
            p = p.default(position);
        }
        Ok(items[p.interact()?].to_string())
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let theme = THEME.get_or_init(|| SimpleTheme);
        let mut p = Input::<String>::with_theme(theme).with_prompt(prompt);
        if let Some(default) = default {
            p = p.default(default.to_string());
        }
        Ok(p.interact_text()?)
    }
}
