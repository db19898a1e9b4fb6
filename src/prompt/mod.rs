//! Interactive input

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Source of answers to interactive questions
pub trait Prompt {
    /// Ask `question`, offering `default` as the suggested answer
    fn input(&mut self, question: &str, default: &str) -> Result<String>;
}

/// Prompt that reads from the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn input(&mut self, question: &str, default: &str) -> Result<String> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }
}
