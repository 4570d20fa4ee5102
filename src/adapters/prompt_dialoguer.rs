use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::{Prompter, Question};

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &Question) -> Result<Option<String>, AppError> {
        let answer = Input::<String>::new()
            .with_prompt(&question.message)
            .default(question.default.clone())
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Prompt("cancelled".to_string()))
            }
            Err(err) => Err(AppError::Prompt(format!("failed to read answer: {}", err))),
        }
    }
}

/// Prompter for non-interactive runs: never answers, so defaults apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn ask(&self, _question: &Question) -> Result<Option<String>, AppError> {
        Ok(None)
    }
}
