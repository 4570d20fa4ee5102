use crate::domain::AppError;

/// A configurable field that can be asked for interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Name,
    RootPath,
    AppId,
}

/// A question put to the user when an option was not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub field: PromptField,
    pub message: String,
    pub default: String,
}

/// Port for collecting answers from a human (or a non-interactive stand-in).
pub trait Prompter {
    /// Ask one question. `None` means "no answer", leaving the field to defaults.
    fn ask(&self, question: &Question) -> Result<Option<String>, AppError>;
}
