pub mod assets;
pub mod filesystem;
pub mod npm_command;
pub mod prompt_dialoguer;
