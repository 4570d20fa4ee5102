//! Destination-backed configuration loaders.
//!
//! Pure option overlay and resolution live in `domain::config`.

mod load_options;

pub use load_options::{OPTIONS_FILE, load_options};
