//! Project name normalization.

use serde::Serialize;

/// A sanitized project name and the slug derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectName {
    display_name: String,
    internal_name: String,
}

impl ProjectName {
    /// Human-readable title.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Lowercase hyphenated slug.
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_empty()
    }
}

/// Sanitize a free-text project name.
///
/// Drops everything except letters, digits, whitespace, and hyphens, collapses
/// whitespace runs to a single space, and trims. The slug is the result
/// lowercased with spaces turned into hyphens.
pub fn sanitize(raw: &str) -> ProjectName {
    let filtered =
        raw.chars().filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-');

    let mut display_name = String::with_capacity(raw.len());
    let mut whitespace_run = 0usize;
    let mut pending = None;
    for c in filtered {
        if c.is_whitespace() {
            whitespace_run += 1;
            // A lone whitespace char is kept as-is; runs become one space.
            pending = Some(if whitespace_run == 1 { c } else { ' ' });
            continue;
        }
        if let Some(ws) = pending.take() {
            display_name.push(ws);
        }
        whitespace_run = 0;
        display_name.push(c);
    }

    let display_name = display_name.trim().to_string();
    let internal_name = slugify(&display_name);

    ProjectName { display_name, internal_name }
}

fn slugify(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
