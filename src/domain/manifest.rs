//! Dependency manifests and their non-destructive merge.

use std::fmt;

use serde_json::{Map, Value};

use super::AppError;

/// A dependency the generated application needs, with its minimum constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredDependency {
    pub name: &'static str,
    pub constraint: &'static str,
}

const fn dep(name: &'static str, constraint: &'static str) -> RequiredDependency {
    RequiredDependency { name, constraint }
}

/// Build tooling required in `package.json` `devDependencies`.
pub const PACKAGE_DEV_DEPENDENCIES: &[RequiredDependency] =
    &[dep("gulp", "^3.9.0"), dep("gulp-webserver", "^0.9.1")];

/// Client libraries required in `bower.json` `dependencies`.
pub const LIBRARY_DEPENDENCIES: &[RequiredDependency] = &[
    dep("jquery", "~1.9.1"),
    dep("angular", "~1.4.4"),
    dep("angular-route", "~1.4.4"),
    dep("angular-sanitize", "~1.4.4"),
    dep("adal-angular", "~1.0.5"),
];

/// The two manifest artifacts the generator owns a share of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// npm `package.json`.
    Package,
    /// bower `bower.json`.
    Library,
}

impl ManifestKind {
    /// Upsert order: the package manifest settles the project identity first.
    pub const ALL: [ManifestKind; 2] = [ManifestKind::Package, ManifestKind::Library];

    /// File name at the destination root.
    pub fn file_name(self) -> &'static str {
        match self {
            ManifestKind::Package => "package.json",
            ManifestKind::Library => "bower.json",
        }
    }

    /// Embedded template used when the manifest does not exist yet.
    pub fn template(self) -> &'static str {
        match self {
            ManifestKind::Package => "_package.json.j2",
            ManifestKind::Library => "_bower.json.j2",
        }
    }

    /// Top-level key holding the dependency mapping.
    pub fn dependency_section(self) -> &'static str {
        match self {
            ManifestKind::Package => "devDependencies",
            ManifestKind::Library => "dependencies",
        }
    }

    pub fn required_dependencies(self) -> &'static [RequiredDependency] {
        match self {
            ManifestKind::Package => PACKAGE_DEV_DEPENDENCIES,
            ManifestKind::Library => LIBRARY_DEPENDENCIES,
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// How an upsert left the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertResult {
    /// Rendered fresh from the template.
    Created,
    /// Existing document kept; `added` lists newly inserted dependency names.
    Merged { added: Vec<String> },
}

impl UpsertResult {
    pub fn is_created(&self) -> bool {
        matches!(self, UpsertResult::Created)
    }
}

/// A parsed manifest, preserving every key it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    kind: ManifestKind,
    root: Map<String, Value>,
}

impl ManifestDocument {
    /// Parse existing manifest content.
    ///
    /// Fails with [`AppError::MalformedManifest`] when the content is not a JSON
    /// object, the dependency section is not an object, or `name` is not a string.
    pub fn parse(kind: ManifestKind, path: &str, content: &str) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_str(content).map_err(|err| AppError::malformed(path, err))?;

        let Value::Object(root) = value else {
            return Err(AppError::malformed(path, "expected a JSON object at the top level"));
        };

        let section = kind.dependency_section();
        if let Some(existing) = root.get(section)
            && !existing.is_object()
        {
            return Err(AppError::malformed(path, format!("'{}' must be an object", section)));
        }

        if let Some(name) = root.get("name")
            && !name.is_string()
        {
            return Err(AppError::malformed(path, "'name' must be a string"));
        }

        Ok(Self { kind, root })
    }

    /// The project name this manifest already declares, if any.
    pub fn declared_name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// Constraint currently declared for `name` in the dependency section.
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.section().and_then(|deps| deps.get(name)).and_then(Value::as_str)
    }

    fn section(&self) -> Option<&Map<String, Value>> {
        self.root.get(self.kind.dependency_section()).and_then(Value::as_object)
    }

    /// Insert every required dependency that is not declared yet.
    ///
    /// Existing entries keep their constraint. Returns the inserted names in
    /// `required` order.
    pub fn insert_missing(&mut self, required: &[RequiredDependency]) -> Vec<String> {
        let section = self
            .root
            .entry(self.kind.dependency_section())
            .or_insert_with(|| Value::Object(Map::new()));

        let Value::Object(deps) = section else {
            // parse() guarantees the section is an object.
            return Vec::new();
        };

        let mut added = Vec::new();
        for dependency in required {
            if deps.contains_key(dependency.name) {
                continue;
            }
            deps.insert(dependency.name.to_string(), Value::String(dependency.constraint.into()));
            added.push(dependency.name.to_string());
        }
        added
    }

    /// Serialize as two-space indented JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String, AppError> {
        let mut content = serde_json::to_string_pretty(&self.root)
            .map_err(|err| AppError::malformed(self.kind.file_name(), err))?;
        content.push('\n');
        Ok(content)
    }
}
