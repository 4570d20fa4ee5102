//! The fixed set of files written besides the manifests.

use super::RootPath;

/// How a template reaches the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Copied byte for byte.
    Verbatim,
    /// Placeholders substituted with configuration values.
    Rendered,
}

/// Which directory a target path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Infrastructure files, regardless of the root path.
    DestinationRoot,
    /// Application files, under the resolved root path.
    AppRoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Path inside the embedded template directory.
    pub template: &'static str,
    /// Target path relative to its anchor.
    pub target: &'static str,
    pub mode: RenderMode,
    pub anchor: Anchor,
}

impl TemplateEntry {
    /// Destination-relative path this entry is written to.
    pub fn target_path(&self, root_path: &RootPath) -> String {
        match self.anchor {
            Anchor::DestinationRoot => self.target.to_string(),
            Anchor::AppRoot => root_path.join(self.target),
        }
    }
}

const fn infra(template: &'static str, target: &'static str, mode: RenderMode) -> TemplateEntry {
    TemplateEntry { template, target, mode, anchor: Anchor::DestinationRoot }
}

const fn app(template: &'static str, target: &'static str, mode: RenderMode) -> TemplateEntry {
    TemplateEntry { template, target, mode, anchor: Anchor::AppRoot }
}

use RenderMode::{Rendered, Verbatim};

pub const FILE_PLAN: &[TemplateEntry] = &[
    infra("_bowerrc.j2", ".bowerrc", Rendered),
    infra("gulpfile.js", "gulpfile.js", Verbatim),
    infra("_tsd.json", "tsd.json", Verbatim),
    infra("_jsconfig.json", "jsconfig.json", Verbatim),
    app("content/Office.css", "content/Office.css", Verbatim),
    app("content/fabric.css", "content/fabric.css", Verbatim),
    app("content/fabric.min.css", "content/fabric.min.css", Verbatim),
    app("content/fabric.rtl.css", "content/fabric.rtl.css", Verbatim),
    app("content/fabric.rtl.min.css", "content/fabric.rtl.min.css", Verbatim),
    app("content/fabric.components.css", "content/fabric.components.css", Verbatim),
    app("content/fabric.components.min.css", "content/fabric.components.min.css", Verbatim),
    app("content/fabric.components.rtl.css", "content/fabric.components.rtl.css", Verbatim),
    app(
        "content/fabric.components.rtl.min.css",
        "content/fabric.components.rtl.min.css",
        Verbatim,
    ),
    app("images/close.png", "images/close.png", Verbatim),
    app("scripts/jquery.fabric.js", "scripts/jquery.fabric.js", Verbatim),
    app("scripts/jquery.fabric.min.js", "scripts/jquery.fabric.min.js", Verbatim),
    app("index.html", "index.html", Verbatim),
    app("app.adalconfig.js", "app/app.adalconfig.js", Verbatim),
    app("app.config.js.j2", "app/app.config.js", Rendered),
    app("app.module.js", "app/app.module.js", Verbatim),
    app("app.routes.js", "app/app.routes.js", Verbatim),
    app("home/home.controller.js", "app/home/home.controller.js", Verbatim),
    app("home/home.html", "app/home/home.html", Verbatim),
    app("services/data.service.js", "app/services/data.service.js", Verbatim),
];
