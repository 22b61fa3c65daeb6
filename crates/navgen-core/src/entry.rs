//! Sidebar entry type and path-derived title/link extraction.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One navigable page in the generated sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    /// Human-readable label.
    pub text: String,

    /// Root-relative route link (forward slashes, no `.md` suffix).
    pub link: String,
}

impl SidebarEntry {
    /// Create an entry from already-derived parts.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Derive an entry from a markdown file path relative to the content root.
    ///
    /// Title policy is path-derived: a file directly under the root is titled
    /// by its stem, anything deeper as `<immediateParentDir>-<stem>`.
    ///
    /// Supports patterns like:
    /// - `intro.md` → text: "intro", link: "/intro"
    /// - `guide/setup.md` → text: "guide-setup", link: "/guide/setup"
    /// - `api/http/routes.md` → text: "http-routes", link: "/api/http/routes"
    ///
    /// Returns `None` for non-markdown files and for paths that are not
    /// valid UTF-8.
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        let extension = relative.extension()?.to_str()?;
        if extension != "md" {
            return None;
        }

        let stem = relative.file_stem()?.to_str()?;
        let parent = relative.parent().unwrap_or(Path::new(""));

        let text = match parent.file_name().and_then(|name| name.to_str()) {
            Some(dir) => format!("{dir}-{stem}"),
            None => stem.to_string(),
        };

        // Rebuild the link from path components so separators normalize to
        // forward slashes on every platform.
        let mut segments = Vec::new();
        for component in parent.components() {
            segments.push(component.as_os_str().to_str()?);
        }
        segments.push(stem);
        let link = format!("/{}", segments.join("/"));

        Some(Self { text, link })
    }
}
