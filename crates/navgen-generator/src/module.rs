//! Sidebar module emission.
//!
//! Renders the collected entries as the generated TypeScript module the
//! site configuration imports.

use std::io::Write;

use navgen_core::SidebarEntry;
use thiserror::Error;
use tracing::debug;

/// Module emission errors.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for module operations.
pub type Result<T> = std::result::Result<T, ModuleError>;

/// Renders sidebar entries into the generated module source.
#[derive(Debug, Default)]
pub struct ModuleEmitter;

impl ModuleEmitter {
    /// Create a new module emitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the module source for an ordered entry sequence.
    ///
    /// An empty sequence still renders a syntactically valid empty list.
    pub fn generate(&self, entries: &[SidebarEntry]) -> String {
        debug!(count = entries.len(), "rendering sidebar module");

        let mut module = String::from("// Generated by navgen. Do not edit by hand.\n");
        module.push_str("export default [\n");
        for entry in entries {
            module.push_str(&format!(
                "  {{ text: \"{}\", link: \"{}\" }},\n",
                escape_js(&entry.text),
                escape_js(&entry.link)
            ));
        }
        module.push_str("];\n");
        module
    }

    /// Write the rendered module to a writer.
    pub fn write_to<W: Write>(&self, entries: &[SidebarEntry], writer: &mut W) -> Result<()> {
        writer.write_all(self.generate(entries).as_bytes())?;
        Ok(())
    }
}

/// Escape characters that would break out of a double-quoted JS string.
fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
