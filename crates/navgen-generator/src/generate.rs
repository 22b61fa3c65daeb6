//! Generate orchestration.
//!
//! Coordinates the one-shot scan, render, and write of the sidebar module.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use navgen_core::{Config, SidebarEntry};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    module::{ModuleEmitter, ModuleError},
    scanner::{ContentScanner, ScanError},
};

/// Generation errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scanner error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Module emission error.
    #[error("module error: {0}")]
    Module(#[from] ModuleError),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    /// Entries written to the module, in order.
    pub entries: Vec<SidebarEntry>,

    /// Path of the generated module.
    pub output_path: PathBuf,

    /// Run duration in milliseconds.
    pub duration_ms: u64,
}

/// Sidebar generator that orchestrates the batch run.
#[derive(Debug)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a new generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the full generation run.
    ///
    /// Scans the content root, renders the module, and overwrites the output
    /// file. The write goes through a sibling temporary file and a rename, so
    /// a failed run leaves any previously generated module intact. The output
    /// path's parent directory is not created implicitly.
    pub fn generate(&self) -> Result<GenerateStats> {
        let start = Instant::now();

        info!(
            root = %self.config.content.root.display(),
            output = %self.config.output.path.display(),
            "starting sidebar generation"
        );

        let scanner = ContentScanner::from_config(&self.config);
        let entries = scanner.scan()?;

        let emitter = ModuleEmitter::new();
        let module = emitter.generate(&entries);

        write_atomic(&self.config.output.path, &module)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            entries = entries.len(),
            duration_ms, "sidebar generation complete"
        );

        Ok(GenerateStats {
            entries,
            output_path: self.config.output.path.clone(),
            duration_ms,
        })
    }
}

/// Write contents to a sibling temporary file, then rename it into place.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    debug!(path = %path.display(), tmp = %tmp.display(), "writing module");
    fs::write(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base: &Path) -> Config {
        let mut config = Config::default();
        config.content.root = base.join("docs");
        config.content.exclude = vec!["index.md".to_string(), ".vitepress".to_string()];
        config.output.path = base.join("sidebar.ts");
        config
    }

    #[test]
    fn test_generate_writes_module() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = test_config(dir.path());
        fs::create_dir_all(config.content.root.join("guide")).expect("create dirs");
        fs::write(config.content.root.join("guide/setup.md"), "# Setup").expect("write");

        let stats = Generator::new(config.clone()).generate().expect("generate");

        assert_eq!(
            stats.entries,
            vec![SidebarEntry::new("guide-setup", "/guide/setup")]
        );
        let written = fs::read_to_string(&config.output.path).expect("read module");
        assert!(written.contains(r#"{ text: "guide-setup", link: "/guide/setup" },"#));
    }

    #[test]
    fn test_generate_missing_root_writes_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = test_config(dir.path());

        let err = Generator::new(config.clone())
            .generate()
            .expect_err("missing root");

        assert!(matches!(err, GeneratorError::Scan(ScanError::RootNotFound(_))));
        assert!(!config.output.path.exists());
    }

    #[test]
    fn test_generate_missing_output_parent_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = test_config(dir.path());
        fs::create_dir_all(&config.content.root).expect("create root");
        config.output.path = dir.path().join("no-such-dir/sidebar.ts");

        let err = Generator::new(config).generate().expect_err("bad parent");
        assert!(matches!(err, GeneratorError::Io(_)));
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sidebar.ts");

        write_atomic(&path, "export default [\n];\n").expect("write");

        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "export default [\n];\n"
        );
        assert!(!dir.path().join("sidebar.ts.tmp").exists());
    }
}
