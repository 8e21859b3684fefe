//! Writing rendered diagrams to disk

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::{ComposeVizError, OutputFormat, Result};
use crate::plugins::Diagrams;

/// File stem shared by both output files
pub const DEFAULT_STEM: &str = "compose_architecture";

/// A diagram file that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub format: OutputFormat,
    pub path: PathBuf,
}

/// Writes both diagrams as sibling files `<dir>/<stem>.mmd` and
/// `<dir>/<stem>.puml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputWriter {
    dir: PathBuf,
    stem: String,
}

impl OutputWriter {
    /// Write into `dir` with the default stem
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stem: DEFAULT_STEM.to_string(),
        }
    }

    /// Write next to the compose file at `input`
    pub fn for_input(input: &Path) -> Self {
        let dir = input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Self::new(dir)
    }

    /// Use a different file stem
    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = stem.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Destination path for a notation
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        self.dir.join(format!("{}.{}", self.stem, format.extension()))
    }

    /// Write both diagrams, Mermaid first
    ///
    /// The output directory is created if needed. The first failure aborts
    /// and is reported as a storage error.
    pub fn write(&self, diagrams: &Diagrams) -> Result<Vec<WrittenFile>> {
        fs::create_dir_all(&self.dir).map_err(|e| ComposeVizError::storage(&self.dir, e))?;

        let mut written = Vec::new();
        for (format, content) in diagrams.iter() {
            let path = self.path_for(format);
            fs::write(&path, content).map_err(|e| ComposeVizError::storage(&path, e))?;
            debug!(path = %path.display(), bytes = content.len(), "Wrote diagram");
            written.push(WrittenFile { format, path });
        }

        info!(dir = %self.dir.display(), files = written.len(), "Diagrams written");
        Ok(written)
    }
}
