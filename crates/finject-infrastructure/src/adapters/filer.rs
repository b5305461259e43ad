//! Artifact writers
//!
//! [`FilesystemFiler`] writes rendered sources below an output directory; [`MemoryFiler`] keeps
//! them in memory for dry runs and tests. Both refuse to write the same type twice within one
//! compilation.

use super::java_renderer::render_java;
use crate::constants::JAVA_FILE_EXTENSION;
use crate::error_ext::ErrorContext;
use finject_domain::error::{Error, Result};
use finject_domain::{ArtifactWriter, ClassName, JavaFile};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Path of `class` relative to a source root: `<package dirs>/<Name>.java`
pub fn source_path(class: &ClassName) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in class.package_name().split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!(
        "{}.{JAVA_FILE_EXTENSION}",
        class.top_level_class_name().simple_name()
    ));
    path
}

/// Writes generated sources to disk
#[derive(Debug)]
pub struct FilesystemFiler {
    root: PathBuf,
    written: HashSet<ClassName>,
    paths: Vec<PathBuf>,
}

impl FilesystemFiler {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            written: HashSet::new(),
            paths: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files written so far, in write order
    pub fn written_paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl ArtifactWriter for FilesystemFiler {
    fn write(&mut self, file: &JavaFile) -> Result<()> {
        let name = file.class_name();
        if !self.written.insert(name.clone()) {
            return Err(Error::duplicate_artifact(name.canonical_name()));
        }

        let path = self.root.join(source_path(&name));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .io_context(format!("Failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, render_java(file))
            .io_context(format!("Failed to write {}", path.display()))?;

        info!(
            generated = %name,
            path = %path.display(),
            originating = file.type_spec.originating_elements.len(),
            "Wrote generated source"
        );
        self.paths.push(path);
        Ok(())
    }
}

/// A generated file held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub file: JavaFile,
    pub source: String,
}

impl GeneratedSource {
    pub fn class_name(&self) -> ClassName {
        self.file.class_name()
    }
}

/// Keeps generated sources in memory
#[derive(Debug, Default)]
pub struct MemoryFiler {
    sources: Vec<GeneratedSource>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in write order
    pub fn sources(&self) -> &[GeneratedSource] {
        &self.sources
    }

    /// Rendered source of the generated type with the given canonical name
    pub fn source(&self, canonical_name: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.class_name().canonical_name() == canonical_name)
            .map(|s| s.source.as_str())
    }

    pub fn into_sources(self) -> Vec<GeneratedSource> {
        self.sources
    }
}

impl ArtifactWriter for MemoryFiler {
    fn write(&mut self, file: &JavaFile) -> Result<()> {
        let name = file.class_name();
        if self.sources.iter().any(|s| s.class_name() == name) {
            return Err(Error::duplicate_artifact(name.canonical_name()));
        }
        debug!(generated = %name, "Kept generated source in memory");
        self.sources.push(GeneratedSource {
            file: file.clone(),
            source: render_java(file),
        });
        Ok(())
    }
}
