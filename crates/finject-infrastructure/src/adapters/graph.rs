//! Declaration graph files
//!
//! A declaration graph is the parsed form of a program handed to the processor: the source
//! declarations of the compilation plus the classpath declarations they refer to.
//!
//! ```yaml
//! sources:
//!   - name: test.TestFragment
//!     modifiers: [public]
//!     superclass: { class: androidx.fragment.app.Fragment }
//!     constructors:
//!       - annotations: [{ type: com.vikingsen.inject.fragment.FragmentInject }]
//!         parameters: [{ name: foo, type: { class: java.lang.Long } }]
//! classpath:
//!   - name: javax.annotation.processing.Generated
//!     kind: annotation
//! ```

use crate::constants::GRAPH_FILE_EXTENSIONS;
use crate::error_ext::ErrorContext;
use finject_domain::error::{Error, Result};
use finject_domain::TypeDeclaration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Source and classpath declarations of one compilation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationGraph {
    /// Declarations compiled in this compilation; the roots of the first round
    #[serde(default)]
    pub sources: Vec<TypeDeclaration>,
    /// Already-compiled declarations: resolvable, never roots
    #[serde(default)]
    pub classpath: Vec<TypeDeclaration>,
}

impl DeclarationGraph {
    /// Parse one graph file, choosing the format from its extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .io_context(format!("Failed to read declaration graph {}", path.display()))?;
        match extension(path).as_deref() {
            Some("json") => Ok(serde_json::from_str(&content)?),
            // externally tagged enums as `{ class: ... }` maps, the same shape JSON uses
            Some("yaml" | "yml") => Ok(serde_yaml::with::singleton_map_recursive::deserialize(
                serde_yaml::Deserializer::from_str(&content),
            )?),
            _ => Err(Error::invalid_declaration(format!(
                "Unsupported declaration graph format: {}",
                path.display()
            ))),
        }
    }

    /// Load and merge every graph file under `paths`
    ///
    /// Directories are searched recursively; files inside them are taken in path order so the
    /// merged graph does not depend on directory iteration order.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<(Self, Vec<PathBuf>)> {
        let files = collect_graph_files(paths)?;
        let mut graph = Self::default();
        for file in &files {
            debug!(path = %file.display(), "Loading declaration graph");
            graph.merge(Self::from_file(file)?);
        }
        Ok((graph, files))
    }

    /// Append `other`'s declarations to this graph
    pub fn merge(&mut self, other: Self) {
        self.sources.extend(other.sources);
        self.classpath.extend(other.classpath);
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_graph_file(path: &Path) -> bool {
    extension(path).is_some_and(|e| GRAPH_FILE_EXTENSIONS.contains(&e.as_str()))
}

/// Expand directories into the graph files they contain
pub fn collect_graph_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry.context(format!("Failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && is_graph_file(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            files.extend(found);
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            return Err(Error::not_found(path.display().to_string()));
        }
    }
    Ok(files)
}
