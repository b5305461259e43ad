//! Artifact writer port

use crate::code::JavaFile;
use crate::error::Result;

/// Emits generated types
pub trait ArtifactWriter {
    /// Write `file`; the originating declarations travel on `file.type_spec`
    ///
    /// Writing the same type twice within one compilation fails with
    /// [`Error::DuplicateArtifact`](crate::error::Error::DuplicateArtifact).
    fn write(&mut self, file: &JavaFile) -> Result<()>;
}
