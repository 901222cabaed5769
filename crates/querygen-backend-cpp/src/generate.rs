//! Stub pair generation: render both artifacts and write them to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::decl::render_declaration;
use crate::defn::render_definition;
use crate::error::StubError;
use crate::model::QueryClass;

/// Paths of the two artifacts written for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubPair {
    /// The declaration artifact (`query<Name>.h`).
    pub header: PathBuf,
    /// The definition artifact (`query<Name>.cpp`).
    pub source: PathBuf,
}

/// Renders and writes the stub pair for one query class into `out_dir`.
///
/// File names are keyed on the class name: `query<Name>.h` and
/// `query<Name>.cpp`. Existing files are unconditionally overwritten, so
/// re-running on unchanged input is byte-for-byte idempotent.
pub fn write_query_stubs(class: &QueryClass, out_dir: &Path) -> Result<StubPair, StubError> {
    let header = out_dir.join(format!("query{}.h", class.name));
    let source = out_dir.join(format!("query{}.cpp", class.name));

    fs::write(&header, render_declaration(class))?;
    fs::write(&source, render_definition(class))?;

    Ok(StubPair { header, source })
}
