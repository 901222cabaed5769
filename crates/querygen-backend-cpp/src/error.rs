//! Error types for stub rendering and writing.

use querygen_def::UnsupportedParam;
use thiserror::Error;

/// Top-level error type for the C++ stub backend.
#[derive(Debug, Error)]
pub enum StubError {
    /// A parameter's declared type has no storage mapping in its category.
    /// Fail-fast: a silently dropped parameter would produce an incomplete
    /// stub, so the whole run aborts instead.
    #[error("query {query}: parameter \"{param}\": {source}")]
    UnsupportedParam {
        /// Class name of the query being rendered.
        query: String,
        /// Name of the offending parameter.
        param: String,
        #[source]
        source: UnsupportedParam,
    },

    /// I/O error while writing a stub file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
