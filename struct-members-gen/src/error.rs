//! Error types for `struct-members-gen`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced while writing or checking the generated header.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A filesystem operation on `path` failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being opened, created or written.
        path: Utf8PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },

    /// The output path ends in `..` or is a bare root.
    #[error("output path '{0}' does not name a file")]
    MissingFileName(Utf8PathBuf),

    /// `--check` found a header that differs from the generated text.
    #[error("{path} is out of date; rerun struct-members-gen to regenerate it")]
    StaleArtifact {
        /// Header that needs regenerating.
        path: Utf8PathBuf,
    },
}
