//! Writers for the generated header.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;
use tracing::{debug, info, warn};

use crate::artifact::Artifact;
use crate::error::GeneratorError;
use crate::fs_helpers::{ensure_dir, open_optional_dir};

/// Writes the rendered artifact to `path`, replacing any previous contents.
///
/// Missing parent directories are created. The file is truncated before
/// writing and is not replaced atomically, so a failed run can leave a
/// partial header behind.
///
/// # Errors
///
/// Returns [`GeneratorError::MissingFileName`] when `path` has no final file
/// component and [`GeneratorError::Io`] when any filesystem step fails.
pub fn write_artifact(path: &Utf8Path, artifact: &Artifact) -> Result<Utf8PathBuf, GeneratorError> {
    let (parent, file_name) = split_output_path(path)?;
    let dir = ensure_dir(parent)?;
    let content = artifact.render();

    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|source| io_error(path, source))?;
    file.write_all(content.as_bytes()).map_err(|source| io_error(path, source))?;
    file.flush().map_err(|source| io_error(path, source))?;

    info!(
        path = %path,
        definitions = artifact.definitions().len(),
        bytes = content.len(),
        "wrote struct members header"
    );
    Ok(path.to_path_buf())
}

/// Verifies that `path` already holds exactly the rendered artifact.
///
/// # Errors
///
/// Returns [`GeneratorError::StaleArtifact`] when the file is missing or its
/// bytes differ (including content that is not UTF-8), and
/// [`GeneratorError::Io`] when it cannot be read.
pub fn check_artifact(path: &Utf8Path, artifact: &Artifact) -> Result<(), GeneratorError> {
    let (parent, file_name) = split_output_path(path)?;
    let expected = artifact.render();

    let current = match open_optional_dir(parent)? {
        Some(dir) => read_optional(&dir, file_name).map_err(|source| io_error(path, source))?,
        None => None,
    };

    if current.as_deref() == Some(expected.as_bytes()) {
        debug!(path = %path, "struct members header is up to date");
        return Ok(());
    }

    warn!(
        path = %path,
        is_missing = current.is_none(),
        "struct members header is out of date"
    );
    Err(GeneratorError::StaleArtifact {
        path: path.to_path_buf(),
    })
}

fn split_output_path(path: &Utf8Path) -> Result<(&Utf8Path, &str), GeneratorError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| GeneratorError::MissingFileName(path.to_path_buf()))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Ok((parent, file_name))
}

fn read_optional(dir: &Dir, file_name: &str) -> std::io::Result<Option<Vec<u8>>> {
    match dir.read(file_name) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn io_error(path: &Utf8Path, source: std::io::Error) -> GeneratorError {
    GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    }
}
