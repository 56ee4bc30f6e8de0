//! Filesystem helpers shared by the output writers.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::GeneratorError;

/// Opens a directory if it exists, returning `None` when the path is missing.
pub fn open_optional_dir(path: &Utf8Path) -> Result<Option<Dir>, GeneratorError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(GeneratorError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// Opens a directory, creating it and any missing parents first.
pub fn ensure_dir(path: &Utf8Path) -> Result<Dir, GeneratorError> {
    if let Some(dir) = open_optional_dir(path)? {
        return Ok(dir);
    }
    Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| GeneratorError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })?;
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| GeneratorError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })
}
