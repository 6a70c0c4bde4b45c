//! Existence checks on the paths DMT files are read from and written to.
//!
//! Reading and writing bytes belongs to the file layer; these helpers only
//! decide whether a path is a valid target before that layer runs.

use std::path::Path;

use crate::error::{DmtFileError, DmtFileErrorKind, DmtResult};

/// Fails with `FileDoesNotExist` unless `path` names an existing file.
///
/// # Examples
/// ```
/// use dmt_mesh::{check_read_target, DmtFileErrorKind};
/// use std::path::Path;
///
/// let err = check_read_target(Path::new("/no/such/model.dmt")).unwrap_err();
/// assert_eq!(err.kind(), DmtFileErrorKind::FileDoesNotExist);
/// ```
pub fn check_read_target(path: &Path) -> DmtResult<()> {
    match path.try_exists() {
        Ok(true) if path.is_file() => Ok(()),
        Ok(true) => Err(DmtFileError::new(DmtFileErrorKind::FileDoesNotExist)
            .with_path(Some(path))
            .with_detail("path is not a regular file")),
        Ok(false) => Err(DmtFileError::new(DmtFileErrorKind::FileDoesNotExist).with_path(Some(path))),
        Err(e) => Err(DmtFileError::undefined(e.to_string()).with_path(Some(path))),
    }
}

/// Fails with `FileAlreadyExists` if `path` exists and `overwrite` is false.
pub fn check_write_target(path: &Path, overwrite: bool) -> DmtResult<()> {
    match path.try_exists() {
        Ok(true) if !overwrite => {
            Err(DmtFileError::new(DmtFileErrorKind::FileAlreadyExists).with_path(Some(path)))
        }
        Ok(_) => Ok(()),
        Err(e) => Err(DmtFileError::undefined(e.to_string()).with_path(Some(path))),
    }
}
