//! # DMT File Errors
//!
//! The closed set of failures raised while validating DMT records or the
//! paths they are read from and written to.
//!
//! Every failure has a [`DmtFileErrorKind`] with a fixed English message.
//! The [`DmtFileError`] value adds optional context (path, block index,
//! versions, detail) that is appended to the message when present. Callers
//! that only care about the category match on [`DmtFileError::kind`].

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Category of a DMT file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DmtFileErrorKind {
    /// The file contains no triangle-data section at all.
    NoTriangleBlocks,
    /// A triangle block declares zero vertices.
    NoVertices,
    /// A triangle block declares zero triangles.
    NoTriangles,
    /// The file version is not one the loader recognizes.
    UnsupportedFileFormat,
    /// The path given for a read does not exist.
    FileDoesNotExist,
    /// A block's version tag disagrees with the file's version tag.
    BlockVersionDoesNotMatchFileVersion,
    /// The path given for a write already exists.
    FileAlreadyExists,
    /// Anything not covered by the other kinds.
    UndefinedError,
}

impl DmtFileErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [DmtFileErrorKind; 8] = [
        Self::NoTriangleBlocks,
        Self::NoVertices,
        Self::NoTriangles,
        Self::UnsupportedFileFormat,
        Self::FileDoesNotExist,
        Self::BlockVersionDoesNotMatchFileVersion,
        Self::FileAlreadyExists,
        Self::UndefinedError,
    ];

    /// Fixed human-readable explanation of this kind.
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoTriangleBlocks => "The file contains no triangle blocks.",
            Self::NoVertices => "A triangle block contains no vertices.",
            Self::NoTriangles => "A triangle block contains no triangles.",
            Self::UnsupportedFileFormat => "The file format is not supported.",
            Self::FileDoesNotExist => "The file does not exist.",
            Self::BlockVersionDoesNotMatchFileVersion => {
                "The triangle block version does not match the file version."
            }
            Self::FileAlreadyExists => "The file already exists.",
            Self::UndefinedError => "An undefined error occurred.",
        }
    }
}

impl fmt::Display for DmtFileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Optional details about where a failure happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// File the failure relates to
    pub path: Option<PathBuf>,
    /// Zero-based index of the offending triangle block
    pub block_index: Option<usize>,
    /// Version tag of the file
    pub file_version: Option<u32>,
    /// Version tag of the offending block
    pub block_version: Option<u32>,
    /// Free-form detail
    pub detail: Option<String>,
}

impl ErrorContext {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let mut parts = Vec::new();
        if let Some(path) = &self.path {
            parts.push(format!("path: {}", path.display()));
        }
        if let Some(index) = self.block_index {
            parts.push(format!("block {index}"));
        }
        if let Some(version) = self.file_version {
            parts.push(format!("file version {version}"));
        }
        if let Some(version) = self.block_version {
            parts.push(format!("block version {version}"));
        }
        if let Some(detail) = &self.detail {
            parts.push(detail.clone());
        }
        write!(f, " ({})", parts.join(", "))
    }
}

/// A DMT file failure: a kind plus optional context.
///
/// ## Example
///
/// ```rust
/// use dmt_mesh::{DmtFileError, DmtFileErrorKind};
///
/// let err = DmtFileError::new(DmtFileErrorKind::NoTriangles).with_block(3);
/// assert_eq!(err.kind(), DmtFileErrorKind::NoTriangles);
/// assert_eq!(err.to_string(), "A triangle block contains no triangles. (block 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{context}")]
pub struct DmtFileError {
    kind: DmtFileErrorKind,
    context: ErrorContext,
}

impl DmtFileError {
    /// Creates an error of the given kind with no context.
    pub fn new(kind: DmtFileErrorKind) -> Self {
        Self {
            kind,
            context: ErrorContext::default(),
        }
    }

    /// Creates an `UndefinedError` carrying `detail`.
    pub fn undefined(detail: impl Into<String>) -> Self {
        Self::new(DmtFileErrorKind::UndefinedError).with_detail(detail)
    }

    /// Attaches the file path, if known.
    pub fn with_path(mut self, path: Option<&Path>) -> Self {
        self.context.path = path.map(Path::to_path_buf);
        self
    }

    /// Attaches the offending block index.
    pub fn with_block(mut self, index: usize) -> Self {
        self.context.block_index = Some(index);
        self
    }

    /// Attaches the file and block version tags.
    pub fn with_versions(mut self, file_version: u32, block_version: Option<u32>) -> Self {
        self.context.file_version = Some(file_version);
        self.context.block_version = block_version;
        self
    }

    /// Attaches a free-form detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.context.detail = Some(detail.into());
        self
    }

    /// The failure category.
    #[inline]
    pub fn kind(&self) -> DmtFileErrorKind {
        self.kind
    }

    /// The attached context.
    #[inline]
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// The fixed message of the kind, without context.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl From<DmtFileErrorKind> for DmtFileError {
    fn from(kind: DmtFileErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type alias for DMT operations.
pub type DmtResult<T> = Result<T, DmtFileError>;
