//! Error types for ar archive operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when parsing an archive or extracting its members, along
//! with a convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. You can
//! handle errors using pattern matching or the `?` operator:
//!
//! ```rust,no_run
//! use arex::{Archive, ExtractOptions, Result};
//!
//! fn extract_archive(path: &str, dest: &str) -> Result<()> {
//!     let archive = Archive::open_path(path)?;
//!     archive.extract(dest, &ExtractOptions::default())?;
//!     Ok(())
//! }
//! ```
//!
//! For fine-grained handling, match on specific variants:
//!
//! ```rust,no_run
//! use arex::{Archive, Error};
//!
//! fn open_with_diagnostics(path: &str) -> arex::Result<Archive> {
//!     match Archive::open_path(path) {
//!         Ok(archive) => Ok(archive),
//!         Err(e @ Error::BadMagic { .. }) => {
//!             eprintln!("Not an ar archive: {}", path);
//!             Err(e)
//!         }
//!         Err(e @ Error::Truncated { .. }) => {
//!             eprintln!("Archive cut short at byte {:#x}", e.offset().unwrap_or(0));
//!             Err(e)
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Number of magic bytes captured by [`Error::BadMagic`].
pub(crate) const MAGIC_LEN: usize = 8;

/// The main error type for ar archive operations.
///
/// Errors fall into two categories:
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | Format | [`BadMagic`][Self::BadMagic], [`Truncated`][Self::Truncated], [`CorruptHeader`][Self::CorruptHeader] | Invalid archive data |
/// | I/O | [`Io`][Self::Io], [`WriteFailed`][Self::WriteFailed], [`DirectoryCreateFailed`][Self::DirectoryCreateFailed] | File system operations |
///
/// Format errors are always fatal: no partial member list is usable. They
/// carry the byte offset where parsing failed. Write errors are tagged with
/// the member name and intended destination so callers can report which
/// member failed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading the archive.
    ///
    /// This wraps [`std::io::Error`] and is returned when reading the input
    /// fails. Common causes include file-not-found and permission-denied;
    /// check the underlying [`std::io::ErrorKind`] for specific handling.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not begin with the ar global header `!<arch>\n`.
    ///
    /// The file is not an ar archive at all (e.g. a bare object file or
    /// garbage). The first bytes actually found are included for
    /// diagnostics.
    #[error("bad archive magic: expected \"!<arch>\\n\", found {found:?}")]
    BadMagic {
        /// The first bytes of the input (zero-padded if shorter).
        found: [u8; MAGIC_LEN],
    },

    /// The archive ends before a declared header or member does.
    ///
    /// A member header declared more content than the file holds, or the
    /// file stops mid-header. The archive was likely cut short during
    /// download or copy.
    #[error("truncated archive at offset {offset:#x}: need {needed} bytes, {available} available")]
    Truncated {
        /// The byte offset where the incomplete record starts.
        offset: u64,
        /// Number of bytes the record declared.
        needed: u64,
        /// Number of bytes actually remaining.
        available: u64,
    },

    /// A member header is structurally invalid.
    ///
    /// Covers non-numeric size fields, a missing end-of-header marker, and
    /// long-name references that point outside the extended-name table.
    #[error("corrupt member header at offset {offset:#x}: {reason}")]
    CorruptHeader {
        /// The byte offset of the offending header.
        offset: u64,
        /// A description of what was malformed.
        reason: String,
    },

    /// Writing an extracted member to disk failed.
    ///
    /// Tagged with the member name and the destination path so the caller
    /// can report exactly which member was lost. Disk-full and
    /// permission-denied both surface here via the wrapped [`io::Error`].
    #[error("failed to write member '{member}' to {path:?}: {source}")]
    WriteFailed {
        /// Name of the member whose content could not be written.
        member: String,
        /// The destination path that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Creating a destination directory failed.
    #[error("failed to create directory {path:?}: {source}")]
    DirectoryCreateFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns `true` if this error means the archive does not parse.
    ///
    /// Format errors are fatal for the whole archive: there is no usable
    /// partial member list after one is reported.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::BadMagic { .. } | Error::Truncated { .. } | Error::CorruptHeader { .. }
        )
    }

    /// Returns `true` if this error came from the file system rather than
    /// the archive contents.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::WriteFailed { .. } | Error::DirectoryCreateFailed { .. }
        )
    }

    /// Returns the byte offset where parsing failed, if this is a format
    /// error that carries one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::Truncated { offset, .. } => Some(*offset),
            Error::CorruptHeader { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Returns the member name associated with this error, if any.
    pub fn member_name(&self) -> Option<&str> {
        match self {
            Error::WriteFailed { member, .. } => Some(member.as_str()),
            _ => None,
        }
    }

    /// Creates a `BadMagic` error from the leading bytes of the input.
    ///
    /// Inputs shorter than the magic are zero-padded.
    pub(crate) fn bad_magic(leading: &[u8]) -> Self {
        let mut found = [0u8; MAGIC_LEN];
        let n = leading.len().min(MAGIC_LEN);
        found[..n].copy_from_slice(&leading[..n]);
        Error::BadMagic { found }
    }

    /// Creates a `Truncated` error.
    pub fn truncated(offset: u64, needed: u64, available: u64) -> Self {
        Error::Truncated {
            offset,
            needed,
            available,
        }
    }

    /// Creates a `CorruptHeader` error.
    pub fn corrupt_header(offset: u64, reason: impl Into<String>) -> Self {
        Error::CorruptHeader {
            offset,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for ar archive operations.
///
/// This is defined as `std::result::Result<T, Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_io_error());
        assert!(!err.is_format_error());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_bad_magic() {
        let err = Error::bad_magic(b"PK\x03\x04\x00\x00\x00\x00");
        assert!(err.is_format_error());
        assert_eq!(err.offset(), None);
        assert!(err.to_string().contains("!<arch>"));
    }

    #[test]
    fn test_bad_magic_short_input() {
        // Inputs shorter than the magic must not panic
        let err = Error::bad_magic(b"ab");
        assert!(matches!(
            err,
            Error::BadMagic {
                found: [b'a', b'b', 0, 0, 0, 0, 0, 0]
            }
        ));
    }

    #[test]
    fn test_truncated() {
        let err = Error::truncated(0x44, 60, 12);
        assert!(err.is_format_error());
        assert_eq!(err.offset(), Some(0x44));
        let msg = err.to_string();
        assert!(msg.contains("0x44"));
        assert!(msg.contains("60"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_corrupt_header() {
        let err = Error::corrupt_header(0x8, "size field is not decimal");
        assert_eq!(err.offset(), Some(0x8));
        assert!(err.to_string().contains("0x8"));
        assert!(err.to_string().contains("size field is not decimal"));
    }

    #[test]
    fn test_write_failed_context() {
        let err = Error::WriteFailed {
            member: "foo.o".into(),
            path: PathBuf::from("/out/dup.1/foo.o"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_io_error());
        assert_eq!(err.member_name(), Some("foo.o"));
        let msg = err.to_string();
        assert!(msg.contains("foo.o"));
        assert!(msg.contains("dup.1"));
        // Source chain is preserved for callers that walk it
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_directory_create_failed() {
        let err = Error::DirectoryCreateFailed {
            path: PathBuf::from("/out/dup.1"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_io_error());
        assert_eq!(err.member_name(), None);
        assert!(err.to_string().contains("dup.1"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
