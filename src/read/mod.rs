//! Archive reading and extraction API.
//!
//! This module provides the public API for reading ar archives: listing
//! members and extracting them to disk with collision-safe paths.
//!
//! # Example
//!
//! ```rust,ignore
//! use arex::{Archive, ExtractOptions};
//!
//! // Open an archive
//! let archive = Archive::open_path("libdeps.a")?;
//!
//! // List members
//! for member in archive.members() {
//!     println!("{}: {} bytes", member.name, member.size);
//! }
//!
//! // Extract all members; duplicates land in distinct directories
//! let result = archive.extract("objs", &ExtractOptions::default())?;
//! for extracted in &result.extracted {
//!     println!("{} -> {}", extracted.name, extracted.path.display());
//! }
//! ```

mod extraction;
mod info;
mod options;
mod plan;

pub use info::{ExtractResult, ExtractedMember};
pub use options::{ExtractOptions, FailurePolicy};
pub use plan::{ExtractionPlan, MemberAssignment};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::format::parser::parse_archive;
use crate::member::ArchiveMember;
use crate::{Error, Result};

/// An ar archive, parsed into its ordered member sequence.
///
/// The archive is read and parsed eagerly on open; members own their
/// content bytes. Parsing never touches the filesystem beyond the initial
/// read, and a parse error means no member list is available at all.
pub struct Archive {
    members: Vec<ArchiveMember>,
}

impl Archive {
    /// Reads an archive from any byte source.
    ///
    /// The reader is consumed to its end before parsing starts.
    pub fn open<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(Error::Io)?;
        Self::from_bytes(&bytes)
    }

    /// Opens an archive file on disk.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(Error::Io)?;
        Self::open(BufReader::new(file))
    }

    /// Parses an archive already held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let members = parse_archive(bytes)?;
        Ok(Self { members })
    }

    /// Returns the members in archive file order.
    ///
    /// Special members (symbol tables, the GNU name table) are already
    /// filtered out; duplicated names are preserved as distinct members.
    pub fn members(&self) -> &[ArchiveMember] {
        &self.members
    }

    /// Returns the first member with the given name, if any.
    ///
    /// When the archive holds several members with this name, archive
    /// order decides which one is "first"; use [`Self::members`] to see
    /// all of them.
    pub fn member(&self, name: &str) -> Option<&ArchiveMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the archive holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Computes the collision-aware extraction plan without writing
    /// anything.
    ///
    /// Useful for callers that want to inspect or log destination
    /// assignments before committing to disk I/O. [`Self::extract`]
    /// computes the same plan internally.
    pub fn plan(&self) -> ExtractionPlan {
        ExtractionPlan::new(&self.members)
    }

    /// Extracts every member under `dest`, never letting two members
    /// occupy the same path.
    ///
    /// The destination root is created if missing. Planning completes
    /// before the first write; writes then proceed strictly in archive
    /// order. See [`ExtractionPlan`] for the collision policy and
    /// [`FailurePolicy`] for error handling on individual members.
    ///
    /// # Errors
    ///
    /// [`Error::DirectoryCreateFailed`] or [`Error::WriteFailed`] on
    /// filesystem failures (under [`FailurePolicy::Abort`]); with
    /// [`FailurePolicy::Continue`] those are surfaced through
    /// [`ExtractResult::failures`] instead.
    pub fn extract(&self, dest: impl AsRef<Path>, options: &ExtractOptions) -> Result<ExtractResult> {
        let plan = self.plan();
        extraction::extract_members(&self.members, &plan, dest.as_ref(), options)
    }
}
