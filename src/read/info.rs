//! Extraction result types.

use std::path::PathBuf;

/// One member successfully written to disk.
///
/// The recorded path is the authoritative way to locate the extracted
/// file: directory layout under the destination root is an implementation
/// detail, and consumers should use these paths rather than re-scanning
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMember {
    /// Position of the member in archive order.
    pub index: usize,
    /// The member's filename (unchanged from the archive).
    pub name: String,
    /// Absolute or root-relative path the content was written to.
    pub path: PathBuf,
    /// Number of content bytes written.
    pub size: u64,
}

/// Result of extracting an archive's members.
///
/// On full success `extracted` holds exactly one entry per archive member
/// — no member is dropped or merged, even when names collide. Under
/// [`FailurePolicy::Continue`](crate::FailurePolicy::Continue) failed
/// members appear in `failures` instead.
#[must_use = "extraction results carry the only record of where members were written"]
#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    /// Number of members written.
    pub members_extracted: usize,
    /// Number of members that failed to write.
    pub members_failed: usize,
    /// Total content bytes written.
    pub bytes_extracted: u64,
    /// Every written member with its destination path, in archive order.
    pub extracted: Vec<ExtractedMember>,
    /// Detailed failures (member name and error message).
    pub failures: Vec<(String, String)>,
}

impl ExtractResult {
    /// Returns true if every member was written.
    pub fn is_ok(&self) -> bool {
        self.members_failed == 0
    }

    /// Returns true if any member failed.
    pub fn is_err(&self) -> bool {
        self.members_failed > 0
    }

    /// Returns the destination paths assigned to members with the given
    /// name, in archive order.
    pub fn paths_for(&self, name: &str) -> Vec<&PathBuf> {
        self.extracted
            .iter()
            .filter(|m| m.name == name)
            .map(|m| &m.path)
            .collect()
    }
}
