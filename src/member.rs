//! Archive member types.

/// A member of an ar archive.
///
/// One named, sized binary blob inside the archive, typically a compiled
/// object file. Members are produced in archive file order by parsing and
/// are immutable once parsed.
///
/// This struct is marked `#[non_exhaustive]` to allow adding new fields
/// in future versions without breaking downstream code. Pattern matching
/// on `ArchiveMember` requires a `..` wildcard.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ArchiveMember {
    /// The member name, with format decorations (trailing `/`, long-name
    /// references) already resolved to the original filename.
    pub name: String,
    /// Byte offset of this member's header within the archive.
    pub offset: u64,
    /// Content size in bytes.
    ///
    /// Always equals `data.len()`. For BSD long-name members this is the
    /// logical content size, i.e. the stored size minus the embedded name.
    pub size: u64,
    /// The member's content bytes.
    pub data: Vec<u8>,
    /// Modification time as seconds since the Unix epoch.
    ///
    /// `None` when the field was blank or zeroed, as produced by
    /// deterministic-mode archivers (`ar D`).
    pub mtime: Option<u64>,
    /// Owner user id. `None` for deterministic archives.
    pub uid: Option<u32>,
    /// Owner group id. `None` for deterministic archives.
    pub gid: Option<u32>,
    /// Unix file mode bits. `None` when blank.
    pub mode: Option<u32>,
    /// Position of this member in the archive's member sequence.
    pub(crate) index: usize,
}

impl ArchiveMember {
    /// Returns the member's position in archive order.
    ///
    /// Archive order is significant: it determines which occurrence of a
    /// duplicated name is treated as the first during extraction planning.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the member's content.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns true if the member has no content.
    ///
    /// Zero-byte members are valid and still produce an empty output file
    /// on extraction.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the member and returns its content bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
