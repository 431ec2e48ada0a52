//! Member-table parser for ar archives.
//!
//! [`parse_archive`] walks the byte stream into an ordered member sequence.
//! Besides the fixed headers ([`MemberHeader`]), the walk has to deal with
//! the two member-naming conventions in the common BSD/GNU layout:
//!
//! - **GNU**: short names carry a trailing `/` terminator; names longer
//!   than 15 bytes live in an extended-name table member `//` and are
//!   referenced as `/<offset>`. The symbol table is the member named `/`
//!   (or `/SYM64/` for 64-bit indexes).
//! - **BSD**: long names are spelled `#1/<len>`, with the actual name
//!   stored in the first `<len>` bytes of the member data. The symbol
//!   table is named `__.SYMDEF` or `__.SYMDEF SORTED`.
//!
//! Symbol tables and the name table are bookkeeping members, not objects:
//! they are consumed or skipped and never appear in the returned sequence.
//! Symbol-table *contents* are never interpreted.

use crate::format::header::{GLOBAL_MAGIC, HEADER_LEN, MemberHeader};
use crate::member::ArchiveMember;
use crate::{Error, Result};

/// GNU symbol table member names.
const GNU_SYMBOL_TABLE: &str = "/";
const GNU_SYMBOL_TABLE_64: &str = "/SYM64/";
/// GNU extended-name table member name.
const GNU_NAME_TABLE: &str = "//";
/// BSD symbol table member names.
const BSD_SYMDEF: &str = "__.SYMDEF";
const BSD_SYMDEF_SORTED: &str = "__.SYMDEF SORTED";
/// Prefix of BSD-style long names.
const BSD_LONG_NAME_PREFIX: &str = "#1/";

/// Parses a complete ar archive into its member sequence.
///
/// The returned members are in archive file order, with special members
/// (symbol tables, the GNU name table) removed and all name decorations
/// resolved. Each member's `size` equals the number of content bytes it
/// holds.
///
/// # Errors
///
/// - [`Error::BadMagic`] if the input does not start with `!<arch>\n`.
/// - [`Error::Truncated`] if a header or declared content runs past the
///   end of the input.
/// - [`Error::CorruptHeader`] for malformed headers and unresolvable or
///   unsafe member names.
///
/// All parse errors are fatal; no partial member list is returned.
pub(crate) fn parse_archive(bytes: &[u8]) -> Result<Vec<ArchiveMember>> {
    if bytes.len() < GLOBAL_MAGIC.len() {
        if GLOBAL_MAGIC.starts_with(bytes) && !bytes.is_empty() {
            return Err(Error::truncated(
                0,
                GLOBAL_MAGIC.len() as u64,
                bytes.len() as u64,
            ));
        }
        return Err(Error::bad_magic(bytes));
    }
    if &bytes[..GLOBAL_MAGIC.len()] != GLOBAL_MAGIC {
        return Err(Error::bad_magic(bytes));
    }

    let mut pos = GLOBAL_MAGIC.len();
    let mut name_table: Option<&[u8]> = None;
    let mut members = Vec::new();

    while pos < bytes.len() {
        let remaining = bytes.len() - pos;
        if remaining < HEADER_LEN {
            return Err(Error::truncated(
                pos as u64,
                HEADER_LEN as u64,
                remaining as u64,
            ));
        }

        let header = MemberHeader::parse(&bytes[pos..pos + HEADER_LEN], pos as u64)?;
        let data_start = pos + HEADER_LEN;
        let stored_size = usize::try_from(header.size).map_err(|_| {
            Error::corrupt_header(pos as u64, format!("member size {} overflows", header.size))
        })?;
        if stored_size > bytes.len() - data_start {
            return Err(Error::truncated(
                pos as u64,
                header.size,
                (bytes.len() - data_start) as u64,
            ));
        }
        let stored_data = &bytes[data_start..data_start + stored_size];

        match classify(&header, name_table, stored_data, pos as u64)? {
            Record::SymbolTable => {
                log::debug!("skipping symbol table member at offset {:#x}", pos);
            }
            Record::NameTable => {
                if name_table.is_some() {
                    return Err(Error::corrupt_header(
                        pos as u64,
                        "duplicate extended-name table",
                    ));
                }
                log::debug!(
                    "extended-name table at offset {:#x} ({} bytes)",
                    pos,
                    stored_size
                );
                name_table = Some(stored_data);
            }
            Record::Member { name, name_len } => {
                validate_member_name(&name, pos as u64)?;
                let data = stored_data[name_len..].to_vec();
                members.push(ArchiveMember {
                    name,
                    offset: pos as u64,
                    size: data.len() as u64,
                    data,
                    mtime: header.mtime,
                    uid: header.uid,
                    gid: header.gid,
                    mode: header.mode,
                    index: members.len(),
                });
            }
        }

        pos = data_start + stored_size;
        // Member data is padded to an even offset with a single newline.
        // A missing pad on the final member is tolerated.
        if stored_size % 2 == 1 && pos < bytes.len() {
            pos += 1;
        }
    }

    log::debug!("parsed {} archive members", members.len());
    Ok(members)
}

/// What a raw member record turned out to be.
enum Record {
    /// A symbol table; skipped.
    SymbolTable,
    /// The GNU extended-name table; consumed for lookups.
    NameTable,
    /// A real member. `name_len` is the number of leading data bytes that
    /// belong to an embedded BSD-style name rather than to the content.
    Member { name: String, name_len: usize },
}

fn classify(
    header: &MemberHeader,
    name_table: Option<&[u8]>,
    stored_data: &[u8],
    offset: u64,
) -> Result<Record> {
    let raw = header.name.as_str();

    if raw == GNU_SYMBOL_TABLE || raw == GNU_SYMBOL_TABLE_64 {
        return Ok(Record::SymbolTable);
    }
    if raw == GNU_NAME_TABLE {
        return Ok(Record::NameTable);
    }

    if let Some(digits) = raw.strip_prefix('/') {
        // GNU long-name reference: "/<decimal offset into name table>"
        let table_offset: usize = digits.parse().map_err(|_| {
            Error::corrupt_header(offset, format!("unrecognized member name {:?}", raw))
        })?;
        let table = name_table.ok_or_else(|| {
            Error::corrupt_header(offset, "long-name reference before extended-name table")
        })?;
        let name = resolve_long_name(table, table_offset, offset)?;
        return Ok(Record::Member { name, name_len: 0 });
    }

    if let Some(digits) = raw.strip_prefix(BSD_LONG_NAME_PREFIX) {
        // BSD long name: first <len> data bytes are the (NUL-padded) name
        let name_len: usize = digits.parse().map_err(|_| {
            Error::corrupt_header(offset, format!("bad BSD long-name length in {:?}", raw))
        })?;
        if name_len > stored_data.len() {
            return Err(Error::corrupt_header(
                offset,
                format!(
                    "embedded name of {} bytes exceeds member size {}",
                    name_len,
                    stored_data.len()
                ),
            ));
        }
        let name_bytes = &stored_data[..name_len];
        let end = name_bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(name_bytes.len());
        let name = String::from_utf8_lossy(&name_bytes[..end]).into_owned();
        if name == BSD_SYMDEF || name == BSD_SYMDEF_SORTED {
            return Ok(Record::SymbolTable);
        }
        return Ok(Record::Member { name, name_len });
    }

    if raw == BSD_SYMDEF || raw == BSD_SYMDEF_SORTED {
        return Ok(Record::SymbolTable);
    }

    // GNU short names carry a trailing '/' terminator; traditional
    // archives carry none.
    let name = raw.strip_suffix('/').unwrap_or(raw).to_string();
    Ok(Record::Member { name, name_len: 0 })
}

/// Looks up a `/<offset>` reference in the GNU extended-name table.
///
/// Table entries are newline-separated and `/`-terminated.
fn resolve_long_name(table: &[u8], table_offset: usize, header_offset: u64) -> Result<String> {
    if table_offset >= table.len() {
        return Err(Error::corrupt_header(
            header_offset,
            format!(
                "long-name offset {} outside name table of {} bytes",
                table_offset,
                table.len()
            ),
        ));
    }
    let entry = &table[table_offset..];
    let end = entry
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(entry.len());
    let mut name = &entry[..end];
    if let [rest @ .., b'/'] = name {
        name = rest;
    }
    if name.is_empty() {
        return Err(Error::corrupt_header(
            header_offset,
            format!("empty long name at table offset {}", table_offset),
        ));
    }
    Ok(String::from_utf8_lossy(name).into_owned())
}

/// Rejects member names that could not name a regular file inside the
/// extraction root.
///
/// Members are extracted as `<assigned dir>/<name>`, so a name with a path
/// separator or a dot-entry would escape the directory the planner chose
/// for it.
fn validate_member_name(name: &str, offset: u64) -> Result<()> {
    if name.is_empty() {
        return Err(Error::corrupt_header(offset, "empty member name"));
    }
    if name == "." || name == ".." {
        return Err(Error::corrupt_header(
            offset,
            format!("member name {:?} is a directory entry", name),
        ));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::corrupt_header(
            offset,
            format!("member name {:?} contains a path separator", name),
        ));
    }
    Ok(())
}
