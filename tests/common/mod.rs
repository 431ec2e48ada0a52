//! Shared test utilities for integration tests.
//!
//! This module provides common helper functions used across multiple test
//! files. The crate only reads archives, so the builders here write ar
//! bytes by hand, mimicking what `ar crus` produces in the GNU and BSD
//! conventions.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test
//! file compiles as a separate crate and may only use a subset of these
//! helpers.

#![allow(dead_code)]

/// The ar global header.
pub const MAGIC: &[u8] = b"!<arch>\n";

/// Appends one raw member record with the given (already encoded) name
/// field, default metadata, and proper end marker and padding.
pub fn push_raw_member(out: &mut Vec<u8>, raw_name: &str, data: &[u8]) {
    push_raw_member_with_fields(out, raw_name, "0", "0", "0", "644", data);
}

/// Appends one raw member record with full control over the header fields.
pub fn push_raw_member_with_fields(
    out: &mut Vec<u8>,
    raw_name: &str,
    mtime: &str,
    uid: &str,
    gid: &str,
    mode: &str,
    data: &[u8],
) {
    out.extend_from_slice(format!("{:<16}", raw_name).as_bytes());
    out.extend_from_slice(format!("{:<12}", mtime).as_bytes());
    out.extend_from_slice(format!("{:<6}", uid).as_bytes());
    out.extend_from_slice(format!("{:<6}", gid).as_bytes());
    out.extend_from_slice(format!("{:<8}", mode).as_bytes());
    out.extend_from_slice(format!("{:<10}", data.len()).as_bytes());
    out.extend_from_slice(b"`\n");
    out.extend_from_slice(data);
    if data.len() % 2 == 1 {
        out.push(b'\n');
    }
}

/// Builds a GNU-style archive from (name, content) pairs.
///
/// Names up to 15 bytes are stored inline with the trailing `/`
/// terminator; longer names go through an extended-name table member
/// (`//`), exactly as GNU ar lays them out.
pub fn gnu_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut table = Vec::new();
    let mut encoded_names = Vec::with_capacity(entries.len());
    for (name, _) in entries {
        if name.len() > 15 {
            let offset = table.len();
            table.extend_from_slice(name.as_bytes());
            table.extend_from_slice(b"/\n");
            encoded_names.push(format!("/{}", offset));
        } else {
            encoded_names.push(format!("{}/", name));
        }
    }

    let mut out = MAGIC.to_vec();
    if !table.is_empty() {
        push_raw_member(&mut out, "//", &table);
    }
    for ((_, data), encoded) in entries.iter().zip(&encoded_names) {
        push_raw_member(&mut out, encoded, data);
    }
    out
}

/// Builds a GNU-style archive with a (fake) symbol table member `/` in
/// front, as `ar s` would produce.
pub fn gnu_archive_with_symbol_table(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = MAGIC.to_vec();
    // Minimal symbol table: zero entries
    push_raw_member(&mut out, "/", &[0, 0, 0, 0]);
    let rest = gnu_archive(entries);
    out.extend_from_slice(&rest[MAGIC.len()..]);
    out
}

/// Builds a BSD-style archive from (name, content) pairs.
///
/// Names that fit the 16-byte field without spaces are stored inline;
/// everything else is spelled `#1/<len>` with the name embedded ahead of
/// the content.
pub fn bsd_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = MAGIC.to_vec();
    for (name, data) in entries {
        if name.len() <= 16 && !name.contains(' ') {
            push_raw_member(&mut out, name, data);
        } else {
            let mut embedded = name.as_bytes().to_vec();
            embedded.extend_from_slice(data);
            push_raw_member(&mut out, &format!("#1/{}", name.len()), &embedded);
        }
    }
    out
}

/// Unwraps an expected error, panicking with a useful message on Ok.
pub fn expect_err<T>(result: arex::Result<T>) -> arex::Error {
    match result {
        Ok(_) => panic!("expected an error, operation succeeded"),
        Err(e) => e,
    }
}
