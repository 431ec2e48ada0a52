//! # arex
//!
//! A pure-Rust reader and collision-aware extractor for Unix `ar` static
//! archives.
//!
//! Static archives routinely bundle several object files that share a
//! filename — two translation units both compiled to `foo.o`, contributed
//! by different libraries. A naive extractor writing everything into one
//! directory silently overwrites one with the other and corrupts the link
//! that consumes the output. This crate parses the archive's member table,
//! detects those collisions, and guarantees every member — duplicates
//! included — lands at a distinct path on disk, with its original filename
//! preserved exactly.
//!
//! ## Quick Start
//!
//! ### Extracting an Archive
//!
//! ```rust,no_run
//! use arex::{Archive, ExtractOptions, Result};
//!
//! fn main() -> Result<()> {
//!     // Open from a file path
//!     let archive = Archive::open_path("libdeps.a")?;
//!
//!     // List members
//!     for member in archive.members() {
//!         println!("{}: {} bytes", member.name, member.size);
//!     }
//!
//!     // Extract all members to a directory. Members sharing a name are
//!     // placed in distinct subdirectories; nothing is ever overwritten.
//!     let result = archive.extract("./objs", &ExtractOptions::default())?;
//!     for extracted in &result.extracted {
//!         println!("{} -> {}", extracted.name, extracted.path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Inspecting the Plan Without Writing
//!
//! ```rust,no_run
//! use arex::{Archive, Result};
//!
//! fn main() -> Result<()> {
//!     let archive = Archive::open_path("libdeps.a")?;
//!     for assignment in archive.plan().assignments() {
//!         println!("{} -> {}", assignment.name, assignment.relative_path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Collision Policy
//!
//! Collisions are resolved by *directory* disambiguation, never by
//! renaming: downstream consumers (linkers, build steps) expect extracted
//! filenames to match the original member names. The first occurrence of
//! each name is written directly under the destination root; every later
//! occurrence gets a fresh numbered subdirectory. The exact directory
//! labels are an implementation detail — consumers should use the paths
//! recorded in [`ExtractResult`] rather than re-deriving the layout.
//!
//! ## Format Coverage
//!
//! The common BSD/GNU `ar` layout is supported: GNU trailing-`/` names,
//! the GNU extended-name table (`//` and `/<offset>` references), BSD
//! `#1/<len>` embedded names, and even-byte member padding. Symbol-table
//! members (`/`, `/SYM64/`, `__.SYMDEF`, `__.SYMDEF SORTED`) are
//! recognized and skipped; their contents are never interpreted. Writing
//! archives is out of scope.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | No | Command-line interface tool |
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Parse errors ([`Error::BadMagic`],
//! [`Error::Truncated`], [`Error::CorruptHeader`]) are fatal and carry the
//! byte offset where parsing failed; write errors are tagged with the
//! member name and intended destination. See the [`error`] module.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod format;
pub mod member;
pub mod read;

pub use error::{Error, Result};
pub use member::ArchiveMember;

// Re-export reading API at crate root for convenience
pub use read::{
    Archive, ExtractOptions, ExtractResult, ExtractedMember, ExtractionPlan, FailurePolicy,
    MemberAssignment,
};
