//! ar archive format constants, definitions, and low-level parsing.
//!
//! The ar container is a flat sequence: an 8-byte global magic followed by
//! member records. Each record is a fixed 60-byte ASCII header and `size`
//! content bytes, padded to an even offset. There is no compression and no
//! checksumming; the format's only subtlety is member naming, which differs
//! between the GNU and BSD conventions (see [`parser`]).

pub mod header;
pub mod parser;

pub use header::{END_MARKER, GLOBAL_MAGIC, HEADER_LEN};
