#![forbid(unsafe_code)]

//! Holds all the tools for editing PNG `iTXt` metadata.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png-3/
//!
//! The general format of a PNG is an 8 byte signature followed by "chunks".
//! Each chunk is laid out as:
//!
//! * **Length** - 4 bytes, big-endian, the number of data bytes. The field is
//!   signed, and negative values are an error.
//! * **Type** - 4 ascii bytes, such as `IHDR` or `iTXt`.
//! * **Data** - exactly `length` bytes.
//! * **CRC** - 4 bytes, big-endian, CRC-32 of the type and data bytes.
//!
//! The final chunk is `IEND`, which marks the logical end of the datastream.
//!
//! ## Editing Metadata
//!
//! An [`ItxtStore`] is built by scanning a PNG from any [`Read`](std::io::Read) source. The
//! scan sorts every chunk into one of three places:
//!
//! * `iTXt` chunks are decoded into a key/value table. Their data is laid out
//!   as `key | 00 00 00 00 00 | value`. The five zero bytes are where the
//!   compression flag, compression method, language tag, and translated
//!   keyword would go. This crate always writes them as zero or empty, and
//!   doesn't interpret them when reading. A data field that doesn't split into
//!   exactly two parts around that separator is dropped.
//! * The `IEND` chunk and *all* bytes after it are kept as an opaque trailer.
//! * Every other chunk is kept as the exact bytes that were read, after its CRC
//!   is checked.
//!
//! Writing the store emits the kept chunks, then one newly encoded `iTXt` chunk
//! per table entry, then the trailer. Note that this means the `iTXt` chunks
//! always end up directly before `IEND`, in no particular order.
//!
//! ## Parsing Errors
//!
//! Unlike a decoder that wants pixels, a metadata editor has to write the data
//! back out, so broken framing or a bad CRC on a kept chunk is an error. The
//! CRC of an `iTXt` chunk is *not* checked when reading, since the chunk gets
//! re-encoded with a fresh CRC anyway.

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::{AsciiArray, I32BE, U32BE, ItxtError, ItxtResult};

mod raw_chunk;
pub use raw_chunk::*;

mod itxt;
pub use itxt::*;

mod reader;
pub use reader::*;

mod writer;
pub use writer::*;

mod store;
pub use store::*;
