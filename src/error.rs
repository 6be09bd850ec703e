use crate::png::PngChunkType;

/// An error from the `png_itxt` crate.
#[derive(Debug, thiserror::Error)]
pub enum ItxtError {
  /// The data doesn't start with the 8 byte PNG signature.
  #[error("the data does not begin with the PNG signature")]
  NotPng,

  /// A chunk declared a negative length, or an encoded chunk would be longer
  /// than a PNG length field can express.
  #[error("bad chunk length: {0}")]
  BadLength(i64),

  /// The CRC stored after a chunk doesn't match the chunk's type and data.
  #[error("crc32 mismatch in `{chunk_ty}` chunk: declared {declared:#010X}, actual {actual:#010X}")]
  Crc32Mismatch {
    /// Type of the damaged chunk.
    chunk_ty: PngChunkType,
    /// The CRC value stored in the data stream.
    declared: u32,
    /// The CRC value computed from the chunk.
    actual: u32,
  },

  /// The byte source or byte sink failed.
  ///
  /// A source that runs out in the middle of a chunk shows up here with
  /// [`ErrorKind::UnexpectedEof`](std::io::ErrorKind::UnexpectedEof).
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

/// Alias for a `Result` with an [`ItxtError`].
pub type ItxtResult<T> = Result<T, ItxtError>;
