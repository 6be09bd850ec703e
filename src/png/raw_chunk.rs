use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// The CRC that a standard, empty `IEND` chunk carries.
///
/// Only provided for reference, the trailer is never re-checked.
pub const IEND_CRC: u32 = 0xAE42_6082;

/// The largest data length a chunk can declare.
pub const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// Checks if the PNG's initial 8 bytes are correct.
#[inline]
#[must_use]
pub fn is_png_header_correct(bytes: &[u8]) -> bool {
  bytes.starts_with(&PNG_SIGNATURE)
}

/// The 4 byte type tag of a PNG chunk.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct PngChunkType(pub AsciiArray<4>);
#[allow(nonstandard_style)]
impl PngChunkType {
  /// Image Header
  pub const IHDR: Self = Self(AsciiArray(*b"IHDR"));
  /// Image Data
  pub const IDAT: Self = Self(AsciiArray(*b"IDAT"));
  /// Image End
  pub const IEND: Self = Self(AsciiArray(*b"IEND"));
  /// International Textual Data
  pub const iTXt: Self = Self(AsciiArray(*b"iTXt"));

  /// The raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    self.0.as_bytes()
  }
}
impl core::fmt::Debug for PngChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Debug::fmt(&self.0, f)
  }
}
impl core::fmt::Display for PngChunkType {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&self.0, f)
  }
}
impl From<[u8; 4]> for PngChunkType {
  #[inline]
  #[must_use]
  fn from(array: [u8; 4]) -> Self {
    Self(AsciiArray(array))
  }
}

/// The length and type that start every PNG chunk, exactly as they're stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct RawChunkHeader {
  /// Declared length of the chunk's data.
  pub length: I32BE,
  /// Chunk type tag.
  pub chunk_ty: PngChunkType,
}
impl RawChunkHeader {
  /// Makes a header for `len` bytes of data.
  ///
  /// ## Failure
  /// * If `len` is more than [`MAX_CHUNK_LEN`].
  #[inline]
  pub fn new(chunk_ty: PngChunkType, len: usize) -> ItxtResult<Self> {
    Self::with_limit(chunk_ty, len, MAX_CHUNK_LEN)
  }

  /// As [`new`](Self::new), but also rejects lengths above `max_len`.
  pub(crate) fn with_limit(chunk_ty: PngChunkType, len: usize, max_len: usize) -> ItxtResult<Self> {
    let too_long = || ItxtError::BadLength(i64::try_from(len).unwrap_or(i64::MAX));
    if len > max_len {
      return Err(too_long());
    }
    let length = i32::try_from(len).map_err(|_| too_long())?;
    Ok(Self { length: I32BE::from_i32(length), chunk_ty })
  }

  /// The declared data length, if it's a legal (non-negative) length.
  #[inline]
  pub fn data_len(&self) -> ItxtResult<usize> {
    let length = self.length.to_i32();
    usize::try_from(length).map_err(|_| ItxtError::BadLength(i64::from(length)))
  }
}

/// Computes the PNG CRC of a chunk's type and data.
#[inline]
#[must_use]
pub fn png_crc(chunk_ty: PngChunkType, data: &[u8]) -> u32 {
  let mut hasher = crc32fast::Hasher::new();
  hasher.update(chunk_ty.as_bytes());
  hasher.update(data);
  hasher.finalize()
}

/// Reads the CRC stored after a chunk's data.
#[inline]
pub(crate) fn read_declared_crc<R: std::io::Read>(src: &mut R) -> ItxtResult<U32BE> {
  let mut crc = U32BE::default();
  src.read_exact(bytemuck::bytes_of_mut(&mut crc))?;
  Ok(crc)
}

#[test]
fn test_png_crc_of_iend() {
  assert_eq!(png_crc(PngChunkType::IEND, &[]), IEND_CRC);
}

#[test]
fn test_raw_chunk_header_layout() {
  let header = RawChunkHeader::new(PngChunkType::iTXt, 13).unwrap();
  assert_eq!(bytemuck::bytes_of(&header), b"\x00\x00\x00\x0DiTXt");
  assert_eq!(header.data_len().unwrap(), 13);

  let negative: RawChunkHeader = bytemuck::cast(*b"\xFF\xFF\xFF\xFEIDAT");
  assert!(matches!(negative.data_len(), Err(ItxtError::BadLength(-2))));
}

#[test]
fn test_raw_chunk_header_max_len() {
  let header = RawChunkHeader::new(PngChunkType::iTXt, MAX_CHUNK_LEN).unwrap();
  assert_eq!(header.length.to_i32(), i32::MAX);
  assert!(matches!(
    RawChunkHeader::new(PngChunkType::iTXt, MAX_CHUNK_LEN + 1),
    Err(ItxtError::BadLength(n)) if n == i64::from(i32::MAX) + 1
  ));
  // way too long still reports a positive length
  assert!(matches!(
    RawChunkHeader::new(PngChunkType::iTXt, usize::MAX),
    Err(ItxtError::BadLength(n)) if n > 0
  ));
  assert!(matches!(
    RawChunkHeader::with_limit(PngChunkType::iTXt, 11, 10),
    Err(ItxtError::BadLength(11))
  ));
  assert!(RawChunkHeader::with_limit(PngChunkType::iTXt, 10, 10).is_ok());
}
