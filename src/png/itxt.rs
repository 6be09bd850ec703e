use super::*;

/// Sits between the key and the value in the data of an `iTXt` chunk.
///
/// In a full `iTXt` chunk these are the keyword's null terminator, the
/// compression flag, the compression method, and the null terminators of an
/// empty language tag and an empty translated keyword.
pub const ITXT_SEPARATOR: [u8; 5] = [0; 5];

/// Splits `iTXt` chunk data into the key and value bytes.
///
/// The data is cut at every (non-overlapping, leftmost first) occurrence of
/// [`ITXT_SEPARATOR`]. Only data that gives exactly two pieces is a usable
/// entry, anything else gives `None`.
#[inline]
#[must_use]
pub fn split_itxt_body(data: &[u8]) -> Option<(&[u8], &[u8])> {
  let at = find_separator(data)?;
  let (key, rest) = (&data[..at], &data[at + ITXT_SEPARATOR.len()..]);
  match find_separator(rest) {
    Some(_) => None,
    None => Some((key, rest)),
  }
}

fn find_separator(haystack: &[u8]) -> Option<usize> {
  haystack.windows(ITXT_SEPARATOR.len()).position(|w| w == ITXT_SEPARATOR)
}

/// Converts raw key bytes into a table key.
///
/// Invalid UTF-8 is replaced rather than rejected, and surrounding whitespace
/// is trimmed.
#[inline]
#[must_use]
pub fn itxt_key_from_bytes(key: &[u8]) -> String {
  String::from_utf8_lossy(key).trim().to_owned()
}

/// Appends one complete `iTXt` chunk (header, data, and CRC) to `out`.
///
/// ## Failure
/// * If the chunk data would be longer than [`MAX_CHUNK_LEN`] bytes. Nothing
///   is appended in this case.
#[inline]
pub fn encode_itxt_chunk(key: &str, value: &[u8], out: &mut Vec<u8>) -> ItxtResult<()> {
  encode_itxt_chunk_limited(key, value, out, MAX_CHUNK_LEN)
}

pub(crate) fn encode_itxt_chunk_limited(
  key: &str, value: &[u8], out: &mut Vec<u8>, max_len: usize,
) -> ItxtResult<()> {
  let header = RawChunkHeader::with_limit(
    PngChunkType::iTXt,
    key.len().saturating_add(ITXT_SEPARATOR.len()).saturating_add(value.len()),
    max_len,
  )?;
  out.extend_from_slice(&header.length.to_i32().to_be_bytes());
  let crc_start = out.len();
  out.extend_from_slice(header.chunk_ty.as_bytes());
  out.extend_from_slice(key.as_bytes());
  out.extend_from_slice(&ITXT_SEPARATOR);
  out.extend_from_slice(value);
  let crc = crc32fast::hash(&out[crc_start..]);
  out.extend_from_slice(&crc.to_be_bytes());
  Ok(())
}
