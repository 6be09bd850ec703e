use std::io::Write;

use super::*;

/// Encodes every entry as an `iTXt` chunk, one after the other.
///
/// Entries are encoded in the order the iterator gives them.
///
/// ## Failure
/// * [`ItxtError::BadLength`] if any single entry is too big for a chunk.
#[inline]
pub fn encode_itxt_chunks<'a, I>(entries: I) -> ItxtResult<Vec<u8>>
where
  I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
  encode_itxt_chunks_limited(entries, MAX_CHUNK_LEN)
}

fn encode_itxt_chunks_limited<'a, I>(entries: I, max_len: usize) -> ItxtResult<Vec<u8>>
where
  I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
  let mut out = Vec::new();
  for (key, value) in entries {
    encode_itxt_chunk_limited(key, value, &mut out, max_len)?;
  }
  Ok(out)
}

/// Writes `start`, then the `itxt` entries as chunks, then `end`.
///
/// All chunks are encoded before anything is written, so an encoding failure
/// leaves the sink untouched. A failure from the sink itself can leave it
/// partly written, and the output should then be thrown away.
#[inline]
pub fn write_png<W: Write>(
  sink: W, start: &[u8], itxt: &HashMap<String, Vec<u8>>, end: &[u8],
) -> ItxtResult<()> {
  write_png_limited(sink, start, itxt, end, MAX_CHUNK_LEN)
}

/// As [`write_png`], with every `iTXt` chunk's data limited to `max_len`.
pub(crate) fn write_png_limited<W: Write>(
  mut sink: W, start: &[u8], itxt: &HashMap<String, Vec<u8>>, end: &[u8], max_len: usize,
) -> ItxtResult<()> {
  let chunks =
    encode_itxt_chunks_limited(itxt.iter().map(|(k, v)| (k.as_str(), v.as_slice())), max_len)?;
  log::debug!(
    "writing PNG: {} passthrough bytes, {} iTXt entries ({} bytes), {} trailer bytes",
    start.len(),
    itxt.len(),
    chunks.len(),
    end.len()
  );
  sink.write_all(start)?;
  sink.write_all(&chunks)?;
  sink.write_all(end)?;
  sink.flush()?;
  Ok(())
}
