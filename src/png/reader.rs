use std::io::{self, Read};

use log::{debug, trace, warn};

use super::*;

/// Everything a scan pulls out of a PNG datastream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PngScan {
  /// The signature plus every chunk that isn't `iTXt` or `IEND`, as read.
  pub start: Vec<u8>,
  /// The decoded `iTXt` entries.
  pub itxt: HashMap<String, Vec<u8>>,
  /// The `IEND` chunk and every byte after it, as read. Empty if the stream
  /// ended without an `IEND` chunk.
  pub end: Vec<u8>,
}

/// Scans a full PNG datastream.
///
/// The source is read until the `IEND` chunk, then to its end. Running out of
/// data exactly between two chunks is accepted as the end of the PNG.
///
/// ## Failure
/// * [`ItxtError::NotPng`] if the signature is wrong.
/// * [`ItxtError::BadLength`] if a chunk declares a negative length. This is
///   reported right after the length field, before the type or data is read.
/// * [`ItxtError::Crc32Mismatch`] if a chunk other than `iTXt` or `IEND` has
///   the wrong CRC.
/// * [`ItxtError::Io`] if reading fails, including running out of data
///   partway through a chunk.
pub fn scan_png<R: Read>(mut src: R) -> ItxtResult<PngScan> {
  let mut signature = [0_u8; 8];
  src.read_exact(&mut signature)?;
  if !is_png_header_correct(&signature) {
    return Err(ItxtError::NotPng);
  }
  let mut scan = PngScan { start: signature.to_vec(), ..PngScan::default() };

  let mut chunk_count = 0_usize;
  loop {
    let Some(header) = read_chunk_header(&mut src)? else {
      warn!("PNG data ended without an IEND chunk after {chunk_count} chunks");
      break;
    };
    let len = header.data_len()?;
    let data = read_chunk_data(&mut src, len)?;
    chunk_count += 1;
    trace!("chunk {}: {} ({len} bytes)", chunk_count, header.chunk_ty);

    match header.chunk_ty {
      PngChunkType::iTXt => {
        match split_itxt_body(&data) {
          Some((key, value)) => {
            scan.itxt.insert(itxt_key_from_bytes(key), value.to_vec());
          }
          None => debug!("dropping malformed iTXt chunk ({len} bytes)"),
        }
        // the CRC is consumed but not checked, the chunk is re-encoded on write
        read_declared_crc(&mut src)?;
      }
      PngChunkType::IEND => {
        scan.end.extend_from_slice(bytemuck::bytes_of(&header));
        scan.end.extend_from_slice(&data);
        src.read_to_end(&mut scan.end)?;
        break;
      }
      chunk_ty => {
        let declared = read_declared_crc(&mut src)?.to_u32();
        let actual = png_crc(chunk_ty, &data);
        if declared != actual {
          return Err(ItxtError::Crc32Mismatch { chunk_ty, declared, actual });
        }
        scan.start.extend_from_slice(bytemuck::bytes_of(&header));
        scan.start.extend_from_slice(&data);
        scan.start.extend_from_slice(&declared.to_be_bytes());
      }
    }
  }

  debug!(
    "scanned {chunk_count} chunks: {} passthrough bytes, {} iTXt entries, {} trailer bytes",
    scan.start.len(),
    scan.itxt.len(),
    scan.end.len()
  );
  Ok(scan)
}

/// Reads a chunk header, or `None` if the source is already at its end.
///
/// A negative length is reported as soon as the length field is read.
fn read_chunk_header<R: Read>(src: &mut R) -> ItxtResult<Option<RawChunkHeader>> {
  let mut header = RawChunkHeader::default();
  if !read_exact_or_eof(src, bytemuck::bytes_of_mut(&mut header.length))? {
    return Ok(None);
  }
  header.data_len()?;
  src.read_exact(bytemuck::bytes_of_mut(&mut header.chunk_ty))?;
  Ok(Some(header))
}

/// Fills `buf`, or gives `false` if the source ended before its first byte.
fn read_exact_or_eof<R: Read>(src: &mut R, buf: &mut [u8]) -> io::Result<bool> {
  let mut filled = 0;
  while filled < buf.len() {
    match src.read(&mut buf[filled..]) {
      Ok(0) if filled == 0 => return Ok(false),
      Ok(0) => return Err(io::ErrorKind::UnexpectedEof.into()),
      Ok(n) => filled += n,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
      Err(e) => return Err(e),
    }
  }
  Ok(true)
}

/// Reads exactly `len` bytes of chunk data.
///
/// The buffer grows as data actually arrives, so a bogus huge length on a short
/// input fails without allocating the declared size up front.
fn read_chunk_data<R: Read>(src: &mut R, len: usize) -> io::Result<Vec<u8>> {
  let mut data = Vec::new();
  src.take(len as u64).read_to_end(&mut data)?;
  if data.len() != len {
    return Err(io::ErrorKind::UnexpectedEof.into());
  }
  Ok(data)
}
