use std::{
  io::{Read, Write},
  sync::{Mutex, MutexGuard, PoisonError},
};

use super::*;

/// A PNG whose `iTXt` metadata can be edited.
///
/// Construct one with [`from_reader`](Self::from_reader). The bytes of every
/// other chunk are fixed at that point, while the `iTXt` entries can be read
/// and changed freely through `&self`. The entry table is behind a mutex, and
/// every method (including [`write_to`](Self::write_to)) holds the lock for
/// its whole duration, so a write always sees one consistent set of entries.
///
/// Keys are strings. A key in the PNG that isn't valid UTF-8 has the bad bytes
/// replaced with `U+FFFD`, so writing the store back out changes that key.
///
/// Holding the lock during `write_to` means a slow sink blocks all other
/// access to the store until the write is done.
pub struct ItxtStore {
  start: Vec<u8>,
  end: Vec<u8>,
  itxt: Mutex<HashMap<String, Vec<u8>>>,
}

impl ItxtStore {
  /// Scans a PNG from the source. See [`scan_png`] for the failure cases.
  ///
  /// The source is only used during this call. Pass `&mut reader` to keep
  /// using the reader afterwards.
  #[inline]
  pub fn from_reader<R: Read>(src: R) -> ItxtResult<Self> {
    Ok(Self::from(scan_png(src)?))
  }

  /// Scans a PNG that's already in memory.
  #[inline]
  pub fn from_png_bytes(bytes: &[u8]) -> ItxtResult<Self> {
    Self::from_reader(bytes)
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
    // a panic while holding the lock can't leave the map half-updated
    self.itxt.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Sets the value of a key, replacing any old value.
  #[inline]
  pub fn set(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
    self.lock().insert(key.into(), value.into());
  }

  /// Gets a copy of the value for a key.
  #[inline]
  #[must_use]
  pub fn get(&self, key: &str) -> Option<Vec<u8>> {
    self.lock().get(key).cloned()
  }

  /// Removes a key. Removing a key that isn't there does nothing.
  #[inline]
  pub fn delete(&self, key: &str) {
    self.lock().remove(key);
  }

  /// Copies out all the entries.
  ///
  /// The copy is independent, changing it doesn't affect the store.
  #[inline]
  #[must_use]
  pub fn get_all(&self) -> HashMap<String, Vec<u8>> {
    self.lock().clone()
  }

  /// If the key has a value.
  #[inline]
  #[must_use]
  pub fn contains_key(&self, key: &str) -> bool {
    self.lock().contains_key(key)
  }

  /// The number of entries.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.lock().len()
  }

  /// If there are no entries.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// The signature and all passthrough chunks, exactly as read.
  #[inline]
  #[must_use]
  pub fn start_bytes(&self) -> &[u8] {
    &self.start
  }

  /// The `IEND` chunk and everything after it, exactly as read.
  #[inline]
  #[must_use]
  pub fn end_bytes(&self) -> &[u8] {
    &self.end
  }

  /// Writes the PNG with the current entries to the sink.
  ///
  /// The `iTXt` chunks are placed just before `IEND`, in no particular order.
  ///
  /// ## Failure
  /// * [`ItxtError::BadLength`] if an entry is too big to be a chunk. Nothing
  ///   is written in this case.
  /// * [`ItxtError::Io`] if the sink fails. The sink may be partly written.
  pub fn write_to<W: Write>(&self, sink: W) -> ItxtResult<()> {
    let itxt = self.lock();
    write_png(sink, &self.start, &itxt, &self.end)
  }

  /// Writes the PNG with the current entries into a new `Vec`.
  #[inline]
  pub fn to_png_bytes(&self) -> ItxtResult<Vec<u8>> {
    let mut out = Vec::new();
    self.write_to(&mut out)?;
    Ok(out)
  }
}

impl From<PngScan> for ItxtStore {
  #[inline]
  fn from(PngScan { start, itxt, end }: PngScan) -> Self {
    Self { start, end, itxt: Mutex::new(itxt) }
  }
}

impl core::fmt::Debug for ItxtStore {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let itxt = self.lock();
    let mut keys: Vec<&str> = itxt.keys().map(String::as_str).collect();
    keys.sort_unstable();
    f.debug_struct("ItxtStore")
      .field("start", &self.start.len())
      .field("itxt", &keys)
      .field("end", &self.end.len())
      .finish()
  }
}
