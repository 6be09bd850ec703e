//! Big-endian integers with an alignment of 1, for casting from raw bytes.

use bytemuck::{Pod, Zeroable};

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  #[must_use]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  #[must_use]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}

/// An `i32` stored as big-endian bytes.
///
/// PNG chunk lengths are declared this way: the field is 4 bytes, but only
/// values up to `i32::MAX` are legal.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct I32BE([u8; 4]);
impl I32BE {
  /// Convert this value to a native `i32`
  #[inline]
  #[must_use]
  pub const fn to_i32(self) -> i32 {
    i32::from_be_bytes(self.0)
  }
  /// Make a value from a native `i32`
  #[inline]
  #[must_use]
  pub const fn from_i32(i: i32) -> Self {
    Self(i.to_be_bytes())
  }
}
impl core::fmt::Debug for I32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("I32BE").field(&self.to_i32()).finish()
  }
}
impl From<i32> for I32BE {
  #[inline]
  #[must_use]
  fn from(value: i32) -> Self {
    Self::from_i32(value)
  }
}
impl From<I32BE> for i32 {
  #[inline]
  #[must_use]
  fn from(value: I32BE) -> Self {
    value.to_i32()
  }
}

#[test]
fn test_int_endian_byte_order() {
  assert_eq!(bytemuck::bytes_of(&U32BE::from_u32(0xAE42_6082)), &[0xAE, 0x42, 0x60, 0x82]);
  assert_eq!(bytemuck::bytes_of(&I32BE::from_i32(13)), &[0, 0, 0, 13]);
  assert_eq!(bytemuck::cast::<[u8; 4], I32BE>([0xFF; 4]).to_i32(), -1);
}
