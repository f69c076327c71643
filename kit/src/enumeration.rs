//! Enum-like values with a text label or a single raw scalar.

use alloc::vec::Vec;

use crate::byte_order::to_little_endian_bytes;
use crate::codec::Error;
use crate::scalar::{deserialize, Scalar};

/// A closed set of variants, each with a canonical text label.
///
/// Usually derived with `#[derive(StringEnum)]`.
pub trait StringEnum: Sized + Copy + 'static {
    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// Canonical label of this variant.
    fn string_value(&self) -> &'static str;

    /// Reverse lookup by label. `None` if no variant carries it.
    fn from_string(text: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.string_value() == text)
    }

    /// Labels of every variant, in declaration order.
    fn string_values() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.string_value()).collect()
    }
}

/// An enum-like value encoded on the wire as one scalar.
///
/// Usually derived with `#[derive(RawEnum)]` on a fieldless `#[repr(int)]` enum.
pub trait RawEnum: Sized + Copy {
    /// Wire representation
    type Raw: Scalar;

    /// Variant for a raw value. `None` for values no variant maps to.
    fn from_raw(raw: Self::Raw) -> Option<Self>;

    /// Raw value of this variant.
    fn raw_value(&self) -> Self::Raw;
}

/// Decodes a buffer holding exactly one raw value.
///
/// Fails with [`Error::InvalidValue`] if the raw value maps to no variant.
pub fn deserialize_raw_enum<T: RawEnum>(data: &[u8]) -> Result<T, Error> {
    let raw = deserialize::<T::Raw>(data)?;
    T::from_raw(raw).ok_or_else(|| {
        warn!("[serde] raw value of {} bytes maps to no variant", data.len());
        Error::InvalidValue
    })
}

/// Little endian bytes of the variant's raw value.
pub fn serialize_raw_enum<T: RawEnum>(value: &T) -> Vec<u8> {
    to_little_endian_bytes(value.raw_value()).to_vec()
}
