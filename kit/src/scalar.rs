use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{Debug, Display};
use core::mem;
use core::str::FromStr;

use crate::byte_order::{host_to_little_endian, little_endian_to_host, to_little_endian_bytes};
use crate::codec::{Decode, Encode, Error, FixedSize};
use crate::cursor::ReadCursor;

/// Width of the widest scalar, in bytes.
pub const MAX_SCALAR_SIZE: usize = 16;

pub(crate) trait Sealed {}

/// A fixed width primitive with a little endian wire encoding.
///
/// Implemented for the integer and float primitives and for `bool`. The set is closed so
/// that every width is known to fit in [`MAX_SCALAR_SIZE`].
#[allow(private_bounds)]
pub trait Scalar: Sealed + FixedSize + Encode + Decode + Copy + PartialEq + Debug + Display + FromStr {
    /// Returns the value with its bytes in reverse order.
    fn swap_bytes(self) -> Self;
}

macro_rules! integer {
    ($($ty:ty),*) => {
        $(
            const _: () = assert!(mem::size_of::<$ty>() <= MAX_SCALAR_SIZE);

            impl Sealed for $ty {}

            impl FixedSize for $ty {
                const SIZE: usize = mem::size_of::<Self>();
            }

            impl Encode for $ty {
                fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
                    let dest = dest.get_mut(..Self::SIZE).ok_or(Error::InsufficientSpace)?;
                    dest.copy_from_slice(&host_to_little_endian(*self).to_ne_bytes());
                    Ok(())
                }
            }

            impl Decode for $ty {
                fn decode(src: &[u8]) -> Result<Self, Error> {
                    let src = src.get(..Self::SIZE).ok_or(Error::OutOfBounds)?;
                    let mut raw = [0; mem::size_of::<$ty>()];
                    raw.copy_from_slice(src);
                    Ok(little_endian_to_host(<$ty>::from_ne_bytes(raw)))
                }
            }

            impl Scalar for $ty {
                fn swap_bytes(self) -> Self {
                    <$ty>::swap_bytes(self)
                }
            }
        )*
    };
}

macro_rules! float {
    ($($ty:ty),*) => {
        $(
            const _: () = assert!(mem::size_of::<$ty>() <= MAX_SCALAR_SIZE);

            impl Sealed for $ty {}

            impl FixedSize for $ty {
                const SIZE: usize = mem::size_of::<Self>();
            }

            impl Encode for $ty {
                fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
                    let dest = dest.get_mut(..Self::SIZE).ok_or(Error::InsufficientSpace)?;
                    dest.copy_from_slice(&host_to_little_endian(*self).to_ne_bytes());
                    Ok(())
                }
            }

            impl Decode for $ty {
                fn decode(src: &[u8]) -> Result<Self, Error> {
                    let src = src.get(..Self::SIZE).ok_or(Error::OutOfBounds)?;
                    let mut raw = [0; mem::size_of::<$ty>()];
                    raw.copy_from_slice(src);
                    Ok(little_endian_to_host(<$ty>::from_ne_bytes(raw)))
                }
            }

            impl Scalar for $ty {
                fn swap_bytes(self) -> Self {
                    <$ty>::from_bits(self.to_bits().swap_bytes())
                }
            }
        )*
    };
}

integer!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
float!(f32, f64);

impl Sealed for bool {}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

impl Encode for bool {
    fn encode(&self, dest: &mut [u8]) -> Result<(), Error> {
        let dest = dest.first_mut().ok_or(Error::InsufficientSpace)?;
        *dest = u8::from(*self);
        Ok(())
    }
}

impl Decode for bool {
    fn decode(src: &[u8]) -> Result<Self, Error> {
        src.first().map(|b| *b != 0x00).ok_or(Error::OutOfBounds)
    }
}

impl Scalar for bool {
    fn swap_bytes(self) -> Self {
        self
    }
}

/// Reads one scalar starting at `offset`.
///
/// Fails with [`Error::OutOfBounds`] if `offset + T::SIZE` exceeds the buffer.
pub fn deserialize_scalar<T: Scalar>(data: &[u8], offset: usize) -> Result<T, Error> {
    let mut cursor = ReadCursor::new(data);
    match cursor.seek(offset).and_then(|_| cursor.read::<T>()) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(
                "[serde] scalar of {} bytes at offset {} exceeds buffer of {} bytes",
                T::SIZE,
                offset,
                data.len()
            );
            Err(e)
        }
    }
}

/// Reads a buffer holding exactly one scalar.
pub fn deserialize<T: Scalar>(data: &[u8]) -> Result<T, Error> {
    if data.len() > T::SIZE {
        warn!("[serde] expected {} bytes, got {}", T::SIZE, data.len());
        return Err(Error::MisalignedLength);
    }
    deserialize_scalar(data, 0)
}

/// Little endian bytes of `value` as an owned buffer.
pub fn serialize<T: Scalar>(value: T) -> Vec<u8> {
    to_little_endian_bytes(value).to_vec()
}

/// Parses the text form of a scalar.
///
/// Parsing is strict: surrounding whitespace and out of range values fail with
/// [`Error::Parse`].
pub fn from_string<T: Scalar>(text: &str) -> Result<T, Error> {
    text.parse::<T>().map_err(|_| {
        debug!("[serde] cannot parse {:?}", text);
        Error::Parse
    })
}

/// Text form of a scalar, readable by [`from_string`].
pub fn to_string<T: Scalar>(value: T) -> String {
    value.to_string()
}
