use alloc::vec::Vec;

use crate::byte_order::to_little_endian_bytes;
use crate::codec::Error;
use crate::cursor::{ReadCursor, WriteCursor};
use crate::scalar::Scalar;

fn check_alignment<T: Scalar>(data: &[u8]) -> Result<usize, Error> {
    if data.len() % T::SIZE != 0 {
        warn!(
            "[serde] {} bytes is not a multiple of the {} byte element size",
            data.len(),
            T::SIZE
        );
        return Err(Error::MisalignedLength);
    }
    Ok(data.len() / T::SIZE)
}

/// Splits `data` into consecutive `T::SIZE` chunks and decodes each.
///
/// Fails with [`Error::MisalignedLength`] if the length is not a multiple of `T::SIZE`.
pub fn deserialize_array<T: Scalar>(data: &[u8]) -> Result<Vec<T>, Error> {
    let count = check_alignment::<T>(data)?;
    let mut cursor = ReadCursor::new(data);
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(cursor.read::<T>()?);
    }
    trace!("[serde] decoded {} values", count);
    Ok(values)
}

/// Like [`deserialize_array`], into a fixed capacity vector.
///
/// Fails with [`Error::InsufficientSpace`] if the buffer holds more than `N` values.
pub fn deserialize_array_bounded<T: Scalar, const N: usize>(data: &[u8]) -> Result<heapless::Vec<T, N>, Error> {
    let count = check_alignment::<T>(data)?;
    if count > N {
        warn!("[serde] {} values do not fit in {}", count, N);
        return Err(Error::InsufficientSpace);
    }
    let mut cursor = ReadCursor::new(data);
    let mut values = heapless::Vec::new();
    while cursor.available() > 0 {
        values.push(cursor.read::<T>()?).map_err(|_| Error::InsufficientSpace)?;
    }
    Ok(values)
}

/// Concatenates the little endian encoding of every value.
///
/// The result is always `values.len() * T::SIZE` bytes long.
pub fn serialize_array<T: Scalar>(values: &[T]) -> Vec<u8> {
    let mut data = Vec::with_capacity(values.len() * T::SIZE);
    for value in values {
        data.extend_from_slice(&to_little_endian_bytes(*value));
    }
    data
}

/// Encodes `values` into `dest`, returning the number of bytes written.
pub fn serialize_array_into<T: Scalar>(values: &[T], dest: &mut [u8]) -> Result<usize, Error> {
    let mut cursor = WriteCursor::new(dest);
    cursor.write_all(values)?;
    Ok(cursor.len())
}
