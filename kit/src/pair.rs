use alloc::vec::Vec;

use crate::array::{deserialize_array, serialize_array};
use crate::codec::Error;
use crate::scalar::Scalar;

/// Encodes all of `values.0` followed by all of `values.1`. The halves are not interleaved.
pub fn serialize_pair_array<A: Scalar, B: Scalar>(values: (&[A], &[B])) -> Vec<u8> {
    let mut data = serialize_array(values.0);
    data.extend_from_slice(&serialize_array(values.1));
    data
}

fn half_len<T: Scalar>(count: usize) -> Result<usize, Error> {
    count.checked_mul(T::SIZE).ok_or(Error::MisalignedLength)
}

/// Decodes `count1` values of `A` followed by `count2` values of `B`.
///
/// The buffer must be exactly `count1 * A::SIZE + count2 * B::SIZE` bytes long, anything
/// else fails with [`Error::MisalignedLength`].
pub fn deserialize_pair_array<A: Scalar, B: Scalar>(
    data: &[u8],
    count1: usize,
    count2: usize,
) -> Result<(Vec<A>, Vec<B>), Error> {
    let len1 = half_len::<A>(count1)?;
    let len2 = half_len::<B>(count2)?;
    let expected = len1.checked_add(len2).ok_or(Error::MisalignedLength)?;
    if data.len() != expected {
        warn!(
            "[serde] pair of {}+{} values needs {} bytes, got {}",
            count1,
            count2,
            expected,
            data.len()
        );
        return Err(Error::MisalignedLength);
    }
    let (first, second) = data.split_at(len1);
    Ok((deserialize_array(first)?, deserialize_array(second)?))
}

/// Decodes `count1` values of `A` and takes the rest of the buffer as values of `B`.
///
/// Fails with [`Error::MisalignedLength`] if the buffer is shorter than the first half or the
/// remainder is not a multiple of `B::SIZE`.
pub fn deserialize_pair_array_split<A: Scalar, B: Scalar>(
    data: &[u8],
    count1: usize,
) -> Result<(Vec<A>, Vec<B>), Error> {
    let len1 = half_len::<A>(count1)?;
    if data.len() < len1 {
        warn!("[serde] first half needs {} bytes, got {}", len1, data.len());
        return Err(Error::MisalignedLength);
    }
    let (first, second) = data.split_at(len1);
    Ok((deserialize_array(first)?, deserialize_array(second)?))
}
