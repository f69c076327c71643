//! Host to wire byte order conversion.
//!
//! Everything on the wire is little endian. The host order is fixed at compile time and a
//! swap is applied uniformly when it differs.

use crate::codec::Encode;
use crate::scalar::{Scalar, MAX_SCALAR_SIZE};

/// Little endian encoding of a single scalar, exactly `SIZE` bytes long.
pub type ScalarBytes = heapless::Vec<u8, MAX_SCALAR_SIZE>;

/// True when the host stores the least significant byte first.
pub const HOST_IS_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// Reverses the byte order of a scalar.
pub fn swap_bytes<T: Scalar>(value: T) -> T {
    value.swap_bytes()
}

/// Converts a host order value into one whose memory layout is little endian.
pub fn host_to_little_endian<T: Scalar>(value: T) -> T {
    if HOST_IS_LITTLE_ENDIAN {
        value
    } else {
        value.swap_bytes()
    }
}

/// Converts a value read with little endian layout into host order.
pub fn little_endian_to_host<T: Scalar>(value: T) -> T {
    if HOST_IS_LITTLE_ENDIAN {
        value
    } else {
        value.swap_bytes()
    }
}

/// Returns the little endian bytes of `value`, least significant byte first.
pub fn to_little_endian_bytes<T: Scalar>(value: T) -> ScalarBytes {
    let mut bytes = ScalarBytes::new();
    // Scalar widths are checked against MAX_SCALAR_SIZE at compile time, neither call can fail.
    let _ = bytes.resize(T::SIZE, 0);
    let _ = value.encode(&mut bytes);
    bytes
}
