//! Little-endian serialization for BLE characteristic values.
//!
//! Values travel in two forms: raw little endian bytes read from and written to a peripheral,
//! and text edited by a user. This crate converts scalars, arrays of scalars, pairs of arrays
//! and structured records between their in-memory form and both representations.
//!
//! Every decode path returns a [`Result`] or [`Option`]. Peripheral data is untrusted and
//! malformed input never panics.
#![no_std]

extern crate alloc;
extern crate self as bluecap_kit;

mod fmt;

pub mod array;
pub mod byte_order;
pub mod codec;
pub mod config;
pub mod cursor;
pub mod enumeration;
pub mod pair;
pub mod record;
pub mod scalar;
pub mod text;

pub use array::{deserialize_array, deserialize_array_bounded, serialize_array, serialize_array_into};
pub use bluecap_kit_macros::{RawEnum, StringEnum};
pub use byte_order::{swap_bytes, to_little_endian_bytes, ScalarBytes};
pub use codec::Error;
pub use enumeration::{deserialize_raw_enum, serialize_raw_enum};
pub use pair::{deserialize_pair_array, deserialize_pair_array_split, serialize_pair_array};
pub use record::{
    deserialize_pair_record, deserialize_record, serialize_pair_record, serialize_pair_record_bounded,
    serialize_record, serialize_record_bounded, StringValues, ValueBuffer,
};
pub use scalar::{deserialize, deserialize_scalar, from_string, serialize, to_string, Scalar};
pub use text::{deserialize_text, serialize_text};

/// Everything needed to implement and use the codec traits.
pub mod prelude {
    pub use super::codec::{Decode, Encode, Error, FixedSize};
    pub use super::enumeration::{RawEnum, StringEnum};
    pub use super::record::{insert_field, string_field, RawPairRecord, RawRecord, StringValues};
    pub use super::scalar::Scalar;
    pub use bluecap_kit_macros::{RawEnum, StringEnum};
}
