//! Structured records built from one or two raw value sequences.
//!
//! A record has two independent representations. On the wire it is a sequence of raw scalars,
//! read with the array or pair codec. In a user interface it is a map from field name to text,
//! where every field the record needs must be present.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::array::{deserialize_array, serialize_array};
use crate::codec::Error;
use crate::config::MAX_VALUE_LEN;
use crate::pair::{deserialize_pair_array, serialize_pair_array};
use crate::scalar::{from_string, Scalar};

/// Text form of a record, keyed by field name.
pub type StringValues = BTreeMap<String, String>;

/// Encoded characteristic value with a fixed capacity.
pub type ValueBuffer = heapless::Vec<u8, MAX_VALUE_LEN>;

/// A record stored on the wire as a single array of raw values.
pub trait RawRecord: Sized {
    /// Element type of the raw array
    type Raw: Scalar;

    /// Builds the record from decoded raw values.
    ///
    /// Returns `None` if the number or content of the values does not fit the record.
    fn from_raw_values(values: &[Self::Raw]) -> Option<Self>;

    /// Raw values of the record. The inverse of [`RawRecord::from_raw_values`].
    fn to_raw_values(&self) -> Vec<Self::Raw>;

    /// Builds the record from its text form.
    ///
    /// Fails with [`Error::MissingField`] if a required key is absent and [`Error::Parse`] if a
    /// value does not parse.
    fn from_strings(values: &StringValues) -> Result<Self, Error>;

    /// Text form of the record, readable by [`RawRecord::from_strings`].
    fn string_values(&self) -> StringValues;
}

/// A record stored on the wire as two raw arrays of possibly different types.
pub trait RawPairRecord: Sized {
    /// Element type of the first array
    type Raw1: Scalar;
    /// Element type of the second array
    type Raw2: Scalar;

    /// Number of elements in each array. Fixes where the first half ends.
    const RAW_VALUE_COUNTS: (usize, usize);

    /// Builds the record from both decoded halves. `None` if they do not fit the record.
    fn from_raw_values(values: (&[Self::Raw1], &[Self::Raw2])) -> Option<Self>;

    /// Raw values of the record. The inverse of [`RawPairRecord::from_raw_values`].
    fn to_raw_values(&self) -> (Vec<Self::Raw1>, Vec<Self::Raw2>);

    /// Builds the record from its text form. See [`RawRecord::from_strings`].
    fn from_strings(values: &StringValues) -> Result<Self, Error>;

    /// Text form of the record.
    fn string_values(&self) -> StringValues;
}

/// Reads and parses a required field of a string value map.
pub fn string_field<T: Scalar>(values: &StringValues, key: &str) -> Result<T, Error> {
    let text = values.get(key).ok_or_else(|| {
        debug!("[serde] missing field {}", key);
        Error::MissingField
    })?;
    from_string(text)
}

/// Inserts the text form of `value` under `key`.
pub fn insert_field<T: Scalar>(values: &mut StringValues, key: &str, value: T) {
    values.insert(key.to_string(), value.to_string());
}

/// Decodes a raw array and builds a record from it.
///
/// Fails with [`Error::InvalidValue`] if the decoded values do not fit the record.
pub fn deserialize_record<R: RawRecord>(data: &[u8]) -> Result<R, Error> {
    let values = deserialize_array::<R::Raw>(data)?;
    R::from_raw_values(&values).ok_or_else(|| {
        warn!("[serde] {} raw values do not form a record", values.len());
        Error::InvalidValue
    })
}

/// Encodes the raw values of a record.
pub fn serialize_record<R: RawRecord>(record: &R) -> Vec<u8> {
    serialize_array(&record.to_raw_values())
}

/// Like [`serialize_record`], into a fixed capacity buffer.
pub fn serialize_record_bounded<R: RawRecord>(record: &R) -> Result<ValueBuffer, Error> {
    bounded(serialize_record(record))
}

/// Decodes both halves of a pair record, split at [`RawPairRecord::RAW_VALUE_COUNTS`].
pub fn deserialize_pair_record<R: RawPairRecord>(data: &[u8]) -> Result<R, Error> {
    let (count1, count2) = R::RAW_VALUE_COUNTS;
    let (values1, values2) = deserialize_pair_array::<R::Raw1, R::Raw2>(data, count1, count2)?;
    R::from_raw_values((values1.as_slice(), values2.as_slice())).ok_or_else(|| {
        warn!("[serde] raw value pair does not form a record");
        Error::InvalidValue
    })
}

/// Encodes both halves of a pair record, first half first.
pub fn serialize_pair_record<R: RawPairRecord>(record: &R) -> Vec<u8> {
    let (values1, values2) = record.to_raw_values();
    serialize_pair_array((values1.as_slice(), values2.as_slice()))
}

/// Like [`serialize_pair_record`], into a fixed capacity buffer.
pub fn serialize_pair_record_bounded<R: RawPairRecord>(record: &R) -> Result<ValueBuffer, Error> {
    bounded(serialize_pair_record(record))
}

fn bounded(data: Vec<u8>) -> Result<ValueBuffer, Error> {
    ValueBuffer::from_slice(&data).map_err(|_| {
        warn!("[serde] {} bytes exceed the {} byte value limit", data.len(), MAX_VALUE_LEN);
        Error::InsufficientSpace
    })
}
