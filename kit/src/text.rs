use alloc::string::String;
use alloc::vec::Vec;

use crate::codec::Error;

/// UTF-8 bytes of `text`. BLE strings carry no terminator or length prefix.
pub fn serialize_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes a UTF-8 characteristic value.
///
/// Fails with [`Error::InvalidValue`] on invalid UTF-8.
pub fn deserialize_text(data: &[u8]) -> Result<String, Error> {
    core::str::from_utf8(data).map(String::from).map_err(|e| {
        warn!("[serde] invalid utf-8 at byte {}", e.valid_up_to());
        Error::InvalidValue
    })
}
