//! Opinionated BLE value codec
//!
//! Assumes little endian for all types on the wire, whatever the host byte order.

use core::fmt;

/// A type whose encoding always occupies the same number of bytes.
pub trait FixedSize: Sized {
    /// Encoded size in bytes
    const SIZE: usize;
}

/// Writes a value as its little endian wire bytes.
pub trait Encode: FixedSize {
    /// Writes exactly `SIZE` bytes to the start of `dest`.
    ///
    /// Fails with [`Error::InsufficientSpace`] if `dest` is shorter than `SIZE`.
    fn encode(&self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Reads a value from its little endian wire bytes.
pub trait Decode: FixedSize {
    /// Reads the first `SIZE` bytes of `src`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `src` is shorter than `SIZE`.
    fn decode(src: &[u8]) -> Result<Self, Error>;
}

/// Error returned by every fallible codec operation.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A read extends past the end of the buffer
    OutOfBounds,
    /// Buffer length is not a multiple of the element size, or does not match the expected layout
    MisalignedLength,
    /// Text could not be parsed into the target type
    Parse,
    /// A required key is absent from a string value map
    MissingField,
    /// The output buffer is too small
    InsufficientSpace,
    /// The bytes were read but do not form a valid value
    InvalidValue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::OutOfBounds => "read past end of buffer",
            Error::MisalignedLength => "buffer length does not match element size",
            Error::Parse => "malformed text value",
            Error::MissingField => "required field missing",
            Error::InsufficientSpace => "output buffer too small",
            Error::InvalidValue => "invalid value",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}
