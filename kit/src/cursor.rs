//! Module for cursors over a byte slice.
//!

use crate::codec::{Decode, Encode, Error, FixedSize};

/// Not a byte writer. It is just a cursor to track where a byte slice is being written.
pub struct WriteCursor<'d> {
    pos: usize,
    data: &'d mut [u8],
}

impl<'d> WriteCursor<'d> {
    /// Creates a new write cursor at the beginning of the data.
    pub fn new(data: &'d mut [u8]) -> Self {
        Self { pos: 0, data }
    }

    /// Rewinds the cursor back to the beginning of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Append byte slice
    pub fn append(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.available() < data.len() {
            Err(Error::InsufficientSpace)
        } else {
            self.data[self.pos..self.pos + data.len()].copy_from_slice(data);
            self.pos += data.len();
            Ok(())
        }
    }

    /// Write fixed sized type
    pub fn write<E: Encode>(&mut self, data: &E) -> Result<(), Error> {
        if self.available() < E::SIZE {
            Err(Error::InsufficientSpace)
        } else {
            data.encode(&mut self.data[self.pos..self.pos + E::SIZE])?;
            self.pos += E::SIZE;
            Ok(())
        }
    }

    /// Write every element of a slice, back to back.
    pub fn write_all<E: Encode>(&mut self, values: &[E]) -> Result<(), Error> {
        for value in values {
            self.write(value)?;
        }
        Ok(())
    }

    /// Returns amount of bytes that remain available.
    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns the current length of the data written.
    pub fn len(&self) -> usize {
        self.pos
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Returns the byte slice that was written by this cursor.
    pub fn finish(self) -> &'d mut [u8] {
        &mut self.data[..self.pos]
    }
}

/// Tracks the read position in a byte slice.
#[derive(Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub struct ReadCursor<'d> {
    pos: usize,
    data: &'d [u8],
}

impl<'d> ReadCursor<'d> {
    pub fn new(data: &'d [u8]) -> Self {
        Self { pos: 0, data }
    }

    /// Decode the next fixed sized value and advance past it.
    pub fn read<T: Decode>(&mut self) -> Result<T, Error> {
        let val = T::decode(&self.data[self.pos..])?;
        self.pos += T::SIZE;
        Ok(val)
    }

    /// Move the cursor to an absolute offset. Fails if it lies past the end.
    pub fn seek(&mut self, pos: usize) -> Result<(), Error> {
        if pos > self.data.len() {
            Err(Error::OutOfBounds)
        } else {
            self.pos = pos;
            Ok(())
        }
    }

    pub fn slice(&mut self, nbytes: usize) -> Result<&'d [u8], Error> {
        if self.available() < nbytes {
            Err(Error::OutOfBounds)
        } else {
            let src = &self.data[self.pos..self.pos + nbytes];
            self.pos += nbytes;
            Ok(src)
        }
    }

    /// Number of whole `T` values left to read.
    pub fn remaining_items<T: FixedSize>(&self) -> usize {
        self.available() / T::SIZE
    }

    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub fn remaining(self) -> &'d [u8] {
        &self.data[self.pos..]
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }
}
