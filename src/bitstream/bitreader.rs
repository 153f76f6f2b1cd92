//! BitReader: reads a packed, MSB-first bitstream from any source that supports the read() call.
//!
//! The source is pulled into an internal buffer, and bits are handed out one at a time from
//! the byte under the cursor.

use std::io::ErrorKind;

use crate::error::{Error, Result};

const BUFFER_SIZE: usize = 64 * 1024;
const BIT_MASK: u8 = 0x80;

/// Reads a bitstream from a byte source.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    /// Valid bytes in the buffer.
    filled: usize,
    cursor: usize,
    bit_index: usize,
    source: R,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader. Nothing is read from the source until the first bit is requested.
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            filled: 0,
            cursor: 0,
            bit_index: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more.
    fn have_data(&mut self) -> Result<bool> {
        // Only try to read more data when the cursor has used up the buffer
        if self.cursor == self.filled {
            let size = loop {
                match self.source.read(&mut self.buffer) {
                    Ok(size) => break size,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            };
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                return Ok(false);
            }
            self.filled = size;
            self.cursor = 0;
            self.bit_index = 0;
        }
        Ok(true)
    }

    /// Return the next bit, or EndOfStream if there is no more data to read.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bit_index == 0 && !self.have_data()? {
            return Err(Error::EndOfStream);
        }
        let bit = self.buffer[self.cursor] & (BIT_MASK >> self.bit_index) != 0;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Ok(bit)
    }

    /// Return the next 8 bits as a byte, or EndOfStream if fewer than 8 bits are left.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.bit_index == 0 {
            // Byte aligned, so take the whole byte at once
            if !self.have_data()? {
                return Err(Error::EndOfStream);
            }
            let byte = self.buffer[self.cursor];
            self.cursor += 1;
            return Ok(byte);
        }
        let mut byte = 0_u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        Ok(byte)
    }

    /// Return a u32 stored as four bytes, least significant byte first.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let mut bytes = [0_u8; 4];
        for byte in bytes.iter_mut() {
            *byte = self.read_byte()?;
        }
        Ok(u32::from_le_bytes(bytes))
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
