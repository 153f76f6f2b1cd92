//! BitWriter: packs single bits and whole bytes, MSB first, onto any `std::io::Write` sink.
//!
//! Bits are gathered in a one byte queue. Completed bytes land in an output buffer which is
//! handed to the sink whenever it fills up, and again on `flush()`.

use log::trace;

use crate::error::Result;

const BUFFER_SIZE: usize = 64 * 1024;

/// Writes a bitstream to a byte sink.
#[derive(Debug)]
pub struct BitWriter<W: std::io::Write> {
    /// Completed bytes not yet handed to the sink.
    output: Vec<u8>,
    /// Bits waiting to become a byte, aligned to the least significant end.
    queue: u8,
    /// Count of valid bits in the queue (0-7).
    q_bits: u8,
    /// Total bytes handed to the sink so far.
    written: usize,
    sink: W,
}

impl<W: std::io::Write> BitWriter<W> {
    /// Create a new BitWriter on top of the sink. Call flush() once all bits are written,
    /// or the last partial byte never reaches the sink.
    pub fn new(sink: W) -> Self {
        Self {
            output: Vec::with_capacity(BUFFER_SIZE),
            queue: 0,
            q_bits: 0,
            written: 0,
            sink,
        }
    }

    /// Move the output buffer to the sink once it is full.
    fn push_output(&mut self) -> Result<()> {
        if self.output.len() >= BUFFER_SIZE {
            self.drain_output()?;
        }
        Ok(())
    }

    /// Hand everything in the output buffer to the sink.
    fn drain_output(&mut self) -> Result<()> {
        if !self.output.is_empty() {
            self.sink.write_all(&self.output)?;
            self.written += self.output.len();
            self.output.clear();
        }
        Ok(())
    }

    /// Put one bit on the stream. The first bit of each byte becomes its most significant bit.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.queue = (self.queue << 1) | bit as u8;
        self.q_bits += 1;
        if self.q_bits == 8 {
            self.output.push(self.queue);
            self.queue = 0;
            self.q_bits = 0;
            self.push_output()?;
        }
        Ok(())
    }

    /// Put a byte on the stream, MSB first. Same result as eight calls to write_bit().
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        if self.q_bits == 0 {
            // Byte aligned, so the byte goes straight to the output buffer
            self.output.push(byte);
            return self.push_output();
        }
        // Top (8 - q_bits) bits of the byte complete the queued byte, the rest stay queued
        let fill = 8 - self.q_bits;
        self.output.push((self.queue << fill) | (byte >> self.q_bits));
        self.queue = byte & (0xff >> fill);
        self.push_output()
    }

    /// Put a u32 on the stream as four bytes, least significant byte first.
    pub fn write_u32_le(&mut self, value: u32) -> Result<()> {
        for byte in value.to_le_bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits, then hands all buffered bytes to the sink. Calling it again
    /// writes nothing more.
    pub fn flush(&mut self) -> Result<()> {
        if self.q_bits > 0 {
            trace!("Padding final byte with {} zero bits", 8 - self.q_bits);
            self.output.push(self.queue << (8 - self.q_bits));
            self.queue = 0;
            self.q_bits = 0;
        }
        self.drain_output()?;
        self.sink.flush()?;
        Ok(())
    }

    /// Number of bits written so far, including queued ones.
    pub fn bit_count(&self) -> usize {
        (self.written + self.output.len()) * 8 + self.q_bits as usize
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        let bits = self.bit_count();
        format!("[{}.{}]", bits / 8, bits % 8)
    }

    /// Flush and give back the sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.sink)
    }
}
