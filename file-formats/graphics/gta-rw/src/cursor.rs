use crate::error::{Result, RwError};

/// A bounded, position-tracking reader over an in-memory byte slice.
///
/// All primitive reads are explicit little-endian. Reads past the bound fail
/// with [`RwError::Truncated`] and leave the position unchanged, so a failed
/// read never corrupts subsequent parsing.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor over the whole slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current position, in bytes from the start of the bounded region.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the bound.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Total length of the bounded region.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no bytes remain.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(RwError::Truncated {
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.check(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Read a little-endian u16.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let bytes = self.read_array::<2>()?;
        Ok(u16::from_le_bytes(bytes))
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_array::<4>()?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a little-endian i32.
    pub fn read_i32_le(&mut self) -> Result<i32> {
        let bytes = self.read_array::<4>()?;
        Ok(i32::from_le_bytes(bytes))
    }

    /// Read a little-endian f32.
    pub fn read_f32_le(&mut self) -> Result<f32> {
        let bytes = self.read_array::<4>()?;
        Ok(f32::from_le_bytes(bytes))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.check(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(bytes)
    }

    /// Read exactly `n` bytes as a borrowed slice.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.check(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read exactly `buf.len()` bytes into a pre-allocated buffer.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let slice = self.read_bytes(buf.len())?;
        buf.copy_from_slice(slice);
        Ok(())
    }

    /// Look at the next `n` bytes (clamped to the bound) without consuming.
    pub fn peek(&self, n: usize) -> &'a [u8] {
        let end = (self.pos + n).min(self.data.len());
        &self.data[self.pos..end]
    }

    /// Advance by exactly `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.check(n)?;
        self.pos += n;
        Ok(())
    }

    /// Detach a bounded child cursor over the next `n` bytes, advancing this
    /// cursor past them.
    pub fn take(&mut self, n: usize) -> Result<ByteCursor<'a>> {
        let slice = self.read_bytes(n)?;
        Ok(ByteCursor::new(slice))
    }

    /// Advance to the bound regardless of how much was consumed.
    pub fn skip_to_end(&mut self) {
        self.pos = self.data.len();
    }
}
