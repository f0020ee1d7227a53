//! Bit-packed cell storage
//!
//! Cell `i` lives in byte `i / 8` under mask `1 << (i % 8)` (LSB-first).
//! A set bit means the cell is alive. Bits past `len` in the last byte are
//! kept at zero so the byte view is stable for external readers.

/// Fixed-length bit array backed by bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedCells {
    len: usize,
    bytes: Vec<u8>,
}

/// Number of bytes needed to hold `bits` bits
#[inline]
pub fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[inline]
fn locate(index: usize) -> (usize, u8) {
    (index / 8, 1u8 << (index % 8))
}

impl PackedCells {
    /// Create an all-dead array of `len` cells
    pub fn new(len: usize) -> Self {
        Self {
            len,
            bytes: vec![0; byte_len(len)],
        }
    }

    /// Number of cells (bits) stored
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        let (byte, mask) = locate(index);
        self.bytes[byte] & mask != 0
    }

    #[inline]
    pub fn set(&mut self, index: usize, alive: bool) {
        debug_assert!(index < self.len);
        let (byte, mask) = locate(index);
        if alive {
            self.bytes[byte] |= mask;
        } else {
            self.bytes[byte] &= !mask;
        }
    }

    #[inline]
    pub fn flip(&mut self, index: usize) {
        debug_assert!(index < self.len);
        let (byte, mask) = locate(index);
        self.bytes[byte] ^= mask;
    }

    /// Reset every cell to dead without reallocating
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable byte access for whole-generation writes. Callers must leave
    /// padding bits cleared.
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Indices of set bits in ascending order
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&i| self.get(i))
    }
}
