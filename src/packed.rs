//! Fixed-stride bit-packed storage.
//!
//! Slot `i` of an array with width `w` occupies bits `[i * w, (i + 1) * w)` of the byte buffer,
//! where bit `k` is bit `k % 8` of byte `k / 8`. The layout does not depend on the native word
//! size, so buffers can be exchanged between platforms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[inline]
pub(crate) fn value_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Number of bytes needed to hold `len` slots of `bits` bits each.
#[inline]
pub(crate) fn byte_len(bits: u32, len: usize) -> usize {
    ((bits as u64 * len as u64 + 7) >> 3) as usize
}

/// An array of `len` unsigned integers, each `bits` wide (1..=64), packed into bytes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PackedArray {
    bits: u32,
    data: Vec<u8>,
}

impl PackedArray {
    /// Creates a zero-filled array holding `len` slots.
    pub(crate) fn new(bits: u32, len: usize) -> Self {
        debug_assert!((1..=64).contains(&bits));
        Self {
            bits,
            data: vec![0; byte_len(bits, len)],
        }
    }

    /// Takes ownership of an existing buffer. The caller is responsible for its length.
    pub(crate) fn from_bytes(bits: u32, data: Vec<u8>) -> Self {
        debug_assert!((1..=64).contains(&bits));
        Self { bits, data }
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn bits(&self) -> u32 {
        self.bits
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the byte range covering slot `idx` and the bit offset of the slot within it.
    #[inline]
    fn locate(&self, idx: usize) -> (usize, usize, u32) {
        let offset = idx as u64 * self.bits as u64;
        let first = (offset >> 3) as usize;
        let shift = (offset & 7) as u32;
        let num_bytes = ((shift + self.bits + 7) >> 3) as usize;
        (first, num_bytes, shift)
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> u64 {
        let (first, num_bytes, shift) = self.locate(idx);
        let mut acc = 0u128;
        for (k, &b) in self.data[first..first + num_bytes].iter().enumerate() {
            acc |= (b as u128) << (k << 3);
        }
        ((acc >> shift) as u64) & value_mask(self.bits)
    }

    /// Stores the low `bits` bits of `value` in slot `idx`, leaving neighbouring slots untouched.
    #[inline]
    pub(crate) fn set(&mut self, idx: usize, value: u64) {
        let (first, num_bytes, shift) = self.locate(idx);
        let mask = (value_mask(self.bits) as u128) << shift;
        let val = ((value & value_mask(self.bits)) as u128) << shift;
        for (k, b) in self.data[first..first + num_bytes].iter_mut().enumerate() {
            let m = (mask >> (k << 3)) as u8;
            let v = (val >> (k << 3)) as u8;
            *b = (*b & !m) | v;
        }
    }

    /// Zeroes every slot.
    pub(crate) fn clear(&mut self) {
        self.data.fill(0);
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(1, 0), 0);
        assert_eq!(byte_len(1, 1), 1);
        assert_eq!(byte_len(1, 8), 1);
        assert_eq!(byte_len(1, 9), 2);
        assert_eq!(byte_len(6, 4), 3);
        assert_eq!(byte_len(28, 4), 14);
        assert_eq!(byte_len(64, 3), 24);
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5f1d_3c2a_9b8e_7d60);
        for bits in 1..=64u32 {
            let len = rng.gen_range(1..200usize);
            let mut array = PackedArray::new(bits, len);
            let mut expected = vec![0u64; len];
            for _ in 0..1000 {
                let idx = rng.gen_range(0..len);
                let value = rng.gen::<u64>() & value_mask(bits);
                array.set(idx, value);
                expected[idx] = value;
            }
            for (idx, &value) in expected.iter().enumerate() {
                assert_eq!(array.get(idx), value, "bits={bits} idx={idx}");
            }
        }
    }

    #[test]
    fn test_no_aliasing_between_neighbours() {
        for bits in 1..=64u32 {
            let mut array = PackedArray::new(bits, 3);
            array.set(1, u64::MAX);
            assert_eq!(array.get(0), 0, "bits={bits}");
            assert_eq!(array.get(1), value_mask(bits), "bits={bits}");
            assert_eq!(array.get(2), 0, "bits={bits}");

            array.set(0, u64::MAX);
            array.set(2, u64::MAX);
            array.set(1, 0);
            assert_eq!(array.get(0), value_mask(bits), "bits={bits}");
            assert_eq!(array.get(1), 0, "bits={bits}");
            assert_eq!(array.get(2), value_mask(bits), "bits={bits}");
        }
    }

    #[test]
    fn test_little_endian_layout() {
        let mut array = PackedArray::new(12, 2);
        array.set(0, 0xABC);
        array.set(1, 0x123);
        assert_eq!(array.as_bytes(), &[0xBC, 0x3A, 0x12]);
    }

    #[test]
    fn test_clear() {
        let mut array = PackedArray::new(7, 10);
        assert!(array.is_zero());
        array.set(9, 5);
        assert!(!array.is_zero());
        array.clear();
        assert!(array.is_zero());
    }
}
