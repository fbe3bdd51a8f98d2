//! Key storage types.
//!
//! A packed key is an unsigned integer of `dimension_count * bits_per_axis`
//! bits. Up to 128 bits the native unsigned primitives are used directly;
//! beyond that the key is a fixed sequence of 64-bit limbs ([`U256`]).
//!
//! `num::PrimInt` cannot be implemented for a limb type (it demands full
//! integer arithmetic), so the seam between the algorithms and their storage
//! is the much narrower [`Word`] trait: the handful of bit operations a
//! dilation plan actually applies.
use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

/// Storage for a packed key or a bit mask over it.
///
/// Shift amounts must be smaller than [`Word::BITS`]; the algorithms in this
/// crate guarantee that by validating the total width up front.
pub trait Word:
    Copy
    + Eq
    + fmt::Debug
    + Default
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of this word in bits.
    const BITS: u32;

    /// The all-zeroes word.
    fn zero() -> Self;

    /// The word with only the least significant bit set.
    fn one() -> Self;

    /// Widens a coordinate value into this word. Truncates if the word is
    /// narrower than 64 bits; callers validate the range first.
    fn from_u64(v: u64) -> Self;

    /// The least significant 64 bits of this word.
    fn low_u64(self) -> u64;
}

macro_rules! impl_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn from_u64(v: u64) -> Self {
                v as $t
            }

            #[inline]
            fn low_u64(self) -> u64 {
                self as u64
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64, u128);

/// A 256-bit unsigned integer stored as four little-endian 64-bit limbs
/// (limb 0 is the least significant).
///
/// Only the operations a dilation plan needs are provided; this is a key
/// container, not a general-purpose big integer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256([u64; 4]);

impl U256 {
    /// The all-zeroes value.
    pub const ZERO: Self = U256([0; 4]);

    /// Builds a value from little-endian limbs.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        U256(limbs)
    }

    /// The little-endian limbs of this value.
    #[inline]
    pub const fn limbs(self) -> [u64; 4] {
        self.0
    }
}

impl From<u64> for U256 {
    #[inline]
    fn from(v: u64) -> Self {
        U256([v, 0, 0, 0])
    }
}

impl BitAnd for U256 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        U256([
            self.0[0] & rhs.0[0],
            self.0[1] & rhs.0[1],
            self.0[2] & rhs.0[2],
            self.0[3] & rhs.0[3],
        ])
    }
}

impl BitOr for U256 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        U256([
            self.0[0] | rhs.0[0],
            self.0[1] | rhs.0[1],
            self.0[2] | rhs.0[2],
            self.0[3] | rhs.0[3],
        ])
    }
}

impl Not for U256 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        U256([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        debug_assert!(rhs < 256);
        let limb = (rhs / 64) as usize;
        let bit = rhs % 64;
        let mut out = [0u64; 4];
        if bit == 0 {
            for i in limb..4 {
                out[i] = self.0[i - limb];
            }
        } else {
            for i in limb..4 {
                let lo = self.0[i - limb] << bit;
                let carry = if i > limb {
                    self.0[i - limb - 1] >> (64 - bit)
                } else {
                    0
                };
                out[i] = lo | carry;
            }
        }
        U256(out)
    }
}

impl Shr<u32> for U256 {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        debug_assert!(rhs < 256);
        let limb = (rhs / 64) as usize;
        let bit = rhs % 64;
        let mut out = [0u64; 4];
        if bit == 0 {
            for i in 0..4 - limb {
                out[i] = self.0[i + limb];
            }
        } else {
            for i in 0..4 - limb {
                let lo = self.0[i + limb] >> bit;
                let carry = if i + limb + 1 < 4 {
                    self.0[i + limb + 1] << (64 - bit)
                } else {
                    0
                };
                out[i] = lo | carry;
            }
        }
        U256(out)
    }
}

impl Word for U256 {
    const BITS: u32 = 256;

    #[inline]
    fn zero() -> Self {
        U256::ZERO
    }

    #[inline]
    fn one() -> Self {
        U256([1, 0, 0, 0])
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        U256::from(v)
    }

    #[inline]
    fn low_u64(self) -> u64 {
        self.0[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shl_within_limb() {
        let x = U256::from(0b1011);
        assert_eq!(x << 4, U256::from(0b1011_0000));
    }

    #[test]
    fn shl_across_limbs() {
        let x = U256::from(u64::MAX);
        assert_eq!(
            x << 32,
            U256::from_limbs([0xFFFF_FFFF_0000_0000, 0xFFFF_FFFF, 0, 0])
        );
        assert_eq!(x << 64, U256::from_limbs([0, u64::MAX, 0, 0]));
        assert_eq!(x << 192, U256::from_limbs([0, 0, 0, u64::MAX]));
    }

    #[test]
    fn shr_across_limbs() {
        let x = U256::from_limbs([0, 0, 0, u64::MAX]);
        assert_eq!(x >> 192, U256::from(u64::MAX));
        assert_eq!(
            x >> 160,
            U256::from_limbs([0xFFFF_FFFF_0000_0000, 0xFFFF_FFFF, 0, 0])
        );
        assert_eq!(x >> 255, U256::from(1));
    }

    #[test]
    fn shift_round_trip() {
        let x = U256::from(0xDEAD_BEEF_CAFE_F00D);
        for s in 0..192 {
            assert_eq!((x << s) >> s, x, "shift = {}", s);
        }
    }

    #[test]
    fn bit_ops() {
        let a = U256::from_limbs([0xF0F0, 0x0F0F, 0, 1]);
        let b = U256::from_limbs([0x00FF, 0xFF00, 1, 1]);
        assert_eq!(a & b, U256::from_limbs([0x00F0, 0x0F00, 0, 1]));
        assert_eq!(a | b, U256::from_limbs([0xF0FF, 0xFF0F, 1, 1]));
        assert_eq!(!U256::ZERO, U256::from_limbs([u64::MAX; 4]));
    }

    #[test]
    fn limb_order_is_little_endian() {
        let x = U256::from(7) << 64;
        assert_eq!(x.limbs(), [0, 7, 0, 0]);
        assert_eq!((x >> 64).low_u64(), 7);
    }
}
