//! Multi-axis encode and decode.
use std::mem;

use num::{NumCast, PrimInt, Unsigned};

use crate::error::Error;
use crate::mask::axis_mask;
use crate::plan::DilationPlan;
use crate::word::Word;

/// Packs and unpacks `D` coordinate values into one Morton key of type `K`.
///
/// Construction derives the dilation plan (gap `D - 1`) and the `D` axis
/// masks once; the struct is immutable afterwards and can be shared freely
/// between threads — `encode` and `decode` take `&self` and keep no state.
///
/// `C` below is any unsigned primitive wide enough for the per-axis values;
/// the key bit for bit `i` of axis `a` is `i * D + a` (axis 0 occupies the
/// least significant slot of each `D`-bit group).
#[derive(Debug, Clone)]
pub struct Interleaver<K> {
    dimension_count: usize,
    bits_per_axis: u32,
    plan: DilationPlan<K>,
    masks: Vec<K>,
}

impl<K: Word> Interleaver<K> {
    /// Creates an interleaver for `dimension_count` axes of `bits_per_axis`
    /// bits each.
    ///
    /// Fails with [`Error::InvalidParameter`] for a zero dimension count or
    /// a per-axis width outside `[1, 64]`, and with [`Error::WidthOverflow`]
    /// if `dimension_count * bits_per_axis` exceeds the key width.
    pub fn new(dimension_count: usize, bits_per_axis: u32) -> Result<Self, Error> {
        if dimension_count == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension_count",
                value: 0,
            });
        }
        if bits_per_axis == 0 || bits_per_axis > 64 {
            return Err(Error::InvalidParameter {
                name: "bits_per_axis",
                value: bits_per_axis as u64,
            });
        }

        let required = dimension_count as u64 * bits_per_axis as u64;
        if required > K::BITS as u64 {
            return Err(Error::WidthOverflow {
                required,
                available: K::BITS,
            });
        }

        let plan = DilationPlan::generate(bits_per_axis, dimension_count as u32 - 1)?;
        let masks = (0..dimension_count)
            .map(|axis| axis_mask(dimension_count, bits_per_axis, axis))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Interleaver {
            dimension_count,
            bits_per_axis,
            plan,
            masks,
        })
    }

    /// Number of interleaved axes.
    pub fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    /// Bits packed per axis.
    pub fn bits_per_axis(&self) -> u32 {
        self.bits_per_axis
    }

    /// The dilation plan applied to every axis value.
    pub fn plan(&self) -> &DilationPlan<K> {
        &self.plan
    }

    /// The mask selecting `axis`'s bits within a key, or `None` if the axis
    /// index is out of bounds.
    pub fn mask(&self, axis: usize) -> Option<K> {
        self.masks.get(axis).copied()
    }

    /// Packs one coordinate per axis into a single key.
    ///
    /// Each axis value is dilated, shifted into its slot and ORed into the
    /// key; the axis masks are disjoint, so the per-axis contributions are
    /// independent and the order does not matter.
    ///
    /// Fails with [`Error::InvalidParameter`] if `coords.len()` differs from
    /// the dimension count and with [`Error::OutOfRange`] if any coordinate
    /// does not fit in `bits_per_axis` bits.
    pub fn encode<C: PrimInt + Unsigned>(&self, coords: &[C]) -> Result<K, Error> {
        if coords.len() != self.dimension_count {
            return Err(Error::InvalidParameter {
                name: "coords",
                value: coords.len() as u64,
            });
        }

        let mut key = K::zero();
        for (axis, c) in coords.iter().enumerate() {
            let v = match c.to_u64() {
                Some(v) => v,
                None => {
                    return Err(Error::OutOfRange {
                        axis,
                        value: u64::MAX,
                        bits: self.bits_per_axis,
                    })
                }
            };
            if self.bits_per_axis < 64 && v >> self.bits_per_axis != 0 {
                return Err(Error::OutOfRange {
                    axis,
                    value: v,
                    bits: self.bits_per_axis,
                });
            }
            key = key | (self.plan.dilate(K::from_u64(v)) << axis as u32);
        }
        Ok(key)
    }

    /// Unpacks a key into `coords`, one value per axis. `coords.len()` names
    /// the expected dimension count; nothing is allocated.
    ///
    /// Fails with [`Error::InvalidParameter`] on a length mismatch and with
    /// [`Error::WidthOverflow`] if `C` is narrower than `bits_per_axis`.
    pub fn decode_into<C: PrimInt + Unsigned>(
        &self,
        key: K,
        coords: &mut [C],
    ) -> Result<(), Error> {
        if coords.len() != self.dimension_count {
            return Err(Error::InvalidParameter {
                name: "coords",
                value: coords.len() as u64,
            });
        }

        let coord_bits = (mem::size_of::<C>() * 8) as u32;
        if self.bits_per_axis > coord_bits {
            return Err(Error::WidthOverflow {
                required: self.bits_per_axis as u64,
                available: coord_bits,
            });
        }

        for (axis, slot) in coords.iter_mut().enumerate() {
            let lane = (key & self.masks[axis]) >> axis as u32;
            let v = self.plan.contract(lane).low_u64();
            // Cannot fail: `v` has at most `bits_per_axis <= coord_bits` bits.
            *slot = <C as NumCast>::from(v).ok_or(Error::OutOfRange {
                axis,
                value: v,
                bits: coord_bits,
            })?;
        }
        Ok(())
    }

    /// Allocating convenience form of [`decode_into`](Self::decode_into).
    pub fn decode<C: PrimInt + Unsigned>(&self, key: K) -> Result<Vec<C>, Error> {
        let mut coords = vec![C::zero(); self.dimension_count];
        self.decode_into(key, &mut coords)?;
        Ok(coords)
    }
}

/// One-shot encode: packs `coords` (one value per axis) into a key.
///
/// Derives the plan and masks on every call; when encoding more than a
/// handful of values, build an [`Interleaver`] once instead.
pub fn interleave<K: Word, C: PrimInt + Unsigned>(
    coords: &[C],
    bits_per_axis: u32,
) -> Result<K, Error> {
    Interleaver::new(coords.len(), bits_per_axis)?.encode(coords)
}

/// One-shot decode, the inverse of [`interleave`].
pub fn deinterleave<K: Word, C: PrimInt + Unsigned>(
    key: K,
    dimension_count: usize,
    bits_per_axis: u32,
) -> Result<Vec<C>, Error> {
    Interleaver::new(dimension_count, bits_per_axis)?.decode(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_axes_two_bits() {
        let enc = Interleaver::<u8>::new(2, 2).unwrap();
        assert_eq!(enc.encode(&[3u8, 0]), Ok(0b0101));
        assert_eq!(enc.encode(&[0u8, 3]), Ok(0b1010));
        assert_eq!(enc.encode(&[3u8, 3]), Ok(0b1111));
    }

    #[test]
    fn two_axes_eight_bits() {
        // 0b10101010 and 0b00001111 interleave to 0b0100010011101110.
        let enc = Interleaver::<u16>::new(2, 8).unwrap();
        let key = enc.encode(&[170u8, 15]).unwrap();
        assert_eq!(key, 17646);
        assert_eq!(enc.decode::<u8>(key), Ok(vec![170, 15]));
    }

    #[test]
    fn two_axes_eight_bits_extremes() {
        let enc = Interleaver::<u16>::new(2, 8).unwrap();
        assert_eq!(enc.encode(&[255u8, 255]), Ok(65535));
        assert_eq!(enc.encode(&[0u8, 255]), Ok(43690));
        assert_eq!(enc.encode(&[255u8, 0]), Ok(21845));
    }

    #[test]
    fn three_axes_eight_bits() {
        let enc = Interleaver::<u32>::new(3, 8).unwrap();
        let key = enc.encode(&[170u8, 15, 240]).unwrap();
        assert_eq!(key, 11716250);
        assert_eq!(enc.decode::<u8>(key), Ok(vec![170, 15, 240]));
    }

    #[test]
    fn wide_coordinate_type_is_fine() {
        // The value range matters, not the coordinate type's width.
        let enc = Interleaver::<u16>::new(2, 8).unwrap();
        assert_eq!(enc.encode(&[170u64, 15]), Ok(17646));
    }

    #[test]
    fn encode_rejects_out_of_range() {
        let enc = Interleaver::<u16>::new(2, 8).unwrap();
        assert_eq!(
            enc.encode(&[256u16, 0]),
            Err(Error::OutOfRange {
                axis: 0,
                value: 256,
                bits: 8
            })
        );
        assert_eq!(
            enc.encode(&[0u16, 300]),
            Err(Error::OutOfRange {
                axis: 1,
                value: 300,
                bits: 8
            })
        );
    }

    #[test]
    fn encode_rejects_length_mismatch() {
        let enc = Interleaver::<u32>::new(3, 8).unwrap();
        assert_eq!(
            enc.encode(&[1u8, 2]),
            Err(Error::InvalidParameter {
                name: "coords",
                value: 2
            })
        );
    }

    #[test]
    fn decode_rejects_narrow_coordinate_type() {
        let enc = Interleaver::<u64>::new(2, 16).unwrap();
        let mut out = [0u8; 2];
        assert_eq!(
            enc.decode_into(0u64, &mut out),
            Err(Error::WidthOverflow {
                required: 16,
                available: 8
            })
        );
    }

    #[test]
    fn new_rejects_overflowing_width() {
        assert_eq!(
            Interleaver::<u32>::new(4, 16).err(),
            Some(Error::WidthOverflow {
                required: 64,
                available: 32
            })
        );
    }

    #[test]
    fn new_rejects_bad_parameters() {
        assert!(Interleaver::<u64>::new(0, 8).is_err());
        assert!(Interleaver::<u64>::new(2, 0).is_err());
        assert!(Interleaver::<u128>::new(2, 65).is_err());
    }

    #[test]
    fn one_shot_helpers_agree_with_struct() {
        let enc = Interleaver::<u64>::new(3, 16).unwrap();
        let coords = [513u16, 40000, 7];
        let key = enc.encode(&coords).unwrap();
        assert_eq!(interleave::<u64, u16>(&coords, 16), Ok(key));
        assert_eq!(deinterleave::<u64, u16>(key, 3, 16), Ok(coords.to_vec()));
    }

    #[test]
    fn single_axis_is_identity() {
        let enc = Interleaver::<u64>::new(1, 64).unwrap();
        let key = enc.encode(&[0xDEAD_BEEF_CAFE_F00Du64]).unwrap();
        assert_eq!(key, 0xDEAD_BEEF_CAFE_F00D);
    }
}
