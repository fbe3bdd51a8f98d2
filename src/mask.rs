//! Axis mask derivation.
use crate::error::Error;
use crate::word::Word;

/// Builds the mask selecting the bits of one axis within a packed key.
///
/// Bit `p` of the result (for `p` in `[0, D * W)`) is set iff
/// `p % D == axis`: axis bits recur with period `D`, the designed
/// counterpart of a dilation gap of `D - 1`. For a fixed `(D, W)` the `D`
/// masks partition the full key width — every bit belongs to exactly one
/// axis, which is what makes encode order-independent.
///
/// Fails with [`Error::InvalidParameter`] for a zero `dimension_count` or
/// `bits_per_axis`, or an `axis` outside `[0, dimension_count)`, and with
/// [`Error::WidthOverflow`] if `D * W` exceeds the key width.
pub fn axis_mask<K: Word>(
    dimension_count: usize,
    bits_per_axis: u32,
    axis: usize,
) -> Result<K, Error> {
    if dimension_count == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension_count",
            value: 0,
        });
    }
    if bits_per_axis == 0 {
        return Err(Error::InvalidParameter {
            name: "bits_per_axis",
            value: 0,
        });
    }
    if axis >= dimension_count {
        return Err(Error::InvalidParameter {
            name: "axis",
            value: axis as u64,
        });
    }

    let width = dimension_count as u64 * bits_per_axis as u64;
    if width > K::BITS as u64 {
        return Err(Error::WidthOverflow {
            required: width,
            available: K::BITS,
        });
    }

    let mut mask = K::zero();
    let mut p = axis as u64;
    while p < width {
        mask = mask | (K::one() << p as u32);
        p += dimension_count as u64;
    }
    Ok(mask)
}
