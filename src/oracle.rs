//! Naive bit-string interleaving, used as a test oracle.
//!
//! The shift-and-mask formulation in [`crate::plan`] is easy to get subtly
//! wrong — an off-by-one stage count or a stale mask still produces
//! plausible-looking integers. This module interleaves literal bit strings
//! by plain per-position concatenation, with no bit tricks at all, so the
//! optimized path can be checked against a trivially-correct reference.
//! Nothing here belongs on a production path.
//!
//! Bit strings are most-significant-bit first throughout, matching the way
//! binary literals are written.
use crate::error::Error;

/// Interleaves one equal-length bit string per axis into the expected packed
/// bit string, of length `axes.len() * L`.
///
/// Follows the crate's bit-order convention: within each group of
/// `axes.len()` output bits, axis 0 holds the least significant slot, so
/// reading the output left to right the axes appear in descending order.
///
/// Fails with [`Error::InvalidParameter`] if `axes` is empty, the strings
/// differ in length, or any character is not `0` or `1`.
pub fn interleave_bit_strings(axes: &[&str]) -> Result<String, Error> {
    let first = match axes.first() {
        Some(first) => first,
        None => {
            return Err(Error::InvalidParameter {
                name: "axes",
                value: 0,
            })
        }
    };

    for axis in axes {
        if axis.len() != first.len() {
            return Err(Error::InvalidParameter {
                name: "axes",
                value: axis.len() as u64,
            });
        }
        if let Some(bad) = axis.bytes().find(|b| *b != b'0' && *b != b'1') {
            return Err(Error::InvalidParameter {
                name: "axes",
                value: bad as u64,
            });
        }
    }

    let mut out = String::with_capacity(axes.len() * first.len());
    for i in 0..first.len() {
        for axis in axes.iter().rev() {
            out.push(axis.as_bytes()[i] as char);
        }
    }
    Ok(out)
}

/// Splits a bit string into fixed-width windows for comparison against a
/// limb-packed key.
///
/// Windows are aligned to the least significant end and returned most
/// significant first, so `windows.last()` corresponds to limb 0 of a
/// little-endian limb sequence. The first window may be shorter than
/// `window_bits` when the length is not a multiple of it.
///
/// Fails with [`Error::InvalidParameter`] if `window_bits` is zero.
pub fn limb_windows(bits: &str, window_bits: usize) -> Result<Vec<String>, Error> {
    if window_bits == 0 {
        return Err(Error::InvalidParameter {
            name: "window_bits",
            value: 0,
        });
    }

    let mut windows = Vec::with_capacity(bits.len() / window_bits + 1);
    let head = bits.len() % window_bits;
    if head != 0 {
        windows.push(bits[..head].to_string());
    }
    let mut idx = head;
    while idx < bits.len() {
        windows.push(bits[idx..idx + window_bits].to_string());
        idx += window_bits;
    }
    Ok(windows)
}

/// Parses a most-significant-bit-first bit string of up to 64 characters.
///
/// Fails with [`Error::InvalidParameter`] on over-long strings or characters
/// other than `0` and `1`.
pub fn bits_to_u64(bits: &str) -> Result<u64, Error> {
    if bits.len() > 64 {
        return Err(Error::InvalidParameter {
            name: "bits",
            value: bits.len() as u64,
        });
    }
    let mut out = 0u64;
    for b in bits.bytes() {
        match b {
            b'0' => out <<= 1,
            b'1' => out = out << 1 | 1,
            _ => {
                return Err(Error::InvalidParameter {
                    name: "bits",
                    value: b as u64,
                })
            }
        }
    }
    Ok(out)
}

/// Formats the low `width` bits of a value as a most-significant-bit-first
/// bit string.
pub fn u64_to_bits(value: u64, width: u32) -> String {
    debug_assert!(width >= 1 && width <= 64);
    let mut out = String::with_capacity(width as usize);
    for i in (0..width).rev() {
        out.push(if (value >> i) & 1 != 0 { '1' } else { '0' });
    }
    out
}
