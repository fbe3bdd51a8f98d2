//! This crate derives shift-and-mask *dilation plans* for Morton / Z-order
//! bit interleaving: packing `D` coordinate values of `W` bits each into one
//! sortable `D * W`-bit key, in `O(log N)` operations per value instead of a
//! per-bit loop. The plan is the primitive a space-filling-curve index over
//! multi-dimensional event data applies millions of times per second; the
//! plan itself is derived once and shared.
//!
//! # Bit-order convention
//!
//! Bit `i` of axis `a` occupies key bit `i * D + a`: axis 0 holds the least
//! significant slot of each `D`-bit group.
//!
//! ```text
//! axis 0 = a1 a0           key bit:  3  2  1  0
//! axis 1 = b1 b0           key     = b1 a1 b0 a0
//! ```
//!
//! The naive reference in [`oracle`] is built to the same convention, so the
//! optimized path can be validated against it rather than trusted.
//!
//! # Limb convention
//!
//! Keys wider than one machine word are little-endian limb sequences: limb 0
//! is the least significant. A `u128` key is two such 64-bit limbs; a
//! [`U256`] key is four, exposed via [`U256::limbs`].
//!
//! # Example
//!
//! ```
//! use morton_dilate::Interleaver64;
//!
//! let enc = Interleaver64::new(3, 16).unwrap();
//! let key = enc.encode(&[5u16, 261, 1]).unwrap();
//! let coords: Vec<u16> = enc.decode(key).unwrap();
//! assert_eq!(coords, vec![5, 261, 1]);
//! ```
mod error;
mod interleave;
mod mask;
pub mod oracle;
mod plan;
mod word;

pub use self::error::Error;
pub use self::interleave::{deinterleave, interleave, Interleaver};
pub use self::mask::axis_mask;
pub use self::plan::{DilationPlan, Step};
pub use self::word::{Word, U256};

/// Interleaver over a single 64-bit word (e.g. 4 axes of 16 bits).
pub type Interleaver64 = Interleaver<u64>;
/// Interleaver over a two-limb 128-bit key (e.g. 4 axes of 32 bits).
pub type Interleaver128 = Interleaver<u128>;
/// Interleaver over a four-limb 256-bit key (e.g. 4 axes of 64 bits).
pub type Interleaver256 = Interleaver<U256>;
