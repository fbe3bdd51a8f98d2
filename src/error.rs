//! Caller-facing error conditions.
use thiserror::Error;

/// Errors reported by plan generation, mask generation and encode/decode.
///
/// Every variant is a local, recoverable contract violation: nothing is
/// partially computed when one is returned, and a retry with identical
/// inputs always produces the identical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter is outside its valid domain (zero bit count, zero
    /// dimension count, axis index past the dimension count, ...).
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was passed.
        value: u64,
    },

    /// A coordinate does not fit in the configured per-axis bit width.
    #[error("coordinate {value:#x} on axis {axis} does not fit in {bits} bits")]
    OutOfRange {
        /// Index of the axis the coordinate was supplied for.
        axis: usize,
        /// The offending value, saturated to `u64::MAX` if it does not even
        /// fit in 64 bits.
        value: u64,
        /// The configured per-axis width.
        bits: u32,
    },

    /// The requested total bit width does not fit the chosen key storage.
    /// Nothing is silently truncated.
    #[error("packed width of {required} bits exceeds the {available}-bit key storage")]
    WidthOverflow {
        /// Total width the request would need.
        required: u64,
        /// Width of the chosen storage type.
        available: u32,
    },
}
