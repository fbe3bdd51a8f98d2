//! Dilation plan derivation.
//!
//! Dilating an `N`-bit value with a gap of `K` moves original bit `i` to
//! position `i * (K + 1)`, i.e. bit `i` travels `i * K` positions. Writing
//! the travel distances in binary, every bit whose distance has bit `s` set
//! must move by `2^s`; grouping the moves by stage turns the whole dilation
//! into one shift-OR-mask step per occupied stage:
//!
//! ```text
//! x &= initial_mask;
//! x = (x | x << 2^s) & mask[s];    for s from the highest stage down to 0
//! ```
//!
//! A plan is a pure function of `(bit_count, gap)`: derive it once, apply it
//! millions of times.
use crate::error::Error;
use crate::word::Word;

/// One shift-OR-mask step of a [`DilationPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<K> {
    /// Distance moved in this step. Always a power of two.
    pub shift: u32,
    /// Keeps the bits that moved (at their new positions) and the bits that
    /// stayed (at their current positions); clears everything else.
    pub mask: K,
}

/// An ordered sequence of shift-and-mask steps that spaces the bits of an
/// integer `gap` positions apart.
///
/// Plans are immutable once derived and hold no external resources; a plan
/// shared between threads needs no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DilationPlan<K> {
    bit_count: u32,
    gap: u32,
    initial_mask: K,
    steps: Vec<Step<K>>,
}

impl<K: Word> DilationPlan<K> {
    /// Derives the plan for dilating a `bit_count`-bit value with `gap`
    /// zero bits between consecutive original bits.
    ///
    /// The number of steps is logarithmic in the final bit position, not
    /// linear in `bit_count`. `gap == 0` and `bit_count == 1` both produce
    /// the identity plan (no steps).
    ///
    /// Fails with [`Error::InvalidParameter`] if `bit_count` is zero and
    /// with [`Error::WidthOverflow`] if the dilated value would not fit `K`.
    pub fn generate(bit_count: u32, gap: u32) -> Result<Self, Error> {
        if bit_count == 0 {
            return Err(Error::InvalidParameter {
                name: "bit_count",
                value: 0,
            });
        }

        let top = (bit_count as u64 - 1) * (gap as u64 + 1);
        if top >= K::BITS as u64 {
            return Err(Error::WidthOverflow {
                required: top + 1,
                available: K::BITS,
            });
        }

        let initial_mask = low_bits::<K>(bit_count);

        // Travel distance of each original bit, and its running position as
        // the stages are applied.
        let distances: Vec<u64> = (0..bit_count as u64).map(|i| i * gap as u64).collect();
        let mut positions: Vec<u32> = (0..bit_count).collect();

        // `top` fits in `K`, so every distance does too; the stage count is
        // the bit length of the largest distance.
        let max_distance = *distances.last().unwrap_or(&0);
        let stages = 64 - max_distance.leading_zeros();

        let mut steps = Vec::with_capacity(stages as usize);
        let mut live_mask = initial_mask;

        for s in (0..stages).rev() {
            let mut moved = K::zero();
            for i in 0..bit_count as usize {
                if (distances[i] >> s) & 1 != 0 {
                    moved = moved | (K::one() << positions[i]);
                    positions[i] += 1 << s;
                }
            }
            if moved == K::zero() {
                continue;
            }

            let still = !moved & live_mask;
            let mask = (moved << (1 << s)) | still;
            steps.push(Step {
                shift: 1 << s,
                mask,
            });
            live_mask = mask;
        }

        Ok(DilationPlan {
            bit_count,
            gap,
            initial_mask,
            steps,
        })
    }

    /// Spreads the low `bit_count` bits of `x` apart by the plan's gap.
    #[inline]
    pub fn dilate(&self, x: K) -> K {
        let mut x = x & self.initial_mask;
        for step in &self.steps {
            x = (x | (x << step.shift)) & step.mask;
        }
        x
    }

    /// The inverse of [`dilate`](Self::dilate): packs bits spaced
    /// `gap + 1` apart back into the low `bit_count` bits.
    ///
    /// Runs the steps in reverse with right-shifts, re-masking each time
    /// with the mask of the preceding stage.
    #[inline]
    pub fn contract(&self, x: K) -> K {
        let mut x = x & self.final_mask();
        for i in (0..self.steps.len()).rev() {
            let prev = if i == 0 {
                self.initial_mask
            } else {
                self.steps[i - 1].mask
            };
            x = (x | (x >> self.steps[i].shift)) & prev;
        }
        x
    }

    /// Number of original bits the plan operates on.
    pub fn bit_count(&self) -> u32 {
        self.bit_count
    }

    /// Number of zero bits inserted between consecutive original bits.
    pub fn gap(&self) -> u32 {
        self.gap
    }

    /// Mask applied to the input before any step runs.
    pub fn initial_mask(&self) -> K {
        self.initial_mask
    }

    /// The derived steps, in application order.
    pub fn steps(&self) -> &[Step<K>] {
        &self.steps
    }

    /// Mask describing the bit layout of a fully dilated value.
    pub fn final_mask(&self) -> K {
        self.steps
            .last()
            .map_or(self.initial_mask, |step| step.mask)
    }
}

/// A mask with the low `count` bits set.
fn low_bits<K: Word>(count: u32) -> K {
    debug_assert!(count <= K::BITS);
    let mut mask = K::zero();
    for i in 0..count {
        mask = mask | (K::one() << i);
    }
    mask
}
