//! Start and Length Indicator Value (SLIV) codec.
//!
//! A contiguous allocation of `length` units starting at `start` inside a
//! grid of `N` units is folded into one integer below `N * N`
//! (TS 38.214 5.1.2.1, TS 36.213 7.1.6.3):
//!
//! ```text
//! if (L - 1) <= N / 2:  SLIV = N * (L - 1) + S
//! else:                 SLIV = N * (N - L + 1) + (N - 1 - S)
//! ```
//!
//! Writing `high = SLIV / N` and `low = SLIV % N`, the first branch always
//! gives `high + low + 1 = L + S <= N` while the second gives
//! `high + low + 1 = 2N + 1 - (L + S) > N`. Decoding tests that sum to pick
//! the branch, then inverts it.

use core::num::NonZeroU32;

use crate::error::SlivError;

/// Largest grid whose SLIV range fits in a `u32`.
pub const MAX_GRID_SIZE: u32 = u16::MAX as u32;

/// A contiguous run of resource units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allocation {
    /// Index of the first unit, `S`.
    pub start: u32,
    /// Number of units, `L`.
    pub length: u32,
}

impl Allocation {
    /// `length` units starting at `start`.
    #[inline]
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// One past the last allocated unit, saturating at `u32::MAX`.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }
}

/// A resource grid of fixed, non-zero size `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceGrid {
    size: NonZeroU32,
}

impl ResourceGrid {
    /// Sizes above [`MAX_GRID_SIZE`] are rejected as their SLIVs overflow `u32`.
    pub fn new(size: u32) -> Result<Self, SlivError> {
        if size > MAX_GRID_SIZE {
            return Err(SlivError::GridTooLarge(size));
        }
        NonZeroU32::new(size)
            .map(|size| Self { size })
            .ok_or(SlivError::EmptyGrid)
    }

    /// Number of units in the grid, `N`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// `N * N`; every SLIV of this grid is strictly below it.
    #[inline]
    pub fn sliv_upper_bound(&self) -> u64 {
        u64::from(self.size()) * u64::from(self.size())
    }

    /// Whether `alloc` lies inside the grid with a non-zero length.
    #[inline]
    pub fn contains(&self, alloc: Allocation) -> bool {
        alloc.start < self.size()
            && alloc.length >= 1
            && alloc.length <= self.size() - alloc.start
    }

    /// Fold `alloc` into its SLIV.
    pub fn encode(&self, alloc: Allocation) -> Result<u32, SlivError> {
        if !self.contains(alloc) {
            return Err(SlivError::InvalidAllocation {
                grid_size: self.size(),
                start: alloc.start,
                length: alloc.length,
            });
        }

        let n = self.size();
        let Allocation { start, length } = alloc;
        if length - 1 <= n / 2 {
            Ok(n * (length - 1) + start)
        } else {
            Ok(n * (n - length + 1) + (n - 1 - start))
        }
    }

    /// Unfold a SLIV.
    ///
    /// Values at or above [`sliv_upper_bound`](Self::sliv_upper_bound) do not
    /// panic but yield an allocation that does not re-encode to them.
    pub fn decode(&self, sliv: u32) -> Allocation {
        let n = self.size();
        let high = sliv / n;
        let low = sliv % n;

        if u64::from(high) + u64::from(low) + 1 <= u64::from(n) {
            Allocation::new(low, high + 1)
        } else {
            Allocation::new(n - 1 - low, n.wrapping_sub(high).wrapping_add(1))
        }
    }

    /// Every valid allocation, ordered by start then length.
    pub fn allocations(&self) -> Allocations {
        Allocations {
            size: self.size(),
            start: 0,
            length: 1,
        }
    }
}

/// Iterator returned by [`ResourceGrid::allocations`].
#[derive(Debug, Clone)]
pub struct Allocations {
    size: u32,
    start: u32,
    length: u32,
}

impl Iterator for Allocations {
    type Item = Allocation;

    fn next(&mut self) -> Option<Allocation> {
        if self.start >= self.size {
            return None;
        }
        let alloc = Allocation::new(self.start, self.length);
        if self.length < self.size - self.start {
            self.length += 1;
        } else {
            self.start += 1;
            self.length = 1;
        }
        Some(alloc)
    }
}

/// SLIV of `length` units starting at `start` in a grid of `n` units.
#[inline]
pub fn sliv_from_s_and_l(n: u32, start: u32, length: u32) -> Result<u32, SlivError> {
    ResourceGrid::new(n)?.encode(Allocation::new(start, length))
}

/// `(start, length)` encoded by `sliv` in a grid of `n` units.
///
/// `sliv` must be below `n * n` for the result to be meaningful.
#[inline]
pub fn sliv_to_s_and_l(n: u32, sliv: u32) -> Result<(u32, u32), SlivError> {
    let alloc = ResourceGrid::new(n)?.decode(sliv);
    Ok((alloc.start, alloc.length))
}
