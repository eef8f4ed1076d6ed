// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap classification between two regions.
//!
//! [`Region::test`] answers up to three questions about a pair of regions in a
//! single sweep, without building their intersection. [`Region::intersects`]
//! and [`Region::contains`] are the one-question special cases.

use core::ops::ControlFlow;

use crate::band::{Band, Span, sweep};
use crate::region::Region;

bitflags::bitflags! {
    /// Facts about a pair of regions `(a, b)`, requested from and reported by [`Region::test`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TestFlags: u8 {
        /// `a` has points that are not in `b`.
        const LEFT_EXCLUSIVE  = 0b0000_0001;
        /// `b` has points that are not in `a`.
        const RIGHT_EXCLUSIVE = 0b0000_0010;
        /// `a` and `b` have at least one point in common.
        const SHARED          = 0b0000_0100;
    }
}

/// The fact established by a slice covered by `a`, `b`, or both.
#[inline]
fn fact(in_a: bool, in_b: bool) -> TestFlags {
    match (in_a, in_b) {
        (true, true) => TestFlags::SHARED,
        (true, false) => TestFlags::LEFT_EXCLUSIVE,
        (false, true) => TestFlags::RIGHT_EXCLUSIVE,
        (false, false) => TestFlags::empty(),
    }
}

/// Sweep two span lists, recording facts into `found`. Breaks once `wanted` is covered.
fn classify_spans(
    a: &[Span],
    b: &[Span],
    wanted: TestFlags,
    found: &mut TestFlags,
) -> ControlFlow<()> {
    sweep(a, b, |_, _, x, y| {
        *found |= fact(x.is_some(), y.is_some());
        if found.contains(wanted) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// Sweep two band lists, starting from facts already established in `found`.
fn classify(a: &[Band], b: &[Band], wanted: TestFlags, mut found: TestFlags) -> TestFlags {
    if found.contains(wanted) {
        return found;
    }
    let _ = sweep(a, b, |_, _, x, y| {
        match (x, y) {
            (Some(x), Some(y)) => classify_spans(&x.spans, &y.spans, wanted, &mut found)?,
            _ => found |= fact(x.is_some(), y.is_some()),
        }
        if found.contains(wanted) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    found
}

impl Region {
    /// Classify how this region (`a`) and `other` (`b`) overlap.
    ///
    /// Only the facts in `wanted` are computed, and the result holds exactly
    /// those of them that are true:
    ///
    /// - [`TestFlags::SHARED`]: the intersection is non-empty.
    /// - [`TestFlags::LEFT_EXCLUSIVE`]: the intersection is not all of `a`.
    /// - [`TestFlags::RIGHT_EXCLUSIVE`]: the intersection is not all of `b`.
    ///
    /// The sweep stops as soon as every wanted fact is established.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use understory_region::{Rect, Region, TestFlags};
    ///
    /// let a = Region::from_rect(Rect::new(0, 0, 100, 100));
    /// let b = Region::from_rect(Rect::new(50, 50, 60, 60));
    ///
    /// assert_eq!(
    ///     a.test(&b, TestFlags::all()),
    ///     TestFlags::SHARED | TestFlags::LEFT_EXCLUSIVE
    /// );
    /// assert_eq!(a.test(&b, TestFlags::RIGHT_EXCLUSIVE), TestFlags::empty());
    /// ```
    pub fn test(&self, other: &Self, wanted: TestFlags) -> TestFlags {
        let (Some(a), Some(b)) = (self.bounds, other.bounds) else {
            // Nothing is shared, and a non-empty side is entirely exclusive.
            let mut found = TestFlags::empty();
            found.set(TestFlags::LEFT_EXCLUSIVE, !self.is_empty());
            found.set(TestFlags::RIGHT_EXCLUSIVE, !other.is_empty());
            return found & wanted;
        };
        if !a.overlaps(&b) {
            crate::log_trace!("test: disjoint bounds {a} and {b}");
            return (TestFlags::LEFT_EXCLUSIVE | TestFlags::RIGHT_EXCLUSIVE) & wanted;
        }
        if wanted.is_empty() {
            return wanted;
        }

        // A side whose bounds poke out of the other's bounds is exclusive.
        let mut found = TestFlags::empty();
        found.set(TestFlags::LEFT_EXCLUSIVE, !b.contains_rect(&a));
        found.set(TestFlags::RIGHT_EXCLUSIVE, !a.contains_rect(&b));

        classify(&self.bands, &other.bands, wanted, found) & wanted
    }

    /// Whether this region and `other` have at least one point in common.
    pub fn intersects(&self, other: &Self) -> bool {
        self.test(other, TestFlags::SHARED)
            .contains(TestFlags::SHARED)
    }

    /// Whether every point of `other` is also a point of this region.
    ///
    /// An empty `other` is contained in every region, including an empty one.
    pub fn contains(&self, other: &Self) -> bool {
        other.is_empty()
            || !self
                .test(other, TestFlags::RIGHT_EXCLUSIVE)
                .contains(TestFlags::RIGHT_EXCLUSIVE)
    }
}
