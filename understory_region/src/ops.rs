// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region-with-region boolean operations.
//!
//! All operations share one synchronized sweep over both band lists. For every
//! y-slice the spans of the two inputs are combined along x, and the resulting
//! band is appended with [`push_band`], which re-fuses abutting equal bands, so
//! the output is canonical without a separate pass.

use alloc::vec::Vec;
use core::ops::ControlFlow;

use crate::band::{Band, Span, Spans, push_band, push_span, sweep};
use crate::region::Region;

/// A boolean operation, as the set of coverage combinations it keeps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Op {
    Intersect,
    Union,
    Subtract,
    Xor,
}

impl Op {
    /// Whether a point covered by `a` (resp. `b`) as given ends up in the result.
    #[inline]
    fn keeps(self, in_a: bool, in_b: bool) -> bool {
        match self {
            Self::Intersect => in_a && in_b,
            Self::Union => in_a || in_b,
            Self::Subtract => in_a && !in_b,
            Self::Xor => in_a != in_b,
        }
    }
}

/// Intersect two sorted span lists with a two-pointer merge.
///
/// Whichever span ends first is advanced; any overlapping pair emits its overlap.
/// The inputs never touch internally, so neither do the outputs.
pub(crate) fn intersect_spans(a: &[Span], b: &[Span]) -> Spans {
    let mut out = Spans::new();
    let (mut i, mut j) = (0, 0);
    while let (Some(x), Some(y)) = (a.get(i), b.get(j)) {
        let left = x.left.max(y.left);
        let right = x.right.min(y.right);
        if left < right {
            out.push(Span::new(left, right));
        }
        if x.right <= y.right {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// Combine two sorted span lists under `op`.
fn combine_spans(a: &[Span], b: &[Span], op: Op) -> Spans {
    if op == Op::Intersect {
        return intersect_spans(a, b);
    }
    let mut out = Spans::new();
    let _ = sweep(a, b, |left, right, x, y| {
        if op.keeps(x.is_some(), y.is_some()) {
            push_span(&mut out, left, right);
        }
        ControlFlow::<()>::Continue(())
    });
    out
}

/// Combine two canonical band lists under `op`, producing a canonical band list.
fn combine(a: &[Band], b: &[Band], op: Op) -> Vec<Band> {
    let mut out = Vec::new();
    let _ = sweep(a, b, |top, bottom, x, y| {
        let spans = match (x, y) {
            (Some(x), Some(y)) => combine_spans(&x.spans, &y.spans, op),
            (Some(x), None) if op.keeps(true, false) => x.spans.clone(),
            (None, Some(y)) if op.keeps(false, true) => y.spans.clone(),
            _ => return ControlFlow::<()>::Continue(()),
        };
        push_band(&mut out, top, bottom, spans);
        ControlFlow::Continue(())
    });
    out
}

impl Region {
    /// Replace this region with its intersection with `other`.
    ///
    /// Returns early with an empty region when the bounding boxes are disjoint.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use understory_region::{Rect, Region};
    ///
    /// let mut a = Region::from_rect(Rect::new(0, 0, 100, 100));
    /// let b: Region = [Rect::new(50, 50, 150, 150), Rect::new(-10, -10, 10, 10)]
    ///     .into_iter()
    ///     .collect();
    /// a.intersect(&b);
    ///
    /// let expected: Region = [Rect::new(50, 50, 100, 100), Rect::new(0, 0, 10, 10)]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(a, expected);
    /// ```
    pub fn intersect(&mut self, other: &Self) {
        let (Some(a), Some(b)) = (self.bounds, other.bounds) else {
            self.clear();
            return;
        };
        if !a.overlaps(&b) {
            crate::log_trace!("intersect: disjoint bounds {a} and {b}");
            self.clear();
            return;
        }
        *self = Self::from_bands(combine(&self.bands, &other.bands, Op::Intersect));
        self.debug_validate();
    }

    /// Add every point of `other` to this region.
    pub fn union(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.clone_from(other);
            return;
        }
        *self = Self::from_bands(combine(&self.bands, &other.bands, Op::Union));
        self.debug_validate();
    }

    /// Remove every point of `other` from this region.
    pub fn subtract(&mut self, other: &Self) {
        let (Some(a), Some(b)) = (self.bounds, other.bounds) else {
            return;
        };
        if !a.overlaps(&b) {
            crate::log_trace!("subtract: disjoint bounds {a} and {b}");
            return;
        }
        *self = Self::from_bands(combine(&self.bands, &other.bands, Op::Subtract));
        self.debug_validate();
    }

    /// Replace this region with the points covered by exactly one of `self` and `other`.
    pub fn xor(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.clone_from(other);
            return;
        }
        *self = Self::from_bands(combine(&self.bands, &other.bands, Op::Xor));
        self.debug_validate();
    }
}
