// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bands and spans: the canonical storage of a [`Region`](crate::Region).
//!
//! A region is a list of horizontal bands sorted by `top`. Each band holds the
//! spans covered within its vertical extent, sorted by `left`. The sweep in this
//! module walks two such lists (bands along y, or spans along x) in lockstep and
//! is shared by every boolean operation and predicate.

use alloc::vec::Vec;
use core::ops::ControlFlow;

use smallvec::SmallVec;

/// Inline storage for the spans of one band. Damage regions rarely hold more
/// than a few spans per band.
pub(crate) type Spans = SmallVec<[Span; 4]>;

/// A half-open horizontal interval `[left, right)` within a band.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// First covered x.
    pub left: i32,
    /// First uncovered x after `left`.
    pub right: i32,
}

impl Span {
    /// Create a span covering `[left, right)`.
    #[inline(always)]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }
}

/// A horizontal strip `[top, bottom)` of a region and the spans covered in it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Band {
    pub(crate) top: i32,
    pub(crate) bottom: i32,
    pub(crate) spans: Spans,
}

impl Band {
    pub(crate) fn new(top: i32, bottom: i32, spans: Spans) -> Self {
        Self { top, bottom, spans }
    }

    pub(crate) fn from_span(top: i32, bottom: i32, span: Span) -> Self {
        let mut spans = Spans::new();
        spans.push(span);
        Self::new(top, bottom, spans)
    }

    /// First covered y.
    #[inline]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// First uncovered y after `top`.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// The spans covered within this band, sorted and pairwise non-touching.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Merge `span` into this band, fusing it with every span it overlaps or touches.
    pub(crate) fn union_span(&mut self, span: Span) {
        let spans = &mut self.spans;
        let first = spans.partition_point(|s| s.right < span.left);
        let end = spans.partition_point(|s| s.left <= span.right);
        if first == end {
            spans.insert(first, span);
            return;
        }
        let merged = Span::new(
            span.left.min(spans[first].left),
            span.right.max(spans[end - 1].right),
        );
        spans[first] = merged;
        spans.drain(first + 1..end);
    }
}

/// Something with a half-open extent along one axis.
pub(crate) trait Extent {
    fn start(&self) -> i32;
    fn end(&self) -> i32;
}

impl Extent for Span {
    #[inline(always)]
    fn start(&self) -> i32 {
        self.left
    }

    #[inline(always)]
    fn end(&self) -> i32 {
        self.right
    }
}

impl Extent for Band {
    #[inline(always)]
    fn start(&self) -> i32 {
        self.top
    }

    #[inline(always)]
    fn end(&self) -> i32 {
        self.bottom
    }
}

/// Walk two sorted, disjoint extent lists over the union of their breakpoints.
///
/// `f` is called once per maximal slice `[lo, hi)` over which the covering item of
/// each list does not change, with that item (or `None` where the list has a gap).
/// Slices covered by neither list are skipped. Returning `Break` stops the walk.
pub(crate) fn sweep<'a, T, B, F>(a: &'a [T], b: &'a [T], mut f: F) -> ControlFlow<B>
where
    T: Extent,
    F: FnMut(i32, i32, Option<&'a T>, Option<&'a T>) -> ControlFlow<B>,
{
    let (mut i, mut j) = (0, 0);
    // Everything before `pos` has been visited. Every current item ends after it.
    let mut pos = i32::MIN;
    loop {
        let (cur_a, cur_b) = (a.get(i), b.get(j));
        let next_start = match (cur_a, cur_b) {
            (None, None) => return ControlFlow::Continue(()),
            (Some(x), None) => x.start(),
            (None, Some(y)) => y.start(),
            (Some(x), Some(y)) => x.start().min(y.start()),
        };
        let lo = pos.max(next_start);
        let in_a = cur_a.filter(|x| x.start() <= lo);
        let in_b = cur_b.filter(|y| y.start() <= lo);
        let hi = slice_end(cur_a, in_a.is_some()).min(slice_end(cur_b, in_b.is_some()));

        f(lo, hi, in_a, in_b)?;

        pos = hi;
        if cur_a.is_some_and(|x| x.end() <= pos) {
            i += 1;
        }
        if cur_b.is_some_and(|y| y.end() <= pos) {
            j += 1;
        }
    }
}

/// Where the current slice stops on behalf of one list.
#[inline]
fn slice_end<T: Extent>(current: Option<&T>, covering: bool) -> i32 {
    match current {
        Some(item) if covering => item.end(),
        Some(item) => item.start(),
        None => i32::MAX,
    }
}

/// Append `[left, right)` to a sorted span list, fusing it with the last span if they touch.
#[inline]
pub(crate) fn push_span(out: &mut Spans, left: i32, right: i32) {
    if let Some(last) = out.last_mut()
        && last.right == left
    {
        last.right = right;
        return;
    }
    out.push(Span::new(left, right));
}

/// Append a band to a sorted band list, extending the last band instead when it
/// abuts `top` and holds the same spans. Empty span lists are dropped.
pub(crate) fn push_band(out: &mut Vec<Band>, top: i32, bottom: i32, spans: Spans) {
    if spans.is_empty() {
        return;
    }
    if let Some(last) = out.last_mut()
        && last.bottom == top
        && last.spans == spans
    {
        last.bottom = bottom;
        return;
    }
    out.push(Band::new(top, bottom, spans));
}
