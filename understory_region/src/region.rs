// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Region`] type: canonical storage plus in-place rectangle union.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::band::{Band, Span};
use crate::rect::Rect;

/// A set of integer points expressed as a union of axis-aligned rectangles.
///
/// The region is stored in a canonical banded form: horizontal bands sorted by
/// `top`, each holding sorted spans. Touching spans are fused and abutting bands
/// with identical spans are merged, so two regions covering the same points have
/// the same bands. That makes `==` (and [`Region::is_equal`]) a geometric
/// equality test.
///
/// Every mutating method leaves the region canonical before it returns.
///
/// ## Example
///
/// ```rust
/// use understory_region::{Rect, Region};
///
/// let mut a = Region::new();
/// a.add(Rect::new(0, 0, 10, 20));
/// a.add(Rect::new(0, 20, 10, 40));
///
/// // Two touching rectangles fuse into one.
/// assert_eq!(a, Region::from_rect(Rect::new(0, 0, 10, 40)));
/// assert_eq!(a.rect_count(), 1);
/// assert!(a.contains_point(39, 9));
/// assert!(!a.contains_point(40, 9));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub(crate) bands: Vec<Band>,
    /// Tight bounds of all bands; `None` iff `bands` is empty.
    pub(crate) bounds: Option<Rect>,
}

impl Region {
    /// Create an empty region.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bands: Vec::new(),
            bounds: None,
        }
    }

    /// Create a region covering a single rectangle.
    ///
    /// # Panics
    ///
    /// Panics if `rect` is malformed, as [`Region::add`] does.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add(rect);
        region
    }

    /// Build a region from already-canonical bands.
    pub(crate) fn from_bands(bands: Vec<Band>) -> Self {
        let bounds = bounds_of(&bands);
        Self { bands, bounds }
    }

    /// Whether the region covers no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Whether both regions cover exactly the same points.
    ///
    /// This compares the canonical bands, so it is linear in the size of the
    /// regions. It is the same as `self == other`.
    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.bands == other.bands
    }

    /// The smallest rectangle enclosing the region, or `None` if it is empty.
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The canonical bands, sorted by `top`.
    #[inline]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Number of rectangles yielded by [`Region::rects`].
    pub fn rect_count(&self) -> usize {
        self.bands.iter().map(|b| b.spans.len()).sum()
    }

    /// Iterate the region as disjoint rectangles, band by band, left to right.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.bands.iter().flat_map(|band| {
            band.spans
                .iter()
                .map(move |s| Rect::new(band.top, s.left, band.bottom, s.right))
        })
    }

    /// Whether the point `(x, y)` is covered.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        if !self.bounds.is_some_and(|b| b.contains_point(x, y)) {
            return false;
        }
        let i = self.bands.partition_point(|b| b.bottom <= y);
        let Some(band) = self.bands.get(i) else {
            return false;
        };
        if band.top > y {
            return false;
        }
        let j = band.spans.partition_point(|s| s.right <= x);
        band.spans.get(j).is_some_and(|s| s.left <= x)
    }

    /// Remove every band, leaving an empty region.
    pub fn clear(&mut self) {
        self.bands.clear();
        self.bounds = None;
    }

    /// Add the points of `rect` to the region.
    ///
    /// Only the bands overlapping `rect` vertically are touched. Rectangles with
    /// zero area are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `rect` is malformed (`top > bottom` or `left > right`); passing
    /// such a rectangle is a bug in the caller.
    pub fn add(&mut self, rect: Rect) {
        assert!(
            rect.is_valid(),
            "malformed rectangle {rect:?}: expected top <= bottom and left <= right"
        );
        if rect.is_empty() {
            return;
        }
        let span = Span::new(rect.left, rect.right);

        let mut i = self.bands.partition_point(|b| b.bottom <= rect.top);
        if self.bands.get(i).is_some_and(|b| b.top < rect.top) {
            self.split_band(i, rect.top);
            i += 1;
        }
        let first = i;

        // Walk down from `rect.top`, widening bands that exist and filling gaps
        // with new single-span bands. Band `i` always ends below `y`.
        let mut y = rect.top;
        while y < rect.bottom {
            let next = self.bands.get(i).map(|b| (b.top, b.bottom));
            match next {
                Some((top, bottom)) if top <= y => {
                    if bottom > rect.bottom {
                        self.split_band(i, rect.bottom);
                    }
                    let band = &mut self.bands[i];
                    band.union_span(span);
                    y = band.bottom;
                }
                _ => {
                    let bottom = next.map_or(rect.bottom, |(top, _)| top.min(rect.bottom));
                    self.bands.insert(i, Band::from_span(y, bottom, span));
                    y = bottom;
                }
            }
            i += 1;
        }

        self.coalesce(first.saturating_sub(1), i + 1);
        self.bounds = Some(self.bounds.map_or(rect, |b| b.union(rect)));
        self.debug_validate();
    }

    /// Remove the points of `rect` from the region.
    ///
    /// # Panics
    ///
    /// Panics if `rect` is malformed.
    pub fn remove(&mut self, rect: Rect) {
        assert!(
            rect.is_valid(),
            "malformed rectangle {rect:?}: expected top <= bottom and left <= right"
        );
        if rect.is_empty() {
            return;
        }
        self.subtract(&Self::from_rect(rect));
    }

    /// Shift the whole region by `(dx, dy)`.
    ///
    /// Coordinates must stay within `i32`; overflow panics in debug builds.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for band in &mut self.bands {
            band.top += dy;
            band.bottom += dy;
            for span in &mut band.spans {
                span.left += dx;
                span.right += dx;
            }
        }
        self.bounds = self.bounds.map(|b| b.translate(dx, dy));
    }

    /// Render the bands as text, one line per band.
    ///
    /// This is a debugging aid; the format is not stable.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Check in debug builds that a mutation left the region canonical.
    #[inline]
    pub(crate) fn debug_validate(&self) {
        debug_assert!(
            self.validate().is_ok(),
            "region left non-canonical: {:?}\n{self}",
            self.validate()
        );
    }

    /// Split band `i` at `y` (strictly inside it) into two bands with the same spans.
    fn split_band(&mut self, i: usize, y: i32) {
        let band = &mut self.bands[i];
        debug_assert!(
            band.top < y && y < band.bottom,
            "split point {y} outside band [{}, {})",
            band.top,
            band.bottom
        );
        let lower = Band::new(y, band.bottom, band.spans.clone());
        band.bottom = y;
        self.bands.insert(i + 1, lower);
    }

    /// Merge abutting bands with equal spans among `bands[lo..hi]`.
    fn coalesce(&mut self, lo: usize, hi: usize) {
        let mut hi = hi.min(self.bands.len());
        let mut i = lo;
        while i + 1 < hi {
            let (upper, lower) = (&self.bands[i], &self.bands[i + 1]);
            if upper.bottom == lower.top && upper.spans == lower.spans {
                let lower = self.bands.remove(i + 1);
                self.bands[i].bottom = lower.bottom;
                hi -= 1;
            } else {
                i += 1;
            }
        }
    }
}

/// Tight bounds of a canonical band list.
pub(crate) fn bounds_of(bands: &[Band]) -> Option<Rect> {
    let (first, last) = (bands.first()?, bands.last()?);
    let mut left = i32::MAX;
    let mut right = i32::MIN;
    for band in bands {
        if let (Some(l), Some(r)) = (band.spans.first(), band.spans.last()) {
            left = left.min(l.left);
            right = right.max(r.right);
        }
    }
    Some(Rect::new(first.top, left, last.bottom, right))
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl Extend<Rect> for Region {
    fn extend<I: IntoIterator<Item = Rect>>(&mut self, iter: I) {
        for rect in iter {
            self.add(rect);
        }
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        let mut region = Self::new();
        region.extend(iter);
        region
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            None => return writeln!(f, "empty region"),
            Some(bounds) => writeln!(f, "region bounds {bounds}, {} bands", self.bands.len())?,
        }
        for band in &self.bands {
            write!(f, "  [{}, {}):", band.top, band.bottom)?;
            for span in &band.spans {
                write!(f, " [{}, {})", span.left, span.right)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
