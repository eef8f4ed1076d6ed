// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer rectangles, the unit of insertion into a [`Region`](crate::Region).

use core::fmt;

/// An axis-aligned integer rectangle.
///
/// Rectangles are half-open: the point `(x, y)` is covered iff
/// `left <= x < right` and `top <= y < bottom`. A rectangle with
/// `top == bottom` or `left == right` covers nothing.
///
/// Constructors take their bounds in `top, left, bottom, right` order, the
/// order a band-based region stores them in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Minimum y (inclusive).
    pub top: i32,
    /// Minimum x (inclusive).
    pub left: i32,
    /// Maximum y (exclusive).
    pub bottom: i32,
    /// Maximum x (exclusive).
    pub right: i32,
}

impl Rect {
    /// Create a rectangle from its bounds.
    ///
    /// No validation happens here; see [`Rect::is_valid`].
    #[inline(always)]
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            top: y,
            left: x,
            bottom: y + height,
            right: x + width,
        }
    }

    /// Whether the bounds are well-formed: `top <= bottom` and `left <= right`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.top <= self.bottom && self.left <= self.right
    }

    /// Whether the rectangle covers no points (zero or negative area).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bottom <= self.top || self.right <= self.left
    }

    /// Width of the rectangle, `right - left`.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the rectangle, `bottom - top`.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Whether the half-open rectangle covers the point.
    #[inline]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }

    /// Whether the two rectangles share at least one point.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Whether `other` lies entirely within this rectangle.
    #[inline]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// The smallest rectangle enclosing both rectangles.
    #[inline]
    pub fn union(&self, other: Self) -> Self {
        Self {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            bottom: self.bottom.max(other.bottom),
            right: self.right.max(other.right),
        }
    }

    /// The rectangle shifted by `(dx, dy)`.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            bottom: self.bottom + dy,
            right: self.right + dx,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
