// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from `kurbo` geometry.

use crate::rect::Rect;
use crate::region::Region;

impl From<Rect> for kurbo::Rect {
    #[inline]
    fn from(r: Rect) -> Self {
        Self::new(
            f64::from(r.left),
            f64::from(r.top),
            f64::from(r.right),
            f64::from(r.bottom),
        )
    }
}

impl Rect {
    /// The smallest integer rectangle covering a `kurbo::Rect`.
    ///
    /// The input is normalized first, and coordinates outside the `i32` range saturate.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Float to int `as` casts saturate, which is the intended clamping."
    )]
    pub fn from_kurbo_outer(r: kurbo::Rect) -> Self {
        let r = r.abs().expand();
        Self::new(r.y0 as i32, r.x0 as i32, r.y1 as i32, r.x1 as i32)
    }
}

impl Region {
    /// Iterate the region as `kurbo` rectangles, for handing damage to a kurbo-based renderer.
    pub fn to_kurbo_rects(&self) -> impl Iterator<Item = kurbo::Rect> + '_ {
        self.rects().map(kurbo::Rect::from)
    }
}
