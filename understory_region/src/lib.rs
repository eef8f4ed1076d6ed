// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_region --heading-base-level=0

//! Understory Region: canonical 2D integer regions for damage and clip tracking.
//!
//! A [`Region`] is an arbitrary set of integer points that can be written as a
//! finite union of axis-aligned rectangles. It is the structure a display
//! pipeline uses to accumulate damage, intersect it with a clip, and ask cheap
//! questions such as "does this node's area need repainting at all?".
//!
//! - Add rectangles in place with [`Region::add`]; zero-area rectangles are ignored.
//! - Combine regions with [`Region::intersect`], [`Region::union`],
//!   [`Region::subtract`], and [`Region::xor`].
//! - Query with [`Region::is_empty`], [`Region::is_equal`], [`Region::intersects`],
//!   [`Region::contains`], and the combined [`Region::test`].
//!
//! ## Canonical form
//!
//! Regions are stored as horizontal bands sorted by `top`, each holding sorted
//! spans. Spans that overlap or touch are fused, and vertically abutting bands
//! with identical spans are merged. Each point set therefore has exactly one
//! representation, so equality is a structural comparison and never needs a
//! geometric fallback. [`Region::validate`] checks these invariants and reports
//! the first one that is broken.
//!
//! Rectangles are half-open: `Rect::new(top, left, bottom, right)` covers the
//! points with `left <= x < right` and `top <= y < bottom`. Two rectangles that
//! share only an edge do not intersect, and adding both yields one fused shape.
//!
//! ## Overlap classification
//!
//! [`Region::test`] computes any subset of three facts about a pair of regions
//! in a single sweep, stopping as soon as the requested facts are known:
//!
//! - [`TestFlags::SHARED`]: the regions have a point in common.
//! - [`TestFlags::LEFT_EXCLUSIVE`]: the left region has points outside the right one.
//! - [`TestFlags::RIGHT_EXCLUSIVE`]: the right region has points outside the left one.
//!
//! # Example
//!
//! ```rust
//! use understory_region::{Rect, Region, TestFlags};
//!
//! let mut damage = Region::new();
//! damage.add(Rect::new(100, 100, 200, 200));
//! damage.add(Rect::new(300, 300, 400, 400));
//!
//! let mut clip = Region::from_rect(Rect::new(150, 150, 350, 350));
//! assert!(damage.intersects(&clip));
//! assert!(!damage.contains(&clip));
//!
//! clip.intersect(&damage);
//! assert_eq!(clip.rect_count(), 2);
//! assert_eq!(
//!     damage.test(&clip, TestFlags::all()),
//!     TestFlags::SHARED | TestFlags::LEFT_EXCLUSIVE
//! );
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: forwards `std` to optional dependencies. The crate itself is always `no_std`.
//! - `libm`: forwards `libm` to `kurbo` for `no_std` builds.
//! - `kurbo`: conversions between [`Rect`] and `kurbo::Rect`.
//! - `tracing`: emits `tracing` events when [`Region::is_valid`] finds a broken
//!   invariant (`debug`) and when a boolean operation short-circuits on disjoint
//!   bounds (`trace`).
//!
//! ## Threading
//!
//! A region is plain owned data with no interior mutability. It is `Send` and
//! `Sync`; sharing one between threads for mutation needs external locking.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

/// Emit a `tracing` trace event when the `tracing` feature is enabled.
macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
        #[cfg(not(feature = "tracing"))]
        let _ = format_args!($($arg)*);
    };
}

/// Emit a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
        #[cfg(not(feature = "tracing"))]
        let _ = format_args!($($arg)*);
    };
}

pub(crate) use {log_debug, log_trace};

mod band;
#[cfg(feature = "kurbo")]
mod kurbo_interop;
mod ops;
#[cfg(test)]
mod oracle;
mod overlap;
mod rect;
mod region;
mod validate;

pub use band::{Band, Span};
pub use overlap::TestFlags;
pub use rect::Rect;
pub use region::Region;
pub use validate::InvalidRegion;
