// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural invariant checks for debugging and tests.

use core::fmt;

use crate::rect::Rect;
use crate::region::{Region, bounds_of};

/// The first canonical-form invariant a [`Region`] was found to break.
///
/// Band and span indices refer to [`Region::bands`] and [`Band::spans`](crate::Band::spans).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidRegion {
    /// A band has no height.
    EmptyBand {
        /// Index of the band.
        band: usize,
    },
    /// A band starts before the previous band ends.
    UnorderedBands {
        /// Index of the later band.
        band: usize,
    },
    /// A band holds no spans.
    EmptyBandSpans {
        /// Index of the band.
        band: usize,
    },
    /// A span has no width.
    EmptySpan {
        /// Index of the band.
        band: usize,
        /// Index of the span within the band.
        span: usize,
    },
    /// A span overlaps or touches the previous span of its band.
    UnorderedSpans {
        /// Index of the band.
        band: usize,
        /// Index of the later span.
        span: usize,
    },
    /// A band abuts the previous band and holds the same spans.
    UncoalescedBands {
        /// Index of the later band.
        band: usize,
    },
    /// The cached bounds do not match the bands.
    StaleBounds {
        /// Bounds stored in the region.
        cached: Option<Rect>,
        /// Bounds computed from the bands.
        actual: Option<Rect>,
    },
}

impl fmt::Display for InvalidRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyBand { band } => write!(f, "band {band} has no height"),
            Self::UnorderedBands { band } => {
                write!(f, "band {band} starts before band {} ends", band - 1)
            }
            Self::EmptyBandSpans { band } => write!(f, "band {band} holds no spans"),
            Self::EmptySpan { band, span } => {
                write!(f, "span {span} of band {band} has no width")
            }
            Self::UnorderedSpans { band, span } => write!(
                f,
                "span {span} of band {band} overlaps or touches span {}",
                span - 1
            ),
            Self::UncoalescedBands { band } => write!(
                f,
                "band {band} abuts band {} with identical spans",
                band - 1
            ),
            Self::StaleBounds { cached, actual } => {
                write!(f, "cached bounds {cached:?} differ from actual {actual:?}")
            }
        }
    }
}

impl core::error::Error for InvalidRegion {}

impl Region {
    /// Check every canonical-form invariant, reporting the first one broken.
    ///
    /// This walks the whole region; it is meant for tests and debugging, not
    /// for use on every mutation.
    pub fn validate(&self) -> Result<(), InvalidRegion> {
        for (i, band) in self.bands.iter().enumerate() {
            if band.bottom <= band.top {
                return Err(InvalidRegion::EmptyBand { band: i });
            }
            if band.spans.is_empty() {
                return Err(InvalidRegion::EmptyBandSpans { band: i });
            }
            if i > 0 {
                let prev = &self.bands[i - 1];
                if band.top < prev.bottom {
                    return Err(InvalidRegion::UnorderedBands { band: i });
                }
                if band.top == prev.bottom && band.spans == prev.spans {
                    return Err(InvalidRegion::UncoalescedBands { band: i });
                }
            }
            for (j, span) in band.spans.iter().enumerate() {
                if span.right <= span.left {
                    return Err(InvalidRegion::EmptySpan { band: i, span: j });
                }
                if j > 0 && span.left <= band.spans[j - 1].right {
                    return Err(InvalidRegion::UnorderedSpans { band: i, span: j });
                }
            }
        }
        let actual = bounds_of(&self.bands);
        if self.bounds != actual {
            return Err(InvalidRegion::StaleBounds {
                cached: self.bounds,
                actual,
            });
        }
        Ok(())
    }

    /// Whether the region is in canonical form. See [`Region::validate`].
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(err) => {
                crate::log_debug!("invalid region: {err}");
                false
            }
        }
    }
}
