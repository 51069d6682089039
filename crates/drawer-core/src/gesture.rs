use crate::detent::Detent;
use std::ops::RangeInclusive;

/// Translation a gesture must travel before it counts as a drag.
pub const MIN_DRAG_DISTANCE: f64 = 10.0;

/// Strength of the logarithmic resistance past the valid ratio range.
pub const DAMPING: f64 = 0.2;

/// Compresses `ratio` once it leaves `range`.
///
/// Inside the range this is the identity. Past either bound the ratio keeps
/// creeping outwards along a logarithm, so overscroll is elastic instead of
/// linear. Both branches meet the identity exactly at the bounds.
pub fn damp(ratio: f64, range: &RangeInclusive<f64>) -> f64 {
    let (lo, hi) = (*range.start(), *range.end());

    if ratio > hi {
        DAMPING * (ratio - (hi - 1.0)).ln() + hi
    } else if ratio < lo {
        -DAMPING * (-ratio + (lo + 1.0)).ln() + lo
    } else {
        ratio
    }
}

/// The candidate closest to `ratio`.
///
/// Exact ties go to the candidate yielded first. With no candidates the
/// drawer rests wherever it was released.
pub fn nearest_detent<'a>(ratio: f64, candidates: impl IntoIterator<Item = &'a Detent>) -> Detent {
    candidates
        .into_iter()
        .min_by(|a, b| {
            (a.value() - ratio)
                .abs()
                .total_cmp(&(b.value() - ratio).abs())
        })
        .copied()
        .unwrap_or_else(|| Detent::new(ratio))
}

/// Live drawer state owned by the host.
///
/// Only the drag callbacks on [`crate::layout::Traits`] write to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerState {
    ratio: f64,
    detent: Detent,
}

impl DrawerState {
    pub fn new(detent: Detent) -> Self {
        Self {
            ratio: detent.value(),
            detent,
        }
    }

    /// Live coverage ratio. May sit outside `0.0..=1.0` mid-drag.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Last settled resting position.
    pub fn detent(&self) -> Detent {
        self.detent
    }

    /// A copy showing `ratio`, for rendering a settle animation in flight.
    pub fn presented_at(&self, ratio: f64) -> Self {
        Self {
            ratio,
            detent: self.detent,
        }
    }

    pub(crate) fn drag_to(&mut self, adjusted: f64) {
        self.ratio = damp(adjusted, &Detent::ALL);
    }

    pub(crate) fn settle_at(&mut self, detent: Detent) -> Settle {
        let from = self.ratio;
        self.detent = detent;
        self.ratio = detent.value();
        Settle {
            from,
            to: detent.value(),
            detent,
        }
    }
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new(Detent::default())
    }
}

/// The transition a host animates after a drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    /// Live ratio at release.
    pub from: f64,
    /// Resting ratio; always `detent.value()`.
    pub to: f64,
    pub detent: Detent,
}

impl Settle {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}
