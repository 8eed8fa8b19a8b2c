//! Exact integer weight arithmetic and the "no path" sentinel.
//!
//! Every engine performs its comparisons on [`Weight`] so that equal-weight
//! tie-breaks are exact; floating point never enters the algorithms. The
//! [`INFINITY`] sentinel stands in for "no direct edge" in matrices and
//! "unreachable" in distance vectors, and [`relaxed_add`] guarantees that no
//! sum involving it ever wraps past it.

/// Exact integer edge weight and path distance.
pub type Weight = i64;

/// Sentinel weight meaning "no direct edge" or "no known path".
///
/// No legitimate edge weight or computed distance reaches this magnitude;
/// [`AdjacencyMatrix`](crate::AdjacencyMatrix) construction and edge
/// validation reject weights at or beyond it. The value is `10^18`, which is
/// exactly representable in `f64` so it round-trips unchanged through the
/// [`boundary`](crate::boundary) layer.
pub const INFINITY: Weight = 1_000_000_000_000_000_000;

/// Adds a tentative distance and an edge weight for relaxation and
/// accumulation.
///
/// Any sum involving [`INFINITY`], or that would reach it, yields
/// [`INFINITY`] instead of wrapping; sums that would fall to or below the
/// negative sentinel clamp to `-INFINITY`. Relaxation against an absent edge
/// or an unreachable vertex therefore never beats a real candidate, and
/// accumulated totals never wrap past a sentinel in either direction. Both
/// clamps are sticky: once a running total reaches a sentinel it stays
/// there.
///
/// # Examples
/// ```
/// use densepath_core::{INFINITY, relaxed_add};
///
/// assert_eq!(relaxed_add(3, 4), 7);
/// assert_eq!(relaxed_add(INFINITY, -5), INFINITY);
/// assert_eq!(relaxed_add(INFINITY - 1, 10), INFINITY);
/// assert_eq!(relaxed_add(-INFINITY, -7), -INFINITY);
/// ```
#[must_use]
pub const fn relaxed_add(distance: Weight, weight: Weight) -> Weight {
    if distance >= INFINITY || weight >= INFINITY {
        return INFINITY;
    }
    let sum = distance.saturating_add(weight);
    if sum >= INFINITY {
        INFINITY
    } else if sum <= -INFINITY {
        -INFINITY
    } else {
        sum
    }
}

/// Returns `true` when `distance` denotes a real, reachable value.
#[must_use]
pub(crate) const fn is_reachable(distance: Weight) -> bool {
    distance < INFINITY
}
