// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Closed Interval Math
//!
//! A closed interval `[start, end]` over an ordered scalar type, where an
//! inverted pair (`start > end`) is a legal "invalid" sentinel rather than
//! a construction error. Invalid ranges fall out naturally from failed
//! intersections and serve as the identity for min/max accumulation via
//! [`Range::include`].
//!
//! ## Highlights
//!
//! - Validity, clamping, interpolation, and distance queries.
//! - Modular (wrap-around) arithmetic for angle-like quantities: fast-path
//!   normalization, wild-value normalization, and signed differences under
//!   five directional policies ([`ModularDirection`]).
//! - Batch set operations: all-pairs intersection with optional gap
//!   collection, epsilon-tolerant value filtering, longest/shortest
//!   selection.
//! - Operator sugar: `&` for intersection, `*` for scaling.
//!
//! ## Contract
//!
//! Length-dependent operations (`length`, `middle`, `lerp`, the modular
//! family, ...) are undefined on invalid ranges. This is deliberate: these
//! calls sit on the per-frame hot path and callers are expected to check
//! [`Range::valid`] only where invalidity is actually possible. Debug
//! builds assert the documented preconditions; release builds do not pay
//! for them.

use crate::num::RangeScalar;
use num_traits::Float;
use smallvec::SmallVec;
use std::ops::{BitAnd, Mul};

/// Under modular arithmetic there are two paths from one value to another:
/// one that goes directly and one that wraps around. This enum selects
/// which path a modular difference should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModularDirection {
    /// Whichever of the two paths has the smaller magnitude.
    Closest,
    /// Whichever of the two paths has the larger magnitude.
    Farthest,
    /// The path that travels in the positive direction.
    Positive,
    /// The path that travels in the negative direction.
    Negative,
    /// The plain, unwrapped difference `b - a`.
    Direct,
}

/// A closed interval `[start, end]` on a number line.
///
/// A range is *valid* if `start <= end`, i.e. it contains at least one
/// number. Invalid ranges are legal values (see the module docs); use
/// [`Range::valid`] to check before calling length-dependent operations.
///
/// # Examples
///
/// ```rust
/// # use animath::math::range::Range;
/// let r = Range::new(0.0_f32, 2.0);
/// assert!(r.valid());
/// assert_eq!(r.length(), 2.0);
/// assert_eq!(r.middle(), 1.0);
/// assert_eq!(r.clamp(3.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T>
where
    T: RangeScalar,
{
    start: T,
    end: T,
}

#[inline]
fn min_scalar<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
fn max_scalar<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T> Range<T>
where
    T: RangeScalar,
{
    /// Creates a new range. No validation is performed: `start > end` is a
    /// legal invalid range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// assert!(Range::new(0, 10).valid());
    /// assert!(!Range::new(10, 0).valid());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Creates a valid range from two endpoints in either order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// assert_eq!(Range::from_unordered(5, 2), Range::new(2, 5));
    /// ```
    #[inline]
    pub fn from_unordered(a: T, b: T) -> Self {
        Self::new(min_scalar(a, b), max_scalar(a, b))
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Overrides the start bound.
    #[inline]
    pub fn set_start(&mut self, start: T) {
        self.start = start;
    }

    /// Overrides the end bound.
    #[inline]
    pub fn set_end(&mut self, end: T) {
        self.end = end;
    }

    /// A range is valid if it contains at least one number.
    #[inline]
    pub fn valid(&self) -> bool {
        self.start <= self.end
    }

    /// Returns the span of the range. Returns 0 when only one number is in
    /// the range. Behavior is undefined for invalid ranges.
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start
    }

    /// Returns the midpoint of the range, rounded down for integers.
    /// Behavior is undefined for invalid ranges.
    #[inline]
    pub fn middle(&self) -> T {
        (self.start + self.end) / (T::one() + T::one())
    }

    /// Returns `true` if `x` lies inside `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let r = Range::new(0.0_f32, 1.0);
    /// assert!(r.contains(0.0));
    /// assert!(r.contains(1.0));
    /// assert!(!r.contains(1.5));
    /// ```
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        self.start <= x && x <= self.end
    }

    /// Returns `x` if it is within the range; otherwise returns whichever
    /// bound is closer to `x`. Behavior is undefined for invalid ranges.
    #[inline]
    pub fn clamp(&self, x: T) -> T {
        if x < self.start {
            self.start
        } else if x > self.end {
            self.end
        } else {
            x
        }
    }

    /// Clamps `x` against the start bound only. Saves a comparison when the
    /// caller already knows `x` is inside the end bound.
    #[inline]
    pub fn clamp_after_start(&self, x: T) -> T {
        max_scalar(x, self.start)
    }

    /// Clamps `x` against the end bound only. Saves a comparison when the
    /// caller already knows `x` is inside the start bound.
    #[inline]
    pub fn clamp_before_end(&self, x: T) -> T {
        min_scalar(x, self.end)
    }

    /// Swaps start and end. When `a` and `b` do not overlap, inverting the
    /// result of [`Range::intersect`] gives the gap between `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let a = Range::new(0.0_f32, 1.0);
    /// let b = Range::new(3.0_f32, 4.0);
    /// let gap = a.intersect(b).invert();
    /// assert_eq!(gap, Range::new(1.0, 3.0));
    /// ```
    #[inline]
    pub fn invert(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns the smallest range containing both `x` and this range.
    ///
    /// Seeded from [`Range::empty`], this accumulates a running min/max.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let bounds = Range::<f32>::empty().include(3.0).include(-1.0);
    /// assert_eq!(bounds, Range::new(-1.0, 3.0));
    /// ```
    #[inline]
    pub fn include(&self, x: T) -> Self {
        Self::new(min_scalar(self.start, x), max_scalar(self.end, x))
    }

    /// Returns the overlap of `self` and `other`, or an invalid range if
    /// they do not overlap at all.
    ///
    /// The single formula `(max(starts), min(ends))` covers every case;
    /// when the inputs are disjoint the result is invalid, and calling
    /// [`Range::invert`] on it yields the gap between the two inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let a = Range::new(0, 10);
    /// let b = Range::new(5, 15);
    /// assert_eq!(a.intersect(b), Range::new(5, 10));
    /// assert!(!Range::new(0, 1).intersect(Range::new(2, 3)).valid());
    /// ```
    #[inline]
    pub fn intersect(&self, other: Self) -> Self {
        Self::new(
            max_scalar(self.start, other.start),
            min_scalar(self.end, other.end),
        )
    }

    /// Intersects every element of `a` with every element of `b`,
    /// appending valid intersections to `intersections`. If `gaps` is
    /// supplied, each failed intersection is inverted and appended there,
    /// yielding the gap between the corresponding pair.
    ///
    /// Neither output is cleared at the start of the call, so results can
    /// be accumulated across calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// # use smallvec::SmallVec;
    /// let a = [Range::new(0.0_f32, 2.0)];
    /// let b = [Range::new(1.0_f32, 3.0), Range::new(5.0, 6.0)];
    /// let mut overlaps: SmallVec<[Range<f32>; 4]> = SmallVec::new();
    /// let mut gaps: SmallVec<[Range<f32>; 4]> = SmallVec::new();
    /// Range::intersect_ranges(&a, &b, &mut overlaps, Some(&mut gaps));
    /// assert_eq!(overlaps.as_slice(), [Range::new(1.0, 2.0)]);
    /// assert_eq!(gaps.as_slice(), [Range::new(2.0, 5.0)]);
    /// ```
    pub fn intersect_ranges<A, B>(
        a: &[Self],
        b: &[Self],
        intersections: &mut SmallVec<A>,
        mut gaps: Option<&mut SmallVec<B>>,
    ) where
        A: smallvec::Array<Item = Self>,
        B: smallvec::Array<Item = Self>,
    {
        for &range_a in a {
            for &range_b in b {
                let intersection = range_a.intersect(range_b);
                if intersection.valid() {
                    intersections.push(intersection);
                } else if let Some(gaps) = gaps.as_deref_mut() {
                    gaps.push(intersection.invert());
                }
            }
        }
    }

    /// Returns the index of the longest range in `ranges`. Ties go to the
    /// first-seen range. Returns 0 for an empty slice.
    pub fn index_of_longest(ranges: &[Self]) -> usize {
        let mut longest_length: Option<T> = None;
        let mut longest_index = 0;
        for (i, range) in ranges.iter().enumerate() {
            let length = range.length();
            if longest_length.map_or(true, |best| length > best) {
                longest_length = Some(length);
                longest_index = i;
            }
        }
        longest_index
    }

    /// Returns the index of the shortest range in `ranges`. Ties go to the
    /// first-seen range. Returns 0 for an empty slice.
    pub fn index_of_shortest(ranges: &[Self]) -> usize {
        let mut shortest_length: Option<T> = None;
        let mut shortest_index = 0;
        for (i, range) in ranges.iter().enumerate() {
            let length = range.length();
            if shortest_length.map_or(true, |best| length < best) {
                shortest_length = Some(length);
                shortest_index = i;
            }
        }
        shortest_index
    }
}

impl<T> Range<T>
where
    T: RangeScalar + Float,
{
    /// Returns the complete range. Every finite value is contained in it.
    #[inline]
    pub fn full() -> Self {
        Self::new(T::neg_infinity(), T::infinity())
    }

    /// Returns the most empty range possible: the lower bound is greater
    /// than everything and the upper bound is less than everything.
    /// Useful as the seed when accumulating bounds with [`Range::include`].
    #[inline]
    pub fn empty() -> Self {
        Self::new(T::infinity(), T::neg_infinity())
    }

    /// Returns the distance of `x` from the range: 0 inside the range,
    /// otherwise the absolute distance to the nearer bound.
    /// Behavior is undefined for invalid ranges.
    #[inline]
    pub fn distance_from(&self, x: T) -> T {
        (x - self.clamp(x)).abs()
    }

    /// Lerps between start and end. A `percent` of 0 returns the start, a
    /// `percent` of 1 returns the end. Behavior is undefined for invalid
    /// ranges.
    #[inline]
    pub fn lerp(&self, percent: T) -> T {
        self.start + self.length() * percent
    }

    /// Returns the position of `x` as a percentage from start to end.
    /// *Not* clamped to `[0, 1]`: values outside are meaningful
    /// extrapolation. `0` is the start, `1` the end, `-1` one length
    /// before the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let r = Range::new(2.0_f32, 4.0);
    /// assert_eq!(r.percent(3.0), 0.5);
    /// assert_eq!(r.percent(6.0), 2.0);
    /// ```
    #[inline]
    pub fn percent(&self, x: T) -> T {
        (x - self.start) / self.length()
    }

    /// Same as [`Range::percent`] but clamped to `[0, 1]`.
    #[inline]
    pub fn percent_clamped(&self, x: T) -> T {
        let percent = self.percent(x);
        if percent < T::zero() {
            T::zero()
        } else if percent > T::one() {
            T::one()
        } else {
            percent
        }
    }

    /// Returns the amount to add to `x` to bring it inside the range under
    /// modular arithmetic:
    ///
    /// - `length()` if `x` is at or below the start,
    /// - `-length()` if `x` is above the end,
    /// - 0 if `x` is already inside.
    ///
    /// `x` must be within one `length()` of the bounds; debug builds
    /// assert this.
    #[inline]
    pub fn modular_adjustment(&self, x: T) -> T {
        let length = self.length();
        let adjustment = if x <= self.start {
            length
        } else if x > self.end {
            -length
        } else {
            T::zero()
        };
        debug_assert!(self.start < x + adjustment && x + adjustment <= self.end);
        adjustment
    }

    /// Brings `x` inside the range by adding exactly `length()`,
    /// `-length()`, or 0. This is the O(1) fast path; `x` must already be
    /// within one `length()` of the bounds, which holds after a single
    /// arithmetic operation on in-range values. For arbitrary `x`, use
    /// [`Range::normalize_wild_value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let angles = Range::new(-180.0_f32, 180.0);
    /// assert_eq!(angles.normalize(200.0), -160.0);
    /// ```
    #[inline]
    pub fn normalize(&self, x: T) -> T {
        x + self.modular_adjustment(x)
    }

    /// Brings an arbitrary `x` inside the range by removing whole
    /// multiples of `length()`.
    ///
    /// Uses (expensive) division to estimate how many lengths away `x`
    /// sits, then falls back to [`Range::normalize`] since floating-point
    /// error can leave the quotient-adjusted value slightly outside the
    /// bounds.
    pub fn normalize_wild_value(&self, x: T) -> T {
        let length = self.length();
        let units = (x - self.start) / length;
        let whole_units = units.floor();

        let close = x - whole_units * length;
        close + self.modular_adjustment(close)
    }

    /// Returns the closest difference from `a` to `b` under modular
    /// arithmetic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let r = Range::new(0.0_f32, 1.0);
    /// // Wrapping from 0.9 up through 1.0 to 0.1 is shorter than going
    /// // directly back by -0.8.
    /// assert!((r.mod_diff_close(0.9, 0.1) - 0.2).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn mod_diff_close(&self, a: T, b: T) -> T {
        self.normalize(b - a)
    }

    /// Returns the farthest difference from `a` to `b` under modular
    /// arithmetic.
    #[inline]
    pub fn mod_diff_far(&self, a: T, b: T) -> T {
        let length = self.length();
        let close = self.mod_diff_close(a, b);
        if close >= T::zero() {
            close - length
        } else {
            close + length
        }
    }

    /// Returns the difference from `a` to `b` under modular arithmetic
    /// that travels in the positive direction.
    #[inline]
    pub fn mod_diff_positive(&self, a: T, b: T) -> T {
        let length = self.length();
        let close = self.mod_diff_close(a, b);
        if close >= T::zero() {
            close
        } else {
            close + length
        }
    }

    /// Returns the difference from `a` to `b` under modular arithmetic
    /// that travels in the negative direction.
    #[inline]
    pub fn mod_diff_negative(&self, a: T, b: T) -> T {
        let length = self.length();
        let close = self.mod_diff_close(a, b);
        if close >= T::zero() {
            close - length
        } else {
            close
        }
    }

    /// Returns the difference from `a` to `b` that satisfies the given
    /// `direction` policy. Generic steering logic (e.g. shortest turn
    /// direction) dispatches through this.
    pub fn mod_diff(&self, a: T, b: T, direction: ModularDirection) -> T {
        match direction {
            ModularDirection::Closest => self.mod_diff_close(a, b),
            ModularDirection::Farthest => self.mod_diff_far(a, b),
            ModularDirection::Positive => self.mod_diff_positive(a, b),
            ModularDirection::Negative => self.mod_diff_negative(a, b),
            ModularDirection::Direct => b - a,
        }
    }

    /// Returns a range that is `percent` longer, expanded symmetrically
    /// around the midpoint. A negative `percent` contracts the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// let r = Range::new(0.0_f32, 10.0);
    /// assert_eq!(r.lengthen(0.2), Range::new(-1.0, 11.0));
    /// ```
    #[inline]
    pub fn lengthen(&self, percent: T) -> Self {
        let extra = self.length() * percent / (T::one() + T::one());
        Self::new(self.start - extra, self.end + extra)
    }

    /// Keeps only the entries of `values` that lie within `epsilon` of the
    /// range, clamping each kept entry to the range.
    ///
    /// Floating-point error can put a value slightly outside a range even
    /// though mathematically it belongs inside; this often happens to
    /// roots that land exactly on a region boundary. Filtering with a
    /// small `epsilon` absorbs that error instead of spuriously dropping
    /// the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::range::Range;
    /// # use smallvec::{smallvec, SmallVec};
    /// let r = Range::new(0.0_f32, 1.0);
    /// let mut values: SmallVec<[f32; 2]> = smallvec![-1e-7, 2.0];
    /// r.values_in_range(1e-6, &mut values);
    /// // The near-boundary value is snapped to 0; the far value is gone.
    /// assert_eq!(values.as_slice(), [0.0]);
    /// ```
    pub fn values_in_range<A>(&self, epsilon: T, values: &mut SmallVec<A>)
    where
        A: smallvec::Array<Item = T>,
    {
        let mut kept = 0;
        for i in 0..values.len() {
            let value = values[i];
            let clamped = self.clamp(value);
            if (value - clamped).abs() <= epsilon {
                values[kept] = clamped;
                kept += 1;
            }
        }
        values.truncate(kept);
    }
}

/// The default range is invalid, matching an uninitialized interval.
impl<T> Default for Range<T>
where
    T: RangeScalar,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::one(), T::zero())
    }
}

/// Intersection via the `&` operator. The result may be invalid; see
/// [`Range::intersect`].
impl<T> BitAnd for Range<T>
where
    T: RangeScalar,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

/// Scales both bounds by a scalar.
impl<T> Mul<T> for Range<T>
where
    T: RangeScalar,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.start * rhs, self.end * rhs)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Range<T>
where
    T: RangeScalar,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: RangeScalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_construction_and_validity() {
        let r = Range::new(1.0_f32, 3.0);
        assert_eq!(r.start(), 1.0);
        assert_eq!(r.end(), 3.0);
        assert!(r.valid());

        // A single point is a valid range of length zero.
        assert!(Range::new(2.0_f32, 2.0).valid());
        assert_eq!(Range::new(2.0_f32, 2.0).length(), 0.0);

        // Inverted bounds are a legal invalid range.
        assert!(!Range::new(3.0_f32, 1.0).valid());
        assert!(!Range::<f32>::default().valid());
    }

    #[test]
    fn test_from_unordered() {
        assert_eq!(Range::from_unordered(5, 2), Range::new(2, 5));
        assert_eq!(Range::from_unordered(2, 5), Range::new(2, 5));
    }

    #[test]
    fn test_length_and_middle() {
        let r = Range::new(-2.0_f32, 6.0);
        assert_eq!(r.length(), 8.0);
        assert_eq!(r.middle(), 2.0);

        // Integer middle rounds down.
        assert_eq!(Range::new(0, 5).middle(), 2);
    }

    #[test]
    fn test_clamp() {
        let r = Range::new(0.0_f32, 1.0);
        assert_eq!(r.clamp(-0.5), 0.0);
        assert_eq!(r.clamp(0.25), 0.25);
        assert_eq!(r.clamp(1.5), 1.0);

        assert_eq!(r.clamp_after_start(-0.5), 0.0);
        assert_eq!(r.clamp_after_start(0.5), 0.5);
        assert_eq!(r.clamp_before_end(1.5), 1.0);
        assert_eq!(r.clamp_before_end(0.5), 0.5);
    }

    #[test]
    fn test_distance_from() {
        let r = Range::new(0.0_f32, 1.0);
        assert_eq!(r.distance_from(0.5), 0.0);
        assert_eq!(r.distance_from(-2.0), 2.0);
        assert_eq!(r.distance_from(1.25), 0.25);
    }

    #[test]
    fn test_lerp_and_percent() {
        let r = Range::new(2.0_f32, 4.0);
        assert_eq!(r.lerp(0.0), 2.0);
        assert_eq!(r.lerp(0.5), 3.0);
        assert_eq!(r.lerp(1.0), 4.0);

        assert_eq!(r.percent(3.0), 0.5);
        // Percent is deliberately unclamped: extrapolation is meaningful.
        assert_eq!(r.percent(6.0), 2.0);
        assert_eq!(r.percent(0.0), -1.0);

        assert_eq!(r.percent_clamped(6.0), 1.0);
        assert_eq!(r.percent_clamped(0.0), 0.0);
        assert_eq!(r.percent_clamped(3.0), 0.5);
    }

    #[test]
    fn test_normalize() {
        let r = Range::new(-180.0_f32, 180.0);
        assert_eq!(r.normalize(200.0), -160.0);
        assert_eq!(r.normalize(-190.0), 170.0);
        assert_eq!(r.normalize(10.0), 10.0);
        // The start bound itself wraps up to the end bound.
        assert_eq!(r.normalize(-180.0), 180.0);
    }

    #[test]
    fn test_normalize_wild_value() {
        let r = Range::new(-180.0_f32, 180.0);
        assert_eq!(r.normalize_wild_value(360.0 * 3.0 + 10.0), 10.0);
        assert_eq!(r.normalize_wild_value(-360.0 * 5.0 - 20.0), -20.0);
        assert_eq!(r.normalize_wild_value(40.0), 40.0);
    }

    #[test]
    fn test_mod_diff_wraps_when_shorter() {
        let r = Range::new(0.0_f32, 1.0);
        // Wrapping is shorter than the direct -0.8.
        assert!((r.mod_diff_close(0.9, 0.1) - 0.2).abs() < 1e-6);
        assert!((r.mod_diff(0.9, 0.1, ModularDirection::Direct) + 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_mod_diff_close_has_smallest_magnitude() {
        let r = Range::new(-180.0_f32, 180.0);
        let pairs = [(170.0, -170.0), (-10.0, 30.0), (90.0, -90.0), (5.0, 5.0)];
        for &(a, b) in &pairs {
            let close = r.mod_diff_close(a, b).abs();
            assert!(close <= r.mod_diff_far(a, b).abs());
            assert!(close <= r.mod_diff_positive(a, b).abs());
            assert!(close <= r.mod_diff_negative(a, b).abs());
        }
    }

    #[test]
    fn test_mod_diff_signs() {
        let r = Range::new(-180.0_f32, 180.0);
        assert!(r.mod_diff_positive(170.0, -170.0) >= 0.0);
        assert!(r.mod_diff_positive(-170.0, 170.0) >= 0.0);
        assert!(r.mod_diff_negative(170.0, -170.0) <= 0.0);
        assert!(r.mod_diff_negative(-170.0, 170.0) <= 0.0);
    }

    #[test]
    fn test_mod_diff_round_trip() {
        let r = Range::new(-180.0_f32, 180.0);
        let pairs = [(170.0, -170.0), (-10.0, 30.0), (100.0, -40.0)];
        for &(a, b) in &pairs {
            let diff = r.mod_diff_close(a, b);
            let back = r.normalize(a + diff);
            assert!((back - b).abs() < 1e-4, "a={a} b={b} back={back}");
        }
    }

    #[test]
    fn test_invert_and_gap() {
        let a = Range::new(0.0_f32, 1.0);
        let b = Range::new(3.0_f32, 4.0);

        let intersection = a.intersect(b);
        assert!(!intersection.valid());
        assert_eq!(intersection.invert(), Range::new(1.0, 3.0));

        // Order of the arguments does not matter.
        assert_eq!(b.intersect(a).invert(), Range::new(1.0, 3.0));
    }

    #[test]
    fn test_intersect_identity_and_overlap() {
        let a = Range::new(-1.0_f32, 2.0);
        assert_eq!(a.intersect(a), a);

        let b = Range::new(0.0_f32, 5.0);
        assert_eq!(a.intersect(b), Range::new(0.0, 2.0));

        // Containment returns the inner range.
        let inner = Range::new(0.0_f32, 1.0);
        assert_eq!(a.intersect(inner), inner);

        // Operator form.
        assert_eq!(a & b, Range::new(0.0, 2.0));
    }

    #[test]
    fn test_lengthen() {
        let r = Range::new(0.0_f32, 10.0);
        assert_eq!(r.lengthen(0.2), Range::new(-1.0, 11.0));
        // Negative percent contracts.
        assert_eq!(r.lengthen(-0.2), Range::new(1.0, 9.0));
    }

    #[test]
    fn test_include_from_empty() {
        let mut bounds = Range::<f32>::empty();
        assert!(!bounds.valid());

        bounds = bounds.include(2.0);
        assert_eq!(bounds, Range::new(2.0, 2.0));

        bounds = bounds.include(-3.0).include(1.0);
        assert_eq!(bounds, Range::new(-3.0, 2.0));
    }

    #[test]
    fn test_full_contains_everything() {
        let full = Range::<f32>::full();
        for x in [-1e30_f32, -1.0, 0.0, 1.0, 1e30] {
            assert!(full.contains(x));
        }
        assert!(!Range::<f32>::empty().contains(0.0));
    }

    #[test]
    fn test_values_in_range_snaps_boundaries() {
        let r = Range::new(0.0_f32, 1.0);
        let mut values: SmallVec<[f32; 4]> = smallvec![-1e-7, 0.5, 1.0 + 1e-7, 2.0];
        r.values_in_range(1e-6, &mut values);
        assert_eq!(values.as_slice(), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_intersect_ranges_all_pairs() {
        let a = [Range::new(0.0_f32, 2.0), Range::new(4.0, 6.0)];
        let b = [Range::new(1.0_f32, 5.0)];

        let mut intersections: SmallVec<[Range<f32>; 4]> = SmallVec::new();
        Range::intersect_ranges(
            &a,
            &b,
            &mut intersections,
            None::<&mut SmallVec<[Range<f32>; 4]>>,
        );
        assert_eq!(
            intersections.as_slice(),
            [Range::new(1.0, 2.0), Range::new(4.0, 5.0)]
        );
    }

    #[test]
    fn test_intersect_ranges_collects_gaps() {
        let a = [Range::new(0.0_f32, 1.0)];
        let b = [Range::new(3.0_f32, 4.0), Range::new(0.5, 2.0)];

        let mut intersections: SmallVec<[Range<f32>; 4]> = SmallVec::new();
        let mut gaps: SmallVec<[Range<f32>; 4]> = SmallVec::new();
        Range::intersect_ranges(&a, &b, &mut intersections, Some(&mut gaps));

        assert_eq!(intersections.as_slice(), [Range::new(0.5, 1.0)]);
        assert_eq!(gaps.as_slice(), [Range::new(1.0, 3.0)]);
    }

    #[test]
    fn test_intersect_ranges_appends() {
        let a = [Range::new(0.0_f32, 1.0)];
        let mut intersections: SmallVec<[Range<f32>; 4]> = smallvec![Range::new(9.0, 10.0)];
        Range::intersect_ranges(
            &a,
            &a,
            &mut intersections,
            None::<&mut SmallVec<[Range<f32>; 4]>>,
        );
        assert_eq!(
            intersections.as_slice(),
            [Range::new(9.0, 10.0), Range::new(0.0, 1.0)]
        );
    }

    #[test]
    fn test_index_of_longest_and_shortest() {
        let ranges = [
            Range::new(0.0_f32, 1.0),
            Range::new(0.0, 4.0),
            Range::new(0.0, 4.0),
            Range::new(0.0, 0.5),
            Range::new(0.0, 0.5),
        ];
        // Ties are first-seen-wins.
        assert_eq!(Range::index_of_longest(&ranges), 1);
        assert_eq!(Range::index_of_shortest(&ranges), 3);

        assert_eq!(Range::<f32>::index_of_longest(&[]), 0);
        assert_eq!(Range::<f32>::index_of_shortest(&[]), 0);
    }

    #[test]
    fn test_scale_operator() {
        let r = Range::new(1.0_f32, 2.0) * 3.0;
        assert_eq!(r, Range::new(3.0, 6.0));
    }

    #[test]
    fn test_from_range_inclusive() {
        let r: Range<f32> = (0.5..=1.5).into();
        assert_eq!(r, Range::new(0.5, 1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Range::new(1, 4)), "[1, 4]");
    }
}
