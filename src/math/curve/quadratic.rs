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

//! # Quadratic Curves
//!
//! A degree-2 polynomial `c2*x^2 + c1*x + c0` with closed-form
//! evaluation, derivatives, root finding, and sign-region extraction.
//!
//! ## Numerical reliability
//!
//! Root classification hinges on the sign of the discriminant, and
//! floating-point rounding can make a mathematically-zero discriminant
//! come out very slightly non-zero. [`QuadraticCurve::reliable_discriminant`]
//! snaps near-zero discriminants to exactly zero before classification,
//! and [`QuadraticCurve::roots_in_range`] filters roots with an
//! epsilon-tolerant range check so boundary roots are not spuriously
//! dropped.

use super::{Curve, EPSILON_SCALE};
use crate::math::range::Range;
use smallvec::SmallVec;

/// The 0, 1, or 2 unique real roots of a quadratic, in ascending order.
pub type RootsArray = SmallVec<[f32; 2]>;

/// The at-most-two sub-ranges on which a quadratic matches a sign.
pub type RangeArray = SmallVec<[Range<f32>; 2]>;

/// Boundary conditions for a quadratic over `x` in `[0, 1]`: a start
/// value, a start slope, and an end value. The remaining coefficient is
/// solved in closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticInitWithStartDerivative {
    /// `f(0)`.
    pub start_y: f32,
    /// `f'(0)`.
    pub start_derivative: f32,
    /// `f(1)`.
    pub end_y: f32,
}

impl QuadraticInitWithStartDerivative {
    /// Creates boundary conditions for a quadratic on `[0, 1]`.
    pub fn new(start_y: f32, start_derivative: f32, end_y: f32) -> Self {
        Self {
            start_y,
            start_derivative,
            end_y,
        }
    }
}

/// A quadratic polynomial `c[2]*x^2 + c[1]*x + c[0]`.
///
/// Coefficients are stored with `c[i]` multiplying `x^i`.
///
/// # Examples
///
/// ```rust
/// # use animath::math::curve::QuadraticCurve;
/// # use animath::math::range::Range;
/// let q = QuadraticCurve::new(1.0, 0.0, -4.0); // x^2 - 4
/// assert_eq!(q.evaluate(3.0), 5.0);
/// assert_eq!(q.roots_in_range(Range::new(-10.0, 10.0)).as_slice(), [-2.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadraticCurve {
    c: [f32; 3],
}

impl QuadraticCurve {
    const NUM_COEFF: usize = 3;

    /// Creates a quadratic from its coefficients, highest power first.
    #[inline]
    pub fn new(c2: f32, c1: f32, c0: f32) -> Self {
        Self { c: [c0, c1, c2] }
    }

    /// Creates a quadratic from a coefficient array where `c[i]`
    /// multiplies `x^i`.
    #[inline]
    pub fn from_coefficients(c: [f32; 3]) -> Self {
        Self { c }
    }

    /// Returns the quadratic's value at `x`: `c2*x^2 + c1*x + c0`.
    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        (self.c[2] * x + self.c[1]) * x + self.c[0]
    }

    /// Returns the quadratic's slope at `x`: `2*c2*x + c1`.
    #[inline]
    pub fn derivative(&self, x: f32) -> f32 {
        2.0 * self.c[2] * x + self.c[1]
    }

    /// Returns the quadratic's constant second derivative, `2*c2`.
    /// `x` is unused but kept for a uniform surface across curve kinds.
    #[inline]
    pub fn second_derivative(&self, _x: f32) -> f32 {
        2.0 * self.c[2]
    }

    /// Returns the quadratic's constant third derivative: 0.
    /// `x` is unused but kept for a uniform surface across curve kinds.
    #[inline]
    pub fn third_derivative(&self, _x: f32) -> f32 {
        0.0
    }

    /// Returns a value below which floating-point arithmetic on this
    /// curve is unreliable: the largest coefficient magnitude scaled down
    /// to f32 significand precision. Tests for zero should compare
    /// against this.
    pub fn epsilon(&self) -> f32 {
        let max_c = self.c[2].abs().max(self.c[1].abs()).max(self.c[0].abs());
        max_c * EPSILON_SCALE
    }

    /// Returns the discriminant `c1^2 - 4*c2*c0`. Its sign classifies the
    /// real-root count.
    #[inline]
    pub fn discriminant(&self) -> f32 {
        self.c[1] * self.c[1] - 4.0 * self.c[2] * self.c[0]
    }

    /// Returns the discriminant, snapped to exactly zero when within
    /// `epsilon` of it. Rounding often leaves a mathematically-zero
    /// discriminant very slightly negative, which would misclassify a
    /// double root as a pair of complex roots.
    pub fn reliable_discriminant(&self, epsilon: f32) -> f32 {
        let discriminant = self.discriminant();
        if discriminant.abs() <= epsilon {
            0.0
        } else {
            discriminant
        }
    }

    /// Returns the `x` at which the derivative is zero.
    ///
    /// Precondition: the curve must be meaningfully quadratic,
    /// `|c2| >= epsilon()`. Violations are programmer errors, asserted in
    /// debug builds.
    #[inline]
    pub fn critical_point(&self) -> f32 {
        debug_assert!(self.c[2].abs() >= self.epsilon());

        // 0 = f'(x) = 2*c2*x + c1  ==>  x = -c1 / 2*c2
        -(self.c[1] / self.c[2]) * 0.5
    }

    /// Returns the x-coordinates where the quadratic is zero, in ascending
    /// order. Only unique roots are returned, so a double root appears
    /// once. Degenerate (linear or constant) coefficients are handled:
    /// a near-linear curve yields at most one root, a near-constant curve
    /// none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::curve::QuadraticCurve;
    /// // (x - 1)^2 has a double root at 1, returned once.
    /// let q = QuadraticCurve::new(1.0, -2.0, 1.0);
    /// assert_eq!(q.roots().as_slice(), [1.0]);
    /// ```
    pub fn roots(&self) -> RootsArray {
        let mut roots = RootsArray::new();
        let epsilon = self.epsilon();

        // A leading coefficient at or below the precision floor means the
        // curve is effectively linear or constant. The strict comparison
        // on c1 keeps the all-zero curve (epsilon of 0) out of the
        // division below.
        if self.c[2].abs() <= epsilon {
            if self.c[1].abs() > epsilon {
                // 0 = c1*x + c0  ==>  x = -c0 / c1
                roots.push(-self.c[0] / self.c[1]);
            }
            return roots;
        }

        let discriminant = self.reliable_discriminant(epsilon);
        if discriminant < 0.0 {
            // Complex roots only.
            return roots;
        }
        if discriminant == 0.0 {
            // Double root at the vertex.
            roots.push(self.critical_point());
            return roots;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let one_over_2c2 = 0.5 / self.c[2];
        let root_a = (-self.c[1] - sqrt_discriminant) * one_over_2c2;
        let root_b = (-self.c[1] + sqrt_discriminant) * one_over_2c2;
        roots.push(root_a.min(root_b));
        roots.push(root_a.max(root_b));
        roots
    }

    /// Returns the roots that fall within `x_limits`, in ascending order.
    /// The range check is epsilon-tolerant, so a root that computes just
    /// outside a boundary is snapped onto it instead of dropped.
    pub fn roots_in_range(&self, x_limits: Range<f32>) -> RootsArray {
        let mut roots = self.roots();
        x_limits.values_in_range(self.epsilon(), &mut roots);
        roots
    }

    /// Partitions `x_limits` into the sub-ranges where the curve's sign
    /// matches the sign of `sign` (its magnitude is ignored). A quadratic
    /// crosses zero at most twice, so at most two sub-ranges match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::curve::QuadraticCurve;
    /// # use animath::math::range::Range;
    /// let q = QuadraticCurve::new(1.0, 0.0, -4.0); // x^2 - 4
    /// let below = q.ranges_below_zero(Range::new(-10.0, 10.0));
    /// assert_eq!(below.as_slice(), [Range::new(-2.0, 2.0)]);
    /// ```
    pub fn ranges_matching_sign(&self, x_limits: Range<f32>, sign: f32) -> RangeArray {
        let roots = self.roots_in_range(x_limits);

        // The roots split x_limits into up to three candidate sub-ranges
        // of alternating sign. Test each candidate at its midpoint.
        let mut matching = RangeArray::new();
        let mut start = x_limits.start();
        for i in 0..=roots.len() {
            let end = if i < roots.len() {
                roots[i]
            } else {
                x_limits.end()
            };
            let sub_range = Range::new(start, end);
            if sub_range.length() > 0.0 && self.evaluate(sub_range.middle()) * sign > 0.0 {
                matching.push(sub_range);
            }
            start = end;
        }
        matching
    }

    /// Returns the sub-ranges of `x_limits` on which the curve is above
    /// zero.
    pub fn ranges_above_zero(&self, x_limits: Range<f32>) -> RangeArray {
        self.ranges_matching_sign(x_limits, 1.0)
    }

    /// Returns the sub-ranges of `x_limits` on which the curve is below
    /// zero.
    pub fn ranges_below_zero(&self, x_limits: Range<f32>) -> RangeArray {
        self.ranges_matching_sign(x_limits, -1.0)
    }

    /// Returns the coefficient of the x-to-the-`i`th-power term.
    #[inline]
    pub fn coeff(&self, i: usize) -> f32 {
        self.c[i]
    }

    /// Returns the number of coefficients in this curve.
    #[inline]
    pub fn num_coeff(&self) -> usize {
        Self::NUM_COEFF
    }
}

/// Solves the coefficients from start value, start slope, and end value
/// over `x` in `[0, 1]`.
impl From<QuadraticInitWithStartDerivative> for QuadraticCurve {
    fn from(init: QuadraticInitWithStartDerivative) -> Self {
        // f(0) = c0            ==>  c0 = y0
        // f'(0) = c1           ==>  c1 = s0
        // f(1) = c2 + c1 + c0  ==>  c2 = y1 - y0 - s0
        Self {
            c: [
                init.start_y,
                init.start_derivative,
                init.end_y - init.start_y - init.start_derivative,
            ],
        }
    }
}

impl Curve for QuadraticCurve {
    fn evaluate(&self, x: f32) -> f32 {
        QuadraticCurve::evaluate(self, x)
    }

    fn derivative(&self, x: f32) -> f32 {
        QuadraticCurve::derivative(self, x)
    }

    fn second_derivative(&self, x: f32) -> f32 {
        QuadraticCurve::second_derivative(self, x)
    }

    fn third_derivative(&self, x: f32) -> f32 {
        QuadraticCurve::third_derivative(self, x)
    }

    fn coeff(&self, i: usize) -> f32 {
        QuadraticCurve::coeff(self, i)
    }

    fn num_coeff(&self) -> usize {
        QuadraticCurve::num_coeff(self)
    }

    fn epsilon(&self) -> f32 {
        QuadraticCurve::epsilon(self)
    }
}

impl std::fmt::Display for QuadraticCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x^2 + {}x + {}", self.c[2], self.c[1], self.c[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_and_derivatives() {
        let q = QuadraticCurve::new(2.0, -3.0, 1.0); // 2x^2 - 3x + 1
        assert_eq!(q.evaluate(0.0), 1.0);
        assert_eq!(q.evaluate(2.0), 3.0);
        assert_eq!(q.derivative(2.0), 5.0);
        assert_eq!(q.second_derivative(7.0), 4.0);
        assert_eq!(q.third_derivative(7.0), 0.0);
    }

    #[test]
    fn test_coeff_layout() {
        let q = QuadraticCurve::new(3.0, 2.0, 1.0);
        assert_eq!(q.coeff(2), 3.0);
        assert_eq!(q.coeff(1), 2.0);
        assert_eq!(q.coeff(0), 1.0);
        assert_eq!(q.num_coeff(), 3);
        assert_eq!(q, QuadraticCurve::from_coefficients([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_init_with_start_derivative() {
        let init = QuadraticInitWithStartDerivative::new(1.0, 2.0, 5.0);
        let q = QuadraticCurve::from(init);
        assert_eq!(q.evaluate(0.0), 1.0);
        assert_eq!(q.derivative(0.0), 2.0);
        assert_eq!(q.evaluate(1.0), 5.0);
    }

    #[test]
    fn test_two_roots_ascending() {
        let q = QuadraticCurve::new(1.0, 0.0, -4.0); // roots at +-2
        let roots = q.roots();
        assert_eq!(roots.as_slice(), [-2.0, 2.0]);

        // Negative leading coefficient flips nothing about ordering.
        let q = QuadraticCurve::new(-1.0, 0.0, 4.0);
        assert_eq!(q.roots().as_slice(), [-2.0, 2.0]);
    }

    #[test]
    fn test_double_root_returned_once() {
        // (x - 1)^2: the discriminant is exactly zero.
        let q = QuadraticCurve::new(1.0, -2.0, 1.0);
        let roots = q.roots();
        assert_eq!(roots.as_slice(), [1.0]);
    }

    #[test]
    fn test_no_real_roots() {
        let q = QuadraticCurve::new(1.0, 0.0, 1.0); // x^2 + 1
        assert!(q.roots().is_empty());
    }

    #[test]
    fn test_degenerate_linear_and_constant() {
        // c2 == 0: linear with root at -c0/c1.
        let linear = QuadraticCurve::new(0.0, 2.0, -4.0);
        assert_eq!(linear.roots().as_slice(), [2.0]);

        // c2 == c1 == 0: constant, no roots even when the constant is 0.
        let constant = QuadraticCurve::new(0.0, 0.0, 3.0);
        assert!(constant.roots().is_empty());
        let zero = QuadraticCurve::new(0.0, 0.0, 0.0);
        assert!(zero.roots().is_empty());
    }

    #[test]
    fn test_reliable_discriminant_snaps_to_zero() {
        let q = QuadraticCurve::new(1.0, -2.0, 1.0);
        let epsilon = q.epsilon();
        // Within epsilon of zero is treated as exactly zero.
        assert_eq!(q.reliable_discriminant(epsilon), 0.0);

        let q = QuadraticCurve::new(1.0, 0.0, -4.0);
        assert_eq!(q.reliable_discriminant(q.epsilon()), 16.0);
    }

    #[test]
    fn test_critical_point() {
        let q = QuadraticCurve::new(1.0, -4.0, 1.0);
        assert_eq!(q.critical_point(), 2.0);
        assert_eq!(q.derivative(q.critical_point()), 0.0);
    }

    #[test]
    fn test_roots_in_range_clips() {
        let q = QuadraticCurve::new(1.0, 0.0, -4.0); // roots at +-2
        assert_eq!(
            q.roots_in_range(Range::new(-10.0, 10.0)).as_slice(),
            [-2.0, 2.0]
        );
        assert_eq!(q.roots_in_range(Range::new(0.0, 10.0)).as_slice(), [2.0]);
        assert!(q.roots_in_range(Range::new(3.0, 10.0)).is_empty());
    }

    #[test]
    fn test_roots_in_range_keeps_boundary_roots() {
        // Root exactly on the range boundary must survive the filter.
        let q = QuadraticCurve::new(1.0, 0.0, -4.0);
        assert_eq!(q.roots_in_range(Range::new(2.0, 10.0)).as_slice(), [2.0]);
        assert_eq!(q.roots_in_range(Range::new(-10.0, -2.0)).as_slice(), [-2.0]);
    }

    #[test]
    fn test_ranges_matching_sign_partition() {
        let q = QuadraticCurve::new(1.0, 0.0, -4.0); // x^2 - 4
        let limits = Range::new(-10.0, 10.0);

        let above = q.ranges_above_zero(limits);
        let below = q.ranges_below_zero(limits);

        assert_eq!(
            above.as_slice(),
            [Range::new(-10.0, -2.0), Range::new(2.0, 10.0)]
        );
        assert_eq!(below.as_slice(), [Range::new(-2.0, 2.0)]);

        // Together with the root points, the two sets cover the limits
        // exactly, with no overlap.
        assert_eq!(above[0].start(), limits.start());
        assert_eq!(above[0].end(), below[0].start());
        assert_eq!(below[0].end(), above[1].start());
        assert_eq!(above[1].end(), limits.end());
    }

    #[test]
    fn test_ranges_matching_sign_no_roots() {
        let q = QuadraticCurve::new(1.0, 0.0, 1.0); // x^2 + 1, always positive
        let limits = Range::new(-5.0, 5.0);
        assert_eq!(q.ranges_above_zero(limits).as_slice(), [limits]);
        assert!(q.ranges_below_zero(limits).is_empty());
    }

    #[test]
    fn test_ranges_matching_sign_double_root() {
        // (x - 1)^2 touches zero at x = 1 but never goes below.
        let q = QuadraticCurve::new(1.0, -2.0, 1.0);
        let limits = Range::new(0.0, 2.0);

        let above = q.ranges_above_zero(limits);
        assert_eq!(
            above.as_slice(),
            [Range::new(0.0, 1.0), Range::new(1.0, 2.0)]
        );
        assert!(q.ranges_below_zero(limits).is_empty());
    }

    #[test]
    fn test_sign_magnitude_ignored() {
        let q = QuadraticCurve::new(1.0, 0.0, -4.0);
        let limits = Range::new(-10.0, 10.0);
        assert_eq!(
            q.ranges_matching_sign(limits, 0.001),
            q.ranges_matching_sign(limits, 1e9)
        );
    }

    #[test]
    fn test_exact_equality() {
        let a = QuadraticCurve::new(1.0, 2.0, 3.0);
        let b = QuadraticCurve::new(1.0, 2.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, QuadraticCurve::new(1.0, 2.0, 3.0 + 1e-6));
    }

    #[test]
    fn test_display() {
        let q = QuadraticCurve::new(1.0, -2.0, 3.0);
        assert_eq!(format!("{q}"), "1x^2 + -2x + 3");
    }
}
