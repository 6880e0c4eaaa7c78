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

//! # Cubic Curves
//!
//! A degree-3 polynomial `c3*x^3 + c2*x^2 + c1*x + c0`, typically
//! constructed as a Hermite segment: given a value and slope at each end
//! of an x-width, the four coefficients are solved in closed form (no
//! iterative fitting). Motivators use one such segment per transition and
//! compose segments externally.

use super::{Curve, EPSILON_SCALE};
use crate::math::range::Range;

/// Hermite boundary conditions for a cubic over `x` in `[0, width_x]`:
/// value and slope at each end, plus the segment's x-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicInit {
    /// `f(0)`.
    pub start_y: f32,
    /// `f'(0)`.
    pub start_derivative: f32,
    /// `f(width_x)`.
    pub end_y: f32,
    /// `f'(width_x)`.
    pub end_derivative: f32,
    /// The segment's width along x. Must be positive.
    pub width_x: f32,
}

impl CubicInit {
    /// Creates Hermite boundary conditions for a cubic on `[0, width_x]`.
    pub fn new(
        start_y: f32,
        start_derivative: f32,
        end_y: f32,
        end_derivative: f32,
        width_x: f32,
    ) -> Self {
        Self {
            start_y,
            start_derivative,
            end_y,
            end_derivative,
            width_x,
        }
    }
}

/// A cubic polynomial `c[3]*x^3 + c[2]*x^2 + c[1]*x + c[0]`.
///
/// Coefficients are stored with `c[i]` multiplying `x^i`.
///
/// # Examples
///
/// ```rust
/// # use animath::math::curve::{CubicCurve, CubicInit};
/// // Ease-in/ease-out: flat at both ends, rising from 0 to 1.
/// let ease = CubicCurve::from(CubicInit::new(0.0, 0.0, 1.0, 0.0, 1.0));
/// assert_eq!(ease.evaluate(0.5), 0.5); // symmetric Hermite
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CubicCurve {
    c: [f32; 4],
}

impl CubicCurve {
    const NUM_COEFF: usize = 4;

    /// Creates a cubic from its coefficients, highest power first.
    #[inline]
    pub fn new(c3: f32, c2: f32, c1: f32, c0: f32) -> Self {
        Self {
            c: [c0, c1, c2, c3],
        }
    }

    /// Creates a cubic from a coefficient array where `c[i]` multiplies
    /// `x^i`.
    #[inline]
    pub fn from_coefficients(c: [f32; 4]) -> Self {
        Self { c }
    }

    /// Returns the cubic's value at `x`.
    ///
    /// Written as nested multiply-adds, which map onto FPU fused
    /// instructions.
    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        ((self.c[3] * x + self.c[2]) * x + self.c[1]) * x + self.c[0]
    }

    /// Returns the cubic's slope at `x`: `3*c3*x^2 + 2*c2*x + c1`.
    #[inline]
    pub fn derivative(&self, x: f32) -> f32 {
        (3.0 * self.c[3] * x + 2.0 * self.c[2]) * x + self.c[1]
    }

    /// Returns the cubic's second derivative at `x`: `6*c3*x + 2*c2`.
    #[inline]
    pub fn second_derivative(&self, x: f32) -> f32 {
        6.0 * self.c[3] * x + 2.0 * self.c[2]
    }

    /// Returns the cubic's constant third derivative, `6*c3`.
    /// `x` is unused but kept for a uniform surface across curve kinds.
    #[inline]
    pub fn third_derivative(&self, _x: f32) -> f32 {
        6.0 * self.c[3]
    }

    /// Returns `true` if the curve bends consistently over `x_limits`,
    /// i.e. the second derivative keeps one sign and there is no
    /// inflection point inside the range. Blending code uses this to
    /// decide whether overshoot correction is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use animath::math::curve::CubicCurve;
    /// # use animath::math::range::Range;
    /// // x^3 inflects at 0: curvature is uniform on one side only.
    /// let s = CubicCurve::new(1.0, 0.0, 0.0, 0.0);
    /// assert!(s.uniform_curvature(Range::new(0.1, 2.0)));
    /// assert!(!s.uniform_curvature(Range::new(-1.0, 1.0)));
    /// ```
    pub fn uniform_curvature(&self, x_limits: Range<f32>) -> bool {
        // The second derivative is linear in x, so checking its sign at
        // both ends of the range suffices. Values within epsilon of zero
        // are allowed on either side.
        let epsilon = self.epsilon();
        let start_second = self.second_derivative(x_limits.start());
        let end_second = self.second_derivative(x_limits.end());
        (start_second >= -epsilon && end_second >= -epsilon)
            || (start_second <= epsilon && end_second <= epsilon)
    }

    /// Returns a value below which floating-point arithmetic on this
    /// curve is unreliable: the largest coefficient magnitude scaled down
    /// to f32 significand precision.
    pub fn epsilon(&self) -> f32 {
        let max_c = self.c[3]
            .abs()
            .max(self.c[2].abs())
            .max(self.c[1].abs())
            .max(self.c[0].abs());
        max_c * EPSILON_SCALE
    }

    /// Returns the coefficient of the x-to-the-`i`th-power term.
    #[inline]
    pub fn coeff(&self, i: usize) -> f32 {
        self.c[i]
    }

    /// Overrides the coefficient of the x-to-the-`i`th-power term.
    ///
    /// The one place a curve is mutated after construction: external
    /// fitting code adjusts a cubic in place, e.g. to re-fit it to a
    /// different width without recomputing boundary conditions.
    #[inline]
    pub fn set_coeff(&mut self, i: usize, coeff: f32) {
        self.c[i] = coeff;
    }

    /// Returns the number of coefficients in this curve.
    #[inline]
    pub fn num_coeff(&self) -> usize {
        Self::NUM_COEFF
    }
}

/// Solves the four coefficients from Hermite boundary conditions such
/// that `f(0) = start_y`, `f'(0) = start_derivative`,
/// `f(width_x) = end_y`, and `f'(width_x) = end_derivative`.
impl From<CubicInit> for CubicCurve {
    fn from(init: CubicInit) -> Self {
        debug_assert!(init.width_x > 0.0);

        // Substituting x = 0 gives c0 and c1 directly; substituting
        // x = w into f and f' and solving the remaining 2x2 system gives
        // c2 and c3 in closed form.
        let one_over_w = 1.0 / init.width_x;
        let one_over_w_sq = one_over_w * one_over_w;
        let one_over_w_cubed = one_over_w_sq * one_over_w;
        let delta_y = init.end_y - init.start_y;

        Self {
            c: [
                init.start_y,
                init.start_derivative,
                3.0 * delta_y * one_over_w_sq
                    - (2.0 * init.start_derivative + init.end_derivative) * one_over_w,
                -2.0 * delta_y * one_over_w_cubed
                    + (init.start_derivative + init.end_derivative) * one_over_w_sq,
            ],
        }
    }
}

impl Curve for CubicCurve {
    fn evaluate(&self, x: f32) -> f32 {
        CubicCurve::evaluate(self, x)
    }

    fn derivative(&self, x: f32) -> f32 {
        CubicCurve::derivative(self, x)
    }

    fn second_derivative(&self, x: f32) -> f32 {
        CubicCurve::second_derivative(self, x)
    }

    fn third_derivative(&self, x: f32) -> f32 {
        CubicCurve::third_derivative(self, x)
    }

    fn coeff(&self, i: usize) -> f32 {
        CubicCurve::coeff(self, i)
    }

    fn num_coeff(&self) -> usize {
        CubicCurve::num_coeff(self)
    }

    fn epsilon(&self) -> f32 {
        CubicCurve::epsilon(self)
    }
}

impl std::fmt::Display for CubicCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x^3 + {}x^2 + {}x + {}",
            self.c[3], self.c[2], self.c[1], self.c[0]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Boundary conditions must be reproduced to within accumulated
    // rounding of a handful of f32 operations.
    const TOLERANCE: f32 = 1e-4;

    fn assert_matches_init(curve: &CubicCurve, init: &CubicInit) {
        assert!((curve.evaluate(0.0) - init.start_y).abs() < TOLERANCE);
        assert!((curve.derivative(0.0) - init.start_derivative).abs() < TOLERANCE);
        assert!((curve.evaluate(init.width_x) - init.end_y).abs() < TOLERANCE);
        assert!((curve.derivative(init.width_x) - init.end_derivative).abs() < TOLERANCE);
    }

    #[test]
    fn test_evaluate_and_derivatives() {
        let s = CubicCurve::new(1.0, -2.0, 3.0, -4.0); // x^3 - 2x^2 + 3x - 4
        assert_eq!(s.evaluate(0.0), -4.0);
        assert_eq!(s.evaluate(2.0), 2.0);
        assert_eq!(s.derivative(2.0), 7.0);
        assert_eq!(s.second_derivative(2.0), 8.0);
        assert_eq!(s.third_derivative(100.0), 6.0);
    }

    #[test]
    fn test_hermite_round_trip() {
        let inits = [
            CubicInit::new(0.0, 0.0, 1.0, 0.0, 1.0),
            CubicInit::new(1.0, -8.0, -2.0, 0.5, 4.0),
            CubicInit::new(-3.0, 2.0, 7.0, -1.0, 0.25),
            CubicInit::new(5.0, 0.0, 5.0, 0.0, 10.0),
        ];
        for init in &inits {
            let curve = CubicCurve::from(*init);
            assert_matches_init(&curve, init);
        }
    }

    #[test]
    fn test_symmetric_ease_curve_midpoint() {
        // Flat at both ends, rising 0 to 1 over a unit width: the curve
        // is symmetric about its midpoint, so f(0.5) is exactly 0.5.
        let ease = CubicCurve::from(CubicInit::new(0.0, 0.0, 1.0, 0.0, 1.0));
        assert_eq!(ease, CubicCurve::new(-2.0, 3.0, 0.0, 0.0));
        assert_eq!(ease.evaluate(0.5), 0.5);
    }

    #[test]
    fn test_uniform_curvature() {
        // The ease curve inflects at its midpoint.
        let ease = CubicCurve::from(CubicInit::new(0.0, 0.0, 1.0, 0.0, 1.0));
        assert!(!ease.uniform_curvature(Range::new(0.0, 1.0)));
        assert!(ease.uniform_curvature(Range::new(0.0, 0.5)));
        assert!(ease.uniform_curvature(Range::new(0.5, 1.0)));

        // A quadratic-shaped cubic (c3 == 0) has constant curvature.
        let parabola = CubicCurve::new(0.0, 1.0, 0.0, 0.0);
        assert!(parabola.uniform_curvature(Range::new(-10.0, 10.0)));
    }

    #[test]
    fn test_set_coeff() {
        let mut s = CubicCurve::new(1.0, 2.0, 3.0, 4.0);
        s.set_coeff(3, 0.0);
        assert_eq!(s, CubicCurve::new(0.0, 2.0, 3.0, 4.0));
        assert_eq!(s.third_derivative(0.0), 0.0);
    }

    #[test]
    fn test_coeff_layout() {
        let s = CubicCurve::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(s.coeff(3), 4.0);
        assert_eq!(s.coeff(0), 1.0);
        assert_eq!(s.num_coeff(), 4);
        assert_eq!(s, CubicCurve::from_coefficients([1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_epsilon_scales_with_coefficients() {
        let small = CubicCurve::new(0.0, 0.0, 0.0, 1.0);
        let large = CubicCurve::new(0.0, 0.0, 0.0, 1024.0);
        assert_eq!(large.epsilon(), 1024.0 * small.epsilon());
    }

    #[test]
    fn test_exact_equality() {
        let a = CubicCurve::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a, CubicCurve::new(1.0, 2.0, 3.0, 4.0));
        assert_ne!(a, CubicCurve::new(1.0, 2.0, 3.0, 4.0 + 1e-6));
    }

    #[test]
    fn test_display() {
        let s = CubicCurve::new(-2.0, 3.0, 0.0, 0.0);
        assert_eq!(format!("{s}"), "-2x^3 + 3x^2 + 0x + 0");
    }
}
