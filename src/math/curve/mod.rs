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

//! # Polynomial Curves
//!
//! Closed-form quadratic and cubic polynomials used as animation
//! segments. Both curve kinds share an identical surface (the [`Curve`]
//! trait) so that generic callers can treat any degree uniformly through
//! monomorphization; the set of curve kinds is closed and known at
//! compile time, so no runtime dispatch is needed on the per-frame path.
//!
//! ## Submodules
//!
//! - `quadratic`: degree-2 polynomials with numerically-reliable root
//!   finding and sign-region extraction.
//! - `cubic`: degree-3 polynomials, typically constructed from Hermite
//!   boundary conditions, with inflection (uniform-curvature) queries.
//! - `graph`: debug-only ASCII-art plotting of a curve over an x-range.
//!
//! ## Precision
//!
//! All zero tests scale by [`EPSILON_SCALE`] times the curve's own
//! largest coefficient: a value below that floor is indistinguishable
//! from zero at f32 significand precision.

pub mod cubic;
pub mod graph;
pub mod quadratic;

pub use cubic::{CubicCurve, CubicInit};
pub use graph::{graph_2d_points, graph_curve_on_x_range};
pub use quadratic::{QuadraticCurve, QuadraticInitWithStartDerivative};

/// 2^-22, the relative precision of an f32 significand. Multiplied by a
/// curve's largest coefficient magnitude to obtain the curve's own
/// precision floor.
pub const EPSILON_SCALE: f32 = 1.0 / (1 << 22) as f32;

/// Selects which of a curve's value functions to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveValueType {
    /// The curve's value, `f(x)`.
    Value,
    /// The curve's slope, `f'(x)`.
    Derivative,
    /// The curve's curvature, `f''(x)`.
    SecondDerivative,
    /// The curve's third derivative, `f'''(x)`.
    ThirdDerivative,
}

/// The shared surface of all polynomial curve kinds.
///
/// Implementors are small value types; generic callers (motivators,
/// blending code) monomorphize over this trait rather than dispatching
/// dynamically.
pub trait Curve {
    /// Returns the curve's value at `x`.
    fn evaluate(&self, x: f32) -> f32;

    /// Returns the curve's slope at `x`.
    fn derivative(&self, x: f32) -> f32;

    /// Returns the curve's second derivative at `x`.
    fn second_derivative(&self, x: f32) -> f32;

    /// Returns the curve's third derivative at `x`.
    fn third_derivative(&self, x: f32) -> f32;

    /// Returns the coefficient of the x-to-the-`i`th-power term.
    fn coeff(&self, i: usize) -> f32;

    /// Returns the number of coefficients in this curve.
    fn num_coeff(&self) -> usize;

    /// Returns a value below which this curve's arithmetic is unreliable.
    /// Tests for zero should compare against this instead of 0.0.
    fn epsilon(&self) -> f32;
}

/// Samples one of `curve`'s value functions at `x`. Slow dispatch on
/// `value_type`; useful for debugging and plotting, not the frame path.
pub fn curve_value<C: Curve>(curve: &C, x: f32, value_type: CurveValueType) -> f32 {
    match value_type {
        CurveValueType::Value => curve.evaluate(x),
        CurveValueType::Derivative => curve.derivative(x),
        CurveValueType::SecondDerivative => curve.second_derivative(x),
        CurveValueType::ThirdDerivative => curve.third_derivative(x),
    }
}
