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

//! # Range Scalar Trait
//!
//! Unified numeric bounds for interval endpoints. `RangeScalar` specifies
//! the capabilities required of the scalar type carried by a
//! [`Range`](crate::math::range::Range): intrinsic arithmetic via
//! `num_traits::Num`, ordering, and by-value copy semantics.
//!
//! ## Motivation
//!
//! Interval math should remain generic over scalar types (`f32`, `f64`,
//! and the integer types all make sense as range endpoints) while keeping
//! generic signatures short. This alias collects the necessary bounds in
//! one place; operations that only make sense for floating-point scalars
//! (interpolation, modular arithmetic, infinity sentinels) additionally
//! require `num_traits::Float` at their definition site.

use num_traits::Num;

/// A trait alias for numeric types that can serve as interval endpoints.
///
/// This is implemented automatically for every type satisfying the bounds,
/// which includes all primitive floats and integers.
///
/// # Note
///
/// `Num` brings in `PartialEq`, `Zero`, `One`, and the by-value arithmetic
/// operators. `PartialOrd` (rather than `Ord`) keeps floats eligible.
pub trait RangeScalar:
    Num + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> RangeScalar for T where
    T: Num + Copy + PartialOrd + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
