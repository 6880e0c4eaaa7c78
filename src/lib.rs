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

//! # Animath
//!
//! Closed-form polynomial curves and interval math for driving
//! keyframe-free animation, camera blending, and UI transitions at a
//! fixed per-frame cadence.
//!
//! ## Modules
//!
//! - `math`: A possibly-invalid closed interval type (`Range<T>`) with
//!   clamping, interpolation, modular (wrap-around) arithmetic, and batch
//!   set operations, plus quadratic and cubic polynomial curves with
//!   analytic derivatives, numerically-reliable root finding, and
//!   sign-region extraction.
//! - `num`: The `RangeScalar` trait alias collecting the numeric bounds
//!   required of interval endpoints.
//!
//! ## Purpose
//!
//! Animation value drivers evaluate a curve (and its derivatives) every
//! frame, and clamp, normalize, or compare scalar quantities against
//! ranges. Everything here is pure, allocation-free value math: every
//! operation is O(1) or O(small constant), root finding is closed form,
//! and no function performs I/O or can fail for resource reasons.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
