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

//! # Math Primitives
//!
//! Foundational mathematical structures for per-frame animation logic.
//!
//! ## Submodules
//!
//! - `range`: A generic closed interval `[start, end]` where an inverted
//!   pair (`start > end`) is a legal "invalid" sentinel rather than an
//!   error. Supplies clamping, interpolation, modular (wrap-around)
//!   arithmetic for angle-like quantities, and batch set operations
//!   (all-pairs intersection with optional gap collection,
//!   longest/shortest selection, epsilon-tolerant value filtering).
//! - `curve`: Quadratic and cubic polynomials with analytic derivatives,
//!   magnitude-scaled precision floors, closed-form root finding, and
//!   sign-region extraction against an x-limits range. Cubics are
//!   typically constructed from Hermite boundary conditions.
//!
//! ## Motivation
//!
//! Motivators (animation value drivers), camera blending, and UI
//! transitions all reduce to the same two queries per frame: evaluate a
//! polynomial segment at a parameter, and combine or normalize scalar
//! intervals. Both are kept allocation-free and closed form so they can
//! sit on the per-frame hot path.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod curve;
pub mod range;
