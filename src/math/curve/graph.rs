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

//! # ASCII Curve Plots
//!
//! Renders a curve's value (or one of its derivatives) over an x-range as
//! a small ASCII-art graph. Purely diagnostic: handy when eyeballing a
//! misbehaving animation segment from a test or a log dump, never part of
//! the functional contract.

use super::{curve_value, Curve, CurveValueType};
use crate::math::range::Range;

/// Default plot width in characters.
pub const DEFAULT_GRAPH_WIDTH: usize = 80;

/// Default plot height in lines.
pub const DEFAULT_GRAPH_HEIGHT: usize = 30;

/// Draws an ASCII-art graph of the `(x, y)` points.
///
/// Each point is bucketed into a `width` x `height` character grid whose
/// extents are the bounding box of the inputs. The y = 0 line is drawn
/// with dashes when zero falls inside the y-extent. Returns an empty
/// string for empty input or a degenerate grid size.
pub fn graph_2d_points(points: &[(f32, f32)], width: usize, height: usize) -> String {
    if points.is_empty() || width < 2 || height < 2 {
        return String::new();
    }

    let mut x_bounds = Range::<f32>::empty();
    let mut y_bounds = Range::<f32>::empty();
    for &(x, y) in points {
        x_bounds = x_bounds.include(x);
        y_bounds = y_bounds.include(y);
    }

    // A flat line or single column still needs a non-zero extent to
    // bucket against.
    if x_bounds.length() <= 0.0 {
        x_bounds = Range::new(x_bounds.start() - 1.0, x_bounds.end() + 1.0);
    }
    if y_bounds.length() <= 0.0 {
        y_bounds = Range::new(y_bounds.start() - 1.0, y_bounds.end() + 1.0);
    }

    let mut grid = vec![vec![b' '; width]; height];

    // Mark the y = 0 axis first so points overwrite it.
    if y_bounds.contains(0.0) {
        let zero_row = ((1.0 - y_bounds.percent(0.0)) * (height - 1) as f32).round() as usize;
        for cell in &mut grid[zero_row] {
            *cell = b'-';
        }
    }

    for &(x, y) in points {
        let col = (x_bounds.percent_clamped(x) * (width - 1) as f32).round() as usize;
        let row = ((1.0 - y_bounds.percent_clamped(y)) * (height - 1) as f32).round() as usize;
        grid[row][col] = b'*';
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid {
        // Rows are pure ASCII by construction.
        out.extend(row.iter().map(|&cell| cell as char));
        out.push('\n');
    }
    out
}

/// Samples `curve`'s `value_type` function at `width` evenly-spaced points
/// across `x_range` and renders the result with [`graph_2d_points`].
///
/// # Examples
///
/// ```rust
/// # use animath::math::curve::{graph_curve_on_x_range, CubicCurve, CubicInit, CurveValueType};
/// # use animath::math::range::Range;
/// let ease = CubicCurve::from(CubicInit::new(0.0, 0.0, 1.0, 0.0, 1.0));
/// let plot = graph_curve_on_x_range(
///     &ease,
///     CurveValueType::Value,
///     Range::new(0.0, 1.0),
///     40,
///     12,
/// );
/// assert!(plot.contains('*'));
/// ```
pub fn graph_curve_on_x_range<C: Curve>(
    curve: &C,
    value_type: CurveValueType,
    x_range: Range<f32>,
    width: usize,
    height: usize,
) -> String {
    if width < 2 {
        return String::new();
    }

    let inc_x = x_range.length() / (width - 1) as f32;
    let mut points = Vec::with_capacity(width);
    let mut x = x_range.start();
    for _ in 0..width {
        points.push((x, curve_value(curve, x, value_type)));
        x += inc_x;
    }
    graph_2d_points(&points, width, height)
}
