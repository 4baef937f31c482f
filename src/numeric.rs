//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between world coordinates and grid
//! indices. They clamp rather than panic so that bodies far outside the
//! playfield still produce valid (possibly empty) cell ranges.

use std::ops::Range;

/// Convert a grid count or index into world units.
#[expect(
    clippy::cast_precision_loss,
    reason = "Grid dimensions are small enough to be exact in f32."
)]
#[must_use]
pub fn grid_to_world(value: usize) -> f32 {
    value as f32
}

/// Floor a world coordinate onto the grid and clamp it into `0..=limit`.
///
/// Non-finite input maps to `0`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is clamped to the usize domain before casting."
)]
#[must_use]
pub fn floor_to_cell(value: f32, tile_size: f32, limit: usize) -> usize {
    let scaled = (value / tile_size).floor();
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    let capped = scaled.min(grid_to_world(limit));
    (capped as usize).min(limit)
}

/// Returns the grid cells along one axis touched by the span `[min, max]`.
///
/// The range is conservative: a span ending exactly on a cell boundary also
/// includes the next cell, so callers must still run an exact overlap test.
#[must_use]
pub fn cell_span(min: f32, max: f32, tile_size: f32, limit: usize) -> Range<usize> {
    if max < 0.0 || min > max {
        return 0..0;
    }
    let start = floor_to_cell(min, tile_size, limit);
    let end = floor_to_cell(max, tile_size, limit).saturating_add(1).min(limit);
    start..end.max(start)
}
