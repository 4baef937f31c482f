//! Walkable surface height of ramp tiles.
//!
//! A ramp's surface is a straight line across its tile. Heights are world y
//! values, so a smaller height is higher on screen.

use crate::map::{SlopeDirection, Tile};

/// Surface height of `tile` at `world_x`.
///
/// Returns `None` when `tile` is not a ramp or `world_x` lies outside the
/// tile's column range `[left, right)`. Within the range the local offset is
/// clamped to `[0, width - 1]`, so a rising ramp of width `T` sits at
/// `top + T - 1` on its left edge and at `top` on its right edge.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use tandem::geometry::Aabb;
/// use tandem::map::{SlopeDirection, Tile, TileKind};
/// use tandem::ramp::surface_height;
///
/// let ramp = Tile {
///     column: 1,
///     row: 0,
///     kind: TileKind::Ramp { slope: SlopeDirection::Up },
///     bounds: Aabb::from_min_size(Vec2::new(24.0, 0.0), Vec2::splat(24.0)),
/// };
/// assert_eq!(surface_height(&ramp, 24.0), Some(23.0));
/// assert_eq!(surface_height(&ramp, 47.0), Some(0.0));
/// assert_eq!(surface_height(&ramp, 48.0), None);
/// ```
#[must_use]
pub fn surface_height(tile: &Tile, world_x: f32) -> Option<f32> {
    let slope = tile.slope()?;
    let bounds = &tile.bounds;
    if !(world_x >= bounds.left() && world_x < bounds.right()) {
        return None;
    }
    let span = (bounds.width() - 1.0).max(0.0);
    let local_x = (world_x - bounds.left()).clamp(0.0, span);
    let offset = match slope {
        SlopeDirection::Up => span - local_x,
        SlopeDirection::Down => local_x,
    };
    Some(bounds.top() + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Aabb;
    use crate::map::TileKind;
    use approx::assert_relative_eq;
    use glam::Vec2;
    use rstest::rstest;

    fn ramp(slope: SlopeDirection) -> Tile {
        Tile {
            column: 2,
            row: 3,
            kind: TileKind::Ramp { slope },
            bounds: Aabb::from_min_size(Vec2::new(48.0, 72.0), Vec2::splat(24.0)),
        }
    }

    #[rstest]
    #[case::rising_left(SlopeDirection::Up, 48.0, 72.0 + 23.0)]
    #[case::rising_right(SlopeDirection::Up, 71.0, 72.0)]
    #[case::rising_middle(SlopeDirection::Up, 60.0, 72.0 + 11.0)]
    #[case::falling_left(SlopeDirection::Down, 48.0, 72.0)]
    #[case::falling_right(SlopeDirection::Down, 71.0, 72.0 + 23.0)]
    #[case::past_last_pixel_clamps(SlopeDirection::Up, 71.5, 72.0)]
    fn heights_across_the_tile(
        #[case] slope: SlopeDirection,
        #[case] world_x: f32,
        #[case] expected: f32,
    ) {
        let height = surface_height(&ramp(slope), world_x).expect("inside the tile");
        assert_relative_eq!(height, expected);
    }

    #[rstest]
    #[case::left_of_tile(47.9)]
    #[case::right_edge(72.0)]
    #[case::nan(f32::NAN)]
    fn undefined_outside_the_columns(#[case] world_x: f32) {
        assert_eq!(surface_height(&ramp(SlopeDirection::Down), world_x), None);
    }

    #[test]
    fn rising_surface_is_monotonic() {
        let tile = ramp(SlopeDirection::Up);
        let samples: Vec<f32> = (0u8..24)
            .filter_map(|i| surface_height(&tile, 48.0 + f32::from(i)))
            .collect();
        assert_eq!(samples.len(), 24);
        assert!(samples.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn non_ramps_have_no_surface() {
        let mut tile = ramp(SlopeDirection::Up);
        tile.kind = TileKind::Hazard;
        assert_eq!(surface_height(&tile, 50.0), None);
    }
}
