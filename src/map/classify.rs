//! Autotiling for solid tiles.
//!
//! A solid's visual variant is chosen from which of its four direct
//! neighbours are also solid. The choice is cosmetic; physics treats every
//! variant the same.

use hashbrown::HashSet;
use log::warn;

use crate::map::loader::LevelGrid;
use crate::map::tile::{SlopeDirection, TileKind};

/// Symbol that counts as solid for neighbour checks.
pub const SOLID_SYMBOL: char = '#';

/// Solidity of the four 4-connected neighbours of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbours {
    /// Cell above is solid.
    pub up: bool,
    /// Cell below is solid.
    pub down: bool,
    /// Cell to the left is solid.
    pub left: bool,
    /// Cell to the right is solid.
    pub right: bool,
}

impl Neighbours {
    /// Reads neighbour solidity from `grid`; cells outside the grid are open.
    #[must_use]
    pub fn of(grid: &LevelGrid, column: usize, row: usize) -> Self {
        let solid_at = |c: Option<usize>, r: Option<usize>| match (c, r) {
            (Some(c), Some(r)) => grid.symbol(c, r) == Some(SOLID_SYMBOL),
            _ => false,
        };
        Self {
            up: solid_at(Some(column), row.checked_sub(1)),
            down: solid_at(Some(column), row.checked_add(1)),
            left: solid_at(column.checked_sub(1), Some(row)),
            right: solid_at(column.checked_add(1), Some(row)),
        }
    }
}

/// Visual variant of a solid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolidVariant {
    /// Solid on all four sides.
    Enclosed,
    /// Open above only.
    OpenTop,
    /// Open below only.
    OpenBottom,
    /// Open to the left only.
    OpenLeft,
    /// Open to the right only.
    OpenRight,
    /// Solid left and right, open above and below.
    HorizontalCorridor,
    /// Solid above and below, open left and right.
    VerticalCorridor,
    /// Any other arrangement.
    Isolated,
}

impl SolidVariant {
    /// Key used when none of the other categories apply to a texture lookup.
    pub const FALLBACK_KEY: &'static str = "enclosed";

    /// Picks the variant for a set of neighbours.
    ///
    /// # Examples
    /// ```
    /// use tandem::map::{Neighbours, SolidVariant};
    /// let floor = Neighbours { up: false, down: true, left: true, right: true };
    /// assert_eq!(SolidVariant::from_neighbours(floor), SolidVariant::OpenTop);
    /// ```
    #[must_use]
    pub const fn from_neighbours(n: Neighbours) -> Self {
        match (n.up, n.down, n.left, n.right) {
            (true, true, true, true) => Self::Enclosed,
            (false, true, true, true) => Self::OpenTop,
            (true, false, true, true) => Self::OpenBottom,
            (true, true, false, true) => Self::OpenLeft,
            (true, true, true, false) => Self::OpenRight,
            (false, false, true, true) => Self::HorizontalCorridor,
            (true, true, false, false) => Self::VerticalCorridor,
            _ => Self::Isolated,
        }
    }

    /// Stable texture key for the variant.
    #[must_use]
    pub const fn texture_key(self) -> &'static str {
        match self {
            Self::Enclosed => "enclosed",
            Self::OpenTop => "open_top",
            Self::OpenBottom => "open_bottom",
            Self::OpenLeft => "open_left",
            Self::OpenRight => "open_right",
            Self::HorizontalCorridor => "horizontal_corridor",
            Self::VerticalCorridor => "vertical_corridor",
            Self::Isolated => "isolated",
        }
    }
}

/// Classifies the solid at `(column, row)` of `grid`.
#[must_use]
pub fn classify(grid: &LevelGrid, column: usize, row: usize) -> SolidVariant {
    SolidVariant::from_neighbours(Neighbours::of(grid, column, row))
}

/// Texture keys a presentation layer has available.
#[derive(Clone, Debug, Default)]
pub struct TextureKeys {
    available: HashSet<String>,
}

impl TextureKeys {
    /// Builds the set from any iterator of key names.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the texture key for a tile kind, or `None` for kinds drawn
    /// without a texture.
    ///
    /// Missing solid and ramp keys fall back to
    /// [`SolidVariant::FALLBACK_KEY`] with a warning.
    #[must_use]
    pub fn resolve(&self, kind: &TileKind) -> Option<&'static str> {
        let wanted = match kind {
            TileKind::Solid { variant } => variant.texture_key(),
            TileKind::Ramp {
                slope: SlopeDirection::Up,
            } => "ramp_up",
            TileKind::Ramp {
                slope: SlopeDirection::Down,
            } => "ramp_down",
            TileKind::Hazard => "spikes",
            TileKind::ColorZone { .. } | TileKind::GoalDoor { .. } | TileKind::Decorative => {
                return None;
            }
        };
        if self.available.contains(wanted) {
            Some(wanted)
        } else {
            warn!("texture `{wanted}` missing; using `{}`", SolidVariant::FALLBACK_KEY);
            Some(SolidVariant::FALLBACK_KEY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LevelDimensions;
    use rstest::rstest;

    fn grid(rows: &[&str]) -> LevelGrid {
        let dims = LevelDimensions {
            columns: rows.first().map_or(0, |r| r.len()),
            rows: rows.len(),
        };
        LevelGrid::parse(&rows.join("\n"), dims)
    }

    #[rstest]
    #[case::enclosed(Neighbours { up: true, down: true, left: true, right: true }, SolidVariant::Enclosed)]
    #[case::open_top(Neighbours { up: false, down: true, left: true, right: true }, SolidVariant::OpenTop)]
    #[case::open_bottom(Neighbours { up: true, down: false, left: true, right: true }, SolidVariant::OpenBottom)]
    #[case::open_left(Neighbours { up: true, down: true, left: false, right: true }, SolidVariant::OpenLeft)]
    #[case::open_right(Neighbours { up: true, down: true, left: true, right: false }, SolidVariant::OpenRight)]
    #[case::horizontal(Neighbours { up: false, down: false, left: true, right: true }, SolidVariant::HorizontalCorridor)]
    #[case::vertical(Neighbours { up: true, down: true, left: false, right: false }, SolidVariant::VerticalCorridor)]
    #[case::alone(Neighbours::default(), SolidVariant::Isolated)]
    #[case::end_cap(Neighbours { up: false, down: false, left: true, right: false }, SolidVariant::Isolated)]
    fn categories(#[case] neighbours: Neighbours, #[case] expected: SolidVariant) {
        assert_eq!(SolidVariant::from_neighbours(neighbours), expected);
    }

    #[test]
    fn grid_edges_count_as_open() {
        let g = grid(&["##", "##"]);
        assert_eq!(
            Neighbours::of(&g, 0, 0),
            Neighbours {
                up: false,
                down: true,
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn only_plain_solids_are_neighbours() {
        let g = grid(&[".R.", "B#X", "./."]);
        assert_eq!(classify(&g, 1, 1), SolidVariant::Isolated);
    }

    #[test]
    fn missing_texture_falls_back() {
        let keys = TextureKeys::new(["enclosed", "open_top"]);
        let open_top = TileKind::Solid {
            variant: SolidVariant::OpenTop,
        };
        let corridor = TileKind::Solid {
            variant: SolidVariant::VerticalCorridor,
        };
        assert_eq!(keys.resolve(&open_top), Some("open_top"));
        assert_eq!(keys.resolve(&corridor), Some("enclosed"));
        assert_eq!(keys.resolve(&TileKind::Decorative), None);
    }
}
