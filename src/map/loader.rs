//! Level text → normalised grid → tile map and spawn points.
//!
//! Loading never fails from the caller's point of view: ragged grids are
//! padded or truncated, missing spawn markers fall back to fixed positions,
//! and a missing level file is replaced by an emergency level with a floor
//! strip.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use glam::Vec2;
use log::{debug, error, info, warn};
use thiserror::Error;

use crate::constants::{BLUE_FALLBACK_SPAWN_COLUMN, FALLBACK_SPAWN_ROW, RED_FALLBACK_SPAWN_COLUMN};
use crate::map::classify::SOLID_SYMBOL;
use crate::map::tile::BodyColor;
use crate::map::tile_map::TileMap;
use crate::numeric::grid_to_world;
use crate::settings::{LevelDimensions, PhysicsSettings};

/// Symbol used for empty cells and padding.
pub const EMPTY_SYMBOL: char = '.';
/// Spawn marker for the red character.
pub const RED_SPAWN_SYMBOL: char = '1';
/// Spawn marker for the blue character.
pub const BLUE_SPAWN_SYMBOL: char = '2';

/// Errors raised while reading a level resource.
#[derive(Debug, Error)]
pub enum LevelError {
    /// No level exists at the requested path.
    #[error("level resource {path} is missing")]
    ResourceMissing {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The level exists but could not be read as UTF-8 text.
    #[error("level resource {path} is unreadable: {source}")]
    Unreadable {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Rectangular grid of level symbols with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGrid {
    dimensions: LevelDimensions,
    cells: Vec<char>,
}

impl LevelGrid {
    /// Normalises `text` to `dimensions`.
    ///
    /// Short rows are padded with [`EMPTY_SYMBOL`], long rows and surplus
    /// rows are truncated, and missing rows are appended empty.
    ///
    /// # Examples
    /// ```
    /// use tandem::map::LevelGrid;
    /// use tandem::settings::LevelDimensions;
    /// let grid = LevelGrid::parse("#\n####", LevelDimensions { columns: 3, rows: 3 });
    /// assert_eq!(grid.row_string(0).as_deref(), Some("#.."));
    /// assert_eq!(grid.row_string(1).as_deref(), Some("###"));
    /// assert_eq!(grid.row_string(2).as_deref(), Some("..."));
    /// ```
    #[must_use]
    pub fn parse(text: &str, dimensions: LevelDimensions) -> Self {
        let LevelDimensions { columns, rows } = dimensions;
        let mut cells = Vec::with_capacity(columns.saturating_mul(rows));
        let mut reshaped = false;
        let mut lines = text.lines();
        for _ in 0..rows {
            let line = lines.next().unwrap_or_else(|| {
                reshaped = true;
                ""
            });
            let mut width = 0;
            for symbol in line.chars().take(columns) {
                cells.push(symbol);
                width += 1;
            }
            if width < columns {
                cells.extend(std::iter::repeat(EMPTY_SYMBOL).take(columns - width));
            }
            reshaped |= line.chars().count() != columns;
        }
        if lines.next().is_some() {
            reshaped = true;
        }
        if reshaped {
            debug!("level grid reshaped to {columns}x{rows}");
        }
        Self { dimensions, cells }
    }

    /// Builds the fallback level: an empty room with a solid bottom row and
    /// both spawn markers standing on it.
    #[must_use]
    pub fn emergency(dimensions: LevelDimensions) -> Self {
        let LevelDimensions { columns, rows } = dimensions;
        let mut cells = vec![EMPTY_SYMBOL; columns.saturating_mul(rows)];
        if let Some(floor_start) = rows.checked_sub(1).map(|r| r * columns) {
            for cell in cells.iter_mut().skip(floor_start) {
                *cell = SOLID_SYMBOL;
            }
        }
        if let Some(spawn_row) = rows.checked_sub(2) {
            for (column, marker) in [(2, RED_SPAWN_SYMBOL), (4, BLUE_SPAWN_SYMBOL)] {
                if column < columns {
                    if let Some(cell) = cells.get_mut(spawn_row * columns + column) {
                        *cell = marker;
                    }
                }
            }
        }
        Self { dimensions, cells }
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> LevelDimensions {
        self.dimensions
    }

    /// Symbol at `(column, row)`, or `None` outside the grid.
    #[must_use]
    pub fn symbol(&self, column: usize, row: usize) -> Option<char> {
        if column >= self.dimensions.columns || row >= self.dimensions.rows {
            return None;
        }
        self.cells
            .get(row * self.dimensions.columns + column)
            .copied()
    }

    /// Row `row` as a string, mainly for diagnostics and tests.
    #[must_use]
    pub fn row_string(&self, row: usize) -> Option<String> {
        (row < self.dimensions.rows).then(|| {
            self.cells
                .iter()
                .skip(row * self.dimensions.columns)
                .take(self.dimensions.columns)
                .collect()
        })
    }

    /// Iterates `(column, row, symbol)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let columns = self.dimensions.columns.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &symbol)| (index % columns, index / columns, symbol))
    }
}

/// Where each character appears on load and after respawning.
///
/// Points are bottom-centre anchors: a body is placed so that the middle
/// of its bottom edge sits on the point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPoints {
    /// Red character spawn.
    pub red: Vec2,
    /// Blue character spawn.
    pub blue: Vec2,
}

impl SpawnPoints {
    /// Scans `grid` for spawn markers, falling back to fixed positions (with a
    /// warning) for any marker that is absent. The last marker of each kind
    /// in row-major order wins.
    #[must_use]
    pub fn from_grid(grid: &LevelGrid, tile_size: f32) -> Self {
        let mut red = None;
        let mut blue = None;
        for (column, row, symbol) in grid.cells() {
            let anchor = Vec2::new(
                (grid_to_world(column) + 0.5) * tile_size,
                grid_to_world(row + 1) * tile_size,
            );
            match symbol {
                RED_SPAWN_SYMBOL => red = Some(anchor),
                BLUE_SPAWN_SYMBOL => blue = Some(anchor),
                _ => {}
            }
        }
        Self {
            red: red.unwrap_or_else(|| {
                warn!("level has no red spawn marker; using fallback");
                Self::fallback(BodyColor::Red, tile_size)
            }),
            blue: blue.unwrap_or_else(|| {
                warn!("level has no blue spawn marker; using fallback");
                Self::fallback(BodyColor::Blue, tile_size)
            }),
        }
    }

    /// Fixed spawn used when a level omits the marker for `color`.
    #[must_use]
    pub fn fallback(color: BodyColor, tile_size: f32) -> Vec2 {
        let column = match color {
            BodyColor::Red => RED_FALLBACK_SPAWN_COLUMN,
            BodyColor::Blue => BLUE_FALLBACK_SPAWN_COLUMN,
        };
        Vec2::new(column * tile_size, FALLBACK_SPAWN_ROW * tile_size)
    }

    /// Spawn point for `color`.
    #[must_use]
    pub const fn for_color(&self, color: BodyColor) -> Vec2 {
        match color {
            BodyColor::Red => self.red,
            BodyColor::Blue => self.blue,
        }
    }
}

/// A level ready to simulate.
#[derive(Clone, Debug)]
pub struct LoadedLevel {
    /// Typed tiles and their indices.
    pub map: TileMap,
    /// Character spawn points.
    pub spawns: SpawnPoints,
}

impl LoadedLevel {
    /// Materialises tiles and spawn points from a normalised grid.
    #[must_use]
    pub fn from_grid(grid: &LevelGrid, settings: &PhysicsSettings) -> Self {
        Self {
            map: TileMap::from_grid(grid, settings.tile_size),
            spawns: SpawnPoints::from_grid(grid, settings.tile_size),
        }
    }

    /// Parses level text with the configured dimensions.
    #[must_use]
    pub fn from_text(text: &str, settings: &PhysicsSettings) -> Self {
        Self::from_grid(&LevelGrid::parse(text, settings.dimensions), settings)
    }

    /// The emergency level for the configured dimensions.
    #[must_use]
    pub fn emergency(settings: &PhysicsSettings) -> Self {
        Self::from_grid(&LevelGrid::emergency(settings.dimensions), settings)
    }
}

/// Reads the text of a level resource.
///
/// # Errors
/// Returns [`LevelError::ResourceMissing`] when nothing exists at `path`
/// and [`LevelError::Unreadable`] for any other read failure.
pub fn read_level(path: impl AsRef<Path>) -> Result<String, LevelError> {
    let path_ref = path.as_ref();
    fs::read_to_string(path_ref).map_err(|source| {
        let path_str = path_ref.display().to_string();
        if source.kind() == ErrorKind::NotFound {
            LevelError::ResourceMissing {
                path: path_str,
                source,
            }
        } else {
            LevelError::Unreadable {
                path: path_str,
                source,
            }
        }
    })
}

/// Loads the level at `path`, substituting the emergency level when the
/// resource cannot be read.
#[must_use]
pub fn load_level(path: impl AsRef<Path>, settings: &PhysicsSettings) -> LoadedLevel {
    match read_level(path.as_ref()) {
        Ok(text) => {
            info!("loaded level {}", path.as_ref().display());
            LoadedLevel::from_text(&text, settings)
        }
        Err(err @ LevelError::ResourceMissing { .. }) => {
            warn!("{err}; substituting emergency level");
            LoadedLevel::emergency(settings)
        }
        Err(err) => {
            error!("{err}; substituting emergency level");
            LoadedLevel::emergency(settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const SMALL: LevelDimensions = LevelDimensions {
        columns: 6,
        rows: 4,
    };

    #[rstest]
    #[case::exact("......\n......\n......\n######", "######")]
    #[case::long_rows("......XX\n......\n......\n########", "######")]
    #[case::short_rows("..\n.\n\n###", "###...")]
    #[case::crlf("......\r\n......\r\n......\r\n######\r\n", "######")]
    fn rows_are_normalised(#[case] text: &str, #[case] expected_last: &str) {
        let grid = LevelGrid::parse(text, SMALL);
        assert_eq!(grid.row_string(3).as_deref(), Some(expected_last));
        for row in 0..4 {
            assert_eq!(grid.row_string(row).map(|r| r.chars().count()), Some(6));
        }
    }

    #[test]
    fn surplus_rows_are_dropped() {
        let grid = LevelGrid::parse("#\n#\n#\n#\n#\n#", SMALL);
        assert_eq!(grid.row_string(4), None);
        assert_eq!(grid.symbol(0, 3), Some('#'));
    }

    #[test]
    fn multibyte_symbols_count_as_one_column() {
        let grid = LevelGrid::parse("é#", LevelDimensions { columns: 2, rows: 1 });
        assert_eq!(grid.symbol(1, 0), Some('#'));
    }

    #[test]
    fn spawn_markers_anchor_bottom_centre() {
        let grid = LevelGrid::parse("......\n.1..2.\n......\n######", SMALL);
        let spawns = SpawnPoints::from_grid(&grid, 24.0);
        assert_relative_eq!(spawns.red.x, 36.0);
        assert_relative_eq!(spawns.red.y, 48.0);
        assert_relative_eq!(spawns.blue.x, 108.0);
    }

    #[test]
    fn missing_markers_use_fallback() {
        let grid = LevelGrid::parse("######", SMALL);
        let spawns = SpawnPoints::from_grid(&grid, 24.0);
        assert_eq!(spawns.red, Vec2::new(60.0, 48.0));
        assert_eq!(spawns.blue, Vec2::new(108.0, 48.0));
    }

    #[test]
    fn later_marker_wins() {
        let grid = LevelGrid::parse("1.....\n.....1", SMALL);
        let spawns = SpawnPoints::from_grid(&grid, 24.0);
        assert_relative_eq!(spawns.red.x, 5.5 * 24.0);
        assert_relative_eq!(spawns.red.y, 48.0);
    }

    #[test]
    fn emergency_level_has_floor_and_spawns() {
        let grid = LevelGrid::emergency(SMALL);
        assert_eq!(grid.row_string(3).as_deref(), Some("######"));
        assert_eq!(grid.row_string(2).as_deref(), Some("..1.2."));
    }

    #[test]
    fn missing_file_is_resource_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = read_level(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(LevelError::ResourceMissing { .. })));
    }

    #[test]
    fn missing_file_loads_emergency_level() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = PhysicsSettings {
            dimensions: SMALL,
            ..PhysicsSettings::default()
        };
        let level = load_level(dir.path().join("level1.txt"), &settings);
        assert_eq!(level.map.solids().len(), 6);
        assert_relative_eq!(level.spawns.red.y, 72.0);
    }
}
