//! Arena of typed tiles with per-kind indices and a dense spatial grid.

use glam::Vec2;
use log::debug;

use crate::geometry::Aabb;
use crate::map::classify::{classify, SOLID_SYMBOL};
use crate::map::loader::{LevelGrid, BLUE_SPAWN_SYMBOL, EMPTY_SYMBOL, RED_SPAWN_SYMBOL};
use crate::map::tile::{Animation, BodyColor, SlopeDirection, Tile, TileClass, TileKind};
use crate::numeric::{cell_span, grid_to_world};
use crate::settings::LevelDimensions;

/// Handle addressing a tile inside a [`TileMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    /// Position of the tile in [`TileMap::iter`] order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Immutable tile layout of one level.
#[derive(Clone, Debug)]
pub struct TileMap {
    dimensions: LevelDimensions,
    tile_size: f32,
    tiles: Vec<Tile>,
    cells: Vec<Option<TileId>>,
    solids: Vec<TileId>,
    ramps: Vec<TileId>,
    hazards: Vec<TileId>,
    color_zones: Vec<TileId>,
    goal_doors: Vec<TileId>,
}

fn kind_for(symbol: char, grid: &LevelGrid, column: usize, row: usize) -> Option<TileKind> {
    let kind = match symbol {
        SOLID_SYMBOL => TileKind::Solid {
            variant: classify(grid, column, row),
        },
        '/' => TileKind::Ramp {
            slope: SlopeDirection::Up,
        },
        '\\' => TileKind::Ramp {
            slope: SlopeDirection::Down,
        },
        'R' => TileKind::ColorZone {
            affinity: BodyColor::Red,
        },
        'B' => TileKind::ColorZone {
            affinity: BodyColor::Blue,
        },
        'X' => TileKind::Hazard,
        'G' => TileKind::GoalDoor {
            affinity: BodyColor::Red,
            animation: Animation::GOAL_DOOR,
        },
        'H' => TileKind::GoalDoor {
            affinity: BodyColor::Blue,
            animation: Animation::GOAL_DOOR,
        },
        EMPTY_SYMBOL | ' ' | RED_SPAWN_SYMBOL | BLUE_SPAWN_SYMBOL => return None,
        other => {
            debug!("unknown symbol {other:?} at ({column}, {row}) kept as decoration");
            TileKind::Decorative
        }
    };
    Some(kind)
}

impl TileMap {
    /// Materialises every tile of `grid`.
    #[must_use]
    pub fn from_grid(grid: &LevelGrid, tile_size: f32) -> Self {
        let dimensions = grid.dimensions();
        let mut map = Self {
            dimensions,
            tile_size,
            tiles: Vec::new(),
            cells: vec![None; dimensions.columns.saturating_mul(dimensions.rows)],
            solids: Vec::new(),
            ramps: Vec::new(),
            hazards: Vec::new(),
            color_zones: Vec::new(),
            goal_doors: Vec::new(),
        };
        for (column, row, symbol) in grid.cells() {
            if let Some(kind) = kind_for(symbol, grid, column, row) {
                map.insert(column, row, kind);
            }
        }
        map
    }

    fn insert(&mut self, column: usize, row: usize, kind: TileKind) {
        let id = TileId(self.tiles.len());
        let min = Vec2::new(grid_to_world(column), grid_to_world(row)) * self.tile_size;
        let tile = Tile {
            column,
            row,
            kind,
            bounds: Aabb::from_min_size(min, Vec2::splat(self.tile_size)),
        };
        let indices = [
            (TileClass::Solid, &mut self.solids),
            (TileClass::Ramp, &mut self.ramps),
            (TileClass::Hazard, &mut self.hazards),
            (TileClass::ColorZone, &mut self.color_zones),
            (TileClass::GoalDoor, &mut self.goal_doors),
        ];
        for (class, index) in indices {
            if tile.is(class) {
                index.push(id);
            }
        }
        if let Some(cell) = self.cells.get_mut(row * self.dimensions.columns + column) {
            *cell = Some(id);
        }
        self.tiles.push(tile);
    }

    /// Grid dimensions of the level.
    #[must_use]
    pub const fn dimensions(&self) -> LevelDimensions {
        self.dimensions
    }

    /// Tile edge length.
    #[must_use]
    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Looks up a tile by handle.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    /// Tile occupying grid cell `(column, row)`, if any.
    #[must_use]
    pub fn tile_at(&self, column: usize, row: usize) -> Option<&Tile> {
        if column >= self.dimensions.columns || row >= self.dimensions.rows {
            return None;
        }
        self.cells
            .get(row * self.dimensions.columns + column)
            .copied()
            .flatten()
            .and_then(|id| self.tile(id))
    }

    /// Every tile in row-major order with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (TileId(index), tile))
    }

    /// Blocking tiles: plain solids and colour zones.
    #[must_use]
    pub fn solids(&self) -> &[TileId] {
        &self.solids
    }

    /// Ramp tiles.
    #[must_use]
    pub fn ramps(&self) -> &[TileId] {
        &self.ramps
    }

    /// Hazard tiles.
    #[must_use]
    pub fn hazards(&self) -> &[TileId] {
        &self.hazards
    }

    /// Colour-restricted zones.
    #[must_use]
    pub fn color_zones(&self) -> &[TileId] {
        &self.color_zones
    }

    /// Goal doors.
    #[must_use]
    pub fn goal_doors(&self) -> &[TileId] {
        &self.goal_doors
    }

    /// Tiles of `class` whose boxes overlap `area`, in row-major order.
    ///
    /// Only grid cells under `area` are visited.
    pub fn overlapping(&self, area: Aabb, class: TileClass) -> impl Iterator<Item = &Tile> + '_ {
        let columns = cell_span(
            area.left(),
            area.right(),
            self.tile_size,
            self.dimensions.columns,
        );
        let rows = cell_span(area.top(), area.bottom(), self.tile_size, self.dimensions.rows);
        rows.flat_map(move |row| columns.clone().map(move |column| (column, row)))
            .filter_map(move |(column, row)| self.tile_at(column, row))
            .filter(move |tile| tile.is(class) && tile.bounds.overlaps(&area))
    }
}
