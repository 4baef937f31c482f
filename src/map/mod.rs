//! Level geometry: typed tiles, autotiling and the level loader.
//!
//! A level is authored as a fixed-size text grid. [`loader`] normalises the
//! text and materialises it into a [`TileMap`], which owns every tile in an
//! arena and indexes them by kind and by grid cell. The map never changes
//! while a level is being played; a level transition replaces it wholesale.

pub mod classify;
pub mod loader;
pub mod tile;
pub mod tile_map;
pub mod verify;

pub use classify::{classify, Neighbours, SolidVariant, TextureKeys};
pub use loader::{load_level, read_level, LevelError, LevelGrid, LoadedLevel, SpawnPoints};
pub use tile::{Animation, BodyColor, SlopeDirection, Tile, TileClass, TileKind};
pub use tile_map::{TileId, TileMap};
pub use verify::{verify_level, LevelReport, RequiredMarker, SymbolCounts};
