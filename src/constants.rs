//! Game physics constants used across systems.
//!
//! These are the defaults for [`crate::settings::PhysicsSettings`]; a
//! settings file may override any of them at start-up.

/// Edge length of a square tile in world units.
pub const TILE_SIZE: f32 = 24.0;
/// Default column count of a level grid.
pub const LEVEL_COLUMNS: usize = 40;
/// Default row count of a level grid.
pub const LEVEL_ROWS: usize = 24;
/// Downward acceleration applied every step.
pub const GRAVITY: f32 = 0.8;
/// Horizontal speed while a direction is held.
pub const MOVE_SPEED: f32 = 5.0;
/// Initial upward speed of a jump.
pub const JUMP_SPEED: f32 = 16.0;
/// Fall speed cap. Kept at or below the tile size so a falling body cannot
/// skip over a one-tile-thick solid in a single step.
pub const MAX_FALL_SPEED: f32 = 24.0;
/// Character box width.
pub const BODY_WIDTH: f32 = 48.0;
/// Character box height.
pub const BODY_HEIGHT: f32 = 48.0;
/// Depth of the downward probe used for zone checks.
pub const FEET_PROBE_DEPTH: f32 = 1.0;
/// Horizontal speed below which a body is considered idle.
pub const IDLE_SPEED_EPSILON: f32 = 0.01;
/// Frame count of the goal door loop.
pub const GOAL_DOOR_FRAMES: u8 = 4;
/// Playback rate of the goal door loop.
pub const GOAL_DOOR_FPS: f32 = 8.0;
/// Fallback red spawn column (in tiles) used when a level omits marker `1`.
pub const RED_FALLBACK_SPAWN_COLUMN: f32 = 2.5;
/// Fallback blue spawn column (in tiles) used when a level omits marker `2`.
pub const BLUE_FALLBACK_SPAWN_COLUMN: f32 = 4.5;
/// Fallback spawn height in tiles, measured from the top of the playfield.
pub const FALLBACK_SPAWN_ROW: f32 = 2.0;
