//! Tunable physics and level geometry.
//!
//! [`PhysicsSettings`] defaults to the values in [`crate::constants`]. A JSON
//! file may override any subset of fields; missing fields keep their
//! defaults.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BODY_HEIGHT, BODY_WIDTH, GRAVITY, JUMP_SPEED, LEVEL_COLUMNS, LEVEL_ROWS, MAX_FALL_SPEED,
    MOVE_SPEED, TILE_SIZE,
};
use crate::numeric::grid_to_world;

/// Errors raised while loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The settings file is not valid JSON for [`PhysicsSettings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot work with.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Fixed row and column counts of a level grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelDimensions {
    /// Number of columns.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
}

impl Default for LevelDimensions {
    fn default() -> Self {
        Self {
            columns: LEVEL_COLUMNS,
            rows: LEVEL_ROWS,
        }
    }
}

/// Physics parameters applied to every body each step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Edge length of a tile in world units.
    pub tile_size: f32,
    /// Level grid dimensions.
    #[serde(flatten)]
    pub dimensions: LevelDimensions,
    /// Downward acceleration per step.
    pub gravity: f32,
    /// Horizontal speed while a direction is held.
    pub move_speed: f32,
    /// Initial upward speed of a jump.
    pub jump_speed: f32,
    /// Fall speed cap.
    pub max_fall_speed: f32,
    /// Character box width.
    pub body_width: f32,
    /// Character box height.
    pub body_height: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            dimensions: LevelDimensions::default(),
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            body_width: BODY_WIDTH,
            body_height: BODY_HEIGHT,
        }
    }
}

impl PhysicsSettings {
    /// Parses and validates settings from a JSON document.
    ///
    /// # Errors
    /// Returns [`SettingsError::Parse`] for malformed JSON and
    /// [`SettingsError::Invalid`] when a value fails validation.
    ///
    /// # Examples
    /// ```
    /// use tandem::settings::PhysicsSettings;
    /// let settings = PhysicsSettings::from_json_str(r#"{ "gravity": 1.0, "rows": 12 }"#).unwrap();
    /// assert_eq!(settings.gravity, 1.0);
    /// assert_eq!(settings.dimensions.rows, 12);
    /// assert_eq!(settings.dimensions.columns, 40);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads and validates settings from a JSON file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Read`] when the file cannot be read, plus any
    /// error from [`Self::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|source| SettingsError::Read {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every field is usable.
    ///
    /// `max_fall_speed` may not exceed `tile_size`, or a falling body could
    /// pass through a one-tile floor in a single step.
    ///
    /// # Errors
    /// Returns [`SettingsError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("tile_size", self.tile_size),
            ("move_speed", self.move_speed),
            ("jump_speed", self.jump_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("body_width", self.body_width),
            ("body_height", self.body_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                });
            }
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "gravity",
                reason: "must be a non-negative finite number",
            });
        }
        if self.max_fall_speed > self.tile_size {
            return Err(SettingsError::Invalid {
                field: "max_fall_speed",
                reason: "must not exceed tile_size",
            });
        }
        if self.dimensions.columns == 0 {
            return Err(SettingsError::Invalid {
                field: "columns",
                reason: "must be non-zero",
            });
        }
        if self.dimensions.rows == 0 {
            return Err(SettingsError::Invalid {
                field: "rows",
                reason: "must be non-zero",
            });
        }
        Ok(())
    }

    /// Size of a character box.
    #[must_use]
    pub const fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }

    /// Width and height of the playfield in world units.
    #[must_use]
    pub fn playfield_size(&self) -> Vec2 {
        Vec2::new(
            grid_to_world(self.dimensions.columns) * self.tile_size,
            grid_to_world(self.dimensions.rows) * self.tile_size,
        )
    }
}
