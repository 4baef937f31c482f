//! Typed tiles and the vocabulary shared by the map, bodies and zones.

use serde::{Deserialize, Serialize};

use crate::constants::{GOAL_DOOR_FPS, GOAL_DOOR_FRAMES};
use crate::geometry::Aabb;
use crate::map::classify::SolidVariant;

/// Character identity, also used as the affinity of colour-restricted tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyColor {
    /// Player one.
    Red,
    /// Player two.
    Blue,
}

/// Direction a ramp's walkable surface climbs when read left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlopeDirection {
    /// Rises from bottom-left to top-right (`/`).
    Up,
    /// Falls from top-left to bottom-right (`\`).
    Down,
}

/// Looping frame animation attached to tiles that animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// Number of frames in the loop.
    pub frame_count: u8,
    /// Playback rate.
    pub frames_per_second: f32,
}

impl Animation {
    /// The goal door loop.
    pub const GOAL_DOOR: Self = Self {
        frame_count: GOAL_DOOR_FRAMES,
        frames_per_second: GOAL_DOOR_FPS,
    };

    /// Frame index shown `elapsed` seconds after the level started.
    ///
    /// # Examples
    /// ```
    /// use tandem::map::Animation;
    /// let anim = Animation { frame_count: 4, frames_per_second: 8.0 };
    /// assert_eq!(anim.frame_at(0.0), 0);
    /// assert_eq!(anim.frame_at(0.25), 2);
    /// assert_eq!(anim.frame_at(0.5), 0);
    /// ```
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The frame position is wrapped into 0..frame_count before casting."
    )]
    #[must_use]
    pub fn frame_at(&self, elapsed: f32) -> usize {
        if self.frame_count == 0 || !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }
        let frames = f32::from(self.frame_count);
        let position = (elapsed * self.frames_per_second).rem_euclid(frames);
        (position as usize).min(usize::from(self.frame_count) - 1)
    }
}

/// What a tile is, with the data each kind carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TileKind {
    /// Blocks movement on both axes.
    Solid {
        /// Autotile variant chosen from neighbouring solids.
        variant: SolidVariant,
    },
    /// Inclined walkable surface; never blocks horizontally.
    Ramp {
        /// Which way the surface climbs.
        slope: SlopeDirection,
    },
    /// Respawns any body whose feet touch it.
    Hazard,
    /// Solid that only the matching character may touch.
    ColorZone {
        /// Character allowed to stand on the zone.
        affinity: BodyColor,
    },
    /// Exit for one character.
    GoalDoor {
        /// Character this door accepts.
        affinity: BodyColor,
        /// Door loop animation.
        animation: Animation,
    },
    /// Scenery with no physical effect.
    Decorative,
}

/// Query class used to pick tiles out of a [`crate::map::TileMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Anything that blocks: plain solids and colour zones.
    Solid,
    /// Ramps.
    Ramp,
    /// Hazards.
    Hazard,
    /// Colour zones.
    ColorZone,
    /// Goal doors.
    GoalDoor,
}

/// A single tile placed on the level grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Column of the tile.
    pub column: usize,
    /// Row of the tile.
    pub row: usize,
    /// Kind and kind-specific data.
    pub kind: TileKind,
    /// World-space box of the tile.
    pub bounds: Aabb,
}

impl Tile {
    /// Returns `true` when the tile belongs to `class`.
    #[must_use]
    pub const fn is(&self, class: TileClass) -> bool {
        matches!(
            (class, self.kind),
            (
                TileClass::Solid,
                TileKind::Solid { .. } | TileKind::ColorZone { .. }
            ) | (TileClass::Ramp, TileKind::Ramp { .. })
                | (TileClass::Hazard, TileKind::Hazard)
                | (TileClass::ColorZone, TileKind::ColorZone { .. })
                | (TileClass::GoalDoor, TileKind::GoalDoor { .. })
        )
    }

    /// Slope of a ramp tile.
    #[must_use]
    pub const fn slope(&self) -> Option<SlopeDirection> {
        match self.kind {
            TileKind::Ramp { slope } => Some(slope),
            _ => None,
        }
    }

    /// Colour affinity of colour zones and goal doors.
    #[must_use]
    pub const fn affinity(&self) -> Option<BodyColor> {
        match self.kind {
            TileKind::ColorZone { affinity } | TileKind::GoalDoor { affinity, .. } => {
                Some(affinity)
            }
            _ => None,
        }
    }

    /// Animation of tiles that animate.
    #[must_use]
    pub const fn animation(&self) -> Option<Animation> {
        match self.kind {
            TileKind::GoalDoor { animation, .. } => Some(animation),
            _ => None,
        }
    }
}
