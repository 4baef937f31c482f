//! Goal-door occupancy and level completion.

use log::info;

use crate::body::CharacterBody;
use crate::geometry::Aabb;
use crate::map::{BodyColor, TileClass, TileMap};

/// Whether `bounds` overlaps a goal door belonging to `color`.
#[must_use]
pub fn occupies_goal(bounds: &Aabb, color: BodyColor, map: &TileMap) -> bool {
    map.overlapping(*bounds, TileClass::GoalDoor)
        .any(|tile| tile.affinity() == Some(color))
}

/// Tracks whether every body stands in its own goal door.
///
/// Completion is recomputed from scratch each step and is not sticky: the
/// level stops being complete as soon as any body leaves its door.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelCompletionTracker {
    complete: bool,
}

impl LevelCompletionTracker {
    /// Creates a tracker for a level that is not yet complete.
    #[must_use]
    pub const fn new() -> Self {
        Self { complete: false }
    }

    /// Recomputes completion from the bodies' goal flags.
    pub fn update(&mut self, bodies: &[CharacterBody]) -> bool {
        let complete = !bodies.is_empty() && bodies.iter().all(CharacterBody::is_in_goal);
        if complete && !self.complete {
            info!("all {} bodies reached their goal doors", bodies.len());
        }
        self.complete = complete;
        complete
    }

    /// Result of the most recent [`Self::update`].
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Forgets completion, e.g. after a level transition.
    pub fn reset(&mut self) {
        self.complete = false;
    }
}
