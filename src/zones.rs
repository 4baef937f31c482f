//! Hazard and colour-zone rules applied after collision.

use crate::constants::FEET_PROBE_DEPTH;
use crate::events::RespawnCause;
use crate::geometry::Aabb;
use crate::map::{BodyColor, TileClass, TileMap};

/// Returns why a body at `bounds` must respawn, if it must.
///
/// The box is extended downward by [`FEET_PROBE_DEPTH`] so tiles the body
/// stands on count as touched. Hazards take precedence over colour zones;
/// zones matching `color` are harmless.
#[must_use]
pub fn check(bounds: &Aabb, color: BodyColor, map: &TileMap) -> Option<RespawnCause> {
    let probe = bounds.extend_down(FEET_PROBE_DEPTH);
    if map.overlapping(probe, TileClass::Hazard).next().is_some() {
        return Some(RespawnCause::Hazard);
    }
    map.overlapping(probe, TileClass::ColorZone)
        .any(|tile| tile.affinity().is_some_and(|affinity| affinity != color))
        .then_some(RespawnCause::WrongColor)
}
