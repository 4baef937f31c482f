//! Axis-separated collision response against solids and ramps.
//!
//! Bodies are moved one axis at a time. After each axis the body is pushed
//! out of every solid it overlaps, towards the side it came from. Ramps are
//! handled afterwards by snapping the feet onto the ramp surface.

use glam::Vec2;
use ordered_float::OrderedFloat;

use crate::body::CharacterBody;
use crate::events::EventSink;
use crate::geometry::Aabb;
use crate::map::{Tile, TileClass, TileMap};
use crate::ramp::surface_height;

/// Pushes the body out of solids after horizontal movement.
///
/// Moving right aligns the body's right edge with the leftmost overlapping
/// solid; moving left aligns its left edge with the rightmost one. Velocity
/// is left untouched.
pub fn resolve_horizontal(body: &mut CharacterBody, map: &TileMap) {
    let vx = body.velocity_x();
    if vx == 0.0 {
        return;
    }
    let hits = map.overlapping(body.bounding_box(), TileClass::Solid);
    if vx > 0.0 {
        if let Some(edge) = hits.map(|tile| tile.bounds.left()).reduce(f32::min) {
            body.set_right(edge);
        }
    } else if let Some(edge) = hits.map(|tile| tile.bounds.right()).reduce(f32::max) {
        body.set_left(edge);
    }
}

/// Pushes the body out of solids after vertical movement.
///
/// Falling onto a solid grounds the body; rising into one stops it against
/// the underside. Both zero vertical velocity.
pub fn resolve_vertical(body: &mut CharacterBody, map: &TileMap, events: &mut dyn EventSink) {
    let vy = body.velocity_y();
    let hits = map.overlapping(body.bounding_box(), TileClass::Solid);
    if vy > 0.0 {
        if let Some(edge) = hits.map(|tile| tile.bounds.top()).reduce(f32::min) {
            body.set_bottom(edge);
            body.stop_vertical();
            body.land(events);
        }
    } else if vy < 0.0 {
        if let Some(edge) = hits.map(|tile| tile.bounds.bottom()).reduce(f32::max) {
            body.set_top(edge);
            body.stop_vertical();
        }
    }
}

/// Thin box under the body's feet, inflated by one tile on every side.
fn feet_probe(bounds: &Aabb, tile_size: f32) -> Aabb {
    let width = bounds.width() * 0.5;
    let feet = Aabb::from_min_size(
        Vec2::new(bounds.center_x() - width * 0.5, bounds.bottom() - 2.0),
        Vec2::new(width, 4.0),
    );
    feet.expand(Vec2::splat(tile_size))
}

/// Whether `tile` spans the body vertically closely enough to be stood on.
fn vertically_reachable(bounds: &Aabb, tile: &Tile) -> bool {
    !(bounds.bottom() < tile.bounds.top() - 1.0 || bounds.top() > tile.bounds.bottom())
}

/// `bounds` moved vertically so its bottom edge sits at `bottom`.
fn with_bottom(bounds: &Aabb, bottom: f32) -> Aabb {
    Aabb::from_min_size(
        Vec2::new(bounds.left(), bottom - bounds.height()),
        Vec2::new(bounds.width(), bounds.height()),
    )
}

/// Snaps the body's feet onto the highest ramp surface beneath them.
///
/// Candidate ramps are tried in ascending order of their top edge, with
/// load order breaking ties; the first one whose surface the feet have
/// sunk below wins. A surface that would lift the body into a solid is
/// skipped. Rising bodies pass through ramps.
pub fn resolve_ramps(body: &mut CharacterBody, map: &TileMap, events: &mut dyn EventSink) {
    if body.velocity_y() < 0.0 {
        return;
    }
    let bounds = body.bounding_box();
    let probe = feet_probe(&bounds, map.tile_size());
    let mut candidates: Vec<&Tile> = map
        .overlapping(probe, TileClass::Ramp)
        .filter(|tile| vertically_reachable(&bounds, tile))
        .collect();
    if candidates.is_empty() {
        return;
    }
    candidates.sort_by_key(|tile| OrderedFloat(tile.bounds.top()));

    let centre = bounds.center_x();
    let surface = candidates.iter().find_map(|tile| {
        surface_height(tile, centre)
            .filter(|&surface| bounds.bottom() > surface && surface >= tile.bounds.top())
            .filter(|&surface| {
                map.overlapping(with_bottom(&bounds, surface), TileClass::Solid)
                    .next()
                    .is_none()
            })
    });
    if let Some(surface) = surface {
        body.set_bottom(surface);
        body.stop_vertical();
        body.land(events);
    }
}
