//! Read-only snapshots for renderers.
//!
//! The presentation layer never mutates simulation state. Each frame it
//! takes [`TileView`]s and [`BodyView`]s, resolves texture keys for tiles and
//! picks animation frames with a [`TileAnimator`].

use crate::body::{BodyId, CharacterBody, Facing, MotionState};
use crate::geometry::Aabb;
use crate::map::{
    Animation, BodyColor, SlopeDirection, TextureKeys, Tile, TileId, TileKind, TileMap,
};
use crate::simulation::Simulation;

/// What a renderer needs to draw one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileView {
    /// Handle of the tile.
    pub id: TileId,
    /// World-space box.
    pub bounds: Aabb,
    /// Tile kind with its payload.
    pub kind: TileKind,
    /// Ramp direction, for ramps.
    pub slope: Option<SlopeDirection>,
    /// Colour affinity, for zones and goal doors.
    pub affinity: Option<BodyColor>,
    /// Texture key, when one is available for the kind.
    pub texture: Option<&'static str>,
    /// Frame loop, for tiles that animate.
    pub animation: Option<Animation>,
}

impl TileView {
    fn new(id: TileId, tile: &Tile, keys: &TextureKeys) -> Self {
        Self {
            id,
            bounds: tile.bounds,
            kind: tile.kind,
            slope: tile.slope(),
            affinity: tile.affinity(),
            texture: keys.resolve(&tile.kind),
            animation: tile.animation(),
        }
    }
}

/// What a renderer needs to draw one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyView {
    /// Handle of the body.
    pub id: BodyId,
    /// World-space box.
    pub bounds: Aabb,
    /// Drawing direction.
    pub facing: Facing,
    /// Grounded at the end of the last step.
    pub grounded: bool,
    /// Character identity.
    pub color: BodyColor,
    /// Standing in its own goal door.
    pub in_goal: bool,
    /// Animation selector.
    pub motion: MotionState,
}

impl From<&CharacterBody> for BodyView {
    fn from(body: &CharacterBody) -> Self {
        Self {
            id: body.id(),
            bounds: body.bounding_box(),
            facing: body.facing(),
            grounded: body.is_grounded(),
            color: body.color(),
            in_goal: body.is_in_goal(),
            motion: body.motion(),
        }
    }
}

/// Views of every tile in row-major order.
#[must_use]
pub fn tile_views(map: &TileMap, keys: &TextureKeys) -> Vec<TileView> {
    map.iter()
        .map(|(id, tile)| TileView::new(id, tile, keys))
        .collect()
}

/// Views of every body in simulation order.
#[must_use]
pub fn body_views(simulation: &Simulation) -> Vec<BodyView> {
    simulation.bodies().iter().map(BodyView::from).collect()
}

/// Wall-clock driver for tile animations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileAnimator {
    elapsed: f32,
}

impl TileAnimator {
    /// Starts at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Advances the clock; non-finite or negative deltas are ignored.
    pub fn advance(&mut self, delta_seconds: f32) {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed += delta_seconds;
        }
    }

    /// Seconds accumulated so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frame to draw for `view`; static tiles always show frame 0.
    #[must_use]
    pub fn frame_for(&self, view: &TileView) -> usize {
        view.animation
            .map_or(0, |animation| animation.frame_at(self.elapsed))
    }
}
