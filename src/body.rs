//! Kinematic character bodies and their per-step movement.
//!
//! A body is a fixed-size box moved by intent and gravity, then pushed out
//! of solids axis by axis, snapped onto ramps, checked against zones and
//! goal doors, and finally kept inside the playfield. The order of those
//! phases is fixed; see [`CharacterBody::step`].

use glam::Vec2;
use log::debug;

use crate::collision;
use crate::completion;
use crate::constants::IDLE_SPEED_EPSILON;
use crate::events::{EventSink, RespawnCause};
use crate::geometry::Aabb;
use crate::input::BodyIntent;
use crate::map::{BodyColor, TileMap};
use crate::settings::PhysicsSettings;
use crate::zones;

/// Handle addressing a body inside a [`crate::Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    /// Wraps a body index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the body in simulation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Horizontal direction a body is drawn facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Facing left.
    Left,
    /// Facing right.
    #[default]
    Right,
}

/// Coarse motion state for choosing an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionState {
    /// Grounded and not moving horizontally.
    #[default]
    Idle,
    /// Grounded and moving horizontally.
    Running,
    /// Not grounded.
    Airborne,
}

/// One player-controlled character.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterBody {
    id: BodyId,
    color: BodyColor,
    position: Vec2,
    size: Vec2,
    velocity: Vec2,
    grounded: bool,
    previous_grounded: bool,
    spawn: Vec2,
    in_goal: bool,
    facing: Facing,
    motion: MotionState,
}

impl CharacterBody {
    /// Creates a body standing on `spawn` (a bottom-centre anchor).
    #[must_use]
    pub fn new(id: BodyId, color: BodyColor, spawn: Vec2, size: Vec2) -> Self {
        Self {
            id,
            color,
            position: Self::top_left_for(spawn, size),
            size,
            velocity: Vec2::ZERO,
            grounded: false,
            previous_grounded: false,
            spawn,
            in_goal: false,
            facing: Facing::default(),
            motion: MotionState::default(),
        }
    }

    fn top_left_for(anchor: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(anchor.x - size.x * 0.5, anchor.y - size.y)
    }

    /// Handle of the body.
    #[must_use]
    pub const fn id(&self) -> BodyId {
        self.id
    }

    /// Character identity.
    #[must_use]
    pub const fn color(&self) -> BodyColor {
        self.color
    }

    /// Top-left corner of the box.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity in world units per step.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// World-space box of the body.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_min_size(self.position, self.size)
    }

    /// Whether the last downward collision zeroed vertical velocity.
    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Grounded state captured at the start of the last step.
    #[must_use]
    pub const fn was_grounded(&self) -> bool {
        self.previous_grounded
    }

    /// Bottom-centre spawn anchor.
    #[must_use]
    pub const fn spawn_point(&self) -> Vec2 {
        self.spawn
    }

    /// Whether the body overlaps its own goal door.
    #[must_use]
    pub const fn is_in_goal(&self) -> bool {
        self.in_goal
    }

    /// Direction the body faces.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Motion classification from the last step.
    #[must_use]
    pub const fn motion(&self) -> MotionState {
        self.motion
    }

    /// Advances the body by one fixed step.
    ///
    /// Phases run in this order: intent, jump, gravity, horizontal solids,
    /// vertical solids, ramps, zones, goal occupancy, world bounds, visual
    /// state. A body respawns at most once per step.
    pub fn step(
        &mut self,
        intent: BodyIntent,
        map: &TileMap,
        settings: &PhysicsSettings,
        events: &mut dyn EventSink,
    ) {
        self.previous_grounded = self.grounded;
        self.apply_intent(intent, settings, events);
        self.apply_gravity(settings);

        self.position.x += self.velocity.x;
        collision::resolve_horizontal(self, map);

        self.position.y += self.velocity.y;
        self.grounded = false;
        collision::resolve_vertical(self, map, events);
        collision::resolve_ramps(self, map, events);

        let mut respawned = false;
        if let Some(cause) = zones::check(&self.bounding_box(), self.color, map) {
            self.respawn(cause, events);
            respawned = true;
        }

        self.in_goal = completion::occupies_goal(&self.bounding_box(), self.color, map);

        let playfield = settings.playfield_size();
        self.clamp_to_playfield(playfield);
        if !respawned && self.position.y > playfield.y {
            self.respawn(RespawnCause::OutOfBounds, events);
        }

        self.update_motion();
    }

    fn apply_intent(
        &mut self,
        intent: BodyIntent,
        settings: &PhysicsSettings,
        events: &mut dyn EventSink,
    ) {
        self.velocity.x = 0.0;
        if intent.move_left {
            self.velocity.x = -settings.move_speed;
            self.facing = Facing::Left;
        }
        // Evaluated after left, so holding both moves right.
        if intent.move_right {
            self.velocity.x = settings.move_speed;
            self.facing = Facing::Right;
        }
        if intent.jump && self.grounded {
            self.velocity.y = -settings.jump_speed;
            self.grounded = false;
            events.on_jump(self.id);
        }
    }

    fn apply_gravity(&mut self, settings: &PhysicsSettings) {
        self.velocity.y = (self.velocity.y + settings.gravity).min(settings.max_fall_speed);
    }

    fn clamp_to_playfield(&mut self, playfield: Vec2) {
        let max_x = (playfield.x - self.size.x).max(0.0);
        self.position.x = self.position.x.clamp(0.0, max_x);
        self.position.y = self.position.y.max(0.0);
    }

    fn update_motion(&mut self) {
        self.motion = if !self.grounded {
            MotionState::Airborne
        } else if self.velocity.x.abs() > IDLE_SPEED_EPSILON {
            MotionState::Running
        } else {
            MotionState::Idle
        };
    }

    /// Sends the body back to its spawn point with zero velocity.
    pub fn respawn(&mut self, cause: RespawnCause, events: &mut dyn EventSink) {
        debug!(
            "body {} ({:?}) respawning: {cause:?}",
            self.id.index(),
            self.color
        );
        self.position = Self::top_left_for(self.spawn, self.size);
        self.velocity = Vec2::ZERO;
        self.grounded = false;
        self.previous_grounded = false;
        self.in_goal = false;
        self.motion = MotionState::Airborne;
        events.on_respawn(self.id, cause);
    }

    /// Moves the spawn anchor; used only on level transitions.
    pub(crate) const fn set_spawn_point(&mut self, spawn: Vec2) {
        self.spawn = spawn;
    }

    pub(crate) const fn velocity_x(&self) -> f32 {
        self.velocity.x
    }

    pub(crate) const fn velocity_y(&self) -> f32 {
        self.velocity.y
    }

    pub(crate) fn set_left(&mut self, left: f32) {
        self.position.x = left;
    }

    pub(crate) fn set_right(&mut self, right: f32) {
        self.position.x = right - self.size.x;
    }

    pub(crate) fn set_top(&mut self, top: f32) {
        self.position.y = top;
    }

    pub(crate) fn set_bottom(&mut self, bottom: f32) {
        self.position.y = bottom - self.size.y;
    }

    pub(crate) fn stop_vertical(&mut self) {
        self.velocity.y = 0.0;
    }

    /// Marks the body grounded, reporting a landing if it was airborne on
    /// the previous step and has not already landed during this one.
    pub(crate) fn land(&mut self, events: &mut dyn EventSink) {
        if !self.grounded && !self.previous_grounded {
            events.on_land(self.id);
        }
        self.grounded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{BodyEvent, MockEventSink};
    use crate::map::LoadedLevel;
    use crate::settings::LevelDimensions;
    use approx::assert_relative_eq;
    use mockall::predicate::eq;

    fn settings() -> PhysicsSettings {
        PhysicsSettings {
            dimensions: LevelDimensions {
                columns: 10,
                rows: 6,
            },
            ..PhysicsSettings::default()
        }
    }

    fn level(rows: &[&str]) -> LoadedLevel {
        LoadedLevel::from_text(&rows.join("\n"), &settings())
    }

    fn body_at(level: &LoadedLevel, color: BodyColor) -> CharacterBody {
        let s = settings();
        CharacterBody::new(BodyId::new(0), color, level.spawns.for_color(color), s.body_size())
    }

    const FLOOR: [&str; 6] = [
        "..........",
        "..........",
        "..........",
        "..........",
        "..1....2..",
        "##########",
    ];

    #[test]
    fn spawn_places_feet_on_anchor() {
        let lvl = level(&FLOOR);
        let body = body_at(&lvl, BodyColor::Red);
        let bounds = body.bounding_box();
        assert_relative_eq!(bounds.bottom(), 120.0);
        assert_relative_eq!(bounds.center_x(), 60.0);
    }

    #[test]
    fn holding_both_directions_moves_right() {
        let lvl = level(&FLOOR);
        let mut body = body_at(&lvl, BodyColor::Red);
        let mut events = Vec::new();
        let both = BodyIntent {
            move_left: true,
            move_right: true,
            jump: false,
        };
        body.step(both, &lvl.map, &settings(), &mut events);
        assert_relative_eq!(body.velocity().x, 5.0);
        assert_eq!(body.facing(), Facing::Right);
    }

    #[test]
    fn first_touchdown_reports_landing_once() {
        let lvl = level(&FLOOR);
        let mut body = body_at(&lvl, BodyColor::Red);
        let mut events = Vec::new();
        body.step(BodyIntent::IDLE, &lvl.map, &settings(), &mut events);
        body.step(BodyIntent::IDLE, &lvl.map, &settings(), &mut events);
        assert!(body.is_grounded());
        assert_eq!(events, vec![BodyEvent::Landed(BodyId::new(0))]);
    }

    #[test]
    fn jump_requires_ground() {
        let lvl = level(&FLOOR);
        let mut body = body_at(&lvl, BodyColor::Red);
        let s = settings();
        let mut sink = MockEventSink::new();
        sink.expect_on_land().times(1).return_const(());
        sink.expect_on_jump()
            .with(eq(BodyId::new(0)))
            .times(1)
            .return_const(());
        sink.expect_on_respawn().never();

        // Airborne on spawn: jump is ignored and the body lands.
        body.step(BodyIntent::JUMP, &lvl.map, &s, &mut sink);
        assert!(body.is_grounded());
        body.step(BodyIntent::JUMP, &lvl.map, &s, &mut sink);
        assert!(!body.is_grounded());
        assert_relative_eq!(body.velocity().y, -s.jump_speed + s.gravity);
    }

    #[test]
    fn fall_speed_is_capped() {
        let lvl = level(&["..1.......", "", "", "", "", ""]);
        let s = PhysicsSettings {
            dimensions: LevelDimensions {
                columns: 10,
                rows: 60,
            },
            ..settings()
        };
        let mut body = body_at(&lvl, BodyColor::Red);
        let mut events = Vec::new();
        for _ in 0..40 {
            body.step(BodyIntent::IDLE, &lvl.map, &s, &mut events);
        }
        assert_relative_eq!(body.velocity().y, s.max_fall_speed);
    }

    #[test]
    fn playfield_clamps_sides_and_top() {
        let lvl = level(&FLOOR);
        let mut body = body_at(&lvl, BodyColor::Red);
        let mut events = Vec::new();
        for _ in 0..30 {
            body.step(BodyIntent::LEFT, &lvl.map, &settings(), &mut events);
        }
        assert_relative_eq!(body.bounding_box().left(), 0.0);
        for _ in 0..60 {
            body.step(BodyIntent::RIGHT, &lvl.map, &settings(), &mut events);
        }
        assert_relative_eq!(body.bounding_box().right(), 240.0);
    }

    #[test]
    fn motion_follows_velocity_and_ground() {
        let lvl = level(&FLOOR);
        let mut body = body_at(&lvl, BodyColor::Blue);
        let mut events = Vec::new();
        body.step(BodyIntent::IDLE, &lvl.map, &settings(), &mut events);
        assert_eq!(body.motion(), MotionState::Idle);
        body.step(BodyIntent::LEFT, &lvl.map, &settings(), &mut events);
        assert_eq!(body.motion(), MotionState::Running);
        assert_eq!(body.facing(), Facing::Left);
        body.step(BodyIntent::JUMP, &lvl.map, &settings(), &mut events);
        assert_eq!(body.motion(), MotionState::Airborne);
        assert_eq!(body.facing(), Facing::Left);
    }
}
