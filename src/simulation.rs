//! Fixed-step orchestration of a level and its bodies.
//!
//! [`Simulation`] owns the immutable tile map of the current level, the
//! physics settings, an ordered set of bodies and the completion tracker.
//! Each call to [`Simulation::step`] advances every body once, in order.

use std::mem;

use log::{debug, info};

use crate::body::{BodyId, CharacterBody};
use crate::completion::LevelCompletionTracker;
use crate::events::{BodyEvent, EventSink, RespawnCause};
use crate::input::BodyIntent;
use crate::map::{BodyColor, LoadedLevel, SpawnPoints, TileMap};
use crate::settings::PhysicsSettings;

/// Result of advancing the simulation by one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Every body occupied its own goal door at the end of the step.
    pub level_complete: bool,
}

/// A running level.
#[derive(Clone, Debug)]
pub struct Simulation {
    map: TileMap,
    spawns: SpawnPoints,
    settings: PhysicsSettings,
    bodies: Vec<CharacterBody>,
    completion: LevelCompletionTracker,
    events: Vec<BodyEvent>,
    steps: u64,
}

impl Simulation {
    /// Starts `level` with one red and one blue body.
    #[must_use]
    pub fn new(level: LoadedLevel, settings: PhysicsSettings) -> Self {
        Self::with_bodies(level, settings, &[BodyColor::Red, BodyColor::Blue])
    }

    /// Starts `level` with one body per entry of `colors`, in that order.
    #[must_use]
    pub fn with_bodies(level: LoadedLevel, settings: PhysicsSettings, colors: &[BodyColor]) -> Self {
        let size = settings.body_size();
        let bodies = colors
            .iter()
            .enumerate()
            .map(|(index, &color)| {
                CharacterBody::new(BodyId::new(index), color, level.spawns.for_color(color), size)
            })
            .collect();
        Self {
            map: level.map,
            spawns: level.spawns,
            settings,
            bodies,
            completion: LevelCompletionTracker::new(),
            events: Vec::new(),
            steps: 0,
        }
    }

    /// Advances every body once, buffering events for [`Self::drain_events`].
    ///
    /// `intents[i]` drives body `i`; bodies without an intent idle.
    pub fn step(&mut self, intents: &[BodyIntent]) -> StepOutcome {
        let mut events = mem::take(&mut self.events);
        let outcome = self.step_into(intents, &mut events);
        self.events = events;
        outcome
    }

    /// Advances every body once, delivering events to `sink`.
    pub fn step_into(&mut self, intents: &[BodyIntent], sink: &mut dyn EventSink) -> StepOutcome {
        for (index, body) in self.bodies.iter_mut().enumerate() {
            let intent = intents.get(index).copied().unwrap_or_default();
            body.step(intent, &self.map, &self.settings, sink);
        }
        self.steps = self.steps.saturating_add(1);
        StepOutcome {
            level_complete: self.completion.update(&self.bodies),
        }
    }

    /// Takes every event buffered by [`Self::step`] and the reset commands.
    pub fn drain_events(&mut self) -> Vec<BodyEvent> {
        mem::take(&mut self.events)
    }

    /// Whether the last step ended with every body on its goal door.
    #[must_use]
    pub const fn is_level_complete(&self) -> bool {
        self.completion.is_complete()
    }

    /// Sends one body back to its spawn point.
    ///
    /// Returns `false` when `id` names no body.
    pub fn reset_body(&mut self, id: BodyId) -> bool {
        let Some(body) = self.bodies.get_mut(id.index()) else {
            debug!("reset requested for unknown body {}", id.index());
            return false;
        };
        body.respawn(RespawnCause::Reset, &mut self.events);
        true
    }

    /// Sends every body back to its spawn point.
    pub fn reset_all_bodies(&mut self) {
        for body in &mut self.bodies {
            body.respawn(RespawnCause::Reset, &mut self.events);
        }
    }

    /// Replaces the current level and respawns every body on it.
    pub fn load_level(&mut self, level: LoadedLevel) {
        info!(
            "switching level ({} tiles, {} bodies)",
            level.map.iter().count(),
            self.bodies.len()
        );
        self.map = level.map;
        self.spawns = level.spawns;
        self.completion.reset();
        for body in &mut self.bodies {
            body.set_spawn_point(self.spawns.for_color(body.color()));
            body.respawn(RespawnCause::Reset, &mut self.events);
        }
    }

    /// Looks a body up by handle.
    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&CharacterBody> {
        self.bodies.get(id.index())
    }

    /// First body with the given colour.
    #[must_use]
    pub fn body_by_color(&self, color: BodyColor) -> Option<&CharacterBody> {
        self.bodies.iter().find(|body| body.color() == color)
    }

    /// Bodies in simulation order.
    #[must_use]
    pub fn bodies(&self) -> &[CharacterBody] {
        &self.bodies
    }

    /// Tile map of the current level.
    #[must_use]
    pub const fn tile_map(&self) -> &TileMap {
        &self.map
    }

    /// Spawn points of the current level.
    #[must_use]
    pub const fn spawns(&self) -> &SpawnPoints {
        &self.spawns
    }

    /// Physics settings in force.
    #[must_use]
    pub const fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    /// Steps taken since creation.
    #[must_use]
    pub const fn step_count(&self) -> u64 {
        self.steps
    }
}
