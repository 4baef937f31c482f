//! Bevy integration for hosting a [`Simulation`] inside an `App`.
//!
//! Insert a [`SimulationState`] resource, push intents into
//! [`PendingIntents`] from input systems, and read [`LevelStatus`] and
//! [`StepEvents`] after each fixed step.

use bevy::prelude::*;

use crate::events::BodyEvent;
use crate::input::BodyIntent;
use crate::simulation::Simulation;

/// Resource wrapping the running simulation.
#[derive(Resource, Debug)]
pub struct SimulationState(pub Simulation);

/// Intents to apply on the next fixed step; cleared once consumed.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingIntents(pub Vec<BodyIntent>);

/// Completion result of the most recent fixed step.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelStatus {
    /// Every body was in its own goal door.
    pub complete: bool,
    /// Steps simulated so far.
    pub steps: u64,
}

/// Events produced by the most recent fixed step.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct StepEvents(pub Vec<BodyEvent>);

/// Advances the simulation once per `FixedUpdate`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TandemPlugin;

impl Plugin for TandemPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingIntents>();
        app.init_resource::<LevelStatus>();
        app.init_resource::<StepEvents>();
        app.add_systems(
            FixedUpdate,
            step_simulation_system.run_if(resource_exists::<SimulationState>),
        );
    }
}

/// Consumes pending intents and steps the simulation.
pub fn step_simulation_system(
    mut state: ResMut<SimulationState>,
    mut intents: ResMut<PendingIntents>,
    mut status: ResMut<LevelStatus>,
    mut events: ResMut<StepEvents>,
) {
    let outcome = state.0.step(&intents.0);
    intents.0.clear();
    events.0 = state.0.drain_events();
    *status = LevelStatus {
        complete: outcome.level_complete,
        steps: state.0.step_count(),
    };
}
