//! Utility helpers for tests.
//!
//! Fixtures build small levels from literal rows; the stepping helpers run
//! a [`Simulation`] for a number of steps and collect what happened.

pub mod levels;

use tandem::map::TileClass;
use tandem::{BodyColor, BodyEvent, BodyIntent, CharacterBody, RespawnCause, Simulation};

/// Steps `simulation` `count` times with the same `intents`, returning every
/// event emitted along the way.
pub fn run_steps(simulation: &mut Simulation, intents: &[BodyIntent], count: usize) -> Vec<BodyEvent> {
    let mut events = Vec::new();
    for _ in 0..count {
        simulation.step(intents);
        events.extend(simulation.drain_events());
    }
    events
}

/// Steps until `done` returns true or `limit` steps have passed.
///
/// Returns the number of steps taken, or `None` when the limit was hit.
pub fn step_until(
    simulation: &mut Simulation,
    intents: &[BodyIntent],
    limit: usize,
    mut done: impl FnMut(&Simulation) -> bool,
) -> Option<usize> {
    for taken in 1..=limit {
        simulation.step(intents);
        if done(simulation) {
            return Some(taken);
        }
    }
    None
}

/// Respawn causes in `events`, in order.
pub fn respawn_causes(events: &[BodyEvent]) -> Vec<RespawnCause> {
    events
        .iter()
        .filter_map(|event| match event {
            BodyEvent::Respawned { cause, .. } => Some(*cause),
            _ => None,
        })
        .collect()
}

/// The body of `color`.
///
/// # Panics
/// Panics if the simulation has no such body.
pub fn body(simulation: &Simulation, color: BodyColor) -> &CharacterBody {
    simulation
        .body_by_color(color)
        .unwrap_or_else(|| panic!("simulation has no {color:?} body"))
}

/// Assert that `body` does not overlap any solid tile.
///
/// # Panics
/// Panics naming the first overlapped tile.
pub fn assert_clear_of_solids(simulation: &Simulation, body: &CharacterBody) {
    let bounds = body.bounding_box();
    if let Some(tile) = simulation
        .tile_map()
        .overlapping(bounds, TileClass::Solid)
        .next()
    {
        panic!(
            "{:?} body at {:?} overlaps solid at ({}, {})",
            body.color(),
            bounds,
            tile.column,
            tile.row
        );
    }
}
