//! Gameplay events emitted while stepping bodies.
//!
//! The core never depends on who listens. Events are pushed into an
//! [`EventSink`]; `Vec<BodyEvent>` is the buffering sink used by
//! [`crate::Simulation`], and audio or UI layers can supply their own.

use std::fmt;

use crate::body::BodyId;

/// Why a body was sent back to its spawn point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RespawnCause {
    /// Feet touched a hazard.
    Hazard,
    /// Feet touched a colour zone of the other character.
    WrongColor,
    /// Fell below the playfield.
    OutOfBounds,
    /// Reset requested by the orchestrator.
    Reset,
}

/// A single event tagged with the body it concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyEvent {
    /// The body started a jump.
    Jumped(BodyId),
    /// The body touched down after being airborne.
    Landed(BodyId),
    /// The body was relocated to its spawn point.
    Respawned {
        /// Body that respawned.
        body: BodyId,
        /// What triggered it.
        cause: RespawnCause,
    },
}

impl BodyEvent {
    /// Body the event concerns.
    #[must_use]
    pub const fn body(&self) -> BodyId {
        match *self {
            Self::Jumped(body) | Self::Landed(body) | Self::Respawned { body, .. } => body,
        }
    }
}

impl fmt::Display for BodyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jumped(body) => write!(f, "body {} jumped", body.index()),
            Self::Landed(body) => write!(f, "body {} landed", body.index()),
            Self::Respawned { body, cause } => {
                write!(f, "body {} respawned ({cause:?})", body.index())
            }
        }
    }
}

/// Receiver of body events.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    /// Called when `body` starts a jump.
    fn on_jump(&mut self, body: BodyId);
    /// Called when `body` lands after being airborne on the previous step.
    fn on_land(&mut self, body: BodyId);
    /// Called when `body` respawns.
    fn on_respawn(&mut self, body: BodyId, cause: RespawnCause);
}

impl EventSink for Vec<BodyEvent> {
    fn on_jump(&mut self, body: BodyId) {
        self.push(BodyEvent::Jumped(body));
    }

    fn on_land(&mut self, body: BodyId) {
        self.push(BodyEvent::Landed(body));
    }

    fn on_respawn(&mut self, body: BodyId, cause: RespawnCause) {
        self.push(BodyEvent::Respawned { body, cause });
    }
}
