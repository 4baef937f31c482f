#![cfg_attr(docsrs, feature(doc_cfg))]
//! Simulation core for a two-character cooperative platformer.
//!
//! Levels are authored as text grids and materialised into a [`TileMap`].
//! A [`Simulation`] steps kinematic [`CharacterBody`]s against that map in
//! fixed increments, reports [`BodyEvent`]s and decides when every body
//! has reached its own goal door.
pub mod body;
pub mod collision;
pub mod completion;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod map;
pub mod numeric;
#[cfg(feature = "bevy")]
#[cfg_attr(docsrs, doc(cfg(feature = "bevy")))]
pub mod plugin;
pub mod presentation;
pub mod ramp;
pub mod settings;
pub mod simulation;
pub mod zones;
pub use constants::*;

pub use body::{BodyId, CharacterBody, Facing, MotionState};
pub use completion::LevelCompletionTracker;
pub use events::{BodyEvent, EventSink, RespawnCause};
pub use geometry::Aabb;
pub use input::{BodyIntent, Controller, ControllerBindings, InputScriptError, ScriptedController};
pub use logging::init as init_logging;
pub use map::{load_level, BodyColor, LevelError, LoadedLevel, TileKind, TileMap};
#[cfg(feature = "bevy")]
#[cfg_attr(docsrs, doc(cfg(feature = "bevy")))]
pub use plugin::TandemPlugin;
pub use presentation::{body_views, tile_views, BodyView, TileAnimator, TileView};
pub use settings::{PhysicsSettings, SettingsError};
pub use simulation::{Simulation, StepOutcome};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use tandem::prelude::*;
    //! ```

    pub use crate::input::{BodyIntent, Controller, ScriptedController};
    pub use crate::map::{load_level, BodyColor, LoadedLevel};
    pub use crate::settings::PhysicsSettings;
    pub use crate::simulation::{Simulation, StepOutcome};
    pub use crate::BodyEvent;
    pub use glam::Vec2;
}
