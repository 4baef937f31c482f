//! Abstract per-body input.
//!
//! Mapping physical keys or gamepads onto intents happens outside the core.
//! Each step the simulation consumes one [`BodyIntent`] per body, usually
//! sampled from the [`Controller`] bound to that body.

use log::debug;
use thiserror::Error;

use crate::body::BodyId;

/// What a player wants a body to do this step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BodyIntent {
    /// Left is held.
    pub move_left: bool,
    /// Right is held.
    pub move_right: bool,
    /// Jump is held.
    pub jump: bool,
}

impl BodyIntent {
    /// No input.
    pub const IDLE: Self = Self {
        move_left: false,
        move_right: false,
        jump: false,
    };
    /// Hold left.
    pub const LEFT: Self = Self {
        move_left: true,
        move_right: false,
        jump: false,
    };
    /// Hold right.
    pub const RIGHT: Self = Self {
        move_left: false,
        move_right: true,
        jump: false,
    };
    /// Press jump.
    pub const JUMP: Self = Self {
        move_left: false,
        move_right: false,
        jump: true,
    };

    /// Returns the intent with jump also held.
    #[must_use]
    pub const fn with_jump(self) -> Self {
        Self { jump: true, ..self }
    }
}

/// Raised when an input script contains an unknown symbol.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown input symbol {symbol:?} at position {position}")]
pub struct InputScriptError {
    /// The offending symbol.
    pub symbol: char,
    /// Character offset inside the script.
    pub position: usize,
}

/// Source of one intent per step for a single body.
pub trait Controller: Send + Sync {
    /// Intent for the upcoming step.
    fn sample(&mut self) -> BodyIntent;
}

impl<F> Controller for F
where
    F: FnMut() -> BodyIntent + Send + Sync,
{
    fn sample(&mut self) -> BodyIntent {
        self()
    }
}

/// Replays a fixed sequence of intents, then idles (or loops).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedController {
    steps: Vec<BodyIntent>,
    cursor: usize,
    looping: bool,
}

impl ScriptedController {
    /// Wraps an explicit intent sequence.
    #[must_use]
    pub const fn new(steps: Vec<BodyIntent>) -> Self {
        Self {
            steps,
            cursor: 0,
            looping: false,
        }
    }

    /// Parses a compact script with one symbol per step.
    ///
    /// `.` idle, `L` left, `R` right, `J` jump, `l` jump while moving left,
    /// `r` jump while moving right. Whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`InputScriptError`] for any other symbol.
    ///
    /// # Examples
    /// ```
    /// use tandem::input::{BodyIntent, Controller, ScriptedController};
    /// let mut script = ScriptedController::parse("RR J").unwrap();
    /// assert_eq!(script.sample(), BodyIntent::RIGHT);
    /// assert_eq!(script.sample(), BodyIntent::RIGHT);
    /// assert_eq!(script.sample(), BodyIntent::JUMP);
    /// assert_eq!(script.sample(), BodyIntent::IDLE);
    /// ```
    pub fn parse(script: &str) -> Result<Self, InputScriptError> {
        let mut steps = Vec::with_capacity(script.len());
        for (position, symbol) in script.chars().enumerate() {
            let intent = match symbol {
                '.' => BodyIntent::IDLE,
                'L' => BodyIntent::LEFT,
                'R' => BodyIntent::RIGHT,
                'J' => BodyIntent::JUMP,
                'l' => BodyIntent::LEFT.with_jump(),
                'r' => BodyIntent::RIGHT.with_jump(),
                s if s.is_whitespace() => continue,
                _ => return Err(InputScriptError { symbol, position }),
            };
            steps.push(intent);
        }
        Ok(Self::new(steps))
    }

    /// Appends `count` repetitions of `intent`.
    #[must_use]
    pub fn then_hold(mut self, intent: BodyIntent, count: usize) -> Self {
        self.steps.extend(std::iter::repeat(intent).take(count));
        self
    }

    /// Restarts the script when it runs out instead of idling.
    #[must_use]
    pub fn looped(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Steps left before the script finishes (ignores looping).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.cursor)
    }
}

impl Controller for ScriptedController {
    fn sample(&mut self) -> BodyIntent {
        if self.cursor >= self.steps.len() && self.looping {
            self.cursor = 0;
        }
        let intent = self.steps.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        intent
    }
}

/// Controllers bound to bodies by id.
#[derive(Default)]
pub struct ControllerBindings {
    bindings: Vec<Option<Box<dyn Controller>>>,
}

impl ControllerBindings {
    /// Creates an empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `controller` to `body`, replacing any previous binding.
    pub fn bind(&mut self, body: BodyId, controller: impl Controller + 'static) {
        let index = body.index();
        if self.bindings.len() <= index {
            self.bindings.resize_with(index + 1, || None);
        }
        if let Some(slot) = self.bindings.get_mut(index) {
            if slot.is_some() {
                debug!("replacing controller for body {index}");
            }
            *slot = Some(Box::new(controller));
        }
    }

    /// Removes the controller bound to `body`; it will idle from now on.
    pub fn unbind(&mut self, body: BodyId) {
        if let Some(slot) = self.bindings.get_mut(body.index()) {
            *slot = None;
        }
    }

    /// Samples one intent for each of `body_count` bodies; unbound bodies idle.
    pub fn sample(&mut self, body_count: usize) -> Vec<BodyIntent> {
        (0..body_count)
            .map(|index| {
                self.bindings
                    .get_mut(index)
                    .and_then(Option::as_mut)
                    .map_or(BodyIntent::IDLE, |controller| controller.sample())
            })
            .collect()
    }
}
