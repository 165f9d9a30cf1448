//! Input sensors that turn raw pointer, touch, and key input into drag lifecycle events.
//!
//! Pointer sensors hold a press as pending until its activation constraint is
//! met, so a plain click never starts a drag. The keyboard sensor maps keys
//! onto pick-up, move, drop, and cancel.

use crate::domain::Id;
use crate::error::{BoardError, Result};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Condition a press must satisfy before it becomes a drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivationConstraint {
    /// Activate once the pointer has moved more than `distance` from the press point.
    Distance { distance: f64 },
    /// Activate once the press has been held for `delay_ms`; moving more than
    /// `tolerance` before that aborts.
    Delay { delay_ms: u64, tolerance: f64 },
}

/// Sensor configuration for a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub mouse: ActivationConstraint,
    pub touch: ActivationConstraint,
    /// Pixels moved per arrow key press during a keyboard drag.
    pub keyboard_step: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            mouse: ActivationConstraint::Distance { distance: 5.0 },
            touch: ActivationConstraint::Delay {
                delay_ms: 100,
                tolerance: 5.0,
            },
            keyboard_step: 25.0,
        }
    }
}

impl SensorConfig {
    /// Rejects negative thresholds and a non-positive keyboard step
    pub fn validate(&self) -> Result<()> {
        for constraint in [self.mouse, self.touch] {
            let threshold = match constraint {
                ActivationConstraint::Distance { distance } => distance,
                ActivationConstraint::Delay { tolerance, .. } => tolerance,
            };
            if !(threshold >= 0.0) {
                return Err(BoardError::ConfigError(format!(
                    "activation threshold must be non-negative, got {}",
                    threshold
                )));
            }
        }
        if !(self.keyboard_step > 0.0) {
            return Err(BoardError::ConfigError(format!(
                "keyboard_step must be positive, got {}",
                self.keyboard_step
            )));
        }
        Ok(())
    }

    pub fn mouse_sensor(&self) -> PointerSensor {
        PointerSensor::new(self.mouse)
    }

    pub fn touch_sensor(&self) -> PointerSensor {
        PointerSensor::new(self.touch)
    }

    pub fn keyboard_sensor(&self) -> KeyboardSensor {
        KeyboardSensor::new(self.keyboard_step)
    }
}

/// What a pointer sensor decided for one input event
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    /// Press registered, constraint not yet satisfied.
    Pending,
    /// Constraint satisfied; start a drag for this id.
    Activate(Id),
    /// Drag in progress moved to a new pointer position.
    Move(Point),
    /// Drag in progress released; end the drag for this id.
    Release(Id),
    /// Pending press released before activation.
    Click(Id),
    /// Pending press abandoned (touch tolerance exceeded).
    Abort,
    /// No press is being tracked.
    Ignored,
}

#[derive(Debug, Clone)]
struct Press {
    id: Id,
    origin: Point,
    pressed_at_ms: u64,
}

/// Mouse or touch sensor gated by an [`ActivationConstraint`]
#[derive(Debug, Clone)]
pub struct PointerSensor {
    constraint: ActivationConstraint,
    pending: Option<Press>,
    active: Option<Id>,
}

impl PointerSensor {
    pub fn new(constraint: ActivationConstraint) -> Self {
        Self {
            constraint,
            pending: None,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_down(&mut self, id: impl Into<Id>, point: Point, now_ms: u64) -> SensorEvent {
        self.active = None;
        self.pending = Some(Press {
            id: id.into(),
            origin: point,
            pressed_at_ms: now_ms,
        });
        SensorEvent::Pending
    }

    pub fn on_move(&mut self, point: Point, now_ms: u64) -> SensorEvent {
        if self.active.is_some() {
            return SensorEvent::Move(point);
        }
        let Some(press) = &self.pending else {
            return SensorEvent::Ignored;
        };

        let moved = (point - press.origin).hypot();
        match self.constraint {
            ActivationConstraint::Distance { distance } => {
                if moved > distance {
                    return self.activate();
                }
                SensorEvent::Pending
            }
            ActivationConstraint::Delay { delay_ms, tolerance } => {
                if moved > tolerance {
                    debug!(id = %press.id, moved, "press moved beyond tolerance");
                    self.pending = None;
                    return SensorEvent::Abort;
                }
                if now_ms.saturating_sub(press.pressed_at_ms) >= delay_ms {
                    return self.activate();
                }
                SensorEvent::Pending
            }
        }
    }

    /// Timer tick for delay constraints; a stationary press activates here
    pub fn on_tick(&mut self, now_ms: u64) -> SensorEvent {
        let Some(press) = &self.pending else {
            return SensorEvent::Ignored;
        };
        match self.constraint {
            ActivationConstraint::Delay { delay_ms, .. }
                if now_ms.saturating_sub(press.pressed_at_ms) >= delay_ms =>
            {
                self.activate()
            }
            _ => SensorEvent::Pending,
        }
    }

    pub fn on_up(&mut self) -> SensorEvent {
        if let Some(id) = self.active.take() {
            return SensorEvent::Release(id);
        }
        match self.pending.take() {
            Some(press) => SensorEvent::Click(press.id),
            None => SensorEvent::Ignored,
        }
    }

    fn activate(&mut self) -> SensorEvent {
        match self.pending.take() {
            Some(press) => {
                debug!(id = %press.id, "drag activated");
                self.active = Some(press.id.clone());
                SensorEvent::Activate(press.id)
            }
            None => SensorEvent::Ignored,
        }
    }
}

/// Keys the keyboard sensor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardAction {
    PickUp,
    Move(Vec2),
    Drop,
    Cancel,
}

/// Keyboard drags: Space/Enter pick up and drop, arrows move, Escape cancels
#[derive(Debug, Clone)]
pub struct KeyboardSensor {
    step: f64,
    active: bool,
}

impl KeyboardSensor {
    pub fn new(step: f64) -> Self {
        Self { step, active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn on_key(&mut self, key: Key) -> Option<KeyboardAction> {
        match (self.active, key) {
            (false, Key::Space | Key::Enter) => {
                self.active = true;
                Some(KeyboardAction::PickUp)
            }
            (true, Key::Space | Key::Enter) => {
                self.active = false;
                Some(KeyboardAction::Drop)
            }
            (true, Key::Escape) => {
                self.active = false;
                Some(KeyboardAction::Cancel)
            }
            (true, Key::ArrowUp) => Some(KeyboardAction::Move(Vec2::new(0.0, -self.step))),
            (true, Key::ArrowDown) => Some(KeyboardAction::Move(Vec2::new(0.0, self.step))),
            (true, Key::ArrowLeft) => Some(KeyboardAction::Move(Vec2::new(-self.step, 0.0))),
            (true, Key::ArrowRight) => Some(KeyboardAction::Move(Vec2::new(self.step, 0.0))),
            _ => None,
        }
    }
}
