//! Input abstraction layer.
//!
//! Normalizes mouse, touch and pen events into a unified `InputEvent` in
//! screen coordinates (pixels, relative to the page). The editor maps them
//! into document space itself.

use seatmap_core::Point;
use serde::{Deserialize, Serialize};

/// Keyboard modifier state at the time of the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A normalized input event from any pointing device or the keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },

    /// Pointer left the drawing surface. Ends any drag like a release.
    PointerLeave,

    /// Wheel / pinch. Positive `delta` zooms in around `(x, y)`.
    Wheel { x: f64, y: f64, delta: f64 },

    /// Key press. `key` is the `KeyboardEvent.key` value.
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn key(key: &str, modifiers: Modifiers) -> Self {
        Self::Key {
            key: key.to_string(),
            modifiers,
        }
    }

    /// Extract position if this is a positioned pointer event.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y }
            | Self::Wheel { x, y, .. } => Some(Point::new(x, y)),
            Self::PointerLeave | Self::Key { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_of_pointer_events() {
        assert_eq!(
            InputEvent::pointer_down(3.0, 4.0).position(),
            Some(Point::new(3.0, 4.0))
        );
        assert_eq!(InputEvent::PointerLeave.position(), None);
    }

    #[test]
    fn decodes_host_json() {
        let ev: InputEvent =
            serde_json::from_str(r#"{ "type": "key", "key": "z", "modifiers": { "ctrl": true, "shift": false, "alt": false, "meta": false } }"#)
                .unwrap();
        assert_eq!(
            ev,
            InputEvent::key(
                "z",
                Modifiers {
                    ctrl: true,
                    ..Default::default()
                }
            )
        );
        let ev: InputEvent = serde_json::from_str(r#"{ "type": "pointer_leave" }"#).unwrap();
        assert_eq!(ev, InputEvent::PointerLeave);
    }
}
