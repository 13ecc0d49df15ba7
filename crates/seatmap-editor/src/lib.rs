//! Seat map editor engine.
//!
//! Owns an editable [`seatmap_core::Scene`] and turns pointer, wheel and
//! keyboard input into committed, undoable edits. Rendering is delegated to
//! `seatmap-render` display lists; hosts only forward events and draw.

pub mod config;
pub mod editor;
pub mod gesture;
pub mod history;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use config::EditorConfig;
pub use editor::{Editor, MapSink, ObjectEdit, Response, SeatEdit};
pub use gesture::{DragTarget, Gesture, GestureEnd};
pub use history::{History, Snapshot};
pub use input::{InputEvent, Modifiers};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::{ClickAction, Selection, ToolKind, ToolState};
