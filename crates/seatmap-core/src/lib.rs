pub mod error;
pub mod format;
pub mod generate;
pub mod geometry;
pub mod id;
pub mod lint;
pub mod model;
pub mod viewport;

pub use error::{Result, SeatMapError};
pub use format::{MapDocument, Zone, emit_map, parse_map};
pub use generate::{CircleLayout, GridLayout, SeatTemplate, generate_circle, generate_grid};
pub use geometry::{CameraLimits, ResizeCorner, ViewTransform, pointer_to_document};
pub use id::{ElementId, EntryTypeId};
pub use lint::{LintDiagnostic, LintSeverity, LintSubject, lint_scene};
pub use model::*;
pub use viewport::{DEFAULT_PADDING, Viewport, ViewportMemo, compute_viewport};

// Re-export kurbo geometry so downstream crates share one Point/Rect/Affine.
pub use kurbo::{Affine, Point, Rect, Size, Vec2};
