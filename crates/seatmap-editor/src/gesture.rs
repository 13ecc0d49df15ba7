//! Drag and resize gesture recognizer.
//!
//! A two-stage recognizer driven by raw pointer positions: a press is
//! *armed* until the pointer travels more than the threshold (in screen
//! pixels, along either axis), then becomes a *drag*. Releasing an armed
//! press is a click; releasing a drag yields the final preview position.
//! Resizes start directly from a corner handle.
//!
//! Nothing here touches the scene. Previews live in the recognizer until the
//! editor commits the outcome on release.

use seatmap_core::geometry::{ResizeCorner, exceeds_threshold, resize_from_corner};
use seatmap_core::{ElementId, Point, Rect, Size};
use seatmap_render::Hit;

/// Element being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Seat(ElementId),
    Object(ElementId),
}

impl DragTarget {
    pub fn id(&self) -> ElementId {
        match *self {
            Self::Seat(id) | Self::Object(id) => id,
        }
    }

    /// Press target for a hit. Grabbing a resize handle targets its object.
    pub fn from_hit(hit: Hit) -> Self {
        match hit {
            Hit::Seat(id) => Self::Seat(id),
            Hit::Object(id) | Hit::ResizeHandle { object: id, .. } => Self::Object(id),
        }
    }
}

impl From<DragTarget> for Hit {
    fn from(target: DragTarget) -> Self {
        match target {
            DragTarget::Seat(id) => Hit::Seat(id),
            DragTarget::Object(id) => Hit::Object(id),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Pointer is down but has not crossed the threshold.
    Armed {
        target: Option<DragTarget>,
        /// Screen position of the press.
        origin: Point,
        /// Whether crossing the threshold starts a drag.
        movable: bool,
    },
    Dragging {
        target: DragTarget,
        /// Document position the element is previewed at.
        preview: Point,
    },
    Resizing {
        object: ElementId,
        corner: ResizeCorner,
        center: Point,
        original: Size,
        preview: Size,
    },
}

/// What a finished gesture amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    None,
    /// Press and release without a drag.
    Click(Option<DragTarget>),
    Move { target: DragTarget, to: Point },
    Resize { object: ElementId, size: Size },
}

impl Gesture {
    pub fn press(target: Option<DragTarget>, origin: Point, movable: bool) -> Self {
        Self::Armed {
            target,
            origin,
            movable,
        }
    }

    pub fn resize(object: ElementId, corner: ResizeCorner, center: Point, size: Size) -> Self {
        Self::Resizing {
            object,
            corner,
            center,
            original: size,
            preview: size,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Feed a pointer move. `screen` drives the threshold, `doc` (already
    /// rounded) drives previews. Returns true when a preview changed.
    pub fn motion(&mut self, screen: Point, doc: Point, threshold: f64, min_size: f64) -> bool {
        match self {
            Self::Idle => false,
            Self::Armed {
                target: Some(target),
                origin,
                movable: true,
            } => {
                if !exceeds_threshold(*origin, screen, threshold) {
                    return false;
                }
                let target = *target;
                log::trace!("drag started on {:?}", target.id());
                *self = Self::Dragging {
                    target,
                    preview: doc,
                };
                true
            }
            Self::Armed { .. } => false,
            Self::Dragging { preview, .. } => {
                let changed = *preview != doc;
                *preview = doc;
                changed
            }
            Self::Resizing {
                corner,
                center,
                preview,
                ..
            } => {
                let size = resize_from_corner(*center, *corner, doc, min_size);
                let changed = *preview != size;
                *preview = size;
                changed
            }
        }
    }

    /// Finish the gesture and reset to idle.
    pub fn release(&mut self) -> GestureEnd {
        match std::mem::take(self) {
            Self::Idle => GestureEnd::None,
            Self::Armed { target, .. } => GestureEnd::Click(target),
            Self::Dragging { target, preview } => GestureEnd::Move { target, to: preview },
            Self::Resizing {
                object,
                original,
                preview,
                ..
            } => {
                if preview == original {
                    GestureEnd::None
                } else {
                    GestureEnd::Resize {
                        object,
                        size: preview,
                    }
                }
            }
        }
    }

    /// Pointer left the surface: drags and resizes finish as on release, a
    /// pending click is dropped.
    pub fn leave(&mut self) -> GestureEnd {
        match self.release() {
            GestureEnd::Click(_) => GestureEnd::None,
            end => end,
        }
    }

    /// Drop the gesture without an outcome.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Live position of a dragged seat.
    pub fn seat_preview(&self) -> Option<(ElementId, Point)> {
        match *self {
            Self::Dragging {
                target: DragTarget::Seat(id),
                preview,
            } => Some((id, preview)),
            _ => None,
        }
    }

    /// Live box of a dragged or resized object, given the object's committed
    /// size for drags.
    pub fn object_preview(&self, committed_size: impl Fn(ElementId) -> Option<Size>) -> Option<(ElementId, Rect)> {
        match *self {
            Self::Dragging {
                target: DragTarget::Object(id),
                preview,
            } => committed_size(id).map(|size| (id, Rect::from_center_size(preview, size))),
            Self::Resizing {
                object,
                center,
                preview,
                ..
            } => Some((object, Rect::from_center_size(center, preview))),
            _ => None,
        }
    }
}
