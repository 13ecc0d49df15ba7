//! Hit testing: document point → seat / object / resize handle.
//!
//! Objects paint first and seats on top, so the walk goes the other way:
//! resize handles of the selected object, then seats (last painted first),
//! then objects (last painted first).

use crate::outline::{object_outline, seat_outline};
use kurbo::{Circle, Point, Shape, Size};
use seatmap_core::geometry::ResizeCorner;
use seatmap_core::{ElementId, SceneView};

/// Radius of a resize handle, in document units.
pub const HANDLE_RADIUS: f64 = 6.0;

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Seat(ElementId),
    Object(ElementId),
    ResizeHandle {
        object: ElementId,
        corner: ResizeCorner,
    },
}

impl Hit {
    pub fn id(&self) -> ElementId {
        match *self {
            Self::Seat(id) | Self::Object(id) => id,
            Self::ResizeHandle { object, .. } => object,
        }
    }
}

/// Find the topmost target at document point `pt`. `selected_object` is the
/// object whose resize handles are showing, if any.
/// Returns `None` on empty canvas.
pub fn hit_test(view: SceneView<'_>, selected_object: Option<ElementId>, pt: Point) -> Option<Hit> {
    if let Some(id) = selected_object
        && let Some(corner) = hit_test_handles(view, id, pt)
    {
        return Some(Hit::ResizeHandle { object: id, corner });
    }

    if let Some(id) = hit_test_seat(view, pt) {
        return Some(Hit::Seat(id));
    }

    view.objects
        .iter()
        .rev()
        .find(|o| object_outline(o.bounds()).contains(pt))
        .map(|o| Hit::Object(o.id))
}

/// Topmost seat under `pt`, ignoring objects.
pub fn hit_test_seat(view: SceneView<'_>, pt: Point) -> Option<ElementId> {
    view.seats
        .iter()
        .rev()
        .find(|s| seat_outline(s.shape, s.position()).contains(pt))
        .map(|s| s.id)
}

/// Corner handle of object `id` under `pt`.
pub fn hit_test_handles(view: SceneView<'_>, id: ElementId, pt: Point) -> Option<ResizeCorner> {
    let obj = view.objects.iter().find(|o| o.id == id)?;
    let size = Size::new(obj.width, obj.height);
    ResizeCorner::ALL
        .into_iter()
        .find(|corner| Circle::new(corner.position(obj.center(), size), HANDLE_RADIUS).contains(pt))
}
