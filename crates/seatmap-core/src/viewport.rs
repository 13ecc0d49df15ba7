//! Bounding viewport derivation.
//!
//! The visible canvas always frames all content: the union of every seat
//! point and every decorative object box, grown by a padding. An empty scene
//! falls back to its nominal canvas size at the origin.

use crate::model::SceneView;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Padding added around content, in document units.
pub const DEFAULT_PADDING: f64 = 60.0;

/// Axis-aligned document rectangle used to frame rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.min_x + self.width / 2.0, self.min_y + self.height / 2.0)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x(), self.max_y())
    }

    /// Grow the top edge by `offset` (room for a stage banner).
    pub fn extend_top(self, offset: f64) -> Self {
        Self {
            min_y: self.min_y - offset,
            height: self.height + offset,
            ..self
        }
    }
}

impl From<Rect> for Viewport {
    fn from(r: Rect) -> Self {
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

/// Formats as an SVG `viewBox` value: `min_x min_y width height`.
impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Minimal viewport framing every seat point and object box, plus `padding`
/// on all sides. Seats count as zero-size points here; the render radius is
/// covered by the padding.
pub fn compute_viewport(view: SceneView<'_>, padding: f64) -> Viewport {
    let seat_points = view.seats.iter().map(|s| Rect::from_points(s.position(), s.position()));
    let object_boxes = view.objects.iter().map(|o| o.bounds());

    let Some(content) = seat_points.chain(object_boxes).reduce(|acc, r| acc.union(r)) else {
        return Viewport::new(0.0, 0.0, view.width, view.height);
    };

    let framed = content.inflate(padding, padding);
    // A single point with zero padding would be degenerate.
    Viewport::new(
        framed.x0,
        framed.y0,
        framed.width().max(1.0),
        framed.height().max(1.0),
    )
}

/// Single-slot memo for the derived viewport, keyed by a scene revision
/// counter that the owner bumps on every mutation.
#[derive(Debug, Clone, Default)]
pub struct ViewportMemo {
    slot: Option<(u64, u64, Viewport)>,
}

impl ViewportMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, revision: u64, view: SceneView<'_>, padding: f64) -> Viewport {
        let pad_bits = padding.to_bits();
        if let Some((rev, pad, vp)) = self.slot
            && rev == revision
            && pad == pad_bits
        {
            return vp;
        }
        let vp = compute_viewport(view, padding);
        log::trace!("viewport recomputed for revision {revision}: {vp}");
        self.slot = Some((revision, pad_bits, vp));
        vp
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
