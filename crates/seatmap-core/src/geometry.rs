//! Screen ⇄ document coordinate mapping.
//!
//! The document is framed by a dynamically computed [`Viewport`], fitted into
//! the drawing surface (uniform scale, centered like SVG `xMidYMid meet`), and
//! then panned/zoomed by the [`ViewTransform`] camera. The composed matrix
//! maps document points to screen pixels; pointer events go the other way
//! through its inverse.

use crate::viewport::Viewport;
use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

// ─── Camera ──────────────────────────────────────────────────────────────

/// Zoom bounds and step sizes for a camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Relative step for zoom-in/zoom-out buttons.
    pub zoom_step: f64,
    /// Relative step per wheel notch.
    pub wheel_step: f64,
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            zoom_step: 0.3,
            wheel_step: 0.1,
        }
    }
}

/// Pan/zoom applied on top of the fitted document: `screen = pan + scale · p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub pan: Vec2,
    pub limits: CameraLimits,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(CameraLimits::default())
    }
}

impl ViewTransform {
    pub fn new(limits: CameraLimits) -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
            limits,
        }
    }

    pub fn affine(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.scale)
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan = Vec2::ZERO;
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Set the scale, keeping the surface-local point `pivot` fixed on screen.
    pub fn zoom_to(&mut self, scale: f64, pivot: Point) {
        let new_scale = scale.clamp(self.limits.min_scale, self.limits.max_scale);
        // The content point under the pivot must stay under the pivot.
        let content = (pivot - self.pan).to_vec2() / self.scale;
        self.pan = pivot.to_vec2() - content * new_scale;
        self.scale = new_scale;
    }

    pub fn zoom_in(&mut self, pivot: Point) {
        self.zoom_to(self.scale * (1.0 + self.limits.zoom_step), pivot);
    }

    pub fn zoom_out(&mut self, pivot: Point) {
        self.zoom_to(self.scale / (1.0 + self.limits.zoom_step), pivot);
    }

    /// Wheel zoom: positive `notches` zoom in.
    pub fn wheel(&mut self, notches: f64, pivot: Point) {
        let factor = (1.0 + self.limits.wheel_step).powf(notches);
        self.zoom_to(self.scale * factor, pivot);
    }
}

// ─── Fitting & mapping ───────────────────────────────────────────────────

/// Maps the viewport into a surface of `size` (surface-local coordinates),
/// preserving aspect ratio and centering the slack.
pub fn fit_viewport(viewport: &Viewport, size: Size) -> Affine {
    let vw = viewport.width.max(f64::EPSILON);
    let vh = viewport.height.max(f64::EPSILON);
    let s = (size.width / vw).min(size.height / vh);
    let s = if s.is_finite() && s > 0.0 { s } else { 1.0 };
    let tx = (size.width - vw * s) / 2.0 - viewport.min_x * s;
    let ty = (size.height - vh * s) / 2.0 - viewport.min_y * s;
    Affine::new([s, 0.0, 0.0, s, tx, ty])
}

/// Full document → screen matrix for a surface placed at `surface` on screen.
pub fn screen_matrix(viewport: &Viewport, surface: Rect, camera: &ViewTransform) -> Affine {
    Affine::translate(surface.origin().to_vec2())
        * camera.affine()
        * fit_viewport(viewport, surface.size())
}

/// Invert `matrix` to map a pointer position to document coordinates,
/// rounded to whole document units so labels and diffs stay stable.
pub fn pointer_to_document(pointer: Point, matrix: &Affine) -> Point {
    pointer_to_document_exact(pointer, matrix).round()
}

/// Unrounded inverse mapping. A singular matrix maps the pointer unchanged.
pub fn pointer_to_document_exact(pointer: Point, matrix: &Affine) -> Point {
    if matrix.determinant().abs() < f64::EPSILON {
        return pointer;
    }
    matrix.inverse() * pointer
}

/// True once the pointer moved more than `threshold` pixels along either axis.
pub fn exceeds_threshold(origin: Point, current: Point, threshold: f64) -> bool {
    (current.x - origin.x).abs() > threshold || (current.y - origin.y).abs() > threshold
}

// ─── Corner resize ───────────────────────────────────────────────────────

/// Corner handle of a decorative object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeCorner {
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeCorner {
    pub const ALL: [ResizeCorner; 4] = [Self::Ne, Self::Nw, Self::Se, Self::Sw];

    /// Unit direction of the corner from the center (+x east, +y south).
    pub const fn signs(self) -> (f64, f64) {
        match self {
            Self::Ne => (1.0, -1.0),
            Self::Nw => (-1.0, -1.0),
            Self::Se => (1.0, 1.0),
            Self::Sw => (-1.0, 1.0),
        }
    }

    /// Position of this corner on a box of `size` centered at `center`.
    pub fn position(self, center: Point, size: Size) -> Point {
        let (sx, sy) = self.signs();
        Point::new(
            center.x + sx * size.width / 2.0,
            center.y + sy * size.height / 2.0,
        )
    }
}

/// New `(width, height)` of a box centered at `center` when `corner` is
/// dragged to `pointer`. The center stays put, so each dimension is twice
/// the signed distance from the center towards the corner, floored at `min`.
/// Dragging past the center collapses to `min` instead of flipping.
pub fn resize_from_corner(center: Point, corner: ResizeCorner, pointer: Point, min: f64) -> Size {
    let (sx, sy) = corner.signs();
    let width = ((pointer.x - center.x) * sx * 2.0).max(min);
    let height = ((pointer.y - center.y) * sy * 2.0).max(min);
    Size::new(width, height)
}
