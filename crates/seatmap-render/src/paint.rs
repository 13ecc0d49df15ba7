//! Scene → display list.
//!
//! Walks the seats and decorative objects and emits backend-agnostic paint
//! operations (fills, strokes, labels) over kurbo outlines. Objects paint
//! first and seats on top. A host replays the list on SVG, a canvas or a GPU
//! scene.

use crate::hit::HANDLE_RADIUS;
use crate::outline::{Outline, object_outline, seat_outline};
use kurbo::{Circle, Point, Rect, Size};
use seatmap_core::geometry::ResizeCorner;
use seatmap_core::{Color, DecorativeObject, ElementId, SceneView, Seat, SeatStatus, Viewport};

// ─── Display list ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill {
        outline: Outline,
        color: Color,
    },
    Stroke {
        outline: Outline,
        color: Color,
        width: f64,
        /// `[dash, gap]` for dashed strokes.
        dash: Option<[f64; 2]>,
    },
    Text {
        anchor: Point,
        text: String,
        color: Color,
        size: f64,
    },
}

/// One paint operation and the element it belongs to (`None` for chrome such
/// as the stage banner).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub element: Option<ElementId>,
    pub cmd: DrawCmd,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub items: Vec<DrawItem>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Paint operations belonging to `id`, in paint order.
    pub fn for_element(&self, id: ElementId) -> impl Iterator<Item = &DrawCmd> {
        self.items
            .iter()
            .filter(move |i| i.element == Some(id))
            .map(|i| &i.cmd)
    }

    fn push(&mut self, element: Option<ElementId>, cmd: DrawCmd) {
        self.items.push(DrawItem { element, cmd });
    }

    fn fill(&mut self, element: Option<ElementId>, outline: Outline, color: Color) {
        self.push(element, DrawCmd::Fill { outline, color });
    }

    fn stroke(&mut self, element: Option<ElementId>, outline: Outline, color: Color, width: f64) {
        self.push(
            element,
            DrawCmd::Stroke {
                outline,
                color,
                width,
                dash: None,
            },
        );
    }

    fn text(&mut self, element: Option<ElementId>, anchor: Point, text: &str, color: Color, size: f64) {
        self.push(
            element,
            DrawCmd::Text {
                anchor,
                text: text.to_string(),
                color,
                size,
            },
        );
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

pub const BRAND_GREEN: Color = rgb(0x00, 0xa6, 0x51);
pub const BRAND_ORANGE: Color = rgb(0xf2, 0x93, 0x25);
pub const SLATE_200: Color = rgb(0xe2, 0xe8, 0xf0);
pub const SLATE_400: Color = rgb(0x94, 0xa3, 0xb8);
pub const SLATE_500: Color = rgb(0x64, 0x74, 0x8b);
pub const SLATE_600: Color = rgb(0x47, 0x55, 0x69);
pub const SLATE_700: Color = rgb(0x33, 0x41, 0x55);
pub const SLATE_800: Color = rgb(0x1e, 0x29, 0x3b);
pub const RED_300: Color = rgb(0xfc, 0xa5, 0xa5);
pub const RED_500: Color = rgb(0xef, 0x44, 0x44);
pub const WHITE: Color = rgb(0xff, 0xff, 0xff);

/// Tint alpha for free seats (`0x33`).
const FREE_TINT: f32 = 0x33 as f32 / 255.0;
/// Tint alpha for blocked seats (`0x4D`).
const BLOCKED_TINT: f32 = 0x4d as f32 / 255.0;
/// Decorative object fill opacity.
const OBJECT_TINT: f32 = 0.3;

/// Colors for one seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatPaint {
    pub fill: Color,
    pub stroke: Color,
    pub text: Color,
}

impl SeatPaint {
    /// Same paint at `factor` of its opacity.
    fn faded(self, factor: f32) -> Self {
        let fade = |c: Color| c.with_alpha(c.a * factor);
        Self {
            fill: fade(self.fill),
            stroke: fade(self.stroke),
            text: fade(self.text),
        }
    }
}

/// Status palette used by the read-only viewer. A free seat with an entry
/// type color is tinted with that color instead of brand green.
pub fn viewer_seat_paint(seat: &Seat) -> SeatPaint {
    let type_color = seat.entry_type.as_ref().map(|t| t.color);
    match (seat.status, type_color) {
        (SeatStatus::Free, Some(c)) => SeatPaint {
            fill: c.with_alpha(FREE_TINT),
            stroke: c,
            text: SLATE_200,
        },
        (SeatStatus::Free, None) => SeatPaint {
            fill: BRAND_GREEN.with_alpha(FREE_TINT),
            stroke: BRAND_GREEN,
            text: SLATE_200,
        },
        (SeatStatus::Selected, _) => SeatPaint {
            fill: BRAND_ORANGE,
            stroke: BRAND_ORANGE,
            text: WHITE,
        },
        (SeatStatus::Occupied | SeatStatus::Sold, _) => SeatPaint {
            fill: SLATE_600,
            stroke: SLATE_500,
            text: SLATE_400,
        },
        (SeatStatus::Blocked, _) => SeatPaint {
            fill: RED_500.with_alpha(BLOCKED_TINT),
            stroke: RED_500,
            text: RED_300,
        },
    }
}

/// Editor paint: neutral slate, or the entry type color (brand green when
/// untyped) for the selected seat.
pub fn editor_seat_paint(seat: &Seat, selected: bool) -> SeatPaint {
    if selected {
        let c = seat.entry_type.as_ref().map_or(BRAND_GREEN, |t| t.color);
        SeatPaint {
            fill: c,
            stroke: c,
            text: WHITE,
        }
    } else {
        SeatPaint {
            fill: SLATE_700,
            stroke: SLATE_500,
            text: SLATE_200,
        }
    }
}

// ─── Editor painting ─────────────────────────────────────────────────────────

/// Transient editor state painted over the committed scene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EditorOverlay {
    pub selected_seat: Option<ElementId>,
    pub selected_object: Option<ElementId>,
    /// Live drag position of a seat, not yet committed.
    pub seat_preview: Option<(ElementId, Point)>,
    /// Live drag/resize box of an object, not yet committed.
    pub object_preview: Option<(ElementId, Rect)>,
}

/// Paint the editing surface: objects (with selection highlight and resize
/// handles) then seats, with live previews replacing committed geometry.
pub fn paint_editor(view: SceneView<'_>, overlay: &EditorOverlay) -> DisplayList {
    let mut list = DisplayList::default();

    for obj in view.objects {
        let bounds = match overlay.object_preview {
            Some((id, rect)) if id == obj.id => rect,
            _ => obj.bounds(),
        };
        let selected = overlay.selected_object == Some(obj.id);
        paint_object(&mut list, obj, bounds, selected);
        if selected {
            paint_handles(&mut list, obj.id, bounds);
        }
    }

    for seat in view.seats {
        let center = match overlay.seat_preview {
            Some((id, p)) if id == seat.id => p,
            _ => seat.position(),
        };
        let paint = editor_seat_paint(seat, overlay.selected_seat == Some(seat.id));
        paint_seat(&mut list, seat, center, paint);
    }

    log::trace!("editor display list: {} items", list.len());
    list
}

fn paint_object(list: &mut DisplayList, obj: &DecorativeObject, bounds: Rect, selected: bool) {
    let id = Some(obj.id);
    let color = obj.display_color();
    if selected {
        let halo = object_outline(bounds.inflate(5.0, 5.0));
        list.fill(id, halo.clone(), BRAND_GREEN.with_alpha(OBJECT_TINT));
        list.push(
            id,
            DrawCmd::Stroke {
                outline: halo,
                color: BRAND_GREEN,
                width: 2.0,
                dash: Some([5.0, 5.0]),
            },
        );
    }
    let outline = object_outline(bounds);
    list.fill(id, outline.clone(), color.with_alpha(OBJECT_TINT));
    list.stroke(id, outline, color, if selected { 3.0 } else { 2.0 });
    list.text(id, bounds.center(), obj.display_label(), SLATE_700, 10.0);
}

fn paint_handles(list: &mut DisplayList, id: ElementId, bounds: Rect) {
    let center = bounds.center();
    let size = Size::new(bounds.width(), bounds.height());
    for corner in ResizeCorner::ALL {
        let handle = Outline::Circle(Circle::new(corner.position(center, size), HANDLE_RADIUS));
        list.fill(Some(id), handle.clone(), BRAND_GREEN);
        list.stroke(Some(id), handle, WHITE, 2.0);
    }
}

fn paint_seat(list: &mut DisplayList, seat: &Seat, center: Point, paint: SeatPaint) {
    let id = Some(seat.id);
    let outline = seat_outline(seat.shape, center);
    list.fill(id, outline.clone(), paint.fill);
    list.stroke(id, outline, paint.stroke, 2.0);
    list.text(id, center, &seat.label, paint.text, 10.0);
}

// ─── Viewer painting ─────────────────────────────────────────────────────────

/// Non-interactive stage banner drawn above the content.
#[derive(Debug, Clone, PartialEq)]
pub struct StageBanner {
    pub bounds: Rect,
    pub title: String,
}

impl StageBanner {
    pub const HEIGHT: f64 = 45.0;
    /// Distance from the viewport top.
    pub const TOP_MARGIN: f64 = 30.0;
    pub const MAX_WIDTH: f64 = 400.0;

    /// Banner centered horizontally in `viewport`, `min(0.6·width, 400)` wide.
    pub fn for_viewport(viewport: &Viewport, title: impl Into<String>) -> Self {
        let width = (viewport.width * 0.6).min(Self::MAX_WIDTH);
        let cx = viewport.center().x;
        let y0 = viewport.min_y + Self::TOP_MARGIN;
        Self {
            bounds: Rect::new(cx - width / 2.0, y0, cx + width / 2.0, y0 + Self::HEIGHT),
            title: title.into(),
        }
    }
}

/// Opacity applied to seats that cannot be clicked.
const DISABLED_OPACITY: f32 = 0.5;

/// Paint the read-only viewer: banner, objects, then seats by status.
pub fn paint_viewer(view: SceneView<'_>, stage: Option<&StageBanner>) -> DisplayList {
    let mut list = DisplayList::default();

    if let Some(banner) = stage {
        let outline = object_outline(banner.bounds);
        list.fill(None, outline.clone(), SLATE_800);
        list.stroke(None, outline, SLATE_600, 1.0);
        let anchor = Point::new(banner.bounds.center().x, banner.bounds.y0 + 28.0);
        list.text(None, anchor, &banner.title, SLATE_400, 12.0);
    }

    for obj in view.objects {
        paint_object(&mut list, obj, obj.bounds(), false);
    }

    for seat in view.seats {
        let mut paint = viewer_seat_paint(seat);
        if seat.status == SeatStatus::Selected {
            let glow = Outline::Circle(Circle::new(seat.position(), 18.0));
            list.fill(Some(seat.id), glow, BRAND_ORANGE.with_alpha(0.2));
        }
        if !seat.status.is_clickable() {
            paint = paint.faded(DISABLED_OPACITY);
        }
        paint_seat(&mut list, seat, seat.position(), paint);
    }

    log::trace!("viewer display list: {} items", list.len());
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seatmap_core::{EntryType, ObjectKind};

    fn fills(cmds: Vec<&DrawCmd>) -> Vec<Color> {
        cmds.into_iter()
            .filter_map(|c| match c {
                DrawCmd::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn viewer_palette_by_status() {
        let mut seat = Seat::new(ElementId::intern("p-1"), 0.0, 0.0, "A1");
        assert_eq!(viewer_seat_paint(&seat).stroke, BRAND_GREEN);
        seat.status = SeatStatus::Sold;
        assert_eq!(viewer_seat_paint(&seat).fill, SLATE_600);
        seat.status = SeatStatus::Blocked;
        assert_eq!(viewer_seat_paint(&seat).fill.to_hex(), "#ef44444d");
    }

    #[test]
    fn free_seat_uses_entry_type_tint() {
        let vip = EntryType::new(1, "VIP", 50.0, Color::from_rgb8(0xf5, 0x9e, 0x0b));
        let mut seat = Seat::new(ElementId::intern("p-2"), 0.0, 0.0, "A1");
        seat.assign_entry_type(&vip);
        let paint = viewer_seat_paint(&seat);
        assert_eq!(paint.fill.to_hex(), "#f59e0b33");
        assert_eq!(paint.stroke.to_hex(), "#f59e0b");
        // Taken seats ignore the type color.
        seat.status = SeatStatus::Occupied;
        assert_eq!(viewer_seat_paint(&seat).stroke, SLATE_500);
    }

    #[test]
    fn editor_paints_objects_before_seats_and_previews() {
        let seat_id = ElementId::intern("p-seat");
        let obj_id = ElementId::intern("p-obj");
        let seats = [Seat::new(seat_id, 10.0, 10.0, "A1")];
        let objects = [DecorativeObject::new(obj_id, ObjectKind::Bar, 200.0, 200.0)];
        let overlay = EditorOverlay {
            selected_object: Some(obj_id),
            seat_preview: Some((seat_id, Point::new(50.0, 60.0))),
            ..Default::default()
        };
        let list = paint_editor(SceneView::new(&seats, &objects, 800.0, 600.0), &overlay);

        let first_seat = list.items.iter().position(|i| i.element == Some(seat_id));
        let last_obj = list.items.iter().rposition(|i| i.element == Some(obj_id));
        assert!(last_obj < first_seat);

        // Halo + box + four handles.
        assert_eq!(fills(list.for_element(obj_id).collect()).len(), 6);

        let label = list.for_element(seat_id).find_map(|c| match c {
            DrawCmd::Text { anchor, .. } => Some(*anchor),
            _ => None,
        });
        assert_eq!(label, Some(Point::new(50.0, 60.0)));
    }

    #[test]
    fn stage_banner_is_capped_and_centered() {
        let wide = StageBanner::for_viewport(&Viewport::new(0.0, -80.0, 1000.0, 600.0), "ESCENARIO");
        assert_eq!(wide.bounds, Rect::new(300.0, -50.0, 700.0, -5.0));
        let narrow = StageBanner::for_viewport(&Viewport::new(0.0, 0.0, 200.0, 200.0), "ESCENARIO");
        assert_eq!(narrow.bounds.width(), 120.0);
    }

    #[test]
    fn unclickable_seats_are_faded() {
        let mut seat = Seat::new(ElementId::intern("p-3"), 0.0, 0.0, "A1");
        seat.status = SeatStatus::Blocked;
        let seats = [seat];
        let list = paint_viewer(SceneView::new(&seats, &[], 800.0, 600.0), None);
        let stroke = list.items.iter().find_map(|i| match &i.cmd {
            DrawCmd::Stroke { color, .. } => Some(*color),
            _ => None,
        });
        assert_eq!(stroke.map(|c| c.a), Some(0.5));
    }
}
