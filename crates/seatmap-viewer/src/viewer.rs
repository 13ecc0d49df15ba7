//! Read-only seat map surface.
//!
//! The viewer frames the map, paints it, pans/zooms, and reports clicks on
//! selectable seats to the caller. It never changes a seat's status itself;
//! whoever owns the purchase decision (see [`crate::picker::SeatPicker`])
//! pushes updated seats back through [`Viewer::set_seats`].

use crate::config::ViewerConfig;
use seatmap_core::geometry::{self, ViewTransform};
use seatmap_core::{
    Affine, DecorativeObject, ElementId, MapDocument, Point, Rect, Result, Scene, SceneView, Seat,
    SeatStatus, Vec2, Viewport, ViewportMemo, parse_map,
};
use seatmap_render::{DisplayList, StageBanner, hit_test_seat, paint_viewer};

/// Seat counts for the legend.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeatStats {
    pub free: usize,
    pub selected: usize,
    /// Occupied plus sold.
    pub taken: usize,
    pub blocked: usize,
    /// Sum of the prices of selected seats.
    pub selected_total: f64,
}

pub struct Viewer {
    config: ViewerConfig,
    seats: Vec<Seat>,
    objects: Vec<DecorativeObject>,
    width: f64,
    height: f64,
    camera: ViewTransform,
    surface: Rect,
    /// Seat that keyboard activation applies to.
    focused: Option<ElementId>,
    revision: u64,
    viewport: ViewportMemo,
}

impl Viewer {
    pub fn new(
        seats: Vec<Seat>,
        objects: Vec<DecorativeObject>,
        width: f64,
        height: f64,
        config: ViewerConfig,
    ) -> Self {
        Self {
            camera: ViewTransform::new(config.camera),
            surface: Rect::new(0.0, 0.0, width, height),
            focused: None,
            revision: 0,
            viewport: ViewportMemo::new(),
            seats,
            objects,
            width,
            height,
            config,
        }
    }

    pub fn from_scene(scene: &Scene, config: ViewerConfig) -> Self {
        Self::new(
            scene.seats.clone(),
            scene.objects.clone(),
            scene.width,
            scene.height,
            config,
        )
    }

    /// Show every zone of a persisted map at once.
    pub fn from_document(doc: &MapDocument, config: ViewerConfig) -> Self {
        let seats = doc.zones.iter().flat_map(|z| z.seats.iter().cloned()).collect();
        let objects = doc
            .zones
            .iter()
            .flat_map(|z| z.objects.iter().cloned())
            .collect();
        Self::new(seats, objects, doc.width, doc.height, config)
    }

    pub fn from_json(json: &str, config: ViewerConfig) -> Result<Self> {
        Ok(Self::from_document(&parse_map(json)?, config))
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn objects(&self) -> &[DecorativeObject] {
        &self.objects
    }

    pub fn seat(&self, id: ElementId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Replace the displayed seats, e.g. with statuses decided by the caller.
    pub fn set_seats(&mut self, seats: Vec<Seat>) {
        self.seats = seats;
        self.revision += 1;
        if let Some(id) = self.focused
            && self.seat(id).is_none()
        {
            self.focused = None;
        }
    }

    pub fn view(&self) -> SceneView<'_> {
        SceneView::new(&self.seats, &self.objects, self.width, self.height)
    }

    // ─── Framing ─────────────────────────────────────────────────────────

    /// Content viewport, extended upwards for the stage banner when shown.
    pub fn viewport(&mut self) -> Viewport {
        let view = SceneView::new(&self.seats, &self.objects, self.width, self.height);
        let framed = self
            .viewport
            .get_or_compute(self.revision, view, self.config.padding);
        if self.config.show_stage {
            framed.extend_top(self.config.stage_offset)
        } else {
            framed
        }
    }

    pub fn stage_banner(&mut self) -> Option<StageBanner> {
        if !self.config.show_stage {
            return None;
        }
        let viewport = self.viewport();
        Some(StageBanner::for_viewport(&viewport, self.config.stage_title.as_str()))
    }

    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    pub fn screen_matrix(&mut self) -> Affine {
        let viewport = self.viewport();
        geometry::screen_matrix(&viewport, self.surface, &self.camera)
    }

    pub fn document_to_screen(&mut self, doc: Point) -> Point {
        self.screen_matrix() * doc
    }

    pub fn screen_to_document(&mut self, screen: Point) -> Point {
        geometry::pointer_to_document_exact(screen, &self.screen_matrix())
    }

    // ─── Camera ──────────────────────────────────────────────────────────

    pub fn camera(&self) -> &ViewTransform {
        &self.camera
    }

    fn surface_center(&self) -> Point {
        let size = self.surface.size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    pub fn zoom_in(&mut self) {
        let pivot = self.surface_center();
        self.camera.zoom_in(pivot);
    }

    pub fn zoom_out(&mut self) {
        let pivot = self.surface_center();
        self.camera.zoom_out(pivot);
    }

    /// Wheel zoom around the cursor. Positive `delta` zooms in.
    pub fn wheel(&mut self, screen: Point, delta: f64) {
        let pivot = screen - self.surface.origin().to_vec2();
        self.camera.wheel(delta, pivot);
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.camera.pan_by(delta);
    }

    pub fn reset_view(&mut self) {
        self.camera.reset();
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Report a click at a screen point. `on_select` runs with the seat id
    /// only when the seat under the pointer is free or selected.
    pub fn click(&mut self, screen: Point, on_select: impl FnOnce(ElementId)) -> Option<ElementId> {
        let doc = self.screen_to_document(screen);
        self.click_document(doc, on_select)
    }

    pub fn click_document(&mut self, doc: Point, on_select: impl FnOnce(ElementId)) -> Option<ElementId> {
        let id = hit_test_seat(self.view(), doc)?;
        self.activate(id, on_select)
    }

    fn activate(&mut self, id: ElementId, on_select: impl FnOnce(ElementId)) -> Option<ElementId> {
        let status = self.seat(id)?.status;
        if !status.is_clickable() {
            log::debug!("seat {id} is {status:?}, click ignored");
            return None;
        }
        self.focused = Some(id);
        on_select(id);
        Some(id)
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Focus a seat for keyboard activation. Only selectable seats take focus.
    pub fn focus(&mut self, id: ElementId) -> bool {
        match self.seat(id) {
            Some(seat) if seat.status.is_clickable() => {
                self.focused = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Move focus to the next selectable seat in paint order, wrapping.
    pub fn focus_next(&mut self) -> Option<ElementId> {
        let selectable: Vec<ElementId> = self
            .seats
            .iter()
            .filter(|s| s.status.is_clickable())
            .map(|s| s.id)
            .collect();
        let next = match self.focused.and_then(|f| selectable.iter().position(|&id| id == f)) {
            Some(i) => selectable.get((i + 1) % selectable.len()).copied(),
            None => selectable.first().copied(),
        };
        self.focused = next;
        next
    }

    /// Enter or Space on the focused seat behaves like a click.
    pub fn key(&mut self, key: &str, on_select: impl FnOnce(ElementId)) -> Option<ElementId> {
        if !matches!(key, "Enter" | " ") {
            return None;
        }
        let id = self.focused?;
        self.activate(id, on_select)
    }

    // ─── Output ──────────────────────────────────────────────────────────

    pub fn display_list(&mut self) -> DisplayList {
        let banner = self.stage_banner();
        paint_viewer(self.view(), banner.as_ref())
    }

    pub fn stats(&self) -> SeatStats {
        self.seats
            .iter()
            .fold(SeatStats::default(), |mut stats, seat| {
                match seat.status {
                    SeatStatus::Free => stats.free += 1,
                    SeatStatus::Selected => {
                        stats.selected += 1;
                        stats.selected_total += seat.price.unwrap_or(0.0);
                    }
                    SeatStatus::Occupied | SeatStatus::Sold => stats.taken += 1,
                    SeatStatus::Blocked => stats.blocked += 1,
                }
                stats
            })
    }
}

/// Screen-reader label for a seat: `Asiento A1, estado: LIBRE, precio: 45€`.
pub fn accessible_label(seat: &Seat) -> String {
    let status = status_wire_name(seat.status);
    match seat.price {
        Some(price) if price != 0.0 => {
            format!("Asiento {}, estado: {status}, precio: {price}€", seat.label)
        }
        _ => format!("Asiento {}, estado: {status}", seat.label),
    }
}

fn status_wire_name(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Free => "LIBRE",
        SeatStatus::Occupied => "OCUPADO",
        SeatStatus::Selected => "SELECCIONADO",
        SeatStatus::Blocked => "BLOQUEADO",
        SeatStatus::Sold => "VENDIDO",
    }
}
