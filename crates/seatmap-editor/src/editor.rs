//! Editor controller: the authoritative scene plus everything that edits it.
//!
//! The editor owns the [`Scene`], the snapshot [`History`], tool/selection
//! state, the in-flight [`Gesture`] and the camera. Every document mutation
//! goes through a method here and commits exactly one history entry, so
//! undo always steps over one user-visible action.
//!
//! Input arrives in screen pixels (`pointer_*`, `wheel`, `key`, or the
//! serializable [`InputEvent`] via [`Editor::handle`]) and is mapped into
//! document space through the memoized viewport and the camera.

use crate::config::EditorConfig;
use crate::gesture::{DragTarget, Gesture, GestureEnd};
use crate::history::{History, Snapshot};
use crate::input::{InputEvent, Modifiers};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{ClickAction, Selection, ToolKind, ToolState};
use seatmap_core::geometry::{self, ViewTransform};
use seatmap_core::generate::{self, CircleLayout, GridLayout, SeatTemplate};
use seatmap_core::{
    Affine, Color, DecorativeObject, ElementId, EntryType, EntryTypeId, LintDiagnostic,
    MapDocument, ObjectKind, Point, Rect, Result, Scene, Seat, SeatMapError, SeatShape,
    SeatStatus, Size, Viewport, ViewportMemo, emit_map, lint_scene, parse_map,
};
use seatmap_render::{DisplayList, EditorOverlay, Hit, hit_test, paint_editor};

/// Price of a freshly added entry type.
pub const NEW_ENTRY_TYPE_PRICE: f64 = 25.0;

/// Destination for [`Editor::save`]. Any `FnMut(&MapDocument) -> Result<()>`
/// closure is a sink.
pub trait MapSink {
    fn save(&mut self, doc: &MapDocument) -> Result<()>;
}

impl<F> MapSink for F
where
    F: FnMut(&MapDocument) -> Result<()>,
{
    fn save(&mut self, doc: &MapDocument) -> Result<()> {
        self(doc)
    }
}

/// What an input event did, so hosts know whether to redraw or sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Unchanged,
    /// A gesture preview moved. Nothing was committed.
    Preview,
    /// Tool or selection changed.
    State,
    /// Camera moved.
    View,
    /// The document changed and history has a new position.
    Committed,
}

impl Response {
    pub fn needs_redraw(self) -> bool {
        self != Self::Unchanged
    }
}

/// A single property edit on a seat.
#[derive(Debug, Clone, PartialEq)]
pub enum SeatEdit {
    Label(String),
    Row(Option<u32>),
    Column(Option<u32>),
    Shape(SeatShape),
    Price(Option<f64>),
    Position(Point),
    Status(SeatStatus),
    /// Reassign the entry type; copies its price onto the seat.
    EntryType(EntryTypeId),
}

/// A single property edit on a decorative object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectEdit {
    Label(Option<String>),
    Color(Option<Color>),
    Rotation(Option<f64>),
    /// Clamped to the configured minimum object size.
    Size(Size),
    Position(Point),
}

pub struct Editor {
    config: EditorConfig,
    scene: Scene,
    history: History,
    tools: ToolState,
    gesture: Gesture,
    camera: ViewTransform,
    /// Where the drawing surface sits on screen.
    surface: Rect,
    /// Seats added by hand so far; drives new seat ids and labels.
    seat_counter: u32,
    event_id: u64,
    /// Bumped on every scene change; keys the viewport memo.
    revision: u64,
    viewport: ViewportMemo,
}

impl Editor {
    /// Empty editor: no seats, no objects, no entry types.
    pub fn new(config: EditorConfig) -> Self {
        let scene = Scene::new(config.width, config.height);
        Self::with_scene(scene, 0, config)
    }

    pub fn from_document(doc: &MapDocument, config: EditorConfig) -> Self {
        Self::with_scene(Scene::from_document(doc), doc.event_id, config)
    }

    pub fn from_json(json: &str, config: EditorConfig) -> Result<Self> {
        let doc = parse_map(json)?;
        Ok(Self::from_document(&doc, config))
    }

    fn with_scene(scene: Scene, event_id: u64, config: EditorConfig) -> Self {
        let surface = Rect::new(0.0, 0.0, config.width, config.height);
        Self {
            history: History::new(Snapshot::of(&scene), config.history_limit),
            seat_counter: u32::try_from(scene.seats.len()).unwrap_or(u32::MAX),
            camera: ViewTransform::new(config.camera),
            tools: ToolState::new(),
            gesture: Gesture::Idle,
            viewport: ViewportMemo::new(),
            revision: 0,
            surface,
            event_id,
            scene,
            config,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn selection(&self) -> Selection {
        self.tools.selection
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn camera(&self) -> &ViewTransform {
        &self.camera
    }

    pub fn seat_counter(&self) -> u32 {
        self.seat_counter
    }

    pub fn event_id(&self) -> u64 {
        self.event_id
    }

    pub fn set_event_id(&mut self, event_id: u64) {
        self.event_id = event_id;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ─── Coordinates ─────────────────────────────────────────────────────

    /// Place the drawing surface on screen (page pixels).
    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    pub fn surface(&self) -> Rect {
        self.surface
    }

    /// Content-fitting viewport, recomputed only after the scene changed.
    pub fn viewport(&mut self) -> Viewport {
        self.viewport
            .get_or_compute(self.revision, self.scene.view(), self.config.padding)
    }

    /// Document → screen matrix.
    pub fn screen_matrix(&mut self) -> Affine {
        let viewport = self.viewport();
        geometry::screen_matrix(&viewport, self.surface, &self.camera)
    }

    /// Screen pixel → document point, rounded to whole units.
    pub fn screen_to_document(&mut self, screen: Point) -> Point {
        geometry::pointer_to_document(screen, &self.screen_matrix())
    }

    pub fn document_to_screen(&mut self, doc: Point) -> Point {
        self.screen_matrix() * doc
    }

    fn screen_to_document_exact(&mut self, screen: Point) -> Point {
        geometry::pointer_to_document_exact(screen, &self.screen_matrix())
    }

    // ─── Tools & selection ───────────────────────────────────────────────

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.gesture.cancel();
        self.tools.set_tool(tool);
    }

    /// Arm (or disarm, if already armed) a decorative object kind.
    pub fn arm(&mut self, kind: ObjectKind) {
        self.gesture.cancel();
        self.tools.arm(kind);
    }

    pub fn set_seat_shape(&mut self, shape: SeatShape) {
        self.tools.shape = shape;
    }

    pub fn select_seat(&mut self, id: ElementId) -> Result<()> {
        if self.scene.seat(id).is_none() {
            return Err(SeatMapError::UnknownSeat(id));
        }
        self.tools.select_seat(id);
        Ok(())
    }

    pub fn select_object(&mut self, id: ElementId) -> Result<()> {
        if self.scene.object(id).is_none() {
            return Err(SeatMapError::UnknownObject(id));
        }
        self.tools.select_object(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.tools.clear_selection();
    }

    // ─── Document edits ──────────────────────────────────────────────────

    fn commit(&mut self, description: &str) {
        self.history.commit(Snapshot::of(&self.scene), description);
        self.touch();
    }

    /// Scene changed outside the seat/object history (entry types, imports).
    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Add a seat at a document point using the active shape and the first
    /// entry type. The new seat becomes the selection.
    pub fn add_seat_at(&mut self, at: Point) -> Result<ElementId> {
        let Some(entry_type) = self.scene.entry_types.first().cloned() else {
            log::warn!("cannot add seat: {}", SeatMapError::NoEntryTypes);
            return Err(SeatMapError::NoEntryTypes);
        };
        let n = self.seat_counter.saturating_add(1);
        let scene = &self.scene;
        let (id, _) = ElementId::next_free("seat", u64::from(n), |id| scene.contains_id(id));

        let at = at.round();
        let mut seat = Seat::new(id, at.x, at.y, format!("A{n}"));
        seat.row = Some(1);
        seat.column = Some(n);
        seat.shape = self.tools.shape;
        seat.assign_entry_type(&entry_type);
        self.scene.seats.push(seat);
        self.seat_counter = n;

        self.tools.select_seat(id);
        self.commit("add seat");
        log::debug!("added seat {id} at ({}, {})", at.x, at.y);
        Ok(id)
    }

    /// Add a decorative object of `kind` centered on a document point.
    pub fn add_object_at(&mut self, kind: ObjectKind, at: Point) -> ElementId {
        let scene = &self.scene;
        let start = scene.objects.len() as u64 + 1;
        let (id, _) = ElementId::next_free("deco", start, |id| scene.contains_id(id));

        let at = at.round();
        self.scene
            .objects
            .push(DecorativeObject::new(id, kind, at.x, at.y));
        self.commit(&format!("add {}", kind.wire_name()));
        log::debug!("added {} {id} at ({}, {})", kind.wire_name(), at.x, at.y);
        id
    }

    pub fn remove_seat(&mut self, id: ElementId) -> Result<()> {
        let before = self.scene.seats.len();
        self.scene.seats.retain(|s| s.id != id);
        if self.scene.seats.len() == before {
            return Err(SeatMapError::UnknownSeat(id));
        }
        self.tools.forget(id);
        self.commit("delete seat");
        Ok(())
    }

    pub fn remove_object(&mut self, id: ElementId) -> Result<()> {
        let before = self.scene.objects.len();
        self.scene.objects.retain(|o| o.id != id);
        if self.scene.objects.len() == before {
            return Err(SeatMapError::UnknownObject(id));
        }
        self.tools.forget(id);
        self.commit("delete object");
        Ok(())
    }

    /// Remove whatever is selected. Returns false when nothing was.
    pub fn delete_selection(&mut self) -> Result<bool> {
        match self.tools.selection {
            Selection::Seat(id) => self.remove_seat(id)?,
            Selection::Object(id) => self.remove_object(id)?,
            Selection::None => return Ok(false),
        }
        Ok(true)
    }

    pub fn move_seat(&mut self, id: ElementId, to: Point) -> Result<()> {
        let seat = self
            .scene
            .seat_mut(id)
            .ok_or(SeatMapError::UnknownSeat(id))?;
        seat.x = to.x;
        seat.y = to.y;
        self.commit("move seat");
        Ok(())
    }

    /// Move an object so its center lands on `to`.
    pub fn move_object(&mut self, id: ElementId, to: Point) -> Result<()> {
        let object = self
            .scene
            .object_mut(id)
            .ok_or(SeatMapError::UnknownObject(id))?;
        object.x = to.x;
        object.y = to.y;
        self.commit("move object");
        Ok(())
    }

    /// Resize an object around its center, clamped to the minimum size.
    pub fn resize_object(&mut self, id: ElementId, size: Size) -> Result<()> {
        let min = self.config.min_object_size;
        let object = self
            .scene
            .object_mut(id)
            .ok_or(SeatMapError::UnknownObject(id))?;
        object.width = size.width.max(min);
        object.height = size.height.max(min);
        self.commit("resize object");
        Ok(())
    }

    pub fn update_seat(&mut self, id: ElementId, edit: SeatEdit) -> Result<()> {
        let entry_type = match &edit {
            SeatEdit::EntryType(type_id) => Some(
                self.scene
                    .entry_type(*type_id)
                    .cloned()
                    .ok_or(SeatMapError::UnknownEntryType(*type_id))?,
            ),
            _ => None,
        };
        let seat = self
            .scene
            .seat_mut(id)
            .ok_or(SeatMapError::UnknownSeat(id))?;
        match edit {
            SeatEdit::Label(label) => seat.label = label,
            SeatEdit::Row(row) => seat.row = row,
            SeatEdit::Column(column) => seat.column = column,
            SeatEdit::Shape(shape) => seat.shape = shape,
            SeatEdit::Price(price) => seat.price = price,
            SeatEdit::Position(p) => {
                seat.x = p.x;
                seat.y = p.y;
            }
            SeatEdit::Status(status) => seat.status = status,
            SeatEdit::EntryType(_) => {
                if let Some(t) = &entry_type {
                    seat.assign_entry_type(t);
                }
            }
        }
        self.commit("edit seat");
        Ok(())
    }

    pub fn update_object(&mut self, id: ElementId, edit: ObjectEdit) -> Result<()> {
        let min = self.config.min_object_size;
        let object = self
            .scene
            .object_mut(id)
            .ok_or(SeatMapError::UnknownObject(id))?;
        match edit {
            ObjectEdit::Label(label) => object.label = label,
            ObjectEdit::Color(color) => object.color = color,
            ObjectEdit::Rotation(rotation) => object.rotation = rotation,
            ObjectEdit::Size(size) => {
                object.width = size.width.max(min);
                object.height = size.height.max(min);
            }
            ObjectEdit::Position(p) => {
                object.x = p.x;
                object.y = p.y;
            }
        }
        self.commit("edit object");
        Ok(())
    }

    // ─── Layout generators ───────────────────────────────────────────────

    fn template(&self) -> SeatTemplate<'_> {
        SeatTemplate {
            entry_type: self.scene.entry_types.first(),
            shape: self.tools.shape,
            fallback_price: self.config.fallback_price,
        }
    }

    /// Replace every seat with a grid. Objects are kept.
    pub fn generate_grid(&mut self, layout: GridLayout) -> Result<usize> {
        let seats = generate::generate_grid(
            layout,
            self.scene.width,
            self.scene.height,
            &self.template(),
        )?;
        Ok(self.replace_seats(seats, "generate grid"))
    }

    /// Replace every seat with a circle around the canvas center.
    pub fn generate_circle(&mut self, layout: CircleLayout) -> Result<usize> {
        let seats = generate::generate_circle(
            layout,
            self.scene.width,
            self.scene.height,
            &self.template(),
        )?;
        Ok(self.replace_seats(seats, "generate circle"))
    }

    fn replace_seats(&mut self, seats: Vec<Seat>, description: &str) -> usize {
        if !self.scene.seats.is_empty() {
            log::warn!("{description}: replacing {} existing seats", self.scene.seats.len());
        }
        let count = seats.len();
        self.scene.seats = seats;
        self.seat_counter = u32::try_from(count).unwrap_or(u32::MAX);
        if self.tools.selection.seat().is_some() {
            self.tools.clear_selection();
        }
        self.gesture.cancel();
        self.commit(description);
        log::info!("{description}: {count} seats");
        count
    }

    /// Remove every seat and object once `confirm` agrees. Entry types stay.
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            log::debug!("clear all declined");
            return false;
        }
        self.scene.seats.clear();
        self.scene.objects.clear();
        self.seat_counter = 0;
        self.tools.clear_selection();
        self.gesture.cancel();
        self.commit("clear all");
        true
    }

    // ─── Entry types ─────────────────────────────────────────────────────

    /// Append an entry type with the next free id and a default name.
    pub fn add_entry_type(&mut self) -> EntryTypeId {
        let id = self
            .scene
            .entry_types
            .iter()
            .map(|t| t.id.0)
            .max()
            .unwrap_or(0)
            + 1;
        let name = format!("Tipo {}", self.scene.entry_types.len() + 1);
        self.scene.entry_types.push(EntryType::new(
            id,
            name,
            NEW_ENTRY_TYPE_PRICE,
            Color::from_rgb8(0x10, 0xb9, 0x81),
        ));
        self.touch();
        log::debug!("added entry type {id}");
        EntryTypeId(id)
    }

    /// Edit an entry type in place. The id cannot change. Returns the
    /// reserved status color the new color is too close to, if any; the
    /// edit is applied regardless.
    pub fn update_entry_type(
        &mut self,
        id: EntryTypeId,
        edit: impl FnOnce(&mut EntryType),
    ) -> Result<Option<&'static str>> {
        let entry_type = self
            .scene
            .entry_types
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(SeatMapError::UnknownEntryType(id))?;
        edit(entry_type);
        entry_type.id = id;
        let conflict = entry_type.color_conflict();
        if let Some(reserved) = conflict {
            log::warn!(
                "entry type `{}` color {} is close to status color {reserved}",
                entry_type.name,
                entry_type.color.to_hex()
            );
        }
        self.touch();
        Ok(conflict)
    }

    /// Remove an entry type. The catalog never drops below one entry.
    pub fn remove_entry_type(&mut self, id: EntryTypeId) -> Result<()> {
        if self.scene.entry_type(id).is_none() {
            return Err(SeatMapError::UnknownEntryType(id));
        }
        if self.scene.entry_types.len() <= 1 {
            return Err(SeatMapError::LastEntryType);
        }
        self.scene.entry_types.retain(|t| t.id != id);
        self.touch();
        Ok(())
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Step back one action. Returns the undone action's description.
    pub fn undo(&mut self) -> Option<String> {
        self.gesture.cancel();
        let (description, snapshot) = self.history.undo()?;
        let description = description.to_string();
        snapshot.restore_into(&mut self.scene);
        self.after_restore();
        log::debug!("undo: {description}");
        Some(description)
    }

    pub fn redo(&mut self) -> Option<String> {
        self.gesture.cancel();
        let (description, snapshot) = self.history.redo()?;
        let description = description.to_string();
        snapshot.restore_into(&mut self.scene);
        self.after_restore();
        log::debug!("redo: {description}");
        Some(description)
    }

    fn after_restore(&mut self) {
        if let Some(id) = self.tools.selection.id()
            && !self.scene.contains_id(id)
        {
            self.tools.clear_selection();
        }
        self.touch();
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    /// Replace the whole document from map JSON and start a fresh history.
    /// On error the editor is left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let doc = parse_map(json).inspect_err(|e| log::warn!("{e}"))?;
        self.load_document(&doc);
        Ok(())
    }

    pub fn load_document(&mut self, doc: &MapDocument) {
        self.scene = Scene::from_document(doc);
        self.event_id = doc.event_id;
        self.seat_counter = u32::try_from(self.scene.seats.len()).unwrap_or(u32::MAX);
        self.history.reset(Snapshot::of(&self.scene));
        self.tools.clear_selection();
        self.gesture.cancel();
        self.touch();
        log::info!(
            "loaded map for event {}: {} seats, {} objects, {} entry types",
            self.event_id,
            self.scene.seats.len(),
            self.scene.objects.len(),
            self.scene.entry_types.len()
        );
    }

    pub fn document(&self) -> MapDocument {
        self.scene.to_document(self.event_id)
    }

    pub fn export_json(&self) -> Result<String> {
        emit_map(&self.document())
    }

    pub fn save(&self, sink: &mut impl MapSink) -> Result<()> {
        let doc = self.document();
        sink.save(&doc)
            .inspect_err(|e| log::warn!("save failed for event {}: {e}", self.event_id))?;
        log::info!(
            "saved map for event {} ({} seats)",
            self.event_id,
            doc.total_seats()
        );
        Ok(())
    }

    pub fn lint(&self) -> Vec<LintDiagnostic> {
        lint_scene(&self.scene)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Draw commands for the current frame, in document coordinates,
    /// including live drag/resize previews.
    pub fn display_list(&self) -> DisplayList {
        let scene = &self.scene;
        let overlay = EditorOverlay {
            selected_seat: self.tools.selection.seat(),
            selected_object: self.tools.selection.object(),
            seat_preview: self.gesture.seat_preview(),
            object_preview: self.gesture.object_preview(|id| {
                scene.object(id).map(|o| Size::new(o.width, o.height))
            }),
        };
        paint_editor(scene.view(), &overlay)
    }

    // ─── Input ───────────────────────────────────────────────────────────

    pub fn handle(&mut self, event: &InputEvent) -> Result<Response> {
        match *event {
            InputEvent::PointerDown { x, y } => Ok(self.pointer_down(Point::new(x, y))),
            InputEvent::PointerMove { x, y } => Ok(self.pointer_move(Point::new(x, y))),
            InputEvent::PointerUp { x, y } => self.pointer_up(Point::new(x, y)),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Wheel { x, y, delta } => Ok(self.wheel(Point::new(x, y), delta)),
            InputEvent::Key { ref key, modifiers } => self.key(key, modifiers),
        }
    }

    pub fn pointer_down(&mut self, screen: Point) -> Response {
        let doc = self.screen_to_document_exact(screen);
        let select_mode = self.tools.tool == ToolKind::Select;
        let handles_for = if select_mode {
            self.tools.selection.object()
        } else {
            None
        };
        let hit = hit_test(self.scene.view(), handles_for, doc);
        log::trace!("pointer down at {screen:?} (doc {doc:?}): {hit:?}");

        match hit {
            Some(Hit::ResizeHandle { object, corner }) => {
                if let Some(o) = self.scene.object(object) {
                    self.gesture =
                        Gesture::resize(object, corner, o.center(), Size::new(o.width, o.height));
                }
                Response::Unchanged
            }
            Some(hit) if select_mode => {
                let target = DragTarget::from_hit(hit);
                let before = self.tools.selection;
                match target {
                    DragTarget::Seat(id) => self.tools.select_seat(id),
                    DragTarget::Object(id) => self.tools.select_object(id),
                }
                self.gesture = Gesture::press(Some(target), screen, true);
                if before == self.tools.selection {
                    Response::Unchanged
                } else {
                    Response::State
                }
            }
            hit => {
                self.gesture = Gesture::press(hit.map(DragTarget::from_hit), screen, false);
                Response::Unchanged
            }
        }
    }

    pub fn pointer_move(&mut self, screen: Point) -> Response {
        if self.gesture.is_idle() {
            return Response::Unchanged;
        }
        let doc = self.screen_to_document(screen);
        let (threshold, min) = (self.config.drag_threshold, self.config.min_object_size);
        if self.gesture.motion(screen, doc, threshold, min) {
            Response::Preview
        } else {
            Response::Unchanged
        }
    }

    pub fn pointer_up(&mut self, screen: Point) -> Result<Response> {
        let end = self.gesture.release();
        self.finish(end, Some(screen))
    }

    /// Pointer left the surface: finish a drag or resize, drop a click.
    pub fn pointer_leave(&mut self) -> Result<Response> {
        let end = self.gesture.leave();
        self.finish(end, None)
    }

    fn finish(&mut self, end: GestureEnd, screen: Option<Point>) -> Result<Response> {
        match end {
            GestureEnd::None => Ok(Response::Unchanged),
            GestureEnd::Move {
                target: DragTarget::Seat(id),
                to,
            } => {
                self.move_seat(id, to)?;
                Ok(Response::Committed)
            }
            GestureEnd::Move {
                target: DragTarget::Object(id),
                to,
            } => {
                self.move_object(id, to)?;
                Ok(Response::Committed)
            }
            GestureEnd::Resize { object, size } => {
                self.resize_object(object, size)?;
                Ok(Response::Committed)
            }
            GestureEnd::Click(target) => {
                let at = match screen {
                    Some(s) => self.screen_to_document(s),
                    None => return Ok(Response::Unchanged),
                };
                self.click(target.map(Hit::from), at)
            }
        }
    }

    /// Apply the active tool to a click at a document point. `hit` is the
    /// element under the pointer, if any.
    pub fn click(&mut self, hit: Option<Hit>, at: Point) -> Result<Response> {
        let has_entry_types = !self.scene.entry_types.is_empty();
        let action = self
            .tools
            .resolve_click(hit, has_entry_types)
            .inspect_err(|e| log::warn!("click ignored: {e}"))?;
        Ok(match action {
            ClickAction::Nothing => Response::Unchanged,
            ClickAction::AddSeat => {
                self.add_seat_at(at)?;
                Response::Committed
            }
            ClickAction::AddObject(kind) => {
                self.add_object_at(kind, at);
                Response::Committed
            }
            ClickAction::Select(selection) => {
                if self.tools.selection == selection {
                    Response::Unchanged
                } else {
                    self.tools.selection = selection;
                    Response::State
                }
            }
            ClickAction::RemoveSeat(id) => {
                self.remove_seat(id)?;
                Response::Committed
            }
            ClickAction::RemoveObject(id) => {
                self.remove_object(id)?;
                Response::Committed
            }
        })
    }

    /// Zoom around a screen point. Positive `delta` zooms in.
    pub fn wheel(&mut self, screen: Point, delta: f64) -> Response {
        let pivot = screen - self.surface.origin().to_vec2();
        self.camera.wheel(delta, pivot);
        Response::View
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

    pub fn reset_view(&mut self) {
        self.camera.reset();
    }

    pub fn key(&mut self, key: &str, modifiers: Modifiers) -> Result<Response> {
        let Some(action) = ShortcutMap::resolve_with(key, modifiers) else {
            return Ok(Response::Unchanged);
        };
        log::debug!("shortcut {key:?} -> {action:?}");
        Ok(match action {
            ShortcutAction::ToolSelect => {
                self.set_tool(ToolKind::Select);
                Response::State
            }
            ShortcutAction::ToolAdd => {
                self.set_tool(ToolKind::Add);
                Response::State
            }
            ShortcutAction::ToolDelete => {
                self.set_tool(ToolKind::Delete);
                Response::State
            }
            ShortcutAction::Undo => match self.undo() {
                Some(_) => Response::Committed,
                None => Response::Unchanged,
            },
            ShortcutAction::Redo => match self.redo() {
                Some(_) => Response::Committed,
                None => Response::Unchanged,
            },
            ShortcutAction::Delete => {
                if self.delete_selection()? {
                    Response::Committed
                } else {
                    Response::Unchanged
                }
            }
            ShortcutAction::ZoomIn => {
                self.zoom_in();
                Response::View
            }
            ShortcutAction::ZoomOut => {
                self.zoom_out();
                Response::View
            }
            ShortcutAction::ZoomReset => {
                self.reset_view();
                Response::View
            }
            ShortcutAction::Deselect => {
                self.gesture.cancel();
                self.tools.disarm();
                self.tools.clear_selection();
                Response::State
            }
        })
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor_with_catalog() -> Editor {
        let mut editor = Editor::default();
        editor.add_entry_type();
        editor
    }

    #[test]
    fn add_seat_requires_entry_type() {
        let mut editor = Editor::default();
        assert!(matches!(
            editor.add_seat_at(Point::new(10.0, 10.0)),
            Err(SeatMapError::NoEntryTypes)
        ));
        assert!(editor.scene().seats.is_empty());
        assert!(!editor.history().can_undo());
    }

    #[test]
    fn added_seat_takes_counter_label_and_first_type() {
        let mut editor = editor_with_catalog();
        let id = editor.add_seat_at(Point::new(100.4, 99.6)).unwrap();
        let seat = editor.scene().seat(id).unwrap();
        assert_eq!(id.as_str(), "seat-1");
        assert_eq!(seat.label, "A1");
        assert_eq!(seat.position(), Point::new(100.0, 100.0));
        assert_eq!(seat.entry_type_id, Some(EntryTypeId(1)));
        assert_eq!(seat.price, Some(NEW_ENTRY_TYPE_PRICE));
        assert_eq!(editor.selection(), Selection::Seat(id));
        assert_eq!(editor.history().undo_description(), Some("add seat"));
    }

    #[test]
    fn new_ids_skip_taken_ones() {
        let mut editor = editor_with_catalog();
        editor.add_object_at(ObjectKind::Stage, Point::new(400.0, 80.0));
        let a = editor.add_object_at(ObjectKind::Bar, Point::new(100.0, 500.0));
        assert_eq!(a.as_str(), "deco-2");
        editor.remove_object(ElementId::intern("deco-1")).unwrap();
        let b = editor.add_object_at(ObjectKind::Text, Point::ZERO);
        assert_ne!(a, b);
    }

    #[test]
    fn entry_type_catalog_keeps_one() {
        let mut editor = editor_with_catalog();
        let second = editor.add_entry_type();
        assert_eq!(second, EntryTypeId(2));
        assert_eq!(editor.scene().entry_types[1].name, "Tipo 2");
        editor.remove_entry_type(EntryTypeId(1)).unwrap();
        assert!(matches!(
            editor.remove_entry_type(second),
            Err(SeatMapError::LastEntryType)
        ));
    }

    #[test]
    fn entry_type_color_conflict_is_advisory() {
        let mut editor = editor_with_catalog();
        let red = Color::from_hex("#ee4444").unwrap();
        let conflict = editor
            .update_entry_type(EntryTypeId(1), |t| t.color = red)
            .unwrap();
        assert_eq!(conflict, Some("#ef4444"));
        assert_eq!(editor.scene().entry_types[0].color, red);
    }

    #[test]
    fn seat_edit_to_unknown_entry_type_fails() {
        let mut editor = editor_with_catalog();
        let id = editor.add_seat_at(Point::ZERO).unwrap();
        let depth = editor.history().len();
        assert!(matches!(
            editor.update_seat(id, SeatEdit::EntryType(EntryTypeId(9))),
            Err(SeatMapError::UnknownEntryType(_))
        ));
        assert_eq!(editor.history().len(), depth);
    }

    #[test]
    fn seat_edit_reassigns_entry_type_in_one_step() {
        let mut editor = editor_with_catalog();
        let id = editor.add_seat_at(Point::ZERO).unwrap();
        let vip = editor.add_entry_type();
        editor
            .update_entry_type(vip, |t| t.price = 60.0)
            .unwrap();
        let depth = editor.history().len();

        editor.update_seat(id, SeatEdit::EntryType(vip)).unwrap();
        let seat = editor.scene().seat(id).unwrap();
        assert_eq!(seat.entry_type_id, Some(vip));
        assert_eq!(seat.price, Some(60.0));
        assert_eq!(editor.history().len(), depth + 1);

        editor.undo();
        let seat = editor.scene().seat(id).unwrap();
        assert_eq!(seat.entry_type_id, Some(EntryTypeId(1)));
    }

    #[test]
    fn object_size_edit_is_clamped() {
        let mut editor = Editor::default();
        let id = editor.add_object_at(ObjectKind::Bar, Point::new(200.0, 200.0));
        editor
            .update_object(id, ObjectEdit::Size(Size::new(5.0, 80.0)))
            .unwrap();
        let object = editor.scene().object(id).unwrap();
        assert_eq!((object.width, object.height), (30.0, 80.0));
    }

    #[test]
    fn clear_all_needs_confirmation() {
        let mut editor = editor_with_catalog();
        editor.add_seat_at(Point::ZERO).unwrap();
        assert!(!editor.clear_all(|| false));
        assert_eq!(editor.scene().seats.len(), 1);
        assert!(editor.clear_all(|| true));
        assert!(editor.scene().is_empty());
        editor.undo();
        assert_eq!(editor.scene().seats.len(), 1);
    }

    #[test]
    fn sink_closure_receives_document() {
        let mut editor = editor_with_catalog();
        editor.set_event_id(7);
        editor.add_seat_at(Point::new(5.0, 5.0)).unwrap();
        let mut saved = None;
        editor
            .save(&mut |doc: &MapDocument| -> Result<()> {
                saved = Some(doc.clone());
                Ok(())
            })
            .unwrap();
        let saved = saved.unwrap();
        assert_eq!(saved.event_id, 7);
        assert_eq!(saved.total_seats(), 1);
    }

    #[test]
    fn failing_sink_surfaces_error() {
        let editor = Editor::default();
        let result = editor.save(&mut |_: &MapDocument| -> Result<()> {
            Err(SeatMapError::Save("offline".into()))
        });
        assert!(matches!(result, Err(SeatMapError::Save(_))));
    }

    #[test]
    fn viewport_memo_follows_revisions() {
        let mut editor = editor_with_catalog();
        let empty = editor.viewport();
        editor.add_seat_at(Point::new(2000.0, 2000.0)).unwrap();
        assert_ne!(editor.viewport(), empty);
    }
}
