//! Core data model for seat maps.
//!
//! A `Scene` is a flat aggregate: an ordered list of purchasable `Seat`s, an
//! ordered list of `DecorativeObject`s (stages, tables, bars…) and a catalog
//! of `EntryType`s (pricing/colour categories). Order matters: later items
//! paint on top and win hit tests.
//!
//! Field names follow Rust conventions; the `serde` renames keep the wire
//! names of the persisted map format (`estado`, `etiqueta`, `ancho`, …).

use crate::id::{ElementId, EntryTypeId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        let (r, g, b, a) = match bytes.len() {
            3 => (short(0)?, short(1)?, short(2)?, 255),
            4 => (short(0)?, short(1)?, short(2)?, short(3)?),
            6 => (long(0)?, long(2)?, long(4)?, 255),
            8 => (long(0)?, long(2)?, long(4)?, long(6)?),
            _ => return None,
        };
        Some(Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// Channels as 8-bit values `[r, g, b, a]`.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Emit as lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    ///
    /// This is the canonical form written by the map emitter: `#FF0000` and
    /// `#f00` both come back out as `#ff0000`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Euclidean distance between the two colors in 0–255 RGB space.
    /// Alpha is ignored.
    pub fn rgb_distance(&self, other: &Color) -> f64 {
        let [r1, g1, b1, _] = self.to_rgba8();
        let [r2, g2, b2, _] = other.to_rgba8();
        let d = |a: u8, b: u8| (a as f64 - b as f64).powi(2);
        (d(r1, r2) + d(g1, g2) + d(b1, b2)).sqrt()
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{s}`")))
    }
}

/// Colors used by the system for taken/selected states. Entry Type colors
/// too close to any of these are flagged (advisory only).
pub const RESERVED_COLORS: [&str; 5] = ["#64748b", "#6b7280", "#ef4444", "#dc2626", "#f87171"];

/// RGB distance under which a color counts as conflicting.
pub const CONFLICT_DISTANCE: f64 = 80.0;

/// Returns the first reserved color that `color` is visually too close to.
pub fn conflicting_reserved_color(color: &Color) -> Option<&'static str> {
    RESERVED_COLORS.iter().copied().find(|hex| {
        Color::from_hex(hex).is_some_and(|reserved| color.rgb_distance(&reserved) < CONFLICT_DISTANCE)
    })
}

// ─── Seats ───────────────────────────────────────────────────────────────

/// Seat status. `Occupied`, `Sold` and `Blocked` come from the hydrated map
/// and are never reached through a click; only `Free ⇄ Selected` toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeatStatus {
    #[default]
    #[serde(rename = "LIBRE")]
    Free,
    #[serde(rename = "OCUPADO")]
    Occupied,
    #[serde(rename = "SELECCIONADO")]
    Selected,
    #[serde(rename = "BLOQUEADO")]
    Blocked,
    #[serde(rename = "VENDIDO")]
    Sold,
}

impl SeatStatus {
    /// Whether a click may toggle this seat.
    pub const fn is_clickable(self) -> bool {
        matches!(self, Self::Free | Self::Selected)
    }

    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Occupied | Self::Sold)
    }

    /// The status a click moves to, or `None` when the seat is not clickable.
    pub const fn toggled(self) -> Option<Self> {
        match self {
            Self::Free => Some(Self::Selected),
            Self::Selected => Some(Self::Free),
            _ => None,
        }
    }
}

/// Rendering hint for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeatShape {
    #[default]
    #[serde(rename = "circulo")]
    Circle,
    #[serde(rename = "cuadrado")]
    Square,
    #[serde(rename = "rectangulo")]
    Rectangle,
    #[serde(rename = "triangulo")]
    Triangle,
}

impl SeatShape {
    /// Footprint of the shape relative to the seat center.
    pub fn footprint(self) -> Rect {
        match self {
            Self::Circle => Rect::new(-14.0, -14.0, 14.0, 14.0),
            Self::Square => Rect::new(-14.0, -14.0, 14.0, 14.0),
            Self::Rectangle => Rect::new(-18.0, -10.0, 18.0, 10.0),
            Self::Triangle => Rect::new(-14.0, -16.0, 14.0, 10.0),
        }
    }
}

/// A pricing/visual category seats can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryType {
    pub id: EntryTypeId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub color: Color,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntryType {
    pub fn new(id: u32, name: impl Into<String>, price: f64, color: Color) -> Self {
        Self {
            id: EntryTypeId(id),
            name: name.into(),
            price,
            color,
            description: None,
        }
    }

    /// The reserved system color this type's color is too close to, if any.
    pub fn color_conflict(&self) -> Option<&'static str> {
        conflicting_reserved_color(&self.color)
    }
}

/// A clickable, purchasable position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "estado", default)]
    pub status: SeatStatus,
    #[serde(rename = "etiqueta", default)]
    pub label: String,
    #[serde(rename = "fila", default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
    #[serde(rename = "columna", default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(rename = "tipoEntradaId", default, skip_serializing_if = "Option::is_none")]
    pub entry_type_id: Option<EntryTypeId>,
    /// Snapshot of the entry type at assignment time.
    #[serde(rename = "tipoEntrada", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<EntryType>,
    /// Copied from the entry type on assignment; may diverge afterwards.
    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "zonaId", default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<u32>,
    #[serde(rename = "forma", default)]
    pub shape: SeatShape,
    /// Carried through from the map as authored. Viewer clicks are gated by
    /// status, not by this flag.
    #[serde(rename = "clickeable", default, skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
}

impl Seat {
    pub fn new(id: ElementId, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            id,
            x,
            y,
            status: SeatStatus::Free,
            label: label.into(),
            row: None,
            column: None,
            entry_type_id: None,
            entry_type: None,
            price: None,
            zone_id: None,
            shape: SeatShape::Circle,
            clickable: Some(true),
        }
    }

    /// Link to `entry_type`, copying its snapshot and current price.
    pub fn assign_entry_type(&mut self, entry_type: &EntryType) {
        self.entry_type_id = Some(entry_type.id);
        self.entry_type = Some(entry_type.clone());
        self.price = Some(entry_type.price);
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Shape bounds in document coordinates.
    pub fn bounds(&self) -> Rect {
        self.shape.footprint() + self.position().to_vec2()
    }
}

// ─── Decorative objects ──────────────────────────────────────────────────

/// Closed set of decorative object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "escenario")]
    Stage,
    #[serde(rename = "mesa-grande")]
    LargeTable,
    #[serde(rename = "barra")]
    Bar,
    #[serde(rename = "decoracion")]
    Decoration,
    #[serde(rename = "texto")]
    Text,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 5] = [
        Self::Stage,
        Self::LargeTable,
        Self::Bar,
        Self::Decoration,
        Self::Text,
    ];

    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Stage => "escenario",
            Self::LargeTable => "mesa-grande",
            Self::Bar => "barra",
            Self::Decoration => "decoracion",
            Self::Text => "texto",
        }
    }

    /// `(width, height)` of a freshly placed object.
    pub const fn default_size(self) -> (f64, f64) {
        match self {
            Self::Stage => (300.0, 50.0),
            Self::LargeTable => (80.0, 80.0),
            Self::Bar => (150.0, 40.0),
            Self::Decoration => (60.0, 60.0),
            Self::Text => (100.0, 30.0),
        }
    }

    pub fn default_color(self) -> Color {
        match self {
            Self::Stage => Color::from_rgb8(0x93, 0x33, 0xea),
            Self::LargeTable => Color::from_rgb8(0xf5, 0x9e, 0x0b),
            Self::Bar => Color::from_rgb8(0x3b, 0x82, 0xf6),
            Self::Decoration => Color::from_rgb8(0x10, 0xb9, 0x81),
            Self::Text => Color::from_rgb8(0x6b, 0x72, 0x80),
        }
    }
}

/// Serialized as `"clickeable": false`; decorative objects never take part
/// in seat selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotClickable;

impl Serialize for NotClickable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(false)
    }
}

impl<'de> Deserialize<'de> for NotClickable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer)?;
        Ok(NotClickable)
    }
}

/// A non-purchasable visual element. `x`/`y` is the center of the box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorativeObject {
    pub id: ElementId,
    #[serde(rename = "tipo")]
    pub kind: ObjectKind,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "ancho")]
    pub width: f64,
    #[serde(rename = "alto")]
    pub height: f64,
    #[serde(rename = "rotacion", default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(rename = "etiqueta", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "clickeable", default)]
    clickable: NotClickable,
}

impl DecorativeObject {
    /// A new object of `kind` centered at `(x, y)` with the kind's default
    /// size, color and label.
    pub fn new(id: ElementId, kind: ObjectKind, x: f64, y: f64) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id,
            kind,
            x,
            y,
            width,
            height,
            rotation: None,
            color: Some(kind.default_color()),
            label: Some(kind.wire_name().to_uppercase()),
            clickable: NotClickable,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Axis-aligned box: `x ± width/2`, `y ± height/2`.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center(), (self.width, self.height))
    }

    /// Label shown on the box: the explicit label or the kind's wire name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.kind.wire_name())
    }

    pub fn display_color(&self) -> Color {
        self.color.unwrap_or_else(|| ObjectKind::Stage.default_color())
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// The full seat-map state.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub seats: Vec<Seat>,
    pub objects: Vec<DecorativeObject>,
    pub entry_types: Vec<EntryType>,
    /// Nominal canvas size, used when the scene is empty and by generators.
    pub width: f64,
    pub height: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            seats: Vec::new(),
            objects: Vec::new(),
            entry_types: Vec::new(),
            width,
            height,
        }
    }

    pub fn seat(&self, id: ElementId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub fn seat_mut(&mut self, id: ElementId) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == id)
    }

    pub fn object(&self, id: ElementId) -> Option<&DecorativeObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: ElementId) -> Option<&mut DecorativeObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn entry_type(&self, id: EntryTypeId) -> Option<&EntryType> {
        self.entry_types.iter().find(|t| t.id == id)
    }

    /// Whether any seat or object already uses `id`.
    pub fn contains_id(&self, id: ElementId) -> bool {
        self.seats.iter().any(|s| s.id == id) || self.objects.iter().any(|o| o.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty() && self.objects.is_empty()
    }

    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            seats: &self.seats,
            objects: &self.objects,
            width: self.width,
            height: self.height,
        }
    }
}

/// Borrowed, read-only view over seats and objects. Lets read paths (viewer,
/// hit testing, viewport) work from a `Scene` or from bare slices.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub seats: &'a [Seat],
    pub objects: &'a [DecorativeObject],
    pub width: f64,
    pub height: f64,
}

impl<'a> SceneView<'a> {
    pub fn new(seats: &'a [Seat], objects: &'a [DecorativeObject], width: f64, height: f64) -> Self {
        Self {
            seats,
            objects,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty() && self.objects.is_empty()
    }

    pub fn seat(&self, id: ElementId) -> Option<&'a Seat> {
        self.seats.iter().find(|s| s.id == id)
    }
}

impl<'a> From<&'a Scene> for SceneView<'a> {
    fn from(scene: &'a Scene) -> Self {
        scene.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_roundtrip() {
        let c = Color::from_hex("#10b981").unwrap();
        assert_eq!(c.to_hex(), "#10b981");
        assert_eq!(Color::from_hex("#FFF").unwrap().to_hex(), "#ffffff");
        assert_eq!(Color::from_hex("#FF0000").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::from_hex("00000080").unwrap().to_hex(), "#00000080");
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn reserved_colors_conflict_with_themselves() {
        for hex in RESERVED_COLORS {
            let c = Color::from_hex(hex).unwrap();
            assert_eq!(conflicting_reserved_color(&c), Some(hex));
        }
    }

    #[test]
    fn default_entry_green_does_not_conflict() {
        let t = EntryType::new(1, "General", 25.0, Color::from_hex("#10b981").unwrap());
        assert_eq!(t.color_conflict(), None);
    }

    #[test]
    fn near_gray_conflicts() {
        let t = EntryType::new(1, "Gris", 25.0, Color::from_hex("#707a88").unwrap());
        assert!(t.color_conflict().is_some());
    }

    #[test]
    fn status_toggle_edges() {
        assert_eq!(SeatStatus::Free.toggled(), Some(SeatStatus::Selected));
        assert_eq!(SeatStatus::Selected.toggled(), Some(SeatStatus::Free));
        assert_eq!(SeatStatus::Occupied.toggled(), None);
        assert_eq!(SeatStatus::Sold.toggled(), None);
        assert_eq!(SeatStatus::Blocked.toggled(), None);
        assert!(SeatStatus::Sold.is_taken());
        assert!(!SeatStatus::Blocked.is_clickable());
    }

    #[test]
    fn assign_entry_type_copies_price() {
        let vip = EntryType::new(2, "VIP", 55.0, Color::from_rgb8(0x10, 0xb9, 0x81));
        let mut seat = Seat::new(ElementId::intern("s1"), 10.0, 10.0, "A1");
        seat.assign_entry_type(&vip);
        assert_eq!(seat.entry_type_id, Some(EntryTypeId(2)));
        assert_eq!(seat.price, Some(55.0));
        assert_eq!(seat.entry_type.as_ref().map(|t| t.name.as_str()), Some("VIP"));
    }

    #[test]
    fn object_defaults_follow_kind() {
        let obj = DecorativeObject::new(ElementId::intern("deco-0"), ObjectKind::Bar, 100.0, 50.0);
        assert_eq!((obj.width, obj.height), (150.0, 40.0));
        assert_eq!(obj.display_label(), "BARRA");
        assert_eq!(obj.bounds(), Rect::new(25.0, 30.0, 175.0, 70.0));
    }

    #[test]
    fn seat_wire_names() {
        let mut seat = Seat::new(ElementId::intern("seat-0-0"), 75.0, 125.0, "A1");
        seat.row = Some(1);
        seat.status = SeatStatus::Blocked;
        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(json["estado"], "BLOQUEADO");
        assert_eq!(json["etiqueta"], "A1");
        assert_eq!(json["fila"], 1);
        assert_eq!(json["forma"], "circulo");
        assert_eq!(json["clickeable"], true);
        assert!(json.get("columna").is_none());
    }

    #[test]
    fn object_always_serializes_not_clickable() {
        let obj = DecorativeObject::new(ElementId::intern("deco-1"), ObjectKind::Stage, 0.0, 0.0);
        let json = serde_json::to_value(&obj).unwrap();
        assert_eq!(json["clickeable"], false);
        assert_eq!(json["tipo"], "escenario");
        assert_eq!(json["color"], "#9333ea");
    }
}
