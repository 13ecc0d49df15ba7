//! Persisted map format (JSON).
//!
//! A map document carries the canvas size, one or more zones (each with its
//! seats and decorative objects) and the entry type catalog. The editing
//! core works on a single zone: hydration reads the first one, saving emits
//! exactly one.

use crate::error::{Result, SeatMapError};
use crate::model::{DecorativeObject, EntryType, Scene, Seat};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Name given to the single zone written on save.
pub const MAIN_ZONE_NAME: &str = "Zona Principal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(rename = "eventoId", default)]
    pub event_id: u64,
    #[serde(rename = "ancho")]
    pub width: f64,
    #[serde(rename = "alto")]
    pub height: f64,
    #[serde(rename = "zonas", default)]
    pub zones: SmallVec<[Zone; 1]>,
    #[serde(rename = "tiposEntrada", default)]
    pub entry_types: Vec<EntryType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u32,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "aforoTotal", default)]
    pub capacity: usize,
    #[serde(rename = "asientos", default)]
    pub seats: Vec<Seat>,
    #[serde(rename = "objetosDecorativos", default)]
    pub objects: Vec<DecorativeObject>,
}

impl MapDocument {
    pub fn total_seats(&self) -> usize {
        self.zones.iter().map(|z| z.seats.len()).sum()
    }
}

/// Parse a map document. Malformed JSON or a wrong shape is an
/// `Import` error; nothing is partially applied.
pub fn parse_map(json: &str) -> Result<MapDocument> {
    let doc: MapDocument = serde_json::from_str(json).map_err(SeatMapError::Import)?;
    if doc.zones.len() > 1 {
        log::warn!(
            "map has {} zones; only the first is loaded for editing",
            doc.zones.len()
        );
    }
    Ok(doc)
}

/// Pretty-printed JSON for a map document.
pub fn emit_map(doc: &MapDocument) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(SeatMapError::Export)
}

impl Scene {
    /// Hydrate from the first zone of a persisted map.
    pub fn from_document(doc: &MapDocument) -> Self {
        let (seats, objects) = doc
            .zones
            .first()
            .map(|z| (z.seats.clone(), z.objects.clone()))
            .unwrap_or_default();
        Self {
            seats,
            objects,
            entry_types: doc.entry_types.clone(),
            width: doc.width,
            height: doc.height,
        }
    }

    /// Build the persisted form: one main zone holding every seat and object.
    pub fn to_document(&self, event_id: u64) -> MapDocument {
        let mut zones = SmallVec::new();
        zones.push(Zone {
            id: 1,
            name: MAIN_ZONE_NAME.to_string(),
            capacity: self.seats.len(),
            seats: self.seats.clone(),
            objects: self.objects.clone(),
        });
        MapDocument {
            event_id,
            width: self.width,
            height: self.height,
            zones,
            entry_types: self.entry_types.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ElementId;
    use crate::model::{ObjectKind, SeatStatus};
    use pretty_assertions::assert_eq;

    const SMALL: &str = r##"{
      "eventoId": 4,
      "ancho": 800,
      "alto": 600,
      "zonas": [{
        "id": 1,
        "nombre": "Platea",
        "aforoTotal": 1,
        "asientos": [
          { "id": "seat-0-0", "x": 100, "y": 120, "estado": "OCUPADO", "etiqueta": "A1",
            "tipoEntradaId": 1, "precio": 30 }
        ],
        "objetosDecorativos": [
          { "id": "deco-1", "tipo": "escenario", "x": 400, "y": 40, "ancho": 300, "alto": 50,
            "clickeable": false }
        ]
      }],
      "tiposEntrada": [{ "id": 1, "nombre": "General", "precio": 30, "color": "#10b981" }]
    }"##;

    #[test]
    fn hydrates_first_zone() {
        let doc = parse_map(SMALL).unwrap();
        let scene = Scene::from_document(&doc);
        assert_eq!(scene.seats.len(), 1);
        assert_eq!(scene.seats[0].status, SeatStatus::Occupied);
        assert_eq!(scene.objects[0].kind, ObjectKind::Stage);
        assert_eq!(scene.entry_types[0].name, "General");
        assert_eq!((scene.width, scene.height), (800.0, 600.0));
    }

    #[test]
    fn missing_optional_sections_default() {
        let doc = parse_map(r#"{ "ancho": 500, "alto": 400 }"#).unwrap();
        let scene = Scene::from_document(&doc);
        assert!(scene.is_empty());
        assert!(scene.entry_types.is_empty());
    }

    #[test]
    fn malformed_json_is_an_import_error() {
        assert!(matches!(parse_map("{ \"ancho\": "), Err(SeatMapError::Import(_))));
        assert!(matches!(
            parse_map(r#"{ "ancho": 1, "alto": 1, "zonas": [{ "id": 1, "asientos": [{ "id": "a", "x": 0, "y": 0, "estado": "ROTO" }] }] }"#),
            Err(SeatMapError::Import(_))
        ));
    }

    #[test]
    fn save_emits_single_main_zone() {
        let doc = parse_map(SMALL).unwrap();
        let scene = Scene::from_document(&doc);
        let saved = scene.to_document(4);
        assert_eq!(saved.zones.len(), 1);
        assert_eq!(saved.zones[0].name, MAIN_ZONE_NAME);
        assert_eq!(saved.zones[0].capacity, 1);
        assert_eq!(saved.zones[0].seats[0].id, ElementId::intern("seat-0-0"));

        let text = emit_map(&saved).unwrap();
        let reparsed = parse_map(&text).unwrap();
        assert_eq!(reparsed, saved);
    }
}
