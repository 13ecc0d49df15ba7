//! Lint diagnostics for seat maps.
//!
//! Reports structural issues without modifying the scene. Color conflicts
//! are advisory: a conflicting entry type is still saved and rendered.

use crate::id::{ElementId, EntryTypeId};
use crate::model::Scene;
use std::collections::HashSet;

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Likely a mistake.
    Warning,
    /// Informational.
    Info,
}

/// What a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSubject {
    Seat(ElementId),
    Object(ElementId),
    EntryType(EntryTypeId),
}

#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    pub subject: LintSubject,
    pub message: String,
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "duplicate-seat-id", "color-conflict").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over the scene and return diagnostics.
#[must_use]
pub fn lint_scene(scene: &Scene) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_duplicate_ids(scene, &mut diags);
    lint_unknown_entry_types(scene, &mut diags);
    lint_color_conflicts(scene, &mut diags);
    lint_duplicate_labels(scene, &mut diags);
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

fn lint_duplicate_ids(scene: &Scene, diags: &mut Vec<LintDiagnostic>) {
    let mut seen = HashSet::new();
    for seat in &scene.seats {
        if !seen.insert(seat.id) {
            diags.push(LintDiagnostic {
                subject: LintSubject::Seat(seat.id),
                message: format!("Seat id `{}` is used more than once.", seat.id),
                severity: LintSeverity::Warning,
                rule: "duplicate-seat-id",
            });
        }
    }
    for obj in &scene.objects {
        if !seen.insert(obj.id) {
            diags.push(LintDiagnostic {
                subject: LintSubject::Object(obj.id),
                message: format!("Object id `{}` is already used by another element.", obj.id),
                severity: LintSeverity::Warning,
                rule: "duplicate-object-id",
            });
        }
    }
}

fn lint_unknown_entry_types(scene: &Scene, diags: &mut Vec<LintDiagnostic>) {
    for seat in &scene.seats {
        if let Some(type_id) = seat.entry_type_id
            && scene.entry_type(type_id).is_none()
        {
            diags.push(LintDiagnostic {
                subject: LintSubject::Seat(seat.id),
                message: format!(
                    "Seat `{}` references entry type {type_id}, which is not in the catalog.",
                    seat.id
                ),
                severity: LintSeverity::Warning,
                rule: "unknown-entry-type",
            });
        }
    }
}

fn lint_color_conflicts(scene: &Scene, diags: &mut Vec<LintDiagnostic>) {
    for entry in &scene.entry_types {
        if let Some(reserved) = entry.color_conflict() {
            diags.push(LintDiagnostic {
                subject: LintSubject::EntryType(entry.id),
                message: format!(
                    "Entry type `{}` color {} is very close to system color {reserved}.",
                    entry.name,
                    entry.color.to_hex()
                ),
                severity: LintSeverity::Warning,
                rule: "color-conflict",
            });
        }
    }
}

fn lint_duplicate_labels(scene: &Scene, diags: &mut Vec<LintDiagnostic>) {
    let mut seen = HashSet::new();
    for seat in &scene.seats {
        if !seat.label.is_empty() && !seen.insert(seat.label.as_str()) {
            diags.push(LintDiagnostic {
                subject: LintSubject::Seat(seat.id),
                message: format!("Label `{}` appears on more than one seat.", seat.label),
                severity: LintSeverity::Info,
                rule: "duplicate-label",
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, EntryType, Seat};

    fn rules(diags: &[LintDiagnostic]) -> Vec<&'static str> {
        diags.iter().map(|d| d.rule).collect()
    }

    #[test]
    fn clean_scene_has_no_findings() {
        let mut scene = Scene::default();
        let general = EntryType::new(1, "General", 20.0, Color::from_rgb8(0x10, 0xb9, 0x81));
        let mut seat = Seat::new(ElementId::intern("lint-a"), 0.0, 0.0, "A1");
        seat.assign_entry_type(&general);
        scene.entry_types.push(general);
        scene.seats.push(seat);
        assert!(lint_scene(&scene).is_empty());
    }

    #[test]
    fn flags_duplicates_and_dangling_types() {
        let mut scene = Scene::default();
        let mut a = Seat::new(ElementId::intern("lint-dup"), 0.0, 0.0, "A1");
        a.entry_type_id = Some(EntryTypeId(9));
        let b = Seat::new(ElementId::intern("lint-dup"), 10.0, 0.0, "A1");
        scene.seats.extend([a, b]);
        let diags = lint_scene(&scene);
        assert_eq!(
            rules(&diags),
            vec!["duplicate-seat-id", "unknown-entry-type", "duplicate-label"]
        );
        assert_eq!(diags[2].severity, LintSeverity::Info);
    }

    #[test]
    fn color_conflict_is_a_warning() {
        let mut scene = Scene::default();
        scene
            .entry_types
            .push(EntryType::new(1, "Rojo", 20.0, Color::from_rgb8(0xee, 0x44, 0x44)));
        let diags = lint_scene(&scene);
        assert_eq!(rules(&diags), vec!["color-conflict"]);
        assert_eq!(diags[0].subject, LintSubject::EntryType(EntryTypeId(1)));
    }
}
