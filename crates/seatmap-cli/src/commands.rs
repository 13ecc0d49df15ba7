//! Subcommand definitions and execution. Every command returns the text
//! printed on stdout.

use clap::{Args, Parser, Subcommand};
use seatmap_core::{
    CircleLayout, DEFAULT_PADDING, GridLayout, LintDiagnostic, LintSeverity, LintSubject, Scene,
    SeatMapError, compute_viewport, emit_map, lint_scene, parse_map,
};
use seatmap_editor::{Editor, EditorConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "seatmap",
    about = "Lint, frame, generate and normalize seat map JSON files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Report lint findings for a map.
    Lint { map: PathBuf },

    /// Print the `viewBox` framing the map's first zone.
    Viewport {
        map: PathBuf,
        #[arg(default_value_t = DEFAULT_PADDING)]
        padding: f64,
    },

    /// Emit a map with a rows × columns seat grid.
    Grid {
        rows: u32,
        columns: u32,
        #[command(flatten)]
        canvas: Canvas,
    },

    /// Emit a map with seats on a circle.
    Circle {
        count: u32,
        radius: f64,
        #[command(flatten)]
        canvas: Canvas,
    },

    /// Re-emit a map in canonical pretty form.
    Normalize { map: PathBuf },
}

/// Trailing `[width height]`, both or neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Args)]
pub struct Canvas {
    #[arg(requires = "height")]
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Canvas {
    fn config(self) -> EditorConfig {
        let defaults = EditorConfig::default();
        EditorConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            ..defaults
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Map(#[from] SeatMapError),
}

impl Command {
    pub fn run(&self) -> Result<String, CliError> {
        log::debug!("running {self:?}");
        match self {
            Self::Lint { map } => Ok(lint_report(&read(map)?)?),
            Self::Viewport { map, padding } => Ok(viewport_report(&read(map)?, *padding)?),
            Self::Normalize { map } => Ok(normalize(&read(map)?)?),
            Self::Grid {
                rows,
                columns,
                canvas,
            } => {
                let mut editor = Editor::new(canvas.config());
                editor.generate_grid(GridLayout {
                    rows: *rows,
                    columns: *columns,
                })?;
                Ok(editor.export_json()?)
            }
            Self::Circle {
                count,
                radius,
                canvas,
            } => {
                let mut editor = Editor::new(canvas.config());
                editor.generate_circle(CircleLayout {
                    count: *count,
                    radius: *radius,
                })?;
                Ok(editor.export_json()?)
            }
        }
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ─── Commands ────────────────────────────────────────────────────────────

pub fn lint_report(json: &str) -> Result<String, SeatMapError> {
    let scene = Scene::from_document(&parse_map(json)?);
    let diags = lint_scene(&scene);
    let mut lines: Vec<String> = diags.iter().map(format_diagnostic).collect();
    let warnings = diags
        .iter()
        .filter(|d| d.severity == LintSeverity::Warning)
        .count();
    let notes = diags.len() - warnings;
    lines.push(if diags.is_empty() {
        "no issues found".to_string()
    } else {
        format!("{warnings} warning(s), {notes} note(s)")
    });
    Ok(lines.join("\n"))
}

fn format_diagnostic(diag: &LintDiagnostic) -> String {
    let level = match diag.severity {
        LintSeverity::Warning => "warning",
        LintSeverity::Info => "note",
    };
    let subject = match diag.subject {
        LintSubject::Seat(id) => format!("seat `{id}`"),
        LintSubject::Object(id) => format!("object `{id}`"),
        LintSubject::EntryType(id) => format!("entry type {id}"),
    };
    format!("{level}[{}] {subject}: {}", diag.rule, diag.message)
}

/// The `viewBox` framing the first zone.
pub fn viewport_report(json: &str, padding: f64) -> Result<String, SeatMapError> {
    let scene = Scene::from_document(&parse_map(json)?);
    Ok(compute_viewport(scene.view(), padding).to_string())
}

/// Re-emit a map in canonical pretty form, keeping every zone.
pub fn normalize(json: &str) -> Result<String, SeatMapError> {
    emit_map(&parse_map(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    const MAP: &str = r##"{
        "ancho": 800, "alto": 600,
        "zonas": [{ "id": 1, "nombre": "Sala", "aforoTotal": 2,
            "asientos": [
                { "id": "s-1", "x": 100, "y": 100, "estado": "LIBRE", "etiqueta": "A1", "tipoEntradaId": 3 },
                { "id": "s-1", "x": 200, "y": 100, "estado": "LIBRE", "etiqueta": "A2" }
            ],
            "objetosDecorativos": [] }],
        "tiposEntrada": [{ "id": 1, "nombre": "General", "precio": 20, "color": "#10b981" }]
    }"##;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("seatmap").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generators_with_default_canvas() {
        let cmd = parse(&["grid", "2", "3"]).unwrap();
        assert_eq!(
            cmd,
            Command::Grid {
                rows: 2,
                columns: 3,
                canvas: Canvas::default(),
            }
        );
        let Command::Grid { canvas, .. } = cmd else {
            unreachable!()
        };
        assert_eq!((canvas.config().width, canvas.config().height), (800.0, 600.0));

        assert_eq!(
            parse(&["circle", "8", "120", "1000", "700"]).unwrap(),
            Command::Circle {
                count: 8,
                radius: 120.0,
                canvas: Canvas {
                    width: Some(1000.0),
                    height: Some(700.0),
                },
            }
        );
    }

    #[test]
    fn viewport_padding_defaults() {
        assert_eq!(
            parse(&["viewport", "map.json"]).unwrap(),
            Command::Viewport {
                map: PathBuf::from("map.json"),
                padding: DEFAULT_PADDING,
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["grid", "two", "3"]).is_err());
        assert!(parse(&["paint", "map.json"]).is_err());
        assert!(parse(&["lint"]).is_err());
        // Width without height.
        assert!(parse(&["circle", "8", "120", "1000"]).is_err());
    }

    #[test]
    fn lint_lists_findings_and_summary() {
        let report = lint_report(MAP).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines[0],
            "warning[duplicate-seat-id] seat `s-1`: Seat id `s-1` is used more than once."
        );
        assert!(lines[1].starts_with("warning[unknown-entry-type] seat `s-1`"));
        assert_eq!(lines.last().copied(), Some("2 warning(s), 0 note(s)"));
    }

    #[test]
    fn viewport_prints_view_box() {
        assert_eq!(viewport_report(MAP, 60.0).unwrap(), "40 40 220 120");
    }

    #[test]
    fn grid_command_emits_map_json() {
        let cmd = parse(&["grid", "2", "3"]).unwrap();
        let doc = parse_map(&cmd.run().unwrap()).unwrap();
        let labels: Vec<_> = doc.zones[0].seats.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["A1", "A2", "A3", "B1", "B2", "B3"]);
        assert_eq!(doc.zones[0].seats[0].price, Some(20.0));
    }

    #[test]
    fn invalid_layout_is_reported() {
        let cmd = parse(&["circle", "0", "100"]).unwrap();
        assert!(matches!(
            cmd.run(),
            Err(CliError::Map(SeatMapError::InvalidLayout(_)))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let cmd = parse(&["lint", "/nonexistent/map.json"]).unwrap();
        assert!(matches!(cmd.run(), Err(CliError::Read { .. })));
    }
}
