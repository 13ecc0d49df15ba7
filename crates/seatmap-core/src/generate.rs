//! Procedural seat layouts.
//!
//! Both generators are pure: the same parameters always produce the same
//! seats. They replace the whole seat collection, so callers own the
//! "this is destructive" warning and the single history commit.

use crate::error::{Result, SeatMapError};
use crate::id::ElementId;
use crate::model::{EntryType, Seat, SeatShape};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Rows × columns grid filling the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 10,
        }
    }
}

/// `count` seats evenly spaced on a circle centered on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleLayout {
    pub count: u32,
    pub radius: f64,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self {
            count: 20,
            radius: 150.0,
        }
    }
}

/// What every generated seat shares.
#[derive(Debug, Clone, Copy)]
pub struct SeatTemplate<'a> {
    /// Catalog's first entry type, if any.
    pub entry_type: Option<&'a EntryType>,
    pub shape: SeatShape,
    /// Price used when there is no entry type.
    pub fallback_price: f64,
}

impl SeatTemplate<'_> {
    fn stamp(&self, id: &str, x: f64, y: f64, label: String, row: u32, column: u32) -> Seat {
        let mut seat = Seat::new(ElementId::intern(id), x.round(), y.round(), label);
        seat.row = Some(row);
        seat.column = Some(column);
        seat.shape = self.shape;
        match self.entry_type {
            Some(t) => seat.assign_entry_type(t),
            None => seat.price = Some(self.fallback_price),
        }
        seat
    }
}

/// Row label for a 0-based row index: `A`..`Z`, then `AA`, `AB`, …
pub fn row_label(index: u32) -> String {
    let mut n = index as u64 + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        out.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Lay seats out in a grid. Cells span `(width − 100) / columns` by
/// `(height − 200) / rows`, starting at `(50, 100)`, one seat per cell center.
/// Labels are row letter + 1-based column (`A1`, `A2`, …, `B1`, …).
pub fn generate_grid(
    layout: GridLayout,
    canvas_width: f64,
    canvas_height: f64,
    template: &SeatTemplate<'_>,
) -> Result<Vec<Seat>> {
    if layout.rows == 0 || layout.columns == 0 {
        return Err(SeatMapError::InvalidLayout(format!(
            "grid needs at least one row and one column, got {}×{}",
            layout.rows, layout.columns
        )));
    }

    let count = layout.rows.checked_mul(layout.columns).ok_or_else(|| {
        SeatMapError::InvalidLayout(format!(
            "grid of {}×{} seats is too large",
            layout.rows, layout.columns
        ))
    })?;

    let spacing_x = (canvas_width - 100.0) / layout.columns as f64;
    let spacing_y = (canvas_height - 200.0) / layout.rows as f64;
    let offset_x = 50.0 + spacing_x / 2.0;
    let offset_y = 100.0 + spacing_y / 2.0;

    let mut seats = Vec::with_capacity(count as usize);
    for row in 0..layout.rows {
        let letter = row_label(row);
        for col in 0..layout.columns {
            seats.push(template.stamp(
                &format!("seat-{row}-{col}"),
                offset_x + col as f64 * spacing_x,
                offset_y + row as f64 * spacing_y,
                format!("{letter}{}", col + 1),
                row + 1,
                col + 1,
            ));
        }
    }
    log::debug!("generated {}×{} grid ({} seats)", layout.rows, layout.columns, seats.len());
    Ok(seats)
}

/// Place seats on a circle around the canvas center. Seat `i` sits at angle
/// `i/count · 2π − π/2`, so seat 0 is at the top. Labels are `1..=count`.
pub fn generate_circle(
    layout: CircleLayout,
    canvas_width: f64,
    canvas_height: f64,
    template: &SeatTemplate<'_>,
) -> Result<Vec<Seat>> {
    if layout.count == 0 {
        return Err(SeatMapError::InvalidLayout(
            "circle needs at least one seat".into(),
        ));
    }
    if !layout.radius.is_finite() || layout.radius < 0.0 {
        return Err(SeatMapError::InvalidLayout(format!(
            "radius must be a non-negative number, got {}",
            layout.radius
        )));
    }

    let cx = canvas_width / 2.0;
    let cy = canvas_height / 2.0;
    let seats: Vec<Seat> = (0..layout.count)
        .map(|i| {
            let angle = i as f64 / layout.count as f64 * 2.0 * PI - PI / 2.0;
            template.stamp(
                &format!("seat-circular-{i}"),
                cx + layout.radius * angle.cos(),
                cy + layout.radius * angle.sin(),
                format!("{}", i + 1),
                1,
                i + 1,
            )
        })
        .collect();
    log::debug!("generated circle of {} seats, radius {}", seats.len(), layout.radius);
    Ok(seats)
}
