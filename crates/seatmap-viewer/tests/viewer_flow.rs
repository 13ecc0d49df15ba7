//! Integration tests: viewer clicks, camera and the picker round trip.

use pretty_assertions::assert_eq;
use seatmap_core::{ElementId, Point, SeatMapError, SeatStatus};
use seatmap_render::DrawCmd;
use seatmap_render::paint::BRAND_ORANGE;
use seatmap_viewer::{Pick, SeatPicker, Viewer, ViewerConfig};

fn teatro() -> Viewer {
    Viewer::from_json(include_str!("fixtures/teatro.json"), ViewerConfig::default()).unwrap()
}

fn id(s: &str) -> ElementId {
    ElementId::intern(s)
}

#[test]
fn occupied_seat_never_invokes_callback() {
    let mut viewer = teatro();
    let mut calls = 0;
    let screen = viewer.document_to_screen(Point::new(180.0, 200.0));
    assert_eq!(viewer.click(screen, |_| calls += 1), None);
    assert_eq!(calls, 0);
    assert_eq!(viewer.seat(id("seat-0-1")).unwrap().status, SeatStatus::Occupied);
}

#[test]
fn blocked_and_sold_seats_are_ignored() {
    let mut viewer = teatro();
    let mut calls = Vec::new();
    for p in [Point::new(120.0, 260.0), Point::new(180.0, 260.0)] {
        assert_eq!(viewer.click_document(p, |id| calls.push(id)), None);
    }
    assert!(calls.is_empty());
}

#[test]
fn free_seat_reports_id_without_changing_status() {
    let mut viewer = teatro();
    let mut reported = None;
    let screen = viewer.document_to_screen(Point::new(120.0, 200.0));
    assert_eq!(
        viewer.click(screen, |id| reported = Some(id)),
        Some(id("seat-0-0"))
    );
    assert_eq!(reported, Some(id("seat-0-0")));
    assert_eq!(viewer.seat(id("seat-0-0")).unwrap().status, SeatStatus::Free);
    assert_eq!(viewer.focused(), Some(id("seat-0-0")));
}

#[test]
fn objects_and_empty_canvas_are_not_clickable() {
    let mut viewer = teatro();
    let mut calls = 0;
    // Stage center, then bar center, then nothing.
    for p in [
        Point::new(150.0, 80.0),
        Point::new(600.0, 400.0),
        Point::new(400.0, 300.0),
    ] {
        assert_eq!(viewer.click_document(p, |_| calls += 1), None);
    }
    assert_eq!(calls, 0);
}

#[test]
fn picker_drives_viewer_statuses() {
    let mut viewer = teatro();
    let base = viewer.seats().to_vec();
    let mut picker = SeatPicker::new(1);

    let mut clicked = None;
    viewer.click_document(Point::new(120.0, 200.0), |id| clicked = Some(id));
    let clicked = clicked.unwrap();
    assert_eq!(picker.toggle_id(&base, clicked).unwrap(), Pick::Selected);
    viewer.set_seats(picker.apply(&base));

    let stats = viewer.stats();
    assert_eq!(stats.selected, 1);
    assert_eq!(stats.free, 0);
    assert_eq!(stats.selected_total, 45.0);
    assert_eq!(picker.confirm().unwrap(), &[clicked]);

    // The selected seat gets the orange glow.
    let list = viewer.display_list();
    let glow = list.for_element(clicked).any(|cmd| {
        matches!(cmd, DrawCmd::Fill { color, .. } if *color == BRAND_ORANGE.with_alpha(0.2))
    });
    assert!(glow);

    // Clicking it again through the viewer releases it.
    viewer.click_document(Point::new(120.0, 200.0), |id| {
        assert_eq!(picker.toggle_id(&base, id).unwrap(), Pick::Deselected);
    });
    viewer.set_seats(picker.apply(&base));
    assert_eq!(viewer.stats().selected, 0);
    assert!(matches!(
        picker.confirm(),
        Err(SeatMapError::SelectionIncomplete { .. })
    ));
}

#[test]
fn stage_banner_sits_above_content() {
    let mut viewer = teatro();
    let viewport = viewer.viewport();
    // Content framing (-60, -5, 795, 485) grown upwards by the stage offset.
    assert_eq!(viewport.min_y, -85.0);
    assert_eq!(viewport.height, 565.0);
    let banner = viewer.stage_banner().unwrap();
    assert_eq!(banner.title, "ESCENARIO");
    assert_eq!(banner.bounds.y0, -55.0);
    assert_eq!(banner.bounds.width(), 400.0);
}

#[test]
fn zoom_is_clamped_to_viewer_limits() {
    let mut viewer = teatro();
    for _ in 0..20 {
        viewer.zoom_in();
    }
    assert_eq!(viewer.camera().scale, 5.0);
    for _ in 0..40 {
        viewer.zoom_out();
    }
    assert_eq!(viewer.camera().scale, 0.3);
    viewer.reset_view();
    assert_eq!(viewer.camera().scale, 1.0);
}

#[test]
fn clicks_land_on_seats_after_zoom_and_pan() {
    let mut viewer = teatro();
    let cursor = viewer.document_to_screen(Point::new(300.0, 300.0));
    viewer.wheel(cursor, 4.0);
    viewer.pan_by(seatmap_core::Vec2::new(-35.0, 12.0));
    let screen = viewer.document_to_screen(Point::new(120.0, 200.0));
    assert_eq!(viewer.click(screen, |_| {}), Some(id("seat-0-0")));
}

#[test]
fn every_zone_is_shown() {
    let viewer = Viewer::from_json(
        include_str!("fixtures/multi_zone.json"),
        ViewerConfig::default(),
    )
    .unwrap();
    assert_eq!(viewer.seats().len(), 3);
}
