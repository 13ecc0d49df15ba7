pub mod hit;
pub mod outline;
pub mod paint;

pub use hit::{HANDLE_RADIUS, Hit, hit_test, hit_test_handles, hit_test_seat};
pub use outline::{Outline, object_outline, seat_outline};
pub use paint::{
    DisplayList, DrawCmd, DrawItem, EditorOverlay, SeatPaint, StageBanner, editor_seat_paint,
    paint_editor, paint_viewer, viewer_seat_paint,
};
