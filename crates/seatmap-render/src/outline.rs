//! Seat and object outlines as kurbo shapes.
//!
//! One outline serves both painting and hit testing, so a click lands on
//! exactly what is drawn.

use kurbo::{BezPath, Circle, Point, Rect, RoundedRect, Shape};
use seatmap_core::SeatShape;

/// Corner radius of square/rectangle seats.
pub const SEAT_CORNER_RADIUS: f64 = 3.0;
/// Corner radius of decorative object boxes.
pub const OBJECT_CORNER_RADIUS: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Circle(Circle),
    Rect(RoundedRect),
    Polygon(BezPath),
}

impl Outline {
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Circle(c) => c.contains(pt),
            Self::Rect(r) => r.contains(pt),
            Self::Polygon(p) => p.contains(pt),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle(c) => c.bounding_box(),
            Self::Rect(r) => r.bounding_box(),
            Self::Polygon(p) => p.bounding_box(),
        }
    }
}

/// Outline of a seat of `shape` centered at `center`.
pub fn seat_outline(shape: SeatShape, center: Point) -> Outline {
    match shape {
        SeatShape::Circle => Outline::Circle(Circle::new(center, 14.0)),
        SeatShape::Square | SeatShape::Rectangle => {
            let rect = shape.footprint() + center.to_vec2();
            Outline::Rect(rect.to_rounded_rect(SEAT_CORNER_RADIUS))
        }
        SeatShape::Triangle => {
            let mut path = BezPath::new();
            path.move_to((center.x, center.y - 16.0));
            path.line_to((center.x - 14.0, center.y + 10.0));
            path.line_to((center.x + 14.0, center.y + 10.0));
            path.close_path();
            Outline::Polygon(path)
        }
    }
}

/// Rounded box for a decorative object.
pub fn object_outline(bounds: Rect) -> Outline {
    Outline::Rect(bounds.to_rounded_rect(OBJECT_CORNER_RADIUS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_excludes_its_top_corners() {
        let tri = seat_outline(SeatShape::Triangle, Point::new(0.0, 0.0));
        assert!(tri.contains(Point::new(0.0, 0.0)));
        assert!(!tri.contains(Point::new(-13.0, -15.0)));
        assert_eq!(tri.bounding_box(), Rect::new(-14.0, -16.0, 14.0, 10.0));
    }

    #[test]
    fn outlines_match_footprints() {
        let c = Point::new(100.0, 50.0);
        for shape in [SeatShape::Circle, SeatShape::Square, SeatShape::Rectangle] {
            let outline = seat_outline(shape, c);
            assert_eq!(outline.bounding_box(), shape.footprint() + c.to_vec2());
        }
    }
}
