//! Marker Symbols

use super::svg::PathData;

/// Plus-shaped marker centered on the origin, covering `area` square pixels
pub fn cross(area: f64) -> PathData {
    let r = (area / 5.0).sqrt() / 2.0;
    let mut path = PathData::new();
    path.move_to(-3.0 * r, -r);
    path.line_to(-r, -r);
    path.line_to(-r, -3.0 * r);
    path.line_to(r, -3.0 * r);
    path.line_to(r, -r);
    path.line_to(3.0 * r, -r);
    path.line_to(3.0 * r, r);
    path.line_to(r, r);
    path.line_to(r, 3.0 * r);
    path.line_to(-r, 3.0 * r);
    path.line_to(-r, r);
    path.line_to(-3.0 * r, r);
    path.close_path();
    path
}
