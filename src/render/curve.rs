//! Curve Interpolation
//!
//! Uniform cubic B-spline through a polyline's control points. The curve
//! starts and ends exactly on the first and last points and smooths
//! everything in between, which suits noisy heart-rate traces.

use super::svg::PathData;

/// Build a B-spline path through `points` (pixel coordinates).
///
/// One point yields a closed single-point path, two points a straight
/// segment, and an empty slice an empty path.
pub fn basis(points: &[(f64, f64)]) -> PathData {
    let mut path = PathData::new();
    let mut seen = 0usize;
    let (mut x0, mut y0) = (f64::NAN, f64::NAN);
    let (mut x1, mut y1) = (f64::NAN, f64::NAN);

    for &(x, y) in points {
        match seen {
            0 => path.move_to(x, y),
            1 => {}
            2 => {
                path.line_to((5.0 * x0 + x1) / 6.0, (5.0 * y0 + y1) / 6.0);
                segment(&mut path, (x0, y0), (x1, y1), (x, y));
            }
            _ => segment(&mut path, (x0, y0), (x1, y1), (x, y)),
        }
        seen = (seen + 1).min(3);
        x0 = x1;
        x1 = x;
        y0 = y1;
        y1 = y;
    }

    match seen {
        3 => {
            segment(&mut path, (x0, y0), (x1, y1), (x1, y1));
            path.line_to(x1, y1);
        }
        2 => path.line_to(x1, y1),
        1 => path.close_path(),
        _ => {}
    }

    path
}

fn segment(path: &mut PathData, p0: (f64, f64), p1: (f64, f64), p: (f64, f64)) {
    path.bezier_curve_to(
        (2.0 * p0.0 + p1.0) / 3.0,
        (2.0 * p0.1 + p1.1) / 3.0,
        (p0.0 + 2.0 * p1.0) / 3.0,
        (p0.1 + 2.0 * p1.1) / 3.0,
        (p0.0 + 4.0 * p1.0 + p.0) / 6.0,
        (p0.1 + 4.0 * p1.1 + p.1) / 6.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(basis(&[]).is_empty());
    }

    #[test]
    fn test_single_point() {
        assert_eq!(basis(&[(3.0, 4.0)]).as_str(), "M3,4Z");
    }

    #[test]
    fn test_two_points_is_straight() {
        assert_eq!(basis(&[(0.0, 0.0), (6.0, 12.0)]).as_str(), "M0,0L6,12");
    }

    #[test]
    fn test_three_points() {
        let path = basis(&[(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)]);
        assert_eq!(path.as_str(), "M0,0L1,1C2,2,4,4,6,4C8,4,10,2,11,1L12,0");
    }

    #[test]
    fn test_endpoints_are_interpolated() {
        let points: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, (i * i) as f64)).collect();
        let d = basis(&points).into_string();
        assert!(d.starts_with("M0,0"));
        assert!(d.ends_with("L19,361"));
    }
}
