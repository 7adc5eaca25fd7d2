//! Pole-Zero Plane Renderer
//!
//! Plots a filter's zeros (open circles) and poles (crosses) on the complex
//! plane, with a dashed unit circle for reference. Both axes are fixed to
//! `[-1.2, 1.2]` whatever the data; points outside that window simply land
//! outside the plot area.

use super::line_chart::Margin;
use super::scale::LinearScale;
use super::svg::{fmt_num, Element, Svg};
use super::symbol;
use crate::client::{ComplexPoint, FilterCoefficients};

/// Half-width of the plotted window on both axes
pub const PLANE_DOMAIN: f64 = 1.2;
/// Radius of a zero marker, in pixels
pub const ZERO_RADIUS: f64 = 5.0;
/// Area of a pole marker, in square pixels
pub const POLE_AREA: f64 = 50.0;

pub const AXIS_COLOR: &str = "#4b5563";
pub const CIRCLE_COLOR: &str = "#6b7280";
pub const ZERO_COLOR: &str = "#34d399";
pub const POLE_COLOR: &str = "#fb7185";

/// Pole-zero plot
#[derive(Debug, Clone, PartialEq)]
pub struct ZPlane {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ZPlane {
    fn default() -> Self {
        Self::new(350.0, 350.0)
    }
}

impl ZPlane {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::uniform(20.0),
        }
    }

    fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Horizontal (real) and vertical (imaginary) scales
    pub fn scales(&self) -> (LinearScale, LinearScale) {
        let domain = (-PLANE_DOMAIN, PLANE_DOMAIN);
        (
            LinearScale::new(domain, (0.0, self.inner_width())),
            LinearScale::new(domain, (self.inner_height(), 0.0)),
        )
    }

    /// Pixel position of `point` inside the plot area
    pub fn project(&self, point: ComplexPoint) -> (f64, f64) {
        let (x, y) = self.scales();
        (x.apply(point.re), y.apply(point.im))
    }

    /// Draw axes, unit circle and markers. Empty sets draw only the frame.
    pub fn render(&self, coefficients: &FilterCoefficients) -> Svg {
        let (x, y) = self.scales();
        let origin = (x.apply(0.0), y.apply(0.0));

        let mut plot = Element::new("g").attr(
            "transform",
            format!(
                "translate({},{})",
                fmt_num(self.margin.left),
                fmt_num(self.margin.top)
            ),
        );

        plot.push(
            Element::new("line")
                .attr("class", "real-axis")
                .num("x1", 0.0)
                .num("x2", self.inner_width())
                .num("y1", origin.1)
                .num("y2", origin.1)
                .attr("stroke", AXIS_COLOR),
        );
        plot.push(
            Element::new("line")
                .attr("class", "imag-axis")
                .num("x1", origin.0)
                .num("x2", origin.0)
                .num("y1", 0.0)
                .num("y2", self.inner_height())
                .attr("stroke", AXIS_COLOR),
        );
        plot.push(
            Element::new("circle")
                .attr("class", "unit-circle")
                .num("cx", origin.0)
                .num("cy", origin.1)
                .num("r", x.apply(1.0) - x.apply(0.0))
                .attr("stroke", CIRCLE_COLOR)
                .attr("stroke-dasharray", "4 4")
                .attr("fill", "none"),
        );

        for zero in &coefficients.zeros {
            let (cx, cy) = self.project(*zero);
            plot.push(
                Element::new("circle")
                    .attr("class", "zero")
                    .num("cx", cx)
                    .num("cy", cy)
                    .num("r", ZERO_RADIUS)
                    .attr("fill", "none")
                    .attr("stroke", ZERO_COLOR)
                    .num("stroke-width", 2.0),
            );
        }

        let cross = symbol::cross(POLE_AREA).into_string();
        for pole in &coefficients.poles {
            let (px, py) = self.project(*pole);
            plot.push(
                Element::new("path")
                    .attr("class", "pole")
                    .attr("d", cross.as_str())
                    .attr(
                        "transform",
                        format!("translate({},{})", fmt_num(px), fmt_num(py)),
                    )
                    .attr("stroke", POLE_COLOR)
                    .num("stroke-width", 2.0),
            );
        }

        let mut svg = Svg::new(self.width, self.height);
        svg.push(plot);
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_of(el: &Element) -> (f64, f64) {
        let t = el.get_attr("transform").unwrap();
        let inner = t.trim_start_matches("translate(").trim_end_matches(')');
        let (a, b) = inner.split_once(',').unwrap();
        (a.parse().unwrap(), b.parse().unwrap())
    }

    #[test]
    fn test_empty_sets_draw_frame_only() {
        let svg = ZPlane::default().render(&FilterCoefficients::default());
        let root = svg.root();

        assert_eq!(root.find_class("real-axis").len(), 1);
        assert_eq!(root.find_class("imag-axis").len(), 1);
        assert_eq!(root.find_class("unit-circle").len(), 1);
        assert!(root.find_class("zero").is_empty());
        assert!(root.find_class("pole").is_empty());
    }

    #[test]
    fn test_unit_circle_geometry() {
        let svg = ZPlane::default().render(&FilterCoefficients::default());
        let circle = &svg.root().find_class("unit-circle")[0];

        // 310px inner size over a 2.4-wide domain
        assert_eq!(circle.get_attr("cx"), Some("155"));
        assert_eq!(circle.get_attr("cy"), Some("155"));
        assert_eq!(circle.get_attr("r"), Some("129.167"));
        assert_eq!(circle.get_attr("stroke-dasharray"), Some("4 4"));
    }

    #[test]
    fn test_marker_positions() {
        let coeffs = FilterCoefficients::new(
            vec![ComplexPoint::new(0.0, 0.0)],
            vec![ComplexPoint::new(0.5, 0.0)],
        );
        let svg = ZPlane::default().render(&coeffs);
        let root = svg.root();

        let zeros = root.find_class("zero");
        assert_eq!(zeros.len(), 1);
        assert_eq!(zeros[0].get_attr("cx"), Some("155"));
        assert_eq!(zeros[0].get_attr("cy"), Some("155"));
        assert_eq!(zeros[0].get_attr("r"), Some("5"));
        assert_eq!(zeros[0].get_attr("fill"), Some("none"));

        let poles = root.find_class("pole");
        assert_eq!(poles.len(), 1);
        let (px, py) = translate_of(poles[0]);
        assert!((px - (155.0 + 0.5 * 310.0 / 2.4)).abs() < 1e-3);
        assert!((py - 155.0).abs() < 1e-3);
        assert_eq!(poles[0].get_attr("fill"), None);
        assert_eq!(poles[0].get_attr("stroke"), Some(POLE_COLOR));
        assert_eq!(poles[0].get_attr("stroke-width"), Some("2"));
    }

    #[test]
    fn test_projection_is_fixed_affine_map() {
        let plane = ZPlane::default();
        let scale = 310.0 / 2.4;

        // Includes points far outside the window: no auto-scaling
        let points = [
            ComplexPoint::new(0.3, -0.7),
            ComplexPoint::new(-1.0, 1.0),
            ComplexPoint::new(5.0, -8.0),
        ];
        for p in points {
            let (px, py) = plane.project(p);
            assert!((px - (p.re + 1.2) * scale).abs() < 1e-9);
            assert!((py - (310.0 - (p.im + 1.2) * scale)).abs() < 1e-9);
        }

        let far = FilterCoefficients::new(vec![ComplexPoint::new(5.0, 0.0)], vec![]);
        let svg = plane.render(&far);
        let zero = &svg.root().find_class("zero")[0];
        let cx: f64 = zero.get_attr("cx").unwrap().parse().unwrap();
        assert!(cx > 310.0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let coeffs = FilterCoefficients::new(
            vec![ComplexPoint::new(-1.0, 0.0); 5],
            vec![ComplexPoint::new(0.6, 0.3), ComplexPoint::new(0.6, -0.3)],
        );
        let plane = ZPlane::new(300.0, 300.0);
        assert_eq!(plane.render(&coeffs), plane.render(&coeffs));
    }
}
