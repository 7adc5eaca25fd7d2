//! Line Chart Renderer
//!
//! Draws a sample sequence as a single smoothed line. The x axis is the
//! sample index, the y axis the sample value over `[min, max]` rounded out
//! to nice tick values.
//!
//! Rendering is a pure function of the data and the chart dimensions, so
//! a redraw with unchanged inputs produces identical markup.

use super::axis::Axis;
use super::curve;
use super::scale::LinearScale;
use super::svg::{fmt_num, Element, Svg};

/// Stroke color of the signal line
pub const LINE_COLOR: &str = "#22d3ee";
/// Color of axis lines and tick labels
pub const AXIS_COLOR: &str = "#9ca3af";
/// Color of the axis titles
pub const LABEL_COLOR: &str = "#e5e7eb";

/// Space reserved around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn uniform(size: f64) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }
}

/// Line chart for a sequence of samples
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub x_label: String,
    pub y_label: String,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(700.0, 350.0)
    }
}

impl LineChart {
    /// Create a chart with the standard margins, ticks and labels
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin {
                top: 20.0,
                right: 30.0,
                bottom: 40.0,
                left: 50.0,
            },
            x_ticks: 10,
            y_ticks: 5,
            x_label: "Sample Number".to_string(),
            y_label: "Heart Rate (BPM)".to_string(),
        }
    }

    /// Width of the plot area inside the margins
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the plot area inside the margins
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Raw `(min, max)` of the finite samples, before nice rounding
    pub fn y_extent(data: &[f64]) -> Option<(f64, f64)> {
        data.iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// The x and y scales for `data`, or `None` when there is nothing to plot
    pub fn scales(&self, data: &[f64]) -> Option<(LinearScale, LinearScale)> {
        let (lo, hi) = Self::y_extent(data)?;
        let last = data.len().saturating_sub(1) as f64;

        let x = LinearScale::new((0.0, last), (0.0, self.inner_width()));
        let y = LinearScale::new((lo, hi), (self.inner_height(), 0.0)).nice(10);
        Some((x, y))
    }

    /// Draw the chart. Empty input yields a blank drawing.
    pub fn render(&self, data: &[f64]) -> Svg {
        let mut svg = Svg::new(self.width, self.height);
        let (x, y) = match self.scales(data) {
            Some(scales) => scales,
            None => return svg,
        };

        let inner_width = self.inner_width();
        let inner_height = self.inner_height();

        let x_axis = Axis::bottom(x)
            .ticks(self.x_ticks)
            .render()
            .attr("class", "x-axis")
            .attr("transform", format!("translate(0,{})", fmt_num(inner_height)))
            .attr("color", AXIS_COLOR);

        let y_axis = Axis::left(y)
            .ticks(self.y_ticks)
            .render()
            .attr("class", "y-axis")
            .attr("color", AXIS_COLOR);

        let y_label = Element::new("text")
            .attr("class", "y-label")
            .num("x", -inner_height / 2.0)
            .num("y", -35.0)
            .attr("transform", "rotate(-90)")
            .attr("text-anchor", "middle")
            .attr("fill", LABEL_COLOR)
            .text(self.y_label.as_str());

        let x_label = Element::new("text")
            .attr("class", "x-label")
            .num("x", inner_width / 2.0)
            .num("y", inner_height + 35.0)
            .attr("text-anchor", "middle")
            .attr("fill", LABEL_COLOR)
            .text(self.x_label.as_str());

        let points: Vec<(f64, f64)> = data
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| (x.apply(i as f64), y.apply(v)))
            .collect();

        let line = Element::new("path")
            .attr("class", "line")
            .attr("fill", "none")
            .attr("stroke", LINE_COLOR)
            .num("stroke-width", 1.5)
            .attr("d", curve::basis(&points).into_string());

        svg.push(
            Element::new("g")
                .attr(
                    "transform",
                    format!(
                        "translate({},{})",
                        fmt_num(self.margin.left),
                        fmt_num(self.margin.top)
                    ),
                )
                .child(x_axis)
                .child(y_axis)
                .child(y_label)
                .child(x_label)
                .child(line),
        );

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_extent_is_min_max() {
        assert_eq!(LineChart::y_extent(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
        assert_eq!(LineChart::y_extent(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(LineChart::y_extent(&[]), None);
    }

    #[test]
    fn test_y_extent_ignores_non_finite() {
        assert_eq!(
            LineChart::y_extent(&[f64::NAN, 2.0, f64::INFINITY, 5.0]),
            Some((2.0, 5.0))
        );
        assert_eq!(LineChart::y_extent(&[f64::NAN]), None);
    }

    #[test]
    fn test_y_extent_matches_data_for_many_sequences() {
        let sequences: Vec<Vec<f64>> = vec![
            vec![120.0, 135.5, 160.25, 110.0],
            (0..500).map(|i| 140.0 + (i as f64 * 0.1).sin() * 15.0).collect(),
            vec![-3.0, -2.0, -10.0],
        ];

        for seq in sequences {
            let (lo, hi) = LineChart::y_extent(&seq).unwrap();
            let min = seq.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = seq.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert_eq!((lo, hi), (min, max));

            // Nice rounding only ever widens the domain
            let (_, y) = LineChart::default().scales(&seq).unwrap();
            let (d0, d1) = y.domain();
            assert!(d0 <= lo && d1 >= hi);
        }
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        let svg = LineChart::default().render(&[]);
        assert!(svg.is_blank());
        assert!(svg.root().find_all("path").is_empty());
        assert_eq!(svg.root().get_attr("width"), Some("700"));
        assert_eq!(svg.root().get_attr("height"), Some("350"));
    }

    #[test]
    fn test_renders_axes_labels_and_line() {
        let data = [1.0, 1.5, 2.0];
        let svg = LineChart::default().render(&data);
        let root = svg.root();

        assert_eq!(root.find_class("line").len(), 1);
        assert_eq!(root.find_class("x-axis").len(), 1);
        assert_eq!(root.find_class("y-axis").len(), 1);
        assert_eq!(root.find_class("y-label")[0].text_content(), "Heart Rate (BPM)");
        assert_eq!(root.find_class("x-label")[0].text_content(), "Sample Number");

        let y_ticks: Vec<String> = root.find_class("y-axis")[0]
            .find_class("tick")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(y_ticks, vec!["1.0", "1.2", "1.4", "1.6", "1.8", "2.0"]);
    }

    #[test]
    fn test_line_spans_plot_area() {
        let chart = LineChart::default();
        let svg = chart.render(&[1.0, 1.5, 2.0]);
        let line = &svg.root().find_class("line")[0];
        let d = line.get_attr("d").unwrap();

        // First sample at (0, bottom), last at (right, top)
        assert!(d.starts_with("M0,290"));
        assert!(d.ends_with("L620,0"));
        assert_eq!(line.get_attr("stroke"), Some(LINE_COLOR));
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let data: Vec<f64> = (0..200).map(|i| 130.0 + (i % 17) as f64).collect();
        let chart = LineChart::new(640.0, 320.0);
        assert_eq!(chart.render(&data).to_markup(), chart.render(&data).to_markup());
    }

    #[test]
    fn test_dimensions_change_the_drawing() {
        let data = [140.0, 150.0, 145.0];
        let small = LineChart::new(400.0, 200.0).render(&data);
        let large = LineChart::new(800.0, 400.0).render(&data);
        assert_ne!(small.to_markup(), large.to_markup());
        assert_eq!(large.root().get_attr("width"), Some("800"));
    }

    #[test]
    fn test_single_sample_is_centered() {
        let chart = LineChart::default();
        let svg = chart.render(&[142.0]);
        let d = svg.root().find_class("line")[0].get_attr("d").unwrap().to_string();
        assert_eq!(d, "M310,145Z");
    }
}
