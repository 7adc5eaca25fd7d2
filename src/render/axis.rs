//! Chart Axes
//!
//! Draws a bottom or left axis for a [`LinearScale`]: a domain line with
//! outer ticks, one tick mark per tick value, and a formatted label.

use super::scale::LinearScale;
use super::svg::{fmt_num, Element};

/// Which side of the plot the axis sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// Axis generator
#[derive(Debug, Clone)]
pub struct Axis {
    scale: LinearScale,
    orient: Orient,
    tick_count: usize,
    tick_size_inner: f64,
    tick_size_outer: f64,
    tick_padding: f64,
}

impl Axis {
    pub fn bottom(scale: LinearScale) -> Self {
        Self::new(scale, Orient::Bottom)
    }

    pub fn left(scale: LinearScale) -> Self {
        Self::new(scale, Orient::Left)
    }

    fn new(scale: LinearScale, orient: Orient) -> Self {
        Self {
            scale,
            orient,
            tick_count: 10,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
        }
    }

    /// Requested number of ticks (the generator may return a few more or fewer)
    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Build the `<g>` element for this axis
    pub fn render(&self) -> Element {
        let values = self.scale.ticks(self.tick_count);
        let format = self.scale.tick_format(self.tick_count);
        let (r0, r1) = self.scale.range();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let outer = self.tick_size_outer;

        let (anchor, domain_path) = match self.orient {
            Orient::Bottom => (
                "middle",
                format!("M{},{}V0H{}V{}", fmt_num(r0), fmt_num(outer), fmt_num(r1), fmt_num(outer)),
            ),
            Orient::Left => (
                "end",
                format!("M{},{}H0V{}H{}", fmt_num(-outer), fmt_num(r0), fmt_num(r1), fmt_num(-outer)),
            ),
        };

        let mut group = Element::new("g")
            .attr("fill", "none")
            .attr("font-size", "10")
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", domain_path),
            );

        for value in values {
            let position = fmt_num(self.scale.apply(value));
            let tick = match self.orient {
                Orient::Bottom => Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", "1")
                    .attr("transform", format!("translate({},0)", position))
                    .child(
                        Element::new("line")
                            .attr("stroke", "currentColor")
                            .num("y2", self.tick_size_inner),
                    )
                    .child(
                        Element::new("text")
                            .attr("fill", "currentColor")
                            .num("y", spacing)
                            .attr("dy", "0.71em")
                            .text(format(value)),
                    ),
                Orient::Left => Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", "1")
                    .attr("transform", format!("translate(0,{})", position))
                    .child(
                        Element::new("line")
                            .attr("stroke", "currentColor")
                            .num("x2", -self.tick_size_inner),
                    )
                    .child(
                        Element::new("text")
                            .attr("fill", "currentColor")
                            .num("x", -spacing)
                            .attr("dy", "0.32em")
                            .text(format(value)),
                    ),
            };
            group.push(tick);
        }

        group
    }
}
