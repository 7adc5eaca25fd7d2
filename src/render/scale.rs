//! Linear Scales
//!
//! Continuous linear mapping from a data domain to a pixel range, with
//! "nice" domain rounding and human-friendly tick generation. Tick steps are
//! always 1, 2 or 5 times a power of ten.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// A linear scale from `domain` to `range`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale mapping `domain` onto `range`
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range.
    ///
    /// A degenerate domain (both ends equal) maps every value to the middle
    /// of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 != d0 { (value - d0) / (d1 - d0) } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    /// Extend the domain outward to round tick values.
    ///
    /// Iterates until the tick step stabilises (at most ten rounds). The
    /// domain is left untouched if it never does, or if it is degenerate.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let reverse = d1 < d0;
        let (mut start, mut stop) = if reverse { (d1, d0) } else { (d0, d1) };
        let mut prestep: Option<f64> = None;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                self.domain = if reverse { (stop, start) } else { (start, stop) };
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }

        self
    }

    /// Approximately `count` evenly spaced tick values inside the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Formatter for tick labels, precise enough for the tick step
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let step = tick_step(self.domain.0, self.domain.1, count as f64);
        move |value| format_tick(value, step)
    }
}

fn step_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// JavaScript-style rounding (half-way values go toward +inf)
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Signed tick increment: positive means a step of `inc`, negative means a
/// step of `1 / -inc`. Zero for empty or invalid spans.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(0.0);
    if !(step > 0.0) || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let factor = step_factor(step / 10f64.powf(power));
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// `(i1, i2, inc)` such that ticks are `i * inc` (or `i / -inc`) for `i`
/// in `i1..=i2`
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !(step > 0.0) || !step.is_finite() {
        return None;
    }
    let power = step.log10().floor();
    let factor = step_factor(step / 10f64.powf(power));

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * scale);
        i2 = round_half_up(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let width = 10f64.powf(power) * factor;
        i1 = round_half_up(start / width);
        i2 = round_half_up(stop / width);
        if i1 * width < start {
            i1 += 1.0;
        }
        if i2 * width > stop {
            i2 -= 1.0;
        }
        inc = width;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Tick values between `start` and `stop`, in the same direction
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = match tick_spec(lo, hi, count as f64) {
        Some(spec) => spec,
        None => return Vec::new(),
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let i = i1 + i as f64;
            if inc < 0.0 {
                i / -inc
            } else {
                i * inc
            }
        })
        .collect();

    if reverse {
        out.reverse();
    }
    out
}

/// Decimal places needed to tell ticks `step` apart
fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if !(step > 0.0) || !step.is_finite() {
        return 0;
    }
    let exponent = (step.log10() + 1e-9).floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Format a tick value with thousands grouping and a typographic minus
pub fn format_tick(value: f64, step: f64) -> String {
    let precision = precision_fixed(step);
    let formatted = format!("{:.*}", precision, value.abs());
    let negative = value < 0.0 && formatted.chars().any(|c| matches!(c, '1'..='9'));

    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + 4);
    if negative {
        out.push('\u{2212}');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_apply_maps_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(10.0), 100.0);
        assert_eq!(scale.apply(2.5), 25.0);
    }

    #[test]
    fn test_apply_inverted_range() {
        let scale = LinearScale::new((0.0, 10.0), (290.0, 0.0));
        assert_eq!(scale.apply(0.0), 290.0);
        assert_eq!(scale.apply(10.0), 0.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 200.0));
        assert_eq!(scale.apply(5.0), 100.0);
        assert_eq!(scale.apply(42.0), 100.0);
    }

    #[test]
    fn test_nice_rounds_outward() {
        let scale = LinearScale::new((0.5, 9.7), (0.0, 1.0)).nice(10);
        assert_eq!(scale.domain(), (0.0, 10.0));

        let scale = LinearScale::new((112.3, 158.9), (0.0, 1.0)).nice(10);
        assert_eq!(scale.domain(), (110.0, 160.0));
    }

    #[test]
    fn test_nice_keeps_round_domain() {
        let scale = LinearScale::new((1.0, 2.0), (0.0, 1.0)).nice(10);
        assert_eq!(scale.domain(), (1.0, 2.0));
    }

    #[test]
    fn test_nice_leaves_degenerate_domain() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 1.0)).nice(10);
        assert_eq!(scale.domain(), (3.0, 3.0));
    }

    #[test]
    fn test_ticks_integer_steps() {
        assert!(approx_eq(
            &ticks(0.0, 10.0, 10),
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        ));
        assert!(approx_eq(
            &ticks(130.0, 152.0, 5),
            &[130.0, 135.0, 140.0, 145.0, 150.0]
        ));
    }

    #[test]
    fn test_ticks_fractional_steps() {
        assert!(approx_eq(
            &ticks(1.0, 2.0, 5),
            &[1.0, 1.2, 1.4, 1.6, 1.8, 2.0]
        ));
    }

    #[test]
    fn test_ticks_edge_cases() {
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert_eq!(ticks(4.0, 4.0, 5), vec![4.0]);
        assert!(approx_eq(&ticks(10.0, 0.0, 2), &[10.0, 5.0, 0.0]));
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(150.0, 5.0), "150");
        assert_eq!(format_tick(1.2, 0.2), "1.2");
        assert_eq!(format_tick(2.0, 0.2), "2.0");
        assert_eq!(format_tick(1500.0, 500.0), "1,500");
        assert_eq!(format_tick(-5.0, 5.0), "\u{2212}5");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }

    #[test]
    fn test_tick_format_uses_domain_step() {
        let scale = LinearScale::new((1.0, 2.0), (0.0, 1.0));
        let format = scale.tick_format(5);
        assert_eq!(format(1.4), "1.4");
    }
}
