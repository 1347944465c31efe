//! Linear scales and tick generation for the SVG charts.

/// Linear mapping from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    /// Map a domain value into the range. A degenerate domain maps every
    /// value onto the range midpoint.
    pub fn map(&self, value: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (value - self.d0) / span * (self.r1 - self.r0)
    }
}

/// Smallest and largest value of the iterator, or `(0, 0)` when empty.
pub fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// Extend an extent so it always includes zero; keeps bar and scatter
/// baselines honest.
pub fn extent_with_zero(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = extent(values);
    (min.min(0.0), max.max(0.0))
}

/// Round tick values covering `[min, max]` with a 1/2/5-based step.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !(max > min) {
        return vec![min];
    }
    let raw_step = (max - min) / count as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    } * magnitude;

    let mut ticks = Vec::new();
    let mut value = (min / step).floor() * step;
    while value <= max + step / 2.0 {
        ticks.push(value);
        value += step;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_endpoints_onto_range_endpoints() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 500.0));
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(100.0), 500.0);
        assert_eq!(scale.map(50.0), 250.0);
    }

    #[test]
    fn supports_inverted_ranges_for_svg_y_axes() {
        let scale = LinearScale::new((0.0, 10.0), (300.0, 0.0));
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(10.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_the_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 50.0);
    }

    #[test]
    fn extent_handles_empty_and_negative_inputs() {
        assert_eq!(extent(std::iter::empty()), (0.0, 0.0));
        assert_eq!(extent([-3.0, 7.0, 1.0].into_iter()), (-3.0, 7.0));
        assert_eq!(extent_with_zero([2.0, 7.0].into_iter()), (0.0, 7.0));
        assert_eq!(extent_with_zero([-5.0, -1.0].into_iter()), (-5.0, 0.0));
    }

    #[test]
    fn ticks_use_round_steps_and_cover_the_domain() {
        assert_eq!(
            nice_ticks(0.0, 100.0, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
        let ticks = nice_ticks(-98_447.0, 0.0, 4);
        assert!(*ticks.first().unwrap() <= -98_447.0);
        assert!(*ticks.last().unwrap() >= 0.0 - 1e-9);
    }

    #[test]
    fn ticks_collapse_for_degenerate_domains() {
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    }
}
