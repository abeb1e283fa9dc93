//! Layout configuration and axis scaling for the scatter view.

use crate::data::PointSet;

/// Magnitude above which coordinates are scaled down before plotting, so the
/// chart's span arithmetic stays finite.
const LARGE_MAGNITUDE: f64 = 1e300;

/// 2^-32; a power of two keeps scaled coordinates exact.
const LARGE_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// Smallest data span treated as non-degenerate.
const MIN_SPAN: f64 = 1e-10;

/// Configuration for the scatter plot layout.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding added on each side of both axes, as a fraction of the data span.
    pub axis_padding_factor: f64,
    /// Whether to draw the class legend.
    pub show_legend: bool,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            axis_padding_factor: 0.05,
            show_legend: true,
        }
    }
}

/// Extent of one chart axis.
///
/// `bounds` are in plotted units: data coordinates multiplied by `scale`.
/// They are always finite with `bounds[0] < bounds[1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Axis bounds in plotted units.
    pub bounds: [f64; 2],
    /// Factor applied to data coordinates before plotting.
    pub scale: f64,
}

impl AxisRange {
    /// Range covering `min..=max` with `padding_factor` of the span added on
    /// each side.
    ///
    /// An empty extent (`min > max`) gives `[0, 1]`. A zero-width extent is
    /// widened by at least one unit, and relative to the value for large
    /// magnitudes.
    pub fn from_extent(min: f64, max: f64, padding_factor: f64) -> Self {
        if min > max {
            return Self {
                bounds: [0.0, 1.0],
                scale: 1.0,
            };
        }

        let scale = if min.abs().max(max.abs()) > LARGE_MAGNITUDE {
            LARGE_SCALE
        } else {
            1.0
        };
        let (min, max) = (min * scale, max * scale);

        let span = max - min;
        let padding = if span < MIN_SPAN {
            (min.abs().max(max.abs()) * 1e-6).max(1.0)
        } else {
            span * padding_factor.max(0.0)
        };

        Self {
            bounds: [min - padding, max + padding],
            scale,
        }
    }

    /// Convert a data coordinate to plotted units.
    pub fn to_plot(&self, value: f64) -> f64 {
        value * self.scale
    }

    /// Bounds in data units, for axis labels.
    pub fn label_bounds(&self) -> [f64; 2] {
        [
            (self.bounds[0] / self.scale).clamp(f64::MIN, f64::MAX),
            (self.bounds[1] / self.scale).clamp(f64::MIN, f64::MAX),
        ]
    }
}

/// Compute the `(x, y)` axis ranges covering every finite point of `sets`.
pub fn axis_ranges<'a>(
    sets: impl IntoIterator<Item = &'a PointSet>,
    padding_factor: f64,
) -> (AxisRange, AxisRange) {
    let mut x_range = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y_range = (f64::INFINITY, f64::NEG_INFINITY);

    for set in sets {
        for (x, y) in set.iter() {
            if x.is_finite() {
                x_range = (x_range.0.min(x), x_range.1.max(x));
            }
            if y.is_finite() {
                y_range = (y_range.0.min(y), y_range.1.max(y));
            }
        }
    }

    (
        AxisRange::from_extent(x_range.0, x_range.1, padding_factor),
        AxisRange::from_extent(y_range.0, y_range.1, padding_factor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_usable(range: &AxisRange) {
        let [lo, hi] = range.bounds;
        assert!(lo.is_finite() && hi.is_finite(), "{range:?}");
        assert!(lo < hi, "{range:?}");
        assert!((hi - lo).is_finite(), "{range:?}");
    }

    #[test]
    fn empty_sets_fall_back_to_unit_square() {
        let (x, y) = axis_ranges([&PointSet::new(), &PointSet::new()], 0.1);
        assert_eq!(x.bounds, [0.0, 1.0]);
        assert_eq!(y.bounds, [0.0, 1.0]);
        assert_eq!(x.scale, 1.0);
    }

    #[test]
    fn bounds_span_both_sets_with_padding() {
        let a: PointSet = vec![(0.0, -5.0), (4.0, 0.0)].into_iter().collect();
        let b: PointSet = vec![(10.0, 5.0)].into_iter().collect();

        let (x, y) = axis_ranges([&a, &b], 0.1);
        assert_eq!(x.bounds, [-1.0, 11.0]);
        assert_eq!(y.bounds, [-6.0, 6.0]);
        assert_eq!(x.label_bounds(), [-1.0, 11.0]);
    }

    #[test]
    fn single_point_is_widened_and_non_finite_ignored() {
        let a: PointSet = vec![(2.0, 3.0), (f64::NAN, f64::INFINITY)]
            .into_iter()
            .collect();

        let (x, y) = axis_ranges([&a], 0.1);
        assert_eq!(x.bounds, [1.0, 3.0]);
        assert_eq!(y.bounds, [2.0, 4.0]);
    }

    #[test]
    fn single_large_point_is_widened_relative_to_its_magnitude() {
        let a: PointSet = vec![(1e20, -1e20)].into_iter().collect();

        let (x, y) = axis_ranges([&a], 0.05);
        assert_usable(&x);
        assert_usable(&y);
        assert!(x.bounds[0] < x.to_plot(1e20) && x.to_plot(1e20) < x.bounds[1]);
        assert!(y.bounds[0] < y.to_plot(-1e20) && y.to_plot(-1e20) < y.bounds[1]);
    }

    #[test]
    fn overflowing_span_is_scaled_into_range() {
        let a: PointSet = vec![(-1e308, 1e308), (1e308, -1e308), (f64::MAX, f64::MIN)]
            .into_iter()
            .collect();

        let (x, y) = axis_ranges([&a], 0.05);
        assert_usable(&x);
        assert_usable(&y);
        assert!(x.scale < 1.0);

        for v in [-1e308, 1e308, f64::MAX] {
            let p = x.to_plot(v);
            assert!(x.bounds[0] <= p && p <= x.bounds[1], "{v} -> {p}");
        }

        let [lo, hi] = x.label_bounds();
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo <= -1e308 && hi >= f64::MAX * 0.99);
    }
}
