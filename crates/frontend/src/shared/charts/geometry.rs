use std::f64::consts::{FRAC_PI_2, TAU};

/// Drawing box of a chart in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.padding + self.inner_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Negative and non-finite values are drawn as zero.
fn plottable(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Largest plottable value, or `None` when nothing is above zero.
pub fn max_value(values: &[f64]) -> Option<f64> {
    let max = values.iter().copied().map(plottable).fold(0.0, f64::max);
    (max > 0.0).then_some(max)
}

fn scaled_height(value: f64, max: Option<f64>, area: &PlotArea) -> f64 {
    match max {
        Some(max) => plottable(value) / max * area.inner_height(),
        None => 0.0,
    }
}

/// Vertices of a line chart: x evenly spaced in input order, y from 0 to max.
pub fn line_points(values: &[f64], area: &PlotArea) -> Vec<(f64, f64)> {
    let max = max_value(values);
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n == 1 {
                area.padding + area.inner_width() / 2.0
            } else {
                area.padding + i as f64 * area.inner_width() / (n - 1) as f64
            };
            (x, area.bottom() - scaled_height(*v, max, area))
        })
        .collect()
}

/// `points` attribute of an SVG `<polyline>`.
pub fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Show every n-th axis label so that at most `max_labels` are drawn.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Share of each slot taken by the bar itself.
const BAR_FILL: f64 = 0.7;

/// One bar per value, in input order, bottom-aligned.
pub fn bar_rects(values: &[f64], area: &PlotArea) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = max_value(values);
    let slot = area.inner_width() / values.len() as f64;
    let width = slot * BAR_FILL;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let height = scaled_height(*v, max, area);
            BarRect {
                x: area.padding + i as f64 * slot + (slot - width) / 2.0,
                y: area.bottom() - height,
                width,
                height,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Index of the source value.
    pub index: usize,
    /// SVG path `d` attribute.
    pub path: String,
    /// Fraction of the whole, 0..=1.
    pub fraction: f64,
}

/// Pie slices clockwise from 12 o'clock. Zero and negative values get no slice.
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().copied().map(plottable).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    let mut slices = Vec::new();
    for (index, value) in values.iter().enumerate() {
        let value = plottable(*value);
        if value == 0.0 {
            continue;
        }
        let fraction = value / total;
        let sweep = fraction * TAU;
        let path = if fraction >= 1.0 - 1e-9 {
            full_circle_path(cx, cy, radius)
        } else {
            sector_path(cx, cy, radius, start, start + sweep)
        };
        slices.push(PieSlice {
            index,
            path,
            fraction,
        });
        start += sweep;
    }
    slices
}

fn point_on_circle(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn sector_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let (x0, y0) = point_on_circle(cx, cy, radius, start);
    let (x1, y1) = point_on_circle(cx, cy, radius, end);
    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x0, y0, radius, radius, large_arc, x1, y1
    )
}

// A single arc cannot close on itself, so draw two half circles.
fn full_circle_path(cx: f64, cy: f64, radius: f64) -> String {
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 1 1 {:.2} {:.2} A {:.2} {:.2} 0 1 1 {:.2} {:.2} Z",
        cx,
        cy - radius,
        radius,
        radius,
        cx,
        cy + radius,
        radius,
        radius,
        cx,
        cy - radius
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea::new(120.0, 70.0, 10.0);

    #[test]
    fn test_line_points_scale_to_plot_area() {
        let points = line_points(&[0.0, 50.0, 100.0], &AREA);
        assert_eq!(points, vec![(10.0, 60.0), (60.0, 35.0), (110.0, 10.0)]);
        assert_eq!(polyline_attr(&points), "10.0,60.0 60.0,35.0 110.0,10.0");
    }

    #[test]
    fn test_line_points_single_and_flat() {
        assert_eq!(line_points(&[42.0], &AREA), vec![(60.0, 10.0)]);
        let flat = line_points(&[0.0, 0.0], &AREA);
        assert!(flat.iter().all(|(_, y)| *y == AREA.bottom()));
        assert!(line_points(&[], &AREA).is_empty());
    }

    #[test]
    fn test_negative_values_draw_as_zero() {
        let points = line_points(&[-5.0, 10.0], &AREA);
        assert_eq!(points[0].1, AREA.bottom());
        assert_eq!(points[1].1, AREA.padding);
    }

    #[test]
    fn test_bar_rects_keep_input_order() {
        let bars = bar_rects(&[100.0, 25.0], &AREA);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].height, 50.0);
        assert_eq!(bars[1].height, 12.5);
        assert!(bars[0].x < bars[1].x);
        assert_eq!(bars[0].y + bars[0].height, AREA.bottom());
        assert!((bars[0].center_x() - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_fractions() {
        let slices = pie_slices(&[300.0, 0.0, 100.0], 50.0, 50.0, 40.0);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].index, 0);
        assert_eq!(slices[0].fraction, 0.75);
        assert_eq!(slices[1].index, 2);
        assert_eq!(slices[1].fraction, 0.25);
        // First slice starts at 12 o'clock and is the large arc.
        assert!(slices[0].path.starts_with("M 50.00 50.00 L 50.00 10.00 A 40.00 40.00 0 1 1"));
    }

    #[test]
    fn test_pie_single_slice_is_full_circle() {
        let slices = pie_slices(&[10.0], 50.0, 50.0, 40.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
        assert!(pie_slices(&[0.0, -1.0], 50.0, 50.0, 40.0).is_empty());
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(5, 8), 1);
        assert_eq!(label_stride(36, 8), 5);
        assert_eq!(label_stride(0, 8), 1);
    }
}
