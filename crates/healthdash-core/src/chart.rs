//! Time-series line geometry.
//!
//! Maps ordered `(date, value)` samples onto a padded canvas. Index drives
//! the x axis, value drives the y axis (larger values sit higher). The
//! output is geometry only; nothing flows back to the caller's data.

use serde::{Deserialize, Serialize};

use crate::records::CholesterolSample;

/// Canvas size and uniform padding, in user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 160.0,
            padding: 16.0,
        }
    }
}

/// A sample placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub date: String,
    pub value: f64,
}

/// Plotted points plus an SVG path joining them in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub points: Vec<PlotPoint>,
    pub path: String,
}

/// x of sample `index` out of `count`, spread over `[padding, width - padding]`.
/// A lone sample sits at the left padding.
pub fn x_at(index: usize, count: usize, frame: &ChartFrame) -> f64 {
    if count <= 1 {
        return frame.padding;
    }
    let inner = frame.width - 2.0 * frame.padding;
    frame.padding + inner * index as f64 / (count - 1) as f64
}

/// y of `value` with `[min, max]` mapped to `[height - padding, padding]`.
///
/// The range denominator is at least 1. A flat series (`max == min`) is
/// drawn at mid-height. Ranges wider than `f64::MAX` are scaled by half
/// so the result stays finite.
pub fn y_at(value: f64, min: f64, max: f64, frame: &ChartFrame) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return frame.height / 2.0;
    }
    let ratio = if span.is_finite() {
        (value - min) / span.max(1.0)
    } else {
        (0.5 * value - 0.5 * min) / (0.5 * max - 0.5 * min)
    };
    let inner = frame.height - 2.0 * frame.padding;
    frame.height - frame.padding - inner * ratio
}

/// Smallest and largest value, or `None` when empty.
pub fn value_bounds(samples: &[CholesterolSample]) -> Option<(f64, f64)> {
    samples.iter().map(|s| s.value).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Plot `samples` in order. Samples with non-finite values are skipped;
/// returns `None` when nothing is left to draw.
pub fn plot(samples: &[CholesterolSample], frame: &ChartFrame) -> Option<Plot> {
    let finite: Vec<CholesterolSample> = samples
        .iter()
        .filter(|s| s.value.is_finite())
        .cloned()
        .collect();
    let (min, max) = value_bounds(&finite)?;

    let points: Vec<PlotPoint> = finite
        .iter()
        .enumerate()
        .map(|(i, s)| PlotPoint {
            x: x_at(i, finite.len(), frame),
            y: y_at(s.value, min, max, frame),
            date: s.date.clone(),
            value: s.value,
        })
        .collect();

    let path = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{} {}", coord(p.x), coord(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ");

    Some(Plot { points, path })
}

impl Plot {
    /// Standalone SVG document: the line plus a marker per point.
    pub fn to_svg(&self, frame: &ChartFrame, stroke: &str) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = coord(frame.width),
            h = coord(frame.height),
        );
        svg.push('\n');
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"2\"/>\n",
            self.path
        ));
        for p in &self.points {
            svg.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"3\" fill=\"{stroke}\"><title>{}: {}</title></circle>\n",
                coord(p.x),
                coord(p.y),
                escape(&p.date),
                p.value
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// At most two decimals, without trailing zeros.
fn coord(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn samples(values: &[f64]) -> Vec<CholesterolSample> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| CholesterolSample {
                date: (i + 1).to_string(),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn empty_input_has_nothing_to_draw() {
        assert!(plot(&[], &ChartFrame::default()).is_none());
        assert!(value_bounds(&[]).is_none());
    }

    #[test]
    fn single_sample_sits_at_left_padding() {
        let frame = ChartFrame::default();
        let plot = plot(&samples(&[190.0]), &frame).unwrap();
        assert_eq!(plot.points.len(), 1);
        assert_eq!(plot.points[0].x, frame.padding);
        assert_eq!(plot.points[0].y, frame.height / 2.0);
        assert_eq!(plot.path, "M16 80");
    }

    #[test]
    fn constant_series_is_flat_at_mid_height() {
        let frame = ChartFrame::default();
        let plot = plot(&samples(&[5.0, 5.0, 5.0]), &frame).unwrap();
        assert_eq!(plot.points.len(), 3);
        assert!(plot.points.iter().all(|p| p.y == 80.0));
        assert!(plot.points.iter().all(|p| p.y.is_finite()));
        assert_eq!(plot.path, "M16 80 L160 80 L304 80");
    }

    #[test]
    fn extremes_touch_padding_edges() {
        let frame = ChartFrame::default();
        let plot = plot(&samples(&[100.0, 300.0, 200.0]), &frame).unwrap();
        let ys: Vec<_> = plot.points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![144.0, 16.0, 80.0]);
        let xs: Vec<_> = plot.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![16.0, 160.0, 304.0]);
    }

    #[test]
    fn sub_unit_range_uses_minimum_denominator() {
        let frame = ChartFrame::default();
        // span 0.5 is divided by 1, so the top sample sits halfway up.
        assert_eq!(y_at(1.5, 1.0, 1.5, &frame), 144.0 - 128.0 * 0.5);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let frame = ChartFrame::default();
        let plot = plot(&samples(&[f64::NAN, 10.0]), &frame).unwrap();
        assert_eq!(plot.points.len(), 1);
        assert!(super::plot(&samples(&[f64::INFINITY]), &frame).is_none());
    }

    #[test]
    fn svg_contains_path_and_markers() {
        let frame = ChartFrame::default();
        let plot = plot(&samples(&[1.0, 4.0]), &frame).unwrap();
        let svg = plot.to_svg(&frame, "#e11d48");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(&format!(r#"d="{}""#, plot.path)));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn range_wider_than_f64_max_stays_finite() {
        let frame = ChartFrame::default();
        let plot = plot(&samples(&[-1.7e308, 1.7e308]), &frame).unwrap();
        let ys: Vec<_> = plot.points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![144.0, 16.0]);
        assert_eq!(plot.path, "M16 144 L304 16");

        let plot = super::plot(&samples(&[-f64::MAX, 0.0, f64::MAX]), &frame).unwrap();
        assert_eq!(plot.points[1].y, 80.0);
        assert!(!plot.path.contains("NaN"));
    }

    #[test]
    fn coord_trims_trailing_zeros() {
        assert_eq!(coord(16.0), "16");
        assert_eq!(coord(12.5), "12.5");
        assert_eq!(coord(1.0 / 3.0), "0.33");
        assert_eq!(coord(-0.001), "0");
    }

    proptest! {
        #[test]
        fn points_stay_inside_padded_canvas(values in proptest::collection::vec(-1e6f64..1e6, 1..40)) {
            let frame = ChartFrame::default();
            let plot = plot(&samples(&values), &frame).unwrap();
            prop_assert_eq!(plot.points.len(), values.len());
            for p in &plot.points {
                prop_assert!(p.x >= frame.padding - 1e-9 && p.x <= frame.width - frame.padding + 1e-9);
                prop_assert!(p.y >= frame.padding - 1e-9 && p.y <= frame.height - frame.padding + 1e-9);
            }
        }

        #[test]
        fn extreme_finite_values_plot_inside_canvas(values in proptest::collection::vec(
            prop_oneof![-1e6f64..1e6, -f64::MAX..-1e300, 1e300f64..f64::MAX],
            1..20,
        )) {
            let frame = ChartFrame::default();
            let plot = plot(&samples(&values), &frame).unwrap();
            for p in &plot.points {
                prop_assert!(p.y.is_finite());
                prop_assert!(p.y >= frame.padding - 1e-9 && p.y <= frame.height - frame.padding + 1e-9);
            }
            prop_assert!(!plot.path.contains("NaN"));
        }

        #[test]
        fn x_increases_with_index(count in 2usize..100) {
            let frame = ChartFrame::default();
            for i in 1..count {
                prop_assert!(x_at(i, count, &frame) > x_at(i - 1, count, &frame));
            }
        }
    }
}
