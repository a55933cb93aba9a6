//! Comparison chart for dining-philosophers benchmark results
//!
//! One mean line plus two shaded percentile bands per method, overlaid with
//! an analytic lower-bound curve. Rendering targets the SVG backend; the
//! binary decides whether the result is displayed or written to disk.

use crate::stats::GroupStats;
use anyhow::{anyhow, Result};
use plotters::element::Polygon;
use plotters::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

/// Chart dimensions in pixels
pub const CHART_SIZE: (u32, u32) = (800, 600);

/// Reference-curve color
const THEORETICAL_COLOR: RGBColor = RGBColor(0x53, 0xac, 0xfc);

/// Errors for chart construction
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no color assigned to method '{0}' (known methods: Ordered, SmartAndPolite)")]
    UnknownMethod(String),
}

/// Fixed method-to-color table
///
/// Closed enumeration: an unknown method is a configuration error, never a
/// silently substituted default color.
pub fn method_color(method: &str) -> Result<RGBColor, ChartError> {
    match method {
        "Ordered" => Ok(RGBColor(0x71, 0xc0, 0x40)),
        "SmartAndPolite" => Ok(RGBColor(0xfd, 0x4d, 0x1b)),
        other => Err(ChartError::UnknownMethod(other.to_string())),
    }
}

/// Idealized finishing-time lower bound, independent of observed data
///
/// For n philosophers, `10 * n / floor(n / 2)` seconds; the divisor is the
/// number of fork pairs that can eat concurrently.
pub fn theoretical_minimum() -> Vec<(u32, f32)> {
    (2..=32)
        .map(|n| (n, 10.0 * n as f32 / ((n / 2) as f32)))
        .collect()
}

/// One method's statistics ordered by increasing N
struct MethodSeries {
    method: String,
    color: RGBColor,
    points: Vec<(i32, GroupStats)>,
}

/// Split (method, N)-keyed statistics into per-method series
///
/// The map iterates methods lexicographically with N ascending, so points
/// arrive already in line-drawing order.
fn method_series(
    groups: &BTreeMap<(String, u32), GroupStats>,
) -> Result<Vec<MethodSeries>, ChartError> {
    let mut series: Vec<MethodSeries> = Vec::new();
    for ((method, n), stats) in groups {
        let starts_new = series.last().map_or(true, |s| s.method != *method);
        if starts_new {
            series.push(MethodSeries {
                method: method.clone(),
                color: method_color(method)?,
                points: Vec::new(),
            });
        }
        if let Some(current) = series.last_mut() {
            current.points.push((*n as i32, stats.clone()));
        }
    }
    Ok(series)
}

/// Closed polygon between two per-N bounds: upper edge left-to-right, lower
/// edge back
fn band<L, U>(points: &[(i32, GroupStats)], lower: L, upper: U) -> Vec<(i32, f32)>
where
    L: Fn(&GroupStats) -> f32,
    U: Fn(&GroupStats) -> f32,
{
    let mut polygon: Vec<(i32, f32)> = points.iter().map(|(n, s)| (*n, upper(s))).collect();
    polygon.extend(points.iter().rev().map(|(n, s)| (*n, lower(s))));
    polygon
}

fn draw_err<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow!("failed to render chart: {e}")
}

/// Render the comparison chart as an SVG document
pub fn render_svg(groups: &BTreeMap<(String, u32), GroupStats>) -> Result<String> {
    let series = method_series(groups)?;
    let theoretical = theoretical_minimum();
    tracing::debug!(methods = series.len(), "rendering comparison chart");

    // Axis ranges cover the data and the full reference curve; the y axis is
    // clamped to start at 0 regardless of the data range.
    let mut x_min = 2i32;
    let mut x_max = 32i32;
    let mut y_top = theoretical.iter().map(|(_, v)| *v).fold(0.0f32, f32::max);
    for s in &series {
        for (n, stats) in &s.points {
            x_min = x_min.min(*n);
            x_max = x_max.max(*n);
            y_top = y_top.max(stats.max);
        }
    }
    let y_max = y_top * 1.05;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Finishing Time of Dining Philosophers", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, 0f32..y_max)
            .map_err(draw_err)?;

        // Tick spacing: 1 unit on x, 10 units on y
        chart
            .configure_mesh()
            .x_desc("Number of Philosophers")
            .y_desc("Seconds")
            .x_labels((x_max - x_min + 1) as usize)
            .y_labels((y_max / 10.0).ceil() as usize + 1)
            .draw()
            .map_err(draw_err)?;

        for s in &series {
            let color = s.color;

            let means: Vec<(i32, f32)> = s.points.iter().map(|(n, st)| (*n, st.mean)).collect();
            chart
                .draw_series(LineSeries::new(means, color.stroke_width(2)))
                .map_err(draw_err)?
                .label(s.method.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            let mid_band = band(&s.points, |st| st.q1, |st| st.q3);
            chart
                .draw_series(std::iter::once(Polygon::new(mid_band, color.mix(0.2).filled())))
                .map_err(draw_err)?
                .label(format!("{} Mid 50%-ile", s.method))
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.mix(0.2).filled())
                });

            let full_band = band(&s.points, |st| st.min, |st| st.max);
            chart
                .draw_series(std::iter::once(Polygon::new(
                    full_band,
                    color.mix(0.07).filled(),
                )))
                .map_err(draw_err)?
                .label(format!("{} Min to Max", s.method))
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.mix(0.07).filled())
                });
        }

        chart
            .draw_series(LineSeries::new(
                theoretical.iter().map(|(n, v)| (*n as i32, *v)),
                THEORETICAL_COLOR.stroke_width(2),
            ))
            .map_err(draw_err)?
            .label("Theoretical Minimum")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], THEORETICAL_COLOR.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::SizedSample;
    use crate::stats::group_by_method_and_n;

    fn groups_for(rows: &[(&str, u32, f32)]) -> BTreeMap<(String, u32), GroupStats> {
        let samples: Vec<SizedSample> = rows
            .iter()
            .map(|(method, n, time)| SizedSample {
                method: method.to_string(),
                n: *n,
                time: *time,
            })
            .collect();
        group_by_method_and_n(&samples)
    }

    #[test]
    fn test_method_colors_are_fixed() {
        assert_eq!(method_color("Ordered").unwrap(), RGBColor(0x71, 0xc0, 0x40));
        assert_eq!(
            method_color("SmartAndPolite").unwrap(),
            RGBColor(0xfd, 0x4d, 0x1b)
        );
    }

    #[test]
    fn test_unknown_method_is_an_error() {
        let err = method_color("Unknown").unwrap_err();
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_theoretical_minimum_covers_2_to_32() {
        let curve = theoretical_minimum();
        assert_eq!(curve.len(), 31);
        assert_eq!(curve[0].0, 2);
        assert_eq!(curve[30].0, 32);
    }

    #[test]
    fn test_theoretical_minimum_values() {
        let curve = theoretical_minimum();
        let value = |n: u32| curve.iter().find(|(m, _)| *m == n).unwrap().1;
        assert_eq!(value(2), 20.0);
        assert_eq!(value(3), 30.0);
        assert_eq!(value(4), 20.0);
        assert_eq!(value(5), 25.0);
        assert_eq!(value(10), 20.0);
        assert_eq!(value(32), 20.0);
    }

    #[test]
    fn test_theoretical_minimum_is_even_n_constant() {
        for (n, v) in theoretical_minimum() {
            if n % 2 == 0 {
                assert_eq!(v, 20.0, "even n = {n}");
            }
        }
    }

    #[test]
    fn test_render_svg_contains_chart_furniture() {
        let groups = groups_for(&[("Ordered", 2, 9.8), ("Ordered", 2, 10.2), ("Ordered", 4, 19.5)]);
        let svg = render_svg(&groups).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Finishing Time of Dining Philosophers"));
        assert!(svg.contains("Seconds"));
        assert!(svg.contains("Number of Philosophers"));
    }

    #[test]
    fn test_render_svg_legend_entries() {
        let groups = groups_for(&[
            ("Ordered", 2, 9.8),
            ("Ordered", 4, 19.5),
            ("SmartAndPolite", 2, 11.0),
        ]);
        let svg = render_svg(&groups).unwrap();
        assert!(svg.contains("Ordered"));
        assert!(svg.contains("Ordered Mid 50%-ile"));
        assert!(svg.contains("Ordered Min to Max"));
        assert!(svg.contains("SmartAndPolite"));
        assert!(svg.contains("Theoretical Minimum"));
    }

    #[test]
    fn test_render_svg_unknown_method_fails() {
        let groups = groups_for(&[("Unknown", 2, 9.8)]);
        let err = render_svg(&groups).unwrap_err();
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_render_svg_empty_data_still_draws_reference_curve() {
        let svg = render_svg(&BTreeMap::new()).unwrap();
        assert!(svg.contains("Theoretical Minimum"));
    }

    #[test]
    fn test_band_walks_upper_then_lower_edge() {
        let points = vec![
            (2, GroupStats::from_times(&[1.0, 3.0])),
            (4, GroupStats::from_times(&[2.0, 6.0])),
        ];
        let polygon = band(&points, |s| s.min, |s| s.max);
        assert_eq!(polygon, vec![(2, 3.0), (4, 6.0), (4, 2.0), (2, 1.0)]);
    }
}
