mod common;

use chrono::{TimeZone, Utc};
use common::RecordingProvider;
use luna::ephemeris::compute_positions;
use luna::rendering::primitives::{MarkerShape, Shape};
use luna::rendering::{export_png, rasterize_png, render, ChartSpec, VisualConfig};
use luna::Chart;

fn sample_chart(with_transit: bool) -> Chart {
    let provider = RecordingProvider::sample();
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap();
    let natal = compute_positions(&provider, at).unwrap();
    let transit = if with_transit { Some(natal.clone()) } else { None };
    Chart::new(natal, transit)
}

fn markers(spec: &ChartSpec, kind: MarkerShape) -> usize {
    spec.shapes
        .iter()
        .filter(|s| matches!(s, Shape::Marker { shape, .. } if *shape == kind))
        .count()
}

#[test]
fn test_render_is_deterministic() {
    let chart = sample_chart(true);
    let config = VisualConfig::default();
    let a = render(&chart, &config, 560);
    let b = render(&chart, &config, 560);
    assert_eq!(a, b);
    assert_eq!(a.to_svg(), b.to_svg());
    assert_eq!(rasterize_png(&a).unwrap(), rasterize_png(&b).unwrap());
}

#[test]
fn test_shape_inventory() {
    let spec = render(&sample_chart(true), &VisualConfig::default(), 560);
    let wedges = spec.shapes.iter().filter(|s| matches!(s, Shape::Wedge { .. })).count();
    let lines = spec.shapes.iter().filter(|s| matches!(s, Shape::Line { .. })).count();
    assert_eq!(wedges, 12);
    assert_eq!(lines, 12);
    // Sun plus eight planets are circles, Moon a diamond, transit triangles
    assert_eq!(markers(&spec, MarkerShape::Circle), 9);
    assert_eq!(markers(&spec, MarkerShape::Diamond), 1);
    assert_eq!(markers(&spec, MarkerShape::Triangle), 10);
    assert_eq!(spec.layers.len(), 2);
}

#[test]
fn test_without_transit_has_no_overlay() {
    let spec = render(&sample_chart(false), &VisualConfig::default(), 560);
    assert_eq!(markers(&spec, MarkerShape::Triangle), 0);
    assert_eq!(spec.layers.len(), 1);
}

#[test]
fn test_sun_marker_geometry() {
    let chart = sample_chart(false);
    let config = VisualConfig::default();
    let spec = render(&chart, &config, 560);
    let sun_lon = chart.natal.get(luna::Body::Sun).unwrap();
    let expected_r = spec.radius * config.sun.ring;

    let sun = spec
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::Marker { center, fill, .. } if *fill == config.sun.color => Some(*center),
            _ => None,
        })
        .unwrap();
    let dx = sun.x - spec.center.x;
    let dy = sun.y - spec.center.y;
    assert!(((dx * dx + dy * dy).sqrt() - expected_r).abs() < 1e-3);
    // Clockwise from east: 65° lands below the centre on screen
    let angle = (dy as f64).atan2(dx as f64).to_degrees();
    assert!((angle - sun_lon).abs() < 1e-3);
}

#[test]
fn test_house_labels_sit_mid_sector() {
    let spec = render(&sample_chart(false), &VisualConfig::default(), 560);
    let label_one = spec
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::Text { content, position, .. } if content == "1" => Some(*position),
            _ => None,
        })
        .unwrap();
    let angle = ((label_one.y - spec.center.y) as f64)
        .atan2((label_one.x - spec.center.x) as f64)
        .to_degrees();
    assert!((angle - 15.0).abs() < 1e-3);
}

#[test]
fn test_export_png_writes_file() {
    let spec = render(&sample_chart(true), &VisualConfig::default(), 300);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(luna::rendering::DEFAULT_PNG_NAME);
    export_png(&spec, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_house_spokes_follow_config() {
    let chart = sample_chart(false);
    let default_spec = render(&chart, &VisualConfig::default(), 560);
    let config = VisualConfig {
        house_line_outer: 0.5,
        ..VisualConfig::default()
    };
    let spec = render(&chart, &config, 560);

    let spoke_lengths = |spec: &ChartSpec| -> Vec<f32> {
        spec.shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Line { from, to, .. } => {
                    Some(((to.x - from.x).powi(2) + (to.y - from.y).powi(2)).sqrt())
                }
                _ => None,
            })
            .collect()
    };

    for len in spoke_lengths(&default_spec) {
        assert!((len - default_spec.radius * 0.7).abs() < 1e-3);
    }
    let lengths = spoke_lengths(&spec);
    assert_eq!(lengths.len(), 12);
    for len in lengths {
        assert!((len - spec.radius * 0.5).abs() < 1e-3);
    }
}
