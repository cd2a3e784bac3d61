use crate::chart::Chart;
use crate::ephemeris::Positions;
use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartSpec, LayerMetadata};
use crate::rendering::visual_config::{MarkerStyle, VisualConfig};
use crate::zodiac::{Body, Sign, SIGN_SPAN};

/// ChartSpec generator - converts a chart into drawable shapes
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with the default style
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn config(&self) -> &VisualConfig {
        &self.visual_config
    }

    /// Generate a square ChartSpec of `size` pixels.
    ///
    /// Draw order: plot disc, sign wedges and labels, outer circle, house
    /// spokes and numbers, transit overlay, natal markers.
    pub fn generate(&self, chart: &Chart, size: u32) -> ChartSpec {
        let cfg = &self.visual_config;
        let side = size as f32;
        let mut spec = ChartSpec::new(side, side, cfg.padding);
        spec.background_color = cfg.background_color;
        let scale = side / cfg.reference_size;

        let mut shapes = vec![Shape::Circle {
            center: spec.center,
            radius: spec.radius,
            fill: Some(cfg.plot_background),
            stroke: None,
        }];

        shapes.extend(self.sign_shapes(&spec, scale));

        shapes.push(Shape::Circle {
            center: spec.center,
            radius: spec.radius * cfg.sign_ring_outer,
            fill: None,
            stroke: Some(Stroke {
                color: cfg.outer_circle_color,
                width: cfg.outer_circle_width * scale,
            }),
        });

        for house in &chart.houses {
            shapes.push(Shape::Line {
                from: spec.center,
                to: self.polar(&spec, house.cusp, cfg.house_line_outer),
                stroke: Stroke {
                    color: cfg.house_line_color,
                    width: cfg.house_line_width * scale,
                },
            });
            shapes.push(self.label(
                &spec,
                house.cusp + cfg.house_label_shift,
                cfg.house_label_ring,
                house.number.to_string(),
                cfg.house_label_size * scale,
                cfg.text_color,
            ));
        }

        // Transit markers go under the natal layer
        if let Some(transit) = &chart.transit {
            for (_, lon) in transit.iter() {
                shapes.push(self.marker(&spec, lon, &cfg.transit, scale));
            }
            for (body, lon) in transit.iter() {
                shapes.push(self.marker_label(&spec, body, lon, &cfg.transit, scale));
            }
        }

        for (body, lon) in chart.natal.iter() {
            let style = self.natal_style(body);
            shapes.push(self.marker(&spec, lon, style, scale));
            shapes.push(self.marker_label(&spec, body, lon, style, scale));
        }

        spec.shapes = shapes;
        spec.layers = layer_metadata(&chart.natal, chart.transit.as_ref());
        log::debug!("Chart spec generated: {} shapes at {}px", spec.shapes.len(), size);
        spec
    }

    fn sign_shapes(&self, spec: &ChartSpec, scale: f32) -> Vec<Shape> {
        let cfg = &self.visual_config;
        let mut shapes = Vec::with_capacity(24);
        for sign in Sign::ALL {
            let start = sign.index() as f64 * SIGN_SPAN;
            shapes.push(Shape::Wedge {
                center: spec.center,
                radius_inner: spec.radius * cfg.sign_ring_inner,
                radius_outer: spec.radius * cfg.sign_ring_outer,
                start_angle: start as f32,
                end_angle: (start + SIGN_SPAN) as f32,
                fill: cfg.sign_colors[sign.index() % 2],
            });
            shapes.push(self.label(
                spec,
                start + SIGN_SPAN / 2.0,
                cfg.sign_label_ring,
                sign.label().to_string(),
                cfg.sign_label_size * scale,
                cfg.text_color,
            ));
        }
        shapes
    }

    fn natal_style(&self, body: Body) -> &MarkerStyle {
        match body {
            Body::Sun => &self.visual_config.sun,
            Body::Moon => &self.visual_config.moon,
            _ => &self.visual_config.planet,
        }
    }

    fn marker(&self, spec: &ChartSpec, lon: f64, style: &MarkerStyle, scale: f32) -> Shape {
        Shape::Marker {
            center: self.polar(spec, lon, style.ring),
            shape: style.shape,
            radius: style.size * scale,
            fill: style.color,
        }
    }

    fn marker_label(
        &self,
        spec: &ChartSpec,
        body: Body,
        lon: f64,
        style: &MarkerStyle,
        scale: f32,
    ) -> Shape {
        self.label(
            spec,
            lon,
            style.ring + style.label_offset,
            body.abbreviation().to_string(),
            style.label_size * scale,
            style.label_color,
        )
    }

    fn label(
        &self,
        spec: &ChartSpec,
        lon: f64,
        ring: f32,
        content: String,
        size: f32,
        color: Color,
    ) -> Shape {
        Shape::Text {
            position: self.polar(spec, lon, ring),
            content,
            size,
            color,
            anchor: TextAnchor::Middle,
        }
    }

    /// Longitude and normalized radius to image coordinates.
    fn polar(&self, spec: &ChartSpec, lon: f64, ring: f32) -> Point {
        polar_to_cartesian(spec.center, spec.radius * ring, lon)
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 0° points east and longitude grows clockwise on screen.
///
/// Image y grows downwards, so a plain (cos, sin) already turns clockwise.
pub fn polar_to_cartesian(center: Point, radius: f32, lon: f64) -> Point {
    let rad = lon.to_radians();
    Point {
        x: center.x + radius * rad.cos() as f32,
        y: center.y + radius * rad.sin() as f32,
    }
}

fn layer_metadata(natal: &Positions, transit: Option<&Positions>) -> Vec<LayerMetadata> {
    let mut layers = vec![LayerMetadata {
        id: "natal".to_string(),
        body_count: natal.longitudes.len(),
    }];
    if let Some(t) = transit {
        layers.push(LayerMetadata {
            id: "transit".to_string(),
            body_count: t.longitudes.len(),
        });
    }
    layers
}
