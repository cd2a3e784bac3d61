use crate::rendering::primitives::{Color, MarkerShape};

fn hex(code: &str) -> Color {
    Color::from_hex(code).unwrap_or(Color::BLACK)
}

/// How one class of body is drawn on the wheel
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    /// Normalized wheel radius of the marker
    pub ring: f32,
    pub shape: MarkerShape,
    /// Marker half-extent in pixels at the reference image size
    pub size: f32,
    pub color: Color,
    /// Label sits this far outside the marker, in normalized radius
    pub label_offset: f32,
    pub label_size: f32,
    pub label_color: Color,
}

/// Visual styling of the chart wheel.
///
/// Radii are fractions of the wheel radius; sizes are pixels at
/// `reference_size` and scale with the output image.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub reference_size: f32,
    pub padding: f32,
    pub background_color: Color,
    pub plot_background: Color,

    pub sign_ring_inner: f32,
    pub sign_ring_outer: f32,
    pub sign_label_ring: f32,
    pub sign_colors: [Color; 2],
    pub sign_label_size: f32,
    pub text_color: Color,

    pub outer_circle_color: Color,
    pub outer_circle_width: f32,

    pub house_line_color: Color,
    pub house_line_width: f32,
    /// Spokes run from the centre out to this radius
    pub house_line_outer: f32,
    pub house_label_ring: f32,
    pub house_label_size: f32,
    /// Degrees past the cusp where the house number is centred
    pub house_label_shift: f64,

    pub sun: MarkerStyle,
    pub moon: MarkerStyle,
    pub planet: MarkerStyle,
    pub transit: MarkerStyle,
}

impl Default for VisualConfig {
    fn default() -> Self {
        let text_color = hex("#111827");
        Self {
            reference_size: 560.0,
            padding: 8.0,
            background_color: Color::WHITE,
            plot_background: hex("#f5f3ff"),

            sign_ring_inner: 0.7,
            sign_ring_outer: 0.9,
            sign_label_ring: 0.8,
            sign_colors: [hex("#ede9fe"), hex("#e0e7ff")],
            sign_label_size: 13.9,
            text_color,

            outer_circle_color: hex("#7c3aed"),
            outer_circle_width: 1.7,

            house_line_color: hex("#9ca3af"),
            house_line_width: 1.0,
            house_line_outer: 0.7,
            house_label_ring: 0.15,
            house_label_size: 13.9,
            house_label_shift: 15.0,

            sun: MarkerStyle {
                ring: 0.72,
                shape: MarkerShape::Circle,
                size: 6.6,
                color: hex("#f97316"),
                label_offset: 0.08,
                label_size: 12.5,
                label_color: text_color,
            },
            moon: MarkerStyle {
                ring: 0.68,
                shape: MarkerShape::Diamond,
                size: 6.2,
                color: hex("#4b5563"),
                label_offset: 0.08,
                label_size: 12.5,
                label_color: text_color,
            },
            planet: MarkerStyle {
                ring: 0.64,
                shape: MarkerShape::Circle,
                size: 5.6,
                color: text_color,
                label_offset: 0.08,
                label_size: 12.5,
                label_color: text_color,
            },
            transit: MarkerStyle {
                ring: 0.82,
                shape: MarkerShape::Triangle,
                size: 5.2,
                color: hex("#60a5fa").with_alpha(0.8),
                label_offset: 0.06,
                label_size: 11.1,
                label_color: hex("#1d4ed8").with_alpha(0.9),
            },
        }
    }
}
