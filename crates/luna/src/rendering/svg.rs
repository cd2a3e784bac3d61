// SVG serialization of a ChartSpec

use crate::rendering::primitives::{Color, MarkerShape, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;

const FONT_FAMILY: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";

impl ChartSpec {
    /// Serialize to a standalone SVG document. Output is byte-stable for equal specs.
    pub fn to_svg(&self) -> String {
        let mut body = String::new();
        for shape in &self.shapes {
            body.push_str(&shape_to_svg(shape));
            body.push('\n');
        }

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect x="0" y="0" width="{w}" height="{h}" {bg}/>
{body}</svg>
"##,
            w = self.width,
            h = self.height,
            bg = fill_attrs(Some(self.background_color)),
            body = body,
        )
    }
}

fn shape_to_svg(shape: &Shape) -> String {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {} {}/>"#,
            center.x,
            center.y,
            radius,
            fill_attrs(*fill),
            stroke_attrs(stroke.as_ref()),
        ),
        Shape::Wedge {
            center,
            radius_inner,
            radius_outer,
            start_angle,
            end_angle,
            fill,
        } => format!(
            r#"<path d="{}" {}/>"#,
            wedge_path(*center, *radius_inner, *radius_outer, *start_angle, *end_angle),
            fill_attrs(Some(*fill)),
        ),
        Shape::Line { from, to, stroke } => format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attrs(Some(stroke)),
        ),
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
        } => format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.2}" text-anchor="{}" dominant-baseline="central" {}>{}</text>"#,
            position.x,
            position.y,
            FONT_FAMILY,
            size,
            anchor_name(*anchor),
            fill_attrs(Some(*color)),
            escape_xml(content),
        ),
        Shape::Marker {
            center,
            shape,
            radius,
            fill,
        } => match shape {
            MarkerShape::Circle => format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                center.x,
                center.y,
                radius,
                fill_attrs(Some(*fill)),
            ),
            MarkerShape::Diamond => polygon(
                &[
                    (center.x, center.y - radius),
                    (center.x + radius, center.y),
                    (center.x, center.y + radius),
                    (center.x - radius, center.y),
                ],
                *fill,
            ),
            MarkerShape::Triangle => polygon(
                &[
                    (center.x, center.y - radius),
                    (center.x + radius * 0.866, center.y + radius * 0.5),
                    (center.x - radius * 0.866, center.y + radius * 0.5),
                ],
                *fill,
            ),
        },
    }
}

/// Outer arc clockwise, inner arc back counter-clockwise.
fn wedge_path(center: Point, r_in: f32, r_out: f32, start: f32, end: f32) -> String {
    let at = |r: f32, deg: f32| {
        let rad = deg.to_radians();
        (center.x + r * rad.cos(), center.y + r * rad.sin())
    };
    let large_arc = if (end - start).abs() > 180.0 { 1 } else { 0 };
    let (ox0, oy0) = at(r_out, start);
    let (ox1, oy1) = at(r_out, end);
    let (ix1, iy1) = at(r_in, end);
    let (ix0, iy0) = at(r_in, start);
    format!(
        "M{:.2},{:.2} A{:.2},{:.2} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{:.2},{:.2} 0 {} 0 {:.2},{:.2} Z",
        ox0, oy0, r_out, r_out, large_arc, ox1, oy1, ix1, iy1, r_in, r_in, large_arc, ix0, iy0
    )
}

fn polygon(points: &[(f32, f32)], fill: Color) -> String {
    let pts: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect();
    format!(r#"<polygon points="{}" {}/>"#, pts.join(" "), fill_attrs(Some(fill)))
}

fn fill_attrs(fill: Option<Color>) -> String {
    match fill {
        Some(c) if c.a == 255 => format!(r#"fill="{}""#, c.to_css_rgb()),
        Some(c) => format!(r#"fill="{}" fill-opacity="{:.3}""#, c.to_css_rgb(), c.opacity()),
        None => r#"fill="none""#.to_string(),
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    match stroke {
        Some(s) if s.color.a == 255 => {
            format!(r#"stroke="{}" stroke-width="{:.2}""#, s.color.to_css_rgb(), s.width)
        }
        Some(s) => format!(
            r#"stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.2}""#,
            s.color.to_css_rgb(),
            s.color.opacity(),
            s.width
        ),
        None => String::new(),
    }
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_is_valid_document() {
        let svg = ChartSpec::new(200.0, 200.0, 8.0).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"fill="rgb(255, 255, 255)""#));
    }

    #[test]
    fn test_translucent_fill_uses_opacity_attribute() {
        let attrs = fill_attrs(Some(Color::BLACK.with_alpha(0.8)));
        assert_eq!(attrs, r#"fill="rgb(0, 0, 0)" fill-opacity="0.800""#);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_wedge_path_uses_small_arcs() {
        let path = wedge_path(Point { x: 0.0, y: 0.0 }, 70.0, 90.0, 0.0, 30.0);
        assert!(path.starts_with("M90.00,0.00 A90.00,90.00 0 0 1"));
        assert!(path.ends_with("Z"));
    }
}
