use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Layer metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerMetadata {
    pub id: String,
    pub body_count: usize,
}

/// Chart specification - declarative description of the wheel to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    /// Pixel length of normalized radius 1.0
    pub radius: f32,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub layers: Vec<LayerMetadata>,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            radius: width.min(height) / 2.0 - padding,
            background_color: Color::WHITE,
            shapes: Vec::new(),
            layers: Vec::new(),
        }
    }
}
