pub mod generator;
pub mod primitives;
pub mod raster;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use raster::{export_png, rasterize_png, DEFAULT_PNG_NAME};
pub use spec::ChartSpec;
pub use visual_config::VisualConfig;

use crate::chart::Chart;

/// Render a chart with the given style into a square vector spec.
pub fn render(chart: &Chart, visual_config: &VisualConfig, size: u32) -> ChartSpec {
    ChartSpecGenerator::with_config(visual_config.clone()).generate(chart, size)
}
