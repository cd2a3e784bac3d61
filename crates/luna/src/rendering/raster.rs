use resvg::{tiny_skia, usvg};
use std::path::Path;

use crate::error::{LunaError, Result};
use crate::rendering::spec::ChartSpec;

/// File name offered when the chart image is exported
pub const DEFAULT_PNG_NAME: &str = "luna_horoscope.png";

/// Rasterize the chart into PNG bytes.
///
/// Text uses system fonts; labels are skipped when no font is installed.
pub fn rasterize_png(spec: &ChartSpec) -> Result<Vec<u8>> {
    let svg = spec.to_svg();

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&svg, &options).map_err(|e| LunaError::Render {
        message: format!("invalid chart SVG: {}", e),
    })?;

    let width = spec.width.ceil() as u32;
    let height = spec.height.ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| LunaError::Render {
        message: format!("cannot allocate a {}x{} image", width, height),
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| LunaError::Render {
        message: format!("PNG encoding failed: {}", e),
    })
}

/// Rasterize and write the chart to `path`.
pub fn export_png(spec: &ChartSpec, path: &Path) -> Result<()> {
    let bytes = rasterize_png(spec)?;
    std::fs::write(path, &bytes)?;
    log::info!("Chart image written to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
