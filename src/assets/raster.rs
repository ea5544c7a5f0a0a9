use std::path::Path;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::assets::AssetError;

/// Render an SVG document into a `size` x `size` pixmap.
///
/// The document is stretched to fill the square, whatever its aspect ratio.
pub fn rasterize(svg: &[u8], size: u32) -> Result<Pixmap, AssetError> {
    let tree = Tree::from_data(svg, &Options::default())?;
    let mut pixmap = Pixmap::new(size, size).ok_or(AssetError::InvalidSize(size))?;

    let view = tree.size();
    let transform = Transform::from_scale(
        size as f32 / view.width(),
        size as f32 / view.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Read `svg_path`, rasterize it at `size` and write the result as PNG.
pub fn svg_to_png(svg_path: &Path, png_path: &Path, size: u32) -> Result<(), AssetError> {
    let svg = std::fs::read(svg_path).map_err(|source| AssetError::io(svg_path, source))?;
    let pixmap = rasterize(&svg, size)?;

    pixmap
        .save_png(png_path)
        .map_err(|err| AssetError::PngEncode {
            path: png_path.to_path_buf(),
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::fixtures;

    #[test]
    fn test_rasterize_dimensions() {
        let pixmap = rasterize(fixtures::FOLDER_SVG.as_bytes(), 48).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (48, 48));
    }

    #[test]
    fn test_rasterize_keeps_transparency() {
        let pixmap = rasterize(fixtures::FOLDER_SVG.as_bytes(), 64).unwrap();

        // Top-left corner lies outside the folder shape.
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
        // Body of the folder is opaque.
        assert_eq!(pixmap.pixel(32, 40).unwrap().alpha(), 255);
    }

    #[test]
    fn test_rasterize_rejects_zero_size() {
        let err = rasterize(fixtures::FOLDER_SVG.as_bytes(), 0).unwrap_err();
        assert!(matches!(err, AssetError::InvalidSize(0)));
    }

    #[test]
    fn test_rasterize_rejects_invalid_svg() {
        let err = rasterize(b"this is not svg", 16).unwrap_err();
        assert!(matches!(err, AssetError::Svg(_)));
    }

    #[test]
    fn test_svg_to_png_writes_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let svg = fixtures::write_svg(dir.path());
        let png = dir.path().join("out.png");

        svg_to_png(&svg, &png, 32).unwrap();

        let decoded = image::open(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 32));
    }

    #[test]
    fn test_svg_to_png_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = svg_to_png(&dir.path().join("nope.svg"), &dir.path().join("out.png"), 16)
            .unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
