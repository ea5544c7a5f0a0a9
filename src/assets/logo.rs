use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{Rgb, RgbImage, RgbaImage};

use crate::assets::raster::svg_to_png;
use crate::assets::{AssetError, AssetPaths, GeneratedFile, MIB};

/// Square logo size recommended for the OAuth consent screen.
pub const LOGO_SIZE: u32 = 120;
/// Upload limit for each logo file.
pub const MAX_LOGO_BYTES: u64 = MIB;

pub const INITIAL_JPEG_QUALITY: u8 = 90;
pub const JPEG_QUALITY_STEP: u8 = 5;
pub const JPEG_QUALITY_FLOOR: u8 = 50;

#[derive(Debug, Clone, Copy)]
pub struct LogoSettings {
    pub size: u32,
    pub max_bytes: u64,
    pub jpeg_quality: u8,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            size: LOGO_SIZE,
            max_bytes: MAX_LOGO_BYTES,
            jpeg_quality: INITIAL_JPEG_QUALITY,
        }
    }
}

#[derive(Debug)]
pub struct LogoReport {
    pub png: GeneratedFile,
    pub jpg: GeneratedFile,
    /// Quality the JPEG was finally written at.
    pub jpeg_quality: u8,
    pub max_bytes: u64,
}

impl LogoReport {
    pub fn within_budget(&self) -> bool {
        self.png.bytes <= self.max_bytes && self.jpg.bytes <= self.max_bytes
    }
}

/// A JPEG encoding and the quality that produced it.
#[derive(Debug)]
pub struct JpegOutput {
    pub bytes: Vec<u8>,
    pub quality: u8,
}

pub fn logo_path(output_dir: &Path, size: u32, extension: &str) -> PathBuf {
    output_dir.join(format!("logo-{}x{}.{}", size, size, extension))
}

/// Write the PNG and JPEG logos.
///
/// Files over the byte budget are reported, not rejected.
pub fn generate_logo(
    paths: &AssetPaths,
    settings: LogoSettings,
) -> Result<LogoReport, AssetError> {
    paths.prepare()?;
    tracing::info!("Converting SVG: {}", paths.source.display());
    tracing::info!(
        "Generating {}x{} logo files, target: files under {:.1} MB",
        settings.size,
        settings.size,
        settings.max_bytes as f64 / MIB as f64
    );

    let png_path = logo_path(&paths.output_dir, settings.size, "png");
    tracing::info!("Creating PNG: {}", png_path.display());
    svg_to_png(&paths.source, &png_path, settings.size).inspect_err(|err| {
        tracing::warn!("  ✗ Failed to create {}: {}", png_path.display(), err)
    })?;
    optimize_png(&png_path, settings.max_bytes)?;
    let png = GeneratedFile::stat(&png_path)?;
    report_file(&png, settings.max_bytes);

    let jpg_path = logo_path(&paths.output_dir, settings.size, "jpg");
    tracing::info!("Creating JPG: {}", jpg_path.display());
    let jpeg_quality = png_to_jpg(&png_path, &jpg_path, settings.jpeg_quality, settings.max_bytes)
        .inspect_err(|err| {
            tracing::warn!("  ✗ Failed to create {}: {}", jpg_path.display(), err)
        })?;
    let jpg = GeneratedFile::stat(&jpg_path)?;
    report_file(&jpg, settings.max_bytes);

    Ok(LogoReport {
        png,
        jpg,
        jpeg_quality,
        max_bytes: settings.max_bytes,
    })
}

fn report_file(file: &GeneratedFile, max_bytes: u64) {
    tracing::info!("    ✓ Created {} ({:.3} MB)", file.file_name(), file.megabytes());
    if file.bytes > max_bytes {
        tracing::warn!(
            "    ⚠️  Warning: {} exceeds {:.1} MB limit",
            file.file_name(),
            max_bytes as f64 / MIB as f64
        );
    }
}

/// Losslessly recompress a PNG that exceeds `max_bytes`.
///
/// Returns whether the file is still over budget afterwards.
pub fn optimize_png(path: &Path, max_bytes: u64) -> Result<bool, AssetError> {
    let original = GeneratedFile::stat(path)?;
    if original.bytes <= max_bytes {
        return Ok(false);
    }

    let image = image::open(path)?;
    let mut encoded = Vec::new();
    image.write_with_encoder(PngEncoder::new_with_quality(
        &mut encoded,
        CompressionType::Best,
        FilterType::Adaptive,
    ))?;

    if (encoded.len() as u64) < original.bytes {
        std::fs::write(path, &encoded).map_err(|source| AssetError::io(path, source))?;
    }

    let optimized = GeneratedFile::stat(path)?;
    let still_oversized = optimized.bytes > max_bytes;
    if still_oversized {
        tracing::warn!(
            "    ⚠️  Warning: PNG file size ({:.2} MB) exceeds {:.1} MB limit",
            optimized.megabytes(),
            max_bytes as f64 / MIB as f64
        );
    }
    Ok(still_oversized)
}

/// Convert a PNG to JPEG within `max_bytes` if the quality floor allows it.
///
/// Returns the quality the file was written at.
pub fn png_to_jpg(
    png_path: &Path,
    jpg_path: &Path,
    quality: u8,
    max_bytes: u64,
) -> Result<u8, AssetError> {
    let image = image::open(png_path)?.to_rgba8();
    let flattened = flatten_on_white(&image);
    let output = encode_jpeg_within(&flattened, quality, max_bytes)?;

    std::fs::write(jpg_path, &output.bytes).map_err(|source| AssetError::io(jpg_path, source))?;
    Ok(output.quality)
}

/// Composite onto an opaque white background; JPEG has no alpha channel.
pub fn flatten_on_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let blend = |c: u8| {
            let (c, a) = (c as u32, a as u32);
            ((c * a + 255 * (255 - a) + 127) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, AssetError> {
    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, quality).encode_image(image)?;
    Ok(encoded)
}

/// Encode at `initial_quality`, stepping quality down until the result fits
/// `max_bytes` or the floor is reached.
pub fn encode_jpeg_within(
    image: &RgbImage,
    initial_quality: u8,
    max_bytes: u64,
) -> Result<JpegOutput, AssetError> {
    let mut quality = initial_quality;
    let mut bytes = encode_jpeg(image, quality)?;

    while bytes.len() as u64 > max_bytes && quality > JPEG_QUALITY_FLOOR {
        quality = quality
            .saturating_sub(JPEG_QUALITY_STEP)
            .max(JPEG_QUALITY_FLOOR);
        tracing::debug!("JPEG over budget, retrying at quality {}", quality);
        bytes = encode_jpeg(image, quality)?;
    }

    Ok(JpegOutput { bytes, quality })
}
