use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};

use crate::assets::raster::svg_to_png;
use crate::assets::{AssetError, AssetPaths, GeneratedFile};

/// Standard favicon sizes.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
pub const ICO_FILE: &str = "favicon.ico";

#[derive(Debug)]
pub struct IcoReport {
    pub ico: GeneratedFile,
    /// Sizes packed into the icon, in request order.
    pub sizes: Vec<u32>,
    /// Sizes that failed to rasterize and were left out.
    pub failed: Vec<u32>,
}

/// Outcome of rasterizing the source at each requested size.
#[derive(Debug, Default)]
pub struct Rasterized {
    /// Sizes that succeeded with their intermediate PNGs, in request order.
    pub produced: Vec<(u32, PathBuf)>,
    pub failed: Vec<u32>,
}

impl Rasterized {
    pub fn pngs(&self) -> Vec<PathBuf> {
        self.produced.iter().map(|(_, path)| path.clone()).collect()
    }
}

/// Temporary PNG for one icon size.
pub fn intermediate_path(output_dir: &Path, size: u32) -> PathBuf {
    output_dir.join(format!("folder-icon-{}.png", size))
}

/// Rasterize the source at every size and pack the results into one ICO.
///
/// A size that fails is logged and skipped. The intermediate PNGs are
/// removed once packing has been attempted.
pub fn generate_ico(paths: &AssetPaths, sizes: &[u32]) -> Result<IcoReport, AssetError> {
    paths.prepare()?;
    tracing::info!("Converting SVG: {}", paths.source.display());

    let rasterized = rasterize_sizes(paths, sizes);
    if rasterized.produced.is_empty() {
        return Err(AssetError::NothingRasterized);
    }

    let ico_path = paths.output_dir.join(ICO_FILE);
    tracing::info!("Creating ICO file: {}", ico_path.display());

    let pngs = rasterized.pngs();
    let packed = pack_ico(&pngs, &ico_path);
    remove_intermediates(&pngs);
    packed?;

    tracing::info!("✅ ICO file generation completed successfully!");

    Ok(IcoReport {
        ico: GeneratedFile::stat(&ico_path)?,
        sizes: rasterized.produced.into_iter().map(|(size, _)| size).collect(),
        failed: rasterized.failed,
    })
}

/// Write one intermediate PNG per size into the output directory.
///
/// Failures are logged and recorded; the caller owns cleanup.
pub fn rasterize_sizes(paths: &AssetPaths, sizes: &[u32]) -> Rasterized {
    let mut rasterized = Rasterized::default();

    for &size in sizes {
        let png_path = intermediate_path(&paths.output_dir, size);
        tracing::info!("Creating {}x{} PNG...", size, size);

        match svg_to_png(&paths.source, &png_path, size) {
            Ok(()) => {
                tracing::info!("  ✓ Created {}", png_path.display());
                rasterized.produced.push((size, png_path));
            }
            Err(err) => {
                tracing::warn!(
                    "  ✗ Failed to create {} at size {}: {}",
                    png_path.display(),
                    size,
                    err
                );
                rasterized.failed.push(size);
            }
        }
    }

    rasterized
}

/// Pack PNG files into a single ICO, one frame per file.
///
/// No ICO is left behind on failure.
pub fn pack_ico(pngs: &[PathBuf], ico_path: &Path) -> Result<(), AssetError> {
    let result = write_ico(pngs, ico_path);
    if let Err(err) = &result {
        tracing::warn!("Error creating ICO file: {}", err);
        if ico_path.exists() {
            if let Err(remove_err) = std::fs::remove_file(ico_path) {
                tracing::warn!("Failed to remove partial {}: {}", ico_path.display(), remove_err);
            }
        }
    }
    result
}

fn write_ico(pngs: &[PathBuf], ico_path: &Path) -> Result<(), AssetError> {
    if pngs.is_empty() {
        return Err(AssetError::NothingRasterized);
    }

    let mut frames = Vec::with_capacity(pngs.len());
    for png in pngs {
        let image = image::open(png)?.to_rgba8();
        frames.push(IcoFrame::as_png(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )?);
    }

    let file = File::create(ico_path).map_err(|source| AssetError::io(ico_path, source))?;
    IcoEncoder::new(BufWriter::new(file)).encode_images(&frames)?;
    Ok(())
}

fn remove_intermediates(pngs: &[PathBuf]) {
    tracing::info!("Cleaning up temporary PNG files...");
    for png in pngs {
        match std::fs::remove_file(png) {
            Ok(()) => tracing::info!("  ✓ Removed {}", png.display()),
            Err(err) => tracing::warn!("  ✗ Failed to remove {}: {}", png.display(), err),
        }
    }
}
