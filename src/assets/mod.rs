//! Branding asset generation from the folder icon SVG.
//!
//! [`ico`] produces the multi-size favicon, [`logo`] the fixed-size logo
//! files for the OAuth consent screen. Both rasterize through [`raster`].

pub mod ico;
pub mod logo;
pub mod raster;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const SOURCE_SVG: &str = "folder-icon.svg";

/// Bytes in one mebibyte, the unit the size budgets are expressed in.
pub const MIB: u64 = 1024 * 1024;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("SVG file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("cannot rasterize at {0}x{0}")]
    InvalidSize(u32),

    #[error("failed to encode PNG {}: {message}", .path.display())]
    PngEncode { path: PathBuf, message: String },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("no PNG files were created successfully")]
    NothingRasterized,
}

impl AssetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AssetError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Input and output locations, relative to the project root.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

impl AssetPaths {
    /// The folder icon in the frontend's public directory, written back
    /// alongside it.
    pub fn for_project(root: &Path) -> Self {
        let public = root.join("frontend").join("public");
        Self {
            source: public.join(SOURCE_SVG),
            output_dir: public,
        }
    }

    /// Create the output directory and confirm the source exists.
    pub fn prepare(&self) -> Result<(), AssetError> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|source| AssetError::io(&self.output_dir, source))?;

        if !self.source.is_file() {
            return Err(AssetError::SourceMissing(self.source.clone()));
        }
        Ok(())
    }
}

/// A file written by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes: u64,
}

impl GeneratedFile {
    pub fn stat(path: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let path = path.into();
        let bytes = std::fs::metadata(&path)
            .map_err(|source| AssetError::io(&path, source))?
            .len();
        Ok(Self { path, bytes })
    }

    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / MIB as f64
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
