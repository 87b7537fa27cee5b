//! Image provider: pixel dimensions of the referenced raster image.
//!
//! The document stores only a path; grid generation needs the image extent.
//! Dimensions are read from the file header without decoding pixel data.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The referenced image could not be read or decoded.
///
/// Grid generation halts on this; without an extent there is no grid.
#[derive(Error, Debug)]
#[error("failed to read image dimensions from {path:?}: {source}")]
pub struct ImageLoadError {
    /// Path of the image that failed to load.
    pub path: PathBuf,
    /// Underlying decoder error.
    #[source]
    pub source: image::ImageError,
}

/// Read `(width, height)` in pixels from an image file.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), ImageLoadError> {
    let (width, height) = image::image_dimensions(path).map_err(|source| ImageLoadError {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Image {:?} is {}x{}", path, width, height);
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_dimensions_of_generated_png() {
        let dir = std::env::temp_dir().join("hgat_image_info_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("probe.png");

        let img = image::RgbImage::from_pixel(37, 23, image::Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        assert_eq!(probe_dimensions(&path).unwrap(), (37, 23));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = probe_dimensions(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(err.to_string().contains("not/here.png"));
    }
}
