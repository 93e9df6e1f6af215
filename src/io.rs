//! Codec boundary: decode on open, encode on save.
//!
//! All format support is whatever the `image` crate was built with. Nothing
//! here inspects pixel data.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

use crate::config;
use crate::error::AppError;
use crate::filters::Filter;

/// Decode the file at `path`
///
/// The format is sniffed from the file header first and falls back to the
/// extension, so a JPEG saved as `.png` still opens.
pub fn load_image(path: &Path) -> Result<DynamicImage, AppError> {
    let read_err = |source| AppError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(read_err)?
        .with_guessed_format()
        .map_err(read_err)?;

    reader.decode().map_err(|err| match err {
        ImageError::IoError(source) => AppError::Read {
            path: path.to_path_buf(),
            source,
        },
        source => AppError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Append the default extension when the user typed a bare name
pub fn resolve_save_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if !ext.is_empty() => path.to_path_buf(),
        _ => path.with_extension(config::DEFAULT_SAVE_EXTENSION),
    }
}

/// Encode `image` to `path`, picking the encoder from the extension
///
/// Returns the path actually written.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<PathBuf, AppError> {
    let path = resolve_save_path(path);
    let save_err = |source| AppError::Save {
        path: path.clone(),
        source,
    };

    let format = ImageFormat::from_path(&path).map_err(save_err)?;

    // JPEG has no alpha channel
    let result = if format == ImageFormat::Jpeg && image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8()).save_with_format(&path, format)
    } else {
        image.save_with_format(&path, format)
    };
    result.map_err(save_err)?;

    Ok(path)
}

/// File name offered by the save dialog, e.g. `holiday_blur.png`
pub fn suggested_file_name(source: Option<&Path>, filter: Option<Filter>) -> String {
    let stem = source
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    match filter {
        Some(filter) => format!("{}_{}.{}", stem, filter.slug(), config::DEFAULT_SAVE_EXTENSION),
        None => format!("{}.{}", stem, config::DEFAULT_SAVE_EXTENSION),
    }
}

/// Display name of a path (file name only)
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(40, 30, |x, y| {
            Rgb([(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8])
        }))
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let img = gradient();

        let written = save_image(&img, &dir.path().join("out.png")).unwrap();
        let loaded = load_image(&written).unwrap();

        assert_eq!(loaded.to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn test_missing_extension_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_image(&gradient(), &dir.path().join("bare")).unwrap();

        assert_eq!(written.extension().unwrap(), "png");
        assert!(written.exists());
        assert_eq!(ImageFormat::from_path(&written).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_jpeg_save_flattens_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([10, 200, 90, 100])));

        let written = save_image(&img, &dir.path().join("out.jpg")).unwrap();
        let loaded = load_image(&written).unwrap();
        assert_eq!(loaded.width(), 16);
        assert!(!loaded.color().has_alpha());
    }

    #[test]
    fn test_unknown_extension_is_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.notaformat");

        let err = save_image(&gradient(), &target).unwrap_err();
        assert!(matches!(err, AppError::Save { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_text_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("notes.png");
        std::fs::write(&fake, "definitely not a picture\n").unwrap();

        let err = load_image(&fake).unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }), "got {err:?}");
        assert!(err.to_string().starts_with("cannot decode file"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_image(Path::new("/nonexistent/path.png")).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
    }

    #[test]
    fn test_misnamed_jpeg_still_opens() {
        let dir = tempfile::tempdir().unwrap();
        let jpeg = dir.path().join("photo.jpg");
        save_image(&gradient(), &jpeg).unwrap();
        let renamed = dir.path().join("photo.png");
        std::fs::rename(&jpeg, &renamed).unwrap();

        let loaded = load_image(&renamed).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (40, 30));
    }

    #[test]
    fn test_suggested_file_name() {
        let src = Path::new("/photos/holiday.jpeg");
        assert_eq!(suggested_file_name(Some(src), Some(Filter::Blur)), "holiday_blur.png");
        assert_eq!(suggested_file_name(Some(src), None), "holiday.png");
        assert_eq!(suggested_file_name(None, None), "image.png");
    }

    #[test]
    fn test_resolve_save_path_keeps_explicit_extension() {
        assert_eq!(resolve_save_path(Path::new("a/b.jpg")), PathBuf::from("a/b.jpg"));
        assert_eq!(resolve_save_path(Path::new("a/b")), PathBuf::from("a/b.png"));
    }
}
