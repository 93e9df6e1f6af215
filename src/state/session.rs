/// Image session: the original/processed pair and its lifecycle
///
/// A session is either `Empty` (nothing loaded, only upload makes sense) or
/// `Loaded`. There is no way back to `Empty`; loading another file simply
/// replaces the workspace.

use std::path::{Path, PathBuf};
use std::time::Instant;

use image::DynamicImage;

use crate::error::AppError;
use crate::filters::Filter;
use crate::io;

/// Images belonging to one loaded file
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Decoded at load time, never mutated
    original: DynamicImage,
    /// What is shown and saved
    processed: DynamicImage,
    /// File the original came from
    source: PathBuf,
    /// Filter that produced `processed`, None after load/reset
    applied: Option<Filter>,
}

impl Workspace {
    pub fn new(original: DynamicImage, source: PathBuf) -> Self {
        Self {
            processed: original.clone(),
            original,
            source,
            applied: None,
        }
    }

    pub fn original(&self) -> &DynamicImage {
        &self.original
    }

    pub fn processed(&self) -> &DynamicImage {
        &self.processed
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn applied(&self) -> Option<Filter> {
        self.applied
    }
}

#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Empty,
    Loaded(Workspace),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether filter, reset and save controls should be enabled
    pub fn is_loaded(&self) -> bool {
        matches!(self, Session::Loaded(_))
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        match self {
            Session::Empty => None,
            Session::Loaded(ws) => Some(ws),
        }
    }

    /// Decode `path` and start a fresh workspace from it
    ///
    /// On failure the current session (empty or loaded) is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), AppError> {
        let original = io::load_image(path)?;

        log::info!(
            "📷 Loaded {} ({}x{}, {:?})",
            path.display(),
            original.width(),
            original.height(),
            original.color()
        );

        *self = Session::Loaded(Workspace::new(original, path.to_path_buf()));
        Ok(())
    }

    /// Replace the processed image with `filter` applied to the original
    ///
    /// Returns `Ok(None)` when nothing is loaded. The processed image is only
    /// replaced once the filter has fully succeeded.
    pub fn apply(&mut self, filter: Filter) -> Result<Option<&Workspace>, AppError> {
        let Session::Loaded(ws) = self else {
            log::debug!("{} ignored, no image loaded", filter);
            return Ok(None);
        };

        let started = Instant::now();
        let processed = filter
            .apply(&ws.original)
            .map_err(|source| AppError::Filter { filter, source })?;

        ws.processed = processed;
        ws.applied = Some(filter);

        log::info!("🎨 Applied {} in {} ms", filter, started.elapsed().as_millis());
        Ok(Some(&*ws))
    }

    /// Throw away the current filter result
    pub fn reset(&mut self) -> Option<&Workspace> {
        let Session::Loaded(ws) = self else {
            log::debug!("reset ignored, no image loaded");
            return None;
        };

        ws.processed = ws.original.clone();
        ws.applied = None;

        log::info!("🔄 Reset to original");
        Some(&*ws)
    }

    /// Write the processed image to `path`
    ///
    /// Returns the path actually written (with the default extension added if
    /// the user left it off).
    pub fn save(&self, path: &Path) -> Result<PathBuf, AppError> {
        let ws = self.workspace().ok_or(AppError::NothingToSave)?;
        let written = io::save_image(&ws.processed, path)?;

        log::info!("💾 Saved {}", written.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::is_neutral;
    use image::{Rgb, RgbImage};

    fn write_fixture(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let noise = (x * 31 + y * 17) ^ (x * y);
            Rgb([(noise % 256) as u8, (x % 256) as u8, (y % 256) as u8])
        });
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_loaded());
        assert!(session.workspace().is_none());
    }

    #[test]
    fn test_load_copies_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "a.png", 20, 10);

        let mut session = Session::new();
        session.load(&path).unwrap();
        let ws = session.workspace().unwrap();
        assert_eq!(ws.original(), ws.processed());
        assert_eq!(ws.source(), path.as_path());
        assert_eq!(ws.applied(), None);
        assert!(session.is_loaded());
    }

    #[test]
    fn test_filters_read_original_not_previous_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "a.png", 24, 24);

        let mut session = Session::new();
        session.load(&path).unwrap();
        session.apply(Filter::Blur).unwrap();
        let ws = session.apply(Filter::Grayscale).unwrap().unwrap();

        let direct = Filter::Grayscale.apply(ws.original()).unwrap();
        assert_eq!(ws.processed(), &direct);
        assert_eq!(ws.applied(), Some(Filter::Grayscale));
        assert!(is_neutral(&ws.processed().to_rgb8()));
    }

    #[test]
    fn test_reset_restores_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "a.png", 24, 16);

        let mut session = Session::new();
        session.load(&path).unwrap();
        for filter in Filter::ALL {
            session.apply(filter).unwrap();
            let ws = session.reset().unwrap();
            assert_eq!(ws.processed(), ws.original());
            assert_eq!(ws.applied(), None);
        }
    }

    #[test]
    fn test_empty_session_guards() {
        let mut session = Session::new();
        assert!(session.apply(Filter::Cartoon).unwrap().is_none());
        assert!(session.reset().is_none());
        assert!(!session.is_loaded());
    }

    #[test]
    fn test_save_without_image_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.png");

        let err = Session::new().save(&target).unwrap_err();
        assert!(matches!(err, AppError::NothingToSave));
        assert!(!target.exists());
    }

    #[test]
    fn test_unmodified_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "in.bmp", 33, 21);

        let mut session = Session::new();
        session.load(&path).unwrap();
        let written = session.save(&dir.path().join("out")).unwrap();

        let reloaded = io::load_image(&written).unwrap();
        let ws = session.workspace().unwrap();
        assert_eq!(reloaded.to_rgb8(), ws.original().to_rgb8());
    }

    #[test]
    fn test_blur_jpeg_then_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "big.jpg", 400, 300);

        let mut session = Session::new();
        session.load(&path).unwrap();
        let original = session.workspace().unwrap().original().clone();

        session.apply(Filter::Blur).unwrap();
        let written = session.save(&dir.path().join("blurred.png")).unwrap();

        let saved = io::load_image(&written).unwrap();
        assert_eq!((saved.width(), saved.height()), (400, 300));
        assert_ne!(saved.to_rgb8(), original.to_rgb8());

        let ws = session.reset().unwrap();
        assert_eq!(ws.processed(), &original);
    }

    #[test]
    fn test_failed_load_keeps_previous_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_fixture(dir.path(), "good.png", 12, 12);
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"plain text pretending to be a png").unwrap();

        let mut session = Session::new();
        session.load(&good).unwrap();
        session.apply(Filter::Sharpen).unwrap();
        let before = session.workspace().unwrap().processed().clone();

        let err = session.load(&bad).unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));

        let ws = session.workspace().unwrap();
        assert_eq!(ws.source(), good.as_path());
        assert_eq!(ws.processed(), &before);
        assert_eq!(ws.applied(), Some(Filter::Sharpen));
    }

    #[test]
    fn test_failed_filter_keeps_processed() {
        let shown = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])));
        let mut session = Session::Loaded(Workspace {
            original: DynamicImage::new_rgb8(0, 0),
            processed: shown.clone(),
            source: PathBuf::from("empty.png"),
            applied: Some(Filter::Sharpen),
        });

        let err = session.apply(Filter::Blur).unwrap_err();
        assert!(matches!(
            err,
            AppError::Filter {
                filter: Filter::Blur,
                ..
            }
        ));
        assert_eq!(err.to_string(), "failed to apply Blur: image has no pixels");

        let ws = session.workspace().unwrap();
        assert_eq!(ws.processed(), &shown);
        assert_eq!(ws.applied(), Some(Filter::Sharpen));
    }
}
