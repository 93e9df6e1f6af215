/// Canvas-fitted preview of the displayed image
///
/// The preview is derived data: it is rebuilt on every display event and
/// never written back into the session.

use iced::widget::image::Handle;
use iced::Size;
use image::{imageops, imageops::FilterType, DynamicImage, RgbaImage};

use crate::config;

/// Renderer-ready bitmap plus its size in pixels
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl Preview {
    pub fn render(image: &DynamicImage, canvas: (u32, u32)) -> Self {
        let scaled = scale_to_canvas(image, canvas);
        let (width, height) = scaled.dimensions();
        Self {
            handle: Handle::from_rgba(width, height, scaled.into_raw()),
            width,
            height,
        }
    }
}

/// Target size for an image inside `canvas`
///
/// Uniform scale = min(width fit, height fit, 1.0) against the canvas minus
/// its margin, so images are shrunk to fit but never enlarged.
pub fn fit_size(image: (u32, u32), canvas: (u32, u32)) -> (u32, u32) {
    let (img_w, img_h) = image;
    if img_w == 0 || img_h == 0 {
        return (img_w, img_h);
    }

    let avail_w = canvas.0.saturating_sub(config::PREVIEW_MARGIN) as f64;
    let avail_h = canvas.1.saturating_sub(config::PREVIEW_MARGIN) as f64;

    let scale = (avail_w / img_w as f64)
        .min(avail_h / img_h as f64)
        .min(1.0);

    let width = ((img_w as f64 * scale) as u32).max(1);
    let height = ((img_h as f64 * scale) as u32).max(1);
    (width, height)
}

/// Lanczos-resized RGBA copy of `image` that fits `canvas`
pub fn scale_to_canvas(image: &DynamicImage, canvas: (u32, u32)) -> RgbaImage {
    let rgba = image.to_rgba8();
    let (width, height) = fit_size(rgba.dimensions(), canvas);

    if (width, height) == rgba.dimensions() {
        rgba
    } else {
        imageops::resize(&rgba, width, height, FilterType::Lanczos3)
    }
}

/// Canvas the window opens with, before any resize event arrives
pub fn initial_canvas() -> (u32, u32) {
    canvas_for_window(Size::new(config::WINDOW_SIZE.0, config::WINDOW_SIZE.1))
}

/// Canvas area left inside a window of `window` logical pixels
pub fn canvas_for_window(window: Size) -> (u32, u32) {
    let width = (window.width - config::CANVAS_CHROME_WIDTH).max(1.0);
    let height = (window.height - config::CANVAS_CHROME_HEIGHT).max(1.0);
    (width as u32, height as u32)
}
