/// Canned image filters
///
/// Every filter is a one-shot transform from the original image to a new
/// processed image. Filters never read a previous filter's output.
///
/// - `kernel.rs` - fixed convolution kernels and the convolution routine
/// - `color.rs` - luminance, palette quantization, saturation

pub mod color;
pub mod kernel;

use image::DynamicImage;
use thiserror::Error;

use crate::config;
use kernel::Kernel;

/// Reasons a transform can fail
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("image has no pixels")]
    EmptyImage,
    #[error("output buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("quantizer returned unknown palette index {0}")]
    PaletteIndex(usize),
}

/// The five filters offered in the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Grayscale,
    Blur,
    Sharpen,
    Cartoon,
    EdgeDetection,
}

impl Filter {
    /// Toolbar order
    pub const ALL: [Filter; 5] = [
        Filter::Grayscale,
        Filter::Blur,
        Filter::Sharpen,
        Filter::Cartoon,
        Filter::EdgeDetection,
    ];

    /// Button and status label
    pub fn label(&self) -> &'static str {
        match self {
            Filter::Grayscale => "Black & White",
            Filter::Blur => "Blur",
            Filter::Sharpen => "Sharpen",
            Filter::Cartoon => "Cartoon",
            Filter::EdgeDetection => "Edge Detection",
        }
    }

    /// Short lowercase name used in suggested file names
    pub fn slug(&self) -> &'static str {
        match self {
            Filter::Grayscale => "bw",
            Filter::Blur => "blur",
            Filter::Sharpen => "sharpen",
            Filter::Cartoon => "cartoon",
            Filter::EdgeDetection => "edges",
        }
    }

    /// Run the filter on `original`, returning a brand new image
    pub fn apply(&self, original: &DynamicImage) -> Result<DynamicImage, FilterError> {
        if original.width() == 0 || original.height() == 0 {
            return Err(FilterError::EmptyImage);
        }

        match self {
            Filter::Grayscale => Ok(grayscale(original)),
            Filter::Blur => convolve_dynamic(original, &kernel::BLUR),
            Filter::Sharpen => convolve_dynamic(original, &kernel::SHARPEN),
            Filter::Cartoon => cartoon(original),
            Filter::EdgeDetection => edge_detection(original),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Luminance, expanded back to RGB
fn grayscale(original: &DynamicImage) -> DynamicImage {
    let gray = color::luminance(original);
    DynamicImage::ImageRgb8(color::expand_to_rgb(gray))
}

/// Apply a kernel while keeping the source layout where possible
///
/// 8-bit Luma and Rgb stay as they are. Anything else goes through Rgba8 so
/// alpha survives.
fn convolve_dynamic(original: &DynamicImage, kernel: &Kernel) -> Result<DynamicImage, FilterError> {
    match original {
        DynamicImage::ImageLuma8(img) => kernel::convolve(img, kernel).map(DynamicImage::ImageLuma8),
        DynamicImage::ImageRgb8(img) => kernel::convolve(img, kernel).map(DynamicImage::ImageRgb8),
        other => kernel::convolve(&other.to_rgba8(), kernel).map(DynamicImage::ImageRgba8),
    }
}

/// Quantize, expand, edge-enhance, saturate. The order is load-bearing:
/// flattening colour first gives flat regions with emphasized boundaries.
fn cartoon(original: &DynamicImage) -> Result<DynamicImage, FilterError> {
    let rgb = original.to_rgb8();
    let flat = color::quantize(&rgb, config::CARTOON_COLORS, config::QUANTIZE_SAMPLE_FACTOR)?;
    let edged = kernel::convolve(&flat, &kernel::EDGE_ENHANCE_MORE)?;
    let boosted = color::enhance_saturation(&edged, config::CARTOON_SATURATION);
    Ok(DynamicImage::ImageRgb8(boosted))
}

fn edge_detection(original: &DynamicImage) -> Result<DynamicImage, FilterError> {
    let gray = color::luminance(original);
    let edges = kernel::convolve(&gray, &kernel::FIND_EDGES)?;
    Ok(DynamicImage::ImageRgb8(color::expand_to_rgb(edges)))
}

/// True when every pixel has identical R, G and B
#[cfg(test)]
pub(crate) fn is_neutral<P>(image: &image::ImageBuffer<P, Vec<u8>>) -> bool
where
    P: image::Pixel<Subpixel = u8>,
{
    image.pixels().all(|p| {
        let rgb = p.to_rgb();
        rgb[0] == rgb[1] && rgb[1] == rgb[2]
    })
}
