/// Colour-space helpers for the filters
///
/// Luminance always comes from the imaging library's own grayscale
/// conversion so that the grayscale filter, edge detection and the saturation
/// boost agree on what "gray" means.

use color_quant::NeuQuant;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};

use super::FilterError;

/// Single-channel luminance of any image
pub fn luminance(image: &DynamicImage) -> GrayImage {
    image.grayscale().to_luma8()
}

/// Expand a luminance image back to three equal channels
pub fn expand_to_rgb(gray: GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(gray).to_rgb8()
}

/// Reduce `image` to at most `colors` distinct colours
///
/// Trains a NeuQuant network on the pixels and replaces every pixel with its
/// nearest palette entry.
pub fn quantize(image: &RgbImage, colors: usize, sample_factor: i32) -> Result<RgbImage, FilterError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage);
    }

    // NeuQuant trains on RGBA
    let rgba: Vec<u8> = image
        .pixels()
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect();
    let quantizer = NeuQuant::new(sample_factor, colors, &rgba);

    let mut out = RgbImage::new(width, height);
    for (src, dst) in rgba.chunks_exact(4).zip(out.pixels_mut()) {
        let index = quantizer.index_of(src);
        let [r, g, b, _] = quantizer
            .lookup(index)
            .ok_or(FilterError::PaletteIndex(index))?;
        *dst = Rgb([r, g, b]);
    }

    Ok(out)
}

/// Scale each pixel's distance from its own gray by `factor`
///
/// 0.0 gives grayscale, 1.0 leaves the image as is, above 1.0 saturates.
pub fn enhance_saturation(image: &RgbImage, factor: f32) -> RgbImage {
    let gray = luminance(&DynamicImage::ImageRgb8(image.clone()));

    let mut out = image.clone();
    for (pixel, g) in out.pixels_mut().zip(gray.pixels()) {
        let g = g[0] as f32;
        for c in pixel.0.iter_mut() {
            let value = g + factor * (*c as f32 - g);
            *c = value.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
