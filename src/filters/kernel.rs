/// Fixed convolution kernels and the convolution routine that applies them
///
/// Output per channel is `round(sum(weight * pixel) / scale + offset)` clamped
/// to 0..=255. Pixels within `size / 2` of the border are copied from the
/// source unchanged, and alpha is never convolved.

use image::{ImageBuffer, Pixel};

use super::FilterError;

/// A square convolution kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// Side length (3 or 5)
    pub size: usize,
    /// Row-major weights, `size * size` entries
    pub weights: &'static [f32],
    /// Divisor applied to the weighted sum
    pub scale: f32,
    /// Added after scaling
    pub offset: f32,
}

/// 5x5 smoothing ring
pub const BLUR: Kernel = Kernel {
    size: 5,
    weights: &[
        1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    scale: 16.0,
    offset: 0.0,
};

pub const SHARPEN: Kernel = Kernel {
    size: 3,
    weights: &[
        -2.0, -2.0, -2.0,
        -2.0, 32.0, -2.0,
        -2.0, -2.0, -2.0,
    ],
    scale: 16.0,
    offset: 0.0,
};

/// Strong edge enhancement (used by the cartoon pipeline)
pub const EDGE_ENHANCE_MORE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0, 9.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 1.0,
    offset: 0.0,
};

/// Laplacian edge finder; flat regions go to zero
pub const FIND_EDGES: Kernel = Kernel {
    size: 3,
    weights: &[
        -1.0, -1.0, -1.0,
        -1.0, 8.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
    scale: 1.0,
    offset: 0.0,
};

/// Convolve an 8-bit image with `kernel`
///
/// Works for Luma, LumaA, Rgb and Rgba buffers. For the two-channel and
/// four-channel layouts the last channel is treated as alpha and copied.
pub fn convolve<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    kernel: &Kernel,
) -> Result<ImageBuffer<P, Vec<u8>>, FilterError>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage);
    }

    let channels = P::CHANNEL_COUNT as usize;
    let color_channels = match channels {
        2 | 4 => channels - 1,
        n => n,
    };

    let src = image.as_raw();
    let mut out = src.clone();

    let radius = kernel.size / 2;
    let (w, h) = (width as usize, height as usize);

    // Too small for any interior pixel: nothing to do
    if w > 2 * radius && h > 2 * radius {
        let stride = w * channels;
        for y in radius..h - radius {
            for x in radius..w - radius {
                let base = y * stride + x * channels;
                for c in 0..color_channels {
                    let mut sum = 0.0f32;
                    for ky in 0..kernel.size {
                        let row = (y + ky - radius) * stride;
                        for kx in 0..kernel.size {
                            let weight = kernel.weights[ky * kernel.size + kx];
                            if weight != 0.0 {
                                let idx = row + (x + kx - radius) * channels + c;
                                sum += weight * src[idx] as f32;
                            }
                        }
                    }
                    let value = sum / kernel.scale + kernel.offset;
                    out[base + c] = value.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }

    ImageBuffer::from_raw(width, height, out).ok_or(FilterError::BufferSize { width, height })
}
