/// Fixed application defaults
///
/// Nothing here is read from disk or the environment. The window opens with
/// the same geometry every time and the filters have no tunable parameters.

/// Initial window size (width, height)
pub const WINDOW_SIZE: (f32, f32) = (900.0, 700.0);

/// Total space left around the preview inside the canvas (split evenly per side)
pub const PREVIEW_MARGIN: u32 = 20;

/// Vertical space taken by the title, toolbar, filter row, status line,
/// column spacing and outer padding
pub const CANVAS_CHROME_HEIGHT: f32 = 265.0;

/// Horizontal padding around the canvas frame
pub const CANVAS_CHROME_WIDTH: f32 = 60.0;

/// Open dialog filters: (label, extensions)
pub const OPEN_FILTERS: &[(&str, &[&str])] = &[
    ("Image files", &["jpg", "jpeg", "png", "bmp", "gif"]),
    ("JPEG files", &["jpg", "jpeg"]),
    ("PNG files", &["png"]),
    ("All files", &["*"]),
];

/// Save dialog filters: (label, extensions)
pub const SAVE_FILTERS: &[(&str, &[&str])] = &[
    ("PNG files", &["png"]),
    ("JPEG files", &["jpg"]),
    ("All files", &["*"]),
];

/// Extension appended when the chosen save path has none
pub const DEFAULT_SAVE_EXTENSION: &str = "png";

/// Palette size for the cartoon quantization stage
pub const CARTOON_COLORS: usize = 64;

/// NeuQuant sampling factor (1 = best, 30 = fastest)
pub const QUANTIZE_SAMPLE_FACTOR: i32 = 10;

/// Saturation multiplier applied at the end of the cartoon pipeline
pub const CARTOON_SATURATION: f32 = 1.2;
