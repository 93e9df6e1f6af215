/// User interface pieces that sit between iced and the session
///
/// - `preview.rs` - fits images into the canvas
/// - `dialogs.rs` - native file pickers and message boxes

pub mod dialogs;
pub mod preview;

use iced::Color;

use crate::state::status::Tone;

/// Text colour for each status tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Idle => Color::from_rgb(0.5, 0.5, 0.5),
        Tone::Success => Color::from_rgb(0.0, 0.6, 0.0),
        Tone::Filter => Color::from_rgb(0.2, 0.4, 1.0),
        Tone::Reset => Color::from_rgb(1.0, 0.6, 0.0),
    }
}
