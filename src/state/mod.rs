/// State management module
///
/// This module holds all application state:
/// - The loaded images and their Empty/Loaded lifecycle (session.rs)
/// - The status line text and tone (status.rs)

pub mod session;
pub mod status;
