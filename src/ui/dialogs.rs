/// Native file pickers and message boxes
///
/// `App` talks to dialogs through the `Dialogs` trait so handlers can be
/// driven without a desktop session. The real implementation blocks the UI
/// thread until the user answers, same as any modal dialog.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

use crate::config;

/// Kind of modal notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Warning,
    Error,
}

pub trait Dialogs {
    /// Ask for an image to open; None on cancel
    fn pick_image(&self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask where to save; None on cancel
    fn pick_save_path(&self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf>;

    /// Show a modal message and wait for it to be dismissed
    fn notify(&self, notice: Notice, title: &str, message: &str);
}

/// rfd-backed dialogs
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_image(&self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = FileDialog::new().set_title("Select an Image");
        for (name, extensions) in config::OPEN_FILTERS {
            dialog = dialog.add_filter(*name, *extensions);
        }
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    fn pick_save_path(&self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Save Image As")
            .set_file_name(file_name);
        for (name, extensions) in config::SAVE_FILTERS {
            dialog = dialog.add_filter(*name, *extensions);
        }
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }

    fn notify(&self, notice: Notice, title: &str, message: &str) {
        let level = match notice {
            Notice::Info => MessageLevel::Info,
            Notice::Warning => MessageLevel::Warning,
            Notice::Error => MessageLevel::Error,
        };

        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Where dialogs open when nothing has been loaded yet
pub fn default_directory() -> Option<PathBuf> {
    dirs::picture_dir().or_else(dirs::home_dir)
}
