use std::path::PathBuf;
use thiserror::Error;

use crate::filters::{Filter, FilterError};

/// Everything a handler can report to the user
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to apply {filter}: {source}")]
    Filter {
        filter: Filter,
        #[source]
        source: FilterError,
    },

    #[error("failed to save image to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No processed image to save!")]
    NothingToSave,
}

/// How loudly an error is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl AppError {
    pub fn severity(&self) -> Severity {
        match self {
            AppError::NothingToSave => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Dialog title for this error
    pub fn title(&self) -> &'static str {
        match self.severity() {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(AppError::NothingToSave.severity(), Severity::Warning);
        assert_eq!(AppError::NothingToSave.title(), "Warning");

        let err = AppError::Filter {
            filter: Filter::Blur,
            source: FilterError::EmptyImage,
        };
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(err.to_string(), "failed to apply Blur: image has no pixels");
    }

    #[test]
    fn test_decode_message_names_kind() {
        let err = AppError::Decode {
            path: PathBuf::from("/tmp/notes.png"),
            source: image::ImageError::IoError(std::io::Error::other("bad header")),
        };
        assert!(err.to_string().starts_with("cannot decode file /tmp/notes.png"));
    }
}
