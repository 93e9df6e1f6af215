/// Status line shown under the canvas

use crate::filters::Filter;

/// Semantic colour class of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Nothing happened yet
    Idle,
    /// Load or save succeeded
    Success,
    /// A filter was applied
    Filter,
    /// Processed image was reset
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub tone: Tone,
}

impl Status {
    pub fn idle() -> Self {
        Self {
            text: "Please upload an image to get started".to_string(),
            tone: Tone::Idle,
        }
    }

    pub fn loaded(file_name: &str) -> Self {
        Self {
            text: format!("Image loaded: {}", file_name),
            tone: Tone::Success,
        }
    }

    pub fn filtered(filter: Filter) -> Self {
        Self {
            text: format!("Filter applied: {}", filter.label()),
            tone: Tone::Filter,
        }
    }

    pub fn reset() -> Self {
        Self {
            text: "Image reset to original".to_string(),
            tone: Tone::Reset,
        }
    }

    pub fn saved(file_name: &str) -> Self {
        Self {
            text: format!("Image saved: {}", file_name),
            tone: Tone::Success,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Status::default().tone, Tone::Idle);
        assert_eq!(Status::filtered(Filter::EdgeDetection).text, "Filter applied: Edge Detection");
        assert_eq!(Status::loaded("cat.jpg").text, "Image loaded: cat.jpg");
        assert_eq!(Status::saved("cat.png").tone, Tone::Success);
        assert_eq!(Status::reset().tone, Tone::Reset);
    }
}
