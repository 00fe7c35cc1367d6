use std::time::Duration;

/// Custom property whose raw value becomes the preview element's markup.
pub const DEFAULT_CONTENT_PROPERTY: &str = "--text";
/// Language id the host editor reports for style sheets.
pub const DEFAULT_CSS_LANGUAGE_ID: &str = "css";
/// How long a revealed rule stays highlighted.
pub const DEFAULT_HIGHLIGHT_DURATION: Duration = Duration::from_millis(1500);

/// Knobs for the preview pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub content_property: String,
    pub css_language_id: String,
    pub highlight_duration: Duration,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            content_property: DEFAULT_CONTENT_PROPERTY.to_string(),
            css_language_id: DEFAULT_CSS_LANGUAGE_ID.to_string(),
            highlight_duration: DEFAULT_HIGHLIGHT_DURATION,
        }
    }
}

impl PreviewConfig {
    pub fn with_content_property(mut self, name: impl Into<String>) -> Self {
        self.content_property = name.into();
        self
    }

    pub fn with_css_language_id(mut self, id: impl Into<String>) -> Self {
        self.css_language_id = id.into();
        self
    }

    pub fn with_highlight_duration(mut self, duration: Duration) -> Self {
        self.highlight_duration = duration;
        self
    }

    /// True if `language_id` names a style sheet.
    pub fn is_css_language(&self, language_id: &str) -> bool {
        self.css_language_id == language_id
    }
}
