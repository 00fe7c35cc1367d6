//! Outcomes that stop a preview from being rendered.
//!
//! None of these are fatal: every variant maps to one of the fixed messages
//! shown in the preview panel instead of a styled box.

use thiserror::Error;

/// Shown when the active document is not a style sheet.
pub const WRONG_DOCUMENT_MESSAGE: &str =
    "Active editor doesn't show a CSS document - no properties to preview.";
/// Shown when the rule around the cursor cannot be determined.
pub const NO_RULE_MESSAGE: &str = "Cannot determine the rule's properties.";
/// Shown when there is no document at all.
pub const NO_DOCUMENT_MESSAGE: &str = "There is no active editor";

/// Why the rule locator could not produce a [`RuleMatch`](crate::parser::rule_locator::RuleMatch).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
    /// No opening/closing brace pair could be found around the cursor.
    #[error("no active rule")]
    NoEnclosingRule,

    /// The text between the previous rule and the opening brace is blank.
    #[error("cannot determine rule properties")]
    EmptySelector,
}

/// Why the preview pipeline fell back to a message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewError {
    #[error("no active document")]
    NoDocument,

    #[error("document language is not CSS")]
    WrongDocumentKind,

    #[error(transparent)]
    Locate(#[from] LocateError),
}

impl PreviewError {
    /// The user-facing message rendered for this outcome.
    ///
    /// Both locator failures share a single message.
    pub fn message(&self) -> &'static str {
        match self {
            PreviewError::NoDocument => NO_DOCUMENT_MESSAGE,
            PreviewError::WrongDocumentKind => WRONG_DOCUMENT_MESSAGE,
            PreviewError::Locate(_) => NO_RULE_MESSAGE,
        }
    }
}
