//! Live preview of the CSS rule under the editor cursor.
//!
//! The rule is found with a brace scan ([`parser::rule_locator`]), its body is
//! split into declarations ([`parser::declarations`]) and the result is rendered
//! as an HTML page ([`render::preview_html`]). [`preview_generate`] ties the
//! steps together.

pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod notify;
pub mod parser;
pub mod preview_generate;
pub mod render;
pub mod style;

pub use config::PreviewConfig;
pub use editor::active_document::{ActiveDocument, DocumentId};
pub use error::{LocateError, PreviewError};
pub use parser::declarations::extract;
pub use parser::rule_locator::{locate, RuleMatch};
pub use preview_generate::css_preview;
pub use style::property_map::PropertyMap;
