//! Turns a raw rule body into a [`PropertyMap`].
//!
//! Matching is pattern based and forgiving: anything that does not look like
//! `name: value` is skipped, and a value runs to the next `;` or the end of
//! the body. Values are not validated.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::style::property_map::PropertyMap;

/// Name (ASCII word characters and hyphens, possibly none), colon, then
/// everything up to `;`. A stray colon therefore swallows the rest of its
/// segment under the empty name.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_-]*)\s*:\s*([^;]*)").expect("declaration pattern is valid")
});

/// Extract every `name: value` pair in `body_text`, in order of appearance.
pub fn extract(body_text: &str) -> PropertyMap {
    let mut properties = PropertyMap::new();

    for caps in DECLARATION.captures_iter(body_text) {
        let name = &caps[1];
        let value = caps[2].trim();
        trace!("declaration {} = {:?}", name, value);
        properties.insert(name, value);
    }

    properties
}
