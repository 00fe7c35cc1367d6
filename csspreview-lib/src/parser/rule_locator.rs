//! Finds the CSS rule that encloses a cursor offset.
//!
//! This is a plain brace scan, not a CSS parser. It looks backwards for the
//! nearest `{`, forwards for the nearest `}`, and uses the `}` that closed the
//! previous rule as the left edge of the selector. Braces are never balanced:
//! nested blocks, or braces inside strings and comments, shift the boundaries.
//! Callers get whatever the scan finds in that case.

use std::ops::Range;

use log::{debug, trace};

use crate::error::LocateError;

/// The rule found around a cursor. All offsets are byte offsets into the
/// scanned text.
///
/// `selector_start <= selector_end < body_start <= body_end` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub selector_start: usize,
    /// Position of the rule's opening brace.
    pub selector_end: usize,
    /// First byte after the opening brace.
    pub body_start: usize,
    /// Position of the closing brace.
    pub body_end: usize,
    /// First `}` at or after the byte before the cursor. Same as `body_end`
    /// unless stray braces desync the scan.
    pub cursor_close: usize,
    /// Selector text with surrounding whitespace removed.
    pub selector_text: &'a str,
    /// Everything between the braces, untrimmed.
    pub body_text: &'a str,
}

impl RuleMatch<'_> {
    /// Span from the selector through the brace closing the cursor's block,
    /// inclusive.
    pub fn highlight_range(&self) -> Range<usize> {
        self.selector_start..self.cursor_close + 1
    }
}

/// Locate the rule enclosing `cursor` in `text`.
///
/// `cursor` is a byte offset; values past the end are treated as the end.
pub fn locate(text: &str, cursor: usize) -> Result<RuleMatch<'_>, LocateError> {
    let bytes = text.as_bytes();
    let cursor = cursor.min(text.len()) as isize;

    if last_index_of(bytes, b'{', cursor).is_none() {
        trace!("no opening brace at or before offset {}", cursor);
        return Err(LocateError::NoEnclosingRule);
    }
    let cursor_close = match index_of(bytes, b'}', cursor - 1) {
        Some(pos) => pos,
        None => {
            trace!("no closing brace at or after offset {}", cursor - 1);
            return Err(LocateError::NoEnclosingRule);
        }
    };

    // Closing brace of the previous rule, if any; the selector starts after it.
    let prev_close = last_index_of(bytes, b'}', cursor - 2).map_or(-1, |i| i as isize);
    let selector_start = (prev_close + 1) as usize;
    let selector_end = index_of(bytes, b'{', prev_close).ok_or(LocateError::NoEnclosingRule)?;

    let selector_text = text[selector_start..selector_end].trim();
    if selector_text.is_empty() {
        debug!("blank selector between offsets {} and {}", selector_start, selector_end);
        return Err(LocateError::EmptySelector);
    }

    // The body is taken from the selector's own brace, not from the braces
    // found around the cursor.
    let body_start = selector_end + 1;
    let body_end =
        index_of(bytes, b'}', body_start as isize).ok_or(LocateError::NoEnclosingRule)?;

    debug!("located rule {:?} with body {}..{}", selector_text, body_start, body_end);

    Ok(RuleMatch {
        selector_start,
        selector_end,
        body_start,
        body_end,
        cursor_close,
        selector_text,
        body_text: &text[body_start..body_end],
    })
}

/// Last index `<= from` holding `needle`. A negative `from` only inspects index 0,
/// and `from` past the end searches the whole slice.
fn last_index_of(haystack: &[u8], needle: u8, from: isize) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }
    let end = from.clamp(0, haystack.len() as isize - 1) as usize;
    haystack[..=end].iter().rposition(|&b| b == needle)
}

/// First index `>= from` holding `needle`. A negative `from` searches from 0.
fn index_of(haystack: &[u8], needle: u8, from: isize) -> Option<usize> {
    let start = from.max(0) as usize;
    if start >= haystack.len() {
        return None;
    }
    haystack[start..]
        .iter()
        .position(|&b| b == needle)
        .map(|pos| start + pos)
}
