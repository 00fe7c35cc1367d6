use crate::config::PreviewConfig;
use crate::editor::active_document::{ActiveDocument, DocumentId};
use crate::error::PreviewError;
use crate::highlight::{DecorationSink, Highlighter};
use crate::notify::{ChangeSignal, ListenerId};
use crate::parser::{declarations, rule_locator};
use crate::render::preview_html;

pub mod css_preview {
    use super::*;
    use log::debug;
    use std::ops::Range;
    use std::time::Instant;

    /// Address the preview panel is registered under.
    pub const PREVIEW_URI: &str = "css-preview://authority/css-preview";

    /// Render the preview for the active document, or the fitting message.
    pub fn generate(active: Option<&ActiveDocument>, config: &PreviewConfig) -> String {
        match try_generate(active, config) {
            Ok(html) => html,
            Err(e) => {
                debug!("preview unavailable: {}", e);
                preview_html::render_error(e.message())
            }
        }
    }

    /// Like [`generate`], but reports why no rule preview could be made.
    pub fn try_generate(
        active: Option<&ActiveDocument>,
        config: &PreviewConfig,
    ) -> Result<String, PreviewError> {
        let document = css_document(active, config)?;
        let rule = rule_locator::locate(&document.text, document.cursor)?;
        let properties = declarations::extract(rule.body_text);
        debug!(
            "previewing {:?} with {} declaration(s)",
            rule.selector_text,
            properties.len()
        );
        Ok(preview_html::render_rule(
            rule.selector_text,
            rule.body_text,
            &properties,
            config,
        ))
    }

    fn css_document<'a>(
        active: Option<&'a ActiveDocument>,
        config: &PreviewConfig,
    ) -> Result<&'a ActiveDocument, PreviewError> {
        let document = active.ok_or(PreviewError::NoDocument)?;
        if !config.is_css_language(&document.language_id) {
            return Err(PreviewError::WrongDocumentKind);
        }
        Ok(document)
    }

    /// Something changed in an editor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum EditorEvent {
        TextChanged(DocumentId),
        SelectionChanged(DocumentId),
    }

    impl EditorEvent {
        pub fn document(&self) -> DocumentId {
            match *self {
                EditorEvent::TextChanged(id) | EditorEvent::SelectionChanged(id) => id,
            }
        }
    }

    /// Produces preview pages and tells listeners when they are stale.
    pub struct PreviewProvider {
        config: PreviewConfig,
        changed: ChangeSignal<String>,
    }

    impl PreviewProvider {
        pub fn new(config: PreviewConfig) -> Self {
            PreviewProvider {
                config,
                changed: ChangeSignal::new(),
            }
        }

        pub fn config(&self) -> &PreviewConfig {
            &self.config
        }

        pub fn provide(&self, active: Option<&ActiveDocument>) -> String {
            generate(active, &self.config)
        }

        /// Register a listener called with the preview URI whenever the
        /// preview should be re-rendered.
        pub fn on_did_change<F>(&self, listener: F) -> ListenerId
        where
            F: Fn(&String) + 'static,
        {
            self.changed.connect(listener)
        }

        pub fn remove_listener(&self, id: ListenerId) -> bool {
            self.changed.disconnect(id)
        }

        pub fn update(&self) {
            self.changed.emit(&PREVIEW_URI.to_string());
        }

        /// Refresh if `event` concerns the active document. Returns whether
        /// listeners were notified.
        pub fn handle_event(&self, event: EditorEvent, active: Option<DocumentId>) -> bool {
            if active != Some(event.document()) {
                return false;
            }
            self.update();
            true
        }

        /// Highlight the rule under the cursor for the configured duration.
        pub fn reveal<D: DecorationSink>(
            &self,
            active: Option<&ActiveDocument>,
            highlighter: &mut Highlighter<D>,
            now: Instant,
        ) -> Result<Range<usize>, PreviewError> {
            let document = css_document(active, &self.config)?;
            let rule = rule_locator::locate(&document.text, document.cursor)?;
            let range = rule.highlight_range();
            highlighter.reveal(range.clone(), now);
            Ok(range)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::css_preview::*;
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn css(text: &str, cursor: usize) -> ActiveDocument {
        ActiveDocument::new(DocumentId(1), "css", text, cursor)
    }

    #[test]
    fn test_no_document() {
        let html = generate(None, &PreviewConfig::default());
        assert_eq!(html, "<body>\n    There is no active editor\n</body>\n");
    }

    #[test]
    fn test_wrong_language() {
        let doc = ActiveDocument::new(DocumentId(1), "scss", "a { b: c; }", 4);
        assert_eq!(
            try_generate(Some(&doc), &PreviewConfig::default()),
            Err(PreviewError::WrongDocumentKind)
        );
    }

    #[test]
    fn test_rule_preview() {
        let doc = css("h1 { color: red; width: 10px; }", 10);
        let html = generate(Some(&doc), &PreviewConfig::default());
        assert!(html.contains("<h1>h1</h1>"));
        assert!(html.contains("content: '10px';"));
    }

    #[test]
    fn test_events_for_other_documents_are_ignored() {
        let provider = PreviewProvider::new(PreviewConfig::default());
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        provider.on_did_change(move |uri| {
            assert_eq!(uri, PREVIEW_URI);
            counter.set(counter.get() + 1);
        });

        let active = Some(DocumentId(1));
        assert!(provider.handle_event(EditorEvent::TextChanged(DocumentId(1)), active));
        assert!(!provider.handle_event(EditorEvent::SelectionChanged(DocumentId(2)), active));
        assert!(!provider.handle_event(EditorEvent::SelectionChanged(DocumentId(1)), None));
        assert_eq!(hits.get(), 1);
    }
}
