use super::fault::{FaultSink, LogFaultSink, MarkupError};
use super::frame::ListFrame;
use super::tag::ListTag;
use crate::geometry::Geometry;
use crate::text::{MarkId, SpannedText};
use std::sync::Arc;

/// Stack machine turning list open/close events into styled spans.
///
/// One converter serves one conversion job. The geometry is shared and never
/// mutated, so several converters may run over separate buffers at once.
///
/// Item starts are tracked on an explicit stack of mark handles rather than by
/// scanning the buffer for its newest mark. Both give the same answer as long
/// as item marks nest strictly, which holds because only this converter places
/// marks in its buffer; a disagreement is logged on close.
#[derive(Debug)]
pub struct ListMarkupConverter<S = LogFaultSink> {
    geometry: Arc<Geometry>,
    stack: Vec<ListFrame>,
    anchors: Vec<MarkId>,
    sink: S,
}

impl ListMarkupConverter<LogFaultSink> {
    /// A converter reporting faults through the `log` facade.
    pub fn new(geometry: impl Into<Arc<Geometry>>) -> Self {
        ListMarkupConverter::with_sink(geometry, LogFaultSink)
    }
}

impl<S: FaultSink> ListMarkupConverter<S> {
    /// A converter reporting faults to `sink`.
    pub fn with_sink(geometry: impl Into<Arc<Geometry>>, sink: S) -> Self {
        ListMarkupConverter {
            geometry: geometry.into(),
            stack: Vec::new(),
            anchors: Vec::new(),
            sink,
        }
    }

    /// Geometry every margin is computed from.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Number of lists currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Faults collected so far, for sinks that keep them.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle one list tag. Malformed input is reported to the sink and the
    /// event is dropped; it never aborts the conversion.
    pub fn on_tag(&mut self, opening: bool, tag: ListTag, text: &mut SpannedText) {
        log::trace!(
            "{}{} at depth {}",
            if opening { "<" } else { "</" },
            tag,
            self.stack.len()
        );
        if let Err(e) = self.apply(opening, tag, text) {
            self.sink.report(e);
        }
    }

    /// Name-based entry point for tokenizers that hand over raw tag names.
    /// Returns `false` for tags that are not list tags; those are left alone.
    pub fn handle_tag(&mut self, opening: bool, name: &str, text: &mut SpannedText) -> bool {
        match ListTag::from_name(name) {
            Some(tag) => {
                self.on_tag(opening, tag, text);
                true
            }
            None => false,
        }
    }

    /// Open an ordered list whose first item is numbered `start`.
    pub fn open_ordered_from(&mut self, start: u64) {
        self.stack.push(ListFrame::ordered_from(start));
    }

    /// End the job. Lists still open are reported and any item marks still
    /// attached are dropped from the buffer.
    pub fn finish(mut self, text: &mut SpannedText) -> S {
        if !self.stack.is_empty() {
            self.sink.report(MarkupError::UnclosedLists {
                depth: self.stack.len(),
            });
        }
        for id in self.anchors.drain(..) {
            text.remove_mark(id);
        }
        self.sink
    }

    fn apply(
        &mut self,
        opening: bool,
        tag: ListTag,
        text: &mut SpannedText,
    ) -> Result<(), MarkupError> {
        match (tag, opening) {
            (ListTag::Unordered, true) => self.stack.push(ListFrame::Unordered),
            (ListTag::Ordered, true) => self.stack.push(ListFrame::ordered()),
            // kinds are not matched against the open frame; the top is popped
            (ListTag::Unordered | ListTag::Ordered, false) => {
                self.stack
                    .pop()
                    .ok_or(MarkupError::UnbalancedListClose { tag })?;
            }
            (ListTag::Item, true) => self.open_item(text)?,
            (ListTag::Item, false) => self.close_item(text)?,
        }
        Ok(())
    }

    fn open_item(&mut self, text: &mut SpannedText) -> Result<(), MarkupError> {
        let depth = self.stack.len();
        let frame = self
            .stack
            .last_mut()
            .ok_or(MarkupError::OrphanItem { opening: true })?;
        let mark = frame.open_item(text, depth);
        self.anchors.push(mark);
        Ok(())
    }

    fn close_item(&mut self, text: &mut SpannedText) -> Result<(), MarkupError> {
        let level = self.stack.len();
        let frame = *self
            .stack
            .last()
            .ok_or(MarkupError::OrphanItem { opening: false })?;

        let mark = self.anchors.pop();
        match (mark, text.last_mark()) {
            (None, _) => log::warn!("list item closed at level {level} without an open item"),
            (Some(id), Some(last)) if last.id != id => log::warn!(
                "item mark {:?} is not the newest mark in the buffer ({:?})",
                id,
                last.id
            ),
            _ => {}
        }
        frame.close_item(text, mark, level, &self.geometry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lists::test_support::{capture_logs, logged};
    use crate::text::SpanStyle;

    fn converter() -> ListMarkupConverter<Vec<MarkupError>> {
        ListMarkupConverter::with_sink(Geometry::new(10, 3).unwrap(), Vec::new())
    }

    #[test]
    fn unordered_item_gets_margin_and_bullet() {
        let mut c = converter();
        let mut text = SpannedText::new();
        c.on_tag(true, ListTag::Unordered, &mut text);
        c.on_tag(true, ListTag::Item, &mut text);
        text.push_str("one");
        c.on_tag(false, ListTag::Item, &mut text);
        c.on_tag(false, ListTag::Unordered, &mut text);

        assert_eq!(text.as_str(), "one\n");
        let styles: Vec<_> = text.spans().iter().map(|s| (s.range.clone(), s.style)).collect();
        assert_eq!(
            styles,
            vec![
                (0..4, SpanStyle::LeadingMargin { margin: 0 }),
                (
                    0..4,
                    SpanStyle::Bullet {
                        gap_width: 10,
                        radius: 3
                    }
                ),
            ]
        );
        assert!(text.marks().is_empty());
        assert_eq!(c.depth(), 0);
        assert!(c.finish(&mut text).is_empty());
    }

    #[test]
    fn list_close_on_empty_stack_is_reported() {
        let mut c = converter();
        let mut text = SpannedText::from_str("x");
        c.on_tag(false, ListTag::Ordered, &mut text);
        assert_eq!(text.as_str(), "x");
        assert_eq!(
            c.sink(),
            &vec![MarkupError::UnbalancedListClose {
                tag: ListTag::Ordered
            }]
        );
    }

    #[test]
    fn mismatched_close_pops_whatever_is_on_top() {
        let mut c = converter();
        let mut text = SpannedText::new();
        c.on_tag(true, ListTag::Unordered, &mut text);
        c.on_tag(true, ListTag::Ordered, &mut text);
        c.on_tag(false, ListTag::Unordered, &mut text);
        assert_eq!(c.depth(), 1);
        assert!(c.sink().is_empty());
    }

    #[test]
    fn close_item_without_open_is_harmless() {
        let mut c = converter();
        let mut text = SpannedText::from_str("text");
        c.on_tag(true, ListTag::Unordered, &mut text);
        c.on_tag(false, ListTag::Item, &mut text);
        assert_eq!(text.as_str(), "text\n");
        assert!(text.spans().is_empty());
        assert!(c.sink().is_empty());
    }

    #[test]
    fn finish_reports_open_lists_and_drops_marks() {
        let mut c = converter();
        let mut text = SpannedText::new();
        c.on_tag(true, ListTag::Ordered, &mut text);
        c.on_tag(true, ListTag::Item, &mut text);
        text.push_str("dangling");
        assert_eq!(text.marks().len(), 1);

        let errors = c.finish(&mut text);
        assert_eq!(errors, vec![MarkupError::UnclosedLists { depth: 1 }]);
        assert!(text.marks().is_empty());
        assert!(text.spans().is_empty());
    }

    #[test]
    fn handle_tag_ignores_other_names() {
        let mut c = converter();
        let mut text = SpannedText::new();
        assert!(!c.handle_tag(true, "p", &mut text));
        assert!(c.handle_tag(true, "OL", &mut text));
        assert_eq!(c.depth(), 1);
    }

    #[test]
    fn ordered_from_start_number() {
        let mut c = converter();
        let mut text = SpannedText::new();
        c.open_ordered_from(7);
        c.on_tag(true, ListTag::Item, &mut text);
        c.on_tag(false, ListTag::Item, &mut text);
        c.on_tag(true, ListTag::Item, &mut text);
        c.on_tag(false, ListTag::Item, &mut text);
        c.on_tag(false, ListTag::Ordered, &mut text);
        assert_eq!(text.as_str(), "7. \n8. \n");
        assert_eq!(text.spans().len(), 2);
    }

    #[test]
    fn ordered_from_largest_index_does_not_overflow() {
        let mut c = converter();
        let mut text = SpannedText::new();
        c.open_ordered_from(u64::MAX);
        for _ in 0..2 {
            c.on_tag(true, ListTag::Item, &mut text);
            c.on_tag(false, ListTag::Item, &mut text);
        }
        c.on_tag(false, ListTag::Ordered, &mut text);
        assert_eq!(text.as_str(), "18446744073709551615. \n18446744073709551615. \n");
        assert!(c.finish(&mut text).is_empty());
    }

    #[test]
    fn foreign_mark_is_logged_and_item_still_styled() {
        capture_logs();
        let mut c = converter();
        let mut text = SpannedText::new();
        c.on_tag(true, ListTag::Unordered, &mut text);
        c.on_tag(true, ListTag::Item, &mut text);
        text.push_str("mine");
        let foreign = text.attach_mark(7);
        c.on_tag(false, ListTag::Item, &mut text);

        assert!(logged(log::Level::Warn, "is not the newest mark in the buffer"));
        // the item's own mark is used, the foreign one is left alone
        assert_eq!(text.spans().len(), 2);
        assert!(text.spans().iter().all(|s| s.range == (0..5)));
        assert_eq!(text.marks().len(), 1);
        assert_eq!(text.last_mark().map(|m| m.id), Some(foreign));
        assert!(c.sink().is_empty());
    }

    #[test]
    fn item_close_without_open_item_is_logged() {
        capture_logs();
        let mut c = converter();
        let mut text = SpannedText::new();
        c.on_tag(true, ListTag::Ordered, &mut text);
        c.on_tag(true, ListTag::Ordered, &mut text);
        c.on_tag(true, ListTag::Ordered, &mut text);
        c.on_tag(false, ListTag::Item, &mut text);
        assert!(logged(log::Level::Warn, "closed at level 3 without an open item"));
        assert!(text.spans().is_empty());
    }
}
