use super::style::{Mark, MarkId, Span, SpanStyle};
use std::fmt::{self, Display, Formatter};
use std::ops::Range;

/// Append-only text buffer with attached style spans and anchor marks.
///
/// Offsets are UTF-8 byte offsets into the text. Text is only ever appended,
/// so an offset recorded once stays valid for the life of the buffer. Spans
/// are kept in attachment order; renderers apply them in that order, later
/// spans taking precedence.
#[derive(Clone, Debug, Default)]
pub struct SpannedText {
    text: String,
    spans: Vec<Span>,
    marks: Vec<Mark>,
    next_mark: u64,
}

impl SpannedText {
    /// An empty buffer.
    pub fn new() -> Self {
        SpannedText::default()
    }

    /// A buffer holding `s`, with no spans or marks.
    pub fn from_str(s: &str) -> Self {
        SpannedText {
            text: s.to_owned(),
            ..SpannedText::default()
        }
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte length of the text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append text. Spans and marks are unaffected.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.text.push_str(s);
        self
    }

    pub fn push(&mut self, c: char) -> &mut Self {
        self.text.push(c);
        self
    }

    /// Append a `'\n'` unless the buffer is empty or already ends with one.
    pub fn ensure_line_break(&mut self) -> &mut Self {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self
    }

    /// Place a zero-length mark at the current end of the text.
    pub fn attach_mark(&mut self, owner_depth: usize) -> MarkId {
        let id = MarkId(self.next_mark);
        self.next_mark += 1;
        self.marks.push(Mark {
            id,
            offset: self.text.len(),
            owner_depth,
        });
        id
    }

    /// Detach a mark, returning it if it was still attached.
    pub fn remove_mark(&mut self, id: MarkId) -> Option<Mark> {
        let pos = self.marks.iter().rposition(|m| m.id == id)?;
        Some(self.marks.remove(pos))
    }

    /// The most recently attached mark that is still present.
    pub fn last_mark(&self) -> Option<&Mark> {
        self.marks.last()
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Attach a closed span. The range must lie within the current text.
    pub fn attach(&mut self, range: Range<usize>, style: SpanStyle) -> &mut Self {
        debug_assert!(range.start <= range.end && range.end <= self.text.len());
        self.spans.push(Span { range, style });
        self
    }

    /// All closed spans, in attachment order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Spans covering `offset`, in attachment order.
    pub fn spans_covering(&self, offset: usize) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.covers(offset))
    }

    /// Consume the buffer, keeping only what the renderer needs.
    pub fn into_parts(self) -> (String, Vec<Span>) {
        (self.text, self.spans)
    }
}

impl Display for SpannedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
