use crate::geometry::Geometry;
use crate::text::{MarkId, SpanStyle, SpannedText};

/// State for one currently open `<ul>` or `<ol>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFrame {
    Unordered,
    /// `next_index` is the numeral the next item will receive.
    Ordered { next_index: u64 },
}

/// Style payloads for one closed item. Unordered items carry two, ordered
/// items one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replaces {
    styles: [Option<SpanStyle>; 2],
}

impl Replaces {
    fn one(style: SpanStyle) -> Self {
        Replaces {
            styles: [Some(style), None],
        }
    }

    fn two(first: SpanStyle, second: SpanStyle) -> Self {
        Replaces {
            styles: [Some(first), Some(second)],
        }
    }

    /// Payloads in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = SpanStyle> + '_ {
        self.styles.iter().flatten().copied()
    }
}

impl ListFrame {
    /// An ordered frame numbering from 1.
    pub fn ordered() -> Self {
        ListFrame::ordered_from(1)
    }

    /// An ordered frame whose first item is numbered `start`.
    pub fn ordered_from(start: u64) -> Self {
        ListFrame::Ordered { next_index: start }
    }

    /// Start an item: break the line, anchor the item start and, for ordered
    /// lists, write the numeral.
    pub fn open_item(&mut self, text: &mut SpannedText, depth: usize) -> MarkId {
        text.ensure_line_break();
        let mark = text.attach_mark(depth);
        if let ListFrame::Ordered { next_index } = self {
            text.push_str(&format!("{}. ", next_index));
            *next_index = next_index.saturating_add(1);
        }
        mark
    }

    /// Finish an item that started at `mark`: break the line and attach this
    /// frame's styles over the item's text. A missing mark or an empty item
    /// attaches nothing.
    pub fn close_item(
        &self,
        text: &mut SpannedText,
        mark: Option<MarkId>,
        level: usize,
        geometry: &Geometry,
    ) -> usize {
        text.ensure_line_break();
        let replaces = self.replaces(level, geometry);

        let Some(start) = mark.and_then(|id| text.remove_mark(id)).map(|m| m.offset) else {
            return 0;
        };
        let end = text.len();
        if start == end {
            return 0;
        }
        let mut attached = 0;
        for style in replaces.iter() {
            text.attach(start..end, style);
            attached += 1;
        }
        attached
    }

    /// Styles for an item closed at nesting `level` (1 = outermost).
    ///
    /// Nested spans stack their leading margins, so past the second level
    /// both variants take back what the enclosing items already contribute.
    pub fn replaces(&self, level: usize, geometry: &Geometry) -> Replaces {
        let level = level as i64;
        let item_indent = geometry.item_indent_unit();
        match self {
            ListFrame::Unordered => {
                let mut gap_width = i64::from(geometry.indent_unit());
                if level > 1 {
                    gap_width -= geometry.bullet_leading_margin();
                    if level > 2 {
                        gap_width -= (level - 2) * item_indent;
                    }
                }
                Replaces::two(
                    SpanStyle::LeadingMargin {
                        margin: item_indent * (level - 1),
                    },
                    SpanStyle::Bullet {
                        gap_width,
                        radius: geometry.bullet_radius(),
                    },
                )
            }
            ListFrame::Ordered { .. } => {
                let mut margin = item_indent * (level - 1);
                if level > 2 {
                    margin -= (level - 2) * item_indent;
                }
                Replaces::one(SpanStyle::LeadingMargin { margin })
            }
        }
    }
}
