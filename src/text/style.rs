use std::ops::Range;

/// Style payloads attached to a [`SpannedText`](super::SpannedText). They are
/// opaque records: the converter computes them, the host renderer interprets
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    /// Shift every line of the span right by `margin` units.
    LeadingMargin { margin: i64 },
    /// Draw a bullet of `radius` on the first line, followed by `gap_width`
    /// units before the text. The gap goes negative for nested bullets so
    /// they line up under their parent's margin.
    Bullet { gap_width: i64, radius: u32 },
}

impl SpanStyle {
    /// Units this style pushes the text right by on every line it covers.
    pub fn leading_margin(&self) -> i64 {
        match *self {
            SpanStyle::LeadingMargin { margin } => margin,
            SpanStyle::Bullet { gap_width, radius } => 2 * i64::from(radius) + gap_width,
        }
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, SpanStyle::Bullet { .. })
    }
}

/// A closed, exclusive-exclusive style range over buffer bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub style: SpanStyle,
}

impl Span {
    /// Whether `offset` falls inside the span. Exclusive at both ends means
    /// text inserted at `range.end` is never covered.
    pub fn covers(&self, offset: usize) -> bool {
        self.range.start <= offset && offset < self.range.end
    }
}

/// Handle for a zero-length anchor mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkId(pub u64);

/// Zero-length placeholder recording where an item began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    pub id: MarkId,
    pub offset: usize,
    /// Stack depth of the list frame that placed the mark.
    pub owner_depth: usize,
}
