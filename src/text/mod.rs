pub mod fragment;
pub mod line;
pub mod region;
pub mod spanned;
pub mod style;

pub use fragment::Fragment;
pub use line::Line;
pub use region::Region;
pub use spanned::SpannedText;
pub use style::{Mark, MarkId, Span, SpanStyle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_apply_and_fragments() {
        let mut l = Line::new();
        l.push(Fragment::spaces(2)).push("• ").push("item");
        assert_eq!(l.apply(), "  • item");
        assert_eq!(l.width(), 8);
    }

    #[test]
    fn region_joins_lines() {
        let mut r = Region::new();
        r.push_back_line(Line::from_str("head"));
        r.push_back_line(Line::from_str("tail"));
        assert_eq!(r.apply(), "head\ntail");
        assert!(!r.is_empty());
    }
}
