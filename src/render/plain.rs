use crate::geometry::Geometry;
use crate::text::{Fragment, Line, Region, SpannedText};

/// Marker drawn where a bullet span begins.
pub const BULLET: &str = "• ";

/// Render `text` as plain lines.
///
/// Each line is indented by the sum of the leading margins of every span
/// covering its first byte, at one column per `indent_unit`. A line that
/// starts a bullet span gets [`BULLET`] in the last columns of that
/// indentation. Blank lines stay blank.
pub fn render_plain(text: &SpannedText, geometry: &Geometry) -> String {
    let src = text.as_str();
    let mut region = Region::new();
    let mut offset = 0;
    for raw in src.split_inclusive('\n') {
        let content = raw.strip_suffix('\n').unwrap_or(raw);
        region.push_back_line(render_line(text, geometry, offset, content));
        offset += raw.len();
    }
    let mut out = region.apply();
    if src.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_line(text: &SpannedText, geometry: &Geometry, offset: usize, content: &str) -> Line {
    let mut line = Line::new();
    if content.is_empty() {
        return line;
    }

    let margin: i64 = text
        .spans_covering(offset)
        .map(|s| s.style.leading_margin())
        .sum();
    let columns = usize::try_from(margin.max(0) / i64::from(geometry.indent_unit().max(1))).unwrap_or(0);
    let starts_bullet = text
        .spans_covering(offset)
        .any(|s| s.style.is_bullet() && s.range.start == offset);

    if starts_bullet {
        let marker = Fragment::from(BULLET);
        line.push(Fragment::spaces(columns.saturating_sub(marker.width())));
        line.push(marker);
    } else if columns > 0 {
        line.push(Fragment::spaces(columns));
    }
    line.push(content);
    line
}
