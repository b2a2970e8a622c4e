use crate::lists::{FaultSink, ListMarkupConverter};
use crate::text::SpannedText;
use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)\s*([A-Za-z][A-Za-z0-9]*)[^>]*>").expect("tag pattern is valid")
});

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Feeds raw HTML through a converter, one fragment at a time.
///
/// pulldown-cmark hands HTML blocks over line by line, so a comment may open
/// in one fragment and close several later; the scanner remembers that it is
/// inside one. Nothing inside a comment reaches the converter or the text.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlScanner {
    in_comment: bool,
}

impl HtmlScanner {
    /// A scanner outside any comment.
    pub fn new() -> Self {
        HtmlScanner::default()
    }

    /// Whether the last fragment ended inside an unterminated comment.
    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// `<ul>`, `<ol>` and `<li>` tags go to the converter, `<br>` becomes a
    /// line break and every other tag is dropped. Text between tags is
    /// appended with runs of whitespace collapsed to one space;
    /// whitespace-only runs are skipped.
    pub fn feed<S: FaultSink>(
        &mut self,
        html: &str,
        conv: &mut ListMarkupConverter<S>,
        text: &mut SpannedText,
    ) {
        let mut rest = html;
        loop {
            if self.in_comment {
                match rest.find(COMMENT_CLOSE) {
                    Some(end) => {
                        rest = &rest[end + COMMENT_CLOSE.len()..];
                        self.in_comment = false;
                    }
                    None => return,
                }
            }
            match rest.find(COMMENT_OPEN) {
                Some(start) => {
                    scan_tags(&rest[..start], conv, text);
                    rest = &rest[start + COMMENT_OPEN.len()..];
                    self.in_comment = true;
                }
                None => {
                    scan_tags(rest, conv, text);
                    return;
                }
            }
        }
    }
}

/// Feed one self-contained fragment of raw HTML through the converter. See
/// [`HtmlScanner::feed`]; a comment left open at the end of `html` swallows
/// the remainder.
pub fn feed_html<S: FaultSink>(
    html: &str,
    conv: &mut ListMarkupConverter<S>,
    text: &mut SpannedText,
) {
    HtmlScanner::new().feed(html, conv, text);
}

fn scan_tags<S: FaultSink>(html: &str, conv: &mut ListMarkupConverter<S>, text: &mut SpannedText) {
    let mut last = 0;
    for caps in TAG.captures_iter(html) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        push_collapsed(&html[last..whole.start()], text);
        last = whole.end();

        let opening = caps.get(1).is_none_or(|m| m.as_str().is_empty());
        let name = name.as_str();
        if !conv.handle_tag(opening, name, text) && name.eq_ignore_ascii_case("br") {
            text.push('\n');
        }
    }
    push_collapsed(&html[last..], text);
}

fn push_collapsed(segment: &str, text: &mut SpannedText) {
    if segment.trim().is_empty() {
        return;
    }
    let mut out = String::with_capacity(segment.len());
    let mut in_space = text.is_empty() || text.as_str().ends_with(char::is_whitespace);
    for c in segment.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    text.push_str(&out);
}
