use super::html::HtmlScanner;
use crate::geometry::Geometry;
use crate::lists::{FaultSink, ListMarkupConverter, ListTag, LogFaultSink};
use crate::text::SpannedText;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::sync::Arc;

/// Convert a pulldown-cmark event stream into styled text.
///
/// List and item tags drive the converter; text-bearing events are appended
/// as they come; block ends only guarantee a line break. Returns the finished
/// buffer and the sink with every fault reported along the way.
pub fn convert_events<'a, I, S>(
    events: I,
    geometry: impl Into<Arc<Geometry>>,
    sink: S,
) -> (SpannedText, S)
where
    I: IntoIterator<Item = Event<'a>>,
    S: FaultSink,
{
    let mut text = SpannedText::new();
    let mut conv = ListMarkupConverter::with_sink(geometry, sink);
    let mut html = HtmlScanner::new();

    for ev in events {
        match ev {
            Event::Start(Tag::List(None)) => conv.on_tag(true, ListTag::Unordered, &mut text),
            Event::Start(Tag::List(Some(start))) => conv.open_ordered_from(start),
            Event::End(TagEnd::List(ordered)) => {
                let tag = if ordered {
                    ListTag::Ordered
                } else {
                    ListTag::Unordered
                };
                conv.on_tag(false, tag, &mut text);
            }
            Event::Start(Tag::Item) => conv.on_tag(true, ListTag::Item, &mut text),
            Event::End(TagEnd::Item) => conv.on_tag(false, ListTag::Item, &mut text),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::CodeBlock
                | TagEnd::BlockQuote(_)
                | TagEnd::HtmlBlock,
            )
            | Event::Rule => {
                text.ensure_line_break();
            }
            Event::Text(t) | Event::Code(t) | Event::InlineMath(t) | Event::DisplayMath(t) => {
                text.push_str(&t);
            }
            Event::Html(h) | Event::InlineHtml(h) => html.feed(&h, &mut conv, &mut text),
            Event::SoftBreak => {
                text.push(' ');
            }
            Event::HardBreak => {
                text.push('\n');
            }
            Event::TaskListMarker(done) => {
                text.push_str(if done { "[x] " } else { "[ ] " });
            }
            Event::FootnoteReference(label) => {
                text.push_str(&format!("[{}]", label));
            }
            _ => {}
        }
    }

    let sink = conv.finish(&mut text);
    (text, sink)
}

/// Parse markdown and convert it, logging any faults.
pub fn convert_markdown(source: &str, geometry: impl Into<Arc<Geometry>>) -> SpannedText {
    let options = Options::ENABLE_TASKLISTS | Options::ENABLE_STRIKETHROUGH;
    let (text, _) = convert_events(Parser::new_ext(source, options), geometry, LogFaultSink);
    text
}
