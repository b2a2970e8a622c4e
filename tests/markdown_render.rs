use list_spans::markdown::{convert_events, convert_markdown};
use list_spans::render::render_plain;
use list_spans::{Geometry, MarkupError};
use pulldown_cmark::{CowStr, Event, Parser, Tag, TagEnd};
use similar::{ChangeTag, TextDiff};

fn geometry() -> Geometry {
    Geometry::new(10, 3).unwrap()
}

fn assert_renders(markdown: &str, expected: &str) {
    let text = convert_markdown(markdown, geometry());
    let actual = render_plain(&text, &geometry());
    if actual != expected {
        let diff = TextDiff::from_lines(expected, &actual);
        eprintln!("render diff for {:?}:\n", markdown);
        for op in diff.ops() {
            for change in diff.iter_changes(op) {
                match change.tag() {
                    ChangeTag::Delete => eprint!("- {}", change),
                    ChangeTag::Insert => eprint!("+ {}", change),
                    ChangeTag::Equal => eprint!("  {}", change),
                }
            }
        }
        eprintln!();
    }
    assert_eq!(actual, expected, "render mismatch for {:?}", markdown);
}

#[test]
fn flat_bullets() {
    assert_renders("- one\n- two\n", "• one\n• two\n");
}

#[test]
fn nested_bullets_step_right() {
    assert_renders("- a\n  - b\n", "• a\n • b\n");
}

#[test]
fn nested_ordered_restarts() {
    assert_renders("1. x\n2. y\n   1. z\n", "1. x\n2. y\n  1. z\n");
}

#[test]
fn ordered_inside_bullet() {
    assert_renders("- a\n  1. b\n", "• a\n   1. b\n");
}

#[test]
fn surrounding_paragraphs_stay_flush() {
    assert_renders("Intro\n\n- a\n- b\n\nOutro\n", "Intro\n• a\n• b\nOutro\n");
}

#[test]
fn html_list_block() {
    assert_renders("<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n", "• one\n• two\n");
}

#[test]
fn commented_out_html_list_is_not_rendered() {
    assert_renders("<!-- <ul><li>hidden</li></ul> -->\n\n- shown\n", "• shown\n");
}

#[test]
fn parser_events_report_nothing_for_wellformed_lists() {
    let md = "- a\n  - b\n    1. c\n- d\n";
    let (text, errors) = convert_events(Parser::new(md), geometry(), Vec::<MarkupError>::new());
    assert!(errors.is_empty());
    assert_eq!(text.as_str(), "a\nb\n1. c\nd\n");
    assert!(text.marks().is_empty());
}

#[test]
fn unclosed_list_in_event_stream() {
    let events = vec![
        Event::Start(Tag::List(None)),
        Event::Start(Tag::Item),
        Event::Text(CowStr::from("cut off")),
        Event::End(TagEnd::Item),
    ];
    let (text, errors) = convert_events(events, geometry(), Vec::new());
    assert_eq!(errors, vec![MarkupError::UnclosedLists { depth: 1 }]);
    assert_eq!(text.spans().len(), 2);
    assert_eq!(render_plain(&text, &geometry()), "• cut off\n");
}
