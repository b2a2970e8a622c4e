//! Tokenizer-facing glue: feeds pulldown-cmark events, and raw HTML list tags
//! embedded in them, through a [`ListMarkupConverter`].
//!
//! [`ListMarkupConverter`]: crate::lists::ListMarkupConverter

pub mod events;
pub mod html;

pub use events::{convert_events, convert_markdown};
pub use html::{HtmlScanner, feed_html};
