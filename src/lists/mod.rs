//! Nested list handling: a stack of open `<ul>`/`<ol>` frames driven by tag
//! events, writing numerals, margins and bullets into a [`SpannedText`].
//!
//! [`SpannedText`]: crate::text::SpannedText

pub mod converter;
pub mod fault;
pub mod frame;
pub mod tag;

#[cfg(test)]
pub(crate) mod test_support;

pub use converter::ListMarkupConverter;
pub use fault::{FaultSink, LogFaultSink, MarkupError};
pub use frame::{ListFrame, Replaces};
pub use tag::ListTag;
