//! Nested list markup to styled text.
//!
//! A [`ListMarkupConverter`] consumes `<ul>`/`<ol>`/`<li>` open and close
//! events and writes item numerals, leading margins and bullets into a
//! [`SpannedText`]: plain text plus attached style spans for a renderer to
//! interpret. The [`markdown`] module drives it from pulldown-cmark, and
//! [`render`] lays the result out as indented plain text.

pub mod geometry;
pub mod lists;
pub mod markdown;
pub mod render;
pub mod text;

pub use geometry::{ConfigError, Geometry};
pub use lists::{FaultSink, ListFrame, ListMarkupConverter, ListTag, LogFaultSink, MarkupError};
pub use text::{Fragment, Line, Region, Span, SpanStyle, SpannedText};
