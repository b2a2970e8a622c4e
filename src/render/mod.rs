//! Stand-in for a host renderer: lays a finished [`SpannedText`] out as
//! indented plain text.
//!
//! [`SpannedText`]: crate::text::SpannedText

pub mod plain;

pub use plain::{BULLET, render_plain};
