//! Recoverable markup faults and where they get reported.
//!
//! None of these abort a conversion. The converter reports them to a
//! [`FaultSink`], skips the offending event and carries on.

use super::ListTag;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// An `<li>` open or close arrived with no enclosing list.
    #[error("list item {} outside of any list", verb(.opening))]
    OrphanItem { opening: bool },
    /// A `</ul>` or `</ol>` arrived with no list open.
    #[error("closing </{tag}> with no open list")]
    UnbalancedListClose { tag: ListTag },
    /// The conversion finished with lists still open.
    #[error("{depth} list(s) left open at end of input")]
    UnclosedLists { depth: usize },
}

fn verb(opening: &bool) -> &'static str {
    if *opening { "opened" } else { "closed" }
}

/// Receives recoverable faults. Reporting never affects control flow.
pub trait FaultSink {
    fn report(&mut self, error: MarkupError);
}

/// Default sink: forwards every fault to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFaultSink;

impl FaultSink for LogFaultSink {
    fn report(&mut self, error: MarkupError) {
        log::warn!("malformed list markup: {error}");
    }
}

/// Collects faults for later inspection.
impl FaultSink for Vec<MarkupError> {
    fn report(&mut self, error: MarkupError) {
        self.push(error);
    }
}

impl<S: FaultSink + ?Sized> FaultSink for &mut S {
    fn report(&mut self, error: MarkupError) {
        (**self).report(error);
    }
}
