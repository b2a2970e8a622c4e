use std::fmt::{self, Display, Formatter};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// A Fragment is the smallest unit of rendered output: an owned, cheaply
/// clonable piece of text. Indentation runs are cloned onto many lines, so
/// they share one allocation through Arc<str>.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fragment(Arc<str>);

impl Fragment {
    pub fn from_str(s: &str) -> Self {
        Fragment(Arc::from(s))
    }

    pub fn from_string(s: String) -> Self {
        Fragment(Arc::from(s))
    }

    /// A run of `n` spaces.
    pub fn spaces(n: usize) -> Self {
        Fragment::from_string(" ".repeat(n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.as_str())
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::from_str(s)
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::from_string(s)
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
