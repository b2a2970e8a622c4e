use super::Fragment;
use std::fmt::{self, Display, Formatter};

/// A Line is a sequence of Fragments, joined only on `apply()`.
#[derive(Clone, Debug, Default)]
pub struct Line {
    fragments: Vec<Fragment>,
}

impl Line {
    pub fn new() -> Self {
        Line {
            fragments: Vec::new(),
        }
    }

    pub fn from_str(s: &str) -> Self {
        Line {
            fragments: vec![Fragment::from(s)],
        }
    }

    pub fn push<F: Into<Fragment>>(&mut self, f: F) -> &mut Self {
        self.fragments.push(f.into());
        self
    }

    /// Display width of the whole line.
    pub fn width(&self) -> usize {
        self.fragments.iter().map(Fragment::width).sum()
    }

    pub fn apply(&self) -> String {
        let mut out = String::new();
        for frag in &self.fragments {
            out.push_str(frag.as_str());
        }
        out
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.apply())
    }
}
