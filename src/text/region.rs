use super::Line;
use std::fmt::{self, Display, Formatter};

/// A Region is a block of lines, joined with '\n' only on `apply()`.
#[derive(Clone, Debug, Default)]
pub struct Region {
    lines: Vec<Line>,
}

impl Region {
    pub fn new() -> Self {
        Region { lines: Vec::new() }
    }

    pub fn push_back_line(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn apply(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.apply());
        }
        out
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.apply())
    }
}
