use std::fmt::{self, Display, Formatter};

/// The structural tags the converter cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListTag {
    /// `<ul>`
    Unordered,
    /// `<ol>`
    Ordered,
    /// `<li>`
    Item,
}

impl ListTag {
    /// Map a markup tag name to a list tag. Anything other than `ul`, `ol` or
    /// `li` (in any case) is not ours and yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("ul") {
            Some(ListTag::Unordered)
        } else if name.eq_ignore_ascii_case("ol") {
            Some(ListTag::Ordered)
        } else if name.eq_ignore_ascii_case("li") {
            Some(ListTag::Item)
        } else {
            None
        }
    }

    /// Lowercase tag name, as written in markup.
    pub fn name(&self) -> &'static str {
        match self {
            ListTag::Unordered => "ul",
            ListTag::Ordered => "ol",
            ListTag::Item => "li",
        }
    }
}

impl Display for ListTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
