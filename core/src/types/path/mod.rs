use nutype::nutype;
use std::fmt;

/// One component of a [`Path`]. Any string is a valid segment, including the empty one.
pub type Segment = String;

pub const DEFAULT_SEPARATOR: &str = ".";

#[nutype(
    validate(not_empty),
    default = DEFAULT_SEPARATOR.to_owned(),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Default,
        Serialize,
        Deserialize,
    )
)]
pub struct Separator(String);

/// A parsed property path such as `address.street`.
///
/// Splitting is purely syntactic: `"a."` is `["a", ""]` and `""` is `[""]`,
/// so a path always has at least one segment. Displaying a path joins the
/// segments back with the separator it was parsed with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
    separator: String,
}

impl Path {
    pub fn parse(path: &str) -> Self {
        Self::split(path, DEFAULT_SEPARATOR)
    }

    pub fn parse_with(path: &str, separator: &Separator) -> Self {
        Self::split(path, separator.as_str())
    }

    fn split(path: &str, separator: &str) -> Self {
        Self {
            segments: path.split(separator).map(str::to_owned).collect(),
            separator: separator.to_owned(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(&self.separator))
    }
}
