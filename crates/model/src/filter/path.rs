//! Field paths: the traversal from a root entity through zero or more
//! relationships down to a leaf field.

use super::error::FilterError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// An ordered, non-empty sequence of step names, e.g. `author.books.title`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PathRepr", into = "Vec<String>")]
pub struct FieldPath {
    steps: Vec<String>,
}

/// Accepted JSON shapes: `["author", "name"]` or `"author.name"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathRepr {
    Steps(Vec<String>),
    Dotted(String),
}

impl FieldPath {
    pub fn new<I, S>(steps: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = steps.into_iter().map(Into::into).collect::<Vec<String>>();
        if steps.is_empty() {
            return Err(FilterError::EmptyPath);
        }
        if let Some(index) = steps.iter().position(|s| s.is_empty()) {
            return Err(FilterError::EmptyStep { index });
        }
        Ok(Self { steps })
    }

    /// A stepless path used as filler while a tree is torn down; it is
    /// never rendered.
    pub(crate) fn detached() -> Self {
        Self { steps: Vec::new() }
    }

    /// The last step, i.e. the field the path resolves to.
    pub fn leaf(&self) -> &str {
        // `new` guarantees at least one step
        self.steps.last().map(String::as_str).unwrap_or_default()
    }

    /// Steps joined with `.`, the form used inside the clause.
    pub fn display_path(&self) -> String {
        self.steps.join(".")
    }

    /// Steps joined with `_`, the bind parameter name for this path.
    ///
    /// The name depends on the path alone. Two predicates over the same path
    /// therefore reference the same parameter.
    pub fn parameter_name(&self) -> String {
        self.steps.join("_")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_path())
    }
}

impl FromStr for FieldPath {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FilterError::EmptyPath);
        }
        FieldPath::new(s.split('.'))
    }
}

impl TryFrom<PathRepr> for FieldPath {
    type Error = FilterError;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        match repr {
            PathRepr::Steps(steps) => FieldPath::new(steps),
            PathRepr::Dotted(dotted) => dotted.parse(),
        }
    }
}

impl From<FieldPath> for Vec<String> {
    fn from(path: FieldPath) -> Self {
        path.steps
    }
}
