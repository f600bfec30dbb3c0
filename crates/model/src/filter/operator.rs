//! The closed operator catalog.

use super::error::FilterError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Every comparison, membership, pattern, null and literal operator a
/// predicate may carry.
///
/// The set is closed: compilers match on it exhaustively, so a new operator
/// is a compile-time change. Names arriving as text (JSON documents, CLI
/// input) go through [`FromStr`], which is where unknown operators are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    /// Membership in the value set.
    In,
    /// Exclusion from the value set (`NOT IN`). Catalog name `NOT`.
    NotIn,
    Prefix,
    Postfix,
    Infix,
    IsNull,
    NotNull,
    Lt,
    Le,
    Gt,
    Ge,
    /// Always holds; ignores path and values.
    True,
    /// Never holds; ignores path and values.
    False,
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::In,
        Operator::NotIn,
        Operator::Prefix,
        Operator::Postfix,
        Operator::Infix,
        Operator::IsNull,
        Operator::NotNull,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::True,
        Operator::False,
    ];

    /// Canonical catalog name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::In => "IN",
            Operator::NotIn => "NOT",
            Operator::Prefix => "PREFIX",
            Operator::Postfix => "POSTFIX",
            Operator::Infix => "INFIX",
            Operator::IsNull => "ISNULL",
            Operator::NotNull => "NOTNULL",
            Operator::Lt => "LT",
            Operator::Le => "LE",
            Operator::Gt => "GT",
            Operator::Ge => "GE",
            Operator::True => "TRUE",
            Operator::False => "FALSE",
        }
    }

    /// Whether the compiled clause references a bind parameter.
    ///
    /// Membership operators over an empty set collapse to a literal and bind
    /// nothing.
    pub fn binds_parameter(&self, has_values: bool) -> bool {
        match self {
            Operator::In | Operator::NotIn => has_values,
            Operator::Prefix
            | Operator::Postfix
            | Operator::Infix
            | Operator::Lt
            | Operator::Le
            | Operator::Gt
            | Operator::Ge => true,
            Operator::IsNull | Operator::NotNull | Operator::True | Operator::False => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::UnsupportedOperator(s.to_string()))
    }
}

impl TryFrom<&str> for Operator {
    type Error = FilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Operator {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}
