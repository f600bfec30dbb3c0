//! The boolean expression tree over predicates.

use super::{operator::Operator, path::FieldPath, predicate::Predicate};
use serde::{Deserialize, Serialize};

/// A recursive AND/OR/NOT combination of predicates.
///
/// Every composite node owns its children; trees are built once and read
/// by the compilers without mutation.
///
/// Dropping a tree is iterative, so a chain of any depth can be released.
/// The derived `Clone`, `PartialEq`, `Hash`, `Debug` and serde impls still
/// recurse once per level.
///
/// Serialized externally tagged, e.g.
/// `{"and": [{"predicate": {...}}, {"not": {"predicate": {...}}}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterExpression {
    Predicate(Predicate),
    And(Box<FilterExpression>, Box<FilterExpression>),
    Or(Box<FilterExpression>, Box<FilterExpression>),
    Not(Box<FilterExpression>),
}

impl FilterExpression {
    pub fn and(left: impl Into<FilterExpression>, right: impl Into<FilterExpression>) -> Self {
        FilterExpression::And(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn or(left: impl Into<FilterExpression>, right: impl Into<FilterExpression>) -> Self {
        FilterExpression::Or(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn not(inner: impl Into<FilterExpression>) -> Self {
        FilterExpression::Not(Box::new(inner.into()))
    }
}

impl From<Predicate> for FilterExpression {
    fn from(predicate: Predicate) -> Self {
        FilterExpression::Predicate(predicate)
    }
}

impl Drop for FilterExpression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            // Only leaves remain under `node` once this returns.
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut FilterExpression, pending: &mut Vec<Box<FilterExpression>>) {
    match node {
        FilterExpression::Predicate(_) => {}
        FilterExpression::And(left, right) | FilterExpression::Or(left, right) => {
            detach(left, pending);
            detach(right, pending);
        }
        FilterExpression::Not(inner) => detach(inner, pending),
    }
}

fn detach(child: &mut Box<FilterExpression>, pending: &mut Vec<Box<FilterExpression>>) {
    if !matches!(**child, FilterExpression::Predicate(_)) {
        let leaf = Predicate::unary(FieldPath::detached(), Operator::True);
        pending.push(std::mem::replace(child, Box::new(leaf.into())));
    }
}
