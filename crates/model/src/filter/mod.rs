//! Filter model: field paths, the operator catalog, predicates and the
//! boolean expression tree that combines them.

pub mod error;
pub mod expr;
pub mod operator;
pub mod path;
pub mod predicate;

pub use error::FilterError;
pub use expr::FilterExpression;
pub use operator::Operator;
pub use path::FieldPath;
pub use predicate::Predicate;
