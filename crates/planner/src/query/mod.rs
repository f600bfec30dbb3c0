//! Lowers filter predicates and expression trees into HQL `WHERE` clauses
//! with named bind parameters.

pub mod clause;
pub mod compiler;
pub mod conjunction;
pub mod document;
pub mod error;
pub mod predicate;
pub mod renderer;
pub mod settings;
pub mod tree;
