//! Flat filtering: a collection of predicates joined with `AND`.

use super::renderer::{Render, Renderer, WHERE};
use filter_model::filter::Predicate;

/// Renders `WHERE p1 AND p2 AND ...`, or nothing at all for an empty input.
///
/// Clauses follow the iteration order of `predicates`. Callers that need a
/// stable string (e.g. for caching) should pass an ordered collection; a
/// `HashSet` yields an arbitrary order.
pub fn render_conjunction<'a, I>(predicates: I, r: &mut Renderer)
where
    I: IntoIterator<Item = &'a Predicate>,
{
    for (i, predicate) in predicates.into_iter().enumerate() {
        r.sql.push_str(if i == 0 { WHERE } else { " AND " });
        predicate.render(r);
    }
}
