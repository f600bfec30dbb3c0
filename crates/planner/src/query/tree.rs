//! Composable filtering: walks an AND/OR/NOT expression tree.
//!
//! Every composite node is parenthesized, so no precedence table is needed:
//!
//! ```text
//! And(Or(A, B), Not(C))  =>  ((A OR B) AND NOT (C))
//! ```
//!
//! The walk runs on an explicit work stack rather than the call stack, so
//! tree depth is limited only by `max_depth`.

use super::{
    error::CompileError,
    renderer::{Render, Renderer},
};
use filter_model::filter::FilterExpression;

enum Step<'a> {
    Visit(&'a FilterExpression, usize),
    Emit(&'static str),
}

/// Renders `expr` without the clause introducer and returns the depth of
/// its deepest node. A lone predicate has depth 1.
///
/// On error the renderer holds partial text and must be discarded.
pub fn render_tree(
    expr: &FilterExpression,
    max_depth: Option<usize>,
    r: &mut Renderer,
) -> Result<usize, CompileError> {
    let mut stack = vec![Step::Visit(expr, 1)];
    let mut deepest = 0;

    while let Some(step) = stack.pop() {
        let (node, depth) = match step {
            Step::Emit(text) => {
                r.sql.push_str(text);
                continue;
            }
            Step::Visit(node, depth) => (node, depth),
        };

        if let Some(max_depth) = max_depth
            && depth > max_depth
        {
            return Err(CompileError::DepthExceeded { max_depth });
        }
        deepest = deepest.max(depth);

        // Pushed in reverse: the stack pops the opening text first.
        match node {
            FilterExpression::Predicate(predicate) => predicate.render(r),
            FilterExpression::And(left, right) => {
                push_binary(&mut stack, left, " AND ", right, depth)
            }
            FilterExpression::Or(left, right) => {
                push_binary(&mut stack, left, " OR ", right, depth)
            }
            FilterExpression::Not(inner) => {
                stack.push(Step::Emit(")"));
                stack.push(Step::Visit(inner, depth + 1));
                stack.push(Step::Emit("NOT ("));
            }
        }
    }

    Ok(deepest)
}

fn push_binary<'a>(
    stack: &mut Vec<Step<'a>>,
    left: &'a FilterExpression,
    joiner: &'static str,
    right: &'a FilterExpression,
    depth: usize,
) {
    stack.push(Step::Emit(")"));
    stack.push(Step::Visit(right, depth + 1));
    stack.push(Step::Emit(joiner));
    stack.push(Step::Visit(left, depth + 1));
    stack.push(Step::Emit("("));
}
