//! Defines the rendering trait and the buffer that clause text and bind
//! parameter names accumulate in.

use super::clause::CompiledClause;
use filter_model::filter::FieldPath;

/// Clause introducer prepended to a compiled filter.
pub const WHERE: &str = "WHERE ";

/// Clause for a condition that always holds.
pub const TRUE_CLAUSE: &str = "(true)";

/// Clause for a condition that never holds.
pub const FALSE_CLAUSE: &str = "(false)";

/// A trait for any filter node that renders into a clause fragment.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Holds the state of a single compilation.
///
/// Every placeholder written through [`Renderer::add_param`] is recorded, in
/// emission order, so the caller knows which names to bind.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
    pub params: Vec<String>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the compiled clause.
    pub fn finish(self) -> CompiledClause {
        CompiledClause::new(self.sql, self.params)
    }

    /// Writes the `:name` placeholder for `path`.
    pub fn add_param(&mut self, path: &FieldPath) {
        let name = path.parameter_name();
        self.sql.push(':');
        self.sql.push_str(&name);
        self.params.push(name);
    }
}
