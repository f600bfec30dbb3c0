use super::{
    clause::CompiledClause,
    conjunction::render_conjunction,
    error::CompileError,
    renderer::{Render, Renderer, WHERE},
    settings::CompilerSettings,
    tree::render_tree,
};
use filter_model::filter::{FilterExpression, Predicate};
use tracing::{debug, warn};

/// A trait for compiling filter expressions into a specific format.
pub trait FilterCompiler {
    /// The type of filter that this compiler produces.
    type Output;

    /// Compile the expression tree into a filter.
    fn compile(&self, expr: &FilterExpression) -> Result<Self::Output, CompileError>;
}

/// Compiles filters into HQL `WHERE` clauses with `:name` placeholders.
///
/// Holds nothing but its settings, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct HqlFilterCompiler {
    settings: CompilerSettings,
}

impl HqlFilterCompiler {
    pub fn new(settings: CompilerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Compiles a single predicate, without the clause introducer.
    pub fn compile_predicate(&self, predicate: &Predicate) -> CompiledClause {
        let mut renderer = Renderer::new();
        predicate.render(&mut renderer);
        renderer.finish()
    }

    /// Compiles predicates into one `AND`-joined clause.
    ///
    /// Returns an empty clause for an empty input; the caller then omits the
    /// filter from the surrounding query altogether.
    pub fn compile_all<'a, I>(&self, predicates: I) -> CompiledClause
    where
        I: IntoIterator<Item = &'a Predicate>,
    {
        let mut renderer = Renderer::new();
        render_conjunction(predicates, &mut renderer);
        let clause = renderer.finish();
        self.inspect("conjunction", &clause);
        clause
    }

    fn inspect(&self, kind: &str, clause: &CompiledClause) {
        debug!(
            "Compiled {kind} filter with {} placeholder(s): {clause}",
            clause.params().len()
        );

        if self.settings.warn_on_param_collision {
            let colliding = clause.colliding_params();
            if !colliding.is_empty() {
                warn!(
                    "Parameter name(s) {colliding:?} are bound more than once in: {clause}; \
                     each occurrence receives the same value"
                );
            }
        }
    }
}

impl FilterCompiler for HqlFilterCompiler {
    type Output = CompiledClause;

    /// Compiles an expression tree. The result always starts with `WHERE `.
    fn compile(&self, expr: &FilterExpression) -> Result<CompiledClause, CompileError> {
        let mut renderer = Renderer::new();
        renderer.sql.push_str(WHERE);
        let depth = render_tree(expr, self.settings.max_depth, &mut renderer)?;
        debug!("Walked expression tree to depth {depth}");

        let clause = renderer.finish();
        self.inspect("expression", &clause);
        Ok(clause)
    }
}

/// Compiles one predicate with default settings.
pub fn compile_predicate(predicate: &Predicate) -> String {
    HqlFilterCompiler::default()
        .compile_predicate(predicate)
        .into_sql()
}

/// Compiles an `AND` conjunction with default settings.
pub fn compile_all<'a, I>(predicates: I) -> String
where
    I: IntoIterator<Item = &'a Predicate>,
{
    HqlFilterCompiler::default()
        .compile_all(predicates)
        .into_sql()
}

/// Compiles an expression tree with default settings.
pub fn compile(expr: &FilterExpression) -> Result<String, CompileError> {
    HqlFilterCompiler::default()
        .compile(expr)
        .map(CompiledClause::into_sql)
}
