pub mod query;

pub use query::{
    clause::CompiledClause,
    compiler::{FilterCompiler, HqlFilterCompiler, compile, compile_all, compile_predicate},
    error::CompileError,
    settings::CompilerSettings,
};
