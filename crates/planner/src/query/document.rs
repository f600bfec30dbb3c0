//! Entry points for filters that arrive as JSON documents.
//!
//! Documents are untyped input: unknown operators and empty paths are
//! rejected while decoding, before anything is compiled.

use super::{
    clause::CompiledClause,
    compiler::{FilterCompiler, HqlFilterCompiler},
    error::CompileError,
};
use filter_model::filter::{FilterExpression, Predicate};

/// Decodes and compiles an expression tree document.
pub fn compile_tree_document(
    compiler: &HqlFilterCompiler,
    json: &str,
) -> Result<CompiledClause, CompileError> {
    let expr: FilterExpression = serde_json::from_str(json)?;
    compiler.compile(&expr)
}

/// Decodes a JSON array of predicates and compiles their conjunction.
pub fn compile_predicate_document(
    compiler: &HqlFilterCompiler,
    json: &str,
) -> Result<CompiledClause, CompileError> {
    let predicates: Vec<Predicate> = serde_json::from_str(json)?;
    Ok(compiler.compile_all(&predicates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operator_fails_without_output() {
        let json = r#"{"or": [
            {"predicate": {"path": "title", "operator": "INFIX", "values": [{"String": "ring"}]}},
            {"predicate": {"path": "title", "operator": "FUZZY", "values": [{"String": "ring"}]}}
        ]}"#;

        let err = compile_tree_document(&HqlFilterCompiler::default(), json).unwrap_err();
        assert!(matches!(err, CompileError::InvalidDocument(_)));
        assert!(err.to_string().contains("Operator not implemented: FUZZY"));
    }

    #[test]
    fn test_predicate_document() {
        let json = r#"[
            {"path": ["book", "genre"], "operator": "in", "values": [{"String": "SciFi"}]},
            {"path": "book.title", "operator": "notnull"}
        ]"#;

        let clause = compile_predicate_document(&HqlFilterCompiler::default(), json).unwrap();
        assert_eq!(
            clause.as_str(),
            "WHERE book.genre IN (:book_genre) AND book.title IS NOT NULL"
        );
        assert_eq!(clause.params(), ["book_genre".to_string()]);
    }
}
