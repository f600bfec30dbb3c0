use super::{error::FilterError, operator::Operator, path::FieldPath};
use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// A leaf filter condition: `path operator values`.
///
/// Arity is not checked. Comparison operators expect the caller to supply
/// exactly the values they need; `ISNULL`, `NOTNULL`, `TRUE` and `FALSE`
/// ignore the value set entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub path: FieldPath,
    pub operator: Operator,
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Predicate {
    pub fn new(path: FieldPath, operator: Operator, values: Vec<Value>) -> Self {
        Self {
            path,
            operator,
            values,
        }
    }

    /// Builds a predicate from textual parts, e.g. `("author.name", "in", ..)`.
    ///
    /// Fails when the path is empty or the operator is not in the catalog.
    pub fn parse(path: &str, operator: &str, values: Vec<Value>) -> Result<Self, FilterError> {
        Ok(Self::new(path.parse()?, operator.parse()?, values))
    }

    /// A predicate for operators that take no values.
    pub fn unary(path: FieldPath, operator: Operator) -> Self {
        Self::new(path, operator, Vec::new())
    }

    /// The placeholder this predicate references, if any.
    pub fn parameter_name(&self) -> Option<String> {
        self.operator
            .binds_parameter(!self.values.is_empty())
            .then(|| self.path.parameter_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_name_follows_operator() {
        let path: FieldPath = "author.name".parse().unwrap();

        let eq = Predicate::new(path.clone(), Operator::In, vec!["Tolkien".into()]);
        assert_eq!(eq.parameter_name().as_deref(), Some("author_name"));

        let empty = Predicate::new(path.clone(), Operator::In, vec![]);
        assert_eq!(empty.parameter_name(), None);

        let null = Predicate::unary(path, Operator::IsNull);
        assert_eq!(null.parameter_name(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_operator() {
        let err = Predicate::parse("title", "MATCHES", vec!["x".into()]).unwrap_err();
        assert_eq!(err, FilterError::UnsupportedOperator("MATCHES".to_string()));

        let ok = Predicate::parse("title", "infix", vec!["ring".into()]).unwrap();
        assert_eq!(ok.operator, Operator::Infix);
    }

    #[test]
    fn test_deserialize_without_values() {
        let predicate: Predicate =
            serde_json::from_str(r#"{"path": "publishDate", "operator": "isnull"}"#).unwrap();
        assert_eq!(predicate.operator, Operator::IsNull);
        assert!(predicate.values.is_empty());
    }
}
