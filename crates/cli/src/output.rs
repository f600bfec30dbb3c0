use crate::error::CliError;
use filter_model::filter::FieldPath;
use filter_planner::CompiledClause;
use serde::Serialize;

#[derive(Serialize)]
struct ClauseReport<'a> {
    clause: &'a str,
    params: Vec<&'a str>,
    collisions: Vec<&'a str>,
}

pub fn render_clause(clause: &CompiledClause, as_json: bool) -> Result<String, CliError> {
    if !as_json {
        return Ok(clause.to_string());
    }

    let report = ClauseReport {
        clause: clause.as_str(),
        params: clause.distinct_params(),
        collisions: clause.colliding_params(),
    };
    serde_json::to_string_pretty(&report).map_err(CliError::JsonSerialize)
}

/// The `params` listing: dotted path, bind parameter and leaf field.
pub fn describe_path(path: &FieldPath) -> String {
    format!(
        "{:<16} {}\n{:<16} :{}\n{:<16} {}",
        "Path",
        path.display_path(),
        "Parameter",
        path.parameter_name(),
        "Leaf",
        path.leaf()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report() {
        let clause = CompiledClause::new(
            "WHERE (age > :age AND age < :age)".into(),
            vec!["age".into(), "age".into()],
        );

        let rendered = render_clause(&clause, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["clause"], "WHERE (age > :age AND age < :age)");
        assert_eq!(parsed["params"], serde_json::json!(["age"]));
        assert_eq!(parsed["collisions"], serde_json::json!(["age"]));

        assert_eq!(
            render_clause(&clause, false).unwrap(),
            "WHERE (age > :age AND age < :age)"
        );
    }

    #[test]
    fn test_describe_path() {
        let path: FieldPath = "author.books.title".parse().unwrap();
        let expected = "\
Path             author.books.title
Parameter        :author_books_title
Leaf             title";
        assert_eq!(describe_path(&path), expected);
    }
}
