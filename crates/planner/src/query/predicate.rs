//! The operator catalog: one clause template per operator.

use super::renderer::{FALSE_CLAUSE, Render, Renderer, TRUE_CLAUSE};
use filter_model::filter::{Operator, Predicate};

impl Render for Predicate {
    fn render(&self, r: &mut Renderer) {
        let field = self.path.display_path();

        match self.operator {
            // Membership in an empty set can never hold
            Operator::In if self.values.is_empty() => r.sql.push_str(FALSE_CLAUSE),
            // Exclusion from an empty set always holds
            Operator::NotIn if self.values.is_empty() => r.sql.push_str(TRUE_CLAUSE),
            Operator::In => {
                r.sql.push_str(&field);
                r.sql.push_str(" IN (");
                r.add_param(&self.path);
                r.sql.push(')');
            }
            Operator::NotIn => {
                r.sql.push_str(&field);
                r.sql.push_str(" NOT IN (");
                r.add_param(&self.path);
                r.sql.push(')');
            }
            Operator::Prefix => {
                r.sql.push_str(&field);
                r.sql.push_str(" LIKE CONCAT(");
                r.add_param(&self.path);
                r.sql.push_str(", '%')");
            }
            Operator::Postfix => {
                r.sql.push_str(&field);
                r.sql.push_str(" LIKE CONCAT('%', ");
                r.add_param(&self.path);
                r.sql.push(')');
            }
            Operator::Infix => {
                r.sql.push_str(&field);
                r.sql.push_str(" LIKE CONCAT('%', ");
                r.add_param(&self.path);
                r.sql.push_str(", '%')");
            }
            Operator::IsNull => {
                r.sql.push_str(&field);
                r.sql.push_str(" IS NULL");
            }
            Operator::NotNull => {
                r.sql.push_str(&field);
                r.sql.push_str(" IS NOT NULL");
            }
            Operator::Lt => comparison(self, &field, " < ", r),
            Operator::Le => comparison(self, &field, " <= ", r),
            Operator::Gt => comparison(self, &field, " > ", r),
            Operator::Ge => comparison(self, &field, " >= ", r),
            Operator::True => r.sql.push_str(TRUE_CLAUSE),
            Operator::False => r.sql.push_str(FALSE_CLAUSE),
        }
    }
}

fn comparison(predicate: &Predicate, field: &str, op: &str, r: &mut Renderer) {
    r.sql.push_str(field);
    r.sql.push_str(op);
    r.add_param(&predicate.path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_model::{core::value::Value, filter::FieldPath};

    fn render(path: &str, operator: Operator, values: Vec<Value>) -> (String, Vec<String>) {
        let predicate = Predicate::new(path.parse::<FieldPath>().unwrap(), operator, values);
        let mut renderer = Renderer::new();
        predicate.render(&mut renderer);
        let clause = renderer.finish();
        (clause.as_str().to_string(), clause.params().to_vec())
    }

    #[test]
    fn test_in_and_not_in() {
        let (sql, params) = render(
            "author.name",
            Operator::In,
            vec!["Tolkien".into(), "Lewis".into()],
        );
        assert_eq!(sql, "author.name IN (:author_name)");
        assert_eq!(params, vec!["author_name"]);

        let (sql, _) = render("genre", Operator::NotIn, vec!["Horror".into()]);
        assert_eq!(sql, "genre NOT IN (:genre)");
    }

    #[test]
    fn test_empty_membership_sets_collapse_to_literals() {
        let (sql, params) = render("genre", Operator::In, vec![]);
        assert_eq!(sql, "(false)");
        assert!(params.is_empty());

        let (sql, params) = render("genre", Operator::NotIn, vec![]);
        assert_eq!(sql, "(true)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_pattern_operators() {
        let (sql, _) = render("title", Operator::Prefix, vec!["The".into()]);
        assert_eq!(sql, "title LIKE CONCAT(:title, '%')");

        let (sql, _) = render("title", Operator::Postfix, vec!["Rings".into()]);
        assert_eq!(sql, "title LIKE CONCAT('%', :title)");

        let (sql, _) = render("books.title", Operator::Infix, vec!["of".into()]);
        assert_eq!(sql, "books.title LIKE CONCAT('%', :books_title, '%')");
    }

    #[test]
    fn test_null_checks_bind_nothing() {
        let (sql, params) = render("publisher.name", Operator::IsNull, vec![]);
        assert_eq!(sql, "publisher.name IS NULL");
        assert!(params.is_empty());

        let (sql, params) = render("publisher.name", Operator::NotNull, vec!["ignored".into()]);
        assert_eq!(sql, "publisher.name IS NOT NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn test_range_comparisons() {
        let cases = [
            (Operator::Lt, "price < :price"),
            (Operator::Le, "price <= :price"),
            (Operator::Gt, "price > :price"),
            (Operator::Ge, "price >= :price"),
        ];
        for (op, expected) in cases {
            let (sql, params) = render("price", op, vec![Value::Int(10)]);
            assert_eq!(sql, expected);
            assert_eq!(params, vec!["price"]);
        }
    }

    #[test]
    fn test_literal_operators_ignore_path_and_values() {
        let (sql, params) = render("anything.at.all", Operator::True, vec![Value::Int(1)]);
        assert_eq!(sql, "(true)");
        assert!(params.is_empty());

        let (sql, params) = render("x", Operator::False, vec![]);
        assert_eq!(sql, "(false)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_every_operator_renders_its_own_parameter_list() {
        for op in Operator::ALL {
            let predicate =
                Predicate::new("a.b".parse().unwrap(), op, vec![Value::String("v".into())]);
            let mut renderer = Renderer::new();
            predicate.render(&mut renderer);
            let clause = renderer.finish();

            let expected = predicate.parameter_name().into_iter().collect::<Vec<_>>();
            assert_eq!(clause.params(), expected.as_slice(), "operator {op}");
        }
    }
}
