//! PostgreSQL rendering rules.
//!
//! Identifiers are double-quoted, tables qualify with their schema when one
//! is present, and placeholders render as `:name`. Everything else follows
//! the shared clause-assembly algorithm.

use crate::ast::{
    Identifier, Join, Operator, Placeholder, Predicate, Query, RawSql, Table,
};
use crate::compiler::{and_separated, comma_separated, quote, Visitor};

pub struct PostgresVisitor;

impl Visitor for PostgresVisitor {
    fn visit_table(&self, table: &Table) -> String {
        let mut result = match &table.schema {
            Some(schema) => format!("{}.{}", quote(schema), quote(&table.name)),
            None => quote(&table.name),
        };

        if let Some(alias) = &table.alias {
            result.push_str(" AS ");
            result.push_str(&quote(alias));
        }

        result
    }

    fn visit_identifier(&self, identifier: &Identifier) -> String {
        let mut result = match &identifier.table {
            Some(table) => format!("{}.{}", quote(table.reference()), quote(&identifier.name)),
            None => quote(&identifier.name),
        };

        if let Some(alias) = &identifier.alias {
            result.push_str(" AS ");
            result.push_str(&quote(alias));
        }

        result
    }

    fn visit_predicate(&self, predicate: &Predicate) -> String {
        let left = predicate.left.accept(self);
        let right = predicate.right.accept(self);
        let op = predicate.op.as_str();

        if predicate.op.is_logical() {
            format!("({} {} {})", left, op, right)
        } else {
            format!("{} {} {}", left, op, right)
        }
    }

    fn visit_placeholder(&self, placeholder: &Placeholder) -> String {
        format!(":{}", placeholder.name)
    }

    fn visit_query(&self, query: &Query) -> String {
        let mut parts = Vec::new();

        if query.select_fields.is_empty() {
            parts.push("SELECT *".to_owned());
        } else {
            parts.push(format!(
                "SELECT {}",
                comma_separated(self, &query.select_fields)
            ));
        }

        if let Some(table) = &query.from_table {
            parts.push(format!("FROM {}", self.visit_table(table)));
        }

        for join in &query.joins {
            parts.push(self.visit_join(join));
        }

        if !query.where_conditions.is_empty() {
            parts.push(format!(
                "WHERE {}",
                and_separated(self, &query.where_conditions)
            ));
        }

        if !query.group_by_fields.is_empty() {
            parts.push(format!(
                "GROUP BY {}",
                comma_separated(self, &query.group_by_fields)
            ));
        }

        if !query.having_conditions.is_empty() {
            parts.push(format!(
                "HAVING {}",
                and_separated(self, &query.having_conditions)
            ));
        }

        if !query.order_by_fields.is_empty() {
            let fields = query
                .order_by_fields
                .iter()
                .map(|(field, direction)| format!("{} {}", field.accept(self), direction.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("ORDER BY {}", fields));
        }

        if let Some(limit) = query.limit_value {
            parts.push(format!("LIMIT {}", limit));
        }

        if let Some(offset) = query.offset_value {
            parts.push(format!("OFFSET {}", offset));
        }

        parts.join(" ")
    }

    fn visit_join(&self, join: &Join) -> String {
        let mut result = format!("{} JOIN {}", join.kind.as_str(), self.visit_table(&join.table));

        if let Some(on) = &join.on {
            result.push_str(" ON ");
            result.push_str(&self.visit_predicate(on));
        }

        result
    }

    fn visit_operator(&self, operator: &Operator) -> String {
        let args = operator
            .args
            .iter()
            .map(|arg| arg.accept(self))
            .collect::<Vec<_>>();

        let mut result = if operator.is_algebraic() {
            format!("({})", args.join(&format!(" {} ", operator.name)))
        } else {
            format!("{}({})", operator.name.to_uppercase(), args.join(", "))
        };

        if let Some(alias) = &operator.alias {
            result.push_str(" AS ");
            result.push_str(&quote(alias));
        }

        result
    }

    fn visit_raw(&self, raw: &RawSql) -> String {
        raw.sql.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, JoinType, OrderDirection, PredicateOp, Value};

    #[test]
    fn table_with_schema_and_alias() {
        let table = Table::new("users").schema("public").alias("u");

        assert_eq!(
            PostgresVisitor.visit_table(&table),
            "\"public\".\"users\" AS \"u\""
        );
    }

    #[test]
    fn bare_table() {
        assert_eq!(PostgresVisitor.visit_table(&Table::new("users")), "\"users\"");
    }

    #[test]
    fn identifier_qualified_by_table_alias() {
        let users = Table::new("users").schema("public").alias("u");

        assert_eq!(
            PostgresVisitor.visit_identifier(&users.column("age")),
            "\"u\".\"age\""
        );
    }

    #[test]
    fn identifier_qualified_by_table_name_when_unaliased() {
        let users = Table::new("users");

        assert_eq!(
            PostgresVisitor.visit_identifier(&users.column("age")),
            "\"users\".\"age\""
        );
    }

    #[test]
    fn identifier_with_alias() {
        let identifier = Identifier::new("full_name").alias("name");

        assert_eq!(
            PostgresVisitor.visit_identifier(&identifier),
            "\"full_name\" AS \"name\""
        );
    }

    #[test]
    fn comparison_predicates_are_not_parenthesized() {
        let users = Table::new("users").alias("u");
        let condition = users.column("age").gt(18);

        assert_eq!(
            PostgresVisitor.visit_predicate(&condition),
            "\"u\".\"age\" > 18"
        );
    }

    #[test]
    fn logical_predicates_are_parenthesized() {
        let users = Table::new("users").alias("u");
        let condition = users.column("age").gt(18) & users.column("active").eq(true);

        assert_eq!(
            PostgresVisitor.visit_predicate(&condition),
            "(\"u\".\"age\" > 18 AND \"u\".\"active\" = TRUE)"
        );
    }

    #[test]
    fn every_comparison_operator_renders() {
        let id = Identifier::new("id");
        let cases = [
            (PredicateOp::Eq, "\"id\" = 3"),
            (PredicateOp::Ne, "\"id\" != 3"),
            (PredicateOp::Lt, "\"id\" < 3"),
            (PredicateOp::Le, "\"id\" <= 3"),
            (PredicateOp::Gt, "\"id\" > 3"),
            (PredicateOp::Ge, "\"id\" >= 3"),
        ];

        for (op, expected) in cases {
            let predicate = Predicate::new(op, id.clone(), 3);
            assert_eq!(PostgresVisitor.visit_predicate(&predicate), expected);
        }
    }

    #[test]
    fn placeholder_uses_colon_prefix() {
        assert_eq!(
            PostgresVisitor.visit_placeholder(&Placeholder::new("user_name")),
            ":user_name"
        );
    }

    #[test]
    fn function_operator_with_alias() {
        let operator = Operator::new("COUNT", vec![Expr::from("id")]).alias("n");

        assert_eq!(
            PostgresVisitor.visit_operator(&operator),
            "COUNT(\"id\") AS \"n\""
        );
    }

    #[test]
    fn zero_argument_operator_keeps_empty_parentheses() {
        let operator = Operator::new("NOW", vec![]);

        assert_eq!(PostgresVisitor.visit_operator(&operator), "NOW()");
    }

    #[test]
    fn algebraic_operator_renders_parenthesized_infix() {
        let orders = Table::new("orders").alias("o");
        let operator = orders.column("price") * orders.column("quantity");

        assert_eq!(
            PostgresVisitor.visit_operator(&operator),
            "(\"o\".\"price\" * \"o\".\"quantity\")"
        );
    }

    #[test]
    fn join_without_on_clause() {
        let join = Join {
            table: Table::new("orders"),
            kind: JoinType::Left,
            on: None,
        };

        assert_eq!(PostgresVisitor.visit_join(&join), "LEFT JOIN \"orders\"");
    }

    #[test]
    fn literal_renders_through_shared_default() {
        assert_eq!(PostgresVisitor.visit_literal(&Value::Null), "NULL");
        assert_eq!(PostgresVisitor.visit_literal(&Value::from("x")), "'x'");
    }

    #[test]
    fn empty_query_renders_select_star() {
        assert_eq!(PostgresVisitor.visit_query(&Query::new()), "SELECT *");
    }

    #[test]
    fn full_query_clause_ordering() {
        let users = Table::new("users").alias("u");
        let orders = Table::new("orders").alias("o");

        let query = Query::new()
            .select(users.column("name"))
            .from_table(users.clone())
            .join(orders.clone(), users.column("id").eq(orders.column("user_id")))
            .filter(users.column("age").gt(18))
            .group_by(users.column("name"))
            .having(Operator::new("COUNT", vec![Expr::from("*")]).gt(1))
            .order_by(users.column("name"), OrderDirection::Asc)
            .limit(10)
            .offset(5);

        assert_eq!(
            PostgresVisitor.visit_query(&query),
            "SELECT \"u\".\"name\" \
             FROM \"users\" AS \"u\" \
             INNER JOIN \"orders\" AS \"o\" ON \"u\".\"id\" = \"o\".\"user_id\" \
             WHERE \"u\".\"age\" > 18 \
             GROUP BY \"u\".\"name\" \
             HAVING COUNT(*) > 1 \
             ORDER BY \"u\".\"name\" ASC \
             LIMIT 10 OFFSET 5"
        );
    }
}
