//! SQLite rendering rules.
//!
//! Identical to PostgreSQL except for schema handling: SQLite has no schema
//! qualification in the PostgreSQL sense, so a table's schema is never
//! rendered even when one is set.

use crate::ast::{
    Identifier, Join, Operator, Placeholder, Predicate, Query, RawSql, Table,
};
use crate::compiler::{and_separated, comma_separated, quote, Visitor};

pub struct SqliteVisitor;

impl Visitor for SqliteVisitor {
    fn visit_table(&self, table: &Table) -> String {
        // The schema is dropped, not translated.
        let mut result = quote(&table.name);

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
