//! The node model for SQL statements.
//!
//! Everything a query is made of lives here: tables, column identifiers,
//! literals, placeholders, predicates, function operators, joins, raw SQL
//! fragments, and the query itself. All of it is gathered under one closed
//! sum type, [`Expr`], so that the dispatch in [`Expr::accept`] is exhaustive:
//! adding a node variant will not compile until every dialect visitor knows
//! how to render it.
//!
//! Every node except [`Query`] is an immutable value object. They are plain
//! `Clone` data, so the same table or identifier value can be reused across
//! as many queries as you like.

mod nodes;
mod query;

pub use nodes::{
    Identifier, Join, JoinType, Operator, Placeholder, Predicate, PredicateOp, RawSql, Table,
    Value,
};
pub use query::{OrderDirection, Query};

use crate::compiler::Visitor;

/// Any element of the AST capable of rendering itself through a visitor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Table(Table),
    Identifier(Identifier),
    Literal(Value),
    Placeholder(Placeholder),
    Predicate(Predicate),
    Operator(Operator),
    Join(Join),
    Raw(RawSql),
    Query(Box<Query>),
}

impl Expr {
    /// Double dispatch: the variant picks the visitor method, the visitor
    /// picks the dialect formatting.
    pub fn accept(&self, visitor: &dyn Visitor) -> String {
        match self {
            Expr::Table(table) => visitor.visit_table(table),
            Expr::Identifier(identifier) => visitor.visit_identifier(identifier),
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Placeholder(placeholder) => visitor.visit_placeholder(placeholder),
            Expr::Predicate(predicate) => visitor.visit_predicate(predicate),
            Expr::Operator(operator) => visitor.visit_operator(operator),
            Expr::Join(join) => visitor.visit_join(join),
            Expr::Raw(raw) => visitor.visit_raw(raw),
            Expr::Query(query) => visitor.visit_query(query),
        }
    }

    /// A NULL literal. Handy for `coalesce` fallbacks.
    pub fn null() -> Expr {
        Expr::Literal(Value::Null)
    }
}

// The coercion contract. Builder methods accept `impl Into<Expr>`, and these
// impls decide what bare inputs mean:
//   - nodes pass through unchanged,
//   - the string "*" becomes a verbatim wildcard (never quoted),
//   - any other string becomes an unqualified identifier,
//   - scalars become literals.

impl From<Table> for Expr {
    fn from(table: Table) -> Self {
        Expr::Table(table)
    }
}

impl From<Identifier> for Expr {
    fn from(identifier: Identifier) -> Self {
        Expr::Identifier(identifier)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Literal(value)
    }
}

impl From<Placeholder> for Expr {
    fn from(placeholder: Placeholder) -> Self {
        Expr::Placeholder(placeholder)
    }
}

impl From<Predicate> for Expr {
    fn from(predicate: Predicate) -> Self {
        Expr::Predicate(predicate)
    }
}

impl From<Operator> for Expr {
    fn from(operator: Operator) -> Self {
        Expr::Operator(operator)
    }
}

impl From<Join> for Expr {
    fn from(join: Join) -> Self {
        Expr::Join(join)
    }
}

impl From<RawSql> for Expr {
    fn from(raw: RawSql) -> Self {
        Expr::Raw(raw)
    }
}

impl From<Query> for Expr {
    fn from(query: Query) -> Self {
        Expr::Query(Box::new(query))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        if value == "*" {
            Expr::Raw(RawSql::new("*"))
        } else {
            Expr::Identifier(Identifier::new(value))
        }
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::from(value.as_str())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Literal(Value::Int(value as i64))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(Value::Int(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Literal(Value::Float(value))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Literal(Value::Bool(value))
    }
}
