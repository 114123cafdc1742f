//! sqlforge builds SQL statements programmatically: you assemble an abstract
//! representation of a query from immutable nodes, and a dialect compiler
//! renders it to SQL text for PostgreSQL or SQLite.
//!
//! ```
//! use sqlforge::{compile_to_sql, query, table, Dialect};
//!
//! let users = table("users").alias("u");
//!
//! let q = query()
//!     .select(users.column("name"))
//!     .select(users.column("age"))
//!     .from_table(users.clone())
//!     .filter(users.column("age").gt(18))
//!     .limit(10);
//!
//! let sql = compile_to_sql(&q, Dialect::Postgres)?;
//! assert_eq!(
//!     sql,
//!     "SELECT \"u\".\"name\", \"u\".\"age\" FROM \"users\" AS \"u\" \
//!      WHERE \"u\".\"age\" > 18 LIMIT 10"
//! );
//! # Ok::<(), sqlforge::Error>(())
//! ```
//!
//! This crate only goes AST → text. It never parses SQL, never talks to a
//! database, and never binds parameter values; placeholders are purely
//! syntactic and belong to whatever driver executes the statement.

pub mod ast;
pub mod compiler;
mod error;
pub mod operators;


pub use ast::{
    Expr, Identifier, Join, JoinType, Operator, OrderDirection, Placeholder, Predicate,
    PredicateOp, Query, RawSql, Table, Value,
};
pub use compiler::{compile_to_sql, Dialect, PostgresVisitor, SqliteVisitor, Visitor};
pub use error::{Error, ErrorKind};
pub use operators::*;

/// Create a table reference. Schema and alias attach through the chainable
/// setters.
pub fn table(name: impl Into<String>) -> Table {
    Table::new(name)
}

/// Create a bare column identifier. Qualify it with [`Identifier::table`] or
/// build it from a table with [`Table::column`].
pub fn identifier(name: impl Into<String>) -> Identifier {
    Identifier::new(name)
}

/// Create a named bind parameter.
pub fn placeholder(name: impl Into<String>) -> Placeholder {
    Placeholder::new(name)
}

/// Create a raw SQL node for verbatim injection.
pub fn raw(sql: impl Into<String>) -> RawSql {
    RawSql::new(sql)
}

/// Identity passthrough, kept for call-site readability:
/// `.filter(predicate(a.eq(b)))` reads as well as the SQL it produces.
pub fn predicate(condition: Predicate) -> Predicate {
    condition
}

/// Create an empty query builder.
pub fn query() -> Query {
    Query::new()
}
