//! Dialect compilation.
//!
//! A [`Visitor`] is a dialect-specific renderer with one method per node
//! variant. Nodes never format themselves (literals excepted); they hand
//! themselves to the visitor through [`Expr::accept`], and the visitor
//! recursively renders children while assembling the final SQL string.
//!
//! The clause-assembly algorithm is the same for every dialect. What differs
//! is per-node formatting, and today the only real divergence is schema
//! qualification: PostgreSQL renders `"schema"."table"`, SQLite drops the
//! schema entirely.

mod postgres;
mod sqlite;

pub use postgres::PostgresVisitor;
pub use sqlite::SqliteVisitor;

use crate::ast::{
    Expr, Identifier, Join, Operator, Placeholder, Predicate, Query, RawSql, Table, Value,
};
use crate::error::{Error, ErrorKind};
use log::debug;

/// A target SQL flavor.
///
/// Marked non-exhaustive so downstream matches stay honest when a dialect is
/// added; [`compile_to_sql`] refuses anything it has no visitor for instead
/// of silently defaulting.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

/// One rendering method per node variant. Adding a variant to [`Expr`] means
/// adding a method here, and the compiler will hold every dialect to it.
pub trait Visitor {
    fn visit_table(&self, table: &Table) -> String;
    fn visit_identifier(&self, identifier: &Identifier) -> String;
    fn visit_predicate(&self, predicate: &Predicate) -> String;
    fn visit_placeholder(&self, placeholder: &Placeholder) -> String;
    fn visit_query(&self, query: &Query) -> String;
    fn visit_join(&self, join: &Join) -> String;
    fn visit_operator(&self, operator: &Operator) -> String;
    fn visit_raw(&self, raw: &RawSql) -> String;

    /// Literals format identically under every dialect, so this one comes
    /// with a shared default.
    fn visit_literal(&self, value: &Value) -> String {
        value.to_string()
    }
}

/// Render a query as SQL text for the given dialect.
///
/// This is the sole entry point for compilation. Rendering is a pure function
/// of the node graph: the same query under the same dialect always yields the
/// same string.
pub fn compile_to_sql(query: &Query, dialect: Dialect) -> Result<String, Error> {
    debug!("compiling query for dialect {:?}", dialect);

    let visitor: Box<dyn Visitor> = match dialect {
        Dialect::Postgres => Box::new(PostgresVisitor),
        Dialect::Sqlite => Box::new(SqliteVisitor),
        // Dialect is non-exhaustive: new variants must be wired up here.
        #[allow(unreachable_patterns)]
        other => return Err(ErrorKind::UnsupportedDialect(other).into()),
    };

    Ok(visitor.visit_query(query))
}

/// Double-quote one identifier part. Both current dialects quote this way.
pub(crate) fn quote(part: &str) -> String {
    format!("\"{}\"", part)
}

pub(crate) fn comma_separated(visitor: &dyn Visitor, nodes: &[Expr]) -> String {
    nodes
        .iter()
        .map(|node| node.accept(visitor))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The implicit conjunction of a top-level WHERE/HAVING list. Distinct from
/// an explicit AND predicate node, but both produce the same keyword.
pub(crate) fn and_separated(visitor: &dyn Visitor, conditions: &[Predicate]) -> String {
    conditions
        .iter()
        .map(|condition| visitor.visit_predicate(condition))
        .collect::<Vec<_>>()
        .join(" AND ")
}
