//! The one mutable entity in the node model.
//!
//! Every other node is a frozen value; [`Query`] accumulates clauses through
//! chainable methods until it is handed to the compiler, which only reads it.

use crate::ast::nodes::{Join, JoinType, Predicate, Table};
use crate::ast::Expr;

/// The top-level statement builder.
///
/// Chaining moves the builder through each call, so there is exactly one
/// instance and no defensive copies. Accumulating methods append in call
/// order (which is what the rendered SELECT and ORDER BY lists follow);
/// `from_table`, `limit` and `offset` overwrite their previous value.
///
/// No cross-field validation happens here: `having` without `group_by` is
/// accepted silently, and the compiler will render whatever it is given.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    pub select_fields: Vec<Expr>,
    pub from_table: Option<Table>,
    pub joins: Vec<Join>,
    pub where_conditions: Vec<Predicate>,
    pub group_by_fields: Vec<Expr>,
    pub having_conditions: Vec<Predicate>,
    pub order_by_fields: Vec<(Expr, OrderDirection)>,
    pub limit_value: Option<u64>,
    pub offset_value: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    /// Append a field to the SELECT list.
    pub fn select(mut self, field: impl Into<Expr>) -> Self {
        self.select_fields.push(field.into());
        self
    }

    /// Set the FROM table, replacing any previous one.
    pub fn from_table(mut self, table: Table) -> Self {
        self.from_table = Some(table);
        self
    }

    /// Append an INNER JOIN.
    pub fn join(self, table: Table, on: impl Into<Option<Predicate>>) -> Self {
        self.join_of_kind(table, JoinType::Inner, on)
    }

    /// Append a LEFT JOIN.
    pub fn left_join(self, table: Table, on: impl Into<Option<Predicate>>) -> Self {
        self.join_of_kind(table, JoinType::Left, on)
    }

    /// Append a RIGHT JOIN.
    pub fn right_join(self, table: Table, on: impl Into<Option<Predicate>>) -> Self {
        self.join_of_kind(table, JoinType::Right, on)
    }

    /// Append a FULL JOIN.
    pub fn full_join(self, table: Table, on: impl Into<Option<Predicate>>) -> Self {
        self.join_of_kind(table, JoinType::Full, on)
    }

    /// Append a join of an explicit kind.
    pub fn join_of_kind(
        mut self,
        table: Table,
        kind: JoinType,
        on: impl Into<Option<Predicate>>,
    ) -> Self {
        self.joins.push(Join {
            table,
            kind,
            on: on.into(),
        });
        self
    }

    /// Append a WHERE condition. Multiple conditions render joined with AND.
    ///
    /// Named `filter` because `where` is a Rust keyword.
    pub fn filter(mut self, condition: Predicate) -> Self {
        self.where_conditions.push(condition);
        self
    }

    /// Append a GROUP BY field.
    pub fn group_by(mut self, field: impl Into<Expr>) -> Self {
        self.group_by_fields.push(field.into());
        self
    }

    /// Append a HAVING condition. Multiple conditions render joined with AND.
    pub fn having(mut self, condition: Predicate) -> Self {
        self.having_conditions.push(condition);
        self
    }

    /// Append an ORDER BY field.
    pub fn order_by(mut self, field: impl Into<Expr>, direction: OrderDirection) -> Self {
        self.order_by_fields.push((field.into(), direction));
        self
    }

    /// Set the LIMIT, replacing any previous one.
    pub fn limit(mut self, value: u64) -> Self {
        self.limit_value = Some(value);
        self
    }

    /// Set the OFFSET, replacing any previous one.
    pub fn offset(mut self, value: u64) -> Self {
        self.offset_value = Some(value);
        self
    }
}
