//! Factories for SQL functions, aggregates and window functions.
//!
//! Each factory builds an [`Operator`] node with a fixed name and coerced
//! arguments; aliases attach through [`Operator::alias`]. A few factories
//! (`cast`, `date_trunc`, `extract`) smuggle their non-expression argument in
//! as a raw fragment, exactly the way the rendered SQL needs it.

use crate::ast::{Expr, Operator, RawSql};

/// `COUNT(field)`. Use [`count_star`] (or `count("*")`) for `COUNT(*)`.
pub fn count(field: impl Into<Expr>) -> Operator {
    Operator::new("COUNT", vec![field.into()])
}

/// `COUNT(*)`.
pub fn count_star() -> Operator {
    Operator::new("COUNT", vec![Expr::Raw(RawSql::new("*"))])
}

pub fn sum(field: impl Into<Expr>) -> Operator {
    Operator::new("SUM", vec![field.into()])
}

pub fn avg(field: impl Into<Expr>) -> Operator {
    Operator::new("AVG", vec![field.into()])
}

pub fn min(field: impl Into<Expr>) -> Operator {
    Operator::new("MIN", vec![field.into()])
}

pub fn max(field: impl Into<Expr>) -> Operator {
    Operator::new("MAX", vec![field.into()])
}

pub fn lower(field: impl Into<Expr>) -> Operator {
    Operator::new("LOWER", vec![field.into()])
}

pub fn upper(field: impl Into<Expr>) -> Operator {
    Operator::new("UPPER", vec![field.into()])
}

pub fn concat<I, E>(fields: I) -> Operator
where
    I: IntoIterator<Item = E>,
    E: Into<Expr>,
{
    Operator::new("CONCAT", fields.into_iter().map(Into::into).collect())
}

pub fn coalesce<I, E>(fields: I) -> Operator
where
    I: IntoIterator<Item = E>,
    E: Into<Expr>,
{
    Operator::new("COALESCE", fields.into_iter().map(Into::into).collect())
}

/// `CAST("field", AS TYPE)`. The type is injected as a raw fragment.
pub fn cast(field: impl Into<Expr>, type_name: &str) -> Operator {
    Operator::new(
        "CAST",
        vec![field.into(), Expr::Raw(RawSql::new(format!("AS {}", type_name)))],
    )
}

pub fn now() -> Operator {
    Operator::new("NOW", vec![])
}

pub fn current_date() -> Operator {
    Operator::new("CURRENT_DATE", vec![])
}

pub fn current_timestamp() -> Operator {
    Operator::new("CURRENT_TIMESTAMP", vec![])
}

/// `DATE_TRUNC('precision', "field")`. The precision is injected as a raw
/// quoted fragment.
pub fn date_trunc(precision: &str, field: impl Into<Expr>) -> Operator {
    Operator::new(
        "DATE_TRUNC",
        vec![
            Expr::Raw(RawSql::new(format!("'{}'", precision))),
            field.into(),
        ],
    )
}

/// `EXTRACT(part FROM, "field")`. The part is injected as a raw fragment.
pub fn extract(part: &str, field: impl Into<Expr>) -> Operator {
    Operator::new(
        "EXTRACT",
        vec![
            Expr::Raw(RawSql::new(format!("{} FROM", part))),
            field.into(),
        ],
    )
}

pub fn distinct(field: impl Into<Expr>) -> Operator {
    Operator::new("DISTINCT", vec![field.into()])
}

pub fn row_number() -> Operator {
    Operator::new("ROW_NUMBER", vec![])
}

pub fn rank() -> Operator {
    Operator::new("RANK", vec![])
}

pub fn dense_rank() -> Operator {
    Operator::new("DENSE_RANK", vec![])
}

pub fn lag(field: impl Into<Expr>, offset: i64) -> Operator {
    Operator::new("LAG", vec![field.into(), Expr::from(offset)])
}

pub fn lead(field: impl Into<Expr>, offset: i64) -> Operator {
    Operator::new("LEAD", vec![field.into(), Expr::from(offset)])
}
