//! The immutable node structs and their construction sugar.

use crate::ast::Expr;
use std::fmt::{Display, Formatter};
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Rem, Sub};

/// A referenced table, optionally schema-qualified and aliased.
///
/// Wherever a table shows up in rendered SQL, its alias wins over its name if
/// one is set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub name: String,
    pub schema: Option<String>,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            schema: None,
            alias: None,
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Build an identifier qualified by this table.
    ///
    /// The identifier keeps its own copy of the table data; it only needs the
    /// alias-or-name for qualification at render time.
    pub fn column(&self, name: impl Into<String>) -> Identifier {
        Identifier {
            name: name.into(),
            table: Some(self.clone()),
            alias: None,
        }
    }

    /// The name other nodes should use when referring to this table.
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// A column or field reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub name: String,
    pub table: Option<Table>,
    pub alias: Option<String>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier {
            name: name.into(),
            table: None,
            alias: None,
        }
    }

    pub fn table(mut self, table: &Table) -> Self {
        self.table = Some(table.clone());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// An inline scalar value.
///
/// Strings are wrapped in single quotes with no escaping of embedded quotes.
/// That makes literals unsafe for untrusted input; use a [`Placeholder`] and
/// bind the value in your driver instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Literals render the same under every dialect, so the formatting lives on
/// the type itself rather than in the visitors.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(text) => write!(f, "'{}'", text),
            Value::Int(number) => write!(f, "{}", number),
            Value::Float(number) => write!(f, "{}", number),
            Value::Bool(true) => write!(f, "TRUE"),
            Value::Bool(false) => write!(f, "FALSE"),
            Value::Null => write!(f, "NULL"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// A named bind parameter. Purely syntactic; it never carries a value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeholder {
    pub name: String,
}

impl Placeholder {
    pub fn new(name: impl Into<String>) -> Self {
        Placeholder { name: name.into() }
    }
}

/// Unescaped SQL text injected verbatim. The caller is responsible for
/// correctness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSql {
    pub sql: String,
}

impl RawSql {
    pub fn new(sql: impl Into<String>) -> Self {
        RawSql { sql: sql.into() }
    }
}

/// A binary condition or logical combinator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Predicate {
    pub op: PredicateOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredicateOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl PredicateOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PredicateOp::Eq => "=",
            PredicateOp::Ne => "!=",
            PredicateOp::Lt => "<",
            PredicateOp::Le => "<=",
            PredicateOp::Gt => ">",
            PredicateOp::Ge => ">=",
            PredicateOp::And => "AND",
            PredicateOp::Or => "OR",
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, PredicateOp::And | PredicateOp::Or)
    }
}

impl Predicate {
    pub fn new(op: PredicateOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Predicate {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::new(PredicateOp::And, self, other)
    }

    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::new(PredicateOp::Or, self, other)
    }
}

// `&` and `|` combine predicates, the same way the comparison builders below
// stand in for `==` and friends: SQL conditions, never booleans.

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Predicate) -> Predicate {
        self.and(rhs)
    }
}

impl BitOr for Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Predicate) -> Predicate {
        self.or(rhs)
    }
}

/// A function-style or algebraic expression (COUNT, SUM, CAST, +, -, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operator {
    pub name: String,
    pub args: Vec<Expr>,
    pub alias: Option<String>,
}

impl Operator {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Operator {
            name: name.into(),
            args,
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Algebraic operators render infix between parenthesized operands;
    /// everything else renders as `NAME(args)`.
    pub fn is_algebraic(&self) -> bool {
        matches!(self.name.as_str(), "+" | "-" | "*" | "/" | "%")
    }
}

/// A join clause. The ON condition is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Join {
    pub table: Table,
    pub kind: JoinType,
    pub on: Option<Predicate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::Full => "FULL",
        }
    }
}

/// Comparison builders for expression nodes.
///
/// Rust comparison operators must return `bool`, so unlike `+` or `&` these
/// cannot be operator overloads. They build [`Predicate`] nodes and never
/// evaluate anything.
macro_rules! impl_comparisons {
    ($type:ty) => {
        impl $type {
            pub fn eq(self, other: impl Into<Expr>) -> Predicate {
                Predicate::new(PredicateOp::Eq, self, other)
            }

            pub fn ne(self, other: impl Into<Expr>) -> Predicate {
                Predicate::new(PredicateOp::Ne, self, other)
            }

            pub fn lt(self, other: impl Into<Expr>) -> Predicate {
                Predicate::new(PredicateOp::Lt, self, other)
            }

            pub fn le(self, other: impl Into<Expr>) -> Predicate {
                Predicate::new(PredicateOp::Le, self, other)
            }

            pub fn gt(self, other: impl Into<Expr>) -> Predicate {
                Predicate::new(PredicateOp::Gt, self, other)
            }

            pub fn ge(self, other: impl Into<Expr>) -> Predicate {
                Predicate::new(PredicateOp::Ge, self, other)
            }
        }
    };
}

/// Algebraic sugar: `a + b`, `a * b` and friends build [`Operator`] nodes
/// through the coercion contract, so the right-hand side can be a node, a
/// bare column name, or a scalar.
macro_rules! impl_algebra {
    ($type:ty) => {
        impl<R: Into<Expr>> Add<R> for $type {
            type Output = Operator;

            fn add(self, rhs: R) -> Operator {
                Operator::new("+", vec![self.into(), rhs.into()])
            }
        }

        impl<R: Into<Expr>> Sub<R> for $type {
            type Output = Operator;

            fn sub(self, rhs: R) -> Operator {
                Operator::new("-", vec![self.into(), rhs.into()])
            }
        }

        impl<R: Into<Expr>> Mul<R> for $type {
            type Output = Operator;

            fn mul(self, rhs: R) -> Operator {
                Operator::new("*", vec![self.into(), rhs.into()])
            }
        }

        impl<R: Into<Expr>> Div<R> for $type {
            type Output = Operator;

            fn div(self, rhs: R) -> Operator {
                Operator::new("/", vec![self.into(), rhs.into()])
            }
        }

        impl<R: Into<Expr>> Rem<R> for $type {
            type Output = Operator;

            fn rem(self, rhs: R) -> Operator {
                Operator::new("%", vec![self.into(), rhs.into()])
            }
        }
    };
}

impl_comparisons!(Identifier);
impl_comparisons!(Operator);

impl_algebra!(Identifier);
impl_algebra!(Operator);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_reference_prefers_alias() {
        let plain = Table::new("users");
        let aliased = Table::new("users").alias("u");

        assert_eq!(plain.reference(), "users");
        assert_eq!(aliased.reference(), "u");
    }

    #[test]
    fn column_accessor_qualifies_identifier() {
        let users = Table::new("users").alias("u");
        let age = users.column("age");

        assert_eq!(age.name, "age");
        assert_eq!(age.table, Some(users));
    }

    #[test]
    fn comparison_builders_produce_predicates() {
        let users = Table::new("users");
        let condition = users.column("age").gt(18);

        assert_eq!(condition.op, PredicateOp::Gt);
        assert_eq!(*condition.right, Expr::Literal(Value::Int(18)));
    }

    #[test]
    fn comparing_two_columns_keeps_both_identifiers() {
        let left = Table::new("users").alias("u");
        let right = Table::new("orders").alias("o");
        let condition = left.column("id").eq(right.column("user_id"));

        assert!(matches!(*condition.left, Expr::Identifier(_)));
        assert!(matches!(*condition.right, Expr::Identifier(_)));
    }

    #[test]
    fn logical_combinators_nest_predicates() {
        let users = Table::new("users");
        let combined = users.column("age").gt(18) & users.column("active").eq(true);

        assert_eq!(combined.op, PredicateOp::And);
        assert!(matches!(*combined.left, Expr::Predicate(_)));
        assert!(matches!(*combined.right, Expr::Predicate(_)));
    }

    #[test]
    fn algebra_builds_operator_nodes() {
        let orders = Table::new("orders");
        let total = orders.column("price") * orders.column("quantity");

        assert_eq!(total.name, "*");
        assert!(total.is_algebraic());
        assert_eq!(total.args.len(), 2);
    }

    #[test]
    fn literal_formatting() {
        assert_eq!(Value::from("hello").to_string(), "'hello'");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Bool(true).to_string(), "TRUE");
        assert_eq!(Value::Null.to_string(), "NULL");
    }

    #[test]
    fn string_literals_are_not_escaped() {
        // Documented limitation: embedded quotes pass through untouched.
        assert_eq!(Value::from("it's").to_string(), "'it's'");
    }
}
