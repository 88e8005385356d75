//! Filter expressions over document fields.
//!
//! This module provides type-safe filter construction and a visitor pattern for evaluating
//! filters in different backends.
//!
//! # Filter Expression API
//!
//! The [`Filter`] struct provides a collection of static methods for building filter expressions:
//!
//! - Comparison: `eq`, `ne`, `gt`, `gte`, `lt`, `lte`
//! - String: `starts_with`, `contains` and their `_ignore_case` variants
//! - Membership: `any_of`
//! - Logical: `and`, `or`
//!
//! Expressions can be combined using chainable methods for more complex queries:
//!
//! ```ignore
//! use docshelf::query::{DocumentField, Filter};
//!
//! let expr = Filter::starts_with_ignore_case(DocumentField::Title, "release")
//!     .and(Filter::any_of(DocumentField::AuthorId, vec!["author1", "author2"]));
//! ```

use chrono::{DateTime, Utc};

use crate::error::DocumentStoreError;

/// A document field that filter expressions can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentField {
    Id,
    Title,
    Content,
    /// The identifier of the embedded author.
    AuthorId,
    /// The display name of the embedded author.
    AuthorName,
    Created,
}

/// A value on the right-hand side of a field comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    TextList(Vec<String>),
    Timestamp(DateTime<Utc>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::TextList(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::TextList(
            values
                .into_iter()
                .map(str::to_string)
                .collect()
        )
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

/// How string operations compare text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Match {
    #[default]
    Exact,
    /// Both sides are lowercased before comparing.
    IgnoreCase,
}

/// Field comparison operators for filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOp {
    /// Equal to.
    Eq(Match),
    /// Not equal to.
    Ne(Match),
    /// Greater than.
    Gt,
    /// Greater than or equal to.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal to.
    Lte,
    /// String starts with value.
    StartsWith(Match),
    /// String contains value.
    Contains(Match),
    /// Field equals any of the values in a list.
    AnyOf(Match),
}

/// A filter expression for querying documents.
///
/// `And` over zero expressions matches every document, `Or` over zero expressions matches none.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Logical OR of multiple expressions (any must match).
    Or(Vec<Expr>),
    /// Logical NOT of an expression (inverts the result).
    Not(Box<Expr>),
    /// Field comparison expression.
    Field {
        field: DocumentField,
        op: FieldOp,
        value: FieldValue,
    },
}

impl Expr {
    /// Creates a field comparison expression.
    pub fn field(field: DocumentField, op: FieldOp, value: FieldValue) -> Self {
        Expr::Field { field, op, value }
    }

    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Combines this expression with another using logical OR.
    ///
    /// If this expression is already an OR, the other expression is appended
    /// to the list. Otherwise, a new OR expression is created.
    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut list) => {
                list.push(other);
                Expr::Or(list)
            }
            _ => Expr::Or(vec![self, other]),
        }
    }

    /// Negates this expression (logical NOT).
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }
}

/// Helper struct for constructing filter expressions.
pub struct Filter;

impl Filter {
    /// Matches documents where the field equals the value exactly.
    pub fn eq(field: DocumentField, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Eq(Match::Exact), value.into())
    }

    /// Matches documents where the field differs from the value.
    pub fn ne(field: DocumentField, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Ne(Match::Exact), value.into())
    }

    /// Matches documents where the field is greater than the value.
    pub fn gt(field: DocumentField, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Gt, value.into())
    }

    /// Matches documents where the field is greater than or equal to the value.
    pub fn gte(field: DocumentField, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Gte, value.into())
    }

    /// Matches documents where the field is less than the value.
    pub fn lt(field: DocumentField, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Lt, value.into())
    }

    /// Matches documents where the field is less than or equal to the value.
    pub fn lte(field: DocumentField, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Lte, value.into())
    }

    pub fn starts_with(field: DocumentField, prefix: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::StartsWith(Match::Exact), prefix.into())
    }

    pub fn starts_with_ignore_case(field: DocumentField, prefix: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::StartsWith(Match::IgnoreCase), prefix.into())
    }

    pub fn contains(field: DocumentField, needle: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Contains(Match::Exact), needle.into())
    }

    pub fn contains_ignore_case(field: DocumentField, needle: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Contains(Match::IgnoreCase), needle.into())
    }

    /// Matches documents where the field equals any of the listed values.
    ///
    /// An empty list matches no document.
    pub fn any_of(field: DocumentField, values: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::AnyOf(Match::Exact), values.into())
    }

    /// Combines multiple expressions such that all must match.
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    /// Combines multiple expressions such that any can match.
    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Or(exprs.into_iter().collect())
    }
}

pub trait QueryVisitor {
    type Output;
    type Error: Into<DocumentStoreError>;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_not(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error>;
    fn visit_field(
        &mut self,
        field: DocumentField,
        op: FieldOp,
        value: &FieldValue,
    ) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Or(exprs) => self.visit_or(exprs),
            Expr::Not(expr) => self.visit_not(expr),
            Expr::Field { field, op, value } => self.visit_field(*field, *op, value),
        }
    }
}
