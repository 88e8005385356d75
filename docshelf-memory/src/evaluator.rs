//! Filter expression evaluation for in-memory document filtering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use docshelf_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::{DocumentField, Expr, FieldOp, FieldValue, Match, QueryVisitor},
    text,
};

/// Comparable view of a single document field or filter operand.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Comparable<'a> {
    /// Unset value (an unassigned identifier)
    Null,
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl<'a> Comparable<'a> {
    /// Reads `field` out of `document`.
    pub(crate) fn of(document: &'a Document, field: DocumentField) -> Self {
        match field {
            DocumentField::Id => document
                .id_str()
                .map(Comparable::Text)
                .unwrap_or(Comparable::Null),
            DocumentField::Title => Comparable::Text(&document.title),
            DocumentField::Content => Comparable::Text(&document.content),
            DocumentField::AuthorId => Comparable::Text(&document.author.id),
            DocumentField::AuthorName => Comparable::Text(&document.author.name),
            DocumentField::Created => Comparable::Timestamp(document.created),
        }
    }

    /// Scalar operand, or `None` for list operands.
    fn operand(value: &'a FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => Some(Comparable::Text(text)),
            FieldValue::Timestamp(ts) => Some(Comparable::Timestamp(*ts)),
            FieldValue::TextList(_) => None,
        }
    }

    fn matches(&self, other: &Comparable<'_>, mode: Match) -> bool {
        match (self, other, mode) {
            (Comparable::Null, Comparable::Null, _) => true,
            (Comparable::Text(a), Comparable::Text(b), Match::Exact) => a == b,
            (Comparable::Text(a), Comparable::Text(b), Match::IgnoreCase) => text::eq_ignore_case(a, b),
            (Comparable::Timestamp(a), Comparable::Timestamp(b), _) => a == b,
            _ => false,
        }
    }

    /// Both sides are the same kind and hold different values. An unset value differs
    /// from any set one.
    fn differs(&self, other: &Comparable<'_>, mode: Match) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => false,
            (Comparable::Null, _) | (_, Comparable::Null) => true,
            (Comparable::Text(_), Comparable::Text(_))
            | (Comparable::Timestamp(_), Comparable::Timestamp(_)) => !self.matches(other, mode),
            _ => false,
        }
    }

    fn compare(&self, other: &Comparable<'_>) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Text(a), Comparable::Text(b)) => Some(a.cmp(b)),
            (Comparable::Timestamp(a), Comparable::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> DocumentStoreResult<bool> {
        self.visit_expr(expr)
    }

    /// Clones every document that satisfies `expr`.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        expr: &Expr,
    ) -> DocumentStoreResult<Vec<Document>> {
        let mut matched = Vec::new();

        for document in documents {
            if DocumentEvaluator::new(document).evaluate(expr)? {
                matched.push(document.clone());
            }
        }

        Ok(matched)
    }
}

impl<'a> QueryVisitor for DocumentEvaluator<'a> {
    type Output = bool;
    type Error = DocumentStoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if !self.visit_expr(expr)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if self.visit_expr(expr)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn visit_not(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        Ok(!self.visit_expr(expr)?)
    }

    fn visit_field(
        &mut self,
        field: DocumentField,
        op: FieldOp,
        value: &FieldValue,
    ) -> Result<Self::Output, Self::Error> {
        let field_value = Comparable::of(self.document, field);

        Ok(match op {
            FieldOp::Eq(mode) => Comparable::operand(value)
                .is_some_and(|operand| field_value.matches(&operand, mode)),
            FieldOp::Ne(mode) => Comparable::operand(value)
                .is_some_and(|operand| field_value.differs(&operand, mode)),
            FieldOp::Gt | FieldOp::Gte | FieldOp::Lt | FieldOp::Lte => {
                match Comparable::operand(value).and_then(|operand| field_value.compare(&operand)) {
                    Some(ordering) => match op {
                        FieldOp::Gt => ordering == Ordering::Greater,
                        FieldOp::Gte => ordering != Ordering::Less,
                        FieldOp::Lt => ordering == Ordering::Less,
                        _ => ordering != Ordering::Greater,
                    },
                    None => false,
                }
            },
            FieldOp::StartsWith(mode) => match (field_value, value) {
                (Comparable::Text(left), FieldValue::Text(right)) => match mode {
                    Match::Exact => left.starts_with(right.as_str()),
                    Match::IgnoreCase => text::starts_with_ignore_case(left, right),
                },
                _ => false,
            },
            FieldOp::Contains(mode) => match (field_value, value) {
                (Comparable::Text(left), FieldValue::Text(right)) => match mode {
                    Match::Exact => left.contains(right.as_str()),
                    Match::IgnoreCase => text::contains_ignore_case(left, right),
                },
                _ => false,
            },
            FieldOp::AnyOf(mode) => match value {
                FieldValue::TextList(values) => values
                    .iter()
                    .any(|candidate| field_value.matches(&Comparable::Text(candidate), mode)),
                scalar => Comparable::operand(scalar)
                    .is_some_and(|operand| field_value.matches(&operand, mode)),
            },
        })
    }
}
