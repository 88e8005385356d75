//! Multi-criteria search requests.
//!
//! A [`SearchCriteria`] is a plain struct of optional dimensions. Each dimension left as
//! `None` imposes no constraint; the set dimensions are combined with logical AND.
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! let criteria = SearchCriteria {
//!     title_prefixes: Some(vec!["First".to_string()]),
//!     author_ids: Some(vec!["author1".to_string()]),
//!     ..Default::default()
//! };
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value};

use crate::{
    error::DocumentStoreResult,
    query::{DocumentField, Expr, Filter},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// The title must start with every prefix, ignoring case.
    pub title_prefixes: Option<Vec<String>>,
    /// The content must contain every substring, ignoring case.
    pub contains_contents: Option<Vec<String>>,
    /// The author identifier must be one of these.
    pub author_ids: Option<Vec<String>>,
    /// Keeps documents created at or *before* this instant.
    ///
    /// The name reads as a lower bound but the filter acts as an inclusive upper bound.
    pub created_from: Option<DateTime<Utc>>,
    /// Keeps documents created at or *after* this instant.
    ///
    /// The name reads as an upper bound but the filter acts as an inclusive lower bound.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchCriteria {
    /// Criteria that match every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses criteria from JSON. Missing or `null` fields are left unset.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value does not describe criteria.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }

    /// Returns `true` if no dimension is set.
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_none()
            && self.contains_contents.is_none()
            && self.author_ids.is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }

    /// Compiles the set dimensions into a single filter expression.
    ///
    /// Returns `None` when the criteria are unconstrained.
    pub fn to_expr(&self) -> Option<Expr> {
        let mut clauses = Vec::new();

        if let Some(prefixes) = &self.title_prefixes {
            clauses.push(Filter::and(
                prefixes
                    .iter()
                    .map(|prefix| Filter::starts_with_ignore_case(DocumentField::Title, prefix.as_str()))
            ));
        }

        if let Some(needles) = &self.contains_contents {
            clauses.push(Filter::and(
                needles
                    .iter()
                    .map(|needle| Filter::contains_ignore_case(DocumentField::Content, needle.as_str()))
            ));
        }

        if let Some(author_ids) = &self.author_ids {
            clauses.push(Filter::any_of(DocumentField::AuthorId, author_ids.clone()));
        }

        if let Some(from) = self.created_from {
            clauses.push(Filter::lte(DocumentField::Created, from));
        }

        if let Some(to) = self.created_to {
            clauses.push(Filter::gte(DocumentField::Created, to));
        }

        match clauses.len() {
            0 => None,
            1 => clauses.pop(),
            _ => Some(Expr::And(clauses)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FieldOp, FieldValue, Match};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn unconstrained_criteria_compile_to_nothing() {
        let criteria = SearchCriteria::new();

        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.to_expr(), None);
    }

    #[test]
    fn empty_prefix_list_is_still_a_constraint() {
        let criteria = SearchCriteria {
            title_prefixes: Some(vec![]),
            ..Default::default()
        };

        assert!(!criteria.is_unconstrained());
        assert_eq!(criteria.to_expr(), Some(Expr::And(vec![])));
    }

    #[test]
    fn single_author_dimension_is_not_wrapped() {
        let criteria = SearchCriteria {
            author_ids: Some(vec!["author1".to_string()]),
            ..Default::default()
        };

        assert_eq!(
            criteria.to_expr(),
            Some(Expr::Field {
                field: DocumentField::AuthorId,
                op: FieldOp::AnyOf(Match::Exact),
                value: FieldValue::TextList(vec!["author1".to_string()]),
            }),
        );
    }

    #[test]
    fn timestamp_bounds_keep_their_literal_direction() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let criteria = SearchCriteria {
            created_from: Some(from),
            created_to: Some(to),
            ..Default::default()
        };

        assert_eq!(
            criteria.to_expr(),
            Some(Expr::And(vec![
                Filter::lte(DocumentField::Created, from),
                Filter::gte(DocumentField::Created, to),
            ])),
        );
    }

    #[test]
    fn from_json_leaves_missing_fields_unset() {
        let criteria = SearchCriteria::from_json(json!({
            "title_prefixes": ["First"],
            "created_to": null,
        }))
        .unwrap();

        assert_eq!(criteria.title_prefixes, Some(vec!["First".to_string()]));
        assert_eq!(criteria.contains_contents, None);
        assert_eq!(criteria.created_to, None);
    }

    #[test]
    fn from_json_rejects_wrong_shapes() {
        assert!(SearchCriteria::from_json(json!({ "author_ids": "author1" })).is_err());
    }
}
