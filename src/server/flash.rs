//! Outcome notices carried across redirects
//!
//! Mutating routes terminate in a redirect to the listing; the outcome rides
//! along as a `?notice=` query parameter instead of a server-side session.
//! Unrecognized values are ignored rather than rejected, so a hand-edited URL
//! degrades to a plain listing.

use axum::response::Redirect;
use serde::Deserialize;

/// Outcome of a mutating request, displayed as a banner on the next page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    NotFound,
    StoreFailure,
}

impl Notice {
    /// Parse from the query value, `None` for anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created" => Some(Notice::Created),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            "not-found" => Some(Notice::NotFound),
            "store-failure" => Some(Notice::StoreFailure),
            _ => None,
        }
    }

    /// The value carried in the query string
    pub fn query_value(&self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::NotFound => "not-found",
            Notice::StoreFailure => "store-failure",
        }
    }

    /// The banner text shown to the user
    ///
    /// Store failures deliberately carry no detail; the cause is in the log.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Created => "Customer added successfully!",
            Notice::Updated => "Customer updated successfully!",
            Notice::Deleted => "Customer deleted successfully!",
            Notice::NotFound => "Customer not found",
            Notice::StoreFailure => "A storage error occurred. Please try again.",
        }
    }

    /// Whether the banner renders as an error
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::NotFound | Notice::StoreFailure)
    }

    /// Redirect to the listing carrying this notice
    pub fn redirect(self) -> Redirect {
        Redirect::to(&format!("/?notice={}", self.query_value()))
    }
}

/// Query parameters accepted by the listing page
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
}

impl NoticeParams {
    /// The recognized notice, if any
    pub fn notice(&self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for notice in [
            Notice::Created,
            Notice::Updated,
            Notice::Deleted,
            Notice::NotFound,
            Notice::StoreFailure,
        ] {
            assert_eq!(Notice::parse(notice.query_value()), Some(notice));
        }
    }

    #[test]
    fn test_unrecognized_values_ignored() {
        assert_eq!(Notice::parse("shrug"), None);

        let params = NoticeParams {
            notice: Some("shrug".to_string()),
        };
        assert_eq!(params.notice(), None);
    }

    #[test]
    fn test_error_classification() {
        assert!(Notice::NotFound.is_error());
        assert!(Notice::StoreFailure.is_error());
        assert!(!Notice::Created.is_error());
    }
}
