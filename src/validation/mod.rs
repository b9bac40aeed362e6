//! Request body validation.
//!
//! Every field that crosses the HTTP boundary on create is checked here.
//! Violations are collected per field rather than failing on the first one,
//! then reported as a single message.

use std::collections::BTreeSet;

use moviehub_client::{MovieInfo, Review};

/// Error constants for validation failures.
pub mod errmsg {
    pub const MOVIE_INFO_NAME_MISSING: &str = "movieInfo.name must be present";
    pub const MOVIE_INFO_YEAR_NOT_POSITIVE: &str = "movieInfo.year must be a positive value";
    pub const MOVIE_INFO_CAST_MISSING: &str = "movieInfo.cast must be present";

    pub const REVIEW_MOVIE_INFO_ID_NULL: &str = "rating.movieInfoId: must not be null";
    pub const REVIEW_RATING_NEGATIVE: &str =
        "rating.negative : rating is negative and please pass a non-negative value";
}

/// Rejected request body. The message lists every violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Types that can report field-level constraint violations.
pub trait Validate {
    /// Violation messages, one per broken constraint, in any order.
    fn violations(&self) -> Vec<&'static str>;

    /// Check all constraints.
    ///
    /// Messages are sorted and de-duplicated before joining with `", "` so the
    /// result does not depend on check order.
    fn validate(&self) -> Result<(), ValidationError> {
        let messages: BTreeSet<&str> = self.violations().into_iter().collect();
        if messages.is_empty() {
            return Ok(());
        }
        Err(ValidationError(
            messages.into_iter().collect::<Vec<_>>().join(", "),
        ))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Validate for MovieInfo {
    fn violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();

        if is_blank(&self.name) {
            violations.push(errmsg::MOVIE_INFO_NAME_MISSING);
        }
        if self.year <= 0 {
            violations.push(errmsg::MOVIE_INFO_YEAR_NOT_POSITIVE);
        }
        if self.cast.is_empty() {
            violations.push(errmsg::MOVIE_INFO_CAST_MISSING);
        }
        // Each entry must be non-blank; reported with the same message.
        if self.cast.iter().any(|member| is_blank(member)) {
            violations.push(errmsg::MOVIE_INFO_CAST_MISSING);
        }

        violations
    }
}

impl Validate for Review {
    fn violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();

        if self.movie_info_id.as_deref().map_or(true, is_blank) {
            violations.push(errmsg::REVIEW_MOVIE_INFO_ID_NULL);
        }
        if self.rating < 0.0 {
            violations.push(errmsg::REVIEW_RATING_NEGATIVE);
        }

        violations
    }
}
