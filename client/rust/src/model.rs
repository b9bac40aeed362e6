//! Wire model shared by the services and their clients.
//!
//! Field names follow the JSON documents exchanged over HTTP
//! (`movieInfoId`, `releaseDate`, `reviewList`, ...). Missing fields
//! deserialize to empty values so request validation can report them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Descriptive record for a single movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieInfo {
    /// Assigned by the store on first save.
    #[serde(rename = "movieInfoId")]
    pub id: Option<String>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    #[serde(alias = "release_date")]
    pub release_date: Option<NaiveDate>,
}

impl MovieInfo {
    pub fn new(
        name: impl Into<String>,
        year: i32,
        cast: Vec<String>,
        release_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            year,
            cast,
            release_date,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Copy every mutable field from `replacement`, keeping the identifier.
    pub fn apply_update(&mut self, replacement: MovieInfo) {
        self.name = replacement.name;
        self.year = replacement.year;
        self.cast = replacement.cast;
        self.release_date = replacement.release_date;
    }
}

/// Rating and comment for a movie, referencing it by MovieInfo id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    /// Assigned by the store on first save.
    #[serde(rename = "reviewId")]
    pub id: Option<String>,
    pub movie_info_id: Option<String>,
    pub comment: String,
    pub rating: f64,
}

impl Review {
    pub fn new(movie_info_id: impl Into<String>, comment: impl Into<String>, rating: f64) -> Self {
        Self {
            id: None,
            movie_info_id: Some(movie_info_id.into()),
            comment: comment.into(),
            rating,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Copy comment and rating from `replacement`. The id and the movie
    /// reference are left untouched.
    pub fn apply_update(&mut self, replacement: Review) {
        self.comment = replacement.comment;
        self.rating = replacement.rating;
    }
}

/// Aggregate view: one MovieInfo plus the reviews that reference it.
///
/// Assembled per request by the movies service; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_info: MovieInfo,
    pub review_list: Vec<Review>,
}

impl Movie {
    pub fn new(movie_info: MovieInfo, review_list: Vec<Review>) -> Self {
        Self {
            movie_info,
            review_list,
        }
    }
}
