//! REST clients for the movie-info and movie-review services.

use std::time::Duration;

use async_trait::async_trait;
use backon::Retryable;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::{debug, info, warn};

use crate::error::{ClientError, Result};
use crate::model::{MovieInfo, Review};
use crate::retry::{is_retryable, RetryPolicy};
use crate::traits::{MovieInfoSource, ReviewSource};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter used to filter reviews by movie.
pub const MOVIE_INFO_ID_PARAM: &str = "movieInfoId";

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url).map_err(|_| ClientError::InvalidUrl(base_url.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(base_url.to_string()));
    }
    Ok(url)
}

/// Build an HTTP client with the given request timeout.
///
/// One client can back both `MovieInfoClient` and `ReviewClient` through
/// their `with_http_client` constructors so they share a connection pool.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

async fn body_text(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

/// Client for `GET {movie_info_url}/{id}`.
///
/// Server errors are retried with a fixed backoff; everything else is
/// returned after the first attempt.
#[derive(Debug, Clone)]
pub struct MovieInfoClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl MovieInfoClient {
    /// Create a client for the movie-info collection URL,
    /// e.g. `http://localhost:8080/v1/movieinfos`.
    pub fn new(base_url: &str, timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        Ok(Self {
            http: build_http_client(timeout)?,
            base_url: parse_base_url(base_url)?,
            retry,
        })
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_http_client(http: Client, base_url: &str, retry: RetryPolicy) -> Result<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
            retry,
        })
    }

    fn movie_info_url(&self, movie_id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(movie_id);
        Ok(url)
    }

    /// Single attempt, with status classification.
    async fn fetch(&self, movie_id: &str) -> Result<MovieInfo> {
        let url = self.movie_info_url(movie_id)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            info!(status = status.as_u16(), movie_id, "movie info lookup failed");
            return Err(ClientError::Client {
                status: status.as_u16(),
                message: format!(
                    "There is no MovieInfo available for the passed in id: {}",
                    movie_id
                ),
            });
        }

        if status.is_client_error() {
            info!(status = status.as_u16(), movie_id, "movie info lookup failed");
            return Err(ClientError::Client {
                status: status.as_u16(),
                message: body_text(response).await,
            });
        }

        if status.is_server_error() {
            info!(status = status.as_u16(), movie_id, "movie info lookup failed");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: format!(
                    "Server exception in MoviesInfoService {}",
                    body_text(response).await
                ),
            });
        }

        Ok(response.json::<MovieInfo>().await?)
    }
}

#[async_trait]
impl MovieInfoSource for MovieInfoClient {
    async fn retrieve_movie_info(&self, movie_id: &str) -> Result<MovieInfo> {
        let movie_info = (|| async { self.fetch(movie_id).await })
            .retry(self.retry.backoff())
            .when(is_retryable)
            .notify(|err: &ClientError, delay: Duration| {
                warn!(
                    movie_id,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "retrying movie info lookup"
                );
            })
            .await?;

        debug!(movie_id, name = %movie_info.name, "movie info retrieved");
        Ok(movie_info)
    }
}

/// Client for `GET {reviews_url}?movieInfoId={id}`.
///
/// A 404 from the review service means "no reviews". Failures are not
/// retried.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    http: Client,
    base_url: Url,
}

impl ReviewClient {
    /// Create a client for the review collection URL,
    /// e.g. `http://localhost:8081/v1/reviews`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: build_http_client(timeout)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
        })
    }
}

#[async_trait]
impl ReviewSource for ReviewClient {
    async fn retrieve_reviews(&self, movie_info_id: &str) -> Result<Vec<Review>> {
        let response = self
            .http
            .get(self.base_url.clone())
            .query(&[(MOVIE_INFO_ID_PARAM, movie_info_id)])
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(movie_info_id, "no reviews for movie");
            return Ok(Vec::new());
        }

        if status.is_client_error() {
            info!(status = status.as_u16(), movie_info_id, "review lookup failed");
            return Err(ClientError::Client {
                status: status.as_u16(),
                message: body_text(response).await,
            });
        }

        if status.is_server_error() {
            info!(status = status.as_u16(), movie_info_id, "review lookup failed");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: format!(
                    "Server exception in ReviewsService {}",
                    body_text(response).await
                ),
            });
        }

        let reviews = response.json::<Vec<Review>>().await?;
        debug!(movie_info_id, count = reviews.len(), "reviews retrieved");
        Ok(reviews)
    }
}
