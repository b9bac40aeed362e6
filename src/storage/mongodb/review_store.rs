//! MongoDB ReviewStore implementation.

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::ReplaceOptions;
use mongodb::{Client, Collection, IndexModel};
use moviehub_client::Review;

use super::{get_f64, get_optional_str, get_str, next_id, REVIEWS_COLLECTION};
use crate::interfaces::{Result, ReviewStore};

/// MongoDB implementation of ReviewStore.
pub struct MongoReviewStore {
    reviews: Collection<Document>,
}

impl MongoReviewStore {
    /// Create a new MongoDB review store.
    pub async fn new(client: &Client, database_name: &str) -> Result<Self> {
        let database = client.database(database_name);
        let reviews = database.collection(REVIEWS_COLLECTION);

        let store = Self { reviews };
        store.init().await?;

        Ok(store)
    }

    /// Initialize indexes.
    async fn init(&self) -> Result<()> {
        // Supports GET /v1/reviews?movieInfoId=
        let index = IndexModel::builder()
            .keys(doc! { "movie_info_id": 1 })
            .build();

        self.reviews.create_index(index).await?;

        Ok(())
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Review>> {
        let mut cursor = self.reviews.find(filter).await?;

        let mut reviews = Vec::new();
        while cursor.advance().await? {
            let doc = cursor.deserialize_current()?;
            reviews.push(from_document(&doc)?);
        }

        Ok(reviews)
    }
}

fn to_document(id: &str, review: &Review) -> Document {
    doc! {
        "_id": id,
        "movie_info_id": review.movie_info_id.clone(),
        "comment": review.comment.as_str(),
        "rating": review.rating,
    }
}

fn from_document(doc: &Document) -> Result<Review> {
    Ok(Review {
        id: Some(get_str(doc, "_id")?),
        movie_info_id: get_optional_str(doc, "movie_info_id"),
        comment: get_optional_str(doc, "comment").unwrap_or_default(),
        rating: get_f64(doc, "rating")?,
    })
}

#[async_trait]
impl ReviewStore for MongoReviewStore {
    async fn find_all(&self) -> Result<Vec<Review>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>> {
        self.find_many(doc! { "movie_info_id": movie_info_id }).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>> {
        let result = self.reviews.find_one(doc! { "_id": id }).await?;

        match result {
            Some(doc) => Ok(Some(from_document(&doc)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, mut review: Review) -> Result<Review> {
        let id = review.id.clone().unwrap_or_else(next_id);
        let document = to_document(&id, &review);

        let options = ReplaceOptions::builder().upsert(true).build();

        self.reviews
            .replace_one(doc! { "_id": id.as_str() }, document)
            .with_options(options)
            .await?;

        review.id = Some(id);
        Ok(review)
    }

    async fn replace(&self, review: Review) -> Result<Option<Review>> {
        let Some(id) = review.id.as_deref() else {
            return Ok(None);
        };
        let document = to_document(id, &review);

        // No upsert: a record deleted since it was read stays deleted.
        let result = self
            .reviews
            .replace_one(doc! { "_id": id }, document)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(review))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.reviews.delete_one(doc! { "_id": id }).await?;

        Ok(())
    }
}
