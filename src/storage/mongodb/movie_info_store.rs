//! MongoDB MovieInfoStore implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ReplaceOptions;
use mongodb::{Client, Collection, IndexModel};
use moviehub_client::MovieInfo;

use super::{get_optional_str, get_str, next_id, MOVIE_INFOS_COLLECTION};
use crate::interfaces::{MovieInfoStore, Result, StorageError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// MongoDB implementation of MovieInfoStore.
pub struct MongoMovieInfoStore {
    movie_infos: Collection<Document>,
}

impl MongoMovieInfoStore {
    /// Create a new MongoDB MovieInfo store.
    pub async fn new(client: &Client, database_name: &str) -> Result<Self> {
        let database = client.database(database_name);
        let movie_infos = database.collection(MOVIE_INFOS_COLLECTION);

        let store = Self { movie_infos };
        store.init().await?;

        Ok(store)
    }

    /// Initialize indexes.
    async fn init(&self) -> Result<()> {
        // Supports GET /v1/movieinfos?year=
        let index = IndexModel::builder().keys(doc! { "year": 1 }).build();

        self.movie_infos.create_index(index).await?;

        Ok(())
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<MovieInfo>> {
        let mut cursor = self.movie_infos.find(filter).await?;

        let mut records = Vec::new();
        while cursor.advance().await? {
            let doc = cursor.deserialize_current()?;
            records.push(from_document(&doc)?);
        }

        Ok(records)
    }
}

fn to_document(id: &str, movie_info: &MovieInfo) -> Document {
    doc! {
        "_id": id,
        "name": movie_info.name.as_str(),
        "year": movie_info.year,
        "cast": movie_info.cast.clone(),
        "release_date": movie_info.release_date.map(|d| d.format(DATE_FORMAT).to_string()),
    }
}

fn from_document(doc: &Document) -> Result<MovieInfo> {
    let cast = doc
        .get_array("cast")
        .map_err(|e| StorageError::InvalidDocument(format!("cast: {}", e)))?
        .iter()
        .filter_map(|b| b.as_str().map(str::to_string))
        .collect();

    let release_date = get_optional_str(doc, "release_date")
        .map(|s| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT)
                .map_err(|e| StorageError::InvalidDocument(format!("release_date: {}", e)))
        })
        .transpose()?;

    let year = match doc.get("year") {
        Some(Bson::Int32(y)) => *y,
        Some(Bson::Int64(y)) => i32::try_from(*y)
            .map_err(|e| StorageError::InvalidDocument(format!("year: {}", e)))?,
        other => {
            return Err(StorageError::InvalidDocument(format!(
                "year: expected integer, found {:?}",
                other
            )))
        }
    };

    Ok(MovieInfo {
        id: Some(get_str(doc, "_id")?),
        name: get_str(doc, "name")?,
        year,
        cast,
        release_date,
    })
}

#[async_trait]
impl MovieInfoStore for MongoMovieInfoStore {
    async fn find_all(&self) -> Result<Vec<MovieInfo>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<MovieInfo>> {
        self.find_many(doc! { "year": year }).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MovieInfo>> {
        let result = self.movie_infos.find_one(doc! { "_id": id }).await?;

        match result {
            Some(doc) => Ok(Some(from_document(&doc)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, mut movie_info: MovieInfo) -> Result<MovieInfo> {
        let id = movie_info.id.clone().unwrap_or_else(next_id);
        let document = to_document(&id, &movie_info);

        let options = ReplaceOptions::builder().upsert(true).build();

        self.movie_infos
            .replace_one(doc! { "_id": id.as_str() }, document)
            .with_options(options)
            .await?;

        movie_info.id = Some(id);
        Ok(movie_info)
    }

    async fn replace(&self, movie_info: MovieInfo) -> Result<Option<MovieInfo>> {
        let Some(id) = movie_info.id.as_deref() else {
            return Ok(None);
        };
        let document = to_document(id, &movie_info);

        // No upsert: a record deleted since it was read stays deleted.
        let result = self
            .movie_infos
            .replace_one(doc! { "_id": id }, document)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(movie_info))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.movie_infos.delete_one(doc! { "_id": id }).await?;

        Ok(())
    }
}
