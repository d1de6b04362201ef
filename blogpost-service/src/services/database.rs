use crate::models::{BlogPost, PostFields};
use crate::services::metrics::record_store_operation;
use crate::services::store::PostStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::time::Instant;

const BLOG_POSTS_COLLECTION: &str = "blogposts";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn blog_posts(&self) -> Collection<BlogPost> {
        self.db.collection(BLOG_POSTS_COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl PostStore for MongoDb {
    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        let start = Instant::now();
        let result = async {
            let cursor = self.blog_posts().find(None, None).await?;
            cursor.try_collect::<Vec<_>>().await
        }
        .await;
        record_store_operation("list", result.is_ok(), start.elapsed());

        Ok(result?)
    }

    async fn insert(&self, post: &BlogPost) -> Result<(), AppError> {
        let start = Instant::now();
        let result = self.blog_posts().insert_one(post, None).await;
        record_store_operation("insert", result.is_ok(), start.elapsed());

        result?;
        tracing::debug!(post_id = %post.id, "Inserted blog post");
        Ok(())
    }

    async fn find(&self, id: &ObjectId) -> Result<Option<BlogPost>, AppError> {
        let start = Instant::now();
        let result = self.blog_posts().find_one(doc! { "_id": *id }, None).await;
        record_store_operation("find", result.is_ok(), start.elapsed());

        Ok(result?)
    }

    async fn replace_fields(&self, id: &ObjectId, fields: &PostFields) -> Result<bool, AppError> {
        let start = Instant::now();
        let result = self
            .blog_posts()
            .update_one(
                doc! { "_id": *id },
                doc! {
                    "$set": {
                        "title": fields.title.as_str(),
                        "body": fields.body.as_str(),
                        "regDate": fields.reg_date.as_str(),
                    }
                },
                None,
            )
            .await;
        record_store_operation("replace_fields", result.is_ok(), start.elapsed());

        Ok(result?.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> Result<(), AppError> {
        let start = Instant::now();
        let result = self.blog_posts().delete_one(doc! { "_id": *id }, None).await;
        record_store_operation("delete", result.is_ok(), start.elapsed());

        let deleted = result?.deleted_count;
        tracing::debug!(post_id = %id, deleted, "Deleted blog post");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
