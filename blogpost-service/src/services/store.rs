use crate::models::{BlogPost, PostFields};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Single-document operations the HTTP layer needs from a store.
///
/// Implementations give no ordering guarantees between concurrent writers;
/// the last write to a post wins.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts in the store's natural order.
    async fn list(&self) -> Result<Vec<BlogPost>, AppError>;

    async fn insert(&self, post: &BlogPost) -> Result<(), AppError>;

    async fn find(&self, id: &ObjectId) -> Result<Option<BlogPost>, AppError>;

    /// Overwrites every field of the post. Returns `false` if no post has `id`.
    async fn replace_fields(&self, id: &ObjectId, fields: &PostFields) -> Result<bool, AppError>;

    /// Removes the post if present. Deleting a missing post is not an error.
    async fn delete(&self, id: &ObjectId) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Releases the underlying connection. Called once after the server stops.
    async fn close(&self);
}

/// Process-local store kept in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    posts: RwLock<Vec<BlogPost>>,
    closed: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(AppError::ServiceUnavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl PostStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        self.ensure_open()?;
        Ok(self.posts.read().await.clone())
    }

    async fn insert(&self, post: &BlogPost) -> Result<(), AppError> {
        self.ensure_open()?;
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "Duplicate key: blog post {} already exists",
                post.id
            )));
        }
        posts.push(post.clone());
        Ok(())
    }

    async fn find(&self, id: &ObjectId) -> Result<Option<BlogPost>, AppError> {
        self.ensure_open()?;
        Ok(self.posts.read().await.iter().find(|p| &p.id == id).cloned())
    }

    async fn replace_fields(&self, id: &ObjectId, fields: &PostFields) -> Result<bool, AppError> {
        self.ensure_open()?;
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| &p.id == id) {
            Some(post) => {
                post.fields = fields.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<(), AppError> {
        self.ensure_open()?;
        self.posts.write().await.retain(|p| &p.id != id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
        tracing::info!("In-memory blog post store closed");
    }
}
