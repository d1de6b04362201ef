use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

/// The caller-owned part of a post. Every write replaces all three fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Free-form date text supplied by the caller; never parsed.
    #[serde(rename = "regDate", default)]
    pub reg_date: String,
}

/// A document in the `blogposts` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: PostFields,
}

impl BlogPost {
    pub fn new(fields: PostFields) -> Self {
        Self {
            id: ObjectId::new(),
            fields,
        }
    }
}

/// Parses a path id into an ObjectId.
///
/// A malformed id is reported as an internal error rather than a bad request
/// or not-found, so clients see a 500 for ids the store could never hold.
pub fn parse_post_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Invalid blog post id '{}': {}", id, e)))
}
