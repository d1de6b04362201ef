use crate::models::{BlogPost, PostFields};
use serde::{Deserialize, Serialize};

/// Body of `POST /blogposts` and `PUT /blogposts/:id`. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostRequest {
    pub title: String,
    pub body: String,
    #[serde(rename = "regDate")]
    pub reg_date: String,
}

impl From<BlogPostRequest> for PostFields {
    fn from(req: BlogPostRequest) -> Self {
        Self {
            title: req.title,
            body: req.body,
            reg_date: req.reg_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "regDate")]
    pub reg_date: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_hex(),
            title: post.fields.title,
            body: post.fields.body,
            reg_date: post.fields.reg_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
