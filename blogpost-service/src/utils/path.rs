use crate::models::parse_post_id;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// `:id` path segment parsed as a post ObjectId.
///
/// Every malformed id, including one that is not valid UTF-8 after
/// percent-decoding, is rejected as an internal error with a JSON body.
pub struct PostIdPath(pub ObjectId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for PostIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::error!(error = %e.body_text(), "Rejected blog post id");
                AppError::InternalError(anyhow::anyhow!(
                    "Invalid blog post id: {}",
                    e.body_text()
                ))
            })?;

        let post_id = parse_post_id(&id).map_err(|e| {
            tracing::error!(error = %e, "Rejected blog post id");
            e
        })?;

        Ok(PostIdPath(post_id))
    }
}
