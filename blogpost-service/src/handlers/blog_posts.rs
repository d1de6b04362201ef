use crate::dtos::{BlogPostRequest, BlogPostResponse, MessageResponse};
use crate::models::{BlogPost, PostFields};
use crate::startup::AppState;
use crate::utils::{JsonBody, PostIdPath};
use axum::{
    extract::State,
    Json,
};
use service_core::error::AppError;

pub async fn list_blog_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPostResponse>>, AppError> {
    let posts = state.store.list().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list blog posts");
        e
    })?;

    Ok(Json(posts.into_iter().map(BlogPostResponse::from).collect()))
}

pub async fn create_blog_post(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BlogPostRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let post = BlogPost::new(PostFields::from(request));

    state.store.insert(&post).await.map_err(|e| {
        tracing::error!(error = %e, post_id = %post.id, "Failed to create blog post");
        e
    })?;

    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(Json(
        MessageResponse::new("Blog post created successfully").with_id(post.id.to_hex()),
    ))
}

pub async fn get_blog_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> Result<Json<BlogPostResponse>, AppError> {
    let post = state
        .store
        .find(&post_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, post_id = %post_id, "Failed to fetch blog post");
            e
        })?
        .ok_or_else(|| {
            tracing::warn!(post_id = %post_id, "Blog post not found");
            AppError::NotFound(anyhow::anyhow!("Blog post not found"))
        })?;

    Ok(Json(BlogPostResponse::from(post)))
}

/// Replaces title, body and regDate together. There is no version check, so
/// of two concurrent updates the later write wins.
pub async fn update_blog_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
    JsonBody(request): JsonBody<BlogPostRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let fields = PostFields::from(request);
    let matched = state
        .store
        .replace_fields(&post_id, &fields)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, post_id = %post_id, "Failed to update blog post");
            e
        })?;

    if !matched {
        tracing::warn!(post_id = %post_id, "Blog post not found");
        return Err(AppError::NotFound(anyhow::anyhow!("Blog post not found")));
    }

    tracing::info!(post_id = %post_id, "Blog post updated");

    Ok(Json(MessageResponse::new("Blog post updated successfully")))
}

pub async fn delete_blog_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete(&post_id).await.map_err(|e| {
        tracing::error!(error = %e, post_id = %post_id, "Failed to delete blog post");
        e
    })?;

    tracing::info!(post_id = %post_id, "Blog post deleted");

    Ok(Json(MessageResponse::new("Blog post deleted successfully")))
}
