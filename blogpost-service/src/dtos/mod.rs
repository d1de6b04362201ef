pub mod blog_posts;

pub use blog_posts::{BlogPostRequest, BlogPostResponse, MessageResponse};
