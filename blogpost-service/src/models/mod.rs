pub mod blog_post;

pub use blog_post::{parse_post_id, BlogPost, PostFields};
