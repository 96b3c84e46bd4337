//! Content module - posts and comments owned by the content API

mod post;

pub use post::{Comment, NewComment, NewPost, Post};
