//! HTTP server: page routes forwarding user actions to the content API

use anyhow::Result;
use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::form::{
    map_api_errors, CreatePostForm, FieldErrors, PostAction, PostActionForm, MISSING_FIELDS_MESSAGE,
};
use crate::helpers::post_path;
use crate::templates::STYLESHEET;
use crate::Blog;

const DELETE_FAILED_MESSAGE: &str = "Error al eliminar el post";
const COMMENT_FAILED_MESSAGE: &str = "Error al publicar el comentario";
const LIKE_FAILED_MESSAGE: &str = "Error al dar me gusta";
const RENDER_FAILED_MESSAGE: &str = "Error interno del servidor";

type SharedBlog = Arc<Blog>;

/// Build the page router
pub fn router(blog: SharedBlog) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/create", get(create_form_handler).post(create_post_handler))
        .route("/post/:id", get(post_handler).post(post_action_handler))
        .route("/post/:id/like", post(like_handler))
        .route("/static/style.css", get(stylesheet_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(blog)
}

/// Start the web server
pub async fn start(blog: Blog) -> Result<()> {
    let addr: SocketAddr = blog.config.bind_addr().parse()?;
    let url = format!("http://{}:{}", blog.config.ip, blog.config.port);

    let app = router(Arc::new(blog));

    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wrap a rendered page, or log the template failure and answer 500
fn page(rendered: Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILED_MESSAGE).into_response()
        }
    }
}

fn redirect(status: StatusCode, location: &str) -> Response {
    (status, [(header::LOCATION, location.to_string())]).into_response()
}

/// `GET /`
async fn index_handler(State(blog): State<SharedBlog>) -> Response {
    match blog.api.list_posts().await {
        Ok(posts) => page(blog.renderer.index_page(&posts, false)),
        Err(e) => {
            tracing::warn!("Failed to list posts: {}", e);
            page(blog.renderer.index_page(&[], true))
        }
    }
}

/// `GET /create`
async fn create_form_handler(State(blog): State<SharedBlog>) -> Response {
    page(blog.renderer.create_page(&FieldErrors::default()))
}

/// `POST /create`
async fn create_post_handler(
    State(blog): State<SharedBlog>,
    Form(form): Form<CreatePostForm>,
) -> Response {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return page(blog.renderer.create_page(&errors)),
    };

    tracing::info!("Sending new post to the content API: {:?}", payload);

    match blog.api.create_post(&payload).await {
        Ok(()) => redirect(StatusCode::FOUND, "/"),
        Err(e) => {
            tracing::error!(status = ?e.status(), "Failed to create post: {}", e);
            let errors = map_api_errors(e.body().unwrap_or_default());
            page(blog.renderer.create_page(&errors))
        }
    }
}

/// `GET /post/:id`
///
/// Any fetch failure renders the not-found page.
async fn post_handler(State(blog): State<SharedBlog>, Path(id): Path<String>) -> Response {
    match blog.api.get_post(&id).await {
        Ok(post) => page(blog.renderer.post_page(&post)),
        Err(e) => {
            tracing::warn!("Post {} unavailable: {}", id, e);
            page(blog.renderer.not_found_page())
        }
    }
}

/// `POST /post/:id`: delete the post or add a comment
async fn post_action_handler(
    State(blog): State<SharedBlog>,
    Path(id): Path<String>,
    Form(form): Form<PostActionForm>,
) -> Response {
    match form.action() {
        PostAction::Delete => match blog.api.delete_post(&id).await {
            Ok(()) => redirect(StatusCode::SEE_OTHER, "/"),
            Err(e) => {
                tracing::error!("Failed to delete post {}: {}", id, e);
                (StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED_MESSAGE).into_response()
            }
        },
        PostAction::Incomplete => (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE).into_response(),
        PostAction::Comment(comment) => match blog.api.add_comment(&id, &comment).await {
            Ok(()) => redirect(StatusCode::SEE_OTHER, &post_path(&id)),
            Err(e) => {
                tracing::error!("Failed to add comment to post {}: {}", id, e);
                (StatusCode::INTERNAL_SERVER_ERROR, COMMENT_FAILED_MESSAGE).into_response()
            }
        },
    }
}

/// `POST /post/:id/like`
async fn like_handler(State(blog): State<SharedBlog>, Path(id): Path<String>) -> Response {
    match blog.api.like_post(&id).await {
        Ok(()) => redirect(StatusCode::SEE_OTHER, &post_path(&id)),
        Err(e) => {
            tracing::error!("Failed to like post {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, LIKE_FAILED_MESSAGE).into_response()
        }
    }
}

/// `GET /static/style.css`
async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
