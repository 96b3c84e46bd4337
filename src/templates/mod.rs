//! Page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Output is HTML-escaped
//! since every value rendered here comes from users via the content API.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{Comment, Post};
use crate::form::FieldErrors;
use crate::helpers;

/// Stylesheet served at `/static/style.css`
pub const STYLESHEET: &str = include_str!("theme/style.css");

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
    config: ConfigData,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("create.html", include_str!("theme/create.html")),
            ("post.html", include_str!("theme/post.html")),
            ("not_found.html", include_str!("theme/not_found.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("theme/partials/head.html"),
            ),
            (
                "partials/header.html",
                include_str!("theme/partials/header.html"),
            ),
            (
                "partials/field.html",
                include_str!("theme/partials/field.html"),
            ),
        ])?;

        tera.register_filter("date_es", date_es_filter);

        Ok(Self {
            tera,
            config: ConfigData {
                title: config.title.clone(),
                language: config.language.clone(),
            },
        })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.config);
        context
    }

    /// Create form, pristine when `errors` is empty
    pub fn create_page(&self, errors: &FieldErrors) -> Result<String> {
        let mut context = self.context();
        context.insert("errors", errors);
        self.render("create.html", &context)
    }

    /// Post detail with comments and actions
    pub fn post_page(&self, post: &Post) -> Result<String> {
        let mut context = self.context();
        context.insert("post", &PostData::from(post));
        self.render("post.html", &context)
    }

    /// Apology page for a post that couldn't be loaded
    pub fn not_found_page(&self) -> Result<String> {
        self.render("not_found.html", &self.context())
    }

    /// Home page listing; `unavailable` when the listing could not be fetched
    pub fn index_page(&self, posts: &[Post], unavailable: bool) -> Result<String> {
        let mut context = self.context();
        let posts: Vec<PostData> = posts.iter().map(PostData::from).collect();
        context.insert("posts", &posts);
        context.insert("unavailable", &unavailable);
        self.render("index.html", &context)
    }
}

/// Tera filter: RFC 3339 string to a Spanish long date, empty when unknown
fn date_es_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let formatted = value
        .as_str()
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|date| helpers::full_date_es(&date))
        .unwrap_or_default();
    Ok(tera::Value::String(formatted))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub id: String,
    /// `id` percent-encoded for use in `/post/...` links
    pub id_segment: String,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub created_at: String,
    pub likes: u64,
    pub paragraphs: Vec<String>,
    pub comments: Vec<CommentData>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            id_segment: helpers::encode_segment(&post.id),
            title: post.title.clone(),
            author: post.author.clone(),
            cover: post.cover.clone(),
            created_at: post
                .created_at
                .as_ref()
                .map(helpers::date_xml)
                .unwrap_or_default(),
            likes: post.likes,
            paragraphs: post.paragraphs().into_iter().map(str::to_string).collect(),
            comments: post.comments.iter().map(CommentData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentData {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            author: comment.author.clone(),
            content: comment.content.clone(),
            created_at: comment
                .created_at
                .as_ref()
                .map(helpers::date_xml)
                .unwrap_or_default(),
        }
    }
}
