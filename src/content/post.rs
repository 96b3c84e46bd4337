//! Post and Comment models as served by the content API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Post title
    #[serde(rename = "titulo", default)]
    pub title: String,

    /// Post body, one paragraph per line
    #[serde(rename = "contenido", default)]
    pub content: String,

    /// Author name
    #[serde(rename = "autor", default)]
    pub author: String,

    /// Cover image URL
    #[serde(rename = "portada", default)]
    pub cover: String,

    /// Creation date
    #[serde(default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateTime<Utc>>,

    /// Like count
    #[serde(default)]
    pub likes: u64,

    /// Comments, sent by the API as `comentarios`
    #[serde(rename = "comentarios", default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Split the content into paragraphs, one per line
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }
}

/// A comment attached to a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Commenter name
    #[serde(default)]
    pub author: String,

    /// Comment text
    #[serde(default)]
    pub content: String,

    /// Creation date
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_date")]
    pub created_at: Option<DateTime<Utc>>,

    /// Parent post identifier
    #[serde(rename = "post", default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

/// Payload for creating a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub titulo: String,
    pub contenido: String,
    pub autor: String,
    pub portada: String,
}

/// Payload for adding a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub author: String,
    pub content: String,
}

/// Accept RFC 3339 strings; anything else (null, garbage) becomes `None`
/// instead of failing the whole post.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_post_maps_comentarios() {
        let json = r#"{
            "_id": "abc123",
            "titulo": "Hola",
            "contenido": "Primera\nSegunda",
            "autor": "Ana",
            "portada": "https://example.com/a.jpg",
            "created_at": "2024-03-05T10:00:00.000Z",
            "likes": 7,
            "comentarios": [
                {"_id": "c1", "author": "Luis", "content": "Genial", "createdAt": "2024-03-06T08:30:00Z", "post": "abc123"}
            ]
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "abc123");
        assert_eq!(post.title, "Hola");
        assert_eq!(post.likes, 7);
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].author, "Luis");
        assert_eq!(post.comments[0].post_id.as_deref(), Some("abc123"));
        assert_eq!(post.paragraphs(), vec!["Primera", "Segunda"]);
    }

    #[test]
    fn test_deserialize_post_defaults() {
        let post: Post = serde_json::from_str(r#"{"_id": "x", "created_at": "ayer"}"#).unwrap();
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_serialize_new_post_uses_api_names() {
        let payload = NewPost {
            titulo: "t".to_string(),
            contenido: "c".to_string(),
            autor: "a".to_string(),
            portada: "p".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"titulo": "t", "contenido": "c", "autor": "a", "portada": "p"})
        );
    }
}
