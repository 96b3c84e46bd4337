//! Form handling: required-field validation and UI ↔ API field translation

mod errors;
mod fields;

use serde::Deserialize;
use std::collections::HashMap;

use crate::content::{NewComment, NewPost};

pub use errors::{map_api_errors, CREATE_FAILED_MESSAGE};
pub use fields::{FieldErrors, PostField};

/// Body of the 400 response for an incomplete comment
pub const MISSING_FIELDS_MESSAGE: &str = "Faltan campos requeridos";

/// Raw create-post submission keyed by input name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CreatePostForm(HashMap<String, String>);

impl CreatePostForm {
    /// Submitted value for a field; absent inputs read as empty
    pub fn value(&self, field: PostField) -> &str {
        self.0
            .get(field.api_name())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Check every required field and build the API payload
    pub fn validate(&self) -> Result<NewPost, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in PostField::ALL {
            if self.value(field).is_empty() {
                errors.set(field, field.required_message());
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPost {
            titulo: self.value(PostField::Title).to_string(),
            contenido: self.value(PostField::Content).to_string(),
            autor: self.value(PostField::Author).to_string(),
            portada: self.value(PostField::Cover).to_string(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CreatePostForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Submission to `POST /post/:id`: either a delete or a new comment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostActionForm {
    #[serde(rename = "_method", default)]
    pub method: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

/// What a post-page submission asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAction {
    Delete,
    Comment(NewComment),
    /// Comment with a missing author or content
    Incomplete,
}

impl PostActionForm {
    pub fn action(self) -> PostAction {
        if self.method.as_deref() == Some("DELETE") {
            return PostAction::Delete;
        }

        if self.author.is_empty() || self.content.is_empty() {
            return PostAction::Incomplete;
        }

        PostAction::Comment(NewComment {
            author: self.author,
            content: self.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("titulo", "Hola mundo"),
            ("contenido", "Texto"),
            ("autor", "Ana"),
            ("portada", "https://example.com/cover.png"),
        ]
    }

    #[test]
    fn test_validate_complete_form() {
        let form: CreatePostForm = full_form().into_iter().collect();
        let payload = form.validate().unwrap();
        assert_eq!(payload.titulo, "Hola mundo");
        assert_eq!(payload.portada, "https://example.com/cover.png");
    }

    #[test]
    fn test_validate_every_missing_combination() {
        for mask in 1u8..16 {
            let missing: Vec<PostField> = PostField::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, f)| *f)
                .collect();

            let form: CreatePostForm = full_form()
                .into_iter()
                .map(|(k, v)| {
                    let field = PostField::from_api_name(k).unwrap();
                    (k, if missing.contains(&field) { "" } else { v })
                })
                .collect();

            let errors = form.validate().unwrap_err();
            for field in PostField::ALL {
                if missing.contains(&field) {
                    assert_eq!(errors.get(field), field.required_message());
                } else {
                    assert_eq!(errors.get(field), "");
                }
            }
        }
    }

    #[test]
    fn test_absent_inputs_count_as_empty() {
        let errors = CreatePostForm::default().validate().unwrap_err();
        assert_eq!(errors.title, "El título es obligatorio");
        assert_eq!(errors.cover, "La portada es obligatoria");
    }

    #[test]
    fn test_post_action_delete() {
        let form = PostActionForm {
            method: Some("DELETE".to_string()),
            ..Default::default()
        };
        assert_eq!(form.action(), PostAction::Delete);
    }

    #[test]
    fn test_post_action_comment() {
        let form = PostActionForm {
            method: None,
            author: "Luis".to_string(),
            content: "Buen post".to_string(),
        };
        assert_eq!(
            form.action(),
            PostAction::Comment(NewComment {
                author: "Luis".to_string(),
                content: "Buen post".to_string(),
            })
        );
    }

    #[test]
    fn test_post_action_incomplete() {
        let form = PostActionForm {
            method: Some("PUT".to_string()),
            author: String::new(),
            content: "Hola".to_string(),
        };
        assert_eq!(form.action(), PostAction::Incomplete);
    }
}
