//! Post form fields and per-field error messages

use serde::Serialize;

/// A field of the create-post form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    Title,
    Content,
    Author,
    Cover,
}

/// Translation table: (field, UI name, API name).
///
/// The UI name keys `FieldErrors`; the API name is both the form input name
/// and the JSON key the content API expects.
const FIELD_TABLE: [(PostField, &str, &str); 4] = [
    (PostField::Title, "title", "titulo"),
    (PostField::Content, "content", "contenido"),
    (PostField::Author, "author", "autor"),
    (PostField::Cover, "cover", "portada"),
];

impl PostField {
    /// All fields in form order
    pub const ALL: [PostField; 4] = [
        PostField::Title,
        PostField::Content,
        PostField::Author,
        PostField::Cover,
    ];

    // Table rows follow declaration order.
    fn entry(self) -> &'static (PostField, &'static str, &'static str) {
        &FIELD_TABLE[self as usize]
    }

    /// UI-facing name (`title`)
    pub fn ui_name(self) -> &'static str {
        self.entry().1
    }

    /// API-facing name (`titulo`)
    pub fn api_name(self) -> &'static str {
        self.entry().2
    }

    /// Look up a field by its UI name
    pub fn from_ui_name(name: &str) -> Option<Self> {
        FIELD_TABLE
            .iter()
            .find(|(_, ui, _)| *ui == name)
            .map(|(field, _, _)| *field)
    }

    /// Look up a field by its API name
    pub fn from_api_name(name: &str) -> Option<Self> {
        FIELD_TABLE
            .iter()
            .find(|(_, _, api)| *api == name)
            .map(|(field, _, _)| *field)
    }

    /// Look up a field by either vocabulary
    pub fn from_any_name(name: &str) -> Option<Self> {
        Self::from_ui_name(name).or_else(|| Self::from_api_name(name))
    }

    /// Message shown when the field is left empty
    pub fn required_message(self) -> &'static str {
        match self {
            PostField::Title => "El título es obligatorio",
            PostField::Content => "El contenido es obligatorio",
            PostField::Author => "El autor es obligatorio",
            PostField::Cover => "La portada es obligatoria",
        }
    }
}

/// Per-field error messages; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub title: String,
    pub content: String,
    pub author: String,
    pub cover: String,
}

impl FieldErrors {
    /// The same message on every field
    pub fn uniform(message: &str) -> Self {
        let mut errors = Self::default();
        for field in PostField::ALL {
            errors.set(field, message);
        }
        errors
    }

    pub fn get(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Content => &self.content,
            PostField::Author => &self.author,
            PostField::Cover => &self.cover,
        }
    }

    pub fn set(&mut self, field: PostField, message: impl Into<String>) {
        let slot = match field {
            PostField::Title => &mut self.title,
            PostField::Content => &mut self.content,
            PostField::Author => &mut self.author,
            PostField::Cover => &mut self.cover,
        };
        *slot = message.into();
    }

    /// True when no field carries a message
    pub fn is_empty(&self) -> bool {
        PostField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_round_trip() {
        for field in PostField::ALL {
            assert_eq!(field.entry().0, field);
            assert_eq!(PostField::from_ui_name(field.ui_name()), Some(field));
            assert_eq!(PostField::from_api_name(field.api_name()), Some(field));
        }
    }

    #[test]
    fn test_field_table_is_bijective() {
        let mut ui: Vec<_> = PostField::ALL.iter().map(|f| f.ui_name()).collect();
        let mut api: Vec<_> = PostField::ALL.iter().map(|f| f.api_name()).collect();
        ui.sort();
        ui.dedup();
        api.sort();
        api.dedup();
        assert_eq!(ui.len(), 4);
        assert_eq!(api.len(), 4);
    }

    #[test]
    fn test_from_any_name() {
        assert_eq!(PostField::from_any_name("cover"), Some(PostField::Cover));
        assert_eq!(PostField::from_any_name("portada"), Some(PostField::Cover));
        assert_eq!(PostField::from_any_name("likes"), None);
    }

    #[test]
    fn test_uniform_and_is_empty() {
        assert!(FieldErrors::default().is_empty());
        let errors = FieldErrors::uniform("x");
        assert!(!errors.is_empty());
        assert!(PostField::ALL.iter().all(|f| errors.get(*f) == "x"));
    }
}
