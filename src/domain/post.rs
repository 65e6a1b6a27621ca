use serde::{Deserialize, Serialize};

/// A blog post as returned by the remote collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Post {
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mockapi_record() {
        let json = r#"{
            "createdAt": "2024-01-05T10:00:00.000Z",
            "title": "Hello",
            "content": "Body text",
            "image": "https://example.com/a.jpg",
            "id": "1"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "1");
        assert_eq!(post.created_at, "2024-01-05T10:00:00.000Z");
        assert_eq!(post.display_title(), "Hello");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"id": "1", "title": "Hello"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn test_serializes_created_at_in_camel_case() {
        let post = Post {
            id: "7".into(),
            title: "T".into(),
            content: String::new(),
            image: String::new(),
            created_at: "2024-01-05".into(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["createdAt"], "2024-01-05");
    }

    #[test]
    fn test_blank_title_falls_back() {
        let post = Post {
            id: "7".into(),
            title: "  ".into(),
            content: String::new(),
            image: String::new(),
            created_at: String::new(),
        };
        assert_eq!(post.display_title(), "(Untitled)");
    }
}
