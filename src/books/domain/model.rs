use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is the descriptor stored in the catalog file, one per book in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("title", "author", "isbn");
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_keys() {
        let res = serde_json::from_str::<BookEntity>(
            r#"{"title": "t", "author": "a", "isbn": "1", "year": 1999}"#);
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_should_reject_missing_keys() {
        let res = serde_json::from_str::<BookEntity>(r#"{"title": "t", "isbn": "1"}"#);
        assert!(res.is_err());
    }
}
