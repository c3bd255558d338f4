use crate::core::domain::Identifiable;
use crate::core::library::{same_isbn, SearchField};

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn isbn(&self) -> &str;

    // Title and author match on a case-insensitive substring; ISBN only matches
    // exactly since a partial ISBN identifies nothing.
    fn matches(&self, query: &str, field: SearchField) -> bool {
        let query = query.to_lowercase();
        match field {
            SearchField::Title => self.title().to_lowercase().contains(&query),
            SearchField::Author => self.author().to_lowercase().contains(&query),
            SearchField::Isbn => same_isbn(self.isbn(), &query),
            SearchField::Unknown => false,
        }
    }
}
