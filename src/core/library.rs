use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Raised by the file layer when the catalog file cannot be read or written.
    Io {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn io(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Io { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // persistence failures that a best-effort load is allowed to swallow
    pub fn is_persistence(&self) -> bool {
        matches!(self, LibraryError::Io { .. } | LibraryError::Serialization { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(
            format!("io {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Io { message, reason_code } => {
                write_with_reason(f, message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write_with_reason(f, message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write_with_reason(f, message, reason_code)
            }
        }
    }
}

fn write_with_reason(f: &mut Formatter<'_>, message: &str, reason_code: &Option<String>) -> fmt::Result {
    match reason_code {
        Some(reason) => write!(f, "{} ({})", message, reason),
        None => write!(f, "{}", message),
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// SearchField selects which book attribute a local search is matched against
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Isbn,
    Unknown,
}

impl From<String> for SearchField {
    fn from(s: String) -> Self {
        SearchField::from(s.as_str())
    }
}

impl From<&str> for SearchField {
    fn from(s: &str) -> Self {
        match s {
            "title" => SearchField::Title,
            "author" => SearchField::Author,
            "isbn" => SearchField::Isbn,
            _ => SearchField::Unknown,
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Isbn => write!(f, "isbn"),
            SearchField::Unknown => write!(f, "unknown"),
        }
    }
}

// ISBNs are compared without regard to letter case (e.g. the `X` check digit),
// both when enforcing uniqueness and when searching.
pub fn same_isbn(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
