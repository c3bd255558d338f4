use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::{serializer};

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Deleted,
    // a removal was requested for an ISBN that is not in the catalog
    Missed,
}

// DomainEvent abstracts a notification about a catalog change
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Added, json))
    }

    pub fn deleted<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Deleted, json))
    }

    pub fn missed(name: &str, key: &str) -> Self {
        Self::build(name, key, DomainEventType::Missed, String::new())
    }

    fn build(name: &str, key: &str, kind: DomainEventType, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.to_string(),
            kind,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        }
    }

    // human readable outcome of the change
    pub fn describe(&self) -> String {
        match self.kind {
            DomainEventType::Added => format!("Added {} to the library", self.key),
            DomainEventType::Deleted => {
                let title = serde_json::from_str::<serde_json::Value>(&self.json_data).ok()
                    .and_then(|v| v.get("title").and_then(|t| t.as_str()).map(str::to_string))
                    .unwrap_or_else(|| self.key.clone());
                format!("Removed {} from the library", title)
            }
            DomainEventType::Missed => format!("Book with ISBN {} not found", self.key),
        }
    }
}
