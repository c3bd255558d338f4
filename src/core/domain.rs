use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_DATA_FILE: &str = "library.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOOKUP_URL: &str = "https://openlibrary.org";

// Configuration abstracts config options for the library catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: String,
    pub bind_addr: String,
    pub lookup_url: String,
    pub lookup_timeout_secs: u64,
    pub online_search_limit: usize,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration {
            data_file: data_file.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            lookup_timeout_secs: 10,
            online_search_limit: 10,
        }
    }

    pub fn from_env() -> Self {
        let defaults = Configuration::new(DEFAULT_DATA_FILE);
        Configuration {
            data_file: env::var("LIBRARY_FILE").unwrap_or(defaults.data_file),
            bind_addr: env::var("LIBRARY_BIND_ADDR").unwrap_or(defaults.bind_addr),
            lookup_url: env::var("OPEN_LIBRARY_URL").unwrap_or(defaults.lookup_url),
            lookup_timeout_secs: parse_env("OPEN_LIBRARY_TIMEOUT_SECS", defaults.lookup_timeout_secs),
            online_search_limit: parse_env("ONLINE_SEARCH_LIMIT", defaults.online_search_limit),
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name).ok()
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}
