use axum::http::StatusCode;
use crate::catalog::domain::SharedCatalog;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog: SharedCatalog,
}

impl AppState {
    pub fn new(config: Configuration, catalog: SharedCatalog) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let message = err.message().to_string();
        match err {
            // a duplicate add is a bad request, not a conflict, for this API
            CommandError::DuplicateKey { .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::Persistence { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}
