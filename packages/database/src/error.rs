#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Query error: {0}")]
    Query(#[from] rtdb_core::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    #[error("Unable to determine the database URL: configure a database URL or a project ID")]
    MissingDatabaseUrl,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rtdb_core::PathError> for Error {
    fn from(error: rtdb_core::PathError) -> Self {
        Error::Query(error.into())
    }
}
