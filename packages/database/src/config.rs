//! Where the database lives.

use serde::Deserialize;
use url::Url;

use crate::Error;

const DATABASE_URL_PATTERN: &str = "https://{}.firebaseio.com";

/// Endpoint configuration for a [`Database`](crate::Database).
///
/// An explicit `database_url` wins. Otherwise the URL is derived from
/// `project_id` as `https://<project-id>.firebaseio.com`.
///
/// ```rust
/// use rtdb_database::DatabaseConfig;
///
/// let config = DatabaseConfig::from_json(r#"{"project_id": "my-project"}"#).unwrap();
/// assert_eq!(
///     config.resolve_url().unwrap().as_str(),
///     "https://my-project.firebaseio.com/"
/// );
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default)]
    pub project_id: Option<String>,
}

impl DatabaseConfig {
    /// Parse a JSON configuration document.
    ///
    /// Unknown fields are ignored, so a service account file can be passed
    /// as-is to pick up its `project_id`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// The database URL this configuration points at.
    pub fn resolve_url(&self) -> Result<Url, Error> {
        if let Some(url) = &self.database_url {
            return Ok(Url::parse(url)?);
        }
        if let Some(project_id) = &self.project_id {
            let url = DATABASE_URL_PATTERN.replace("{}", &sanitize_project_id(project_id));
            return Ok(Url::parse(&url)?);
        }
        Err(Error::MissingDatabaseUrl)
    }
}

/// Replace everything outside `[A-Za-z0-9-]` with `-` so the ID is a valid
/// host label.
fn sanitize_project_id(project_id: &str) -> String {
    project_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
