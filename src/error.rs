//! Error types for the ESPN Fantasy Football history importer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{var} environment variable is required")]
    MissingEnv { var: &'static str },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("ESPN API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("No seasons found. Check your league ID and credentials.")]
    NoSeasons,
}

impl ImportError {
    /// Whether this error means "the requested season does not exist",
    /// as opposed to an auth problem or a transport failure.
    ///
    /// ESPN reports missing seasons inconsistently: sometimes a plain 404,
    /// sometimes a 400 with an explanatory message, so the message text is
    /// inspected as well.
    pub fn is_season_absence(&self) -> bool {
        match self {
            ImportError::Api { status: 404, .. } => true,
            ImportError::Api { message, .. } => {
                let message = message.to_lowercase();
                message.contains("does not exist")
                    || message.contains("not found")
                    || message.contains("invalid")
            }
            ImportError::Http(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_is_absence() {
        let err = ImportError::Api {
            status: 404,
            message: "whatever".to_string(),
        };
        assert!(err.is_season_absence());
    }

    #[test]
    fn test_message_text_is_absence() {
        for message in [
            "League 123 does not exist",
            "Requested season Not Found",
            "Invalid seasonId supplied",
        ] {
            let err = ImportError::Api {
                status: 400,
                message: message.to_string(),
            };
            assert!(err.is_season_absence(), "expected absence for {message:?}");
        }
    }

    #[test]
    fn test_auth_failure_is_not_absence() {
        let err = ImportError::Api {
            status: 401,
            message: "You are not authorized to view this league".to_string(),
        };
        assert!(!err.is_season_absence());
    }

    #[test]
    fn test_other_variants_are_not_absence() {
        assert!(!ImportError::NoSeasons.is_season_absence());
        assert!(!ImportError::MissingEnv { var: "DATABASE_URL" }.is_season_absence());
    }
}
