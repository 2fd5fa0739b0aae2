use thiserror::Error;

/// Errors returned by a [`CountryClient`](super::CountryClient).
///
/// The `Display` text is what the profile screen shows after `Error: `.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to reach the endpoint or read its response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success HTTP status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The GraphQL response carried an `errors` array.
    #[error("{}", .messages.join("; "))]
    Graphql { messages: Vec<String> },

    /// Query succeeded but no country has that code.
    #[error("No country found for code '{code}'")]
    NotFound { code: String },

    /// Response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Short machine-friendly label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "transport",
            ClientError::Status { .. } => "status",
            ClientError::Graphql { .. } => "graphql",
            ClientError::NotFound { .. } => "not_found",
            ClientError::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_errors_join_messages() {
        let err = ClientError::Graphql {
            messages: vec!["first".into(), "second".into()],
        };
        assert_eq!(err.to_string(), "first; second");
        assert_eq!(err.kind(), "graphql");
    }

    #[test]
    fn not_found_mentions_code() {
        let err = ClientError::NotFound { code: "ZZ".into() };
        assert_eq!(err.to_string(), "No country found for code 'ZZ'");
    }

    #[test]
    fn status_error_format() {
        let err = ClientError::Status {
            status: 502,
            message: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "Server returned 502: bad gateway");
        assert_eq!(err.kind(), "status");
    }
}
