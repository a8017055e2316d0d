use thiserror::Error;

/// Every way a ClickUp call or the dispatcher around it can fail.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{status} {reason} returned by {method} {url}")]
    Http {
        method: String,
        url: String,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AgentError>;

impl AgentError {
    /// HTTP status of a failed API call, if the failure was an HTTP one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AgentError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body attached to the error, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            AgentError::Http { body, .. } | AgentError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_exposes_status_and_body() {
        let err = AgentError::Http {
            method: "GET".to_string(),
            url: "https://api.clickup.com/api/v2/space/1".to_string(),
            status: 404,
            reason: "Not Found".to_string(),
            body: r#"{"err":"Space not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(r#"{"err":"Space not found"}"#));
        assert_eq!(
            err.to_string(),
            "404 Not Found returned by GET https://api.clickup.com/api/v2/space/1"
        );
    }

    #[test]
    fn config_error_has_no_status() {
        let err = AgentError::Config("missing token".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }
}
