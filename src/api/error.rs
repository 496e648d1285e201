use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure: no response from the server at all.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status that is not a session
    /// expiry. Passed through to the caller unchanged.
    #[error("HTTP {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The session could not be renewed (refresh failed, or a request
    /// expired again after its one retry). A fresh login is required.
    #[error("session expired - please log in again")]
    SessionExpired,

    /// The server answered 2xx but the body did not parse.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data around.
    /// The cut happens at a char boundary so multi-byte bodies stay valid.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut cut = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..cut],
                body.len()
            )
        }
    }

    pub fn http(status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Http {
            status,
            body: Self::truncate_body(body),
        }
    }

    /// Status code of an HTTP error response, if that is what this is.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_kept_verbatim() {
        let err = ApiError::http(reqwest::StatusCode::NOT_FOUND, "no such expedition");
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("no such expedition"));
    }

    #[test]
    fn test_multibyte_body_cut_at_char_boundary() {
        // A Cyrillic character straddles the truncation limit; the cut must
        // back up to the nearest boundary instead of panicking mid-char.
        let body = format!("{}{}", "x".repeat(499), "ошибка сервера");
        let err = ApiError::http(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        let msg = err.to_string();
        assert!(msg.contains("truncated"));
        assert!(msg.contains(&"x".repeat(499)));
    }

    #[test]
    fn test_long_body_truncated() {
        let body = "x".repeat(2000);
        let err = ApiError::http(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        let msg = err.to_string();
        assert!(msg.contains("truncated"));
        assert!(msg.len() < 700);
    }
}
