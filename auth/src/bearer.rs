use thiserror::Error;

/// Authorization scheme accepted by [`extract_bearer`].
pub const BEARER_SCHEME: &str = "Bearer";

/// Error type for bearer credential extraction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    MalformedHeader,
}

/// Extract the token from an `Authorization` header value.
///
/// Accepts exactly `Bearer <token>`: one scheme, one space, one non-empty
/// token. Extra spaces or segments are rejected, nothing is trimmed.
///
/// # Errors
/// * `MissingHeader` - Header is absent or empty
/// * `MalformedHeader` - Wrong scheme or not exactly two space-separated parts
pub fn extract_bearer(header: Option<&str>) -> Result<&str, BearerError> {
    let value = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BearerError::MissingHeader),
    };

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(BearerError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token() {
        assert_eq!(extract_bearer(Some("Bearer abc123")), Ok("abc123"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(None), Err(BearerError::MissingHeader));
        assert_eq!(extract_bearer(Some("")), Err(BearerError::MissingHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            extract_bearer(Some("Basic abc123")),
            Err(BearerError::MalformedHeader)
        );
        assert_eq!(
            extract_bearer(Some("bearer abc123")),
            Err(BearerError::MalformedHeader)
        );
    }

    #[test]
    fn test_wrong_part_count() {
        assert_eq!(
            extract_bearer(Some("Bearer a b")),
            Err(BearerError::MalformedHeader)
        );
        assert_eq!(
            extract_bearer(Some("Bearer")),
            Err(BearerError::MalformedHeader)
        );
        assert_eq!(
            extract_bearer(Some("abc123")),
            Err(BearerError::MalformedHeader)
        );
    }

    #[test]
    fn test_no_whitespace_tolerance() {
        assert_eq!(
            extract_bearer(Some("Bearer  abc123")),
            Err(BearerError::MalformedHeader)
        );
        assert_eq!(
            extract_bearer(Some("Bearer ")),
            Err(BearerError::MalformedHeader)
        );
        assert_eq!(
            extract_bearer(Some(" Bearer abc123")),
            Err(BearerError::MalformedHeader)
        );
    }
}
