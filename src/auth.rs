use crate::errors::AppError;
use axum::http::HeaderMap;

pub const ADMIN_HEADER: &str = "x-admin-password";

/// Plain equality against the configured secret. An unset or empty secret
/// never matches, so the admin panel stays closed until one is configured.
pub fn check_password(secret: Option<&str>, candidate: &str) -> bool {
    match secret {
        Some(secret) if !secret.is_empty() => secret == candidate,
        _ => false,
    }
}

/// Guards write endpoints with the same secret as the login form.
pub fn require_admin(headers: &HeaderMap, secret: Option<&str>) -> Result<(), AppError> {
    let candidate = headers
        .get(ADMIN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if check_password(secret, candidate) {
        Ok(())
    } else {
        Err(AppError::unauthorized("admin password required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn matching_password_succeeds() {
        assert!(check_password(Some("hunter2"), "hunter2"));
    }

    #[test]
    fn other_values_fail() {
        assert!(!check_password(Some("hunter2"), "hunter3"));
        assert!(!check_password(Some("hunter2"), "HUNTER2"));
        assert!(!check_password(Some("hunter2"), ""));
    }

    #[test]
    fn missing_secret_never_matches() {
        assert!(!check_password(None, ""));
        assert!(!check_password(Some(""), ""));
    }

    #[test]
    fn header_gate_uses_same_comparison() {
        let mut headers = HeaderMap::new();
        assert!(require_admin(&headers, Some("s3cret")).is_err());

        headers.insert(ADMIN_HEADER, HeaderValue::from_static("s3cret"));
        assert!(require_admin(&headers, Some("s3cret")).is_ok());
        assert!(require_admin(&headers, None).is_err());
    }
}
