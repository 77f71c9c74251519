//! Credential extractor for protected routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use disclo_core::auth::{select_credential, PASSWORD_HEADER};
use tracing::warn;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameter names accepted for the credential.
const PASSWORD_QUERY_KEYS: &[&str] = &[PASSWORD_HEADER, "password"];

/// A request that presented a valid credential. Holds the credential.
#[derive(Debug, Clone)]
pub struct Authorized(pub String);

impl FromRequestParts<AppState> for Authorized {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok());
        let query = parts.uri.query().and_then(password_from_query);

        let candidate = select_credential(header, query.as_deref());
        match state.credentials.verify(candidate) {
            Ok(password) => Ok(Authorized(password.to_string())),
            Err(e) => {
                warn!(path = %parts.uri.path(), "Rejected request with invalid password");
                Err(e.into())
            }
        }
    }
}

fn password_from_query(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| PASSWORD_QUERY_KEYS.contains(&key.as_ref()))
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_from_query() {
        assert_eq!(
            password_from_query("url=x&X-Password=friday_A66").as_deref(),
            Some("friday_A66")
        );
        assert_eq!(password_from_query("password=shares_B88").as_deref(), Some("shares_B88"));
        assert_eq!(password_from_query("url=x"), None);
    }
}
