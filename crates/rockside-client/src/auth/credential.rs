/*
[INPUT]:  API key or bearer token
[OUTPUT]: Authentication headers attached to every request
[POS]:    Auth layer - credential selection and header generation
[UPDATE]: When Rockside adds an authentication scheme
*/

use std::fmt;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use crate::http::{Result, RocksideError};

const APIKEY_HEADER: &str = "apikey";

/// How the client authenticates against Rockside
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Sent as `apikey: <key>`
    ApiKey(String),
    /// Sent as `Authorization: Bearer <token>`
    Token(String),
}

impl Credential {
    /// Build a credential from two optional inputs, exactly one of which must be set.
    pub fn from_parts(apikey: Option<String>, token: Option<String>) -> Result<Self> {
        match (apikey, token) {
            (Some(apikey), None) => Ok(Credential::ApiKey(apikey)),
            (None, Some(token)) => Ok(Credential::Token(token)),
            (Some(_), Some(_)) => Err(RocksideError::Config(
                "apikey and token are mutually exclusive".to_string(),
            )),
            (None, None) => Err(RocksideError::Config(
                "one of apikey or token is required".to_string(),
            )),
        }
    }

    /// Bearer token, if this credential is one
    pub fn token(&self) -> Option<&str> {
        match self {
            Credential::Token(token) => Some(token),
            Credential::ApiKey(_) => None,
        }
    }

    /// Header set carrying this credential
    pub fn headers(&self) -> Result<HeaderMap> {
        let (name, value) = match self {
            Credential::ApiKey(key) => (HeaderName::from_static(APIKEY_HEADER), key.clone()),
            Credential::Token(token) => (AUTHORIZATION, format!("Bearer {token}")),
        };

        let mut value = HeaderValue::from_str(&value).map_err(|e| {
            RocksideError::Config(format!("credential is not a valid header value: {e}"))
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(name, value);
        Ok(headers)
    }
}

// Keeps secrets out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credential::Token(_) => f.write_str("Token(***)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_exactly_one() {
        let both = Credential::from_parts(Some("k".to_string()), Some("t".to_string()));
        assert!(both.unwrap_err().is_config_error());

        let neither = Credential::from_parts(None, None);
        assert!(neither.unwrap_err().is_config_error());

        assert_eq!(
            Credential::from_parts(Some("k".to_string()), None).unwrap(),
            Credential::ApiKey("k".to_string())
        );
        assert_eq!(
            Credential::from_parts(None, Some("t".to_string())).unwrap(),
            Credential::Token("t".to_string())
        );
    }

    #[test]
    fn test_apikey_headers() {
        let headers = Credential::ApiKey("k".to_string()).headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("apikey").unwrap(), "k");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_token_headers() {
        let headers = Credential::Token("t".to_string()).headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer t");
        assert!(headers.get("apikey").is_none());
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let err = Credential::Token("bad\ntoken".to_string()).headers().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_token_accessor_and_debug() {
        assert_eq!(Credential::Token("t".to_string()).token(), Some("t"));
        assert_eq!(Credential::ApiKey("k".to_string()).token(), None);
        assert_eq!(format!("{:?}", Credential::ApiKey("secret".to_string())), "ApiKey(***)");
    }
}
