use std::fmt;

use base64::Engine;
use http::HeaderValue;
use reqwest::header::{AUTHORIZATION, HeaderName};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Header carrying the session token issued by `/api/system/v1/auth/token`.
pub const X_AUTH_TOKEN: HeaderName = HeaderName::from_static("x-auth-token");

/// Errors raised while turning credentials into a header.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// Token contains characters that are not allowed in a header value.
    #[display("Token contains invalid characters: {message}")]
    InvalidToken {
        /// Description of the invalid characters.
        message: String,
    },

    /// Basic authentication username cannot be encoded.
    #[display("Basic auth username contains invalid characters: {message}")]
    InvalidUsername {
        /// Description of the invalid characters.
        message: String,
    },

    /// Basic authentication password cannot be encoded.
    #[display("Basic auth password contains invalid characters: {message}")]
    InvalidPassword {
        /// Description of the invalid characters.
        message: String,
    },
}

/// A string that is wiped from memory when dropped and never printed in full.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Wraps a secret value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Borrows the secret value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares the secret without exposing it.
    pub fn equals_str(&self, other: &str) -> bool {
        self.0 == other
    }

    fn mask_sensitive(value: &str) -> String {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() <= 8 {
            "***".to_string()
        } else {
            let head: String = chars.iter().take(4).collect();
            let tail: String = chars.iter().skip(chars.len() - 4).collect();
            format!("{head}...{tail}")
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecureString").field(&"[REDACTED]").finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl Serialize for SecureString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecureString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Credentials attached to every call made through a [`DnacClient`](super::DnacClient).
///
/// The controller only accepts Basic credentials on the token endpoint; every
/// other endpoint expects the token in the `X-Auth-Token` header.
///
/// ```rust
/// use dnac_core::Authentication;
///
/// let basic = Authentication::Basic {
///     username: "devnetuser".to_string(),
///     password: "Cisco123!".into(),
/// };
/// let (name, value) = basic.to_header().unwrap();
/// assert_eq!(name, "authorization");
/// assert_eq!(value, "Basic ZGV2bmV0dXNlcjpDaXNjbzEyMyE=");
///
/// let token = Authentication::Token("eyJ0eXAiOiJKV1Qi".into());
/// let (name, _) = token.to_header().unwrap();
/// assert_eq!(name, "x-auth-token");
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authentication {
    /// HTTP Basic authentication, `Authorization: Basic <base64(username:password)>`.
    Basic {
        /// The user name.
        username: String,
        /// The password.
        password: SecureString,
    },

    /// Session token, `X-Auth-Token: <token>`.
    Token(SecureString),
}

impl Authentication {
    /// Builds the `Authorization` value for Basic credentials.
    ///
    /// The token endpoint takes this value as an explicit header parameter.
    ///
    /// # Errors
    ///
    /// Fails if the user name contains a colon.
    pub fn basic_credentials(
        username: &str,
        password: &str,
    ) -> Result<String, AuthenticationError> {
        if username.contains(':') {
            return Err(AuthenticationError::InvalidUsername {
                message: "Username cannot contain colon (:) character".to_string(),
            });
        }
        let credentials =
            base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
        Ok(format!("Basic {credentials}"))
    }

    /// Converts the credentials into a header.
    ///
    /// # Errors
    ///
    /// Fails when the credentials contain characters not allowed in a header value.
    pub fn to_header(&self) -> Result<(HeaderName, HeaderValue), AuthenticationError> {
        match self {
            Self::Basic { username, password } => {
                let header_value = Self::basic_credentials(username, password.as_str())?;
                let value = HeaderValue::from_str(&header_value).map_err(|err| {
                    AuthenticationError::InvalidPassword {
                        message: err.to_string(),
                    }
                })?;
                Ok((AUTHORIZATION, value))
            }
            Self::Token(token) => {
                let value = HeaderValue::from_str(token.as_str()).map_err(|err| {
                    AuthenticationError::InvalidToken {
                        message: err.to_string(),
                    }
                })?;
                Ok((X_AUTH_TOKEN, value))
            }
        }
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => write!(f, "Basic (username: {username})"),
            Self::Token(token) => write!(f, "Token {token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_authentication() {
        let auth = Authentication::Basic {
            username: "user".to_string(),
            password: "pass".into(),
        };
        let (header_name, header_value) = auth.to_header().unwrap();

        assert_eq!(header_name, AUTHORIZATION);
        // "user:pass" base64 encoded is "dXNlcjpwYXNz"
        assert_eq!(header_value, "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_basic_authentication_rejects_colon_in_username() {
        let auth = Authentication::Basic {
            username: "us:er".to_string(),
            password: "pass".into(),
        };

        let result = auth.to_header();

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidUsername { .. })
        ));
    }

    #[test]
    fn test_token_authentication() {
        let auth = Authentication::Token("a-session-token".into());
        let (header_name, header_value) = auth.to_header().unwrap();

        assert_eq!(header_name, "x-auth-token");
        assert_eq!(header_value, "a-session-token");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let auth = Authentication::Token("bad\ntoken".into());

        let result = auth.to_header();

        assert!(matches!(result, Err(AuthenticationError::InvalidToken { .. })));
    }

    #[test]
    fn test_display_masks_secrets() {
        let auth = Authentication::Token("very-secret-token-12345".into());
        assert_eq!(auth.to_string(), "Token very...2345");

        let auth = Authentication::Basic {
            username: "admin".to_string(),
            password: "password".into(),
        };
        assert_eq!(auth.to_string(), "Basic (username: admin)");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let auth = Authentication::Token("very-secret-token-12345".into());
        let debug = format!("{auth:?}");

        assert!(!debug.contains("very-secret"));
        insta::assert_snapshot!(debug, @r#"Token("[REDACTED]")"#);
    }

    #[test]
    fn test_short_secret_is_fully_masked() {
        let secret = SecureString::from("short");

        assert_eq!(secret.to_string(), "***");
        assert!(secret.equals_str("short"));
    }
}
