//! Credential types

use std::fmt;

/// A DNSimple API token.
///
/// `Debug` never shows the value and there is no `Display` or `Serialize`;
/// the only way out is [`ApiToken::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a token, trimming surrounding whitespace. Returns `None` when empty.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw token, for building the `Authorization` header or writing the cache.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken([REDACTED])")
    }
}

/// Where a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    SecretManager,
    Cache,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Environment => "environment",
            Self::SecretManager => "secret manager",
            Self::Cache => "token cache",
        })
    }
}

/// Result of credential resolution.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub token: ApiToken,
    pub source: CredentialSource,
}

/// How to find the DNSimple item in the secret manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretItem {
    /// Item with exactly this title
    Title(String),
    /// First item whose URL contains this host
    UrlHost(String),
}

impl fmt::Display for SecretItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => write!(f, "item titled '{title}'"),
            Self::UrlHost(host) => write!(f, "item for '{host}'"),
        }
    }
}
